use tokio::net::TcpListener;

use pipecheck::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pipecheck=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();
    print_banner(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git_sha = env!("GIT_SHA"),
        "pipecheck starting"
    );

    let app = pipecheck::routes::router();

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .expect("failed to bind");

    let actual_port = listener
        .local_addr()
        .expect("failed to get local address")
        .port();
    eprintln!(
        "  \x1b[32m→ listening on {}:{actual_port}\x1b[0m",
        config.host
    );
    eprintln!();

    axum::serve(listener, app).await.expect("server error");
}

fn print_banner(config: &Config) {
    let version = env!("CARGO_PKG_VERSION");
    let git_sha = env!("GIT_SHA");

    eprintln!();
    eprintln!("  \x1b[1;36mpipecheck\x1b[0m \x1b[2mv{version}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mgit\x1b[0m          {git_sha}");
    eprintln!("  \x1b[2mhost\x1b[0m         {}", config.host);
    eprintln!("  \x1b[2mport\x1b[0m         {}", config.port);
    eprintln!();
}
