use anyhow::Result;
use sitelog::commands::Cli;
use sitelog::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging only in debug mode; user-facing output stays on
    // plain stdout otherwise.
    if is_debug_mode() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Cli::menu().await
}
