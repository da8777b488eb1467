use tracing_subscriber::EnvFilter;
use zeitkonto::commands::Cli;
use zeitkonto::libs::messages::macros::is_debug_mode;
use zeitkonto::msg_error;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zeitkonto=debug")))
            .with_target(false)
            .init();
    }

    if let Err(error) = Cli::menu().await {
        msg_error!(error);
        std::process::exit(1);
    }
}
