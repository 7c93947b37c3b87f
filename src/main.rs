use taskflow::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // The msg_* macros route output through tracing when debug mode is
    // active, so a subscriber must be installed before the first message.
    if std::env::var("TASKFLOW_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskflow=debug")))
            .init();
    }

    Cli::menu()
}
