//! Interactive to-do list in the terminal.
//!
//! Reads commands from stdin, draws the list on stdout and logs to stderr.

use tasklist::{new_store, Config, Shell};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        theme = %config.theme,
        max_feedback_depth = config.max_feedback_depth,
        "Starting task list"
    );

    let shell = Shell::new(new_store(config.store_config()), config.theme.palette());
    let mut stdout = tokio::io::stdout();
    shell
        .run(BufReader::new(tokio::io::stdin()), &mut stdout)
        .await?;

    let summary = shell.store().state(tasklist::TaskListState::summary).await;
    tracing::info!(%summary, "Session ended");
    Ok(())
}
