use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::info;

use audit_sink::{logging, run, AppConfig, Dependencies, SinkError};

#[tokio::main]
async fn main() -> Result<(), SinkError> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    logging::init_logging(config.log_format);

    let dependencies = Dependencies::new(config).await?;

    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received shutdown signal");
            signal_token.cancel();
        }
    });

    let stdin = BufReader::new(tokio::io::stdin());
    let summary = run(&dependencies.orchestrator, stdin, &cancel).await?;

    info!(
        processed = summary.processed,
        failed = summary.failed,
        "Audit sink shutdown complete"
    );
    Ok(())
}
