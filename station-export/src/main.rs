use std::process::ExitCode;

use station_export::{ExportConfig, FeedStatus, run_once};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = ExportConfig::default();

    match run_once(&config).await {
        Ok(summary) => {
            let feed = match &summary.feed {
                FeedStatus::Fetched => "fetched".to_string(),
                FeedStatus::Unavailable { reason } => format!("unavailable ({reason})"),
            };
            info!(
                %feed,
                exported = summary.exported,
                skipped = summary.skipped,
                "wrote {}",
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "station export failed");
            ExitCode::FAILURE
        }
    }
}
