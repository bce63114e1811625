//! One fetch → parse → export cycle.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::stations::{
    FetchFailure, FetchOutcome, ParsedStations, StationClient, StationError, StationSource,
    parse_stations, write_stations,
};

/// Whether the feed produced a document this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    /// The feed answered with a document
    Fetched,
    /// The feed could not be read; the export is empty
    Unavailable { reason: FetchFailure },
}

/// Outcome of a completed run.
///
/// An unavailable feed and a feed with zero stations write the same `[]`
/// file; `feed` tells them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub feed: FeedStatus,
    /// Stations written to the output file
    pub exported: usize,
    /// Elements dropped because they could not be converted
    pub skipped: usize,
    pub output: PathBuf,
}

/// Run one export against the configured HTTP endpoint.
pub async fn run_once(config: &ExportConfig) -> Result<RunSummary, StationError> {
    let client = StationClient::new(config.client_config())?;
    info!(url = client.url(), "fetching station list");

    run_with_source(&client, &config.namespace, &config.output_path).await
}

/// Run one export reading the document from `source`.
///
/// The output file is only written once the whole document has been parsed,
/// so a malformed document leaves any previous export untouched.
pub async fn run_with_source<S: StationSource>(
    source: &S,
    namespace: &str,
    output: &Path,
) -> Result<RunSummary, StationError> {
    let (feed, parsed) = match source.fetch().await {
        FetchOutcome::Document(body) => (FeedStatus::Fetched, parse_stations(&body, namespace)?),
        FetchOutcome::Unavailable(reason) => {
            debug!(%reason, "exporting an empty station list");
            (FeedStatus::Unavailable { reason }, ParsedStations::default())
        }
    };

    write_stations(&parsed.stations, output)?;

    let summary = RunSummary {
        feed,
        exported: parsed.stations.len(),
        skipped: parsed.skipped,
        output: output.to_path_buf(),
    };
    info!(
        exported = summary.exported,
        skipped = summary.skipped,
        output = %output.display(),
        "station export complete"
    );
    Ok(summary)
}
