//! JSON export of station records.

use std::path::Path;

use tracing::debug;

use super::error::StationError;
use super::record::StationRecord;

/// Write `stations` to `path` as a JSON array, replacing any existing file.
///
/// Creates parent directories if they don't exist. The write is not atomic.
pub fn write_stations(stations: &[StationRecord], path: &Path) -> Result<(), StationError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(stations)?;
    std::fs::write(path, json)?;

    debug!(path = %path.display(), count = stations.len(), "wrote station export");
    Ok(())
}

/// Read a previously exported station file.
pub fn read_stations(path: &Path) -> Result<Vec<StationRecord>, StationError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
