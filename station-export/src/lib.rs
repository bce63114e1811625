//! Irish Rail station export.
//!
//! Fetches the station list from the Irish Rail realtime API, converts each
//! station element into a typed record and writes the result as a JSON array.

pub mod config;
pub mod pipeline;
pub mod stations;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ExportConfig;
pub use pipeline::{FeedStatus, RunSummary, run_once};
