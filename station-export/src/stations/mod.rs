//! Irish Rail station feed: fetching, mapping and JSON export.
//!
//! The realtime API lists every station as XML. This module fetches that
//! document, converts each station element into a [`StationRecord`] and
//! writes the records out as a JSON array.

mod client;
mod error;
mod export;
mod parse;
mod record;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_ENDPOINT, FetchOutcome, StationClient, StationClientConfig,
    StationSource,
};
pub use error::{ConversionError, FetchFailure, StationError};
pub use export::{read_stations, write_stations};
pub use parse::{DEFAULT_NAMESPACE, ParsedStations, extract_raw, map_stations, parse_stations};
pub use record::{RawStation, StationRecord};
