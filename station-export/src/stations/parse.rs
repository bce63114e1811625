//! Mapping of the realtime XML feed to station records.
//!
//! Each direct child of the document root describes one station. A child
//! that cannot be converted is logged and skipped; only a document that is
//! not well-formed XML fails the whole parse.

use tracing::{debug, error};
use xmltree::{Element, XMLNode};

use super::error::{ConversionError, StationError};
use super::record::{RawStation, StationRecord, field};

/// Namespace of the station elements in the realtime feed.
pub const DEFAULT_NAMESPACE: &str = "http://api.irishrail.ie/realtime/";

/// Stations recovered from one document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedStations {
    /// Successfully converted stations, in document order
    pub stations: Vec<StationRecord>,
    /// Number of elements that failed conversion
    pub skipped: usize,
}

/// Parse a station document, logging and dropping elements that fail.
pub fn parse_stations(document: &[u8], namespace: &str) -> Result<ParsedStations, StationError> {
    let root = Element::parse(document)?;

    let mut parsed = ParsedStations::default();
    for (index, result) in map_stations(&root, namespace).into_iter().enumerate() {
        match result {
            Ok(station) => parsed.stations.push(station),
            Err(e) => {
                error!(
                    element = index,
                    error = %e,
                    "unable to convert element to station"
                );
                parsed.skipped += 1;
            }
        }
    }

    debug!(
        converted = parsed.stations.len(),
        skipped = parsed.skipped,
        "parsed station document"
    );
    Ok(parsed)
}

/// Convert every child element of `root`, keeping per-element failures.
pub fn map_stations(
    root: &Element,
    namespace: &str,
) -> Vec<Result<StationRecord, ConversionError>> {
    root.children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Element(element) => Some(element),
            _ => None,
        })
        .map(|element| StationRecord::try_from(extract_raw(element, namespace)))
        .collect()
}

/// Pull the six station fields out of one element.
pub fn extract_raw(element: &Element, namespace: &str) -> RawStation {
    let text = |name: &str| child_text(element, name, namespace);

    RawStation {
        description: text(field::DESCRIPTION),
        alias: text(field::ALIAS),
        latitude: text(field::LATITUDE),
        longitude: text(field::LONGITUDE),
        code: text(field::CODE),
        id: text(field::ID),
    }
}

/// Text of the first child named `name` in `namespace`.
///
/// Absent elements and elements without text both yield `None`.
fn child_text(element: &Element, name: &str, namespace: &str) -> Option<String> {
    element
        .get_child((name, namespace))
        .and_then(|child| child.get_text())
        .map(|text| text.into_owned())
        .filter(|text| !text.is_empty())
}
