//! Station record types.

use serde::{Deserialize, Serialize};

use super::error::ConversionError;

/// Element names in the realtime feed, one per record field.
pub(crate) mod field {
    pub const DESCRIPTION: &str = "StationDesc";
    pub const ALIAS: &str = "StationAlias";
    pub const LATITUDE: &str = "StationLatitude";
    pub const LONGITUDE: &str = "StationLongitude";
    pub const CODE: &str = "StationCode";
    pub const ID: &str = "StationId";
}

/// A railway station as exported to JSON.
///
/// Records are only built through [`StationRecord::try_from`] on a
/// [`RawStation`] (or [`StationRecord::new`]), so every record that exists
/// has all six fields populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    description: String,
    alias: String,
    latitude: f64,
    longitude: f64,
    code: String,
    id: String,
}

impl StationRecord {
    /// Create a record from already-validated values.
    pub fn new(
        description: impl Into<String>,
        alias: impl Into<String>,
        latitude: f64,
        longitude: f64,
        code: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            alias: alias.into(),
            latitude,
            longitude,
            code: code.into(),
            id: id.into(),
        }
    }

    /// Station name as published by the feed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Alternative name; empty when the feed has none.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Short station code, e.g. `HSTN`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Feed identifier of the station.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Text of the six station fields as found in one feed element.
///
/// `None` means the element was absent or had no text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStation {
    pub description: Option<String>,
    pub alias: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub code: Option<String>,
    pub id: Option<String>,
}

impl TryFrom<RawStation> for StationRecord {
    type Error = ConversionError;

    fn try_from(raw: RawStation) -> Result<Self, Self::Error> {
        let description = required(raw.description, field::DESCRIPTION)?;
        let latitude = coordinate(raw.latitude, field::LATITUDE)?;
        let longitude = coordinate(raw.longitude, field::LONGITUDE)?;
        let code = required(raw.code, field::CODE)?;
        let id = required(raw.id, field::ID)?;

        Ok(Self {
            description,
            alias: raw.alias.unwrap_or_default(),
            latitude,
            longitude,
            code,
            id,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConversionError> {
    value.ok_or(ConversionError::MissingField(name))
}

fn coordinate(value: Option<String>, name: &'static str) -> Result<f64, ConversionError> {
    let text = required(value, name)?;
    let parsed: f64 = match text.trim().parse() {
        Ok(parsed) => parsed,
        Err(source) => {
            return Err(ConversionError::InvalidCoordinate {
                field: name,
                value: text,
                source,
            });
        }
    };

    if !parsed.is_finite() {
        return Err(ConversionError::NonFiniteCoordinate {
            field: name,
            value: text,
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuston() -> RawStation {
        RawStation {
            description: Some("Heuston".into()),
            alias: None,
            latitude: Some("53.3469".into()),
            longitude: Some("-6.2944".into()),
            code: Some("HSTN".into()),
            id: Some("1".into()),
        }
    }

    #[test]
    fn converts_complete_station() {
        let mut raw = heuston();
        raw.alias = Some("Dublin Heuston".into());

        let record = StationRecord::try_from(raw).unwrap();
        assert_eq!(record.description(), "Heuston");
        assert_eq!(record.alias(), "Dublin Heuston");
        assert_eq!(record.latitude(), 53.3469);
        assert_eq!(record.longitude(), -6.2944);
        assert_eq!(record.code(), "HSTN");
        assert_eq!(record.id(), "1");
    }

    #[test]
    fn missing_alias_becomes_empty() {
        let record = StationRecord::try_from(heuston()).unwrap();
        assert_eq!(record.alias(), "");
    }

    #[test]
    fn coordinates_tolerate_surrounding_whitespace() {
        let mut raw = heuston();
        raw.latitude = Some(" 53.3469\n".into());

        let record = StationRecord::try_from(raw).unwrap();
        assert_eq!(record.latitude(), 53.3469);
    }

    #[test]
    fn string_fields_are_kept_verbatim() {
        let mut raw = heuston();
        raw.code = Some("HSTN ".into());

        let record = StationRecord::try_from(raw).unwrap();
        assert_eq!(record.code(), "HSTN ");
    }

    #[test]
    fn non_numeric_latitude_is_rejected() {
        let mut raw = heuston();
        raw.latitude = Some("north".into());

        match StationRecord::try_from(raw) {
            Err(ConversionError::InvalidCoordinate { field, value, .. }) => {
                assert_eq!(field, "StationLatitude");
                assert_eq!(value, "north");
            }
            other => panic!("expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_longitude_is_rejected() {
        let mut raw = heuston();
        raw.longitude = Some("west".into());

        assert!(matches!(
            StationRecord::try_from(raw),
            Err(ConversionError::InvalidCoordinate {
                field: "StationLongitude",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        for text in ["NaN", "nan", "inf", "-inf", "infinity", "+Infinity"] {
            let mut raw = heuston();
            raw.latitude = Some(text.into());
            assert_eq!(
                StationRecord::try_from(raw),
                Err(ConversionError::NonFiniteCoordinate {
                    field: "StationLatitude",
                    value: text.into(),
                }),
                "latitude {text:?}"
            );

            let mut raw = heuston();
            raw.longitude = Some(text.into());
            assert_eq!(
                StationRecord::try_from(raw),
                Err(ConversionError::NonFiniteCoordinate {
                    field: "StationLongitude",
                    value: text.into(),
                }),
                "longitude {text:?}"
            );
        }
    }

    #[test]
    fn missing_longitude_is_rejected() {
        let mut raw = heuston();
        raw.longitude = None;

        assert_eq!(
            StationRecord::try_from(raw),
            Err(ConversionError::MissingField("StationLongitude"))
        );
    }

    #[test]
    fn missing_required_text_is_rejected() {
        let mut raw = heuston();
        raw.description = None;
        assert_eq!(
            StationRecord::try_from(raw),
            Err(ConversionError::MissingField("StationDesc"))
        );

        let mut raw = heuston();
        raw.code = None;
        assert_eq!(
            StationRecord::try_from(raw),
            Err(ConversionError::MissingField("StationCode"))
        );

        let mut raw = heuston();
        raw.id = None;
        assert_eq!(
            StationRecord::try_from(raw),
            Err(ConversionError::MissingField("StationId"))
        );
    }

    #[test]
    fn serializes_with_field_names() {
        let record = StationRecord::try_from(heuston()).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"description":"Heuston","alias":"","latitude":53.3469,"longitude":-6.2944,"code":"HSTN","id":"1"}"#
        );
    }
}
