use serde::{Deserialize, Serialize};
use std::path::Path;
use vecroute_common::Result;

use crate::types::{Location, Segment, Vector};

/// On-disk form of the two record populations
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    /// Known places (2-D vectors)
    pub locations: Vec<Location>,

    /// Highways (4-D endpoint-pair vectors)
    pub highways: Vec<Segment>,
}

/// Dataset as written on disk, before vector dimensions are checked
#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    locations: Vec<RawLocation>,

    #[serde(default)]
    highways: Vec<RawHighway>,
}

#[derive(Deserialize)]
struct RawLocation {
    location_id: String,
    location_name: String,
    location_vector: Vec<f32>,
}

#[derive(Deserialize)]
struct RawHighway {
    highway_name: String,
    highway_vector: Vec<f32>,
}

impl Dataset {
    /// Read a dataset from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse a dataset. A vector of the wrong length fails with
    /// `MalformedVector` rather than a JSON error.
    pub fn from_json(data: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(data)?;

        let locations = raw
            .locations
            .into_iter()
            .map(|l| -> Result<Location> {
                Ok(Location::new(
                    l.location_id,
                    l.location_name,
                    Vector::try_from(l.location_vector)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let highways = raw
            .highways
            .into_iter()
            .map(|h| -> Result<Segment> {
                Ok(Segment::new(h.highway_name, Vector::try_from(h.highway_vector)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            locations,
            highways,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecroute_common::VecRouteError;

    #[test]
    fn test_parse_dataset() {
        let json = r#"{
            "locations": [
                {"location_id": "SEA", "location_name": "Seattle", "location_vector": [47.6, -122.3]}
            ],
            "highways": [
                {"highway_name": "I-5", "highway_vector": [47.6, -122.3, 45.5, -122.7]}
            ]
        }"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.locations.len(), 1);
        assert_eq!(dataset.locations[0].similarity, 0.0);
        assert_eq!(dataset.highways[0].name, "I-5");
    }

    #[test]
    fn test_short_highway_vector_is_malformed() {
        let json = r#"{"highways": [{"highway_name": "I-5", "highway_vector": [1, 2, 3]}]}"#;
        let err = Dataset::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            VecRouteError::MalformedVector {
                expected: 4,
                actual: 3
            }
        ));
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_long_location_vector_is_malformed() {
        let json = r#"{"locations": [
            {"location_id": "SEA", "location_name": "Seattle", "location_vector": [1, 2, 3]}
        ]}"#;
        assert!(matches!(
            Dataset::from_json(json),
            Err(VecRouteError::MalformedVector {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        assert!(matches!(
            Dataset::from_json("{not json"),
            Err(VecRouteError::Json(_))
        ));
    }
}
