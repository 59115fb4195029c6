//! Basin validation logic.
//!
//! Checks references and numeric sanity only; hydrologic plausibility of the
//! topology is not judged here.

use std::collections::HashSet;

use bc_core::Name;

use crate::schema::{Basin, Stream};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_basin(basin: &Basin) -> Result<(), ValidationError> {
    if basin.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "basin name".to_string(),
            value: basin.name.clone(),
            reason: "must not be blank".to_string(),
        });
    }

    let mut stream_names = HashSet::new();
    for stream in basin.streams() {
        if !stream_names.insert(Name::new(&stream.name)) {
            return Err(ValidationError::DuplicateId {
                id: stream.name.clone(),
                context: format!("basin {}", basin.name),
            });
        }
    }

    if let Some(root) = &basin.primary_stream {
        validate_stream(root, None)?;
    }

    Ok(())
}

fn validate_stream(stream: &Stream, receiving: Option<&Stream>) -> Result<(), ValidationError> {
    if stream.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "stream name".to_string(),
            value: stream.name.clone(),
            reason: "must not be blank".to_string(),
        });
    }

    if let Some(length) = stream.stream_length {
        check_station(length, &format!("{} stream length", stream.name))?;
        if length < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("{} stream length", stream.name),
                value: length.to_string(),
                reason: "must not be negative".to_string(),
            });
        }
    }

    let mut location_names = HashSet::new();
    for location in &stream.locations {
        if !location_names.insert(Name::new(&location.name)) {
            return Err(ValidationError::DuplicateId {
                id: location.name.clone(),
                context: format!("stream {} locations", stream.name),
            });
        }
        match location.station {
            Some(station) => check_station(station, &format!("{} station", location.name))?,
            None => {
                return Err(ValidationError::InvalidValue {
                    field: format!("{} station", location.name),
                    value: "null".to_string(),
                    reason: "stream locations need a station".to_string(),
                });
            }
        }
    }

    let mut reach_names = HashSet::new();
    for reach in &stream.reaches {
        if !reach_names.insert(Name::new(&reach.name)) {
            return Err(ValidationError::DuplicateId {
                id: reach.name.clone(),
                context: format!("stream {} reaches", stream.name),
            });
        }
        if let Some(owner) = &reach.stream_name {
            if !Name::new(owner).matches(&stream.name) {
                return Err(ValidationError::MissingReference {
                    id: owner.clone(),
                    context: format!("reach {} on stream {}", reach.name, stream.name),
                });
            }
        }
        for endpoint in [
            &reach.upstream_location_name,
            &reach.downstream_location_name,
        ] {
            if !location_names.contains(&Name::new(endpoint)) {
                return Err(ValidationError::MissingReference {
                    id: endpoint.clone(),
                    context: format!("reach {} endpoint", reach.name),
                });
            }
        }
    }

    if let Some(receiving) = receiving {
        if let Some(declared) = &stream.receiving_stream_id {
            if !Name::new(declared).matches(&receiving.name) {
                return Err(ValidationError::MissingReference {
                    id: declared.clone(),
                    context: format!("stream {} receiving stream", stream.name),
                });
            }
        }
        if let Some(station) = stream.confluence_station {
            check_station(station, &format!("{} confluence station", stream.name))?;
        }
    }

    if let Some(station) = stream.diversion_station {
        check_station(station, &format!("{} diversion station", stream.name))?;
    }

    for tributary in &stream.tributaries {
        validate_stream(tributary, Some(stream))?;
    }

    Ok(())
}

fn check_station(value: f64, field: &str) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{StreamLocation, StreamReach};

    fn sac() -> Stream {
        Stream::new("SAC", false)
            .with_length(100.0)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("B", 20.0))
    }

    #[test]
    fn valid_basin_passes() {
        let basin = Basin::new("Sacramento").with_primary_stream(
            sac()
                .with_reach(StreamReach::new("Upper", "A", "B"))
                .with_tributary(Stream::new("AMERICAN", false).joins("SAC", 60.0, "L")),
        );
        assert!(validate_basin(&basin).is_ok());
    }

    #[test]
    fn empty_basin_passes() {
        assert!(validate_basin(&Basin::new("Nothing")).is_ok());
    }

    #[test]
    fn duplicate_stream_names_rejected() {
        let basin =
            Basin::new("B").with_primary_stream(sac().with_tributary(Stream::new("sac", false)));
        let err = validate_basin(&basin).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateId { .. }));
    }

    #[test]
    fn duplicate_location_names_rejected() {
        let basin = Basin::new("B")
            .with_primary_stream(sac().with_location(StreamLocation::new("a", 30.0)));
        let err = validate_basin(&basin).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateId {
                id: "a".to_string(),
                context: "stream SAC locations".to_string(),
            }
        );
    }

    #[test]
    fn reach_endpoint_must_exist() {
        let basin = Basin::new("B")
            .with_primary_stream(sac().with_reach(StreamReach::new("Upper", "A", "Z")));
        let err = validate_basin(&basin).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingReference { ref id, .. } if id == "Z"
        ));
    }

    #[test]
    fn receiving_stream_must_match_parent() {
        let american = Stream::new("AMERICAN", false).joins("FEATHER", 60.0, "L");
        let basin = Basin::new("B").with_primary_stream(sac().with_tributary(american));
        let err = validate_basin(&basin).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingReference { ref id, .. } if id == "FEATHER"
        ));
    }

    #[test]
    fn location_without_station_rejected() {
        let mut location = StreamLocation::new("C", 0.0);
        location.station = None;
        let basin = Basin::new("B").with_primary_stream(sac().with_location(location));
        assert!(matches!(
            validate_basin(&basin).unwrap_err(),
            ValidationError::InvalidValue { .. }
        ));
    }

    #[test]
    fn non_finite_length_rejected() {
        let basin =
            Basin::new("B").with_primary_stream(Stream::new("SAC", false).with_length(f64::NAN));
        assert!(validate_basin(&basin).is_err());
    }
}
