//! Error types for request handling and artifact loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a request body into a price.
///
/// Every variant is a per-request failure; the server reports all of them the
/// same way, and [`PredictError::kind`] keeps them apart in logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Request body is not valid JSON.
    #[error("Invalid JSON body: {0}")]
    Parse(String),

    /// Request body is JSON but not an object.
    #[error("Expected a JSON object of feature values, got {0}")]
    NotAnObject(&'static str),

    /// A feature required by the layout or the derivation is absent.
    #[error("Missing feature: {0}")]
    MissingFeature(String),

    /// A feature value cannot be read as a finite number.
    #[error("Feature '{name}' is not numeric: {value}")]
    NonNumeric { name: String, value: String },

    /// A feature the scaler was not fitted on.
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// A derived feature has a zero denominator.
    #[error("Cannot compute {feature}: {denominator} is zero")]
    DivisionByZero {
        feature: &'static str,
        denominator: &'static str,
    },

    /// Vector width does not match what a fitted artifact expects.
    #[error("Shape mismatch in {stage}: expected {expected} features, got {actual}")]
    Shape {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Computation produced a value that cannot be returned.
    #[error("Inference failed: {0}")]
    Inference(String),
}

impl PredictError {
    /// Short stable label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictError::Parse(_) => "parse",
            PredictError::NotAnObject(_) => "not_an_object",
            PredictError::MissingFeature(_) => "missing_feature",
            PredictError::NonNumeric { .. } => "non_numeric",
            PredictError::UnknownFeature(_) => "unknown_feature",
            PredictError::DivisionByZero { .. } => "division_by_zero",
            PredictError::Shape { .. } => "shape",
            PredictError::Inference(_) => "inference",
        }
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        PredictError::Parse(err.to_string())
    }
}

/// Errors raised while loading the scaler and model at startup.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode artifact {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {artifact}: {reason}")]
    Invalid {
        artifact: &'static str,
        reason: String,
    },

    #[error("{artifact} was fitted on columns {found:?}, expected {expected:?}")]
    ColumnMismatch {
        artifact: &'static str,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{artifact} expects {actual} features, layout has {expected}")]
    Shape {
        artifact: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl ArtifactError {
    pub(crate) fn invalid(artifact: &'static str, reason: impl Into<String>) -> Self {
        ArtifactError::Invalid {
            artifact,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_serde() {
        let err: PredictError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "parse");
        assert!(err.to_string().starts_with("Invalid JSON body"));
    }

    #[test]
    fn test_division_by_zero_message() {
        let err = PredictError::DivisionByZero {
            feature: "household_rooms",
            denominator: "households",
        };
        assert_eq!(
            err.to_string(),
            "Cannot compute household_rooms: households is zero"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ArtifactError::Io {
            path: PathBuf::from("models/model.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("models/model.json"));
    }
}
