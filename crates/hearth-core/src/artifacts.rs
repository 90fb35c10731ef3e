//! Loading the fitted scaler and model from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::ArtifactError;
use crate::model::Model;
use crate::scaler::StandardScaler;

pub const DEFAULT_MODELS_DIR: &str = "./models";
pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "model.json";

/// Locations of the two artifacts produced by the training process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub scaler: PathBuf,
    pub model: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            scaler: dir.join(SCALER_FILE),
            model: dir.join(MODEL_FILE),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_MODELS_DIR)
    }
}

/// The decoded and internally consistent scaler and model.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub scaler: StandardScaler,
    pub model: Model,
}

impl Artifacts {
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let scaler: StandardScaler = read_json(&paths.scaler)?;
        scaler.validate()?;
        info!(
            "Loaded scaler from {} ({} columns)",
            paths.scaler.display(),
            scaler.n_features()
        );

        let model: Model = read_json(&paths.model)?;
        model.validate()?;
        info!("Loaded {} model from {}", model.kind(), paths.model.display());

        Ok(Self { scaler, model })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ArtifactError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ColumnLayout;
    use crate::model::Regressor;
    use crate::predictor::Predictor;
    use crate::record::HouseRecord;
    use crate::testing::{forest_model_json, linear_model_json, sample_body, scaler_json};
    use tempfile::TempDir;

    fn write_artifacts(dir: &TempDir, scaler: &str, model: &str) -> ArtifactPaths {
        let paths = ArtifactPaths::in_dir(dir.path());
        fs::write(&paths.scaler, scaler).unwrap();
        fs::write(&paths.model, model).unwrap();
        paths
    }

    #[test]
    fn test_default_paths() {
        let paths = ArtifactPaths::default();
        assert_eq!(paths.scaler, Path::new("./models").join("scaler.json"));
        assert_eq!(paths.model, Path::new("./models").join("model.json"));
    }

    #[test]
    fn test_load_artifacts() {
        let dir = TempDir::new().unwrap();
        let paths = write_artifacts(
            &dir,
            &scaler_json().to_string(),
            &linear_model_json().to_string(),
        );

        let artifacts = Artifacts::load(&paths).unwrap();
        assert_eq!(artifacts.scaler.n_features(), 15);
        assert_eq!(artifacts.model.kind(), "linear");
        assert_eq!(artifacts.model.n_features(), 15);
    }

    #[test]
    fn test_load_forest_artifacts() {
        let dir = TempDir::new().unwrap();
        let paths = write_artifacts(
            &dir,
            &scaler_json().to_string(),
            &forest_model_json().to_string(),
        );

        let artifacts = Artifacts::load(&paths).unwrap();
        assert_eq!(artifacts.model.kind(), "forest");
        assert_eq!(artifacts.model.n_features(), 15);

        let predictor = Predictor::new(ColumnLayout::training(), artifacts).unwrap();
        let record = HouseRecord::from_json(&sample_body()).unwrap();
        assert_eq!(predictor.predict(&record).unwrap().price, 435000.25);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let paths = ArtifactPaths::in_dir(dir.path());

        let err = Artifacts::load(&paths).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Io { ref path, .. } if path.ends_with("scaler.json")
        ));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let paths = write_artifacts(&dir, &scaler_json().to_string(), "\u{80}pickle");

        let err = Artifacts::load(&paths).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Decode { ref path, .. } if path.ends_with("model.json")
        ));
    }

    #[test]
    fn test_incompatible_object() {
        let dir = TempDir::new().unwrap();
        // a model where the scaler should be
        let paths = write_artifacts(
            &dir,
            &linear_model_json().to_string(),
            &linear_model_json().to_string(),
        );

        assert!(matches!(Artifacts::load(&paths).unwrap_err(), ArtifactError::Decode { .. }));
    }

    #[test]
    fn test_inconsistent_scaler() {
        let dir = TempDir::new().unwrap();
        let mut scaler = scaler_json();
        scaler["scale"].as_array_mut().unwrap().pop();
        let paths = write_artifacts(&dir, &scaler.to_string(), &linear_model_json().to_string());

        assert!(matches!(
            Artifacts::load(&paths).unwrap_err(),
            ArtifactError::Invalid { artifact: "scaler", .. }
        ));
    }
}
