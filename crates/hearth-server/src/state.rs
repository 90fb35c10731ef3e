use hearth_core::{ArtifactError, Predictor};
use tracing::info;

use crate::config::ServerConfig;

/// Immutable state shared by every request.
pub struct ServerState {
    pub predictor: Predictor,
}

impl ServerState {
    pub fn load(config: &ServerConfig) -> Result<Self, ArtifactError> {
        let paths = config.artifact_paths();
        info!("Loading artifacts from {}", config.models_dir.display());

        let predictor = Predictor::load(&paths)?;
        info!(
            "Predictor ready: {} model over {} columns",
            predictor.model_kind(),
            predictor.layout().len()
        );

        Ok(Self { predictor })
    }
}
