//! Vertex AI deployment settings

use crate::auth::env_var;
use crate::error::{Error, Result};

/// Mandatory project scope variable
pub const PROJECT_VAR: &str = "VERTEX_GCP_PROJECT";
/// Optional region override variable
pub const LOCATION_VAR: &str = "VERTEX_LOCATION";
/// Region used when `VERTEX_LOCATION` is unset
pub const DEFAULT_LOCATION: &str = "europe-west1";
/// Pinned model name and version
pub const MODEL_NAME: &str = "text-bison-32k@002";

/// Where generation requests go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexConfig {
    /// Google Cloud project ID
    pub project: String,
    /// Region, e.g. `europe-west1`
    pub location: String,
    /// Publisher model, e.g. `text-bison-32k@002`
    pub model: String,
}

impl VertexConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_var)
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let project = lookup(PROJECT_VAR).ok_or(Error::MissingEnv(PROJECT_VAR))?;
        let location = lookup(LOCATION_VAR).unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        Ok(Self {
            project,
            location,
            model: MODEL_NAME.to_string(),
        })
    }

    /// Regional `:predict` endpoint for the configured model
    pub fn predict_url(&self) -> String {
        format!(
            "https://{loc}-aiplatform.googleapis.com/v1/projects/{project}/locations/{loc}/publishers/google/models/{model}:predict",
            loc = self.location,
            project = self.project,
            model = self.model,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_project_is_an_error() {
        let err = VertexConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, Error::MissingEnv(PROJECT_VAR)));
    }

    #[test]
    fn test_default_location() {
        let config =
            VertexConfig::from_lookup(|name| (name == PROJECT_VAR).then(|| "proj".into()))
                .unwrap();
        assert_eq!(config.location, "europe-west1");
        assert_eq!(config.model, "text-bison-32k@002");
    }

    #[test]
    fn test_location_override_and_url() {
        let config = VertexConfig::from_lookup(|name| match name {
            PROJECT_VAR => Some("proj".into()),
            LOCATION_VAR => Some("us-central1".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            config.predict_url(),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/proj/locations/us-central1/publishers/google/models/text-bison-32k@002:predict"
        );
    }
}
