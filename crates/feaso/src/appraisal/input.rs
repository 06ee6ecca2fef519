use super::domain::{Scenario, Site};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RequestLoadError {
    #[error("failed to read appraisal request: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid appraisal request JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A site together with the scenarios to appraise on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppraisalRequest {
    pub site: Site,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl AppraisalRequest {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RequestLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RequestLoadError> {
        let request = serde_json::from_reader(std::io::BufReader::new(reader))?;
        Ok(request)
    }
}
