use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Reject the ligand when a constraint's feature has fewer candidates than
    /// constraints of that feature were counted.
    pub enforce_minimum: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            enforce_minimum: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationConfig {
    pub constraints_path: PathBuf,
    /// Whether constraints read from `constraints_path` bump the feature tally.
    /// With counting off, enforced selection never fails.
    pub counting: bool,
    pub options: EvaluationOptions,
}

#[derive(Default)]
pub struct EvaluationConfigBuilder {
    constraints_path: Option<PathBuf>,
    counting: Option<bool>,
    enforce_minimum: Option<bool>,
}

impl EvaluationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constraints_path(mut self, path: PathBuf) -> Self {
        self.constraints_path = Some(path);
        self
    }
    pub fn counting(mut self, counting: bool) -> Self {
        self.counting = Some(counting);
        self
    }
    pub fn enforce_minimum(mut self, enforce: bool) -> Self {
        self.enforce_minimum = Some(enforce);
        self
    }

    pub fn build(self) -> Result<EvaluationConfig, ConfigError> {
        Ok(EvaluationConfig {
            constraints_path: self
                .constraints_path
                .ok_or(ConfigError::MissingParameter("constraints_path"))?,
            counting: self.counting.unwrap_or(true),
            options: EvaluationOptions {
                enforce_minimum: self.enforce_minimum.unwrap_or(true),
            },
        })
    }
}
