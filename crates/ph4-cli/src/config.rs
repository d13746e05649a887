use crate::cli::ScoreArgs;
use crate::error::{CliError, Result};
use ph4rs::workflows::config as core_config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialConstraintsConfig {
    path: Option<PathBuf>,
    counting: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSelectionConfig {
    #[serde(rename = "enforce-minimum")]
    enforce_minimum: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialScoreConfig {
    constraints: Option<PartialConstraintsConfig>,
    selection: Option<PartialSelectionConfig>,
}

impl PartialScoreConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        // Relative constraint paths are taken relative to the config file.
        if let Some(constraints) = config.constraints.as_mut() {
            if let (Some(file), Some(dir)) = (constraints.path.as_mut(), path.parent()) {
                if file.is_relative() {
                    *file = dir.join(&*file);
                }
            }
        }
        Ok(config)
    }

    /// Loads the config file named by `args`, or starts empty if none was given.
    pub fn load(args: &ScoreArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &ScoreArgs) -> Result<core_config::EvaluationConfig> {
        self.apply_set_values(&args.set_values)?;

        let constraints = self.constraints.take().unwrap_or_default();
        let selection = self.selection.take().unwrap_or_default();

        let constraints_path = args
            .constraints
            .clone()
            .or(constraints.path)
            .ok_or_else(|| {
                CliError::Config(
                    "A constraint file is required either as `constraints.path` in the config file or via --constraints.".to_string(),
                )
            })?;

        let counting = if args.no_counting {
            false
        } else {
            constraints.counting.unwrap_or(true)
        };
        let enforce_minimum = if args.no_enforce {
            false
        } else {
            selection.enforce_minimum.unwrap_or(true)
        };

        core_config::EvaluationConfigBuilder::new()
            .constraints_path(constraints_path)
            .counting(counting)
            .enforce_minimum(enforce_minimum)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let parse_bool = || -> Result<bool> {
                value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })
            };

            match key {
                "constraints.path" => {
                    self.constraints.get_or_insert_with(Default::default).path =
                        Some(PathBuf::from(value_str));
                }
                "constraints.counting" => {
                    self.constraints.get_or_insert_with(Default::default).counting =
                        Some(parse_bool()?);
                }
                "selection.enforce-minimum" => {
                    self.selection
                        .get_or_insert_with(Default::default)
                        .enforce_minimum = Some(parse_bool()?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
