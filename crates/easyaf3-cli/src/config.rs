use crate::cli::Fa2JsonArgs;
use crate::error::{CliError, Result};
use easyaf3config::core::models::job::{Dialect, Version};
use easyaf3config::workflows::convert::ConversionOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Values used when neither the CLI nor the config file provide one.
pub struct DefaultsConfig {
    pub model_seeds: Vec<i64>,
    pub dialect: String,
    pub version: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model_seeds: vec![5311],
            dialect: Dialect::AlphaFold3.into(),
            version: Version::V1.as_int(),
        }
    }
}

/// Fully resolved settings for one `fa2json` run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    pub fasta_path: PathBuf,
    pub json_path: PathBuf,
    pub job_name: String,
    pub options: ConversionOptions,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialJobConfig {
    name: Option<String>,
    #[serde(rename = "model-seeds")]
    model_seeds: Option<Vec<i64>>,
    dialect: Option<String>,
    version: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConvertConfig {
    job: Option<PartialJobConfig>,
}

impl PartialConvertConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &Fa2JsonArgs) -> Result<ConvertSettings> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let job = self.job.take().unwrap_or_default();

        let job_name = match args.job_name.clone().or(job.name) {
            Some(name) => name,
            None => args
                .fasta
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    CliError::Argument(format!(
                        "Cannot derive a job name from {:?}; pass --job-name.",
                        args.fasta
                    ))
                })?,
        };

        let options = ConversionOptions {
            model_seeds: args
                .model_seeds
                .clone()
                .or(job.model_seeds)
                .unwrap_or(defaults.model_seeds),
            dialect: args
                .dialect
                .clone()
                .or(job.dialect)
                .unwrap_or(defaults.dialect),
            version: args.version.or(job.version).unwrap_or(defaults.version),
        };

        Ok(ConvertSettings {
            fasta_path: args.fasta.clone(),
            json_path: args.json.clone(),
            job_name,
            options,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            let job = self.job.get_or_insert_with(Default::default);
            match key {
                "job.name" => job.name = Some(value_str.to_string()),
                "job.dialect" => job.dialect = Some(value_str.to_string()),
                "job.version" => {
                    job.version = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                "job.model-seeds" => {
                    let seeds = value_str
                        .split(',')
                        .map(|s| s.trim().parse::<i64>())
                        .collect::<std::result::Result<Vec<_>, _>>()
                        .map_err(|_| {
                            CliError::Config(format!(
                                "Invalid integer list for {}: {}",
                                key, value_str
                            ))
                        })?;
                    job.model_seeds = Some(seeds);
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
