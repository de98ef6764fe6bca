use crate::core::error::ConfigError;
use crate::core::io::fasta::{self, RawPair};
use crate::core::models::job::{AfJobConfig, Dialect, Version};
use crate::core::models::sequence::Sequence;
use crate::workflows::error::WorkflowError;
use crate::workflows::progress::{Progress, ProgressReporter};
use std::path::Path;
use tracing::{debug, info, instrument};

const PLACEHOLDER_ID_PREFIX: &str = "seq_";

/// Job metadata applied when assembling a job from raw records.
///
/// `dialect` and `version` stay in primitive form so that validation happens
/// in one place, at job construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub model_seeds: Vec<i64>,
    pub dialect: String,
    pub version: i64,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            model_seeds: vec![1],
            dialect: Dialect::AlphaFold3.into(),
            version: Version::V1.as_int(),
        }
    }
}

/// Converts raw records into protein sequences, one per record and in order.
///
/// An empty identifier is replaced by `seq_<n>`, where `n` is the 1-based
/// record position. The first record that fails validation aborts the whole
/// conversion.
pub fn sequences_from_raw_pairs(
    pairs: &[RawPair],
    reporter: &ProgressReporter,
) -> Result<Vec<Sequence>, ConfigError> {
    reporter.report(Progress::TaskStart {
        total_steps: pairs.len() as u64,
    });

    let mut sequences = Vec::with_capacity(pairs.len());
    for (i, (id, raw)) in pairs.iter().enumerate() {
        let index = i + 1;
        debug!("Processing sequence {} of {}", index, pairs.len());

        let id = if id.is_empty() {
            format!("{}{}", PLACEHOLDER_ID_PREFIX, index)
        } else {
            id.clone()
        };
        let sequence =
            Sequence::protein(id.as_str(), raw.as_str()).map_err(|e| ConfigError::RawRecord {
                index,
                id,
                source: Box::new(e),
            })?;

        sequences.push(sequence);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    Ok(sequences)
}

#[instrument(skip_all, name = "build_job", fields(job = job_name))]
pub fn build_job_from_raw_pairs(
    pairs: &[RawPair],
    job_name: &str,
    options: &ConversionOptions,
    reporter: &ProgressReporter,
) -> Result<AfJobConfig, ConfigError> {
    let sequences = sequences_from_raw_pairs(pairs, reporter)?;
    info!("Converted {} record(s) into protein sequences.", sequences.len());

    reporter.report(Progress::Message(format!("Assembling job '{}'", job_name)));
    AfJobConfig::builder()
        .name(job_name)
        .model_seeds(options.model_seeds.iter().copied())
        .sequences(sequences)
        .dialect(options.dialect.as_str())
        .version(options.version)
        .build()
}

pub fn load_sequences_from_fasta(
    path: &Path,
    reporter: &ProgressReporter,
) -> Result<Vec<Sequence>, WorkflowError> {
    let pairs = fasta::read_pairs_from_path(path)?;
    Ok(sequences_from_raw_pairs(&pairs, reporter)?)
}

pub fn job_from_fasta(
    path: &Path,
    job_name: &str,
    options: &ConversionOptions,
    reporter: &ProgressReporter,
) -> Result<AfJobConfig, WorkflowError> {
    info!("Reading FASTA records from {:?}", path);
    let pairs = fasta::read_pairs_from_path(path)?;
    Ok(build_job_from_raw_pairs(&pairs, job_name, options, reporter)?)
}
