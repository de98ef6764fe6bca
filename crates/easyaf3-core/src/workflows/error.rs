use crate::core::error::ConfigError;
use crate::core::io::fasta::FastaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to read FASTA input: {0}")]
    Fasta(#[from] FastaError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
