use crate::core::error::ConfigError;
use crate::core::io::traits::JobFile;
use crate::core::models::job::AfJobConfig;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, BufRead, Write};
use thiserror::Error;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum JobFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid job configuration: {0}")]
    Config(#[from] ConfigError),
}

/// The JSON job document accepted by AlphaFold3.
pub struct JsonJobFile;

impl JsonJobFile {
    pub fn to_json_string(job: &AfJobConfig) -> Result<String, JobFileError> {
        let mut buffer = Vec::new();
        Self::write_to(job, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| JobFileError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    pub fn from_json_str(content: &str) -> Result<AfJobConfig, JobFileError> {
        let value: Value = serde_json::from_str(content)?;
        Ok(AfJobConfig::from_dict(&value)?)
    }
}

impl JobFile for JsonJobFile {
    type Error = JobFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<AfJobConfig, Self::Error> {
        let value: Value = serde_json::from_reader(reader)?;
        Ok(AfJobConfig::from_dict(&value)?)
    }

    fn write_to(job: &AfJobConfig, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut serializer = Serializer::with_formatter(&mut *writer, PrettyFormatter::with_indent(INDENT));
        Value::Object(job.to_dict()).serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
