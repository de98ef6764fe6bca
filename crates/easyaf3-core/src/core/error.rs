use thiserror::Error;

/// Validation and parse failures raised while building job-configuration values.
///
/// Every constructor in [`crate::core::models`] fails fast with one of these
/// variants, so a partially valid value is never observable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Unsupported {field}: {value}. Supported values are {supported}")]
    InvalidEnumerationValue {
        field: &'static str,
        value: String,
        supported: String,
    },

    #[error("Invalid {kind} sequence: character '{character}' at position {position} is not allowed")]
    InvalidAlphabet {
        kind: &'static str,
        character: char,
        position: usize,
    },

    #[error("{first} and {second} are mutually exclusive")]
    MutuallyExclusiveFieldsSet {
        first: &'static str,
        second: &'static str,
    },

    #[error("Unsupported sequence type: {0}")]
    UnsupportedSequenceType(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Failed to create {declared_type} sequence at index {index}: {source}")]
    SequenceEntry {
        index: usize,
        declared_type: String,
        #[source]
        source: Box<ConfigError>,
    },

    #[error("Failed to convert record {index} ('{id}'): {source}")]
    RawRecord {
        index: usize,
        id: String,
        #[source]
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// Strips `SequenceEntry`/`RawRecord` context and returns the underlying failure.
    pub fn root_cause(&self) -> &ConfigError {
        match self {
            Self::SequenceEntry { source, .. } | Self::RawRecord { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}
