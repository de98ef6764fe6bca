use super::Mapping;
use super::fields::{as_mapping, optional_array, optional_string};
use super::sequence::{Sequence, SequenceKind};
use crate::core::error::ConfigError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Target format family of the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    AlphaFold3,
}

impl Dialect {
    pub const ALL: [Dialect; 1] = [Self::AlphaFold3];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlphaFold3 => "alphafold3",
        }
    }
}

impl FromStr for Dialect {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidEnumerationValue {
                field: "dialect",
                value: s.to_string(),
                supported: format!("{:?}", Self::ALL.map(Dialect::as_str)),
            })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.as_str().to_string()
    }
}

/// Schema version tag of the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Version {
    V1,
    #[default]
    V2,
}

impl Version {
    pub fn supported() -> [Version; 2] {
        [Self::V1, Self::V2]
    }

    pub fn as_int(self) -> i64 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    fn invalid(value: String) -> ConfigError {
        ConfigError::InvalidEnumerationValue {
            field: "version",
            value,
            supported: format!("{:?}", Self::supported().map(Version::as_int)),
        }
    }
}

impl TryFrom<i64> for Version {
    type Error = ConfigError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::supported()
            .into_iter()
            .find(|v| v.as_int() == value)
            .ok_or_else(|| Self::invalid(value.to_string()))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

impl From<Version> for i64 {
    fn from(version: Version) -> Self {
        version.as_int()
    }
}

/// A complete, validated AlphaFold3 job.
#[derive(Debug, Clone, PartialEq)]
pub struct AfJobConfig {
    name: String,
    model_seeds: Vec<i64>,
    sequences: Vec<Sequence>, // Order defines chain/entity order
    dialect: Dialect,
    version: Version,
    bonded_atom_pairs: Option<Vec<Value>>,
    user_ccd: Option<String>,
}

impl AfJobConfig {
    pub fn builder() -> AfJobConfigBuilder {
        AfJobConfigBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_seeds(&self) -> &[i64] {
        &self.model_seeds
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn bonded_atom_pairs(&self) -> Option<&[Value]> {
        self.bonded_atom_pairs.as_deref()
    }

    pub fn user_ccd(&self) -> Option<&str> {
        self.user_ccd.as_deref()
    }

    pub fn to_dict(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("name".to_string(), Value::from(self.name.as_str()));
        map.insert(
            "modelSeeds".to_string(),
            Value::Array(self.model_seeds.iter().copied().map(Value::from).collect()),
        );
        map.insert(
            "sequences".to_string(),
            Value::Array(
                self.sequences
                    .iter()
                    .map(|s| Value::Object(s.to_dict()))
                    .collect(),
            ),
        );
        map.insert("dialect".to_string(), Value::from(self.dialect.as_str()));
        map.insert("version".to_string(), Value::from(self.version.as_int()));

        if let Some(pairs) = &self.bonded_atom_pairs {
            map.insert("bondedAtomPairs".to_string(), Value::Array(pairs.clone()));
        }
        if let Some(ccd) = &self.user_ccd {
            map.insert("userCCD".to_string(), Value::from(ccd.as_str()));
        }
        map
    }

    /// Parses a full job document.
    ///
    /// Each entry of `sequences` must be a single-key mapping whose key names
    /// the sequence type (matched case-insensitively). A failure while building
    /// an entry is reported as [`ConfigError::SequenceEntry`] carrying the entry
    /// index and the declared type. Missing `name`, `modelSeeds` and `dialect`
    /// fall through to the builder's required-field checks; a missing
    /// `version` defaults to 2.
    pub fn from_dict(data: &Value) -> Result<Self, ConfigError> {
        let data = as_mapping(data, "job document")?;

        let entries = match data.get("sequences") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(items)) => items.as_slice(),
            Some(_) => {
                return Err(ConfigError::MalformedDocument(
                    "sequences must be a list".to_string(),
                ));
            }
        };

        let mut sequences = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let entry = as_mapping(entry, &format!("sequence entry {}", index))?;
            let mut items = entry.iter();
            let (declared_type, content) = match (items.next(), items.next()) {
                (Some(only), None) => only,
                _ => {
                    return Err(ConfigError::MalformedDocument(format!(
                        "sequence entry {} must have exactly one type key, found {}",
                        index,
                        entry.len()
                    )));
                }
            };

            let kind: SequenceKind = declared_type.parse()?;
            let sequence = as_mapping(content, "sequence fields")
                .and_then(|fields| Sequence::from_fields(kind, fields))
                .map_err(|e| ConfigError::SequenceEntry {
                    index,
                    declared_type: declared_type.clone(),
                    source: Box::new(e),
                })?;
            sequences.push(sequence);
        }

        let model_seeds = optional_array(data, "modelSeeds")?
            .map(|seeds| {
                seeds
                    .iter()
                    .map(parse_model_seed)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        let dialect = match data.get("dialect") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };

        let version = match data.get("version") {
            None | Some(Value::Null) => Ok(Version::default().as_int()),
            Some(value) => value.as_i64().ok_or_else(|| value.to_string()),
        };

        AfJobConfigBuilder {
            name: optional_string(data, "name")?.unwrap_or_default(),
            model_seeds,
            sequences,
            dialect,
            version,
            bonded_atom_pairs: optional_array(data, "bondedAtomPairs")?.cloned(),
            user_ccd: optional_string(data, "userCCD")?,
        }
        .build()
    }
}

impl fmt::Display for AfJobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.to_dict()))
    }
}

/// Collects job fields and validates them in one step.
///
/// `dialect` and `version` are held in their primitive form until
/// [`build`](Self::build), which coerces them after the required-field checks.
#[derive(Debug, Clone)]
pub struct AfJobConfigBuilder {
    name: String,
    model_seeds: Vec<i64>,
    sequences: Vec<Sequence>,
    dialect: Option<String>,
    version: Result<i64, String>,
    bonded_atom_pairs: Option<Vec<Value>>,
    user_ccd: Option<String>,
}

impl Default for AfJobConfigBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            model_seeds: Vec::new(),
            sequences: Vec::new(),
            dialect: None,
            version: Ok(Version::default().as_int()),
            bonded_atom_pairs: None,
            user_ccd: None,
        }
    }
}

impl AfJobConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
    pub fn model_seeds(mut self, seeds: impl IntoIterator<Item = i64>) -> Self {
        self.model_seeds = seeds.into_iter().collect();
        self
    }
    pub fn sequences(mut self, sequences: impl IntoIterator<Item = Sequence>) -> Self {
        self.sequences = sequences.into_iter().collect();
        self
    }
    pub fn sequence(mut self, sequence: Sequence) -> Self {
        self.sequences.push(sequence);
        self
    }
    /// Accepts a [`Dialect`] or its string form.
    pub fn dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = Some(dialect.into());
        self
    }
    /// Accepts a [`Version`] or its integer form.
    pub fn version(mut self, version: impl Into<i64>) -> Self {
        self.version = Ok(version.into());
        self
    }
    pub fn bonded_atom_pairs(mut self, pairs: Vec<Value>) -> Self {
        self.bonded_atom_pairs = Some(pairs);
        self
    }
    pub fn user_ccd(mut self, ccd: impl Into<String>) -> Self {
        self.user_ccd = Some(ccd.into());
        self
    }

    pub fn build(self) -> Result<AfJobConfig, ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::MissingRequiredField("name"));
        }
        if self.model_seeds.is_empty() {
            return Err(ConfigError::MissingRequiredField("modelSeeds"));
        }
        if self.sequences.is_empty() {
            return Err(ConfigError::MissingRequiredField("sequences"));
        }

        let version = match self.version {
            Ok(value) => Version::try_from(value)?,
            Err(text) => return Err(Version::invalid(text)),
        };
        let dialect: Dialect = self
            .dialect
            .ok_or(ConfigError::MissingRequiredField("dialect"))?
            .parse()?;

        Ok(AfJobConfig {
            name: self.name,
            model_seeds: self.model_seeds,
            sequences: self.sequences,
            dialect,
            version,
            bonded_atom_pairs: self.bonded_atom_pairs,
            user_ccd: self.user_ccd,
        })
    }
}

fn parse_model_seed(seed: &Value) -> Result<i64, ConfigError> {
    if let Some(seed) = seed.as_i64() {
        return Ok(seed);
    }
    let reason = if seed.is_u64() {
        format!("model seed {} exceeds the supported maximum of {}", seed, i64::MAX)
    } else {
        format!("model seed must be an integer, got {}", seed)
    };
    Err(ConfigError::MalformedDocument(reason))
}
