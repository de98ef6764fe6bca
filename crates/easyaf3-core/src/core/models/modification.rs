use super::Mapping;
use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A post-translational modification attached to a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Modification {
    ptm_type: String, // Modification kind (e.g., "HY3", "phosphorylation")
    ptm_position: i64, // 1-indexed position in the owning sequence
}

impl Modification {
    pub fn new(ptm_type: impl Into<String>, ptm_position: i64) -> Self {
        Self {
            ptm_type: ptm_type.into(),
            ptm_position,
        }
    }

    /// Builds a modification from a `{"ptmType", "ptmPosition"}` mapping.
    ///
    /// Missing keys, extra keys and wrongly typed values are rejected.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self, ConfigError> {
        serde_json::from_value(Value::Object(mapping.clone()))
            .map_err(|e| ConfigError::MalformedDocument(format!("invalid modification: {}", e)))
    }

    pub fn ptm_type(&self) -> &str {
        &self.ptm_type
    }

    pub fn ptm_position(&self) -> i64 {
        self.ptm_position
    }

    pub fn to_dict(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("ptmType".to_string(), Value::from(self.ptm_type.as_str()));
        map.insert("ptmPosition".to_string(), Value::from(self.ptm_position));
        map
    }
}

/// A modification as handed to a sequence constructor: either already typed or
/// still in its mapping form.
#[derive(Debug, Clone, PartialEq)]
pub enum ModificationEntry {
    Parsed(Modification),
    Mapping(Mapping),
}

impl ModificationEntry {
    pub(crate) fn normalize(self) -> Result<Modification, ConfigError> {
        match self {
            Self::Parsed(modification) => Ok(modification),
            Self::Mapping(mapping) => Modification::from_mapping(&mapping),
        }
    }
}

impl From<Modification> for ModificationEntry {
    fn from(modification: Modification) -> Self {
        Self::Parsed(modification)
    }
}

impl From<Mapping> for ModificationEntry {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}
