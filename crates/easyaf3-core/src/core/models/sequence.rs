use super::Mapping;
use super::fields::{as_mapping, optional_array, optional_string, optional_value};
use super::modification::{Modification, ModificationEntry};
use crate::core::error::ConfigError;
use crate::core::utils::alphabet;
use phf::{Map, phf_map};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    Protein,
    Dna,
    Rna,
}

static SEQUENCE_KINDS: Map<&'static str, SequenceKind> = phf_map! {
    "protein" => SequenceKind::Protein,
    "dna" => SequenceKind::Dna,
    "rna" => SequenceKind::Rna,
};

impl SequenceKind {
    pub const ALL: [SequenceKind; 3] = [Self::Protein, Self::Dna, Self::Rna];

    /// The wire tag used as the single top-level key of a sequence entry.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Dna => "dna",
            Self::Rna => "rna",
        }
    }

    /// Case-insensitive alphabet membership for this kind.
    pub fn is_valid_residue(self, c: char) -> bool {
        match self {
            Self::Protein => alphabet::is_protein_residue(c),
            Self::Dna => alphabet::is_dna_nucleotide(c),
            Self::Rna => alphabet::is_rna_nucleotide(c),
        }
    }
}

impl FromStr for SequenceKind {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SEQUENCE_KINDS
            .get(s.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ConfigError::UnsupportedSequenceType(s.to_string()))
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A validated protein, DNA or RNA chain entry.
///
/// Instances only come out of [`SequenceBuilder::build`] (or the parsers built
/// on it), so every `Sequence` has a non-empty id, a residue string within its
/// kind's alphabet, and at most one form of each MSA.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    kind: SequenceKind,
    id: String,
    sequence: String, // Stored as given; only validation is case-insensitive
    modifications: Vec<Modification>,
    unpaired_msa: Option<String>,
    unpaired_msa_path: Option<String>,
    paired_msa: Option<String>,
    paired_msa_path: Option<String>,
    templates: Option<Value>,
}

impl Sequence {
    pub fn builder(
        kind: SequenceKind,
        id: impl Into<String>,
        sequence: impl Into<String>,
    ) -> SequenceBuilder {
        SequenceBuilder::new(kind, id, sequence)
    }

    pub fn protein(id: impl Into<String>, sequence: impl Into<String>) -> Result<Self, ConfigError> {
        SequenceBuilder::new(SequenceKind::Protein, id, sequence).build()
    }

    pub fn dna(id: impl Into<String>, sequence: impl Into<String>) -> Result<Self, ConfigError> {
        SequenceBuilder::new(SequenceKind::Dna, id, sequence).build()
    }

    pub fn rna(id: impl Into<String>, sequence: impl Into<String>) -> Result<Self, ConfigError> {
        SequenceBuilder::new(SequenceKind::Rna, id, sequence).build()
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn type_tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn modifications(&self) -> &[Modification] {
        &self.modifications
    }

    pub fn unpaired_msa(&self) -> Option<&str> {
        self.unpaired_msa.as_deref()
    }

    pub fn unpaired_msa_path(&self) -> Option<&str> {
        self.unpaired_msa_path.as_deref()
    }

    pub fn paired_msa(&self) -> Option<&str> {
        self.paired_msa.as_deref()
    }

    pub fn paired_msa_path(&self) -> Option<&str> {
        self.paired_msa_path.as_deref()
    }

    pub fn templates(&self) -> Option<&Value> {
        self.templates.as_ref()
    }

    /// Renders `{ <type>: { id, sequence, ... } }`, omitting every absent field.
    pub fn to_dict(&self) -> Mapping {
        let mut body = Mapping::new();
        body.insert("id".to_string(), Value::from(self.id.as_str()));
        body.insert("sequence".to_string(), Value::from(self.sequence.as_str()));

        if !self.modifications.is_empty() {
            let modifications = self
                .modifications
                .iter()
                .map(|m| Value::Object(m.to_dict()))
                .collect();
            body.insert("modifications".to_string(), Value::Array(modifications));
        }

        let msa_fields = [
            ("unpairedMsa", &self.unpaired_msa),
            ("unpairedMsaPath", &self.unpaired_msa_path),
            ("pairedMsa", &self.paired_msa),
            ("pairedMsaPath", &self.paired_msa_path),
        ];
        for (key, value) in msa_fields {
            if let Some(value) = value {
                body.insert(key.to_string(), Value::from(value.as_str()));
            }
        }

        if let Some(templates) = &self.templates {
            body.insert("templates".to_string(), templates.clone());
        }

        let mut root = Mapping::new();
        root.insert(self.type_tag().to_string(), Value::Object(body));
        root
    }

    /// Parses a `{ <tag>: { ... } }` mapping for the given kind.
    ///
    /// The tag key must be present and hold a non-empty mapping that contains
    /// both `id` and `sequence`; the remaining fields go through the same
    /// validation as [`SequenceBuilder::build`].
    pub fn from_dict(kind: SequenceKind, data: &Value) -> Result<Self, ConfigError> {
        let data = as_mapping(data, "sequence document")?;
        let fields = match data.get(kind.tag()) {
            Some(Value::Object(fields)) if !fields.is_empty() => fields,
            Some(Value::Object(_)) | Some(Value::Null) | None => {
                return Err(ConfigError::MalformedDocument(format!(
                    "missing '{}' key",
                    kind.tag()
                )));
            }
            Some(_) => {
                return Err(ConfigError::MalformedDocument(format!(
                    "'{}' must be a mapping",
                    kind.tag()
                )));
            }
        };

        for key in ["id", "sequence"] {
            if matches!(fields.get(key), None | Some(Value::Null)) {
                return Err(ConfigError::MissingRequiredField(key));
            }
        }

        Self::from_fields(kind, fields)
    }

    /// Builds a sequence from the field mapping nested under a type tag.
    pub(crate) fn from_fields(kind: SequenceKind, fields: &Mapping) -> Result<Self, ConfigError> {
        let modifications = optional_array(fields, "modifications")?
            .map(|items| {
                items
                    .iter()
                    .map(|item| {
                        as_mapping(item, "modification entry")
                            .map(|m| ModificationEntry::Mapping(m.clone()))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        SequenceBuilder {
            kind,
            id: optional_string(fields, "id")?.unwrap_or_default(),
            sequence: optional_string(fields, "sequence")?.unwrap_or_default(),
            modifications,
            unpaired_msa: optional_string(fields, "unpairedMsa")?,
            unpaired_msa_path: optional_string(fields, "unpairedMsaPath")?,
            paired_msa: optional_string(fields, "pairedMsa")?,
            paired_msa_path: optional_string(fields, "pairedMsaPath")?,
            templates: optional_value(fields, "templates"),
        }
        .build()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.to_dict()))
    }
}

#[derive(Debug, Clone)]
pub struct SequenceBuilder {
    kind: SequenceKind,
    id: String,
    sequence: String,
    modifications: Vec<ModificationEntry>,
    unpaired_msa: Option<String>,
    unpaired_msa_path: Option<String>,
    paired_msa: Option<String>,
    paired_msa_path: Option<String>,
    templates: Option<Value>,
}

impl SequenceBuilder {
    pub fn new(kind: SequenceKind, id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            sequence: sequence.into(),
            modifications: Vec::new(),
            unpaired_msa: None,
            unpaired_msa_path: None,
            paired_msa: None,
            paired_msa_path: None,
            templates: None,
        }
    }

    pub fn modifications<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ModificationEntry>,
    {
        self.modifications = entries.into_iter().map(Into::into).collect();
        self
    }
    pub fn unpaired_msa(mut self, msa: impl Into<String>) -> Self {
        self.unpaired_msa = Some(msa.into());
        self
    }
    pub fn unpaired_msa_path(mut self, path: impl Into<String>) -> Self {
        self.unpaired_msa_path = Some(path.into());
        self
    }
    pub fn paired_msa(mut self, msa: impl Into<String>) -> Self {
        self.paired_msa = Some(msa.into());
        self
    }
    pub fn paired_msa_path(mut self, path: impl Into<String>) -> Self {
        self.paired_msa_path = Some(path.into());
        self
    }
    pub fn templates(mut self, templates: Value) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Validates the collected fields.
    ///
    /// An MSA and its path form conflict only when both are non-empty; an
    /// empty string counts as not supplied.
    pub fn build(self) -> Result<Sequence, ConfigError> {
        if self.id.is_empty() {
            return Err(ConfigError::MissingRequiredField("id"));
        }
        if self.sequence.is_empty() {
            return Err(ConfigError::MissingRequiredField("sequence"));
        }

        if is_supplied(self.unpaired_msa.as_deref()) && is_supplied(self.unpaired_msa_path.as_deref()) {
            return Err(ConfigError::MutuallyExclusiveFieldsSet {
                first: "unpairedMsa",
                second: "unpairedMsaPath",
            });
        }
        if is_supplied(self.paired_msa.as_deref()) && is_supplied(self.paired_msa_path.as_deref()) {
            return Err(ConfigError::MutuallyExclusiveFieldsSet {
                first: "pairedMsa",
                second: "pairedMsaPath",
            });
        }

        let kind = self.kind;
        if let Some((position, character)) =
            alphabet::first_invalid(&self.sequence, |c| kind.is_valid_residue(c))
        {
            return Err(ConfigError::InvalidAlphabet {
                kind: kind.tag(),
                character,
                position,
            });
        }

        let modifications = self
            .modifications
            .into_iter()
            .map(ModificationEntry::normalize)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Sequence {
            kind,
            id: self.id,
            sequence: self.sequence,
            modifications,
            unpaired_msa: self.unpaired_msa,
            unpaired_msa_path: self.unpaired_msa_path,
            paired_msa: self.paired_msa,
            paired_msa_path: self.paired_msa_path,
            templates: self.templates,
        })
    }
}

fn is_supplied(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn protein_to_dict_contains_only_id_and_sequence() {
        let seq = Sequence::protein("seq1", "ACDEFG").unwrap();
        assert_eq!(
            Value::Object(seq.to_dict()),
            json!({"protein": {"id": "seq1", "sequence": "ACDEFG"}})
        );
    }

    #[test]
    fn protein_with_nonstandard_residue_fails_with_invalid_alphabet() {
        let err = Sequence::protein("bad", "ACDEFGZ").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAlphabet {
                kind: "protein",
                character: 'Z',
                position: 7,
            }
        );
    }

    #[test]
    fn type_tag_is_fixed_per_kind() {
        assert_eq!(Sequence::protein("p", "ACD").unwrap().type_tag(), "protein");
        assert_eq!(Sequence::dna("d", "ATCG").unwrap().type_tag(), "dna");
        assert_eq!(Sequence::rna("r", "AUCG").unwrap().type_tag(), "rna");
    }

    #[test]
    fn dna_and_rna_reject_each_others_distinguishing_base() {
        assert!(matches!(
            Sequence::dna("d", "ATCGU"),
            Err(ConfigError::InvalidAlphabet { character: 'U', .. })
        ));
        assert!(matches!(
            Sequence::rna("r", "AUCGT"),
            Err(ConfigError::InvalidAlphabet { character: 'T', .. })
        ));
    }

    #[test]
    fn validation_is_case_insensitive_but_casing_is_preserved() {
        let seq = Sequence::protein("p", "acdEFg").unwrap();
        assert_eq!(seq.sequence(), "acdEFg");
        assert_eq!(seq.to_dict()["protein"]["sequence"], json!("acdEFg"));
        assert!(Sequence::dna("d", "atcg").is_ok());
        assert!(Sequence::rna("r", "aucg").is_ok());
    }

    #[test]
    fn alphabet_membership_is_necessary_and_sufficient() {
        for kind in SequenceKind::ALL {
            for byte in 0u8..128 {
                let c = byte as char;
                let result = Sequence::builder(kind, "x", format!("A{}", c)).build();
                assert_eq!(
                    result.is_ok(),
                    kind.is_valid_residue(c),
                    "kind {kind} char {c:?}"
                );
            }
        }
    }

    #[test]
    fn empty_id_or_sequence_is_missing_required_field() {
        assert_eq!(
            Sequence::protein("", "ACD").unwrap_err(),
            ConfigError::MissingRequiredField("id")
        );
        assert_eq!(
            Sequence::dna("d", "").unwrap_err(),
            ConfigError::MissingRequiredField("sequence")
        );
    }

    #[test]
    fn both_forms_of_an_msa_are_rejected() {
        let unpaired = Sequence::builder(SequenceKind::Protein, "p", "ACD")
            .unpaired_msa(">query\nACD\n")
            .unpaired_msa_path("/msa/p.a3m")
            .build();
        assert_eq!(
            unpaired.unwrap_err(),
            ConfigError::MutuallyExclusiveFieldsSet {
                first: "unpairedMsa",
                second: "unpairedMsaPath",
            }
        );

        let paired = Sequence::builder(SequenceKind::Rna, "r", "AUCG")
            .paired_msa(">query\nAUCG\n")
            .paired_msa_path("/msa/r.a3m")
            .build();
        assert!(matches!(
            paired,
            Err(ConfigError::MutuallyExclusiveFieldsSet {
                first: "pairedMsa",
                ..
            })
        ));
    }

    #[test]
    fn empty_msa_alongside_a_path_is_accepted() {
        let seq = Sequence::builder(SequenceKind::Rna, "r", "AUCG")
            .paired_msa("")
            .paired_msa_path("/msa/r.a3m")
            .unpaired_msa("")
            .unpaired_msa_path("")
            .build()
            .unwrap();
        assert_eq!(seq.paired_msa(), Some(""));
        assert_eq!(seq.paired_msa_path(), Some("/msa/r.a3m"));
    }

    #[test]
    fn document_with_empty_inline_msa_and_path_round_trips() {
        let doc = json!({"protein": {
            "id": "p",
            "sequence": "ACD",
            "unpairedMsa": "",
            "unpairedMsaPath": "/msa/p.a3m"
        }});
        let seq = Sequence::from_dict(SequenceKind::Protein, &doc).unwrap();
        assert_eq!(seq.unpaired_msa(), Some(""));
        assert_eq!(Value::Object(seq.to_dict()), doc);
    }

    #[test]
    fn mutual_exclusion_is_checked_before_the_alphabet() {
        let err = Sequence::builder(SequenceKind::Protein, "p", "ZZZ")
            .paired_msa("x")
            .paired_msa_path("y")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MutuallyExclusiveFieldsSet { .. }));
    }

    #[test]
    fn one_form_of_each_msa_is_accepted_and_emitted() {
        let seq = Sequence::builder(SequenceKind::Protein, "p", "ACD")
            .unpaired_msa_path("/msa/unpaired.a3m")
            .paired_msa(">query\nACD\n")
            .templates(json!([{"mmcifPath": "/t/1abc.cif", "queryIndices": [0, 1]}]))
            .build()
            .unwrap();
        let body = &seq.to_dict()["protein"];
        let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            ["id", "sequence", "unpairedMsaPath", "pairedMsa", "templates"]
        );
        assert_eq!(body["templates"][0]["queryIndices"], json!([0, 1]));
    }

    #[test]
    fn modification_mappings_are_normalized_in_order() {
        let raw = json!({"ptmType": "acetylation", "ptmPosition": 5});
        let seq = Sequence::builder(SequenceKind::Protein, "m", "ACDEFGHIKL")
            .modifications([
                ModificationEntry::from(Modification::new("phosphorylation", 1)),
                ModificationEntry::from(raw.as_object().cloned().unwrap()),
            ])
            .build()
            .unwrap();
        assert_eq!(
            seq.modifications(),
            [
                Modification::new("phosphorylation", 1),
                Modification::new("acetylation", 5)
            ]
        );
        assert_eq!(
            seq.to_dict()["protein"]["modifications"],
            json!([
                {"ptmType": "phosphorylation", "ptmPosition": 1},
                {"ptmType": "acetylation", "ptmPosition": 5}
            ])
        );
    }

    #[test]
    fn empty_modification_list_is_not_emitted() {
        let seq = Sequence::builder(SequenceKind::Dna, "d", "ATCG")
            .modifications(Vec::<Modification>::new())
            .build()
            .unwrap();
        assert!(!seq.to_dict()["dna"].as_object().unwrap().contains_key("modifications"));
    }

    #[test]
    fn to_dict_has_exactly_one_top_level_key() {
        for kind in SequenceKind::ALL {
            let seq = Sequence::builder(kind, "x", "ACG").build().unwrap();
            let dict = seq.to_dict();
            assert_eq!(dict.len(), 1);
            assert!(dict.contains_key(kind.tag()));
        }
    }

    #[test]
    fn from_dict_round_trips_all_fields() {
        let original = Sequence::builder(SequenceKind::Rna, "r1", "AUCGAUCG")
            .modifications([Modification::new("2MG", 1)])
            .unpaired_msa(">query\nAUCGAUCG\n")
            .paired_msa_path("/msa/paired.a3m")
            .build()
            .unwrap();
        let parsed =
            Sequence::from_dict(SequenceKind::Rna, &Value::Object(original.to_dict())).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn from_dict_requires_the_kind_tag() {
        let doc = json!({"dna": {"id": "d", "sequence": "ATCG"}});
        assert!(matches!(
            Sequence::from_dict(SequenceKind::Protein, &doc),
            Err(ConfigError::MalformedDocument(_))
        ));
        let empty = json!({"protein": {}});
        assert!(matches!(
            Sequence::from_dict(SequenceKind::Protein, &empty),
            Err(ConfigError::MalformedDocument(_))
        ));
    }

    #[test]
    fn from_dict_requires_id_and_sequence_keys() {
        let doc = json!({"protein": {"id": "p"}});
        assert_eq!(
            Sequence::from_dict(SequenceKind::Protein, &doc).unwrap_err(),
            ConfigError::MissingRequiredField("sequence")
        );
    }

    #[test]
    fn from_dict_reapplies_construction_validation() {
        let doc = json!({"dna": {
            "id": "d",
            "sequence": "ATCG",
            "unpairedMsa": "x",
            "unpairedMsaPath": "y"
        }});
        assert!(matches!(
            Sequence::from_dict(SequenceKind::Dna, &doc),
            Err(ConfigError::MutuallyExclusiveFieldsSet { .. })
        ));
        let bad_alphabet = json!({"dna": {"id": "d", "sequence": "ATCN"}});
        assert!(matches!(
            Sequence::from_dict(SequenceKind::Dna, &bad_alphabet),
            Err(ConfigError::InvalidAlphabet { character: 'N', .. })
        ));
    }

    #[test]
    fn from_dict_rejects_non_mapping_input() {
        assert!(matches!(
            Sequence::from_dict(SequenceKind::Protein, &json!("ACDE")),
            Err(ConfigError::MalformedDocument(_))
        ));
    }

    #[test]
    fn kind_parsing_is_case_insensitive_and_closed() {
        assert_eq!("Protein".parse::<SequenceKind>().unwrap(), SequenceKind::Protein);
        assert_eq!("DNA".parse::<SequenceKind>().unwrap(), SequenceKind::Dna);
        assert_eq!("rna".parse::<SequenceKind>().unwrap(), SequenceKind::Rna);
        assert_eq!(
            "ligand".parse::<SequenceKind>().unwrap_err(),
            ConfigError::UnsupportedSequenceType("ligand".to_string())
        );
    }
}
