//! # EasyAF3Config Core Library
//!
//! Builds, validates and serializes AlphaFold3 job-configuration documents.
//!
//! ## Layers
//!
//! - **[`core`]: The Foundation.** The typed data model (modifications,
//!   protein/DNA/RNA sequences, the job root), its validation rules, the
//!   two-way mapping to the JSON document form, and the FASTA/JSON file
//!   collaborators.
//!
//! - **[`workflows`]: The Public API.** Converts raw `(identifier, sequence)`
//!   records into protein sequences and assembles complete jobs from them,
//!   reporting per-record progress to an optional callback.

pub mod core;
pub mod workflows;
