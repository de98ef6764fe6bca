//! # Core Module
//!
//! Data model, validation rules and document I/O for AlphaFold3 job
//! configurations.
//!
//! - **Models** ([`models`]) - Modifications, sequences and the job root
//! - **Errors** ([`error`]) - The validation failure taxonomy
//! - **File I/O** ([`io`]) - FASTA input and JSON document files
//! - **Utilities** ([`utils`]) - Residue and nucleotide alphabets

pub mod error;
pub mod io;
pub mod models;
pub mod utils;
