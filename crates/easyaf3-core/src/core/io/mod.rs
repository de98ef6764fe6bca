//! Input/output collaborators for the job model.
//!
//! The model types never touch the filesystem themselves; this module reads raw
//! FASTA records and persists job documents as JSON behind a trait-based
//! interface.

pub mod fasta;
pub mod json;
pub mod traits;
