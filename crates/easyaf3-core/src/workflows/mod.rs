//! High-level entry points that tie the FASTA reader, the conversion bridge
//! and the job model together.

pub mod convert;
pub mod error;
pub mod progress;
