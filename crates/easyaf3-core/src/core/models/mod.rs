//! # Core Models Module
//!
//! Typed representation of an AlphaFold3 job-configuration document.
//!
//! ## Key Components
//!
//! - [`modification`] - Post-translational modification records
//! - [`sequence`] - Protein, DNA and RNA chain entries with alphabet validation
//! - [`job`] - The job configuration root, its dialect and version tags
//!
//! Every type validates on construction and converts to and from the JSON
//! mapping form through `to_dict` / `from_dict`.
//!
//! ```ignore
//! use easyaf3config::core::models::{job::{AfJobConfig, Dialect}, sequence::Sequence};
//!
//! let job = AfJobConfig::builder()
//!     .name("job1")
//!     .model_seeds([5311])
//!     .sequence(Sequence::protein("A", "ACDEFG")?)
//!     .dialect(Dialect::AlphaFold3)
//!     .build()?;
//! let document = job.to_dict();
//! ```

mod fields;
pub mod job;
pub mod modification;
pub mod sequence;

/// The JSON mapping form shared by every `to_dict` / `from_dict` pair.
pub type Mapping = serde_json::Map<String, serde_json::Value>;
