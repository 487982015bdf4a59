//! Deterministic renaming of generated DNS-record Terraform.
//!
//! Record resources are grouped by (fqdn, record type) and renamed to
//! `{type}_{fqdn}` with a positional suffix for duplicates. The import script is
//! rewritten with the same mapping so the two files stay in step.

pub mod config;
pub mod core;
pub mod mapping;
pub mod pipeline;

pub use crate::config::CanonizerConfig;
pub use crate::core::error::CanonError;
pub use crate::pipeline::{canonize, run, Canonized, Written};
