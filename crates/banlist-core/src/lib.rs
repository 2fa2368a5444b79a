//! banlist-core — banned-function list normalization.
//!
//! This crate exposes the normalization core and the thin file layer around
//! it, plus the configuration and error types shared with the binary.
//!
//! # Architecture
//!
//! ```text
//! listfile (read-all) ──► normalizer ──► listfile (write-all)
//!        │
//!        └──► error
//! ```
//!
//! The normalizer is pure and total. Only `listfile` touches the filesystem.

pub mod config;
pub mod error;
pub mod listfile;
pub mod normalizer;
pub mod types;

pub use error::ListError;
pub use normalizer::{normalize, normalize_with_report, render};
pub use types::{NormalizeReport, Outcome};
