//! Deterministic six-digit codes for text labels.
//!
//! The crate hashes a bounded prefix of a label with FNV-1a and reduces the
//! result to six decimal digits: short enough to say out loud, stable enough
//! to find the note again. The root module re-exports the whole public
//! surface so embedders never dig through the module hierarchy.

pub mod app_dirs;
mod code;
mod hash;
mod prefix;

pub use code::{Code, DEFAULT_MAX_BYTES, Grouping, ParseGroupingError, compute};
pub use hash::fnv1a_64;
pub use prefix::utf8_prefix;
