//! Configuration loading and resolution utilities.
//!
//! The pipeline is decomposed into small submodules: `sources` assembles the
//! layered [`config`] builder, `raw` mirrors the on-disk schema, and `load`
//! is the entry point returning the [`ResolvedConfig`] the binary runs with.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
