//! Design source access for Sprig.
//!
//! Retrieves already-simplified design documents, either from the design
//! source service over HTTP or from a captured JSON file on disk. This is
//! a glue layer: it performs I/O strictly before the generation core runs
//! and never inspects the tree beyond parsing it.

pub mod client;
pub mod error;

pub use client::{load_document, DesignSource};
pub use error::{FetchError, Result};
