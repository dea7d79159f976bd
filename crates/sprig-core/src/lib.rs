//! Core types for the Sprig design-to-markup pipeline.
//!
//! This crate defines the simplified design-node tree as produced by an
//! external design-file extractor, plus the shared style/variable table
//! that rides along with it. Everything here is a read-only data contract:
//! the classification and generation crates consume these types but never
//! mutate them.

pub mod node;
pub mod vars;

pub use node::{BoundingBox, DesignDocument, DesignNode, NodeKind};
pub use vars::{GlobalVars, VarDef};
