//! Component classification and markup generation for Sprig design trees.
//!
//! This crate turns a simplified design-node tree into markup for the
//! `@sprig/ui` component library. An ordered rule engine decides which
//! nodes represent known widgets and extracts their semantic properties;
//! the markup generator renders widget skeletons for classified nodes and
//! generic structural markup for everything else, while accounting which
//! component kinds were used.
//!
//! # Example
//!
//! ```
//! use sprig_codegen::MarkupGenerator;
//! use sprig_core::{DesignDocument, DesignNode, NodeKind};
//!
//! let doc = DesignDocument {
//!     name: None,
//!     nodes: vec![DesignNode::new("1:1", "Primary Button", NodeKind::Frame)
//!         .with_text("Submit")],
//!     vars: Default::default(),
//! };
//!
//! let generator = MarkupGenerator::with_defaults()?;
//! let result = generator.generate(&doc)?;
//! assert!(result.markup.contains("ui-button"));
//! # Ok::<(), sprig_codegen::CodegenError>(())
//! ```

pub mod classify;
pub mod error;
pub mod generate;
pub mod mapping;

pub use classify::{Classifier, ClassifyOptions};
pub use error::{CodegenError, Result};
pub use generate::{import_suggestion, GenerateOptions, GenerationResult, MarkupGenerator};
pub use mapping::{validate, ComponentKind, ComponentMapping, MappingItem, PropValue};
