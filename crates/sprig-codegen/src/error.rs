//! Error types for markup generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during markup generation.
///
/// Classification misses and rejected mappings are not errors; they take
/// the generic-rendering fallback instead.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Template rendering error.
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// A widget skeleton failed to register.
    #[error("invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),
}
