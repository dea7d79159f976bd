//! Node classification: ordered rule matching over the design tree.

pub mod infer;
mod rules;

use sprig_core::DesignNode;

use crate::mapping::ComponentMapping;

/// Options controlling classification behavior.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Treat `INSTANCE` nodes as Button mappings regardless of name.
    ///
    /// Matches an authoring convention where component instances in the
    /// source file are button presets. Disable to classify instances by
    /// name like any other node.
    pub instance_as_button: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            instance_as_button: true,
        }
    }
}

/// Classifies design nodes against the ordered rule table.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    options: ClassifyOptions,
}

impl Classifier {
    /// Create a classifier with the given options.
    pub fn new(options: ClassifyOptions) -> Self {
        Self { options }
    }

    /// Classify one node.
    ///
    /// Rules are evaluated in table order; the first matching predicate
    /// wins and its extractor's mapping is returned. `None` means no rule
    /// matched, which is the expected path for plain structural nodes.
    pub fn classify(&self, node: &DesignNode) -> Option<ComponentMapping> {
        let name = node.name.to_lowercase();
        rules::RULES
            .iter()
            .find(|rule| (rule.matches)(node, &name, &self.options))
            .map(|rule| (rule.extract)(node))
    }
}
