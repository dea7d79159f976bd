//! Presentation glue: combine a generation result into one text block.

use sprig_codegen::{import_suggestion, GenerationResult};

/// Combine markup, optional style block, usage summary, and import
/// suggestion into the text the CLI prints.
pub fn combine(result: &GenerationResult) -> String {
    let mut out = String::new();
    out.push_str(&result.markup);

    if let Some(styles) = &result.styles {
        out.push_str("\n\n<style>\n");
        out.push_str(styles);
        out.push_str("\n</style>");
    }

    if !result.usage_counts.is_empty() {
        out.push_str("\n\n<!-- Components used:\n");
        for (kind, count) in &result.usage_counts {
            out.push_str(&format!("  {}: {}\n", kind.name(), count));
        }
        out.push_str("-->");
    }

    if let Some(line) = result
        .components_used
        .as_deref()
        .and_then(import_suggestion)
    {
        out.push_str(&format!("\n\n<!-- {line} -->"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_codegen::{GenerateOptions, MarkupGenerator};
    use sprig_core::{DesignDocument, DesignNode, NodeKind};

    fn result_for(nodes: Vec<DesignNode>) -> GenerationResult {
        let generator = MarkupGenerator::new(GenerateOptions::default()).unwrap();
        generator
            .generate(&DesignDocument {
                name: None,
                nodes,
                vars: Default::default(),
            })
            .unwrap()
    }

    #[test]
    fn combines_all_sections() {
        let result = result_for(vec![
            DesignNode::new("1:1", "Save Button", NodeKind::Frame).with_text("Save")
        ]);
        let text = combine(&result);

        assert!(text.contains("ui-button"));
        assert!(text.contains("<style>"));
        assert!(text.contains("<!-- Components used:\n  Button: 1"));
        assert!(text.contains(r#"import { Button } from "@sprig/ui";"#));
    }

    #[test]
    fn widgetless_tree_has_no_usage_summary() {
        let result = result_for(vec![
            DesignNode::new("1:1", "Hero", NodeKind::Frame)
        ]);
        let text = combine(&result);

        assert!(!text.contains("Components used"));
        assert!(!text.contains("import {"));
    }
}
