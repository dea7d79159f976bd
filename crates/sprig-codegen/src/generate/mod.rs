//! Recursive markup generation over a classified design tree.

mod styles;
mod templates;
mod widgets;

pub use templates::TemplateEngine;

use indexmap::IndexMap;
use serde_json::json;
use sprig_core::{DesignDocument, DesignNode, NodeKind};

use crate::classify::{infer, Classifier, ClassifyOptions};
use crate::error::Result;
use crate::mapping::{validate, ComponentKind, ComponentMapping};
use widgets::RenderCtx;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Attach a stylesheet for the used widget kinds to the result.
    pub include_styles: bool,
    /// Precede each widget fragment with a comment naming the widget kind
    /// and the node that produced it.
    pub debug_comments: bool,
    /// Emit normalized element ids (lowercase, underscore-collapsed)
    /// instead of the design tool's raw identifiers.
    pub normalize_ids: bool,
    /// Report the ordered list of distinct used kinds for import
    /// suggestions.
    pub import_suggestions: bool,
    /// Wrap the rendered tree in one outer container element.
    pub wrap_root: bool,
    /// Classification options.
    pub classify: ClassifyOptions,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            include_styles: true,
            debug_comments: true,
            normalize_ids: true,
            import_suggestions: true,
            wrap_root: true,
            classify: ClassifyOptions::default(),
        }
    }
}

/// Output of one full-tree generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Rendered markup in document order.
    pub markup: String,
    /// Stylesheet for the used widget kinds, when requested.
    pub styles: Option<String>,
    /// Ordered list of distinct used kinds, when requested.
    pub components_used: Option<Vec<ComponentKind>>,
    /// Usage count per kind, in first-use order.
    pub usage_counts: IndexMap<ComponentKind, usize>,
}

/// Per-call usage accounting. Created fresh for every [`MarkupGenerator::generate`]
/// call so no state leaks between runs.
#[derive(Default)]
struct Usage {
    counts: IndexMap<ComponentKind, usize>,
}

impl Usage {
    fn record(&mut self, kind: ComponentKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    fn used(&self) -> Vec<ComponentKind> {
        self.counts.keys().copied().collect()
    }
}

/// Renders design trees to component markup.
///
/// The generator holds no per-run state: usage accounting lives in the
/// call, so one instance can serve concurrent callers.
pub struct MarkupGenerator {
    engine: TemplateEngine<'static>,
    classifier: Classifier,
    options: GenerateOptions,
}

impl MarkupGenerator {
    /// Build a generator, registering all widget skeletons.
    pub fn new(options: GenerateOptions) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            classifier: Classifier::new(options.classify.clone()),
            options,
        })
    }

    /// Build a generator with default options.
    pub fn with_defaults() -> Result<Self> {
        Self::new(GenerateOptions::default())
    }

    /// Render a full document.
    pub fn generate(&self, doc: &DesignDocument) -> Result<GenerationResult> {
        let mut usage = Usage::default();
        let body = self.render_nodes(&doc.nodes, &mut usage)?;

        let markup = if self.options.wrap_root {
            format!("<div class=\"sprig-root\">\n{}\n</div>", body)
        } else {
            body
        };

        let used = usage.used();
        let styles = self.options.include_styles.then(|| styles::stylesheet(&used));
        let components_used = self.options.import_suggestions.then(|| used);

        Ok(GenerationResult {
            markup,
            styles,
            components_used,
            usage_counts: usage.counts,
        })
    }

    /// Render sibling nodes in document order, filtering fragments that
    /// are empty once trimmed.
    fn render_nodes(&self, nodes: &[DesignNode], usage: &mut Usage) -> Result<String> {
        let mut fragments = Vec::new();
        for node in nodes {
            let fragment = self.render_node(node, usage)?;
            if !fragment.trim().is_empty() {
                fragments.push(fragment);
            }
        }
        Ok(fragments.join("\n"))
    }

    fn render_node(&self, node: &DesignNode, usage: &mut Usage) -> Result<String> {
        if let Some(mapping) = self.classifier.classify(node) {
            // A mapping whose kind fails validation is treated as a
            // classification miss, not an error.
            if validate(&mapping) {
                return self.render_widget(node, &mapping, usage);
            }
        }
        self.render_generic(node, usage)
    }

    fn render_widget(
        &self,
        node: &DesignNode,
        mapping: &ComponentMapping,
        usage: &mut Usage,
    ) -> Result<String> {
        let kind = match mapping.kind() {
            Some(kind) => kind,
            None => return self.render_generic(node, usage),
        };
        usage.record(kind);

        let children = self.render_nodes(&node.children, usage)?;
        let ctx = RenderCtx {
            id: self.element_id(node),
            mapping,
            children,
        };

        let body = match widgets::renderer_for(kind) {
            Some(render) => render(&self.engine, &ctx)?,
            None => self.engine.render(
                templates::FALLBACK_TEMPLATE,
                &json!({
                    "tag": mapping.tag,
                    "id": ctx.id,
                    "class": mapping.class,
                    "children": ctx.children,
                }),
            )?,
        };

        if self.options.debug_comments {
            Ok(format!("<!-- {}: {} -->\n{}", kind.name(), node.name, body))
        } else {
            Ok(body)
        }
    }

    /// Generic structural markup for nodes no rule claimed.
    fn render_generic(&self, node: &DesignNode, usage: &mut Usage) -> Result<String> {
        let children = self.render_nodes(&node.children, usage)?;
        let id = self.element_id(node);
        let class = format!("node-{}", kind_slug(node.kind));
        let style = inline_style(node)
            .map(|s| format!(" style=\"{}\"", s))
            .unwrap_or_default();

        let mut content = Vec::new();
        if let Some(text) = node.text.as_deref() {
            if !text.is_empty() {
                content.push(escape_text(text));
            }
        }
        if !children.is_empty() {
            content.push(children);
        }
        let inner = content.join("\n");

        Ok(match node.kind {
            NodeKind::Text => {
                format!("<span id=\"{id}\" class=\"{class}\"{style}>{inner}</span>")
            }
            NodeKind::Image => {
                format!(
                    "<img id=\"{id}\" class=\"{class}\"{style} alt=\"{}\" />",
                    escape_text(&node.name)
                )
            }
            _ => format!("<div id=\"{id}\" class=\"{class}\"{style}>{inner}</div>"),
        })
    }

    fn element_id(&self, node: &DesignNode) -> String {
        if self.options.normalize_ids {
            let source = if node.name.is_empty() {
                &node.id
            } else {
                &node.name
            };
            infer::normalize_id(source)
        } else {
            node.id.clone()
        }
    }
}

/// Build an import-suggestion line for the used kinds.
pub fn import_suggestion(kinds: &[ComponentKind]) -> Option<String> {
    if kinds.is_empty() {
        return None;
    }
    let names: Vec<&str> = kinds.iter().map(ComponentKind::name).collect();
    Some(format!(
        "import {{ {} }} from \"@sprig/ui\";",
        names.join(", ")
    ))
}

fn kind_slug(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Text => "text",
        NodeKind::Frame => "frame",
        NodeKind::Group => "group",
        NodeKind::Rectangle => "rectangle",
        NodeKind::Ellipse => "ellipse",
        NodeKind::Image => "image",
        NodeKind::Instance => "instance",
        NodeKind::Component => "component",
        NodeKind::Line => "line",
        NodeKind::Other => "other",
    }
}

/// Inline style from opacity (only when not fully opaque) and corner
/// radius (only when present).
fn inline_style(node: &DesignNode) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(opacity) = node.opacity {
        if opacity < 1.0 {
            parts.push(format!("opacity: {}", opacity));
        }
    }
    if let Some(radius) = node.corner_radius {
        parts.push(format!("border-radius: {}px", radius));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::NodeKind;

    fn doc(nodes: Vec<DesignNode>) -> DesignDocument {
        DesignDocument {
            name: None,
            nodes,
            vars: Default::default(),
        }
    }

    fn plain_options() -> GenerateOptions {
        GenerateOptions {
            debug_comments: false,
            wrap_root: false,
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn text_node_renders_inline_fallback() {
        let generator = MarkupGenerator::new(plain_options()).unwrap();
        let node = DesignNode::new("1:1", "Greeting", NodeKind::Text).with_text("Hello");
        let result = generator.generate(&doc(vec![node])).unwrap();

        assert!(result.markup.contains(r#"<span id="greeting" class="node-text">Hello</span>"#));
        assert!(!result.markup.contains("ui-"));
        assert!(result.usage_counts.is_empty());
    }

    #[test]
    fn inline_style_from_opacity_and_radius() {
        let generator = MarkupGenerator::new(plain_options()).unwrap();
        let node = DesignNode::new("1:1", "Card", NodeKind::Frame)
            .with_opacity(0.5)
            .with_corner_radius(8.0);
        let result = generator.generate(&doc(vec![node])).unwrap();

        assert!(result
            .markup
            .contains(r#"style="opacity: 0.5; border-radius: 8px""#));

        let opaque = DesignNode::new("1:2", "Card", NodeKind::Frame).with_opacity(1.0);
        let result = generator.generate(&doc(vec![opaque])).unwrap();
        assert!(!result.markup.contains("style="));
    }

    #[test]
    fn sibling_fragments_join_without_blank_lines() {
        let generator = MarkupGenerator::new(plain_options()).unwrap();
        let nodes = vec![
            DesignNode::new("1:1", "A", NodeKind::Text).with_text("one"),
            DesignNode::new("1:2", "B", NodeKind::Text),
            DesignNode::new("1:3", "C", NodeKind::Text).with_text("two"),
        ];
        let result = generator.generate(&doc(nodes)).unwrap();
        assert!(!result.markup.contains("\n\n"));
    }

    #[test]
    fn usage_counts_accumulate_per_run() {
        let generator = MarkupGenerator::new(plain_options()).unwrap();
        let nodes = vec![
            DesignNode::new("1:1", "Save Button", NodeKind::Frame).with_text("Save"),
            DesignNode::new("1:2", "Cancel Button", NodeKind::Frame).with_text("Cancel"),
            DesignNode::new("1:3", "Status Badge", NodeKind::Frame).with_text("Active"),
        ];
        let result = generator.generate(&doc(nodes)).unwrap();

        assert_eq!(result.usage_counts.get(&ComponentKind::Button), Some(&2));
        assert_eq!(result.usage_counts.get(&ComponentKind::Badge), Some(&1));
        assert_eq!(
            result.components_used,
            Some(vec![ComponentKind::Button, ComponentKind::Badge])
        );
    }

    #[test]
    fn generation_is_idempotent() {
        let generator = MarkupGenerator::with_defaults().unwrap();
        let tree = doc(vec![DesignNode::new("1:1", "Form", NodeKind::Frame)
            .with_child(DesignNode::new("1:2", "Email Input", NodeKind::Frame))
            .with_child(DesignNode::new("1:3", "Submit Button", NodeKind::Frame).with_text("Go"))]);

        let first = generator.generate(&tree).unwrap();
        let second = generator.generate(&tree).unwrap();
        assert_eq!(first.markup, second.markup);
        assert_eq!(first.usage_counts, second.usage_counts);

        let fresh = MarkupGenerator::with_defaults().unwrap().generate(&tree).unwrap();
        assert_eq!(first.markup, fresh.markup);
    }

    #[test]
    fn debug_comments_name_kind_and_node() {
        let generator = MarkupGenerator::with_defaults().unwrap();
        let tree = doc(vec![
            DesignNode::new("1:1", "Primary Button", NodeKind::Frame).with_text("Save")
        ]);
        let result = generator.generate(&tree).unwrap();
        assert!(result.markup.contains("<!-- Button: Primary Button -->"));

        let silent = MarkupGenerator::new(GenerateOptions {
            debug_comments: false,
            ..GenerateOptions::default()
        })
        .unwrap();
        let result = silent.generate(&tree).unwrap();
        assert!(!result.markup.contains("<!--"));
    }

    #[test]
    fn wrap_and_styles_follow_options() {
        let tree = doc(vec![
            DesignNode::new("1:1", "Save Button", NodeKind::Frame).with_text("Save")
        ]);

        let default = MarkupGenerator::with_defaults().unwrap().generate(&tree).unwrap();
        assert!(default.markup.starts_with("<div class=\"sprig-root\">"));
        assert!(default.styles.as_deref().is_some_and(|s| s.contains(".ui-button")));

        let bare = MarkupGenerator::new(GenerateOptions {
            include_styles: false,
            wrap_root: false,
            import_suggestions: false,
            ..GenerateOptions::default()
        })
        .unwrap()
        .generate(&tree)
        .unwrap();
        assert!(bare.styles.is_none());
        assert!(bare.components_used.is_none());
        assert!(!bare.markup.contains("sprig-root"));
    }

    #[test]
    fn raw_ids_pass_through() {
        let generator = MarkupGenerator::new(GenerateOptions {
            normalize_ids: false,
            debug_comments: false,
            wrap_root: false,
            ..GenerateOptions::default()
        })
        .unwrap();
        let tree = doc(vec![
            DesignNode::new("10:23", "Primary Button", NodeKind::Frame).with_text("Save")
        ]);
        let result = generator.generate(&tree).unwrap();
        assert!(result.markup.contains(r#"id="10:23""#));
    }

    #[test]
    fn import_suggestion_lists_kinds_in_order() {
        assert_eq!(import_suggestion(&[]), None);
        assert_eq!(
            import_suggestion(&[ComponentKind::Button, ComponentKind::BreadCrumb]).as_deref(),
            Some(r#"import { Button, BreadCrumb } from "@sprig/ui";"#)
        );
    }
}
