//! The ordered classification rule table.
//!
//! Rules are evaluated in table order and the first matching predicate
//! wins, so the order below is a semantic contract: a name containing both
//! "select" and "dropdown" resolves to Select because the Select rule
//! comes first, and "tab" is tested before the Dropdown/EmptyState rules
//! for the same reason. Reordering entries changes behavior.

use sprig_core::{DesignNode, NodeKind};

use super::infer;
use super::ClassifyOptions;
use crate::mapping::{ComponentKind, ComponentMapping};

/// One classification rule: a predicate over the node plus an extractor
/// producing the component mapping.
pub(crate) struct Rule {
    pub name: &'static str,
    pub matches: fn(&DesignNode, &str, &ClassifyOptions) -> bool,
    pub extract: fn(&DesignNode) -> ComponentMapping,
}

/// Rules in precedence order.
pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "button",
        matches: is_button,
        extract: extract_button,
    },
    Rule {
        name: "input",
        matches: is_input,
        extract: extract_input,
    },
    Rule {
        name: "checkbox",
        matches: is_checkbox,
        extract: extract_checkbox,
    },
    Rule {
        name: "radio",
        matches: is_radio,
        extract: extract_radio,
    },
    Rule {
        name: "select",
        matches: is_select,
        extract: extract_select,
    },
    Rule {
        name: "badge",
        matches: is_badge,
        extract: extract_badge,
    },
    Rule {
        name: "tag",
        matches: is_tag,
        extract: extract_tag,
    },
    Rule {
        name: "modal",
        matches: is_modal,
        extract: extract_modal,
    },
    Rule {
        name: "tab",
        matches: is_tab,
        extract: extract_tab,
    },
    Rule {
        name: "pagination",
        matches: is_pagination,
        extract: extract_pagination,
    },
    Rule {
        name: "progress-bar",
        matches: is_progress_bar,
        extract: extract_progress_bar,
    },
    Rule {
        name: "progress-circle",
        matches: is_progress_circle,
        extract: extract_progress_circle,
    },
    Rule {
        name: "notification",
        matches: is_notification,
        extract: extract_notification,
    },
    Rule {
        name: "spinner",
        matches: is_spinner,
        extract: extract_spinner,
    },
    Rule {
        name: "toggle",
        matches: is_toggle,
        extract: extract_toggle,
    },
    Rule {
        name: "tooltip",
        matches: is_tooltip,
        extract: extract_tooltip,
    },
    Rule {
        name: "slider",
        matches: is_slider,
        extract: extract_slider,
    },
    Rule {
        name: "breadcrumb",
        matches: is_breadcrumb,
        extract: extract_breadcrumb,
    },
    Rule {
        name: "divider",
        matches: is_divider,
        extract: extract_divider,
    },
    Rule {
        name: "dropdown",
        matches: is_dropdown,
        extract: extract_dropdown,
    },
    Rule {
        name: "empty-state",
        matches: is_empty_state,
        extract: extract_empty_state,
    },
    Rule {
        name: "featured-icon",
        matches: is_featured_icon,
        extract: extract_featured_icon,
    },
];

/// Rule names in precedence order.
pub(crate) fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|rule| rule.name).collect()
}

/// Node kinds eligible for widget classification. Text and image nodes
/// always take the generic fallback.
fn widget_kind(node: &DesignNode) -> bool {
    matches!(
        node.kind,
        NodeKind::Frame
            | NodeKind::Group
            | NodeKind::Component
            | NodeKind::Instance
            | NodeKind::Rectangle
    )
}

fn has_any(name: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| name.contains(t))
}

// Predicates. `name` is the node's display name, already lowercased.

fn is_button(node: &DesignNode, name: &str, opts: &ClassifyOptions) -> bool {
    // Instance nodes are treated as pre-instantiated component references
    // and map to Button regardless of name; see ClassifyOptions.
    if opts.instance_as_button && node.kind == NodeKind::Instance {
        return true;
    }
    widget_kind(node) && has_any(name, &["button", "btn"])
}

fn is_input(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["input", "field"])
}

fn is_checkbox(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["checkbox", "check"])
}

fn is_radio(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && name.contains("radio")
}

fn is_select(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["select", "combo"])
}

fn is_badge(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && name.contains("badge")
}

fn is_tag(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["tag", "chip"])
}

fn is_modal(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["modal", "dialog", "popup"])
}

fn is_tab(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && name.contains("tab") && !name.contains("table")
}

fn is_pagination(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["pagination", "pager"])
}

fn is_progress_bar(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && name.contains("progress") && name.contains("bar")
}

fn is_progress_circle(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && name.contains("progress") && has_any(name, &["circle", "circular"])
}

fn is_notification(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["notification", "alert", "toast"])
}

fn is_spinner(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["spinner", "loading", "loader"])
}

fn is_toggle(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["toggle", "switch"])
}

fn is_tooltip(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && name.contains("tooltip")
}

fn is_slider(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["slider", "range"])
}

fn is_breadcrumb(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["breadcrumb", "bread"])
}

fn is_divider(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    (widget_kind(node) || node.kind == NodeKind::Line)
        && has_any(name, &["divider", "separator", "line"])
}

fn is_dropdown(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && name.contains("dropdown") && !name.contains("select")
}

fn is_empty_state(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    widget_kind(node) && has_any(name, &["empty", "no-data", "no-result"])
}

fn is_featured_icon(node: &DesignNode, name: &str, _: &ClassifyOptions) -> bool {
    (widget_kind(node) || node.kind == NodeKind::Ellipse)
        && has_any(name, &["icon", "featured"])
}

// Extractors.

fn extract_button(node: &DesignNode) -> ComponentMapping {
    let label = infer::node_text(node).unwrap_or_else(|| node.name.clone());
    ComponentMapping::new(ComponentKind::Button)
        .with_prop("label", label)
        .with_prop("hierarchy", infer::infer_theme(&node.name))
        .with_prop("size", infer::infer_size(&node.name))
        .with_prop("disabled", infer::has_flag(&node.name, &["disabled"]))
        .with_prop("button_type", "button")
}

fn extract_input(node: &DesignNode) -> ComponentMapping {
    let mut mapping = ComponentMapping::new(ComponentKind::InputBase)
        .with_prop("size", infer::infer_size(&node.name))
        .with_prop("disabled", infer::has_flag(&node.name, &["disabled"]))
        .with_prop("required", infer::has_flag(&node.name, &["required"]));
    if let Some(label) = infer::find_child_text(node, "label") {
        mapping = mapping.with_prop("label", label);
    }
    if let Some(placeholder) =
        infer::find_child_text(node, "placeholder").or_else(|| infer::node_text(node))
    {
        mapping = mapping.with_prop("placeholder", placeholder);
    }
    mapping
}

fn extract_checkbox(node: &DesignNode) -> ComponentMapping {
    let label = infer::node_text(node).unwrap_or_else(|| node.name.clone());
    ComponentMapping::new(ComponentKind::Checkbox)
        .with_prop("label", label)
        .with_prop(
            "checked",
            infer::has_flag(&node.name, &["checked", "selected", "active", "on"]),
        )
        .with_prop("disabled", infer::has_flag(&node.name, &["disabled"]))
        .with_prop("size", infer::infer_size(&node.name))
}

fn extract_radio(node: &DesignNode) -> ComponentMapping {
    let label = infer::node_text(node).unwrap_or_else(|| node.name.clone());
    ComponentMapping::new(ComponentKind::Radio)
        .with_prop("label", label)
        .with_prop(
            "checked",
            infer::has_flag(&node.name, &["checked", "selected", "active"]),
        )
        .with_prop("disabled", infer::has_flag(&node.name, &["disabled"]))
        .with_prop("size", infer::infer_size(&node.name))
}

fn extract_select(node: &DesignNode) -> ComponentMapping {
    let mut mapping = ComponentMapping::new(ComponentKind::Select)
        .with_prop("items", infer::dropdown_items(node))
        .with_prop("size", infer::infer_size(&node.name))
        .with_prop("disabled", infer::has_flag(&node.name, &["disabled"]));
    if let Some(placeholder) = infer::node_text(node) {
        mapping = mapping.with_prop("placeholder", placeholder);
    }
    mapping
}

fn extract_badge(node: &DesignNode) -> ComponentMapping {
    let label = infer::node_text(node).unwrap_or_else(|| node.name.clone());
    ComponentMapping::new(ComponentKind::Badge)
        .with_prop("label", label)
        .with_prop("color", infer::infer_color(&node.name, "gray"))
        .with_prop("size", infer::infer_size(&node.name))
}

fn extract_tag(node: &DesignNode) -> ComponentMapping {
    let label = infer::node_text(node).unwrap_or_else(|| node.name.clone());
    ComponentMapping::new(ComponentKind::Tag)
        .with_prop("label", label)
        .with_prop("color", infer::infer_color(&node.name, "gray"))
        .with_prop("size", infer::infer_size(&node.name))
        .with_prop(
            "dismissible",
            infer::has_flag(&node.name, &["close", "dismiss"]),
        )
}

fn extract_modal(node: &DesignNode) -> ComponentMapping {
    let mut mapping = ComponentMapping::new(ComponentKind::Modal);
    if let Some(title) = infer::find_child_text(node, "title") {
        mapping = mapping.with_prop("title", title);
    }
    if let Some(description) = infer::find_child_text(node, "description") {
        mapping = mapping.with_prop("description", description);
    }
    mapping
}

fn extract_tab(node: &DesignNode) -> ComponentMapping {
    let kind = if node.name.to_lowercase().contains("vertical") {
        ComponentKind::VerticalTab
    } else {
        ComponentKind::HorizontalTab
    };
    ComponentMapping::new(kind)
        .with_prop("items", infer::tab_items(node))
        .with_prop("size", infer::infer_size(&node.name))
}

fn extract_pagination(node: &DesignNode) -> ComponentMapping {
    let text_children: Vec<&DesignNode> =
        node.children.iter().filter(|c| c.is_text_bearing()).collect();
    let pages = if text_children.is_empty() {
        5
    } else {
        text_children.len()
    };
    let current = text_children
        .iter()
        .position(|c| infer::has_flag(&c.name, &["active", "current"]))
        .map(|i| i + 1)
        .unwrap_or(1);

    ComponentMapping::new(ComponentKind::Pagination)
        .with_prop("pages", pages as f64)
        .with_prop("current", current as f64)
}

fn extract_progress_bar(node: &DesignNode) -> ComponentMapping {
    ComponentMapping::new(ComponentKind::ProgressBar)
        .with_prop("value", infer::parse_value(node).unwrap_or(50.0))
        .with_prop("size", infer::infer_size(&node.name))
        .with_prop("show_label", infer::has_flag(&node.name, &["label"]))
}

fn extract_progress_circle(node: &DesignNode) -> ComponentMapping {
    ComponentMapping::new(ComponentKind::ProgressCircle)
        .with_prop("value", infer::parse_value(node).unwrap_or(50.0))
        .with_prop("size", infer::infer_size(&node.name))
}

fn extract_notification(node: &DesignNode) -> ComponentMapping {
    let mut mapping = ComponentMapping::new(ComponentKind::Notification)
        .with_prop("color", infer::infer_color(&node.name, "info"));
    if let Some(title) = infer::find_child_text(node, "title") {
        mapping = mapping.with_prop("title", title);
    }
    if let Some(description) =
        infer::find_child_text(node, "description").or_else(|| infer::node_text(node))
    {
        mapping = mapping.with_prop("description", description);
    }
    mapping
}

fn extract_spinner(node: &DesignNode) -> ComponentMapping {
    ComponentMapping::new(ComponentKind::Spinner)
        .with_prop("size", infer::infer_size(&node.name))
        .with_prop("color", infer::infer_color(&node.name, "default"))
}

fn extract_toggle(node: &DesignNode) -> ComponentMapping {
    ComponentMapping::new(ComponentKind::Toggle)
        .with_prop(
            "on",
            infer::has_flag(&node.name, &["on", "checked", "active"]),
        )
        .with_prop("size", infer::infer_size(&node.name))
        .with_prop("disabled", infer::has_flag(&node.name, &["disabled"]))
}

fn extract_tooltip(node: &DesignNode) -> ComponentMapping {
    let text = infer::node_text(node).unwrap_or_else(|| node.name.clone());
    let position = ["top", "bottom", "left", "right"]
        .into_iter()
        .find(|p| infer::has_flag(&node.name, &[*p]))
        .unwrap_or("top");
    ComponentMapping::new(ComponentKind::Tooltip)
        .with_prop("text", text)
        .with_prop("position", position)
}

fn extract_slider(node: &DesignNode) -> ComponentMapping {
    ComponentMapping::new(ComponentKind::Slider)
        .with_prop("value", infer::parse_value(node).unwrap_or(50.0))
        .with_prop("disabled", infer::has_flag(&node.name, &["disabled"]))
}

fn extract_breadcrumb(node: &DesignNode) -> ComponentMapping {
    ComponentMapping::new(ComponentKind::BreadCrumb)
        .with_prop("items", infer::breadcrumb_items(node))
}

fn extract_divider(node: &DesignNode) -> ComponentMapping {
    let vertical = infer::has_flag(&node.name, &["vertical"])
        || node
            .bounds
            .is_some_and(|b| b.height > b.width);
    ComponentMapping::new(ComponentKind::Divider).with_prop(
        "orientation",
        if vertical { "vertical" } else { "horizontal" },
    )
}

fn extract_dropdown(node: &DesignNode) -> ComponentMapping {
    let label = infer::node_text(node).unwrap_or_else(|| node.name.clone());
    ComponentMapping::new(ComponentKind::Dropdown)
        .with_prop("label", label)
        .with_prop("items", infer::dropdown_items(node))
}

fn extract_empty_state(node: &DesignNode) -> ComponentMapping {
    let title = infer::find_child_text(node, "title")
        .or_else(|| infer::node_text(node))
        .unwrap_or_else(|| "No results found".to_string());
    let mut mapping =
        ComponentMapping::new(ComponentKind::EmptyState).with_prop("title", title);
    if let Some(description) = infer::find_child_text(node, "description") {
        mapping = mapping.with_prop("description", description);
    }
    mapping
}

fn extract_featured_icon(node: &DesignNode) -> ComponentMapping {
    ComponentMapping::new(ComponentKind::FeaturedIcon)
        .with_prop("color", infer::infer_color(&node.name, "gray"))
        .with_prop("size", infer::infer_size(&node.name))
}
