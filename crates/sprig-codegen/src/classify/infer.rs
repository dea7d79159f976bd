//! Heuristic property inferencers.
//!
//! Small pure functions that derive semantic properties from a node's
//! name, text, and children. All of them are total: they return the stated
//! default instead of failing when a field is absent. Name matching is
//! case-insensitive substring scanning and deliberately fuzzy; overlapping
//! terms resolve by scan order, not by word boundaries.

use regex::Regex;
use sprig_core::DesignNode;
use std::sync::OnceLock;

use crate::mapping::MappingItem;

/// Size tokens in scan order. Longer tokens come before their substrings
/// so "2xl" never resolves to "xl" and "xxlarge" never resolves to "lg".
const SIZE_TOKENS: &[(&str, &[&str])] = &[
    ("xxs", &["xxs", "tiny"]),
    ("2xl", &["2xl", "xxlarge", "xxl"]),
    ("xl", &["xl", "xlarge"]),
    ("xs", &["xs", "small"]),
    ("sm", &["sm"]),
    ("lg", &["lg", "large"]),
];

/// Button theme tokens in scan order.
const THEME_TOKENS: &[(&str, &[&str])] = &[
    ("primary", &["primary"]),
    ("secondary", &["secondary"]),
    ("destructive", &["destructive", "danger", "delete"]),
    ("link", &["link"]),
    ("tertiary", &["tertiary"]),
    ("secondary-gray", &["gray"]),
];

/// Semantic color tokens in scan order.
const COLOR_TOKENS: &[(&str, &[&str])] = &[
    ("success", &["success", "green"]),
    ("warning", &["warning", "yellow"]),
    ("error", &["error", "red"]),
    ("info", &["info", "blue"]),
];

fn scan(
    name: &str,
    tokens: &'static [(&'static str, &'static [&'static str])],
) -> Option<&'static str> {
    let lower = name.to_lowercase();
    for (result, terms) in tokens {
        if terms.iter().any(|t| lower.contains(t)) {
            return Some(result);
        }
    }
    None
}

/// Infer a size token from a display name. Defaults to "md".
pub fn infer_size(name: &str) -> &'static str {
    scan(name, SIZE_TOKENS).unwrap_or("md")
}

/// Infer a button hierarchy/theme from a display name. Defaults to
/// "primary".
pub fn infer_theme(name: &str) -> &'static str {
    scan(name, THEME_TOKENS).unwrap_or("primary")
}

/// Infer a semantic color from a display name, with a call-site default.
pub fn infer_color(name: &str, default: &str) -> String {
    scan(name, COLOR_TOKENS)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Whether any of the given terms appears in the name.
pub fn has_flag(name: &str, terms: &[&str]) -> bool {
    let lower = name.to_lowercase();
    terms.iter().any(|t| lower.contains(t))
}

/// A node's literal text, or the text of its first text-bearing immediate
/// child.
pub fn node_text(node: &DesignNode) -> Option<String> {
    if node.is_text_bearing() {
        return node.text.clone();
    }
    node.children
        .iter()
        .find(|c| c.is_text_bearing())
        .and_then(|c| c.text.clone())
}

/// Text of the first immediate child whose name contains the given term.
pub fn find_child_text(node: &DesignNode, term: &str) -> Option<String> {
    node.children
        .iter()
        .find(|c| c.name.to_lowercase().contains(term) && c.is_text_bearing())
        .and_then(|c| c.text.clone())
}

/// Tab items from a node's immediate text-bearing children. A child whose
/// own name contains "active" is flagged as the active tab.
pub fn tab_items(node: &DesignNode) -> Vec<MappingItem> {
    node.children
        .iter()
        .filter(|c| c.is_text_bearing())
        .map(|c| {
            MappingItem::new(c.text.clone().unwrap_or_default())
                .active(c.name.to_lowercase().contains("active"))
        })
        .collect()
}

/// Dropdown items from a node's immediate text-bearing children, each
/// valued by its 1-based position. Falls back to a fixed two-item list
/// when no children are text-bearing.
pub fn dropdown_items(node: &DesignNode) -> Vec<MappingItem> {
    let items: Vec<MappingItem> = node
        .children
        .iter()
        .filter(|c| c.is_text_bearing())
        .enumerate()
        .map(|(i, c)| {
            MappingItem::new(c.text.clone().unwrap_or_default()).with_value((i + 1).to_string())
        })
        .collect();

    if items.is_empty() {
        vec![
            MappingItem::new("Option 1").with_value("1"),
            MappingItem::new("Option 2").with_value("2"),
        ]
    } else {
        items
    }
}

/// Breadcrumb segments from a node's immediate text-bearing children,
/// the last one flagged as the current page. Defaults to a two-segment
/// trail when no children are text-bearing.
pub fn breadcrumb_items(node: &DesignNode) -> Vec<MappingItem> {
    let mut items: Vec<MappingItem> = node
        .children
        .iter()
        .filter(|c| c.is_text_bearing())
        .map(|c| MappingItem::new(c.text.clone().unwrap_or_default()))
        .collect();

    if items.is_empty() {
        items = vec![MappingItem::new("Home"), MappingItem::new("Page")];
    }
    if let Some(last) = items.last_mut() {
        last.active = true;
    }
    items
}

fn digits() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"\d+").expect("valid regex"))
}

/// First unsigned-integer run in the node's name, else in its text.
pub fn parse_value(node: &DesignNode) -> Option<f64> {
    let from = |s: &str| digits().find(s).and_then(|m| m.as_str().parse::<f64>().ok());
    from(&node.name).or_else(|| node.text.as_deref().and_then(from))
}

fn non_alnum() -> &'static Regex {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"))
}

/// Normalize an identifier: lowercase, collapse non-alphanumeric runs to
/// single underscores, strip leading/trailing underscores.
pub fn normalize_id(raw: &str) -> String {
    let lower = raw.to_lowercase();
    non_alnum()
        .replace_all(&lower, "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::NodeKind;

    fn frame(name: &str) -> DesignNode {
        DesignNode::new("1:1", name, NodeKind::Frame)
    }

    fn text_child(id: &str, name: &str, text: &str) -> DesignNode {
        DesignNode::new(id, name, NodeKind::Text).with_text(text)
    }

    #[test]
    fn size_inference_is_total() {
        assert_eq!(infer_size("Button"), "md");
        assert_eq!(infer_size(""), "md");
    }

    #[test]
    fn size_inference_is_order_sensitive() {
        assert_eq!(infer_size("Button 2xl"), "2xl");
        assert_eq!(infer_size("Button xxlarge"), "2xl");
        assert_eq!(infer_size("Button xl"), "xl");
        assert_eq!(infer_size("Button xlarge"), "xl");
        assert_eq!(infer_size("Button large"), "lg");
        assert_eq!(infer_size("Button small"), "xs");
        assert_eq!(infer_size("Button sm"), "sm");
        assert_eq!(infer_size("Tiny badge"), "xxs");
    }

    #[test]
    fn theme_inference() {
        assert_eq!(infer_theme("Primary Button"), "primary");
        assert_eq!(infer_theme("Danger CTA"), "destructive");
        assert_eq!(infer_theme("Delete Button"), "destructive");
        assert_eq!(infer_theme("Gray Button"), "secondary-gray");
        assert_eq!(infer_theme("Button"), "primary");
    }

    #[test]
    fn color_inference_uses_call_site_default() {
        assert_eq!(infer_color("Success Badge", "gray"), "success");
        assert_eq!(infer_color("Red Alert", "info"), "error");
        assert_eq!(infer_color("Badge", "gray"), "gray");
        assert_eq!(infer_color("Notification", "info"), "info");
    }

    #[test]
    fn flags_are_substring_based() {
        assert!(has_flag("Checkbox Disabled", &["disabled"]));
        assert!(has_flag("input REQUIRED", &["required"]));
        assert!(!has_flag("Checkbox", &["disabled"]));
    }

    #[test]
    fn node_text_falls_back_to_first_text_child() {
        let node = frame("Card")
            .with_child(frame("Spacer"))
            .with_child(text_child("1:2", "Label", "Hello"));
        assert_eq!(node_text(&node).as_deref(), Some("Hello"));
        assert_eq!(node_text(&frame("Empty")), None);
    }

    #[test]
    fn find_child_text_matches_titled_children() {
        let node = frame("Modal")
            .with_child(text_child("1:2", "Modal Title", "Confirm"))
            .with_child(text_child("1:3", "Description", "Are you sure?"));
        assert_eq!(find_child_text(&node, "title").as_deref(), Some("Confirm"));
        assert_eq!(
            find_child_text(&node, "description").as_deref(),
            Some("Are you sure?")
        );
        assert_eq!(find_child_text(&node, "footer"), None);
    }

    #[test]
    fn tab_items_flag_active_child() {
        let node = frame("Tab Group")
            .with_child(text_child("1:2", "Tab 1", "Overview"))
            .with_child(text_child("1:3", "Tab 2 Active", "Details"))
            .with_child(text_child("1:4", "Tab 3", "History"));

        let items = tab_items(&node);
        assert_eq!(items.len(), 3);
        assert!(!items[0].active);
        assert!(items[1].active);
        assert_eq!(items[1].label, "Details");
    }

    #[test]
    fn dropdown_items_default_when_no_text_children() {
        let items = dropdown_items(&frame("Dropdown"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Option 1");
        assert_eq!(items[0].value.as_deref(), Some("1"));

        let node = frame("Dropdown")
            .with_child(text_child("1:2", "Item", "Edit"))
            .with_child(text_child("1:3", "Item", "Delete"));
        let items = dropdown_items(&node);
        assert_eq!(items[1].label, "Delete");
        assert_eq!(items[1].value.as_deref(), Some("2"));
    }

    #[test]
    fn breadcrumb_marks_last_segment_active() {
        let node = frame("Breadcrumb")
            .with_child(text_child("1:2", "Crumb", "Home"))
            .with_child(text_child("1:3", "Crumb", "Settings"))
            .with_child(text_child("1:4", "Crumb", "Profile"));
        let items = breadcrumb_items(&node);
        assert_eq!(items.len(), 3);
        assert!(items[2].active);
        assert!(!items[0].active);
    }

    #[test]
    fn parse_value_scans_name_then_text() {
        assert_eq!(parse_value(&frame("Progress Bar 75")), Some(75.0));
        let node = frame("Progress Bar").with_text("40%");
        assert_eq!(parse_value(&node), Some(40.0));
        assert_eq!(parse_value(&frame("Progress Bar")), None);
    }

    #[test]
    fn normalize_id_collapses_runs() {
        assert_eq!(normalize_id("Primary Button"), "primary_button");
        assert_eq!(normalize_id("10:23"), "10_23");
        assert_eq!(normalize_id("  --Weird__Name!!  "), "weird_name");
        assert_eq!(normalize_id("___"), "");
    }
}
