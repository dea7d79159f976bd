//! Component mappings: the rule engine's output for a single node.

use convert_case::{Case, Casing};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// The supported widget kinds of the target component library.
///
/// This enumeration is exhaustive: the validator rejects any mapping whose
/// component name is not one of these, and the generator falls back to
/// generic rendering for rejected mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentKind {
    Button,
    InputBase,
    Checkbox,
    Radio,
    Select,
    Badge,
    Modal,
    HorizontalTab,
    VerticalTab,
    Pagination,
    ProgressBar,
    ProgressCircle,
    Notification,
    Spinner,
    Tag,
    Tooltip,
    Slider,
    Toggle,
    BreadCrumb,
    Divider,
    Dropdown,
    EmptyState,
    FeaturedIcon,
}

impl ComponentKind {
    /// All supported kinds, in import-list order.
    pub const ALL: [ComponentKind; 23] = [
        Self::Button,
        Self::InputBase,
        Self::Checkbox,
        Self::Radio,
        Self::Select,
        Self::Badge,
        Self::Modal,
        Self::HorizontalTab,
        Self::VerticalTab,
        Self::Pagination,
        Self::ProgressBar,
        Self::ProgressCircle,
        Self::Notification,
        Self::Spinner,
        Self::Tag,
        Self::Tooltip,
        Self::Slider,
        Self::Toggle,
        Self::BreadCrumb,
        Self::Divider,
        Self::Dropdown,
        Self::EmptyState,
        Self::FeaturedIcon,
    ];

    /// The component name as it appears in mappings and import lists.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::InputBase => "InputBase",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio",
            Self::Select => "Select",
            Self::Badge => "Badge",
            Self::Modal => "Modal",
            Self::HorizontalTab => "HorizontalTab",
            Self::VerticalTab => "VerticalTab",
            Self::Pagination => "Pagination",
            Self::ProgressBar => "ProgressBar",
            Self::ProgressCircle => "ProgressCircle",
            Self::Notification => "Notification",
            Self::Spinner => "Spinner",
            Self::Tag => "Tag",
            Self::Tooltip => "Tooltip",
            Self::Slider => "Slider",
            Self::Toggle => "Toggle",
            Self::BreadCrumb => "BreadCrumb",
            Self::Divider => "Divider",
            Self::Dropdown => "Dropdown",
            Self::EmptyState => "EmptyState",
            Self::FeaturedIcon => "FeaturedIcon",
        }
    }

    /// Look up a kind by its component name.
    ///
    /// This is the membership check behind [`validate`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Base style-class name for this kind (`ui-*` convention).
    pub fn class_name(&self) -> String {
        format!("ui-{}", self.name().to_case(Case::Kebab))
    }

    /// Default element tag used when no bespoke template applies.
    pub fn default_tag(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Badge | Self::Tag => "span",
            Self::Checkbox | Self::Radio | Self::Toggle => "label",
            Self::Pagination | Self::BreadCrumb => "nav",
            Self::Divider => "hr",
            _ => "div",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inferred property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Items(Vec<MappingItem>),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[MappingItem]> {
        match self {
            Self::Items(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<MappingItem>> for PropValue {
    fn from(items: Vec<MappingItem>) -> Self {
        Self::Items(items)
    }
}

/// One structured sub-item (tab, dropdown option, breadcrumb segment).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub active: bool,
}

impl MappingItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            active: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// The rule engine's output for one node.
///
/// `component` is kept as a plain string rather than a [`ComponentKind`] so
/// extended rule tables stay expressible; the generator trusts a mapping
/// only after [`validate`] confirms membership in the supported set.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentMapping {
    /// Component name; must pass [`validate`] before the generator uses it.
    pub component: String,
    /// Inferred properties in insertion order.
    pub props: IndexMap<String, PropValue>,
    /// Default element tag when no bespoke template exists.
    pub tag: String,
    /// Base style-class name.
    pub class: String,
    /// Pre-resolved child mappings. Reserved for composite widgets;
    /// unused by the current generators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentMapping>>,
}

impl ComponentMapping {
    /// Create a mapping for a supported kind with empty properties.
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            component: kind.name().to_string(),
            props: IndexMap::new(),
            tag: kind.default_tag().to_string(),
            class: kind.class_name(),
            children: None,
        }
    }

    /// Add a property.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Get a property value.
    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// The resolved kind, if the component name is supported.
    pub fn kind(&self) -> Option<ComponentKind> {
        ComponentKind::from_name(&self.component)
    }
}

/// Confirm a mapping's component kind belongs to the supported set.
///
/// Pure membership check; the sole gate between the rule engine and the
/// generator.
pub fn validate(mapping: &ComponentMapping) -> bool {
    mapping.kind().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_are_distinct_and_resolvable() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ComponentKind::ALL.len(), 23);
    }

    #[test]
    fn validator_accepts_supported_kind() {
        let mapping = ComponentMapping::new(ComponentKind::Button);
        assert!(validate(&mapping));
    }

    #[test]
    fn validator_rejects_unknown_kind() {
        let mut mapping = ComponentMapping::new(ComponentKind::Button);
        mapping.component = "Carousel".to_string();
        assert!(!validate(&mapping));

        mapping.component = "button".to_string();
        assert!(!validate(&mapping), "membership check is case-sensitive");
    }

    #[test]
    fn class_names_follow_ui_convention() {
        assert_eq!(ComponentKind::Button.class_name(), "ui-button");
        assert_eq!(ComponentKind::InputBase.class_name(), "ui-input-base");
        assert_eq!(ComponentKind::BreadCrumb.class_name(), "ui-bread-crumb");
        assert_eq!(ComponentKind::FeaturedIcon.class_name(), "ui-featured-icon");
    }

    #[test]
    fn props_preserve_insertion_order() {
        let mapping = ComponentMapping::new(ComponentKind::Badge)
            .with_prop("label", "New")
            .with_prop("color", "success")
            .with_prop("size", "md");

        let keys: Vec<_> = mapping.props.keys().cloned().collect();
        assert_eq!(keys, vec!["label", "color", "size"]);
        assert_eq!(mapping.prop("color").and_then(PropValue::as_str), Some("success"));
    }
}
