//! Widget renderers: one context-building function per component kind,
//! dispatched through a table keyed by the same enumeration the validator
//! checks. Adding a widget kind means adding one table entry plus one
//! function.

use convert_case::{Case, Casing};
use indexmap::IndexMap;
use serde_json::json;

use super::templates::TemplateEngine;
use crate::error::Result;
use crate::mapping::{ComponentKind, ComponentMapping, MappingItem, PropValue};

/// Per-node rendering context handed to a widget renderer.
pub(crate) struct RenderCtx<'a> {
    /// Emitted element id, already normalized per the naming option.
    pub id: String,
    /// The validated mapping for this node.
    pub mapping: &'a ComponentMapping,
    /// Pre-rendered markup of the node's children.
    pub children: String,
}

pub(crate) type RenderFn = fn(&TemplateEngine, &RenderCtx) -> Result<String>;

/// Dispatch table in kind order.
pub(crate) const RENDERERS: &[(ComponentKind, RenderFn)] = &[
    (ComponentKind::Button, render_button),
    (ComponentKind::InputBase, render_input_base),
    (ComponentKind::Checkbox, render_checkbox),
    (ComponentKind::Radio, render_radio),
    (ComponentKind::Select, render_select),
    (ComponentKind::Badge, render_badge),
    (ComponentKind::Modal, render_modal),
    (ComponentKind::HorizontalTab, render_tab),
    (ComponentKind::VerticalTab, render_tab),
    (ComponentKind::Pagination, render_pagination),
    (ComponentKind::ProgressBar, render_progress),
    (ComponentKind::ProgressCircle, render_progress),
    (ComponentKind::Notification, render_notification),
    (ComponentKind::Spinner, render_spinner),
    (ComponentKind::Tag, render_tag),
    (ComponentKind::Tooltip, render_tooltip),
    (ComponentKind::Slider, render_slider),
    (ComponentKind::Toggle, render_toggle),
    (ComponentKind::BreadCrumb, render_breadcrumb),
    (ComponentKind::Divider, render_divider),
    (ComponentKind::Dropdown, render_dropdown),
    (ComponentKind::EmptyState, render_empty_state),
    (ComponentKind::FeaturedIcon, render_featured_icon),
];

/// Look up the renderer for a kind.
pub(crate) fn renderer_for(kind: ComponentKind) -> Option<RenderFn> {
    RENDERERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, f)| *f)
}

/// Template name for a kind (snake_case of the component name).
fn template_name(kind: ComponentKind) -> String {
    kind.name().to_case(Case::Snake)
}

type Props = IndexMap<String, PropValue>;

fn str_prop(props: &Props, key: &str, default: &str) -> String {
    props
        .get(key)
        .and_then(PropValue::as_str)
        .unwrap_or(default)
        .to_string()
}

fn bool_prop(props: &Props, key: &str) -> bool {
    props.get(key).and_then(PropValue::as_bool).unwrap_or(false)
}

fn num_prop(props: &Props, key: &str, default: f64) -> f64 {
    props.get(key).and_then(PropValue::as_num).unwrap_or(default)
}

fn items_prop(props: &Props, key: &str) -> Vec<MappingItem> {
    props
        .get(key)
        .and_then(PropValue::as_items)
        .map(<[MappingItem]>::to_vec)
        .unwrap_or_default()
}

fn render_button(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "button",
        &json!({
            "id": ctx.id,
            "button_type": str_prop(p, "button_type", "button"),
            "hierarchy": str_prop(p, "hierarchy", "primary"),
            "size": str_prop(p, "size", "xs"),
            "disabled": bool_prop(p, "disabled"),
            "label": str_prop(p, "label", "Button"),
        }),
    )
}

fn render_input_base(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "input_base",
        &json!({
            "id": ctx.id,
            "size": str_prop(p, "size", "md"),
            "label": str_prop(p, "label", ""),
            "placeholder": str_prop(p, "placeholder", ""),
            "disabled": bool_prop(p, "disabled"),
            "required": bool_prop(p, "required"),
        }),
    )
}

fn render_checkbox(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "checkbox",
        &json!({
            "id": ctx.id,
            "size": str_prop(p, "size", "md"),
            "label": str_prop(p, "label", "Checkbox"),
            "checked": bool_prop(p, "checked"),
            "disabled": bool_prop(p, "disabled"),
        }),
    )
}

fn render_radio(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "radio",
        &json!({
            "id": ctx.id,
            "size": str_prop(p, "size", "md"),
            "label": str_prop(p, "label", "Radio"),
            "checked": bool_prop(p, "checked"),
            "disabled": bool_prop(p, "disabled"),
        }),
    )
}

fn render_select(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "select",
        &json!({
            "id": ctx.id,
            "size": str_prop(p, "size", "md"),
            "placeholder": str_prop(p, "placeholder", "Select an option"),
            "disabled": bool_prop(p, "disabled"),
            "items": items_prop(p, "items"),
        }),
    )
}

fn render_badge(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "badge",
        &json!({
            "id": ctx.id,
            "label": str_prop(p, "label", "Badge"),
            "color": str_prop(p, "color", "gray"),
            "size": str_prop(p, "size", "md"),
        }),
    )
}

fn render_modal(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "modal",
        &json!({
            "id": ctx.id,
            "title": str_prop(p, "title", ""),
            "description": str_prop(p, "description", ""),
            "children": ctx.children,
        }),
    )
}

fn render_tab(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    let kind = ctx.mapping.kind().unwrap_or(ComponentKind::HorizontalTab);
    engine.render(
        &template_name(kind),
        &json!({
            "id": ctx.id,
            "size": str_prop(p, "size", "md"),
            "items": items_prop(p, "items"),
        }),
    )
}

fn render_pagination(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    let total = num_prop(p, "pages", 5.0).max(1.0) as usize;
    let current = num_prop(p, "current", 1.0).max(1.0) as usize;
    let pages: Vec<serde_json::Value> = (1..=total)
        .map(|i| json!({ "label": i.to_string(), "active": i == current }))
        .collect();
    engine.render("pagination", &json!({ "id": ctx.id, "pages": pages }))
}

fn render_progress(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    let kind = ctx.mapping.kind().unwrap_or(ComponentKind::ProgressBar);
    // Out-of-range design values are clamped, never rejected.
    let value = num_prop(p, "value", 50.0).clamp(0.0, 100.0).round() as i64;
    engine.render(
        &template_name(kind),
        &json!({
            "id": ctx.id,
            "size": str_prop(p, "size", "md"),
            "value": value,
            "show_label": bool_prop(p, "show_label"),
        }),
    )
}

fn render_notification(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "notification",
        &json!({
            "id": ctx.id,
            "color": str_prop(p, "color", "info"),
            "title": str_prop(p, "title", ""),
            "description": str_prop(p, "description", ""),
        }),
    )
}

fn render_spinner(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "spinner",
        &json!({
            "id": ctx.id,
            "size": str_prop(p, "size", "md"),
            "color": str_prop(p, "color", "default"),
        }),
    )
}

fn render_tag(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "tag",
        &json!({
            "id": ctx.id,
            "label": str_prop(p, "label", "Tag"),
            "color": str_prop(p, "color", "gray"),
            "size": str_prop(p, "size", "md"),
            "dismissible": bool_prop(p, "dismissible"),
        }),
    )
}

fn render_tooltip(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "tooltip",
        &json!({
            "id": ctx.id,
            "text": str_prop(p, "text", ""),
            "position": str_prop(p, "position", "top"),
            "children": ctx.children,
        }),
    )
}

fn render_slider(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    let value = num_prop(p, "value", 50.0).clamp(0.0, 100.0).round() as i64;
    engine.render(
        "slider",
        &json!({
            "id": ctx.id,
            "value": value,
            "disabled": bool_prop(p, "disabled"),
        }),
    )
}

fn render_toggle(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "toggle",
        &json!({
            "id": ctx.id,
            "size": str_prop(p, "size", "md"),
            "on": bool_prop(p, "on"),
            "disabled": bool_prop(p, "disabled"),
        }),
    )
}

fn render_breadcrumb(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "bread_crumb",
        &json!({ "id": ctx.id, "items": items_prop(p, "items") }),
    )
}

fn render_divider(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "divider",
        &json!({
            "id": ctx.id,
            "orientation": str_prop(p, "orientation", "horizontal"),
        }),
    )
}

fn render_dropdown(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "dropdown",
        &json!({
            "id": ctx.id,
            "label": str_prop(p, "label", "Options"),
            "items": items_prop(p, "items"),
        }),
    )
}

fn render_empty_state(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "empty_state",
        &json!({
            "id": ctx.id,
            "title": str_prop(p, "title", "No results found"),
            "description": str_prop(p, "description", ""),
            "children": ctx.children,
        }),
    )
}

fn render_featured_icon(engine: &TemplateEngine, ctx: &RenderCtx) -> Result<String> {
    let p = &ctx.mapping.props;
    engine.render(
        "featured_icon",
        &json!({
            "id": ctx.id,
            "color": str_prop(p, "color", "gray"),
            "size": str_prop(p, "size", "md"),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(mapping: &'a ComponentMapping) -> RenderCtx<'a> {
        RenderCtx {
            id: "widget".to_string(),
            mapping,
            children: String::new(),
        }
    }

    #[test]
    fn every_kind_has_a_renderer() {
        for kind in ComponentKind::ALL {
            assert!(renderer_for(kind).is_some(), "no renderer for {kind}");
        }
    }

    #[test]
    fn template_names_are_snake_case() {
        assert_eq!(template_name(ComponentKind::InputBase), "input_base");
        assert_eq!(template_name(ComponentKind::BreadCrumb), "bread_crumb");
        assert_eq!(template_name(ComponentKind::ProgressCircle), "progress_circle");
    }

    #[test]
    fn progress_values_are_clamped() {
        let engine = TemplateEngine::new().unwrap();

        let over = ComponentMapping::new(ComponentKind::ProgressBar).with_prop("value", 150.0);
        let out = render_progress(&engine, &ctx(&over)).unwrap();
        assert!(out.contains(r#"aria-valuenow="100""#));
        assert!(out.contains("width: 100%"));

        let under = ComponentMapping::new(ComponentKind::ProgressCircle).with_prop("value", -20.0);
        let out = render_progress(&engine, &ctx(&under)).unwrap();
        assert!(out.contains(r#"aria-valuenow="0""#));
    }

    #[test]
    fn pagination_builds_page_items() {
        let engine = TemplateEngine::new().unwrap();
        let mapping = ComponentMapping::new(ComponentKind::Pagination)
            .with_prop("pages", 3.0)
            .with_prop("current", 2.0);
        let out = render_pagination(&engine, &ctx(&mapping)).unwrap();

        assert_eq!(out.matches("ui-pagination-page").count(), 4);
        assert_eq!(out.matches("ui-pagination-page-active").count(), 1);
        assert!(out.contains(">2<"));
    }

    #[test]
    fn button_falls_back_to_widget_defaults() {
        let engine = TemplateEngine::new().unwrap();
        let mapping = ComponentMapping::new(ComponentKind::Button);
        let out = render_button(&engine, &ctx(&mapping)).unwrap();
        assert!(out.contains("ui-button-primary"));
        assert!(out.contains("ui-button-xs"));
        assert!(out.contains(">Button<"));
    }
}
