//! Per-widget style blocks for the optional emitted stylesheet.
//!
//! The stylesheet is assembled per run: base structural rules plus one
//! block per component kind actually used, in usage order.

use crate::mapping::ComponentKind;

/// Rules for the generic structural fallback elements.
const BASE: &str = "\
.sprig-root { font-family: Inter, system-ui, sans-serif; color: #101828; }
.node-frame, .node-group, .node-rectangle, .node-ellipse { display: block; }
.node-text { display: inline; }
.node-image { max-width: 100%; display: block; }";

const KIND_STYLES: &[(ComponentKind, &str)] = &[
    (
        ComponentKind::Button,
        "\
.ui-button { display: inline-flex; align-items: center; gap: 8px; border-radius: 8px; border: 1px solid transparent; cursor: pointer; }
.ui-button-primary { background: #7f56d9; color: #ffffff; }
.ui-button-secondary { background: #ffffff; color: #344054; border-color: #d0d5dd; }
.ui-button-secondary-gray { background: #ffffff; color: #475467; border-color: #d0d5dd; }
.ui-button-tertiary { background: transparent; color: #475467; }
.ui-button-link { background: transparent; color: #6941c6; padding: 0; }
.ui-button-destructive { background: #d92d20; color: #ffffff; }
.ui-button-disabled { opacity: 0.5; cursor: not-allowed; }",
    ),
    (
        ComponentKind::InputBase,
        "\
.ui-input-base { display: flex; flex-direction: column; gap: 6px; }
.ui-input-base-label { font-size: 14px; font-weight: 500; color: #344054; }
.ui-input-base-field { border: 1px solid #d0d5dd; border-radius: 8px; padding: 10px 14px; }
.ui-input-base-required { color: #d92d20; margin-left: 2px; }
.ui-input-base-disabled .ui-input-base-field { background: #f9fafb; color: #667085; }",
    ),
    (
        ComponentKind::Checkbox,
        "\
.ui-checkbox { display: inline-flex; align-items: center; gap: 8px; cursor: pointer; }
.ui-checkbox-input { width: 16px; height: 16px; accent-color: #7f56d9; }
.ui-checkbox-disabled { opacity: 0.5; cursor: not-allowed; }",
    ),
    (
        ComponentKind::Radio,
        "\
.ui-radio { display: inline-flex; align-items: center; gap: 8px; cursor: pointer; }
.ui-radio-input { width: 16px; height: 16px; accent-color: #7f56d9; }
.ui-radio-disabled { opacity: 0.5; cursor: not-allowed; }",
    ),
    (
        ComponentKind::Select,
        "\
.ui-select-control { border: 1px solid #d0d5dd; border-radius: 8px; padding: 10px 14px; background: #ffffff; }
.ui-select-disabled .ui-select-control { background: #f9fafb; color: #667085; }",
    ),
    (
        ComponentKind::Badge,
        "\
.ui-badge { display: inline-flex; align-items: center; border-radius: 16px; padding: 2px 10px; font-size: 12px; font-weight: 500; }
.ui-badge-gray { background: #f2f4f7; color: #344054; }
.ui-badge-success { background: #ecfdf3; color: #027a48; }
.ui-badge-warning { background: #fffaeb; color: #b54708; }
.ui-badge-error { background: #fef3f2; color: #b42318; }
.ui-badge-info { background: #eff8ff; color: #175cd3; }",
    ),
    (
        ComponentKind::Modal,
        "\
.ui-modal-overlay { position: fixed; inset: 0; background: rgba(16, 24, 40, 0.5); display: flex; align-items: center; justify-content: center; }
.ui-modal { background: #ffffff; border-radius: 12px; padding: 24px; max-width: 480px; width: 100%; }
.ui-modal-header { display: flex; justify-content: space-between; align-items: flex-start; }
.ui-modal-title { font-size: 18px; font-weight: 600; margin: 0; }
.ui-modal-close { background: none; border: none; font-size: 20px; cursor: pointer; }",
    ),
    (
        ComponentKind::HorizontalTab,
        "\
.ui-horizontal-tab { display: flex; gap: 4px; border-bottom: 1px solid #eaecf0; }
.ui-tab-item { background: none; border: none; padding: 8px 12px; color: #667085; cursor: pointer; }
.ui-tab-item-active { color: #6941c6; border-bottom: 2px solid #6941c6; }",
    ),
    (
        ComponentKind::VerticalTab,
        "\
.ui-vertical-tab { display: flex; flex-direction: column; gap: 4px; border-right: 1px solid #eaecf0; }
.ui-tab-item { background: none; border: none; padding: 8px 12px; color: #667085; cursor: pointer; text-align: left; }
.ui-tab-item-active { color: #6941c6; background: #f9f5ff; }",
    ),
    (
        ComponentKind::Pagination,
        "\
.ui-pagination { display: flex; align-items: center; gap: 2px; }
.ui-pagination-prev, .ui-pagination-next, .ui-pagination-page { background: none; border: none; padding: 8px 12px; border-radius: 8px; cursor: pointer; }
.ui-pagination-page-active { background: #f9fafb; font-weight: 600; }",
    ),
    (
        ComponentKind::ProgressBar,
        "\
.ui-progress-bar { display: flex; align-items: center; gap: 12px; }
.ui-progress-bar-track { flex: 1; height: 8px; border-radius: 4px; background: #eaecf0; overflow: hidden; }
.ui-progress-bar-fill { height: 100%; border-radius: 4px; background: #7f56d9; }",
    ),
    (
        ComponentKind::ProgressCircle,
        "\
.ui-progress-circle { position: relative; display: inline-flex; align-items: center; justify-content: center; }
.ui-progress-circle-track { fill: none; stroke: #eaecf0; stroke-width: 4; }
.ui-progress-circle-fill { fill: none; stroke: #7f56d9; stroke-width: 4; stroke-linecap: round; }",
    ),
    (
        ComponentKind::Notification,
        "\
.ui-notification { display: flex; justify-content: space-between; gap: 12px; border: 1px solid #eaecf0; border-radius: 12px; padding: 16px; }
.ui-notification-title { font-weight: 600; margin: 0; }
.ui-notification-success { border-color: #6ce9a6; background: #f6fef9; }
.ui-notification-warning { border-color: #fec84b; background: #fffcf5; }
.ui-notification-error { border-color: #fda29b; background: #fffbfa; }
.ui-notification-info { border-color: #84caff; background: #f5faff; }",
    ),
    (
        ComponentKind::Spinner,
        "\
.ui-spinner-indicator { width: 24px; height: 24px; border: 3px solid #eaecf0; border-top-color: #7f56d9; border-radius: 50%; animation: ui-spin 0.8s linear infinite; }
@keyframes ui-spin { to { transform: rotate(360deg); } }",
    ),
    (
        ComponentKind::Tag,
        "\
.ui-tag { display: inline-flex; align-items: center; gap: 4px; border: 1px solid #d0d5dd; border-radius: 6px; padding: 2px 8px; font-size: 12px; }
.ui-tag-close { background: none; border: none; cursor: pointer; color: #98a2b3; }",
    ),
    (
        ComponentKind::Tooltip,
        "\
.ui-tooltip-wrapper { position: relative; display: inline-block; }
.ui-tooltip { position: absolute; background: #101828; color: #ffffff; border-radius: 8px; padding: 8px 12px; font-size: 12px; white-space: nowrap; }
.ui-tooltip-top { bottom: 100%; left: 50%; transform: translateX(-50%); }",
    ),
    (
        ComponentKind::Slider,
        "\
.ui-slider { display: flex; align-items: center; gap: 12px; }
.ui-slider-input { flex: 1; accent-color: #7f56d9; }
.ui-slider-disabled { opacity: 0.5; }",
    ),
    (
        ComponentKind::Toggle,
        "\
.ui-toggle-input { position: absolute; opacity: 0; }
.ui-toggle-track { display: inline-block; width: 36px; height: 20px; border-radius: 10px; background: #eaecf0; transition: background 0.15s; }
.ui-toggle-input:checked + .ui-toggle-track { background: #7f56d9; }
.ui-toggle-thumb { display: block; width: 16px; height: 16px; margin: 2px; border-radius: 50%; background: #ffffff; transition: transform 0.15s; }
.ui-toggle-input:checked + .ui-toggle-track .ui-toggle-thumb { transform: translateX(16px); }",
    ),
    (
        ComponentKind::BreadCrumb,
        "\
.ui-bread-crumb-list { display: flex; gap: 8px; list-style: none; margin: 0; padding: 0; }
.ui-bread-crumb-item + .ui-bread-crumb-item::before { content: \"/\"; margin-right: 8px; color: #d0d5dd; }
.ui-bread-crumb-item-active { color: #6941c6; font-weight: 600; }",
    ),
    (
        ComponentKind::Divider,
        "\
.ui-divider { border: none; border-top: 1px solid #eaecf0; margin: 8px 0; }
.ui-divider-vertical { border-top: none; border-left: 1px solid #eaecf0; height: 100%; margin: 0 8px; }",
    ),
    (
        ComponentKind::Dropdown,
        "\
.ui-dropdown { position: relative; display: inline-block; }
.ui-dropdown-trigger { display: inline-flex; align-items: center; gap: 8px; border: 1px solid #d0d5dd; border-radius: 8px; padding: 10px 14px; background: #ffffff; cursor: pointer; }
.ui-dropdown-menu { position: absolute; min-width: 100%; margin: 4px 0 0; padding: 4px; list-style: none; border: 1px solid #eaecf0; border-radius: 8px; background: #ffffff; box-shadow: 0 4px 8px rgba(16, 24, 40, 0.1); }
.ui-dropdown-item { padding: 8px 10px; border-radius: 6px; cursor: pointer; }",
    ),
    (
        ComponentKind::EmptyState,
        "\
.ui-empty-state { display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 32px; text-align: center; }
.ui-empty-state-title { font-weight: 600; margin: 0; }
.ui-empty-state-description { color: #667085; margin: 0; }",
    ),
    (
        ComponentKind::FeaturedIcon,
        "\
.ui-featured-icon { display: inline-flex; align-items: center; justify-content: center; width: 40px; height: 40px; border-radius: 50%; }
.ui-featured-icon-gray { background: #f2f4f7; color: #344054; }
.ui-featured-icon-success { background: #ecfdf3; color: #027a48; }
.ui-featured-icon-warning { background: #fffaeb; color: #b54708; }
.ui-featured-icon-error { background: #fef3f2; color: #b42318; }",
    ),
];

/// Assemble the stylesheet for one run: base rules plus one block per
/// used kind, in usage order.
pub(crate) fn stylesheet(kinds: &[ComponentKind]) -> String {
    let mut blocks = vec![BASE.to_string()];
    for kind in kinds {
        if let Some((_, css)) = KIND_STYLES.iter().find(|(k, _)| k == kind) {
            blocks.push(css.to_string());
        }
    }
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_style_block() {
        for kind in ComponentKind::ALL {
            assert!(
                KIND_STYLES.iter().any(|(k, _)| *k == kind),
                "no style block for {kind}"
            );
        }
    }

    #[test]
    fn stylesheet_includes_only_used_kinds() {
        let css = stylesheet(&[ComponentKind::Button, ComponentKind::Badge]);
        assert!(css.contains(".sprig-root"));
        assert!(css.contains(".ui-button-primary"));
        assert!(css.contains(".ui-badge-success"));
        assert!(!css.contains(".ui-toggle-track"));
    }
}
