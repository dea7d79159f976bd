//! Widget markup skeletons and the template engine that renders them.
//!
//! Every supported widget kind has one deterministic skeleton, registered
//! once when the engine is built. Skeletons interpolate inferred
//! properties; `{{{children}}}` slots take pre-rendered child markup raw,
//! everything else is HTML-escaped by the engine.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;

const BUTTON: &str = r#"<button id="{{id}}" type="{{button_type}}" class="ui-button ui-button-{{hierarchy}} ui-button-{{size}}{{#if disabled}} ui-button-disabled{{/if}}"{{#if disabled}} disabled{{/if}}><span class="ui-button-label">{{label}}</span></button>"#;

const INPUT_BASE: &str = r#"<div id="{{id}}" class="ui-input-base ui-input-base-{{size}}{{#if disabled}} ui-input-base-disabled{{/if}}">{{#if label}}<label class="ui-input-base-label">{{label}}{{#if required}}<span class="ui-input-base-required">*</span>{{/if}}</label>{{/if}}<input type="text" class="ui-input-base-field" placeholder="{{placeholder}}"{{#if disabled}} disabled{{/if}}{{#if required}} required{{/if}} /></div>"#;

const CHECKBOX: &str = r#"<label id="{{id}}" class="ui-checkbox ui-checkbox-{{size}}{{#if disabled}} ui-checkbox-disabled{{/if}}"><input type="checkbox" class="ui-checkbox-input"{{#if checked}} checked{{/if}}{{#if disabled}} disabled{{/if}} /><span class="ui-checkbox-label">{{label}}</span></label>"#;

const RADIO: &str = r#"<label id="{{id}}" class="ui-radio ui-radio-{{size}}{{#if disabled}} ui-radio-disabled{{/if}}"><input type="radio" class="ui-radio-input"{{#if checked}} checked{{/if}}{{#if disabled}} disabled{{/if}} /><span class="ui-radio-label">{{label}}</span></label>"#;

const SELECT: &str = r#"<div id="{{id}}" class="ui-select ui-select-{{size}}{{#if disabled}} ui-select-disabled{{/if}}"><select class="ui-select-control"{{#if disabled}} disabled{{/if}}><option value="" disabled selected>{{placeholder}}</option>{{#each items}}<option value="{{value}}">{{label}}</option>{{/each}}</select></div>"#;

const BADGE: &str = r#"<span id="{{id}}" class="ui-badge ui-badge-{{color}} ui-badge-{{size}}">{{label}}</span>"#;

const MODAL: &str = r#"<div id="{{id}}" class="ui-modal-overlay"><div class="ui-modal" role="dialog" aria-modal="true"><div class="ui-modal-header">{{#if title}}<h2 class="ui-modal-title">{{title}}</h2>{{/if}}<button type="button" class="ui-modal-close" aria-label="Close">&times;</button></div><div class="ui-modal-body">{{#if description}}<p class="ui-modal-description">{{description}}</p>{{/if}}{{{children}}}</div></div></div>"#;

const HORIZONTAL_TAB: &str = r#"<div id="{{id}}" class="ui-horizontal-tab ui-horizontal-tab-{{size}}" role="tablist">{{#each items}}<button type="button" role="tab" class="ui-tab-item{{#if active}} ui-tab-item-active{{/if}}" aria-selected="{{active}}">{{label}}</button>{{/each}}</div>"#;

const VERTICAL_TAB: &str = r#"<div id="{{id}}" class="ui-vertical-tab ui-vertical-tab-{{size}}" role="tablist" aria-orientation="vertical">{{#each items}}<button type="button" role="tab" class="ui-tab-item{{#if active}} ui-tab-item-active{{/if}}" aria-selected="{{active}}">{{label}}</button>{{/each}}</div>"#;

const PAGINATION: &str = r#"<nav id="{{id}}" class="ui-pagination" aria-label="Pagination"><button type="button" class="ui-pagination-prev">Previous</button>{{#each pages}}<button type="button" class="ui-pagination-page{{#if active}} ui-pagination-page-active{{/if}}">{{label}}</button>{{/each}}<button type="button" class="ui-pagination-next">Next</button></nav>"#;

const PROGRESS_BAR: &str = r#"<div id="{{id}}" class="ui-progress-bar ui-progress-bar-{{size}}" role="progressbar" aria-valuenow="{{value}}" aria-valuemin="0" aria-valuemax="100"><div class="ui-progress-bar-track"><div class="ui-progress-bar-fill" style="width: {{value}}%"></div></div>{{#if show_label}}<span class="ui-progress-bar-label">{{value}}%</span>{{/if}}</div>"#;

const PROGRESS_CIRCLE: &str = r#"<div id="{{id}}" class="ui-progress-circle ui-progress-circle-{{size}}" role="progressbar" aria-valuenow="{{value}}" aria-valuemin="0" aria-valuemax="100"><svg viewBox="0 0 36 36" class="ui-progress-circle-svg"><circle class="ui-progress-circle-track" cx="18" cy="18" r="16"></circle><circle class="ui-progress-circle-fill" cx="18" cy="18" r="16" stroke-dasharray="{{value}}, 100"></circle></svg><span class="ui-progress-circle-label">{{value}}%</span></div>"#;

const NOTIFICATION: &str = r#"<div id="{{id}}" class="ui-notification ui-notification-{{color}}" role="alert"><div class="ui-notification-content">{{#if title}}<p class="ui-notification-title">{{title}}</p>{{/if}}{{#if description}}<p class="ui-notification-description">{{description}}</p>{{/if}}</div><button type="button" class="ui-notification-close" aria-label="Dismiss">&times;</button></div>"#;

const SPINNER: &str = r#"<div id="{{id}}" class="ui-spinner ui-spinner-{{size}} ui-spinner-{{color}}" role="status" aria-label="Loading"><div class="ui-spinner-indicator"></div></div>"#;

const TAG: &str = r#"<span id="{{id}}" class="ui-tag ui-tag-{{color}} ui-tag-{{size}}">{{label}}{{#if dismissible}}<button type="button" class="ui-tag-close" aria-label="Remove">&times;</button>{{/if}}</span>"#;

const TOOLTIP: &str = r#"<div id="{{id}}" class="ui-tooltip-wrapper">{{{children}}}<div class="ui-tooltip ui-tooltip-{{position}}" role="tooltip">{{text}}</div></div>"#;

const SLIDER: &str = r#"<div id="{{id}}" class="ui-slider{{#if disabled}} ui-slider-disabled{{/if}}"><input type="range" class="ui-slider-input" min="0" max="100" value="{{value}}"{{#if disabled}} disabled{{/if}} /><span class="ui-slider-value">{{value}}</span></div>"#;

const TOGGLE: &str = r#"<label id="{{id}}" class="ui-toggle ui-toggle-{{size}}{{#if disabled}} ui-toggle-disabled{{/if}}"><input type="checkbox" class="ui-toggle-input" role="switch"{{#if on}} checked{{/if}}{{#if disabled}} disabled{{/if}} /><span class="ui-toggle-track"><span class="ui-toggle-thumb"></span></span></label>"#;

const BREAD_CRUMB: &str = r#"<nav id="{{id}}" class="ui-bread-crumb" aria-label="Breadcrumb"><ol class="ui-bread-crumb-list">{{#each items}}<li class="ui-bread-crumb-item{{#if active}} ui-bread-crumb-item-active{{/if}}">{{label}}</li>{{/each}}</ol></nav>"#;

const DIVIDER: &str = r#"<hr id="{{id}}" class="ui-divider ui-divider-{{orientation}}" />"#;

const DROPDOWN: &str = r#"<div id="{{id}}" class="ui-dropdown"><button type="button" class="ui-dropdown-trigger" aria-haspopup="menu">{{label}}<span class="ui-dropdown-caret"></span></button><ul class="ui-dropdown-menu" role="menu">{{#each items}}<li class="ui-dropdown-item" role="menuitem" data-value="{{value}}">{{label}}</li>{{/each}}</ul></div>"#;

const EMPTY_STATE: &str = r#"<div id="{{id}}" class="ui-empty-state"><div class="ui-empty-state-icon"></div><p class="ui-empty-state-title">{{title}}</p>{{#if description}}<p class="ui-empty-state-description">{{description}}</p>{{/if}}{{{children}}}</div>"#;

const FEATURED_ICON: &str = r#"<div id="{{id}}" class="ui-featured-icon ui-featured-icon-{{color}} ui-featured-icon-{{size}}"><span class="ui-featured-icon-glyph"></span></div>"#;

/// Defensive default for a validated mapping with no bespoke template.
const WIDGET_FALLBACK: &str = r#"<{{tag}} id="{{id}}" class="{{class}}">{{{children}}}</{{tag}}>"#;

/// Template name for the defensive widget fallback.
pub(crate) const FALLBACK_TEMPLATE: &str = "widget_fallback";

/// Registered skeletons, keyed by template name (snake_case of the kind).
const TEMPLATES: &[(&str, &str)] = &[
    ("button", BUTTON),
    ("input_base", INPUT_BASE),
    ("checkbox", CHECKBOX),
    ("radio", RADIO),
    ("select", SELECT),
    ("badge", BADGE),
    ("modal", MODAL),
    ("horizontal_tab", HORIZONTAL_TAB),
    ("vertical_tab", VERTICAL_TAB),
    ("pagination", PAGINATION),
    ("progress_bar", PROGRESS_BAR),
    ("progress_circle", PROGRESS_CIRCLE),
    ("notification", NOTIFICATION),
    ("spinner", SPINNER),
    ("tag", TAG),
    ("tooltip", TOOLTIP),
    ("slider", SLIDER),
    ("toggle", TOGGLE),
    ("bread_crumb", BREAD_CRUMB),
    ("divider", DIVIDER),
    ("dropdown", DROPDOWN),
    ("empty_state", EMPTY_STATE),
    ("featured_icon", FEATURED_ICON),
    (FALLBACK_TEMPLATE, WIDGET_FALLBACK),
];

/// Template engine with all widget skeletons pre-registered.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Build the engine and register every skeleton.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        for (name, template) in TEMPLATES {
            handlebars.register_template_string(name, *template)?;
        }
        Ok(Self { handlebars })
    }

    /// Render a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render(name, data)?)
    }
}
