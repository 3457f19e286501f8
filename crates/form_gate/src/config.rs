use std::time::Duration;

use crate::error::FormGateError;
use crate::rules::RuleSet;
use crate::theme::ThemeTable;

/// Trailing-edge delay applied to `input` events of every field.
pub const INPUT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Forms enrolled in validation and submit gating.
pub const WHITELISTED_FORMS: &[&str] = &[
    "wf-form-contact-form",
    "wf-form-newsletter-form-footer",
    "wf-form-newsletter-form-sidebar",
    "wf-form-capabilities-form",
];

/// Its submit button is driven by the step navigation of the contact page.
pub const EXEMPT_SUBMIT_FORM: &str = "wf-form-contact-form";

/// Class names, attributes and selectors the page markup is expected to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupContract {
    /// Attribute carrying the field type marker.
    pub field_attribute: &'static str,
    pub field_selector: &'static str,
    /// The consent checkbox is the element right after this one.
    pub consent_selector: &'static str,
    /// The submit state classes go on the parent of this element.
    pub submit_selector: &'static str,
    pub custom_checkbox_selector: &'static str,
    pub step_selector: &'static str,

    pub error_text_class: &'static str,
    pub hidden_class: &'static str,
    /// Set on a field's parent while its error text is visible.
    pub focused_class: &'static str,
    pub valid_class: &'static str,
    pub submit_enabled_class: &'static str,
    pub submit_disabled_class: &'static str,
    /// Followed by the checkbox id, e.g. `checked-consent`.
    pub checked_class_prefix: &'static str,
    pub focus_visible_class: &'static str,
}

impl MarkupContract {
    pub const fn standard() -> Self {
        Self {
            field_attribute: "input",
            field_selector: "input[input], textarea[input]",
            consent_selector: ".w-checkbox-input",
            submit_selector: ".w-button",
            custom_checkbox_selector: ".w-checkbox-input.form_checkbox-field",
            step_selector: ".form-step",
            error_text_class: "text-error-state",
            hidden_class: "hidden",
            focused_class: "is-focused",
            valid_class: "input-valid-state",
            submit_enabled_class: "submit-button-enabled",
            submit_disabled_class: "submit-button-disabled",
            checked_class_prefix: "checked-",
            focus_visible_class: "focus-visible",
        }
    }
}

impl Default for MarkupContract {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything the gate needs, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub rules: RuleSet,
    pub themes: ThemeTable,
    pub markup: MarkupContract,
    pub whitelist: Vec<&'static str>,
    pub exempt_submit_form: &'static str,
    pub input_debounce: Duration,
}

impl FormConfig {
    pub fn standard() -> Result<Self, FormGateError> {
        Ok(Self {
            rules: RuleSet::standard()?,
            themes: ThemeTable::standard(),
            markup: MarkupContract::standard(),
            whitelist: WHITELISTED_FORMS.to_vec(),
            exempt_submit_form: EXEMPT_SUBMIT_FORM,
            input_debounce: INPUT_DEBOUNCE,
        })
    }

    pub fn is_whitelisted(&self, form_id: &str) -> bool {
        self.whitelist.iter().any(|id| *id == form_id)
    }

    /// Debounce delay in whole milliseconds, as browser timers take it.
    pub fn input_debounce_ms(&self) -> u32 {
        u32::try_from(self.input_debounce.as_millis()).unwrap_or(u32::MAX)
    }
}
