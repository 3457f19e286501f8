//! Reflects one field's validation result into its own subtree: valid class and
//! checkmark on the field, error text inside the field's parent.

use crate::checkmark::checkmark_background;
use crate::config::FormConfig;
use crate::dom::FormDom;
use crate::field_type::FieldType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Untouched,
    Valid,
    Invalid,
}

pub fn present<D: FormDom>(
    dom: &D,
    config: &FormConfig,
    field: &D::Node,
    field_type: &FieldType,
    valid: bool,
) {
    let markup = &config.markup;
    let theme = config.themes.resolve(dom, field);

    if valid {
        if !dom.is_multiline(field) {
            dom.set_class(field, markup.valid_class, true);
            dom.set_style(
                field,
                "background-image",
                &checkmark_background(theme.accent_color),
            );
        }
        hide_error_text(dom, config, field);
    } else {
        dom.set_class(field, markup.valid_class, false);
        dom.set_style(field, "background-image", "");
        if let Some(error_text) = show_error_text(dom, config, field, field_type.error_message()) {
            dom.set_style(&error_text, "color", theme.text_color);
        }
    }
}

fn hide_error_text<D: FormDom>(dom: &D, config: &FormConfig, field: &D::Node) {
    let Some(host) = dom.parent(field) else { return };
    let Some(error_text) = dom.error_text(&host) else { return };

    dom.set_class(&error_text, config.markup.hidden_class, true);
    dom.set_class(&host, config.markup.focused_class, false);
}

/// Reuses the host's error text element, creating it on first use.
fn show_error_text<D: FormDom>(
    dom: &D,
    config: &FormConfig,
    field: &D::Node,
    message: &str,
) -> Option<D::Node> {
    let host = dom.parent(field)?;
    let error_text = match dom.error_text(&host) {
        Some(existing) => existing,
        None => dom.create_error_text(&host)?,
    };

    dom.set_text(&error_text, message);
    dom.set_class(&error_text, config.markup.hidden_class, false);
    dom.set_class(&host, config.markup.focused_class, true);
    Some(error_text)
}

/// Current visual state of a field as read back from the document.
///
/// A valid textarea carries no decoration, so it reads as `Untouched`.
pub fn visual_state<D: FormDom>(dom: &D, config: &FormConfig, field: &D::Node) -> FieldState {
    let markup = &config.markup;
    if dom.has_class(field, markup.valid_class) {
        return FieldState::Valid;
    }

    let error_visible = dom
        .parent(field)
        .and_then(|host| dom.error_text(&host))
        .map(|error_text| !dom.has_class(&error_text, markup.hidden_class))
        .unwrap_or(false);

    if error_visible {
        FieldState::Invalid
    } else {
        FieldState::Untouched
    }
}
