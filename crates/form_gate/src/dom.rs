//! Document access used by the presenter and the gate.
//!
//! The browser implementation lives in the frontend crate and maps every
//! method onto `web_sys` calls using the selectors of [`MarkupContract`].
//! Methods never fail: missing markup is reported as `None`/`false` and
//! mutations on missing nodes are skipped.
//!
//! [`MarkupContract`]: crate::config::MarkupContract

pub trait FormDom {
    /// Element handle. Equality must mean "same element".
    type Node: Clone + PartialEq;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn is_form(&self, node: &Self::Node) -> bool;
    /// HTML `id`, `None` when absent or empty.
    fn html_id(&self, node: &Self::Node) -> Option<String>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_class(&self, node: &Self::Node, class: &str, enabled: bool);

    /// Live value of an input or textarea.
    fn value(&self, node: &Self::Node) -> String;
    /// Textareas never show the checkmark decoration.
    fn is_multiline(&self, node: &Self::Node) -> bool;

    /// Inline style; an empty `value` removes the property.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn style(&self, node: &Self::Node, property: &str) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Marked fields below `scope`, or in the whole document for `None`, in
    /// document order.
    fn fields(&self, scope: Option<&Self::Node>) -> Vec<Self::Node>;
    /// Checked state of the form's consent control. Missing control reads as unchecked.
    fn consent_checked(&self, form: &Self::Node) -> bool;
    /// Container whose classes express the submit button's state.
    fn submit_container(&self, form: &Self::Node) -> Option<Self::Node>;
    /// Existing error text element inside `host`.
    fn error_text(&self, host: &Self::Node) -> Option<Self::Node>;
    /// Append a new, hidden error text element to `host`.
    fn create_error_text(&self, host: &Self::Node) -> Option<Self::Node>;
    /// Steps of the multi-step contact form.
    fn steps(&self) -> Vec<Self::Node>;
}
