//! `FormDom` over the live browser document.

use form_gate::{FormDom, FormGateError, MarkupContract};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList};

pub struct WebDom {
    document: Document,
    markup: MarkupContract,
}

impl WebDom {
    pub fn new(document: Document, markup: MarkupContract) -> Self {
        Self { document, markup }
    }

    pub fn from_window(markup: MarkupContract) -> Result<Self, FormGateError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(FormGateError::NoDocument)?;
        Ok(Self::new(document, markup))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn markup(&self) -> &MarkupContract {
        &self.markup
    }

    /// `querySelectorAll` on `scope`, or on the document for `None`.
    pub fn query_all(&self, scope: Option<&Element>, selector: &str) -> Vec<Element> {
        let list = match scope {
            Some(element) => element.query_selector_all(selector),
            None => self.document.query_selector_all(selector),
        };
        list.map(|list| elements(&list)).unwrap_or_default()
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl FormDom for WebDom {
    type Node = Element;

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn is_form(&self, node: &Element) -> bool {
        node.tag_name().eq_ignore_ascii_case("form")
    }

    fn html_id(&self, node: &Element) -> Option<String> {
        let id = node.id();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&self, node: &Element, class: &str, enabled: bool) {
        let _ = node.class_list().toggle_with_force(class, enabled);
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = node.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            String::new()
        }
    }

    fn is_multiline(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlTextAreaElement>().is_some()
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = element.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn style(&self, node: &Element, property: &str) -> String {
        node.dyn_ref::<HtmlElement>()
            .and_then(|element| element.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn fields(&self, scope: Option<&Element>) -> Vec<Element> {
        self.query_all(scope, self.markup.field_selector)
    }

    fn consent_checked(&self, form: &Element) -> bool {
        form.query_selector(self.markup.consent_selector)
            .ok()
            .flatten()
            .and_then(|custom| custom.next_element_sibling())
            .and_then(|sibling| sibling.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn submit_container(&self, form: &Element) -> Option<Element> {
        form.query_selector(self.markup.submit_selector)
            .ok()
            .flatten()?
            .parent_element()
    }

    fn error_text(&self, host: &Element) -> Option<Element> {
        host.query_selector(&format!(".{}", self.markup.error_text_class))
            .ok()
            .flatten()
    }

    fn create_error_text(&self, host: &Element) -> Option<Element> {
        let error_text = self.document.create_element("div").ok()?;
        error_text.set_class_name(&format!(
            "{} {}",
            self.markup.error_text_class, self.markup.hidden_class
        ));
        host.append_child(&error_text).ok()?;
        Some(error_text)
    }

    fn steps(&self) -> Vec<Element> {
        self.query_all(None, self.markup.step_selector)
    }
}
