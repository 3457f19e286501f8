//! Custom consent checkboxes.
//!
//! The visible box is a styled `div` followed by the native checkbox. The box
//! gets a hover decoration, mirrors the native checked state, and shows a
//! focus ring only when focus came from the keyboard.

use std::cell::Cell;
use std::rc::Rc;

use form_gate::FormGate;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::web_dom::WebDom;

#[component]
fn CheckboxDecoration() -> impl IntoView {
    view! {
        <div class="ellipse-container">
            <div class="hover-effect">
                <div class="hover-ellipse"></div>
                <svg class="hover-checkmark" viewBox="0 0 11.871 9.121">
                    <path d="m.436,5.257l3.202,3.178L11.436.686" fill="none" stroke="#EDEDED" stroke-miterlimit="10" stroke-width="1.5"/>
                </svg>
            </div>
        </div>
    }
}

/// Decorate and wire every custom checkbox. Returns how many were found.
pub fn enhance_checkboxes(gate: &Rc<FormGate<WebDom>>) -> usize {
    let dom = gate.dom();
    let boxes = dom.query_all(None, dom.markup().custom_checkbox_selector);
    if boxes.is_empty() {
        return 0;
    }

    let keyboard_used = Rc::new(Cell::new(false));
    track_input_modality(dom, &keyboard_used);

    for custom in &boxes {
        if let Some(html) = custom.dyn_ref::<HtmlElement>() {
            leptos::mount::mount_to(html.clone(), CheckboxDecoration).forget();
        }

        let Some(input) = custom
            .next_element_sibling()
            .and_then(|sibling| sibling.dyn_into::<HtmlInputElement>().ok())
            .filter(|input| input.type_() == "checkbox")
        else {
            continue;
        };
        bind_checkbox(gate, custom, &input, &keyboard_used);
    }

    boxes.len()
}

/// `Tab` marks keyboard navigation until the next mouse press.
fn track_input_modality(dom: &WebDom, keyboard_used: &Rc<Cell<bool>>) {
    let flag = Rc::clone(keyboard_used);
    let on_keydown = Closure::wrap(Box::new(move |event: Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Tab" {
                flag.set(true);
            }
        }
    }) as Box<dyn FnMut(_)>);

    let flag = Rc::clone(keyboard_used);
    let on_mousedown = Closure::wrap(Box::new(move |_: Event| {
        flag.set(false);
    }) as Box<dyn FnMut(_)>);

    let document = dom.document();
    let _ = document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    let _ =
        document.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
    on_keydown.forget();
    on_mousedown.forget();
}

fn bind_checkbox(
    gate: &Rc<FormGate<WebDom>>,
    custom: &Element,
    input: &HtmlInputElement,
    keyboard_used: &Rc<Cell<bool>>,
) {
    let markup = *gate.dom().markup();
    let checked_class = format!("{}{}", markup.checked_class_prefix, input.id());

    let on_change = {
        let gate = Rc::clone(gate);
        let custom = custom.clone();
        let input = input.clone();
        Closure::wrap(Box::new(move |_: Event| {
            let checked = input.checked();
            let _ = custom.class_list().toggle_with_force(&checked_class, checked);
            let _ = input.set_attribute("aria-checked", if checked { "true" } else { "false" });
            gate.on_consent_changed(&input);
        }) as Box<dyn FnMut(_)>)
    };

    let on_focus = {
        let custom = custom.clone();
        let keyboard_used = Rc::clone(keyboard_used);
        Closure::wrap(Box::new(move |_: Event| {
            if keyboard_used.get() {
                let _ = custom.class_list().add_1(markup.focus_visible_class);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let on_blur = {
        let custom = custom.clone();
        Closure::wrap(Box::new(move |_: Event| {
            let _ = custom.class_list().remove_1(markup.focus_visible_class);
        }) as Box<dyn FnMut(_)>)
    };

    let _ = input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    let _ = input.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());
    let _ = input.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
    on_change.forget();
    on_focus.forget();
    on_blur.forget();
}
