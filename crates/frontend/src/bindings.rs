use std::cell::RefCell;
use std::rc::Rc;

use form_gate::{Debounce, FormDom, FormGate};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::web_dom::WebDom;

/// Attach a debounced `input` listener to every marked field of the page.
pub fn bind_input_validation(gate: &Rc<FormGate<WebDom>>) -> usize {
    let fields = gate.dom().fields(None);
    for field in &fields {
        bind_field(gate, field);
    }
    fields.len()
}

fn bind_field(gate: &Rc<FormGate<WebDom>>, field: &Element) {
    let delay_ms = gate.config().input_debounce_ms();
    let debounce = Rc::new(RefCell::new(Debounce::new()));
    // Replacing the pending timeout drops, and thereby cancels, the previous one.
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let gate = Rc::clone(gate);
    let target = field.clone();
    let on_input = Closure::wrap(Box::new(move |_: Event| {
        let ticket = debounce.borrow_mut().push(target.clone());

        let debounce = Rc::clone(&debounce);
        let gate = Rc::clone(&gate);
        let timeout = Timeout::new(delay_ms, move || {
            let ready = debounce.borrow_mut().fire(ticket);
            if let Some(field) = ready {
                gate.on_field_changed(&field);
            }
        });
        pending.borrow_mut().replace(timeout);
    }) as Box<dyn FnMut(Event)>);

    let _ = field.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    // Fields live for the whole page; keep the listener alive.
    on_input.forget();
}
