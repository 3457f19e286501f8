pub mod bindings;
pub mod checkbox;
pub mod web_dom;

use std::cell::RefCell;
use std::rc::Rc;

use form_gate::{FormConfig, FormGate, FormGateError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

use crate::web_dom::WebDom;

thread_local! {
    static GATE: RefCell<Option<Rc<FormGate<WebDom>>>> = const { RefCell::new(None) };
}

/// Build the gate and wire it to the page.
pub fn install() -> Result<Rc<FormGate<WebDom>>, FormGateError> {
    let config = Rc::new(FormConfig::standard()?);
    let dom = WebDom::from_window(config.markup)?;
    let gate = Rc::new(FormGate::new(dom, config));

    let fields = bindings::bind_input_validation(&gate);
    let reconciled = gate.reconcile();
    let checkboxes = checkbox::enhance_checkboxes(&gate);
    log::info!(
        "Form validation ready: {} field(s), {} pre-filled, {} checkbox(es)",
        fields,
        reconciled,
        checkboxes
    );

    GATE.with(|slot| slot.replace(Some(Rc::clone(&gate))));
    Ok(gate)
}

fn install_logged() {
    if let Err(err) = install() {
        log::error!("Form validation disabled: {}", err);
    }
}

/// Whether every field of the visible contact form step is valid. Used by the
/// step navigation script.
#[wasm_bindgen(js_name = activeStepValid)]
pub fn active_step_valid() -> bool {
    GATE.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|gate| gate.active_step_valid())
            .unwrap_or(false)
    })
}

/// `document.readyState` past `"loading"` means the markup is fully parsed.
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("Form validation disabled: {}", FormGateError::NoDocument);
        return;
    };

    if is_parsed(&document.ready_state()) {
        install_logged();
        return;
    }

    let on_ready = Closure::once(install_logged);
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}
