//! Submit gating for whitelisted forms.
//!
//! Every notification re-derives the whole form state from live values: a
//! form's submit container is enabled iff all of its fields pass their rule
//! and the consent checkbox is checked.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::config::FormConfig;
use crate::dom::FormDom;
use crate::field_type::FieldType;
use crate::presenter;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOutcome {
    pub field_type: FieldType,
    pub valid: bool,
}

/// Result of one gate evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateReport {
    pub form_id: String,
    pub fields: Vec<FieldOutcome>,
    pub all_valid: bool,
    pub consent_given: bool,
    pub enabled: bool,
    /// False when the submit state was not written (exempt form or no submit container).
    pub applied: bool,
}

pub struct FormGate<D: FormDom> {
    dom: D,
    config: Rc<FormConfig>,
    /// Lazily filled per form and never invalidated: fields added to a form
    /// after its first evaluation are not gated.
    field_cache: RefCell<Vec<(D::Node, Rc<Vec<D::Node>>)>>,
}

impl<D: FormDom> FormGate<D> {
    pub fn new(dom: D, config: Rc<FormConfig>) -> Self {
        Self {
            dom,
            config,
            field_cache: RefCell::new(Vec::new()),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Input-changed notification. Returns `None` when the field is not gated.
    pub fn on_field_changed(&self, field: &D::Node) -> Option<GateReport> {
        let (form, form_id) = self.whitelisted_form(field)?;
        let field_type = self.field_type(field)?;

        let valid = self.config.rules.check(&field_type, &self.dom.value(field));
        presenter::present(&self.dom, &self.config, field, &field_type, valid);

        Some(self.evaluate(&form, form_id))
    }

    /// Consent checkbox toggled.
    pub fn on_consent_changed(&self, control: &D::Node) -> Option<GateReport> {
        let (form, form_id) = self.whitelisted_form(control)?;
        Some(self.evaluate(&form, form_id))
    }

    /// Notify every pre-filled field of a whitelisted form once, so autofilled
    /// or restored values are reflected without a keystroke. Returns how many
    /// fields were notified.
    pub fn reconcile(&self) -> usize {
        let mut notified = 0;
        for field in self.dom.fields(None) {
            if self.dom.value(&field).is_empty() || self.whitelisted_form(&field).is_none() {
                continue;
            }
            if self.on_field_changed(&field).is_some() {
                notified += 1;
            }
        }
        log::debug!("reconciled {notified} pre-filled field(s)");
        notified
    }

    /// Whether the visible step of the multi-step form is complete. False
    /// when every step is hidden.
    pub fn active_step_valid(&self) -> bool {
        let Some(step) = self
            .dom
            .steps()
            .into_iter()
            .find(|step| self.dom.style(step, "display") != "none")
        else {
            return false;
        };

        self.dom
            .fields(Some(&step))
            .iter()
            .all(|field| self.field_passes(field))
    }

    fn evaluate(&self, form: &D::Node, form_id: String) -> GateReport {
        let fields: Vec<FieldOutcome> = self
            .form_fields(form)
            .iter()
            .filter_map(|field| {
                let field_type = self.field_type(field)?;
                let valid = self.config.rules.check(&field_type, &self.dom.value(field));
                Some(FieldOutcome { field_type, valid })
            })
            .collect();

        let all_valid = fields.iter().all(|outcome| outcome.valid);
        let consent_given = self.dom.consent_checked(form);
        let enabled = all_valid && consent_given;
        let applied = self.apply_submit_state(form, &form_id, enabled);

        let report = GateReport {
            form_id,
            fields,
            all_valid,
            consent_given,
            enabled,
            applied,
        };
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "gate evaluated: {}",
                serde_json::to_string(&report).unwrap_or_default()
            );
        }
        report
    }

    fn apply_submit_state(&self, form: &D::Node, form_id: &str, enabled: bool) -> bool {
        if form_id == self.config.exempt_submit_form {
            return false;
        }
        let Some(container) = self.dom.submit_container(form) else {
            return false;
        };

        let markup = &self.config.markup;
        self.dom.set_class(&container, markup.submit_enabled_class, enabled);
        self.dom.set_class(&container, markup.submit_disabled_class, !enabled);
        true
    }

    fn field_passes(&self, field: &D::Node) -> bool {
        match self.field_type(field) {
            Some(field_type) => self.config.rules.check(&field_type, &self.dom.value(field)),
            None => true,
        }
    }

    fn field_type(&self, node: &D::Node) -> Option<FieldType> {
        let marker = self.dom.attribute(node, self.config.markup.field_attribute)?;
        FieldType::from_marker(&marker)
    }

    /// Nearest enclosing form, if its id is whitelisted.
    fn whitelisted_form(&self, node: &D::Node) -> Option<(D::Node, String)> {
        let mut current = self.dom.parent(node);
        while let Some(element) = current {
            if self.dom.is_form(&element) {
                let form_id = self.dom.html_id(&element)?;
                return self
                    .config
                    .is_whitelisted(&form_id)
                    .then_some((element, form_id));
            }
            current = self.dom.parent(&element);
        }
        None
    }

    fn form_fields(&self, form: &D::Node) -> Rc<Vec<D::Node>> {
        if let Some((_, fields)) = self
            .field_cache
            .borrow()
            .iter()
            .find(|(cached, _)| cached == form)
        {
            return Rc::clone(fields);
        }

        let fields = Rc::new(self.dom.fields(Some(form)));
        log::trace!("cached {} field(s) for a form", fields.len());
        self.field_cache
            .borrow_mut()
            .push((form.clone(), Rc::clone(&fields)));
        fields
    }
}
