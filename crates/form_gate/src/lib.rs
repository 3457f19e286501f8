//! Field validation and submit gating for the site's forms.
//!
//! The crate is browser independent: everything that touches the page goes
//! through [`FormDom`], implemented over `web_sys` by the frontend crate.

pub mod checkmark;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod field_type;
pub mod gate;
pub mod presenter;
pub mod rules;
pub mod theme;

#[cfg(test)]
mod testing;

pub use config::{FormConfig, MarkupContract};
pub use debounce::{Debounce, Ticket};
pub use dom::FormDom;
pub use error::FormGateError;
pub use field_type::FieldType;
pub use gate::{FieldOutcome, FormGate, GateReport};
pub use presenter::FieldState;
pub use rules::RuleSet;
pub use theme::{Theme, ThemeTable};
