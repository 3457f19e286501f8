//! Error-text and checkmark colours per page context.
//!
//! Forms sit inside containers tagged with a combo class (`is-footer`,
//! `is-blog`, ...). The nearest tagged ancestor of a field picks its colours.

use crate::dom::FormDom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Error text colour.
    pub text_color: &'static str,
    /// Checkmark stroke colour.
    pub accent_color: &'static str,
}

#[derive(Debug, Clone)]
pub struct ThemeTable {
    /// Checked in order on every ancestor.
    tagged: Vec<(&'static str, Theme)>,
    default: Theme,
}

impl ThemeTable {
    pub fn standard() -> Self {
        Self {
            tagged: vec![
                (
                    "is-footer",
                    Theme {
                        text_color: "#0b0f12",
                        accent_color: "#0b0f12",
                    },
                ),
                (
                    "is-blog",
                    Theme {
                        text_color: "#DB791B",
                        accent_color: "#C6C6C6",
                    },
                ),
                (
                    "is-capabilities",
                    Theme {
                        text_color: "#fe3636",
                        accent_color: "#353A3D",
                    },
                ),
            ],
            default: Theme {
                text_color: "#fe3636",
                accent_color: "#353A3D",
            },
        }
    }

    pub fn default_theme(&self) -> Theme {
        self.default
    }

    pub fn get(&self, tag: &str) -> Option<Theme> {
        self.tagged
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, theme)| *theme)
    }

    /// First context tag found on `node` or one of its ancestors.
    pub fn find_tag<D: FormDom>(&self, dom: &D, node: &D::Node) -> Option<&'static str> {
        let mut current = Some(node.clone());
        while let Some(element) = current {
            for (tag, _) in &self.tagged {
                if dom.has_class(&element, tag) {
                    return Some(*tag);
                }
            }
            current = dom.parent(&element);
        }
        None
    }

    pub fn resolve<D: FormDom>(&self, dom: &D, node: &D::Node) -> Theme {
        self.find_tag(dom, node)
            .and_then(|tag| self.get(tag))
            .unwrap_or(self.default)
    }
}
