use crate::intercept::global::installed;
use crate::intercept::prototype::StylePrototype;
use crate::style::{get_named, set_named, StyleDeclaration};
use std::sync::Arc;

/// A style object seen through an accessor table.
///
/// Without an explicit prototype the process-wide one is looked up on every
/// access, so objects created before `install` are affected too.
#[derive(Debug, Clone)]
pub struct Styled<S> {
    style: S,
    prototype: Option<Arc<StylePrototype>>,
}

impl<S: StyleDeclaration> Styled<S> {
    /// Bind to the process-wide prototype.
    pub fn new(style: S) -> Self {
        Self {
            style,
            prototype: None,
        }
    }

    /// Bind to a specific prototype.
    pub fn with_prototype(style: S, prototype: Arc<StylePrototype>) -> Self {
        Self {
            style,
            prototype: Some(prototype),
        }
    }

    fn prototype(&self) -> Option<Arc<StylePrototype>> {
        match &self.prototype {
            Some(p) => Some(Arc::clone(p)),
            None => installed(),
        }
    }

    pub fn get(&self, name: &str) -> String {
        match self.prototype() {
            Some(p) => p.get(&self.style, name),
            None => get_named(&self.style, name),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) {
        match self.prototype() {
            Some(p) => p.set(&mut self.style, name, value),
            None => set_named(&mut self.style, name, value),
        }
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        match self.prototype() {
            Some(p) => p.set_property(&mut self.style, name, value),
            None => self.style.set_property(name, value),
        }
    }

    pub fn get_property_value(&self, name: &str) -> String {
        self.style.get_property_value(name)
    }

    pub fn inner(&self) -> &S {
        &self.style
    }

    pub fn into_inner(self) -> S {
        self.style
    }
}
