use crate::config::{Config, PartialConfig};
use crate::convert::Rewriter;
use crate::naming::to_dash_case;
use crate::style::StyleDeclaration;
use std::collections::HashMap;
use std::sync::Arc;

/// Box offsets keep their native accessors. They can be `auto`,
/// percentage-relative or negative, so only the generic setter path sees them.
pub const OFFSET_PROPERTIES: [&str; 4] = ["left", "top", "bottom", "right"];

/// Installed getter/setter pair for one accessor name.
#[derive(Debug, Clone)]
struct Accessor {
    css_name: String,
}

/// Replacement for the generic `setProperty` entry point.
#[derive(Debug, Clone)]
struct SetPropertyOverride {
    rewriter: Arc<Rewriter>,
}

impl SetPropertyOverride {
    fn apply<S: StyleDeclaration + ?Sized>(&self, style: &mut S, name: &str, value: &str) {
        if name.starts_with("--") {
            let value = self.rewriter.rewrite(value);
            style.set_property(name, &value);
        } else {
            style.set_property(name, value);
        }
    }
}

/// Accessor table shared by every style object it is applied to.
///
/// Reads go through the dash-cased property value; writes through a named
/// accessor or through `set_property` for a custom property are rewritten
/// before reaching the native setter.
#[derive(Debug, Clone)]
pub struct StylePrototype {
    rewriter: Arc<Rewriter>,
    accessors: HashMap<String, Accessor>,
    set_property: SetPropertyOverride,
}

impl StylePrototype {
    /// Install over the properties `representative` enumerates, with
    /// `partial` overlaid on the default configuration.
    pub fn install<S: StyleDeclaration + ?Sized>(
        representative: &S,
        partial: &PartialConfig,
    ) -> Self {
        Self::with_config(representative, partial.resolve())
    }

    pub fn with_config<S: StyleDeclaration + ?Sized>(representative: &S, config: Config) -> Self {
        let rewriter = Arc::new(Rewriter::new(config));

        let accessors: HashMap<String, Accessor> = representative
            .property_names()
            .into_iter()
            .filter(|name| !OFFSET_PROPERTIES.iter().any(|offset| offset == name))
            .map(|name| {
                let css_name = to_dash_case(&name);
                (name, Accessor { css_name })
            })
            .collect();

        log::info!(
            "installed {} style accessors ({} -> rem, root {})",
            accessors.len(),
            rewriter.config().unit,
            rewriter.config().root_value
        );

        let set_property = SetPropertyOverride {
            rewriter: Arc::clone(&rewriter),
        };

        Self {
            rewriter,
            accessors,
            set_property,
        }
    }

    pub fn config(&self) -> &Config {
        self.rewriter.config()
    }

    pub fn rewriter(&self) -> &Rewriter {
        &self.rewriter
    }

    /// Whether `name` has an installed accessor.
    pub fn is_intercepted(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    pub fn accessor_count(&self) -> usize {
        self.accessors.len()
    }

    /// Accessor-style read, e.g. `get(style, "marginTop")`.
    pub fn get<S: StyleDeclaration + ?Sized>(&self, style: &S, name: &str) -> String {
        match self.accessors.get(name) {
            Some(accessor) => style.get_property_value(&accessor.css_name),
            None => style.get_property_value(&to_dash_case(name)),
        }
    }

    /// Accessor-style write. Names without an installed accessor, the box
    /// offsets included, reach the native setter unmodified.
    pub fn set<S: StyleDeclaration + ?Sized>(&self, style: &mut S, name: &str, value: &str) {
        match self.accessors.get(name) {
            Some(accessor) => {
                let value = self.rewriter.rewrite(value);
                style.set_property(&accessor.css_name, &value);
            }
            None => style.set_property(&to_dash_case(name), value),
        }
    }

    /// Generic setter. Only custom properties (`--*`) are rewritten.
    pub fn set_property<S: StyleDeclaration + ?Sized>(
        &self,
        style: &mut S,
        name: &str,
        value: &str,
    ) {
        self.set_property.apply(style, name, value);
    }
}
