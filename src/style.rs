use crate::naming::{to_camel_case, to_dash_case};
use std::collections::BTreeMap;

/// Native operations of a style declaration object.
///
/// This is the boundary to the host: the interception layer only ever calls
/// these and never reimplements CSS value semantics.
pub trait StyleDeclaration {
    /// Enumerable accessor-style (camelCase) property names.
    fn property_names(&self) -> Vec<String>;

    /// Current value for a CSS (dash-cased) property name, empty when unset.
    fn get_property_value(&self, name: &str) -> String;

    /// Low-level setter taking a CSS (dash-cased) property name.
    fn set_property(&mut self, name: &str, value: &str);
}

/// Longhand and shorthand names a `MemoryStyle` exposes by default
pub const STANDARD_PROPERTIES: [&str; 60] = [
    "alignItems",
    "background",
    "backgroundColor",
    "backgroundImage",
    "backgroundPosition",
    "backgroundSize",
    "border",
    "borderBottom",
    "borderBottomWidth",
    "borderLeft",
    "borderLeftWidth",
    "borderRadius",
    "borderRight",
    "borderRightWidth",
    "borderTop",
    "borderTopLeftRadius",
    "borderTopWidth",
    "borderWidth",
    "bottom",
    "boxShadow",
    "color",
    "columnGap",
    "display",
    "flexBasis",
    "font",
    "fontFamily",
    "fontSize",
    "gap",
    "gridTemplateColumns",
    "height",
    "inset",
    "left",
    "letterSpacing",
    "lineHeight",
    "margin",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginTop",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "outline",
    "outlineOffset",
    "padding",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "right",
    "rowGap",
    "textIndent",
    "textShadow",
    "top",
    "transform",
    "translate",
    "width",
    "wordSpacing",
    "zIndex",
];

/// In-memory style declaration, usable as a disposable stand-in for a host
/// style object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStyle {
    properties: Vec<String>,
    values: BTreeMap<String, String>,
}

impl MemoryStyle {
    /// Style object exposing the standard property list.
    pub fn new() -> Self {
        Self::with_properties(STANDARD_PROPERTIES)
    }

    /// Style object exposing exactly the given accessor names.
    pub fn with_properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: names.into_iter().map(Into::into).collect(),
            values: BTreeMap::new(),
        }
    }

    /// Accessor names for every property currently holding a value.
    pub fn set_names(&self) -> Vec<String> {
        self.values.keys().map(|k| to_camel_case(k)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize as a declaration block body (`width: 1rem; color: red`).
    pub fn css_text(&self) -> String {
        self.values
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl StyleDeclaration for MemoryStyle {
    fn property_names(&self) -> Vec<String> {
        self.properties.clone()
    }

    fn get_property_value(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    fn set_property(&mut self, name: &str, value: &str) {
        // Empty string removes the declaration.
        if value.is_empty() {
            self.values.remove(name);
        } else {
            self.values.insert(name.to_string(), value.to_string());
        }
    }
}

/// Native accessor-style write, bypassing any interception.
pub fn set_named<S: StyleDeclaration + ?Sized>(style: &mut S, name: &str, value: &str) {
    style.set_property(&to_dash_case(name), value);
}

/// Native accessor-style read.
pub fn get_named<S: StyleDeclaration + ?Sized>(style: &S, name: &str) -> String {
    style.get_property_value(&to_dash_case(name))
}
