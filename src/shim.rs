// JS glue installed on CSSStyleDeclaration.prototype by the wasm build.
// Accessors need `this`, which Rust closures do not receive, so these
// forward to the Rust rewrite function. `null`/`undefined` pass through
// untouched so assigning them still clears a declaration.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

/// Arguments: `rewrite, setProperty, name`; returns a property descriptor.
pub const ACCESSOR_SHIM: &str = "return { configurable: true, enumerable: true, \
     get() { return this.getPropertyValue(name); }, \
     set(value) { \
       return setProperty.call(this, name, value == null ? value : rewrite(String(value))); \
     } };";

/// Arguments: `rewrite, setProperty`; returns the `setProperty` override.
pub const SET_PROPERTY_SHIM: &str = "return function (property, value, priority) { \
     if (value != null && String(property).startsWith('--')) { \
       return setProperty.call(this, property, rewrite(String(value)), priority); \
     } \
     return setProperty.call(this, property, value, priority); };";
