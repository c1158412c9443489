use crate::config::PartialConfig;
use crate::intercept::prototype::StylePrototype;
use crate::style::StyleDeclaration;
use lazy_static::lazy_static;
use std::sync::{Arc, RwLock};

lazy_static! {
    /// Prototype every `Styled` without an explicit one writes through
    static ref INSTALLED: RwLock<Option<Arc<StylePrototype>>> = RwLock::new(None);
}

/// Install the interception layer for the rest of the process.
///
/// Installing again replaces the previous prototype; the last installation
/// wins. There is no uninstall: tests should build their own
/// `StylePrototype` instead.
pub fn install<S: StyleDeclaration + ?Sized>(
    representative: &S,
    partial: &PartialConfig,
) -> Arc<StylePrototype> {
    let prototype = Arc::new(StylePrototype::install(representative, partial));
    let mut slot = INSTALLED.write().unwrap_or_else(|e| e.into_inner());
    if slot.is_some() {
        log::warn!("style interception was already installed; replacing it");
    }
    *slot = Some(Arc::clone(&prototype));
    prototype
}

/// The process-wide prototype, if one has been installed.
pub fn installed() -> Option<Arc<StylePrototype>> {
    INSTALLED
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}
