// WebAssembly bindings: installs the rewriter over CSSStyleDeclaration.prototype
use crate::config::{Config, PartialConfig};
use crate::convert::Rewriter;
use crate::intercept::OFFSET_PROPERTIES;
use crate::naming::to_dash_case;
use crate::shim::{ACCESSOR_SHIM, SET_PROPERTY_SHIM};
use js_sys::{Function, Object, Reflect};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    // setProperty as it was before the first installation
    static NATIVE_SET_PROPERTY: RefCell<Option<Function>> = const { RefCell::new(None) };
}

fn config_from_json(config_json: Option<String>) -> Result<Config, JsValue> {
    let partial = match config_json {
        Some(json) => PartialConfig::from_json_str(&json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?,
        None => PartialConfig::default(),
    };
    let config = partial.resolve();
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

/// `document.createElement('div').style`
fn representative_style(global: &Object) -> Result<Object, JsValue> {
    let document = get(global, "document")?;
    let create_element: Function = get(&document, "createElement")?.dyn_into()?;
    let div = create_element.call1(&document, &JsValue::from_str("div"))?;
    Ok(get(&div, "style")?.dyn_into()?)
}

fn native_set_property(prototype: &Object) -> Result<Function, JsValue> {
    NATIVE_SET_PROPERTY.with(|slot| -> Result<Function, JsValue> {
        let mut slot = slot.borrow_mut();
        if let Some(native) = slot.as_ref() {
            return Ok(native.clone());
        }
        let native: Function = get(prototype, "setProperty")?.dyn_into()?;
        *slot = Some(native.clone());
        Ok(native)
    })
}

/// Patch `CSSStyleDeclaration.prototype` for the rest of the page lifetime.
/// Returns the number of accessors installed.
fn install_on_prototype(rewriter: Rewriter) -> Result<usize, JsValue> {
    let global = js_sys::global();
    let constructor = get(&global, "CSSStyleDeclaration")?;
    let prototype: Object = get(&constructor, "prototype")?.dyn_into()?;
    let set_property = native_set_property(&prototype)?;
    let style = representative_style(&global)?;

    let rewrite = Closure::<dyn Fn(String) -> String>::new(move |value: String| {
        rewriter.rewrite(&value).into_owned()
    });
    let rewrite_fn: Function = rewrite.as_ref().unchecked_ref::<Function>().clone();
    // Installation is irreversible, so the closure lives forever.
    rewrite.forget();

    let accessor_shim = Function::new_with_args("rewrite, setProperty, name", ACCESSOR_SHIM);
    let mut installed = 0;
    for key in Object::keys(&style).iter() {
        let Some(name) = key.as_string() else {
            continue;
        };
        if OFFSET_PROPERTIES.iter().any(|offset| *offset == name) {
            continue;
        }
        let css_name = JsValue::from_str(&to_dash_case(&name));
        let descriptor: Object = accessor_shim
            .call3(&JsValue::NULL, &rewrite_fn, &set_property, &css_name)?
            .dyn_into()?;
        Object::define_property(&prototype, &key, &descriptor);
        installed += 1;
    }

    let set_property_shim = Function::new_with_args("rewrite, setProperty", SET_PROPERTY_SHIM);
    let set_property_override =
        set_property_shim.call2(&JsValue::NULL, &rewrite_fn, &set_property)?;
    Reflect::set(
        &prototype,
        &JsValue::from_str("setProperty"),
        &set_property_override,
    )?;

    log::info!("installed {} style accessors on CSSStyleDeclaration", installed);
    Ok(installed)
}

/// Install the px-to-rem interception with an optional JSON config
/// (`{"rootValue": 16, "unitPrecision": 5, "minPixelValue": 1, "unit": "px"}`)
#[wasm_bindgen(js_name = pxToRem)]
pub fn px_to_rem(config_json: Option<String>) -> Result<(), JsValue> {
    let config = config_from_json(config_json)?;
    install_on_prototype(Rewriter::new(config))?;
    Ok(())
}

#[wasm_bindgen(js_name = toDashCase)]
pub fn to_dash_case_js(name: &str) -> String {
    to_dash_case(name)
}

#[wasm_bindgen]
pub struct PxToRem {
    rewriter: Rewriter,
}

#[wasm_bindgen]
impl PxToRem {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PxToRem, JsValue> {
        let config = config_from_json(config_json)?;
        Ok(Self {
            rewriter: Rewriter::new(config),
        })
    }

    /// Rewrite a single style value without touching any style object
    #[wasm_bindgen]
    pub fn rewrite(&self, value: &str) -> String {
        self.rewriter.rewrite(value).into_owned()
    }

    /// Install this configuration over CSSStyleDeclaration.prototype
    #[wasm_bindgen]
    pub fn install(&self) -> Result<usize, JsValue> {
        install_on_prototype(self.rewriter.clone())
    }

    /// Resolved configuration as a JSON string
    #[wasm_bindgen]
    pub fn config(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.rewriter.config())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize config: {}", e)))
    }
}
