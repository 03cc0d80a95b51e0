//! WASM bindings for the tokenwind formatter.
//!
//! Exposes `format()` and `diagnostics()` to JavaScript via wasm-bindgen.
//! Both take the dictionary as JSON and an optional JSON config, and throw
//! on unreadable input or an invalid config.

use tokenwind_codegen::Formatter;
use tokenwind_config::ConfigOptions;
use tokenwind_tokens::Dictionary;
use wasm_bindgen::prelude::*;

/// Format a token dictionary as a Tailwind v4 stylesheet.
///
/// `dictionary_json` is either `{ "allTokens": [...] }` or a bare token array.
#[wasm_bindgen]
pub fn format(dictionary_json: &str, config_json: Option<String>) -> Result<String, JsError> {
    let (dictionary, formatter) =
        prepare(dictionary_json, config_json.as_deref()).map_err(|e| JsError::new(&e))?;
    Ok(formatter.format(&dictionary))
}

/// List the tokens that were skipped, as `[{ token, message }]`.
#[wasm_bindgen]
pub fn diagnostics(dictionary_json: &str, config_json: Option<String>) -> Result<js_sys::Array, JsError> {
    let (dictionary, formatter) =
        prepare(dictionary_json, config_json.as_deref()).map_err(|e| JsError::new(&e))?;

    let list = js_sys::Array::new();
    for diagnostic in formatter.process(&dictionary).diagnostics {
        let entry = js_sys::Object::new();
        js_sys::Reflect::set(&entry, &"token".into(), &diagnostic.token.into())
            .map_err(|_| JsError::new("Failed to set token property"))?;
        js_sys::Reflect::set(&entry, &"message".into(), &diagnostic.message.into())
            .map_err(|_| JsError::new("Failed to set message property"))?;
        list.push(&entry);
    }
    Ok(list)
}

/// Get the formatter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn prepare(dictionary_json: &str, config_json: Option<&str>) -> Result<(Dictionary, Formatter), String> {
    let dictionary = Dictionary::from_json(dictionary_json).map_err(|e| e.to_string())?;
    let options = match config_json {
        Some(source) if !source.trim().is_empty() => {
            ConfigOptions::from_json_str(source).map_err(|e| e.to_string())?
        }
        _ => ConfigOptions::default(),
    };
    let formatter = Formatter::new(options).map_err(|e| e.to_string())?;
    Ok((dictionary, formatter))
}
