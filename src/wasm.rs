//! WASM bindings for Trafo Core.
//!
//! Every entry point takes a JSON document and returns a JSON document, so
//! the browser side only needs `JSON.stringify` and `JSON.parse`.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { dimension_json, regulation_json } from 'trafo_core';
//!
//! await init();
//!
//! const report = JSON.parse(dimension_json(JSON.stringify({
//!   tipo_transformador: 'Transformador de um primário e um secundário',
//!   Vp: '120',
//!   Vs: '12',
//!   Potencia: 100,
//!   tipo_lamina: 'Padronizada',
//!   frequencia: 60,
//! })));
//!
//! // Empty object: textbook defaults
//! const reg = JSON.parse(regulation_json('{}'));
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::analysis::{self, BenchTests, LoadPoint, MagnetizationCurve, MagnetizingParams};
use crate::design::Designer;
use crate::error::{Result, TrafoError};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn parse<T: DeserializeOwned>(input: &str) -> Result<T> {
    if input.trim().is_empty() {
        return Err(TrafoError::WasmError {
            message: "empty input document".to_string(),
        });
    }
    Ok(serde_json::from_str(input)?)
}

fn respond<T: Serialize>(result: Result<T>) -> std::result::Result<String, JsValue> {
    result
        .and_then(|value| Ok(serde_json::to_string(&value)?))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Dimension a transformer from its JSON description.
///
/// Throws the validation message when the description is invalid.
#[wasm_bindgen]
pub fn dimension_json(input: &str) -> std::result::Result<String, JsValue> {
    respond(parse(input).and_then(|raw| Designer::new().run_raw(&raw)))
}

/// Equivalent circuit from JSON bench test data.
#[wasm_bindgen]
pub fn equivalent_json(input: &str) -> std::result::Result<String, JsValue> {
    respond(parse::<BenchTests>(input).and_then(|tests| analysis::equivalent_circuit(&tests)))
}

/// Voltage regulation for a JSON load point.
#[wasm_bindgen]
pub fn regulation_json(input: &str) -> std::result::Result<String, JsValue> {
    respond(parse::<LoadPoint>(input).and_then(|load| analysis::regulation(&load)))
}

/// Magnetizing current from a JSON curve and JSON supply parameters.
#[wasm_bindgen]
pub fn magnetizing_json(curve: &str, params: &str) -> std::result::Result<String, JsValue> {
    respond(
        MagnetizationCurve::from_json(curve)
            .and_then(|curve| Ok((curve, parse::<MagnetizingParams>(params)?)))
            .and_then(|(curve, params)| analysis::magnetizing_current(&curve, &params)),
    )
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the frequency assumed when a description omits it.
#[wasm_bindgen]
pub fn default_frequency() -> u32 {
    crate::DEFAULT_FREQUENCY
}
