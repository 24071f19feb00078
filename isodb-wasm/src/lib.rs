//! WASM bindings for isodb.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p isodb-wasm
//! ```
//!
//! There is no file system here, so the isotope table is either the
//! built-in seed or CSV text the caller passes in.

use wasm_bindgen::prelude::*;

use isodb::IsotopeDb;

fn to_js(e: isodb::IsotopeDbError) -> JsError {
    JsError::new(&e.to_string())
}

/// Natural atomic weight from the built-in seed table.
#[wasm_bindgen]
pub fn atomic_weight(element: &str) -> Result<f64, JsError> {
    IsotopeDb::seed().atomic_weight(element).map_err(to_js)
}

/// Natural atomic weight from caller-supplied isotope CSV text.
#[wasm_bindgen]
pub fn atomic_weight_from_csv(csv: &str, element: &str) -> Result<f64, JsError> {
    IsotopeDb::from_csv_str(csv)
        .and_then(|db| db.atomic_weight(element))
        .map_err(to_js)
}

/// Average atomic mass from isotopic masses and weight percents (or mass
/// fractions; the convention is auto-detected).
#[wasm_bindgen]
pub fn atomic_weight_from_weight_percent(
    masses_u: &[f64],
    weights: &[f64],
) -> Result<f64, JsError> {
    isodb::atomic_weight_from_weight_percent(masses_u, weights).map_err(to_js)
}

/// Canonical element symbols present in caller-supplied CSV text.
#[wasm_bindgen]
pub fn symbols_from_csv(csv: &str) -> Result<js_sys::Array, JsError> {
    let db = IsotopeDb::from_csv_str(csv).map_err(to_js)?;
    Ok(db.symbols().iter().map(|s| JsValue::from_str(s)).collect())
}
