//! WebAssembly entry point for browser presentation layers.
//!
//! The page gathers roster, layout, policy and stored history into a plain
//! object shaped like [`SeatingRequest`], calls `assignSeats`, renders the
//! returned assignment and persists `newHistory` for the next run.

use crate::engine::SeatingRequest;
use wasm_bindgen::prelude::*;

/// Runs the engine on a request object and returns the result object.
#[wasm_bindgen(js_name = assignSeats)]
pub fn assign_seats(request: JsValue) -> Result<JsValue, JsError> {
    let request: SeatingRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsError::new(&e.to_string()))?;
    let result = request.execute()?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
}
