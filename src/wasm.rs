//! WASM bindings for Ripple Calc.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { ripple_voltage, lm3670_ripple_voltage } from 'ripple_calc';
//!
//! await init();
//!
//! const vpp = ripple_voltage(0.005, 2e6, 3.3, 5.5, 0.000245, 1e-5);
//! ```

use wasm_bindgen::prelude::*;

use crate::ripple::{output_ripple, RegulatorParams};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Peak-to-peak output ripple voltage for an arbitrary design point.
///
/// # Arguments
/// * `max_output_current` - Maximum output current in amps
/// * `freq` - Switching frequency in hertz
/// * `vout` - Output voltage in volts
/// * `vin` - Input voltage in volts
/// * `equiv_series_r` - Output capacitor ESR in ohms
/// * `output_cap` - Output capacitance in farads
///
/// # Returns
/// The ripple voltage, or an error string if the inputs are out of domain.
#[wasm_bindgen]
pub fn ripple_voltage(
    max_output_current: f64,
    freq: f64,
    vout: f64,
    vin: f64,
    equiv_series_r: f64,
    output_cap: f64,
) -> Result<f64, JsValue> {
    let params = RegulatorParams::new(
        max_output_current,
        freq,
        vout,
        vin,
        equiv_series_r,
        output_cap,
    );
    output_ripple(&params).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Ripple voltage of the built-in LM3670 design point.
#[wasm_bindgen]
pub fn lm3670_ripple_voltage() -> Result<f64, JsValue> {
    output_ripple(&RegulatorParams::lm3670()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
