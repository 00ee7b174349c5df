//! # Ripple Calc
//!
//! Peak-to-peak output ripple voltage of a switching voltage regulator.
//!
//! The library provides:
//! - [`RegulatorParams`], the six circuit quantities that set the ripple
//! - [`output_ripple`] and [`ripple_breakdown`], the closed-form evaluation
//! - [`RippleError`] for design points outside the formula's domain
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! ripple
//! ```
//!
//! ### Library
//!
//! ```
//! use ripple_calc::{output_ripple, RegulatorParams};
//!
//! let v_pp = output_ripple(&RegulatorParams::lm3670()).unwrap();
//! assert!(v_pp > 0.0);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { ripple_voltage } from 'ripple_calc';
//!
//! const vpp = ripple_voltage(0.005, 2e6, 3.3, 5.5, 0.000245, 1e-5);
//! ```

pub mod error;
pub mod ripple;

// Re-export main types for convenience
pub use error::{Result, RippleError};
pub use ripple::{output_ripple, ripple_breakdown, RegulatorParams, RippleBreakdown};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::ripple_voltage;
