//! Output ripple of a switching regulator.
//!
//! The peak-to-peak ripple at the output capacitor has two components that
//! are summed in quadrature:
//!
//! ```text
//! ΔI    = I_out,max * sqrt(D * (1 - D)) / 2        D = Vout / Vin
//! V_C   = ΔI / (8 * f_sw * C_out)
//! V_ESR = ΔI * R_esr
//! V_pp  = sqrt(V_C² + V_ESR²)
//! ```

mod calc;
mod params;

pub use calc::{output_ripple, ripple_breakdown, RippleBreakdown};
pub use params::RegulatorParams;
