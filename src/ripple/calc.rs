//! Ripple evaluation.

use tracing::{debug, warn};

use crate::error::{Result, RippleError};

use super::RegulatorParams;

/// Ripple components for one design point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleBreakdown {
    /// Peak-to-peak inductor ripple current seen by the output cap (A)
    pub input_ripple_current: f64,
    /// Ripple from charging the output capacitance (V)
    pub cap_ripple: f64,
    /// Ripple across the capacitor ESR (V)
    pub esr_ripple: f64,
    /// Total peak-to-peak ripple voltage (V)
    pub total: f64,
}

/// Evaluate every ripple component for `params`.
///
/// # Errors
/// - [`RippleError::DomainError`] if `vout / vin` is not in `[0, 1]` (NaN included)
/// - [`RippleError::DivisionByZero`] if `freq` or `output_cap` is zero, or their
///   product underflows so the capacitive term is not finite
pub fn ripple_breakdown(params: &RegulatorParams) -> Result<RippleBreakdown> {
    let duty = params.duty_ratio();
    if !(0.0..=1.0).contains(&duty) {
        warn!(vout = params.vout, vin = params.vin, duty, "duty ratio out of domain");
        return Err(RippleError::domain(params.vout, params.vin));
    }
    if params.freq == 0.0 {
        warn!("switching frequency is zero");
        return Err(RippleError::division_by_zero("switching frequency"));
    }
    if params.output_cap == 0.0 {
        warn!("output capacitance is zero");
        return Err(RippleError::division_by_zero("output capacitance"));
    }

    let divisor = params.freq * 8.0 * params.output_cap;
    let input_ripple_current = params.max_output_current * (duty * (1.0 - duty)).sqrt() / 2.0;
    let cap_ripple = input_ripple_current / divisor;
    if divisor == 0.0 || !cap_ripple.is_finite() {
        warn!(divisor, cap_ripple, "capacitive ripple divisor underflowed");
        return Err(RippleError::division_by_zero("freq * 8 * output_cap"));
    }
    let esr_ripple = input_ripple_current * params.equiv_series_r;
    let total = (cap_ripple * cap_ripple + esr_ripple * esr_ripple).sqrt();

    debug!(
        duty,
        input_ripple_current,
        cap_ripple,
        esr_ripple,
        total,
        "evaluated output ripple"
    );

    Ok(RippleBreakdown {
        input_ripple_current,
        cap_ripple,
        esr_ripple,
        total,
    })
}

/// Peak-to-peak output ripple voltage (V) for `params`.
///
/// See [`ripple_breakdown`] for the error conditions.
pub fn output_ripple(params: &RegulatorParams) -> Result<f64> {
    ripple_breakdown(params).map(|b| b.total)
}
