//! Regulator design point.

/// Circuit parameters of a buck regulator output stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegulatorParams {
    /// Maximum output current (A)
    pub max_output_current: f64,
    /// Switching frequency (Hz)
    pub freq: f64,
    /// Output voltage (V)
    pub vout: f64,
    /// Input voltage (V)
    pub vin: f64,
    /// Equivalent series resistance of the output capacitor (Ω)
    pub equiv_series_r: f64,
    /// Output capacitance (F)
    pub output_cap: f64,
}

impl RegulatorParams {
    /// Create a new design point.
    pub fn new(
        max_output_current: f64,
        freq: f64,
        vout: f64,
        vin: f64,
        equiv_series_r: f64,
        output_cap: f64,
    ) -> Self {
        Self {
            max_output_current,
            freq,
            vout,
            vin,
            equiv_series_r,
            output_cap,
        }
    }

    /// LM3670 at 5.5 V in, 3.3 V out, 5 mA load with a 10 µF ceramic output cap.
    pub fn lm3670() -> Self {
        Self::new(0.005, 2_000_000.0, 3.3, 5.5, 0.000245, 1e-5)
    }

    /// Duty ratio D = vout / vin.
    pub fn duty_ratio(&self) -> f64 {
        self.vout / self.vin
    }
}

impl Default for RegulatorParams {
    fn default() -> Self {
        Self::lm3670()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_lm3670() {
        assert_eq!(RegulatorParams::default(), RegulatorParams::lm3670());
    }

    #[test]
    fn test_duty_ratio() {
        let p = RegulatorParams::lm3670();
        assert_relative_eq!(p.duty_ratio(), 0.6, epsilon = 1e-12);
    }
}
