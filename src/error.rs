//! Error types for the ripple calculator.
//!
//! [`RippleError`] covers the two ways a regulator design point can make the
//! ripple formulas meaningless: a duty ratio outside `[0, 1]` and a zero
//! divisor in the capacitive term.

use thiserror::Error;

/// Result type alias using [`RippleError`].
pub type Result<T> = std::result::Result<T, RippleError>;

/// Unified error type for all ripple calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RippleError {
    /// Duty ratio vout/vin is outside [0, 1], so the square root argument is negative
    #[error("Duty ratio vout/vin = {vout}/{vin} = {ratio} is outside the domain [0, 1]")]
    DomainError { vout: f64, vin: f64, ratio: f64 },

    /// A divisor in the capacitive ripple term is zero
    #[error("Division by zero: {quantity} must be non-zero")]
    DivisionByZero { quantity: &'static str },
}

impl RippleError {
    /// Create a domain error for the given output/input voltages
    pub fn domain(vout: f64, vin: f64) -> Self {
        Self::DomainError {
            vout,
            vin,
            ratio: vout / vin,
        }
    }

    /// Create a division-by-zero error naming the zero quantity
    pub fn division_by_zero(quantity: &'static str) -> Self {
        Self::DivisionByZero { quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_message_names_ratio() {
        let err = RippleError::domain(6.0, 3.0);
        let msg = err.to_string();
        assert!(msg.contains("6/3 = 2"), "unexpected message: {msg}");
        assert!(msg.contains("[0, 1]"));
    }

    #[test]
    fn test_division_message_names_quantity() {
        let err = RippleError::division_by_zero("output capacitance");
        assert_eq!(
            err.to_string(),
            "Division by zero: output capacitance must be non-zero"
        );
    }
}
