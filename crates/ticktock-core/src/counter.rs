//! Wrapping bounded counter: the numeric leaf of the clock display.
//!
//! A [`BoundedCounter`] holds a single value in `0..modulus` and wraps
//! back to zero on overflow. The counter never signals rollover itself;
//! [`increment`] returns the post-increment value so the caller can detect
//! the wrap (a returned 0 means the counter just rolled over).
//!
//! All arithmetic uses checked operations (no silent overflow).
//!
//! [`increment`]: BoundedCounter::increment

/// Errors that can occur during counter operations.
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    /// The counter was constructed with a modulus of zero.
    #[error("invalid counter configuration: modulus must be at least 1")]
    InvalidConfig,

    /// A value outside `0..modulus` was supplied to a setter.
    #[error("value {value} out of range 0..{modulus}")]
    OutOfRange {
        /// The rejected value.
        value: u32,
        /// The counter's modulus (exclusive upper bound).
        modulus: u32,
    },
}

/// A wrapping counter with a fixed modulus and zero-padded rendering.
///
/// The invariant `value < modulus` holds at all times: construction starts
/// at zero, [`set_value`] rejects out-of-range input without mutating, and
/// [`increment`] reduces modulo the modulus.
///
/// [`set_value`]: BoundedCounter::set_value
/// [`increment`]: BoundedCounter::increment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCounter {
    /// Current value, always in `0..modulus`.
    value: u32,

    /// Exclusive upper bound, fixed at construction (at least 1).
    modulus: u32,
}

impl BoundedCounter {
    /// Create a counter with the given modulus, starting at zero.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::InvalidConfig`] if `modulus` is zero.
    pub const fn new(modulus: u32) -> Result<Self, CounterError> {
        if modulus == 0 {
            return Err(CounterError::InvalidConfig);
        }
        Ok(Self { value: 0, modulus })
    }

    /// Check whether a value is storable without mutating the counter.
    ///
    /// Used by callers that must validate several fields before committing
    /// any of them.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::OutOfRange`] if `value >= modulus`.
    pub const fn validate(&self, value: u32) -> Result<(), CounterError> {
        if value >= self.modulus {
            return Err(CounterError::OutOfRange {
                value,
                modulus: self.modulus,
            });
        }
        Ok(())
    }

    /// Set the counter to an exact value.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::OutOfRange`] if `value >= modulus`; the
    /// prior value is left unchanged in that case.
    pub const fn set_value(&mut self, value: u32) -> Result<(), CounterError> {
        if value >= self.modulus {
            return Err(CounterError::OutOfRange {
                value,
                modulus: self.modulus,
            });
        }
        self.value = value;
        Ok(())
    }

    /// Advance the counter by one, wrapping at the modulus.
    ///
    /// Returns the post-increment value; a returned 0 means the counter
    /// rolled over. Never fails.
    pub fn increment(&mut self) -> u32 {
        let next = self.value.checked_add(1).unwrap_or(0);
        self.value = next.checked_rem(self.modulus).unwrap_or(0);
        self.value
    }

    /// Return the current value.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Return the configured modulus.
    pub const fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Render the value as a decimal string, zero-padded to 2 digits.
    ///
    /// The padding is only meaningful for moduli up to 99; larger values
    /// render with however many digits they need.
    pub fn display_value(&self) -> String {
        format!("{:02}", self.value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero() {
        let counter = BoundedCounter::new(24).unwrap();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.modulus(), 24);
    }

    #[test]
    fn zero_modulus_is_rejected() {
        let result = BoundedCounter::new(0);
        assert!(matches!(result, Err(CounterError::InvalidConfig)));
    }

    #[test]
    fn increment_wraps_at_modulus() {
        let mut counter = BoundedCounter::new(3).unwrap();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        // Third increment rolls over.
        assert_eq!(counter.increment(), 0);
        assert_eq!(counter.increment(), 1);
    }

    #[test]
    fn increment_sequence_matches_modulo() {
        // For every modulus up to 99, k increments land on k mod m.
        for modulus in 1..100u32 {
            let mut counter = BoundedCounter::new(modulus).unwrap();
            let steps = modulus * 10;
            for k in 1..=steps {
                counter.increment();
                assert_eq!(counter.value(), k % modulus);
            }
        }
    }

    #[test]
    fn set_value_round_trips() {
        let mut counter = BoundedCounter::new(60).unwrap();
        for v in 0..60 {
            counter.set_value(v).unwrap();
            assert_eq!(counter.value(), v);
        }
    }

    #[test]
    fn set_value_rejects_out_of_range_and_keeps_state() {
        let mut counter = BoundedCounter::new(60).unwrap();
        counter.set_value(42).unwrap();

        let result = counter.set_value(60);
        assert!(matches!(
            result,
            Err(CounterError::OutOfRange {
                value: 60,
                modulus: 60
            })
        ));
        // Rejected update leaves the prior value untouched.
        assert_eq!(counter.value(), 42);
    }

    #[test]
    fn validate_does_not_mutate() {
        let counter = BoundedCounter::new(12).unwrap();
        assert!(counter.validate(11).is_ok());
        assert!(counter.validate(12).is_err());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn display_value_is_zero_padded() {
        let mut counter = BoundedCounter::new(60).unwrap();
        assert_eq!(counter.display_value(), "00");
        counter.set_value(7).unwrap();
        assert_eq!(counter.display_value(), "07");
        counter.set_value(23).unwrap();
        assert_eq!(counter.display_value(), "23");
    }

    #[test]
    fn display_value_is_two_chars_for_small_moduli() {
        for modulus in 1..=100u32 {
            let mut counter = BoundedCounter::new(modulus).unwrap();
            for v in 0..modulus.min(100) {
                counter.set_value(v).unwrap();
                assert_eq!(counter.display_value().len(), 2);
            }
        }
    }
}
