use thiserror::Error;

/// Errors raised when a slider is configured with an unusable range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SliderError {
    /// `minimum_value` is greater than `maximum_value`.
    #[error("minimum value {minimum} is greater than maximum value {maximum}")]
    InvertedBounds {
        /// Configured minimum.
        minimum: f64,
        /// Configured maximum.
        maximum: f64,
    },
    /// `step` is negative or wider than the whole range.
    #[error("step {step} must lie within [0, {range}]")]
    StepOutOfRange {
        /// Configured step.
        step: f64,
        /// `maximum - minimum`.
        range: f64,
    },
    /// A bound or the step is NaN or infinite.
    #[error("slider bounds must be finite (minimum {minimum}, maximum {maximum}, step {step})")]
    NonFinite {
        /// Configured minimum.
        minimum: f64,
        /// Configured maximum.
        maximum: f64,
        /// Configured step.
        step: f64,
    },
}

/// Validated `{minimum, maximum, step}` triple.
///
/// `step == 0` means continuous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    minimum: f64,
    maximum: f64,
    step: f64,
}

impl Bounds {
    /// Validates and builds a range.
    pub fn new(minimum: f64, maximum: f64, step: f64) -> Result<Self, SliderError> {
        if !(minimum.is_finite() && maximum.is_finite() && step.is_finite()) {
            return Err(SliderError::NonFinite {
                minimum,
                maximum,
                step,
            });
        }
        if minimum > maximum {
            return Err(SliderError::InvertedBounds { minimum, maximum });
        }
        let range = maximum - minimum;
        if step < 0.0 || step > range {
            return Err(SliderError::StepOutOfRange { step, range });
        }
        Ok(Self {
            minimum,
            maximum,
            step,
        })
    }

    /// Lower bound.
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper bound.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Quantization step, `0` when continuous.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// `maximum - minimum`.
    pub fn range(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// `true` when `minimum == maximum`.
    pub fn is_degenerate(&self) -> bool {
        self.range() == 0.0
    }

    /// Clamps into `[minimum, maximum]`. NaN maps to the minimum.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.minimum;
        }
        value.clamp(self.minimum, self.maximum)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            step: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            Bounds::new(5.0, 1.0, 0.0),
            Err(SliderError::InvertedBounds {
                minimum: 5.0,
                maximum: 1.0
            })
        );
    }

    #[test]
    fn rejects_step_wider_than_range() {
        assert!(matches!(
            Bounds::new(0.0, 1.0, 2.0),
            Err(SliderError::StepOutOfRange { .. })
        ));
        assert!(matches!(
            Bounds::new(0.0, 1.0, -0.1),
            Err(SliderError::StepOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(
            Bounds::new(f64::NAN, 1.0, 0.0),
            Err(SliderError::NonFinite { .. })
        ));
    }

    #[test]
    fn degenerate_range_is_accepted() {
        let bounds = Bounds::new(3.0, 3.0, 0.0).expect("degenerate range is valid");
        assert!(bounds.is_degenerate());
        assert_eq!(bounds.clamp(10.0), 3.0);
    }

    #[test]
    fn clamp_handles_out_of_range_and_nan() {
        let bounds = Bounds::new(0.0, 100.0, 10.0).expect("valid bounds");
        assert_eq!(bounds.clamp(-5.0), 0.0);
        assert_eq!(bounds.clamp(150.0), 100.0);
        assert_eq!(bounds.clamp(f64::NAN), 0.0);
        assert_eq!(bounds.clamp(42.0), 42.0);
    }

    #[test]
    fn error_messages_name_the_values() {
        let err = Bounds::new(2.0, 1.0, 0.0).expect_err("inverted");
        assert_eq!(
            err.to_string(),
            "minimum value 2 is greater than maximum value 1"
        );
    }
}
