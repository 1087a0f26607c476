//! Validation of the relative training/testing sizes.

use crate::error::{Result, SplitError};

/// Upper bound on `training + testing`, slightly above 1.0 to absorb float error.
pub const MAX_RATIO_SUM: f64 = 1.0001;

/// Relative sizes of the training and testing subsets.
///
/// These are validated but do not drive routing; see [`crate::TRAINING_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub training: f64,
    pub testing: f64,
}

impl Ratios {
    pub fn new(training: f64, testing: f64) -> Result<Self> {
        if training.is_nan() || testing.is_nan() || training < 0.0 || testing < 0.0 {
            return Err(SplitError::InvalidParameter(format!(
                "negative or NaN input (training={training}, testing={testing})"
            )));
        }
        if training + testing > MAX_RATIO_SUM {
            return Err(SplitError::InvalidParameter(format!(
                "fraction bigger than 1 (training={training} + testing={testing})"
            )));
        }
        Ok(Ratios { training, testing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_reference_ratios() {
        let r = Ratios::new(0.9, 0.1).unwrap();
        assert_eq!(r.training, 0.9);
        assert_eq!(r.testing, 0.1);
    }

    #[test]
    fn test_accepts_zero_and_epsilon() {
        assert!(Ratios::new(0.0, 0.0).is_ok());
        assert!(Ratios::new(0.5, 0.50005).is_ok());
        assert!(Ratios::new(1.0, 0.0).is_ok());
    }

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            Ratios::new(-0.1, 0.1),
            Err(SplitError::InvalidParameter(_))
        ));
        assert!(matches!(
            Ratios::new(0.9, -0.0001),
            Err(SplitError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_sum_above_one() {
        assert!(matches!(
            Ratios::new(1.0, 0.5),
            Err(SplitError::InvalidParameter(_))
        ));
        assert!(matches!(
            Ratios::new(0.5, 0.5002),
            Err(SplitError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_nan() {
        assert!(Ratios::new(f64::NAN, 0.1).is_err());
        assert!(Ratios::new(0.1, f64::NAN).is_err());
    }
}
