use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Low => "#008000",
            Severity::Medium => "#0000ff",
            Severity::High => "#ff0000",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low Precipitation",
            Severity::Medium => "Medium Precipitation",
            Severity::High => "High Precipitation",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Two precipitation thresholds splitting values into three buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub low: f64,
    pub high: f64,
}

impl ColorScale {
    /// Observed station totals
    pub const ACTUAL: ColorScale = ColorScale {
        low: 0.008,
        high: 0.025,
    };

    /// Model output, which runs on a larger scale than the observations
    pub const PREDICTED: ColorScale = ColorScale {
        low: 0.05,
        high: 0.2,
    };

    pub fn new(low: f64, high: f64) -> Result<Self> {
        let scale = Self { low, high };
        scale.check()?;
        Ok(scale)
    }

    pub fn check(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(ProcessingError::Config(format!(
                "Color thresholds must be finite, got {} and {}",
                self.low, self.high
            )));
        }

        if self.low >= self.high {
            return Err(ProcessingError::Config(format!(
                "Low threshold {} must be below high threshold {}",
                self.low, self.high
            )));
        }

        Ok(())
    }

    /// Bucket a precipitation value. Non-finite input has no bucket.
    pub fn classify(&self, precipitation: f64) -> Option<Severity> {
        if !precipitation.is_finite() {
            return None;
        }

        Some(if precipitation < self.low {
            Severity::Low
        } else if precipitation < self.high {
            Severity::Medium
        } else {
            Severity::High
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actual_scale_boundaries() {
        let scale = ColorScale::ACTUAL;
        assert_eq!(scale.classify(0.007), Some(Severity::Low));
        assert_eq!(scale.classify(0.008), Some(Severity::Medium));
        assert_eq!(scale.classify(0.024), Some(Severity::Medium));
        assert_eq!(scale.classify(0.025), Some(Severity::High));
    }

    #[test]
    fn test_predicted_scale_boundaries() {
        let scale = ColorScale::PREDICTED;
        assert_eq!(scale.classify(0.049), Some(Severity::Low));
        assert_eq!(scale.classify(0.05), Some(Severity::Medium));
        assert_eq!(scale.classify(0.199), Some(Severity::Medium));
        assert_eq!(scale.classify(0.2), Some(Severity::High));
    }

    #[test]
    fn test_non_finite_has_no_bucket() {
        assert_eq!(ColorScale::ACTUAL.classify(f64::NAN), None);
        assert_eq!(ColorScale::PREDICTED.classify(f64::INFINITY), None);
    }

    #[test]
    fn test_scale_validation() {
        assert!(ColorScale::new(0.2, 0.05).is_err());
        assert!(ColorScale::new(0.1, 0.1).is_err());
        assert!(ColorScale::new(f64::NAN, 0.1).is_err());
        assert_eq!(ColorScale::new(0.05, 0.2).unwrap(), ColorScale::PREDICTED);
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Low.color(), "#008000");
        assert_eq!(Severity::Medium.color(), "#0000ff");
        assert_eq!(Severity::High.color(), "#ff0000");
    }
}
