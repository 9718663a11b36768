use chrono::Month;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{MAX_VALID_YEAR, MIN_VALID_YEAR};

/// A calendar month, the unit the slider steps through
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    /// Text shown in the date display, e.g. "February 2001"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Maps a slider position to the month it selects.
///
/// `Cycle` keeps the year fixed and wraps the month every `period` positions,
/// which is how the observed/predicted comparison steps between January and
/// February 2019. `Monthly` walks forward one calendar month per position
/// starting at January of `base_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeAxis {
    Cycle { year: i32, period: u32 },
    Monthly { base_year: i32 },
}

impl TimeAxis {
    pub const COMPARISON: TimeAxis = TimeAxis::Cycle {
        year: 2019,
        period: 2,
    };

    pub const TIMELAPSE: TimeAxis = TimeAxis::Monthly { base_year: 2000 };

    pub fn year_month(&self, slider: u32) -> YearMonth {
        match *self {
            TimeAxis::Cycle { year, period } => YearMonth::new(year, slider % period + 1),
            TimeAxis::Monthly { base_year } => {
                // slider / 12 is at most 357_913_941, well inside i32
                YearMonth::new(base_year.saturating_add((slider / 12) as i32), slider % 12 + 1)
            }
        }
    }

    /// Slider position that selects `target`, if the axis can reach it
    pub fn slider_for(&self, target: YearMonth) -> Option<u32> {
        if !(1..=12).contains(&target.month) {
            return None;
        }

        match *self {
            TimeAxis::Cycle { year, period } => {
                (target.year == year && target.month <= period).then(|| target.month - 1)
            }
            TimeAxis::Monthly { base_year } => {
                let years = u32::try_from(target.year.checked_sub(base_year)?).ok()?;
                years.checked_mul(12)?.checked_add(target.month - 1)
            }
        }
    }

    /// Slider positions worth offering for data spanning `first..=last`.
    ///
    /// A cycle axis always offers its full period. A monthly axis clamps data
    /// that predates the base year to position 0, and gives `None` when the
    /// last month lies beyond what a `u32` slider can reach.
    pub fn slider_range(&self, first: YearMonth, last: YearMonth) -> Option<RangeInclusive<u32>> {
        match *self {
            TimeAxis::Cycle { period, .. } => Some(0..=period.saturating_sub(1)),
            TimeAxis::Monthly { base_year } => {
                let start = self.slider_for(first).unwrap_or(0);
                let end = if last.year < base_year {
                    0
                } else {
                    self.slider_for(last)?
                };
                Some(start..=end.max(start))
            }
        }
    }

    pub fn check(&self) -> Result<()> {
        let year = match *self {
            TimeAxis::Cycle { year, period } => {
                if !(1..=12).contains(&period) {
                    return Err(ProcessingError::Config(format!(
                        "Cycle period must be between 1 and 12, got {}",
                        period
                    )));
                }
                year
            }
            TimeAxis::Monthly { base_year } => base_year,
        };

        if !(MIN_VALID_YEAR..=MAX_VALID_YEAR).contains(&year) {
            return Err(ProcessingError::Config(format!(
                "Time axis year must be between {} and {}, got {}",
                MIN_VALID_YEAR, MAX_VALID_YEAR, year
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_axis_alternates_january_february() {
        let axis = TimeAxis::COMPARISON;
        assert_eq!(axis.year_month(0), YearMonth::new(2019, 1));
        assert_eq!(axis.year_month(1), YearMonth::new(2019, 2));
        assert_eq!(axis.year_month(2), YearMonth::new(2019, 1));
        assert_eq!(axis.year_month(7), YearMonth::new(2019, 2));
    }

    #[test]
    fn test_monthly_axis() {
        let axis = TimeAxis::TIMELAPSE;
        assert_eq!(axis.year_month(0), YearMonth::new(2000, 1));
        assert_eq!(axis.year_month(11), YearMonth::new(2000, 12));
        assert_eq!(axis.year_month(12), YearMonth::new(2001, 1));
        assert_eq!(axis.year_month(13), YearMonth::new(2001, 2));
    }

    #[test]
    fn test_slider_for_inverts_year_month() {
        let axis = TimeAxis::TIMELAPSE;
        for slider in [0, 5, 13, 287] {
            assert_eq!(axis.slider_for(axis.year_month(slider)), Some(slider));
        }
        assert_eq!(axis.slider_for(YearMonth::new(1999, 12)), None);
        assert_eq!(TimeAxis::COMPARISON.slider_for(YearMonth::new(2019, 3)), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(YearMonth::new(2000, 1).label(), "January 2000");
        assert_eq!(TimeAxis::TIMELAPSE.year_month(13).label(), "February 2001");
        assert_eq!(YearMonth::new(2019, 12).to_string(), "2019-12");
    }

    #[test]
    fn test_slider_range() {
        let axis = TimeAxis::TIMELAPSE;
        let range = axis.slider_range(YearMonth::new(2001, 3), YearMonth::new(2002, 1));
        assert_eq!(range, Some(14..=24));

        let clamped = axis.slider_range(YearMonth::new(1998, 6), YearMonth::new(2000, 2));
        assert_eq!(clamped, Some(0..=1));

        let cycle = TimeAxis::COMPARISON.slider_range(YearMonth::new(2019, 1), YearMonth::new(2019, 1));
        assert_eq!(cycle, Some(0..=1));
    }

    #[test]
    fn test_slider_range_beyond_u32_is_none() {
        let axis = TimeAxis::Monthly { base_year: 1800 };
        let far = YearMonth::new(i32::MAX, 12);
        assert_eq!(axis.slider_range(YearMonth::new(2000, 1), far), None);
    }

    #[test]
    fn test_year_month_saturates_near_i32_max() {
        let axis = TimeAxis::Monthly { base_year: i32::MAX - 1 };
        assert_eq!(axis.year_month(24), YearMonth::new(i32::MAX, 1));
        assert_eq!(axis.year_month(u32::MAX).month, 4);
    }

    #[test]
    fn test_check_rejects_zero_period() {
        assert!(TimeAxis::Cycle { year: 2019, period: 0 }.check().is_err());
        assert!(TimeAxis::COMPARISON.check().is_ok());
    }

    #[test]
    fn test_check_rejects_implausible_years() {
        assert!(TimeAxis::Monthly { base_year: i32::MAX - 1 }.check().is_err());
        assert!(TimeAxis::Monthly { base_year: 1799 }.check().is_err());
        assert!(TimeAxis::Cycle { year: 20019, period: 2 }.check().is_err());
        assert!(TimeAxis::TIMELAPSE.check().is_ok());
    }
}
