use crate::models::{TimeAxis, WeatherRecord, YearMonth};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// The span of months a dataset covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub first: YearMonth,
    pub last: YearMonth,
    pub months: BTreeMap<YearMonth, usize>,
}

impl Coverage {
    pub fn from_records(records: &[WeatherRecord]) -> Option<Self> {
        let mut months: BTreeMap<YearMonth, usize> = BTreeMap::new();
        for record in records {
            *months.entry(record.year_month()).or_default() += 1;
        }

        let first = *months.keys().next()?;
        let last = *months.keys().next_back()?;

        Some(Self {
            first,
            last,
            months,
        })
    }

    /// Merge coverage across several datasets
    pub fn union<'a>(coverages: impl IntoIterator<Item = &'a Coverage>) -> Option<Coverage> {
        let mut months: BTreeMap<YearMonth, usize> = BTreeMap::new();
        for coverage in coverages {
            for (month, count) in &coverage.months {
                *months.entry(*month).or_default() += count;
            }
        }

        let first = *months.keys().next()?;
        let last = *months.keys().next_back()?;

        Some(Coverage {
            first,
            last,
            months,
        })
    }

    pub fn slider_range(&self, axis: &TimeAxis) -> Option<RangeInclusive<u32>> {
        axis.slider_range(self.first, self.last)
    }

    pub fn records_in(&self, month: YearMonth) -> usize {
        self.months.get(&month).copied().unwrap_or(0)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} to {} ({} months with data)",
            self.first.label(),
            self.last.label(),
            self.months.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: u32) -> WeatherRecord {
        WeatherRecord::builder()
            .year_month(year, month)
            .station_id("727930")
            .build()
            .unwrap()
    }

    #[test]
    fn test_coverage_bounds() {
        let records = vec![record(2003, 5), record(2001, 11), record(2003, 5), record(2002, 1)];
        let coverage = Coverage::from_records(&records).unwrap();

        assert_eq!(coverage.first, YearMonth::new(2001, 11));
        assert_eq!(coverage.last, YearMonth::new(2003, 5));
        assert_eq!(coverage.records_in(YearMonth::new(2003, 5)), 2);
        assert_eq!(coverage.records_in(YearMonth::new(2003, 6)), 0);
        assert_eq!(coverage.slider_range(&TimeAxis::TIMELAPSE), Some(22..=40));
    }

    #[test]
    fn test_empty_records_have_no_coverage() {
        assert!(Coverage::from_records(&[]).is_none());
        assert!(Coverage::union(std::iter::empty()).is_none());
    }

    #[test]
    fn test_union() {
        let a = Coverage::from_records(&[record(2019, 1)]).unwrap();
        let b = Coverage::from_records(&[record(2019, 2), record(2019, 1)]).unwrap();
        let merged = Coverage::union([&a, &b]).unwrap();

        assert_eq!(merged.first, YearMonth::new(2019, 1));
        assert_eq!(merged.last, YearMonth::new(2019, 2));
        assert_eq!(merged.records_in(YearMonth::new(2019, 1)), 2);
        assert_eq!(merged.slider_range(&TimeAxis::COMPARISON), Some(0..=1));
    }
}
