use crate::models::{TimeAxis, WeatherRecord, YearMonth};
use crate::utils::constants::PARALLEL_FILTER_THRESHOLD;
use rayon::prelude::*;

/// Records observed in exactly `target`, as a new vector in source order
pub fn filter_records(records: &[WeatherRecord], target: YearMonth) -> Vec<WeatherRecord> {
    if records.len() >= PARALLEL_FILTER_THRESHOLD {
        // Rayon's collect keeps the original order
        records
            .par_iter()
            .filter(|r| r.is_in(target))
            .cloned()
            .collect()
    } else {
        records.iter().filter(|r| r.is_in(target)).cloned().collect()
    }
}

/// Derive the target month from a slider position, then filter
pub fn filter_for_slider(
    records: &[WeatherRecord],
    axis: &TimeAxis,
    slider: u32,
) -> Vec<WeatherRecord> {
    filter_records(records, axis.year_month(slider))
}
