use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::YearMonth;
use crate::utils::constants::{MAX_VALID_YEAR, MIN_VALID_YEAR};

/// Column names every weather CSV must carry
pub const REQUIRED_COLUMNS: [&str; 8] = ["YEAR", "MONTH", "LAT", "LON", "PRCP", "ELEV(M)", "TEMP", "USAF"];

/// A row exactly as it appears in the CSV, before numeric coercion
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWeatherRow {
    #[serde(rename = "YEAR")]
    pub year: String,
    #[serde(rename = "MONTH")]
    pub month: String,
    #[serde(rename = "LAT")]
    pub latitude: String,
    #[serde(rename = "LON")]
    pub longitude: String,
    #[serde(rename = "PRCP")]
    pub precipitation: String,
    #[serde(rename = "ELEV(M)")]
    pub elevation: String,
    #[serde(rename = "TEMP")]
    pub temperature: String,
    #[serde(rename = "USAF")]
    pub station_id: String,
}

/// Why a single field of a row was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub column: &'static str,
    pub value: String,
    pub reason: String,
}

impl FieldIssue {
    fn new(column: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self {
            column,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.column, self.value, self.reason)
    }
}

impl RawWeatherRow {
    /// Coerce every field, rejecting the row on the first field that fails
    pub fn parse(&self) -> std::result::Result<WeatherRecord, FieldIssue> {
        let year = parse_integer("YEAR", &self.year)?;
        if !(i64::from(MIN_VALID_YEAR)..=i64::from(MAX_VALID_YEAR)).contains(&year) {
            return Err(FieldIssue::new(
                "YEAR",
                &self.year,
                format!("year outside [{}, {}]", MIN_VALID_YEAR, MAX_VALID_YEAR),
            ));
        }
        let month = parse_integer("MONTH", &self.month)?;
        if !(1..=12).contains(&month) {
            return Err(FieldIssue::new("MONTH", &self.month, "month must be between 1 and 12"));
        }

        let latitude = parse_finite("LAT", &self.latitude)?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(FieldIssue::new("LAT", &self.latitude, "latitude outside [-90, 90]"));
        }

        let longitude = parse_finite("LON", &self.longitude)?;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(FieldIssue::new("LON", &self.longitude, "longitude outside [-180, 180]"));
        }

        let station_id = self.station_id.trim();
        if station_id.is_empty() {
            return Err(FieldIssue::new("USAF", &self.station_id, "station ID is empty"));
        }

        Ok(WeatherRecord {
            year: year as i32,
            month: month as u32,
            latitude,
            longitude,
            precipitation: parse_finite("PRCP", &self.precipitation)?,
            elevation: parse_finite("ELEV(M)", &self.elevation)?,
            temperature: parse_finite("TEMP", &self.temperature)?,
            station_id: station_id.to_string(),
        })
    }
}

fn parse_finite(column: &'static str, value: &str) -> std::result::Result<f64, FieldIssue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldIssue::new(column, value, "value is missing"));
    }

    let parsed = trimmed
        .parse::<f64>()
        .map_err(|_| FieldIssue::new(column, value, "not a number"))?;

    if !parsed.is_finite() {
        return Err(FieldIssue::new(column, value, "value is not finite"));
    }

    Ok(parsed)
}

fn parse_integer(column: &'static str, value: &str) -> std::result::Result<i64, FieldIssue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldIssue::new(column, value, "value is missing"));
    }

    // Spreadsheet exports write whole numbers as "2019.0"
    let parsed = trimmed.parse::<i64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .filter(|v| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(v))
            .map(|v| v as i64)
    });

    parsed
        .filter(|v| i32::try_from(*v).is_ok())
        .ok_or_else(|| FieldIssue::new(column, value, "not an integer"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WeatherRecord {
    #[validate(range(min = 1800, max = 2200))]
    pub year: i32,

    #[validate(range(min = 1, max = 12))]
    pub month: u32,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub precipitation: f64,

    /// Metres above sea level
    pub elevation: f64,

    /// Degrees Celsius
    pub temperature: f64,

    /// USAF station identifier, kept as text since leading zeros matter
    #[validate(length(min = 1))]
    pub station_id: String,
}

impl WeatherRecord {
    pub fn builder() -> WeatherRecordBuilder {
        WeatherRecordBuilder::new()
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    pub fn is_in(&self, target: YearMonth) -> bool {
        self.year == target.year && self.month == target.month
    }
}

pub struct WeatherRecordBuilder {
    year: i32,
    month: u32,
    latitude: f64,
    longitude: f64,
    precipitation: f64,
    elevation: f64,
    temperature: f64,
    station_id: String,
}

impl Default for WeatherRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherRecordBuilder {
    pub fn new() -> Self {
        Self {
            year: 2000,
            month: 1,
            latitude: 0.0,
            longitude: 0.0,
            precipitation: 0.0,
            elevation: 0.0,
            temperature: 0.0,
            station_id: String::new(),
        }
    }

    pub fn year_month(mut self, year: i32, month: u32) -> Self {
        self.year = year;
        self.month = month;
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn precipitation(mut self, precipitation: f64) -> Self {
        self.precipitation = precipitation;
        self
    }

    pub fn elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn station_id(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = station_id.into();
        self
    }

    pub fn build(self) -> crate::error::Result<WeatherRecord> {
        let record = WeatherRecord {
            year: self.year,
            month: self.month,
            latitude: self.latitude,
            longitude: self.longitude,
            precipitation: self.precipitation,
            elevation: self.elevation,
            temperature: self.temperature,
            station_id: self.station_id,
        };

        record.validate()?;
        Ok(record)
    }
}
