pub mod severity;
pub mod time_index;
pub mod weather;

pub use severity::{ColorScale, Severity};
pub use time_index::{TimeAxis, YearMonth};
pub use weather::{FieldIssue, RawWeatherRow, WeatherRecord, WeatherRecordBuilder, REQUIRED_COLUMNS};
