use crate::error::{ProcessingError, Result};
use crate::models::{RawWeatherRow, WeatherRecord, REQUIRED_COLUMNS};
use crate::processors::{LoadReport, RowIssue};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use tracing::{debug, warn};

pub struct WeatherReader {
    strict: bool,
}

impl WeatherReader {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// In strict mode the first invalid row fails the whole load
    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    /// Read weather records from a CSV file
    pub fn read_weather(&self, path: &Path) -> Result<(Vec<WeatherRecord>, LoadReport)> {
        let bytes = std::fs::read(path).map_err(|source| ProcessingError::SourceUnreachable {
            path: path.to_path_buf(),
            source,
        })?;

        self.read_weather_bytes(&bytes, path)
    }

    /// Parse CSV content already in memory; `path` is only used for reporting
    pub fn read_weather_bytes(
        &self,
        bytes: &[u8],
        path: &Path,
    ) -> Result<(Vec<WeatherRecord>, LoadReport)> {
        let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
        if had_errors {
            return Err(ProcessingError::MalformedSource {
                path: path.to_path_buf(),
                reason: "content is not valid UTF-8".to_string(),
            });
        }

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(false)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| ProcessingError::MalformedSource {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
            .clone();
        self.check_headers(&headers, path)?;

        let mut records = Vec::new();
        let mut report = LoadReport::new(path);

        for result in reader.records() {
            let parsed = match result {
                Ok(row) => Self::parse_row(&row, &headers),
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    Err(RowIssue::structural(line, e.to_string()))
                }
            };

            match parsed {
                Ok(record) => {
                    report.record_accepted();
                    records.push(record);
                }
                Err(issue) => {
                    if self.strict {
                        return Err(ProcessingError::InvalidRow {
                            path: path.to_path_buf(),
                            line: issue.line,
                            reason: issue.to_string(),
                        });
                    }
                    warn!(source = %path.display(), "Skipping row: {}", issue);
                    report.record_rejected(issue);
                }
            }
        }

        debug!(
            source = %path.display(),
            accepted = report.accepted_rows,
            rejected = report.rejected_rows(),
            "Parsed weather CSV"
        );

        Ok((records, report))
    }

    fn check_headers(&self, headers: &StringRecord, path: &Path) -> Result<()> {
        if headers.is_empty() {
            return Err(ProcessingError::MalformedSource {
                path: path.to_path_buf(),
                reason: "no header row".to_string(),
            });
        }

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ProcessingError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                });
            }
        }

        Ok(())
    }

    fn parse_row(row: &StringRecord, headers: &StringRecord) -> std::result::Result<WeatherRecord, RowIssue> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let raw: RawWeatherRow = row
            .deserialize(Some(headers))
            .map_err(|e| RowIssue::structural(line, e.to_string()))?;

        raw.parse().map_err(|issue| RowIssue::from_field(line, issue))
    }
}

impl Default for WeatherReader {
    fn default() -> Self {
        Self::new()
    }
}
