use crate::error::Result;
use crate::models::WeatherRecord;
use crate::processors::LoadReport;
use crate::readers::WeatherReader;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// One source after loading, shared read-only by every panel that shows it
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: PathBuf,
    pub records: Arc<Vec<WeatherRecord>>,
    pub report: LoadReport,
}

pub struct ConcurrentReader {
    strict: bool,
}

impl ConcurrentReader {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Read every source on its own blocking task and wait for all of them.
    ///
    /// Results come back in the order of `paths`. The first failure is
    /// returned and nothing is handed to the caller, so rendering never starts
    /// on a partial set of sources.
    pub async fn read_all(&self, paths: &[PathBuf]) -> Result<Vec<LoadedSource>> {
        let handles: Vec<JoinHandle<Result<LoadedSource>>> = paths
            .iter()
            .cloned()
            .map(|path| {
                let strict = self.strict;
                tokio::task::spawn_blocking(move || {
                    let reader = WeatherReader::with_strict(strict);
                    let (records, report) = reader.read_weather(&path)?;
                    info!(
                        source = %path.display(),
                        records = records.len(),
                        rejected = report.rejected_rows(),
                        "Loaded weather data"
                    );
                    Ok(LoadedSource {
                        path,
                        records: Arc::new(records),
                        report,
                    })
                })
            })
            .collect();

        let mut loaded = Vec::with_capacity(handles.len());
        for handle in handles {
            loaded.push(handle.await??);
        }

        Ok(loaded)
    }
}

impl Default for ConcurrentReader {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, rows: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "YEAR,MONTH,LAT,LON,PRCP,ELEV(M),TEMP,USAF").unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        path
    }

    #[tokio::test]
    async fn test_read_all_preserves_order() {
        let dir = TempDir::new().unwrap();
        let a = write_csv(&dir, "a.csv", &["2019,1,47.1,-120.1,0.01,100,3.0,720001"]);
        let b = write_csv(
            &dir,
            "b.csv",
            &[
                "2019,1,47.2,-120.2,0.02,200,4.0,720002",
                "2019,2,47.3,-120.3,0.03,300,5.0,720003",
            ],
        );

        let loaded = ConcurrentReader::default().read_all(&[a.clone(), b.clone()]).await.unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].path, a);
        assert_eq!(loaded[0].records.len(), 1);
        assert_eq!(loaded[1].path, b);
        assert_eq!(loaded[1].records.len(), 2);
    }

    #[tokio::test]
    async fn test_any_failure_fails_the_join() {
        let dir = TempDir::new().unwrap();
        let good = write_csv(&dir, "good.csv", &["2019,1,47.1,-120.1,0.01,100,3.0,720001"]);
        let missing = dir.path().join("missing.csv");

        let result = ConcurrentReader::default().read_all(&[good, missing]).await;
        assert!(matches!(result, Err(ProcessingError::SourceUnreachable { .. })));
    }
}
