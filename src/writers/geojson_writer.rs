use crate::error::Result;
use crate::models::TimeAxis;
use crate::pipeline::{DashboardConfig, FrameSummary, SliderController};
use crate::render::{legend_entries, FeaturePanel, LegendEntry, MapView, TileLayer};
use crate::utils::constants::MANIFEST_FILE;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Index of an export, enough for a viewer to rebuild the slider and panels
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub view: &'a MapView,
    pub tiles: &'a TileLayer,
    pub time_axis: &'a TimeAxis,
    pub legend: Vec<LegendEntry>,
    pub panels: Vec<&'a str>,
    pub frames: &'a [FrameSummary],
}

pub struct GeoJsonWriter {
    output_dir: PathBuf,
    pretty: bool,
}

impl GeoJsonWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn frame_path(&self, panel: &str, slider: u32) -> PathBuf {
        self.output_dir.join(format!("{}-{:04}.geojson", panel, slider))
    }

    /// Write the live layer of every panel for the controller's current slider value
    pub fn write_frame(&self, controller: &SliderController<FeaturePanel>) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir)?;

        let mut written = Vec::with_capacity(controller.bindings().len());
        for binding in controller.bindings() {
            let path = self.frame_path(binding.state.id(), controller.slider());
            self.write_json(&path, &binding.state.to_geojson())?;
            written.push(path);
        }

        Ok(written)
    }

    pub fn write_manifest(&self, config: &DashboardConfig, frames: &[FrameSummary]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let manifest = Manifest {
            view: &config.view,
            tiles: &config.tiles,
            time_axis: &config.time_axis,
            legend: legend_entries(),
            panels: config.panels.iter().map(|p| p.id.as_str()).collect(),
            frames,
        };

        let path = self.output_dir.join(MANIFEST_FILE);
        self.write_json(&path, &manifest)?;
        Ok(path)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        if self.pretty {
            serde_json::to_writer_pretty(writer, value)?;
        } else {
            serde_json::to_writer(writer, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorScale, WeatherRecord};
    use crate::pipeline::PanelBinding;
    use crate::render::PanelState;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn controller() -> SliderController<FeaturePanel> {
        let records = vec![WeatherRecord::builder()
            .year_month(2000, 2)
            .location(47.0, -121.0)
            .precipitation(0.1)
            .station_id("727930")
            .build()
            .unwrap()];

        SliderController::new(
            TimeAxis::TIMELAPSE,
            vec![PanelBinding::new(
                Arc::new(records),
                PanelState::new(FeaturePanel::new("map", MapView::default()), &TileLayer::default(), ColorScale::PREDICTED),
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_write_frame_and_manifest() -> Result<()> {
        let dir = TempDir::new()?;
        let writer = GeoJsonWriter::new(dir.path());
        let mut controller = controller();

        let frames = vec![controller.on_input(0)?, controller.on_input(1)?];
        let written = writer.write_frame(&controller)?;
        assert_eq!(written, vec![dir.path().join("map-0001.geojson")]);

        let frame: serde_json::Value = serde_json::from_reader(File::open(&written[0])?)?;
        assert_eq!(frame["features"].as_array().unwrap().len(), 1);

        let manifest_path = writer.write_manifest(&DashboardConfig::timelapse(), &frames)?;
        let manifest: serde_json::Value = serde_json::from_reader(File::open(manifest_path)?)?;

        assert_eq!(manifest["panels"], serde_json::json!(["map"]));
        assert_eq!(manifest["time_axis"]["kind"], "monthly");
        assert_eq!(manifest["frames"][1]["label"], "February 2000");
        assert_eq!(manifest["frames"][0]["panels"][0]["markers"], 0);
        assert_eq!(manifest["legend"].as_array().unwrap().len(), 3);

        Ok(())
    }
}
