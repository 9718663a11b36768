pub mod config;
pub mod controller;

pub use config::{DashboardConfig, PanelConfig};
pub use controller::{FrameSummary, PanelBinding, PanelFrame, SliderController};

use crate::error::Result;
use crate::processors::{Coverage, LoadReport};
use crate::readers::ConcurrentReader;
use crate::render::{FeaturePanel, PanelState};
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::info;

/// A configured set of panels with their data loaded and slider 0 drawn
pub struct Dashboard {
    config: DashboardConfig,
    controller: SliderController<FeaturePanel>,
    reports: Vec<LoadReport>,
}

impl Dashboard {
    /// Load every source, then build the panels.
    ///
    /// Sources shared by several panels are read once. No panel is built
    /// until all sources have loaded.
    pub async fn load(config: DashboardConfig, data_dir: &Path, strict: bool) -> Result<Self> {
        config.check()?;

        let sources = config.resolve_sources(data_dir);
        let mut unique: Vec<PathBuf> = Vec::new();
        for source in &sources {
            if !unique.contains(source) {
                unique.push(source.clone());
            }
        }

        let loaded = ConcurrentReader::new(strict).read_all(&unique).await?;
        let by_path: HashMap<&PathBuf, _> = loaded.iter().map(|l| (&l.path, l)).collect();

        let mut bindings = Vec::with_capacity(config.panels.len());
        for (panel, source) in config.panels.iter().zip(&sources) {
            let records = by_path[source].records.clone();
            let state = PanelState::new(
                FeaturePanel::new(panel.id.as_str(), config.view.clone()),
                &config.tiles,
                panel.scale,
            );
            bindings.push(PanelBinding::new(records, state));
        }

        let controller = SliderController::new(config.time_axis, bindings)?;
        info!(
            panels = config.panels.len(),
            sources = unique.len(),
            "Dashboard ready at {}",
            controller.date_display()
        );

        let reports = loaded.into_iter().map(|l| l.report).collect();
        Ok(Self {
            config,
            controller,
            reports,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn controller(&self) -> &SliderController<FeaturePanel> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SliderController<FeaturePanel> {
        &mut self.controller
    }

    pub fn reports(&self) -> &[LoadReport] {
        &self.reports
    }

    /// Coverage of each panel's dataset, in panel order
    pub fn panel_coverage(&self) -> Vec<(String, Option<Coverage>)> {
        self.controller
            .bindings()
            .iter()
            .map(|b| (b.state.id().to_string(), Coverage::from_records(&b.records)))
            .collect()
    }

    /// Slider positions spanning the data of all panels. None when no panel has
    /// data or the data lies beyond the slider's reach.
    pub fn slider_range(&self) -> Option<RangeInclusive<u32>> {
        let coverages: Vec<Coverage> = self
            .panel_coverage()
            .into_iter()
            .filter_map(|(_, coverage)| coverage)
            .collect();

        Coverage::union(&coverages).and_then(|c| c.slider_range(&self.config.time_axis))
    }
}
