use crate::error::{ProcessingError, Result};
use crate::models::{ColorScale, TimeAxis};
use crate::render::{MapView, TileLayer};
use crate::utils::constants::{
    ACTUAL_PANEL_ID, CONFIG_ENV_PREFIX, ORIGINAL_2019_FILE, PREDICTED_2019_FILE,
    PREDICTED_PANEL_ID, TIMELAPSE_PANEL_ID, WASHINGTON_WEATHER_FILE,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PanelConfig {
    #[validate(length(min = 1))]
    pub id: String,
    pub source: PathBuf,
    pub scale: ColorScale,
}

impl PanelConfig {
    pub fn new(id: &str, source: &str, scale: ColorScale) -> Self {
        Self {
            id: id.to_string(),
            source: PathBuf::from(source),
            scale,
        }
    }
}

/// Everything that distinguishes one map dashboard from another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    pub time_axis: TimeAxis,

    #[serde(default)]
    pub view: MapView,

    #[serde(default)]
    pub tiles: TileLayer,

    #[validate(length(min = 1))]
    pub panels: Vec<PanelConfig>,
}

impl DashboardConfig {
    /// Observed against predicted precipitation for January and February 2019
    pub fn comparison() -> Self {
        Self {
            time_axis: TimeAxis::COMPARISON,
            view: MapView::default(),
            tiles: TileLayer::default(),
            panels: vec![
                PanelConfig::new(ACTUAL_PANEL_ID, ORIGINAL_2019_FILE, ColorScale::ACTUAL),
                PanelConfig::new(PREDICTED_PANEL_ID, PREDICTED_2019_FILE, ColorScale::PREDICTED),
            ],
        }
    }

    /// Month-by-month Washington State observations from January 2000
    pub fn timelapse() -> Self {
        Self {
            time_axis: TimeAxis::TIMELAPSE,
            view: MapView::default(),
            tiles: TileLayer::default(),
            panels: vec![PanelConfig::new(
                TIMELAPSE_PANEL_ID,
                WASHINGTON_WEATHER_FILE,
                ColorScale::PREDICTED,
            )],
        }
    }

    /// Load from a TOML/YAML/JSON file, with `WEATHER_MAP__*` environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .add_source(
                ::config::Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let dashboard: DashboardConfig = settings.try_deserialize()?;
        dashboard.check()?;
        Ok(dashboard)
    }

    pub fn check(&self) -> Result<()> {
        self.validate()?;
        self.time_axis.check()?;

        let mut seen = HashSet::new();
        for panel in &self.panels {
            panel.validate()?;
            panel.scale.check()?;
            if !seen.insert(panel.id.as_str()) {
                return Err(ProcessingError::Config(format!(
                    "Duplicate panel id '{}'",
                    panel.id
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.tiles.opacity) {
            return Err(ProcessingError::Config(format!(
                "Tile opacity must be between 0 and 1, got {}",
                self.tiles.opacity
            )));
        }

        Ok(())
    }

    pub fn panel(&self, id: &str) -> Result<&PanelConfig> {
        self.panels
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ProcessingError::UnknownPanel(id.to_string()))
    }

    /// Source path of each panel, relative paths taken from `data_dir`
    pub fn resolve_sources(&self, data_dir: &Path) -> Vec<PathBuf> {
        self.panels
            .iter()
            .map(|p| {
                if p.source.is_absolute() {
                    p.source.clone()
                } else {
                    data_dir.join(&p.source)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_presets_are_valid() {
        let comparison = DashboardConfig::comparison();
        assert!(comparison.check().is_ok());
        assert_eq!(comparison.panels.len(), 2);
        assert_eq!(comparison.panel("actual-map").unwrap().scale, ColorScale::ACTUAL);
        assert_eq!(comparison.panel("predicted-map").unwrap().scale, ColorScale::PREDICTED);

        let timelapse = DashboardConfig::timelapse();
        assert!(timelapse.check().is_ok());
        assert_eq!(timelapse.time_axis, TimeAxis::Monthly { base_year: 2000 });
        assert!(matches!(timelapse.panel("nope"), Err(ProcessingError::UnknownPanel(_))));
    }

    #[test]
    fn test_check_rejects_bad_configs() {
        let mut duplicate = DashboardConfig::comparison();
        duplicate.panels[1].id = "actual-map".to_string();
        assert!(duplicate.check().is_err());

        let mut no_panels = DashboardConfig::timelapse();
        no_panels.panels.clear();
        assert!(no_panels.check().is_err());

        let mut inverted = DashboardConfig::timelapse();
        inverted.panels[0].scale = ColorScale { low: 0.3, high: 0.1 };
        assert!(inverted.check().is_err());

        let mut zero_period = DashboardConfig::comparison();
        zero_period.time_axis = TimeAxis::Cycle { year: 2019, period: 0 };
        assert!(zero_period.check().is_err());
    }

    #[test]
    fn test_resolve_sources() {
        let mut config = DashboardConfig::comparison();
        config.panels[1].source = PathBuf::from("/data/elsewhere.csv");

        let sources = config.resolve_sources(Path::new("/srv/weather"));
        assert_eq!(
            sources,
            vec![
                PathBuf::from("/srv/weather/Original2019.csv"),
                PathBuf::from("/data/elsewhere.csv"),
            ]
        );
    }

    #[test]
    fn test_from_toml_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(
            file,
            r#"
[time_axis]
kind = "monthly"
base_year = 2010

[[panels]]
id = "map"
source = "Oregon.csv"
scale = {{ low = 0.1, high = 0.4 }}
"#
        )?;

        let config = DashboardConfig::from_file(file.path())?;

        assert_eq!(config.time_axis, TimeAxis::Monthly { base_year: 2010 });
        assert_eq!(config.panels[0].source, PathBuf::from("Oregon.csv"));
        assert_eq!(config.panels[0].scale, ColorScale { low: 0.1, high: 0.4 });
        assert_eq!(config.view, MapView::default());
        assert_eq!(config.tiles, TileLayer::default());

        Ok(())
    }
}
