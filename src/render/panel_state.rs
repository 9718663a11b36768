use crate::error::Result;
use crate::models::{ColorScale, WeatherRecord};
use crate::render::legend::precipitation_legend;
use crate::render::marker::marker_for;
use crate::render::widget::{LayerId, TileLayer};
use crate::render::MapPanel;
use tracing::{debug, warn};

/// A panel together with the one marker layer currently shown on it
pub struct PanelState<P: MapPanel> {
    panel: P,
    scale: ColorScale,
    current_layer: Option<LayerId>,
}

impl<P: MapPanel> PanelState<P> {
    /// Attach the base tiles and the legend. Both stay for the panel's lifetime.
    pub fn new(mut panel: P, tiles: &TileLayer, scale: ColorScale) -> Self {
        panel.add_tile_layer(tiles);
        panel.add_control(precipitation_legend());

        Self {
            panel,
            scale,
            current_layer: None,
        }
    }

    pub fn id(&self) -> &str {
        self.panel.container_id()
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    pub fn current_layer(&self) -> Option<LayerId> {
        self.current_layer
    }

    /// Replace the live layer with one marker per record; returns the marker count
    pub fn render(&mut self, records: &[WeatherRecord]) -> Result<usize> {
        if let Some(previous) = self.current_layer.take() {
            self.panel.remove_layer(previous)?;
        }

        let layer = self.panel.create_layer();
        self.current_layer = Some(layer);

        let mut markers = 0;
        for record in records {
            match marker_for(record, &self.scale) {
                Some(marker) => {
                    self.panel.add_marker(layer, marker)?;
                    markers += 1;
                }
                None => warn!(
                    panel = self.panel.container_id(),
                    station = %record.station_id,
                    "No color bucket for precipitation {}, marker skipped",
                    record.precipitation
                ),
            }
        }

        debug!(panel = self.panel.container_id(), markers, "Rendered layer");
        Ok(markers)
    }
}
