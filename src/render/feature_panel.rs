use crate::error::{ProcessingError, Result};
use crate::render::widget::{CircleMarker, Control, LayerId, MapView, TileLayer};
use crate::render::{MapPanel, PanelState};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// A map panel held in memory and exported as GeoJSON
#[derive(Debug, Clone)]
pub struct FeaturePanel {
    id: String,
    view: MapView,
    tile_layers: Vec<TileLayer>,
    controls: Vec<Control>,
    layers: BTreeMap<LayerId, Vec<CircleMarker>>,
    next_layer: u64,
}

impl FeaturePanel {
    pub fn new(id: impl Into<String>, view: MapView) -> Self {
        Self {
            id: id.into(),
            view,
            tile_layers: Vec::new(),
            controls: Vec::new(),
            layers: BTreeMap::new(),
            next_layer: 0,
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn markers(&self, layer: LayerId) -> Option<&[CircleMarker]> {
        self.layers.get(&layer).map(Vec::as_slice)
    }

    pub fn feature_collection(&self, layer: LayerId) -> Result<Value> {
        let markers = self
            .markers(layer)
            .ok_or_else(|| ProcessingError::Render(format!("{}: no layer {:?}", self.id, layer)))?;

        Ok(collection(markers))
    }
}

fn collection(markers: &[CircleMarker]) -> Value {
    let features: Vec<Value> = markers.iter().map(feature).collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn feature(marker: &CircleMarker) -> Value {
    let mut properties = json!({
        "radius": marker.radius,
        "color": marker.color,
        "fillColor": marker.fill_color,
        "fillOpacity": marker.fill_opacity,
    });

    if let Some(tooltip) = &marker.tooltip {
        properties["tooltip"] = json!(tooltip.html);
        properties["tooltipPermanent"] = json!(tooltip.permanent);
        properties["tooltipDirection"] = json!(tooltip.direction);
    }

    // GeoJSON orders coordinates longitude first
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [marker.longitude, marker.latitude],
        },
        "properties": properties,
    })
}

impl MapPanel for FeaturePanel {
    fn container_id(&self) -> &str {
        &self.id
    }

    fn add_tile_layer(&mut self, tiles: &TileLayer) {
        self.tile_layers.push(tiles.clone());
    }

    fn create_layer(&mut self) -> LayerId {
        self.next_layer += 1;
        let id = LayerId(self.next_layer);
        self.layers.insert(id, Vec::new());
        id
    }

    fn add_marker(&mut self, layer: LayerId, marker: CircleMarker) -> Result<()> {
        self.layers
            .get_mut(&layer)
            .ok_or_else(|| ProcessingError::Render(format!("{}: no layer {:?}", self.id, layer)))?
            .push(marker);
        Ok(())
    }

    fn remove_layer(&mut self, layer: LayerId) -> Result<()> {
        self.layers
            .remove(&layer)
            .map(|_| ())
            .ok_or_else(|| ProcessingError::Render(format!("{}: no layer {:?} to remove", self.id, layer)))
    }

    fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }
}

impl PanelState<FeaturePanel> {
    /// Markers on the live layer; empty before the first render
    pub fn live_markers(&self) -> &[CircleMarker] {
        self.current_layer()
            .and_then(|layer| self.panel().markers(layer))
            .unwrap_or(&[])
    }

    /// The live layer as a GeoJSON FeatureCollection
    pub fn to_geojson(&self) -> Value {
        collection(self.live_markers())
    }
}
