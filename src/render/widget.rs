use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_MAX_ZOOM, DEFAULT_TILE_OPACITY, DEFAULT_ZOOM,
    OPENTOPOMAP_ATTRIBUTION, OPENTOPOMAP_URL,
};

/// Handle to a removable group of markers on one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: (DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON),
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
    pub opacity: f64,
    pub max_zoom: u8,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url: OPENTOPOMAP_URL.to_string(),
            attribution: OPENTOPOMAP_ATTRIBUTION.to_string(),
            opacity: DEFAULT_TILE_OPACITY,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipDirection {
    Auto,
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub html: String,
    pub permanent: bool,
    pub direction: TooltipDirection,
}

/// A circle drawn at a geographic point, radius in metres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub tooltip: Option<Tooltip>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A static overlay positioned in a corner of the panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub position: ControlPosition,
    pub css_class: String,
    pub html: String,
}
