pub mod feature_panel;
pub mod legend;
pub mod marker;
pub mod panel_state;
pub mod widget;

pub use feature_panel::FeaturePanel;
pub use legend::{legend_entries, precipitation_legend, LegendEntry};
pub use marker::{marker_for, tooltip_html};
pub use panel_state::PanelState;
pub use widget::{
    CircleMarker, Control, ControlPosition, LayerId, MapView, TileLayer, Tooltip, TooltipDirection,
};

use crate::error::Result;

/// What the pipeline needs from a map widget.
///
/// Filtering and classification never touch a panel directly; they hand
/// markers to an implementation of this trait, so any backend (an in-memory
/// feature store, a browser bridge, a test double) can sit behind it.
pub trait MapPanel {
    /// Identifier of the container the panel is bound to
    fn container_id(&self) -> &str;

    fn add_tile_layer(&mut self, tiles: &TileLayer);

    /// Create an empty marker layer attached to the panel
    fn create_layer(&mut self) -> LayerId;

    fn add_marker(&mut self, layer: LayerId, marker: CircleMarker) -> Result<()>;

    /// Detach a layer and drop its markers
    fn remove_layer(&mut self, layer: LayerId) -> Result<()>;

    fn add_control(&mut self, control: Control);
}
