use crate::error::Result;
use crate::models::{TimeAxis, WeatherRecord, YearMonth};
use crate::processors::filter_records;
use crate::render::{MapPanel, PanelState};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A dataset and the panel it is drawn on
pub struct PanelBinding<P: MapPanel> {
    pub records: Arc<Vec<WeatherRecord>>,
    pub state: PanelState<P>,
}

impl<P: MapPanel> PanelBinding<P> {
    pub fn new(records: Arc<Vec<WeatherRecord>>, state: PanelState<P>) -> Self {
        Self { records, state }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelFrame {
    pub panel: String,
    pub markers: usize,
}

/// What one slider input produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSummary {
    pub slider: u32,
    pub year_month: YearMonth,
    pub label: String,
    pub panels: Vec<PanelFrame>,
}

impl FrameSummary {
    pub fn markers_on(&self, panel: &str) -> Option<usize> {
        self.panels.iter().find(|p| p.panel == panel).map(|p| p.markers)
    }
}

impl std::fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.label)?;
        for panel in &self.panels {
            write!(f, " {}={}", panel.panel, panel.markers)?;
        }
        Ok(())
    }
}

/// Drives every panel from a single slider.
///
/// Each input redraws every panel in full before returning, so a caller
/// feeding inputs one at a time never sees two frames interleave.
pub struct SliderController<P: MapPanel> {
    axis: TimeAxis,
    bindings: Vec<PanelBinding<P>>,
    slider: u32,
    date_display: String,
}

impl<P: MapPanel> SliderController<P> {
    /// Build the controller and draw slider position 0
    pub fn new(axis: TimeAxis, bindings: Vec<PanelBinding<P>>) -> Result<Self> {
        let mut controller = Self {
            axis,
            bindings,
            slider: 0,
            date_display: String::new(),
        };
        controller.on_input(0)?;
        Ok(controller)
    }

    pub fn on_input(&mut self, slider: u32) -> Result<FrameSummary> {
        let year_month = self.axis.year_month(slider);
        self.slider = slider;
        self.date_display = year_month.label();

        let mut panels = Vec::with_capacity(self.bindings.len());
        for binding in &mut self.bindings {
            let frame = filter_records(&binding.records, year_month);
            let markers = binding.state.render(&frame)?;
            panels.push(PanelFrame {
                panel: binding.state.id().to_string(),
                markers,
            });
        }

        debug!(slider, date = %self.date_display, "Slider input handled");

        Ok(FrameSummary {
            slider,
            year_month,
            label: self.date_display.clone(),
            panels,
        })
    }

    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    pub fn slider(&self) -> u32 {
        self.slider
    }

    /// Text of the date display, e.g. "January 2019"
    pub fn date_display(&self) -> &str {
        &self.date_display
    }

    pub fn bindings(&self) -> &[PanelBinding<P>] {
        &self.bindings
    }

    pub fn panel(&self, id: &str) -> Option<&PanelState<P>> {
        self.bindings
            .iter()
            .map(|b| &b.state)
            .find(|state| state.id() == id)
    }
}
