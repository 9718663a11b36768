use crate::models::Severity;
use crate::render::widget::{Control, ControlPosition};
use crate::utils::constants::LEGEND_CSS_CLASS;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn legend_entries() -> Vec<LegendEntry> {
    Severity::ALL
        .iter()
        .map(|s| LegendEntry {
            label: s.label(),
            color: s.color(),
        })
        .collect()
}

/// The bottom-right precipitation key, one swatch and label per bucket
pub fn precipitation_legend() -> Control {
    let html: String = legend_entries()
        .iter()
        .map(|entry| {
            format!(
                "<i style=\"background:{color}\"></i> <span style=\"color:{color}\">{label}</span><br>",
                color = entry.color,
                label = entry.label
            )
        })
        .collect();

    Control {
        position: ControlPosition::BottomRight,
        css_class: LEGEND_CSS_CLASS.to_string(),
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_lists_three_buckets_in_order() {
        let legend = precipitation_legend();

        assert_eq!(legend.position, ControlPosition::BottomRight);
        assert_eq!(legend.css_class, "info legend");
        assert_eq!(legend.html.matches("<br>").count(), 3);

        let low = legend.html.find("Low Precipitation").unwrap();
        let medium = legend.html.find("Medium Precipitation").unwrap();
        let high = legend.html.find("High Precipitation").unwrap();
        assert!(low < medium && medium < high);
        assert!(legend
            .html
            .starts_with("<i style=\"background:#008000\"></i> <span style=\"color:#008000\">"));
    }
}
