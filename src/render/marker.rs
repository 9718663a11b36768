use crate::models::{ColorScale, WeatherRecord};
use crate::render::widget::{CircleMarker, Tooltip, TooltipDirection};
use crate::utils::constants::{MARKER_FILL_OPACITY, MARKER_RADIUS_METRES};

/// Build the marker for one observation, or None when its precipitation has no bucket
pub fn marker_for(record: &WeatherRecord, scale: &ColorScale) -> Option<CircleMarker> {
    let color = scale.classify(record.precipitation)?.color().to_string();

    Some(CircleMarker {
        latitude: record.latitude,
        longitude: record.longitude,
        radius: MARKER_RADIUS_METRES,
        fill_color: color.clone(),
        color,
        fill_opacity: MARKER_FILL_OPACITY,
        tooltip: Some(Tooltip {
            html: tooltip_html(record),
            permanent: false,
            direction: TooltipDirection::Auto,
        }),
    })
}

pub fn tooltip_html(record: &WeatherRecord) -> String {
    format!(
        "<strong>Coordinates:</strong> {}, {}<br>\n\
         <strong>Elevation:</strong> {} m<br>\n\
         <strong>Temperature:</strong> {} °C<br>\n\
         <strong>USAF Station:</strong> {}",
        record.latitude,
        record.longitude,
        record.elevation,
        record.temperature,
        escape_html(&record.station_id)
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
