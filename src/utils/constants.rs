/// Data sources used by the presets
pub const ORIGINAL_2019_FILE: &str = "Original2019.csv";
pub const PREDICTED_2019_FILE: &str = "Predicted2019.csv";
pub const WASHINGTON_WEATHER_FILE: &str = "WashingtonWeather.csv";

/// Panel container ids
pub const ACTUAL_PANEL_ID: &str = "actual-map";
pub const PREDICTED_PANEL_ID: &str = "predicted-map";
pub const TIMELAPSE_PANEL_ID: &str = "map";

/// Initial map view, centred on Washington State
pub const DEFAULT_CENTER_LAT: f64 = 47.7511;
pub const DEFAULT_CENTER_LON: f64 = -120.7401;
pub const DEFAULT_ZOOM: u8 = 7;

/// Base tile layer
pub const OPENTOPOMAP_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
pub const OPENTOPOMAP_ATTRIBUTION: &str = "© OpenStreetMap contributors, © OpenTopoMap";
pub const DEFAULT_TILE_OPACITY: f64 = 0.7;
pub const DEFAULT_MAX_ZOOM: u8 = 17;

/// Marker styling
pub const MARKER_RADIUS_METRES: f64 = 5000.0;
pub const MARKER_FILL_OPACITY: f64 = 0.7;

/// Legend control
pub const LEGEND_CSS_CLASS: &str = "info legend";

/// Plausible observation years; anything outside is a malformed YEAR
pub const MIN_VALID_YEAR: i32 = 1800;
pub const MAX_VALID_YEAR: i32 = 2200;

/// Processing defaults
pub const PARALLEL_FILTER_THRESHOLD: usize = 50_000;

/// Environment prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "WEATHER_MAP";

/// Output files
pub const MANIFEST_FILE: &str = "manifest.json";
