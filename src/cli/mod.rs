pub mod args;
pub mod commands;

pub use args::{Cli, Commands, DashboardArgs, Preset};
pub use commands::{parse_slider_line, run};
