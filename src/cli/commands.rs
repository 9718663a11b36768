use crate::cli::args::{Cli, Commands, DashboardArgs};
use crate::error::{ProcessingError, Result};
use crate::pipeline::Dashboard;
use crate::utils::filename::generate_default_export_dir;
use crate::utils::progress::ProgressReporter;
use crate::writers::GeoJsonWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn, Level};

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Render {
            dashboard,
            slider,
            output_dir,
            pretty,
        } => {
            let mut dashboard = load_dashboard(&dashboard).await?;
            let frame = dashboard.controller_mut().on_input(slider)?;
            println!("{}", frame);

            let output_dir = output_dir.unwrap_or_else(generate_default_export_dir);
            let writer = GeoJsonWriter::new(&output_dir).with_pretty(pretty);
            for path in writer.write_frame(dashboard.controller())? {
                println!("Wrote {}", path.display());
            }
        }

        Commands::Export {
            dashboard,
            output_dir,
            pretty,
        } => {
            let mut dashboard = load_dashboard(&dashboard).await?;

            let Some(range) = dashboard.slider_range() else {
                println!("No records to export");
                return Ok(());
            };

            let output_dir = output_dir.unwrap_or_else(generate_default_export_dir);
            println!("Exporting slider positions {:?} to {}", range, output_dir.display());

            let writer = GeoJsonWriter::new(&output_dir).with_pretty(pretty);
            let total = u64::from(range.end() - range.start()) + 1;
            let progress = ProgressReporter::new(total, "Rendering frames...");

            let mut frames = Vec::with_capacity(total as usize);
            for slider in range {
                let frame = dashboard.controller_mut().on_input(slider)?;
                progress.set_message(&frame.label);
                writer.write_frame(dashboard.controller())?;
                frames.push(frame);
                progress.increment(1);
            }
            progress.finish_with_message(&format!("Rendered {} frames", frames.len()));

            let manifest = writer.write_manifest(dashboard.config(), &frames)?;
            info!(frames = frames.len(), "Export complete");
            println!("Manifest: {}", manifest.display());
        }

        Commands::Scrub {
            dashboard,
            output_dir,
        } => {
            let mut dashboard = load_dashboard(&dashboard).await?;
            let writer = output_dir.as_deref().map(GeoJsonWriter::new);

            println!("{}", dashboard.controller().date_display());
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }

                let Some(slider) = parse_slider_line(&line) else {
                    warn!("Ignoring slider input '{}'", line.trim());
                    eprintln!("Not a slider position: '{}'", line.trim());
                    continue;
                };

                let frame = dashboard.controller_mut().on_input(slider)?;
                println!("{}", frame);
                if let Some(writer) = &writer {
                    writer.write_frame(dashboard.controller())?;
                }
            }
        }

        Commands::Validate { dashboard } => {
            let dashboard = load_dashboard(&dashboard).await?;

            let mut rejected = 0;
            for report in dashboard.reports() {
                println!("{}", report.summary());
                rejected += report.rejected_rows();
            }

            if rejected == 0 {
                println!("✅ All rows passed validation");
            } else {
                println!("⚠️  Found {} invalid rows", rejected);
            }
        }

        Commands::Info { dashboard } => {
            let dashboard = load_dashboard(&dashboard).await?;

            println!("Time axis: {:?}", dashboard.config().time_axis);
            for (panel, coverage) in dashboard.panel_coverage() {
                match coverage {
                    Some(coverage) => println!("{}: {}", panel, coverage.summary()),
                    None => println!("{}: no records", panel),
                }
            }

            match dashboard.slider_range() {
                Some(range) => println!(
                    "Slider range: {}..={} ({} to {})",
                    range.start(),
                    range.end(),
                    dashboard.config().time_axis.year_month(*range.start()).label(),
                    dashboard.config().time_axis.year_month(*range.end()).label()
                ),
                None => println!("Slider range: none"),
            }
        }
    }

    Ok(())
}

/// Slider position typed on one line of `scrub` input
pub fn parse_slider_line(line: &str) -> Option<u32> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }
    input.parse::<u32>().ok()
}

async fn load_dashboard(args: &DashboardArgs) -> Result<Dashboard> {
    let config = args.dashboard_config()?;
    info!(
        panels = config.panels.len(),
        data_dir = %args.data_dir.display(),
        "Loading dashboard"
    );
    Dashboard::load(config, &args.data_dir, args.strict).await
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let initialised = match log_file {
        Some(path) => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    initialised.map_err(|e| ProcessingError::Config(format!("Failed to initialise logging: {}", e)))
}
