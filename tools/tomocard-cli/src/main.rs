//! Tomocard CLI: Command-line interface for ID-card export.
//!
//! Usage:
//!   tomocard export <ROSTER> [OPTIONS]   Batch-export a roster to PNG or PDF
//!   tomocard render <ROSTER> <KEY>       Render one employee's card to PNG
//!   tomocard info <ROSTER>               Show roster information
//!   tomocard check                       Check rendering prerequisites

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "tomocard",
    about = "Employee ID-card rendering and batch export",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Batch-export every employee in a roster
    Export {
        /// Path to the roster JSON file
        roster: PathBuf,

        /// Output mode: png, pdf, pdf-each
        #[arg(short, long, default_value = "png")]
        mode: String,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Card template: full, compact
        #[arg(short, long, default_value = "full")]
        template: String,

        /// Base URL for QR-encoded profile links
        #[arg(long)]
        base_url: Option<String>,

        /// Raster scale factor
        #[arg(long)]
        scale: Option<u32>,

        /// Settle delay before each capture (ms)
        #[arg(long)]
        settle_ms: Option<u64>,

        /// Delay between front and back captures (ms)
        #[arg(long)]
        side_delay_ms: Option<u64>,

        /// Delay between employees (ms)
        #[arg(long)]
        employee_delay_ms: Option<u64>,

        /// Directory holding local photos and the remote-photo cache
        #[arg(long)]
        photo_dir: Option<PathBuf>,

        /// Refuse to capture cards embedding remote-origin photos
        #[arg(long)]
        same_origin: bool,
    },

    /// Render a single employee's card faces to PNG
    Render {
        /// Path to the roster JSON file
        roster: PathBuf,

        /// Employee id or printed employee number
        key: String,

        /// Card side: front, back, both
        #[arg(short, long, default_value = "both")]
        side: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Card template: full, compact
        #[arg(short, long, default_value = "full")]
        template: String,

        /// Base URL for QR-encoded profile links
        #[arg(long)]
        base_url: Option<String>,

        /// Raster scale factor
        #[arg(long)]
        scale: Option<u32>,

        /// Directory holding local photos and the remote-photo cache
        #[arg(long)]
        photo_dir: Option<PathBuf>,
    },

    /// Show roster information
    Info {
        /// Path to the roster JSON file
        roster: PathBuf,
    },

    /// Check rendering prerequisites
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tomocard_common::logging::init_logging(&tomocard_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Export {
            roster,
            mode,
            output,
            template,
            base_url,
            scale,
            settle_ms,
            side_delay_ms,
            employee_delay_ms,
            photo_dir,
            same_origin,
        } => {
            commands::export::run(
                roster,
                mode,
                output,
                template,
                base_url,
                scale,
                settle_ms,
                side_delay_ms,
                employee_delay_ms,
                photo_dir,
                same_origin,
            )
            .await
        }
        Commands::Render {
            roster,
            key,
            side,
            output,
            template,
            base_url,
            scale,
            photo_dir,
        } => commands::render::run(roster, key, side, output, template, base_url, scale, photo_dir),
        Commands::Info { roster } => commands::info::run(roster),
        Commands::Check => commands::check::run(),
    }
}
