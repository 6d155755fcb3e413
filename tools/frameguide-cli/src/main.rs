//! Frameguide CLI: command-line interface for alignment guidance and capture geometry.
//!
//! Usage:
//!   frameguide evaluate <FILE>    Evaluate a JSONL pose-frame stream against a guide
//!   frameguide plan               Plan the crop for a capture
//!   frameguide mask               Compute the preview ratio mask for a container
//!   frameguide overlay <FILE>     List the skeleton overlay for each pose frame
//!   frameguide countdown          Show the self-timer countdown
//!   frameguide level              Read the bubble level from device orientation
//!   frameguide guide              Show guide silhouettes and alignment bands
//!   frameguide config             Show or initialize the configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use frameguide_common::config::AppConfig;
use frameguide_pose_model::{AspectRatio, CameraFacing, GuideMode, SelfTimer};

mod commands;
mod feedback;

#[derive(Parser)]
#[command(
    name = "frameguide",
    about = "Pose-guided photo framing and capture cropping",
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
    /// Evaluate a pose-frame stream (JSONL) and print alignment feedback
    Evaluate {
        /// Path to the JSONL pose frames, or `-` for stdin
        input: PathBuf,

        /// Guide mode: none|portrait|couple|group (defaults to config)
        #[arg(short, long)]
        guide: Option<GuideMode>,

        /// Maximum evaluations per second (0 = every frame; defaults to config)
        #[arg(long)]
        rate_hz: Option<u32>,

        /// Minimum shoulder visibility (evaluator default if omitted)
        #[arg(long)]
        visibility_threshold: Option<f64>,

        /// Maximum shoulder height difference to count as level (evaluator default if omitted)
        #[arg(long)]
        level_tolerance: Option<f64>,

        /// Maximum distance of the shoulder center from the midline (evaluator default if omitted)
        #[arg(long)]
        center_tolerance: Option<f64>,

        /// Shoulder height above which the subject is told to move down (evaluator default if omitted)
        #[arg(long)]
        vertical_split: Option<f64>,

        /// Print one JSON verdict per line instead of text
        #[arg(long)]
        json: bool,
    },

    /// Plan the crop rectangle and draw transform for a capture
    Plan {
        /// Source frame width in pixels
        #[arg(long)]
        width: u32,

        /// Source frame height in pixels
        #[arg(long)]
        height: u32,

        /// Target ratio, e.g. 3:4, 9:16, 1:1 or full (defaults to config)
        #[arg(short, long)]
        ratio: Option<AspectRatio>,

        /// Camera facing: environment|user (defaults to config)
        #[arg(long)]
        facing: Option<CameraFacing>,

        /// Force a mirrored capture regardless of facing
        #[arg(long)]
        mirror: bool,
    },

    /// Compute the preview mask bars for a container
    Mask {
        /// Container width
        #[arg(long)]
        width: f64,

        /// Container height
        #[arg(long)]
        height: f64,

        /// Target ratio (defaults to config)
        #[arg(short, long)]
        ratio: Option<AspectRatio>,
    },

    /// List the skeleton overlay (pixel coordinates) for each pose frame
    Overlay {
        /// Path to the JSONL pose frames, or `-` for stdin
        input: PathBuf,

        /// Overlay canvas width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Overlay canvas height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
    },

    /// Show the self-timer countdown before a capture
    Countdown {
        /// Self-timer: off|3|5|10 (defaults to config)
        #[arg(short, long)]
        timer: Option<SelfTimer>,
    },

    /// Read the bubble level from device orientation angles
    Level {
        /// Front-to-back tilt in degrees
        #[arg(long, allow_negative_numbers = true)]
        beta: Option<f64>,

        /// Left-to-right tilt in degrees
        #[arg(long, allow_negative_numbers = true)]
        gamma: Option<f64>,
    },

    /// Show guide silhouettes and alignment bands
    Guide {
        /// Only show this guide
        mode: Option<GuideMode>,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration to the standard location
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    frameguide_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Evaluate {
            input,
            guide,
            rate_hz,
            visibility_threshold,
            level_tolerance,
            center_tolerance,
            vertical_split,
            json,
        } => {
            let alignment = commands::resolve_alignment(
                visibility_threshold,
                level_tolerance,
                center_tolerance,
                vertical_split,
            );
            commands::evaluate::run(
                input,
                commands::resolve_guide(guide, &config)?,
                rate_hz.unwrap_or(config.capture.pose_rate_hz),
                alignment,
                json,
            )
        }
        Commands::Plan {
            width,
            height,
            ratio,
            facing,
            mirror,
        } => {
            let facing = commands::resolve_facing(facing, &config)?;
            commands::plan::run(
                width,
                height,
                commands::resolve_ratio(ratio, &config)?,
                mirror || facing.mirrors(),
            )
        }
        Commands::Mask {
            width,
            height,
            ratio,
        } => commands::mask::run(width, height, commands::resolve_ratio(ratio, &config)?),
        Commands::Overlay {
            input,
            width,
            height,
        } => commands::overlay::run(input, width, height),
        Commands::Countdown { timer } => {
            commands::countdown::run(commands::resolve_timer(timer, &config)?)
        }
        Commands::Level { beta, gamma } => commands::level::run(beta, gamma),
        Commands::Guide { mode } => commands::guide::run(mode),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
