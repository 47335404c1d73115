mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ld2450")]
#[command(about = "LD2450 radar frame-stream tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a recorded capture and recover target frames
    Scan {
        /// Input capture file to scan
        #[arg(short, long)]
        input: String,

        /// Output JSON file for recovered frames
        #[arg(short, long)]
        output: Option<String>,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,
    },

    /// Replay a capture through the streaming decoder
    Decode {
        /// Input capture file to replay
        #[arg(short, long)]
        input: String,

        /// Bytes released to the decoder per poll
        #[arg(long, default_value = "64")]
        chunk: usize,
    },

    /// Build a capture file from JSON target frames
    Synth {
        /// Input JSON file: an array of frames, each an array of [x, y, speed]
        #[arg(short, long)]
        input: String,

        /// Output capture file
        #[arg(short, long)]
        output: String,

        /// Random junk bytes inserted before each frame
        #[arg(long, default_value = "0")]
        junk: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Scan {
            input,
            output,
            stats_only,
        } => commands::scan::execute(&input, output.as_deref(), stats_only),

        Commands::Decode { input, chunk } => commands::decode::execute(&input, chunk),

        Commands::Synth {
            input,
            output,
            junk,
        } => commands::synth::execute(&input, &output, junk),
    }
}
