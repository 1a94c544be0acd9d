//! Skeleton Pointer command-line host

use clap::{Parser, Subcommand};
use skeleton_pointer::config::PipelineConfig;
use skeleton_pointer::pipeline::{spawn_sensor_source, FramePipeline, JsonLinesSource};
use skeleton_pointer::pointer::platform_sink;
use skeleton_pointer::replay::replay_file;
use std::path::PathBuf;

/// Drive the cursor from tracked skeleton hand joints
#[derive(Parser, Debug)]
#[command(name = "skeleton-pointer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read newline-delimited sensor events from stdin and drive the OS cursor
    Stream,

    /// Replay a recorded session and write the resulting pointer events
    Replay {
        /// Recorded sensor events (JSON array)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for pointer events
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the default configuration
    Defaults,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "skeleton_pointer=debug"
    } else {
        "skeleton_pointer=info"
    };
    skeleton_pointer::init_logging(default_filter);

    tracing::info!("Starting Skeleton Pointer v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };

    match cli.command {
        Commands::Stream => {
            let source = JsonLinesSource::stdin()?;
            let mut pipeline = FramePipeline::new(&config, platform_sink()?)?;
            let stats = pipeline.run(spawn_sensor_source(source));
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Replay { input, output } => {
            let summary = replay_file(&input, &output, &config)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Defaults => {
            println!("{}", PipelineConfig::default().to_json_pretty()?);
        }
    }

    Ok(())
}
