//! Nimbus CLI - decode weather-satellite audio recordings into images.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nimbus")]
#[command(author, version, about = "Weather-satellite audio decoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a recording into channel images and histograms
    Decode(commands::decode::DecodeArgs),

    /// Display WAV file information
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(args) => commands::decode::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
