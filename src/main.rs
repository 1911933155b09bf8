use pcm_file_sink::audio::{AudioEncoding, WavSink};
use pcm_file_sink::config::Config;
use pcm_file_sink::services::{PumpSummary, StreamPump};

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::AsyncRead;

/// Write raw 16-bit little-endian mono PCM from stdin or a file into a WAV file
#[derive(Parser)]
#[command(name = "pcm-file-sink")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/pcm-file-sink/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raw PCM input file (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output WAV path, overrides the config
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sample rate in Hz, overrides the config
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Declared input encoding, overrides the config
    #[arg(long, value_enum)]
    encoding: Option<AudioEncoding>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    let input: Box<dyn AsyncRead + Unpin + Send> = match &cli.input {
        Some(path) => Box::new(
            tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file: {:?}", path))?,
        ),
        None => Box::new(tokio::io::stdin()),
    };

    let sink = WavSink::create(&config.output_path, config.sampling_rate, config.audio_encoding)
        .with_context(|| format!("Failed to create WAV sink: {:?}", config.output_path))?;

    let pump = StreamPump::new(input, sink, config.chunk_bytes());

    let summary = pump.run_until(shutdown_signal()).await?;
    tracing::info!(
        "Wrote {} frames to {:?}",
        summary.frames_written,
        config.output_path
    );

    if must_exit_process(&summary, cli.input.is_none()) {
        std::process::exit(0);
    }

    Ok(())
}

/// Whether to skip runtime shutdown after an interrupted run.
///
/// tokio's stdin read runs on a blocking thread that cannot be cancelled, so
/// runtime shutdown would wait for the producer to write or close. The sink
/// has already been terminated by then.
fn must_exit_process(summary: &PumpSummary, reading_stdin: bool) -> bool {
    summary.interrupted && reading_stdin
}

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
    if let Some(rate) = cli.sample_rate {
        config.sampling_rate = rate;
    }
    if let Some(encoding) = cli.encoding {
        config.audio_encoding = encoding;
    }
}
