mod logging;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use sluice_core::{AppBuilder, BatchSpec, RequestHandler};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "sluice",
    version,
    about = "Run a batch of acquire/transform tasks concurrently"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Invoke the handler once and print the response envelope
    Run {
        /// Path to a JSON batch definition (default: built-in sample batch)
        #[arg(long, env = "SLUICE_TASKS")]
        tasks: Option<PathBuf>,
        /// Request payload passed to the handler, as JSON
        #[arg(long, default_value = "{}")]
        event: String,
    },
    /// Print the batch definition that `run` would use
    Tasks {
        /// Path to a JSON batch definition (default: built-in sample batch)
        #[arg(long, env = "SLUICE_TASKS")]
        tasks: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    match cli.command {
        Commands::Run { tasks, event } => run(tasks.as_deref(), &event).await,
        Commands::Tasks { tasks } => {
            let batch = load_batch(tasks.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&batch)?);
            Ok(())
        }
    }
}

fn load_batch(path: Option<&Path>) -> anyhow::Result<BatchSpec> {
    let Some(path) = path else {
        return Ok(BatchSpec::sample());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch definition {}", path.display()))?;
    let batch = BatchSpec::from_json_str(&json)
        .with_context(|| format!("invalid batch definition {}", path.display()))?;
    info!(path = %path.display(), tasks = batch.len(), "loaded batch definition");
    Ok(batch)
}

async fn run(tasks: Option<&Path>, event: &str) -> anyhow::Result<()> {
    let batch = load_batch(tasks)?;
    let request: serde_json::Value =
        serde_json::from_str(event).context("--event is not valid JSON")?;
    let handler = AppBuilder::new().batch(batch).build()?;

    let started = Instant::now();
    let envelope = handler.handle(&request).await;
    let elapsed = started.elapsed();

    let duration_ms = elapsed.as_secs_f64() * 1000.0;
    let billed_ms = duration_ms.ceil() as u64;

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    println!("--------------------");
    let body = envelope.body_json().context("response body is not JSON")?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    println!("--------------------");
    println!("Execution time: {duration_ms:.3} ms (billed: {billed_ms} ms)");

    if envelope.status_code != 200 {
        bail!("handler returned status {}", envelope.status_code);
    }
    Ok(())
}
