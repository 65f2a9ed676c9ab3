use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;

use calcshell::{CalcConfig, Session, Settings};

#[derive(Parser, Debug)]
#[command(name = "calcshell")]
#[command(about = "Stateful command-line calculator with memory and scientific functions")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Angle mode: degrees or radians
    #[arg(short, long)]
    mode: Option<String>,

    /// Decimal digits kept for trig and logarithm results (0-15)
    #[arg(short, long, allow_negative_numbers = true)]
    precision: Option<i64>,

    /// Reject non-numeric arguments instead of treating them as NaN
    #[arg(long)]
    strict: bool,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Echo each input line before its output
    #[arg(long)]
    echo: bool,
}

// Run from the root folder of the repo as follows:
// RUST_LOG=debug cargo run -- --mode radians --precision 4

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    calcshell::init_logger();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalcConfig::load(path)?,
        None => CalcConfig::default(),
    };
    if let Some(mode) = &cli.mode {
        config.angle_mode = mode.parse()?;
    }
    if let Some(precision) = cli.precision {
        config.precision = Settings::check_precision(precision)?;
    }
    if cli.strict {
        config.strict_numbers = true;
    }
    if cli.echo {
        config.echo = true;
    }

    let mut session = Session::new(config)?;
    let stdout = tokio::io::stdout();
    let summary = match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|e| format!("Failed to open script {}: {}", path.display(), e))?;
            session.run(BufReader::new(file), stdout).await?
        }
        None => session.run(BufReader::new(tokio::io::stdin()), stdout).await?,
    };

    log::info!(
        "processed {} commands ({} failed)",
        summary.commands_processed,
        summary.errors
    );
    Ok(())
}
