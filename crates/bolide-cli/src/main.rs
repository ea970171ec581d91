use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bolide_cli::output::{self, OutputFormat};
use bolide_lib::ImpactReport;

#[derive(Parser, Debug)]
#[command(version, about = "Asteroid impact kinetic-energy report")]
struct Cli {
    /// Output format for the report.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let report = ImpactReport::compute().context("failed to compute the impact energy report")?;

    match cli.format {
        OutputFormat::Text => output::render_text(&report),
        OutputFormat::Json => {
            output::render_json(&report).context("failed to write the JSON report")?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
