use std::path::{Path, PathBuf};

use clap::Parser;
use pd_core::units::pa_to_kpa;
use pd_network::BuildError;
use pd_report::{ReportError, Summary};
use pd_spec::SpecError;
use tracing::info;

#[derive(Parser)]
#[command(name = "pd-cli")]
#[command(about = "Serial flow-network pressure-drop calculator", long_about = None)]
struct Cli {
    /// Path to the input network specification (YAML, or JSON by extension)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output CSV summary
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let spec = load_spec(&cli.input)?;
    info!(network = %spec.name, path = %cli.input.display(), "loaded specification");

    let network = pd_network::build_network(&spec)?;
    let summary = Summary::from_network(&network);
    pd_report::write_csv(&summary, &cli.output)?;

    println!(
        "✓ Wrote summary for network '{}' ({} elements) to {}",
        network.name(),
        network.len(),
        cli.output.display()
    );
    if let Some(pressure) = network.final_pressure() {
        println!("  Final outlet pressure: {:.3} kPa", pa_to_kpa(pressure));
    }

    Ok(())
}

fn load_spec(path: &Path) -> Result<pd_spec::NetworkSpec, SpecError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => pd_spec::load_json(path),
        _ => pd_spec::load_yaml(path),
    }
}
