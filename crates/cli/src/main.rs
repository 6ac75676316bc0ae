mod export;
mod generate;
mod printing;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use poptrim_stats::{trimmed_mean, Population, TrimSpec};

/// Poptrim: a trimmed-mean calculator for numeric populations
///
/// Generates (or ingests) a population of mixed integers and floats and
/// reports its trimmed mean, discarding a configurable fraction of the
/// smallest and largest values.
#[derive(Parser, Debug)]
#[command(name = "poptrim")]
#[command(author, version, about = "Computes trimmed means over numeric populations", long_about = None)]
struct Cli {
    /// Population size
    ///
    /// Ignored when --input is given.
    #[arg(default_value = "200")]
    size: usize,

    /// Random seed for population generation
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Symmetric trim fraction, applied to both ends
    #[arg(short, long, default_value = "0.05", conflicts_with_all = ["lower", "upper"])]
    trim: f64,

    /// Lower trim fraction for asymmetric trimming
    #[arg(long, requires = "upper")]
    lower: Option<f64>,

    /// Upper trim fraction for asymmetric trimming
    #[arg(long, requires = "lower")]
    upper: Option<f64>,

    /// Read the population from a comma- or whitespace-separated text file
    /// instead of generating one
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Append the population and results to this log file
    ///
    /// The population is logged comma-separated so it can be fed to an
    /// external calculator for cross-checking.
    #[arg(long, default_value = "trimmedmean.log")]
    log: PathBuf,

    /// Export format (csv, json)
    #[arg(long, requires = "output")]
    export: Option<String>,

    /// Export output file
    #[arg(short, long, requires = "export")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("📊 Poptrim - Trimmed Mean Calculator");
    println!("============================================\n");

    let population = match &cli.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read population from {}", path.display()))?;
            let population: Population = text
                .parse()
                .with_context(|| format!("Failed to parse population in {}", path.display()))?;
            println!(
                "📂 Loaded {} values from {}",
                population.len(),
                path.display()
            );
            population
        }
        None => {
            let population = generate::generate_population(cli.size, cli.seed);
            println!(
                "🎲 Generated {} values (seed {})",
                population.len(),
                cli.seed
            );
            population
        }
    };

    let spec = match (cli.lower, cli.upper) {
        (Some(lower), Some(upper)) => TrimSpec::Asymmetric { lower, upper },
        _ => TrimSpec::Symmetric(cli.trim),
    };

    let result = trimmed_mean(&population, spec).context("Failed to compute trimmed mean")?;

    printing::print_run_summary(&population, spec, result);

    export::append_log(&cli.log, &population, spec, result)
        .with_context(|| format!("Failed to write log to {}", cli.log.display()))?;

    if let (Some(format), Some(output)) = (&cli.export, &cli.output) {
        export::export_results(&population, spec, result, format, output)?;
        println!("\n✓ Results exported to: {}", output.display());
    }

    Ok(())
}
