use anyhow::{Context, Result};
use poptrim_stats::{Population, TrimSpec};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append the population and computed result to the run log.
///
/// The population is written comma-separated so the run can be re-fed to
/// an external trimmed-mean calculator for cross-checking.
pub fn append_log(
    path: &Path,
    population: &Population,
    spec: TrimSpec,
    result: f64,
) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    writeln!(file, "Population: {population}")?;
    writeln!(file, "Population size: {}", population.len())?;
    match spec {
        TrimSpec::Symmetric(s) => {
            writeln!(file, "Trimmed mean ({}%): {result:.4}", s * 100.0)?;
        }
        TrimSpec::Asymmetric { lower, upper } => {
            writeln!(
                file,
                "Trimmed mean ({}% lower, {}% upper): {result:.4}",
                lower * 100.0,
                upper * 100.0
            )?;
        }
    }

    Ok(())
}

/// Write the population and result out as CSV or JSON.
pub fn export_results(
    population: &Population,
    spec: TrimSpec,
    result: f64,
    format: &str,
    output: &Path,
) -> Result<()> {
    let (lower, upper) = spec.fractions();

    let content = match format {
        "csv" => {
            let mut content = String::new();
            content.push_str("index,kind,value\n");
            for (i, observation) in population.iter().enumerate() {
                let kind = if observation.is_int() { "int" } else { "float" };
                content.push_str(&format!("{i},{kind},{observation}\n"));
            }
            content.push_str(&format!("trimmed_mean,,{result}\n"));
            content
        }
        "json" => {
            let data = serde_json::json!({
                "population": population,
                "trim": { "lower": lower, "upper": upper },
                "trimmed_mean": result,
            });
            serde_json::to_string_pretty(&data).context("Failed to serialize results")?
        }
        _ => anyhow::bail!("Unknown export format '{format}'. Use: csv or json"),
    };

    fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}
