use poptrim_stats::{Population, TrimSpec};

pub fn print_run_summary(population: &Population, spec: TrimSpec, result: f64) {
    let ints = population.iter().filter(|o| o.is_int()).count();
    let floats = population.len() - ints;

    println!("\n📋 Population");
    println!("  • Size: {} [SIZE]", population.len());
    println!("  • Integers: {ints}, Floats: {floats}");

    let (lower, upper) = spec.fractions();
    let (lower_count, upper_count) = spec.counts(population.len());
    println!("\n✂️  Trim Configuration");
    match spec {
        TrimSpec::Symmetric(s) => {
            println!("  • Symmetric: {s} from each end [-t, --trim]");
        }
        TrimSpec::Asymmetric { .. } => {
            println!("  • Lower: {lower} [--lower], Upper: {upper} [--upper]");
        }
    }
    println!(
        "  • Discarding: {lower_count} low, {upper_count} high of {} values",
        population.len()
    );

    println!("\n📈 Result");
    println!("  • Trimmed mean: {result:.4}");
}
