use poptrim_stats::{Observation, Population};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generate a population of mixed integer and float observations.
///
/// Each element is, with equal probability, an integer drawn uniformly
/// from `[0, 100)` or a float drawn uniformly from `[0.0, 100.0)`. The
/// same seed and size always produce the same population.
pub fn generate_population(size: usize, seed: u64) -> Population {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (0..size)
        .map(|_| {
            if rng.random_bool(0.5) {
                Observation::Int(rng.random_range(0..100))
            } else {
                Observation::Float(rng.random::<f64>() * 100.0)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_population(100, 42);
        let b = generate_population(100, 42);
        assert_eq!(a, b);

        let c = generate_population(100, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_requested_size() {
        assert_eq!(generate_population(0, 42).len(), 0);
        assert_eq!(generate_population(200, 42).len(), 200);
    }

    #[test]
    fn test_values_are_in_range() {
        let population = generate_population(500, 1);
        for observation in &population {
            let value = observation.as_f64();
            assert!((0.0..100.0).contains(&value));
        }
    }

    #[test]
    fn test_mixes_ints_and_floats() {
        let population = generate_population(500, 42);
        let ints = population.iter().filter(|o| o.is_int()).count();
        let floats = population.iter().filter(|o| o.is_float()).count();
        assert!(ints > 0);
        assert!(floats > 0);
    }
}
