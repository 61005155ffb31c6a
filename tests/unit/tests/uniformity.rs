//! Frequency checks for the sampling used by the generators.
use anyhow::Result;
use passgen_password::{
    MemorablePasswordGenerator, PasswordGenerator, PinCodeGenerator,
};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;

const SAMPLES: usize = 100_000;

fn assert_uniform(counts: &HashMap<String, usize>, k: usize, total: usize) {
    assert_eq!(k, counts.len());
    let expected = 1.0 / k as f64;
    for (value, count) in counts {
        let observed = *count as f64 / total as f64;
        assert!(
            (observed - expected).abs() < expected * 0.1,
            "{} observed {} expected {}",
            value,
            observed,
            expected
        );
    }
}

#[test]
fn uniform_pin_digits() -> Result<()> {
    let generator = PinCodeGenerator::new(SAMPLES as i64)?;
    let mut rng = StdRng::seed_from_u64(2024);
    let pin = generator.generate_with(&mut rng);
    let mut counts = HashMap::new();
    for c in pin.chars() {
        *counts.entry(c.to_string()).or_insert(0) += 1;
    }
    assert_uniform(&counts, 10, SAMPLES);
    Ok(())
}

#[test]
fn uniform_memorable_words() -> Result<()> {
    let words: Vec<String> =
        ["north", "south", "east", "west"].iter().map(|s| s.to_string()).collect();
    let generator = MemorablePasswordGenerator::new(1, words)?;
    let mut rng = StdRng::seed_from_u64(7);
    let mut counts = HashMap::new();
    for _ in 0..SAMPLES / 10 {
        *counts.entry(generator.generate_with(&mut rng)).or_insert(0) += 1;
    }
    assert_uniform(&counts, 4, SAMPLES / 10);
    Ok(())
}
