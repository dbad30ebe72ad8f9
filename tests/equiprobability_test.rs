//! Statistical property: Gaussian-quantile binning of standard-normal data
//! produces approximately uniform symbol frequencies. Inputs come from a
//! deterministic generator so the test is exactly repeatable.

use std::collections::HashMap;

use sax_rs::{SaxConfig, SaxEngine, Series};

/// Deterministic standard-normal generator: 64-bit LCG driving Box-Muller.
struct NormalSource {
    state: u64,
}

impl NormalSource {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Uniform draw in (0, 1), never exactly 0 or 1.
    fn uniform(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.state >> 11) as f64 + 0.5) / (1u64 << 53) as f64
    }

    fn normal(&mut self) -> f64 {
        let u1 = self.uniform();
        let u2 = self.uniform();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

#[test]
fn test_symbol_frequencies_approximately_uniform() {
    // window_size == n_segments keeps PAA an identity, so the binner sees
    // the standardized draws themselves and quartile cuts should give each
    // of the 4 symbols roughly a quarter of the mass.
    let window = 16;
    let n_windows = 500;
    let config = SaxConfig::new(window, window, 4);
    let engine = SaxEngine::new(config).unwrap();

    let mut source = NormalSource::new(0x5ab5_ca1e);
    let closes: Vec<f64> = (0..window * n_windows).map(|_| source.normal()).collect();
    let words = engine.encode(&Series::from_closes(closes));
    assert_eq!(words.len(), n_windows);

    let mut counts: HashMap<char, usize> = HashMap::new();
    for word in &words {
        for c in word.word.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }

    let total = (window * n_windows) as f64;
    for symbol in ['a', 'b', 'c', 'd'] {
        let freq = *counts.get(&symbol).unwrap_or(&0) as f64 / total;
        assert!(
            (freq - 0.25).abs() < 0.05,
            "Symbol '{symbol}' frequency {freq:.4} deviates from 0.25 by more than 0.05"
        );
    }
}

#[test]
fn test_no_symbol_outside_alphabet() {
    let window = 16;
    let config = SaxConfig::new(window, 8, 6);
    let engine = SaxEngine::new(config).unwrap();

    let mut source = NormalSource::new(42);
    let closes: Vec<f64> = (0..window * 200).map(|_| source.normal()).collect();
    let words = engine.encode(&Series::from_closes(closes));

    for word in &words {
        assert_eq!(word.word.len(), 8);
        for c in word.word.chars() {
            assert!(
                ('a'..='f').contains(&c),
                "Symbol {c:?} outside the 6-letter alphabet in {:?}",
                word.word
            );
        }
    }
}
