//! Scan a daily price series for a symbolic SAX pattern.
//!
//! Usage:
//!   cargo run --bin sax_scan -- --pattern ccd --window 12 --segments 3 --bins 4
//!   STOCK_API_URL=... STOCK_API_KEY=... cargo run --bin sax_scan -- --symbol SPY
//!
//! Without the STOCK_API_URL/STOCK_API_KEY environment variables a
//! deterministic synthetic price path is analyzed instead of live data.

use sax_rs::{DailyCloseClient, FetchConfig, SaxConfig, SaxEngine, Series};

fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Synthetic daily closes: a slow cycle with a drift and two embedded
/// steady 12-day ramps, so the default pattern has something to find.
fn synthetic_series(n: usize) -> Series {
    let mut closes = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64;
        let mut price = 100.0 + (t * std::f64::consts::TAU / 90.0).sin() * 6.0 + t * 0.02;
        price += ((t * 3.7).sin() * (t * 1.3).cos()) * 0.4;
        closes.push(price);
    }
    // Embedded ramps: strictly rising 12-day stretches
    for (offset, base) in [(36, 98.0), (180, 104.0)] {
        for j in 0..12 {
            if offset + j < n {
                closes[offset + j] = base + j as f64;
            }
        }
    }
    Series::from_closes(closes)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let pattern = flag_value(&args, "--pattern").unwrap_or_else(|| "abd".to_string());
    let window: usize = flag_value(&args, "--window")
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);
    let segments: usize = flag_value(&args, "--segments")
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let bins: usize = flag_value(&args, "--bins")
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);
    let symbol = flag_value(&args, "--symbol");

    let engine = match SaxEngine::new(SaxConfig::new(window, segments, bins)) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let (series, source) = match (
        symbol.as_deref(),
        std::env::var("STOCK_API_URL"),
        std::env::var("STOCK_API_KEY"),
    ) {
        (Some(symbol), Ok(url), Ok(key)) => {
            let client = match DailyCloseClient::new(FetchConfig::new(url, key)) {
                Ok(client) => client,
                Err(err) => {
                    eprintln!("Failed to build fetch client: {err}");
                    std::process::exit(1);
                }
            };
            match client.daily_closes(symbol) {
                Ok(series) => (series, format!("{symbol} (remote)")),
                Err(err) => {
                    eprintln!("Could not fetch {symbol}: {err}");
                    std::process::exit(1);
                }
            }
        }
        _ => (synthetic_series(240), "synthetic".to_string()),
    };

    println!("=== SAX Pattern Scan ===");
    println!("Source: {source}");
    println!("Observations: {}", series.len());
    println!("Window: {window} days, {segments} segments, {bins}-letter alphabet");
    println!("Target pattern: {pattern:?}");
    println!();

    let words = engine.encode(&series);
    println!("Encoded {} windows:", words.len());
    for w in &words {
        println!("  day {:>4}  {}", w.day, w.word);
    }
    println!();

    match engine.find_pattern(&words, &pattern) {
        Ok(matches) if matches.is_empty() => {
            println!("Pattern {pattern:?} not found in any window.");
        }
        Ok(matches) => {
            println!("Found {pattern:?} in {} window(s):", matches.len());
            for m in &matches {
                println!("  window starting on day {} (SAX: {:?})", m.day, m.word);
            }
        }
        Err(err) => {
            eprintln!("Scan failed: {err}");
            std::process::exit(1);
        }
    }
}
