use crate::algorithms::gaussian::Breakpoints;
use crate::algorithms::normalize::zscore;
use crate::algorithms::paa::paa;
use crate::core::config::SaxConfig;
use crate::core::errors::SaxError;
use crate::core::series::{Series, WindowWord};

/// Minimum number of windows before dispatching to the parallel encoder.
/// Below this threshold, thread-dispatch overhead exceeds parallelism gains.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_WINDOWS: usize = 128;

/// Encode a series into one SAX word per non-overlapping window.
///
/// Windows start at offsets `0, W, 2W, ...` while a full window fits; a
/// trailing remainder shorter than `window_size` is dropped, since SAX
/// statistics are only comparable across windows of equal length. Each
/// window runs the pipeline z-normalize -> PAA -> Gaussian binning, and
/// the results come back in ascending start order.
///
/// A series shorter than one window encodes to an empty vector; that is
/// not an error. Configuration violations are reported before any window
/// is processed.
pub fn encode(series: &Series, config: &SaxConfig) -> Result<Vec<WindowWord>, SaxError> {
    config.validate()?;

    let n_windows = config.num_windows(series.len());
    if n_windows == 0 {
        log::debug!(
            "series of {} observations is shorter than window_size {}; nothing to encode",
            series.len(),
            config.window_size
        );
        return Ok(Vec::new());
    }

    let breakpoints = Breakpoints::new(config.n_bins);

    #[cfg(feature = "parallel")]
    if n_windows >= MIN_PARALLEL_WINDOWS {
        return Ok(encode_parallel(series, config, &breakpoints, n_windows));
    }

    Ok(encode_serial(series, config, &breakpoints, n_windows))
}

/// Run the pipeline for one window slice, producing its word.
fn encode_window(window: &[f64], config: &SaxConfig, breakpoints: &Breakpoints) -> String {
    let standardized = zscore(window);
    let means = paa(&standardized, config.n_segments);
    means.iter().map(|&v| breakpoints.symbol(v)).collect()
}

fn encode_serial(
    series: &Series,
    config: &SaxConfig,
    breakpoints: &Breakpoints,
    n_windows: usize,
) -> Vec<WindowWord> {
    let w = config.window_size;
    (0..n_windows)
        .map(|i| {
            let start = i * w;
            WindowWord {
                start,
                day: series.day_at(start),
                word: encode_window(&series.closes()[start..start + w], config, breakpoints),
            }
        })
        .collect()
}

/// Parallel encoder: windows are independent, and the indexed parallel map
/// collects in input order, so the ascending-start contract holds without
/// a post-sort.
#[cfg(feature = "parallel")]
fn encode_parallel(
    series: &Series,
    config: &SaxConfig,
    breakpoints: &Breakpoints,
    n_windows: usize,
) -> Vec<WindowWord> {
    use rayon::prelude::*;

    let w = config.window_size;
    (0..n_windows)
        .into_par_iter()
        .map(|i| {
            let start = i * w;
            WindowWord {
                start,
                day: series.day_at(start),
                word: encode_window(&series.closes()[start..start + w], config, breakpoints),
            }
        })
        .collect()
}
