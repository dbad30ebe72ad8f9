use crate::core::errors::SaxError;

/// Number of letters available for symbols ('a'..='z').
pub const ALPHABET_SIZE: usize = 26;

/// Configuration for SAX encoding.
///
/// A series is cut into non-overlapping windows of `window_size`
/// observations; each window is reduced to `n_segments` PAA means and
/// each mean is mapped to one of `n_bins` symbols via standard-normal
/// quantile breakpoints.
#[derive(Debug, Clone)]
pub struct SaxConfig {
    /// Observations per window.
    pub window_size: usize,
    /// PAA segments per window; also the length of every produced word.
    pub n_segments: usize,
    /// Alphabet size, 2..=26.
    pub n_bins: usize,
}

impl SaxConfig {
    pub fn new(window_size: usize, n_segments: usize, n_bins: usize) -> Self {
        Self {
            window_size,
            n_segments,
            n_bins,
        }
    }

    /// Check the configuration invariants.
    ///
    /// Violations are reported here, before any window is touched; they are
    /// never silently corrected.
    pub fn validate(&self) -> Result<(), SaxError> {
        if self.window_size == 0 {
            return Err(SaxError::ZeroWindow);
        }
        if self.n_segments == 0 {
            return Err(SaxError::ZeroSegments);
        }
        if self.n_segments > self.window_size {
            return Err(SaxError::WindowTooSmall {
                n_segments: self.n_segments,
                window_size: self.window_size,
            });
        }
        if self.n_bins < 2 {
            return Err(SaxError::TooFewBins { n_bins: self.n_bins });
        }
        if self.n_bins > ALPHABET_SIZE {
            return Err(SaxError::AlphabetExhausted { n_bins: self.n_bins });
        }
        Ok(())
    }

    /// Number of full windows a series of `len` observations yields.
    ///
    /// The trailing remainder shorter than `window_size` is never emitted.
    pub fn num_windows(&self, len: usize) -> usize {
        len / self.window_size
    }

    /// Check a target pattern against the configured word length.
    pub fn validate_pattern(&self, pattern: &str) -> Result<(), SaxError> {
        let pattern_len = pattern.chars().count();
        if pattern_len != self.n_segments {
            return Err(SaxError::PatternLength {
                pattern_len,
                n_segments: self.n_segments,
            });
        }
        Ok(())
    }
}
