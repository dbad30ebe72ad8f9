use thiserror::Error;

/// Configuration errors surfaced before any window is processed.
///
/// Degenerate numeric cases (constant windows) are handled inside the
/// pipeline and never appear here; a series too short to fill a single
/// window is likewise not an error: it encodes to an empty sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaxError {
    #[error("window_size must be >= 1")]
    ZeroWindow,

    #[error("n_segments must be >= 1")]
    ZeroSegments,

    #[error("n_segments ({n_segments}) must not exceed window_size ({window_size})")]
    WindowTooSmall { n_segments: usize, window_size: usize },

    #[error("n_bins ({n_bins}) must be >= 2")]
    TooFewBins { n_bins: usize },

    #[error("n_bins ({n_bins}) exceeds the 26-letter alphabet")]
    AlphabetExhausted { n_bins: usize },

    #[error("target pattern length ({pattern_len}) must equal n_segments ({n_segments})")]
    PatternLength { pattern_len: usize, n_segments: usize },
}
