pub mod algorithms;
pub mod core;
pub mod fetch;

pub use crate::algorithms::encode::encode;
pub use crate::algorithms::gaussian::{norm_ppf, Breakpoints};
pub use crate::algorithms::matching::find_pattern;
pub use crate::algorithms::normalize::zscore;
pub use crate::algorithms::paa::paa;
pub use crate::core::config::SaxConfig;
pub use crate::core::errors::SaxError;
pub use crate::core::series::{Series, WindowWord};
pub use crate::fetch::{DailyCloseClient, FetchConfig, FetchError};

/// High-level facade for SAX encoding and pattern scanning.
///
/// The configuration is validated once at construction; after that,
/// encoding cannot fail and only a bad target pattern can.
///
/// # Examples
///
/// ```
/// use sax_rs::{SaxConfig, SaxEngine, Series};
///
/// // Two windows of six: one rising, one falling.
/// let series = Series::from_closes(vec![
///     1.0, 2.0, 3.0, 4.0, 5.0, 6.0,
///     6.0, 5.0, 4.0, 3.0, 2.0, 1.0,
/// ]);
/// let engine = SaxEngine::new(SaxConfig::new(6, 3, 4)).unwrap();
/// let matches = engine.scan(&series, "abd").unwrap();
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].start, 0);
/// ```
pub struct SaxEngine {
    config: SaxConfig,
}

impl SaxEngine {
    /// Create an engine, validating the configuration up front.
    pub fn new(config: SaxConfig) -> Result<Self, SaxError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SaxConfig {
        &self.config
    }

    /// Encode a series into one word per non-overlapping window.
    ///
    /// A series shorter than one window yields an empty vector.
    pub fn encode(&self, series: &Series) -> Vec<WindowWord> {
        // Config was validated in new(), so encode cannot fail.
        encode(series, &self.config).expect("validated config")
    }

    /// Filter encoded windows down to exact matches of `pattern`.
    pub fn find_pattern(
        &self,
        words: &[WindowWord],
        pattern: &str,
    ) -> Result<Vec<WindowWord>, SaxError> {
        find_pattern(words, pattern, &self.config)
    }

    /// Encode and match in one call.
    ///
    /// The pattern is checked against `n_segments` before any window is
    /// encoded, so a bad pattern fails fast even on a long series.
    pub fn scan(&self, series: &Series, pattern: &str) -> Result<Vec<WindowWord>, SaxError> {
        self.config.validate_pattern(pattern)?;
        let words = self.encode(series);
        find_pattern(&words, pattern, &self.config)
    }
}
