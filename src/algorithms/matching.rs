use crate::core::config::SaxConfig;
use crate::core::errors::SaxError;
use crate::core::series::WindowWord;

/// Return the encoded windows whose word equals `pattern` exactly.
///
/// Matching is whole-word, case-sensitive string equality over the same
/// alphabet the encoder produced; input order (ascending window start) is
/// preserved. A pattern whose length differs from `n_segments` is a
/// configuration error reported before the scan starts; there are no
/// prefix or partial matches.
pub fn find_pattern(
    words: &[WindowWord],
    pattern: &str,
    config: &SaxConfig,
) -> Result<Vec<WindowWord>, SaxError> {
    config.validate_pattern(pattern)?;

    Ok(words
        .iter()
        .filter(|w| w.word == pattern)
        .cloned()
        .collect())
}
