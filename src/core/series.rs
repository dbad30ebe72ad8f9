/// A day-indexed series of closing prices.
///
/// Days are sequential and 1-based, matching how daily feeds number their
/// observations. The series is built once and read by reference; windows
/// over it are plain slices, never owned copies.
#[derive(Debug, Clone)]
pub struct Series {
    first_day: u64,
    closes: Vec<f64>,
}

impl Series {
    /// Build a series whose days start at `first_day`.
    pub fn new(first_day: u64, closes: Vec<f64>) -> Self {
        Self { first_day, closes }
    }

    /// Build a series with days numbered `1..=closes.len()`.
    pub fn from_closes(closes: Vec<f64>) -> Self {
        Self::new(1, closes)
    }

    /// The closing prices in day order.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Day index for the observation at series offset `start`.
    pub fn day_at(&self, start: usize) -> u64 {
        self.first_day + start as u64
    }
}

/// One encoded window: where it starts and the word it produced.
///
/// `start` is the 0-based offset into the series; `day` is the 1-based day
/// index of the window's first observation. A pattern match is represented
/// by the same type, filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowWord {
    /// 0-based offset of the window's first observation.
    pub start: usize,
    /// Day index of the window's first observation.
    pub day: u64,
    /// Symbol word of length `n_segments`.
    pub word: String,
}
