//! Remote daily-close data source.
//!
//! This is the boundary collaborator for the SAX core: it either delivers a
//! complete [`Series`] or a terminal error, and the core never retries on
//! its behalf. Transient transport failures are retried here with bounded
//! exponential backoff; everything the provider reports as wrong with the
//! request surfaces as an explicit error.

use std::collections::BTreeMap;
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::core::series::Series;

/// Errors from the daily-close fetch path.
///
/// `NoData` (the provider answered but carried no daily series) is kept
/// distinct from `Parse`/`BadValue` (the provider answered with something
/// unreadable) so callers can tell an empty symbol from a broken feed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider returned error: {0}")]
    Api(String),

    #[error("provider throttled the request: {0}")]
    Throttled(String),

    #[error("no daily series in response")]
    NoData,

    #[error("malformed close value for {date}: {value:?}")]
    BadValue { date: String, value: String },

    #[error("retries exhausted after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl FetchError {
    /// Whether a retry could plausibly succeed.
    fn is_transient(&self) -> bool {
        matches!(self, FetchError::Request(_) | FetchError::Throttled(_))
    }
}

/// Explicit configuration for the fetch client.
///
/// Everything the original ambient globals carried (API key, URL) lives
/// here and is passed at construction; nothing is read from process-wide
/// state.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Endpoint serving the daily series, without query parameters.
    pub base_url: String,
    /// Provider API key, sent as the `apikey` query parameter.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries after the first attempt fails transiently.
    pub max_retries: u32,
    /// Backoff for the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
}

impl FetchConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
            max_retries: 5,
            base_delay: Duration::from_secs(1),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, max_retries: u32, base_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.base_delay = base_delay;
        self
    }
}

/// Daily payload shape: a map of ISO date to per-day fields, plus the
/// provider's out-of-band error and throttle notes.
#[derive(Debug, Deserialize)]
struct DailyResponse {
    #[serde(rename = "Time Series (Daily)")]
    series: Option<BTreeMap<String, DailyBar>>,

    #[serde(rename = "Error Message")]
    error_message: Option<String>,

    #[serde(rename = "Note")]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DailyBar {
    #[serde(rename = "4. close")]
    close: String,
}

/// Blocking client for a daily-close price endpoint.
pub struct DailyCloseClient {
    config: FetchConfig,
    client: reqwest::blocking::Client,
}

impl DailyCloseClient {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Fetch the full daily close history for `symbol` as a [`Series`]
    /// with days numbered `1..=n` in ascending date order.
    ///
    /// Transient failures (transport errors, throttle notes) are retried
    /// up to `max_retries` times with delays of `base_delay * 2^attempt`;
    /// the terminal outcome is a series or an explicit error.
    pub fn daily_closes(&self, symbol: &str) -> Result<Series, FetchError> {
        let url = self.request_url(symbol);
        let mut attempt: u32 = 0;

        loop {
            match self.fetch_once(&url) {
                Ok(series) => return Ok(series),
                Err(err) if err.is_transient() => {
                    attempt += 1;
                    if attempt > self.config.max_retries {
                        return Err(FetchError::RetriesExhausted {
                            attempts: attempt,
                            last_error: err.to_string(),
                        });
                    }
                    let delay = self.config.base_delay * 2u32.pow(attempt - 1);
                    warn!(
                        "fetch attempt {attempt}/{} for {symbol} failed: {err}; retrying in {delay:?}",
                        self.config.max_retries
                    );
                    std::thread::sleep(delay);
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn request_url(&self, symbol: &str) -> String {
        format!(
            "{}?symbol={}&apikey={}",
            self.config.base_url, symbol, self.config.api_key
        )
    }

    fn fetch_once(&self, url: &str) -> Result<Series, FetchError> {
        debug!("requesting daily series");
        let text = self.client.get(url).send()?.error_for_status()?.text()?;
        let payload: DailyResponse = serde_json::from_str(&text)?;
        series_from_payload(payload)
    }
}

/// Turn a parsed payload into a day-indexed series.
///
/// The BTreeMap keys are ISO dates, so iteration order is already oldest
/// to newest; days are assigned `1..=n` in that order.
fn series_from_payload(payload: DailyResponse) -> Result<Series, FetchError> {
    if let Some(message) = payload.error_message {
        return Err(FetchError::Api(message));
    }
    if let Some(note) = payload.note {
        return Err(FetchError::Throttled(note));
    }

    let bars = payload.series.ok_or(FetchError::NoData)?;
    if bars.is_empty() {
        return Err(FetchError::NoData);
    }

    let mut closes = Vec::with_capacity(bars.len());
    for (date, bar) in bars {
        let close: f64 = bar.close.parse().map_err(|_| FetchError::BadValue {
            date: date.clone(),
            value: bar.close.clone(),
        })?;
        closes.push(close);
    }

    Ok(Series::from_closes(closes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FetchConfig::new("https://example.com/daily", "k");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.base_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_config_builders() {
        let config = FetchConfig::new("https://example.com/daily", "k")
            .with_timeout(Duration::from_secs(5))
            .with_retry_policy(2, Duration::from_millis(50));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.base_delay, Duration::from_millis(50));
    }

    #[test]
    fn test_request_url() {
        let client =
            DailyCloseClient::new(FetchConfig::new("https://example.com/daily", "secret")).unwrap();
        assert_eq!(
            client.request_url("SPY"),
            "https://example.com/daily?symbol=SPY&apikey=secret"
        );
    }

    #[test]
    fn test_payload_sorted_ascending_by_date() {
        // JSON object order is newest-first (as providers send it); the
        // series must still come out oldest-first with days 1..=n.
        let payload: DailyResponse = serde_json::from_str(
            r#"{
                "Time Series (Daily)": {
                    "2024-01-03": { "4. close": "103.0" },
                    "2024-01-01": { "4. close": "101.0" },
                    "2024-01-02": { "4. close": "102.0" }
                }
            }"#,
        )
        .unwrap();
        let series = series_from_payload(payload).unwrap();
        assert_eq!(series.closes(), &[101.0, 102.0, 103.0]);
        assert_eq!(series.day_at(0), 1);
        assert_eq!(series.day_at(2), 3);
    }

    #[test]
    fn test_payload_missing_series_is_no_data() {
        let payload: DailyResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            series_from_payload(payload),
            Err(FetchError::NoData)
        ));

        let payload: DailyResponse =
            serde_json::from_str(r#"{ "Time Series (Daily)": {} }"#).unwrap();
        assert!(matches!(
            series_from_payload(payload),
            Err(FetchError::NoData)
        ));
    }

    #[test]
    fn test_payload_error_message_is_api_error() {
        let payload: DailyResponse =
            serde_json::from_str(r#"{ "Error Message": "invalid symbol" }"#).unwrap();
        match series_from_payload(payload) {
            Err(FetchError::Api(msg)) => assert_eq!(msg, "invalid symbol"),
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_note_is_throttled_and_transient() {
        let payload: DailyResponse =
            serde_json::from_str(r#"{ "Note": "call frequency exceeded" }"#).unwrap();
        let err = series_from_payload(payload).unwrap_err();
        assert!(matches!(err, FetchError::Throttled(_)));
        assert!(err.is_transient());
    }

    #[test]
    fn test_payload_bad_close_value() {
        let payload: DailyResponse = serde_json::from_str(
            r#"{ "Time Series (Daily)": { "2024-01-01": { "4. close": "n/a" } } }"#,
        )
        .unwrap();
        match series_from_payload(payload) {
            Err(FetchError::BadValue { date, value }) => {
                assert_eq!(date, "2024-01-01");
                assert_eq!(value, "n/a");
            }
            other => panic!("Expected BadValue, got {other:?}"),
        }
    }

    #[test]
    fn test_terminal_errors_not_transient() {
        assert!(!FetchError::Api("bad".into()).is_transient());
        assert!(!FetchError::NoData.is_transient());
        assert!(!FetchError::BadValue {
            date: "d".into(),
            value: "v".into()
        }
        .is_transient());
    }
}
