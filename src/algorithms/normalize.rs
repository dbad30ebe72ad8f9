/// Z-score standardize a window using population moments (divide by N).
///
/// Returns `(x_i - mu) / sigma` for each observation. A constant window
/// (sigma == 0) standardizes to all zeros rather than NaN: SAX treats a
/// flat segment as sitting at the distribution's center.
pub fn zscore(window: &[f64]) -> Vec<f64> {
    assert!(!window.is_empty(), "Window must contain at least one value");

    let n = window.len() as f64;
    let sum: f64 = window.iter().sum();
    let sum_sq: f64 = window.iter().map(|x| x * x).sum();
    let mu = sum / n;
    // Variance via E[X^2] - E[X]^2, clamped to 0 for numerical stability
    let var = (sum_sq / n - mu * mu).max(0.0);
    let sigma = var.sqrt();

    if sigma < 1e-15 {
        return vec![0.0; window.len()];
    }

    window.iter().map(|x| (x - mu) / sigma).collect()
}
