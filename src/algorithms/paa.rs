/// Piecewise Aggregate Approximation: reduce `window` to `n_segments` means.
///
/// Segment `j` covers the real interval `[j*N/M, (j+1)*N/M)` of the input
/// index axis and each sample's unit interval `[i, i+1)` contributes in
/// proportion to its overlap with the segment. Every output is a true
/// weighted mean over the full window: no sample mass is dropped or
/// counted twice, for any `1 <= M <= N`. When `M` divides `N` this reduces
/// to plain means of `N/M` consecutive samples.
pub fn paa(window: &[f64], n_segments: usize) -> Vec<f64> {
    let n = window.len();
    let m = n_segments;
    assert!(m >= 1, "Segment count must be >= 1");
    assert!(m <= n, "Segment count must not exceed window length");

    let seg_len = n as f64 / m as f64;

    (0..m)
        .map(|j| {
            // Integer numerators keep boundaries exact when m divides n.
            let lo = (j * n) as f64 / m as f64;
            let hi = ((j + 1) * n) as f64 / m as f64;

            let first = lo.floor() as usize;
            let last = (hi.ceil() as usize).min(n);

            let mut acc = 0.0;
            for (i, &x) in window.iter().enumerate().take(last).skip(first) {
                let overlap = (hi.min((i + 1) as f64) - lo.max(i as f64)).max(0.0);
                acc += overlap * x;
            }
            acc / seg_len
        })
        .collect()
}
