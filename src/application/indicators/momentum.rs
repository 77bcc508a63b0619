/// Relative Strength Index over `period` one-step deltas, with simple means.
///
/// Defined from index `period`. A window with losses but no gains reads 0, one
/// with gains but no losses reads 100, and a perfectly flat window is undefined.
pub fn rsi(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut out = vec![None; n];
    if period == 0 || n <= period {
        return out;
    }

    let deltas: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();

    for i in period..n {
        // deltas[i - 1] is the change into row i
        let window = &deltas[i - period..i];
        let avg_gain = window.iter().filter(|d| **d > 0.0).sum::<f64>() / period as f64;
        let avg_loss = -window.iter().filter(|d| **d < 0.0).sum::<f64>() / period as f64;

        out[i] = if avg_loss > 0.0 {
            let rs = avg_gain / avg_loss;
            Some(100.0 - 100.0 / (1.0 + rs))
        } else if avg_gain > 0.0 {
            Some(100.0)
        } else {
            None
        };
    }
    out
}

/// `C[i] - C[i - period]`
pub fn momentum(values: &[f64], period: usize) -> Vec<Option<f64>> {
    lagged(values, period, |now, then| Some(now - then))
}

/// Rate of change in percent: `(C[i] - C[i - period]) / C[i - period] * 100`.
pub fn roc(values: &[f64], period: usize) -> Vec<Option<f64>> {
    lagged(values, period, |now, then| {
        (then != 0.0).then(|| (now - then) / then * 100.0)
    })
}

fn lagged<F>(values: &[f64], period: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(f64, f64) -> Option<f64>,
{
    (0..values.len())
        .map(|i| {
            if period == 0 || i < period {
                None
            } else {
                f(values[i], values[i - period])
            }
        })
        .collect()
}
