//! Fixed-window helpers over series with gaps.

/// Applies `f` to every full window ending at each index.
///
/// The output at `i` is `None` while `i < window - 1`, and whenever any value
/// inside the window is undefined.
pub fn rolling<F>(values: &[Option<f64>], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }

    let mut buf = Vec::with_capacity(window);
    for i in (window - 1)..values.len() {
        buf.clear();
        buf.extend(values[i + 1 - window..=i].iter().flatten());
        if buf.len() == window {
            out[i] = f(&buf);
        }
    }
    out
}

/// Same as [`rolling`] over two aligned series.
pub fn rolling_pair<F>(
    xs: &[Option<f64>],
    ys: &[Option<f64>],
    window: usize,
    f: F,
) -> Vec<Option<f64>>
where
    F: Fn(&[f64], &[f64]) -> Option<f64>,
{
    let n = xs.len().min(ys.len());
    let mut out = vec![None; xs.len()];
    if window == 0 {
        return out;
    }

    let mut bx = Vec::with_capacity(window);
    let mut by = Vec::with_capacity(window);
    for i in (window - 1)..n {
        bx.clear();
        by.clear();
        for j in (i + 1 - window)..=i {
            if let (Some(x), Some(y)) = (xs[j], ys[j]) {
                bx.push(x);
                by.push(y);
            }
        }
        if bx.len() == window {
            out[i] = f(&bx, &by);
        }
    }
    out
}

pub fn dense(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(w: &[f64]) -> Option<f64> {
        Some(w.iter().sum())
    }

    #[test]
    fn test_rolling_warmup_and_gaps() {
        let values = vec![Some(1.0), Some(2.0), Some(3.0), None, Some(5.0), Some(6.0)];
        let out = rolling(&values, 2, sum);
        assert_eq!(out, vec![None, Some(3.0), Some(5.0), None, None, Some(11.0)]);
    }

    #[test]
    fn test_window_longer_than_series() {
        let out = rolling(&dense(&[1.0, 2.0]), 5, sum);
        assert_eq!(out, vec![None, None]);
    }
}
