/// Lookback choices offered by the period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Days30,
    Days60,
    Days100,
    Days250,
    All,
}

impl Period {
    pub const CHOICES: [Period; 5] = [
        Period::Days30,
        Period::Days60,
        Period::Days100,
        Period::Days250,
        Period::All,
    ];

    /// `None` means the whole series.
    pub fn days(&self) -> Option<usize> {
        match self {
            Period::Days30 => Some(30),
            Period::Days60 => Some(60),
            Period::Days100 => Some(100),
            Period::Days250 => Some(250),
            Period::All => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Days30 => "30 days",
            Period::Days60 => "60 days",
            Period::Days100 => "100 days",
            Period::Days250 => "250 days",
            Period::All => "All",
        }
    }

    /// Closest choice for a configured default; anything above 250 means all.
    pub fn from_days(days: usize) -> Self {
        Self::CHOICES
            .into_iter()
            .find(|p| p.days().is_some_and(|d| days <= d))
            .unwrap_or(Period::All)
    }
}

/// The rows a chart draws: the last N rows, keeping every k-th.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartWindow {
    pub period: Period,
    pub sampling: usize,
}

impl ChartWindow {
    pub fn new(period: Period, sampling: usize) -> Self {
        Self {
            period,
            sampling: sampling.max(1),
        }
    }

    /// Index range of the period inside a series of `len` rows.
    pub fn bounds(&self, len: usize) -> std::ops::Range<usize> {
        let start = self
            .period
            .days()
            .map(|d| len.saturating_sub(d))
            .unwrap_or(0);
        start..len
    }

    /// Indices to plot, ascending.
    pub fn indices(&self, len: usize) -> Vec<usize> {
        self.bounds(len).step_by(self.sampling.max(1)).collect()
    }

    pub fn select<'a, T>(&self, rows: &'a [T]) -> Vec<&'a T> {
        self.indices(rows.len()).into_iter().map(|i| &rows[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_then_sample() {
        let rows: Vec<usize> = (0..100).collect();
        let window = ChartWindow::new(Period::Days30, 5);

        let picked: Vec<usize> = window.select(&rows).into_iter().copied().collect();
        assert_eq!(picked, vec![70, 75, 80, 85, 90, 95]);
    }

    #[test]
    fn test_all_and_short_series() {
        let window = ChartWindow::new(Period::All, 1);
        assert_eq!(window.indices(3), vec![0, 1, 2]);

        let window = ChartWindow::new(Period::Days250, 0);
        assert_eq!(window.sampling, 1);
        assert_eq!(window.indices(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_period_from_days() {
        assert_eq!(Period::from_days(30), Period::Days30);
        assert_eq!(Period::from_days(45), Period::Days60);
        assert_eq!(Period::from_days(1000), Period::All);
    }
}
