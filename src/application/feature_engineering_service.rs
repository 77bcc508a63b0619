use crate::application::indicators::{
    channel, correlation,
    momentum::{momentum, roc, rsi},
    rolling::{dense, rolling},
    trend::{ema, macd, sma},
    volatility::{atr, bollinger, log_returns, rolling_std, simple_returns, true_range},
};
use crate::config::IndicatorConfig;
use crate::domain::features::{FeatureFrame, FeatureRow};
use crate::domain::market::PriceSeries;
use crate::domain::ports::FeatureEngineeringService;
use statrs::statistics::Statistics;
use tracing::debug;

/// Computes the full indicator set over a price series, one row per record.
pub struct TechnicalFeatureEngineeringService {
    config: IndicatorConfig,
}

impl TechnicalFeatureEngineeringService {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }
}

impl Default for TechnicalFeatureEngineeringService {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl FeatureEngineeringService for TechnicalFeatureEngineeringService {
    fn compute(&self, series: &PriceSeries) -> FeatureFrame {
        let cfg = &self.config;
        let records = series.records();
        let n = records.len();

        let closes = series.closes();
        let opens: Vec<Option<f64>> = records.iter().map(|r| r.open).collect();
        let highs: Vec<Option<f64>> = records.iter().map(|r| r.high).collect();
        let lows: Vec<Option<f64>> = records.iter().map(|r| r.low).collect();
        let usd: Vec<Option<f64>> = records.iter().map(|r| r.usd_close).collect();
        let selic: Vec<Option<f64>> = records.iter().map(|r| r.selic).collect();

        // Trend
        let ma5 = sma(&closes, cfg.ma_windows.ma5);
        let ma10 = sma(&closes, cfg.ma_windows.ma10);
        let ma20 = sma(&closes, cfg.ma_windows.ma20);
        let ma50 = sma(&closes, cfg.ma_windows.ma50);
        let ma200 = sma(&closes, cfg.ma_windows.ma200);
        let ema_fast = ema(&closes, cfg.macd_fast);
        let ema_slow = ema(&closes, cfg.macd_slow);
        let macd = macd(&closes, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal);

        // Returns and dispersion
        let returns = simple_returns(&closes);
        let log_return = log_returns(&closes);
        let volatility = rolling_std(&returns, cfg.volatility_window);
        let bands = bollinger(&closes, cfg.bb_period, cfg.bb_std_dev);
        let tr = true_range(&highs, &lows, &closes);
        let atr = atr(&tr, cfg.atr_period);

        // Oscillators and channels
        let rsi = rsi(&closes, cfg.rsi_period);
        let momentum = momentum(&closes, cfg.momentum_period);
        let roc = roc(&closes, cfg.roc_period);
        let tenkan = channel::midpoint(&closes, cfg.tenkan_period);
        let kijun = channel::midpoint(&closes, cfg.kijun_period);

        // Auxiliary series
        let mean = |w: &[f64]| Some(w.mean());
        let usd_ma5 = rolling(&usd, cfg.aux_ma_window, mean);
        let selic_ma5 = rolling(&selic, cfg.aux_ma_window, mean);
        let close_col = dense(&closes);
        let corr_usd = correlation::rolling_correlation(&close_col, &usd, cfg.correlation_window);
        let corr_selic =
            correlation::rolling_correlation(&close_col, &selic, cfg.correlation_window);
        let selic_normalized = correlation::zscore(&selic);

        let rows = (0..n)
            .map(|i| {
                let r = &records[i];
                let close = r.close;
                FeatureRow {
                    date: Some(r.date),
                    close: Some(close),
                    open: opens[i],
                    high: highs[i],
                    low: lows[i],
                    usd_close: usd[i],
                    selic: selic[i],

                    returns: returns[i],
                    log_return: log_return[i],
                    volatility: volatility[i],

                    ma5: ma5[i],
                    ma10: ma10[i],
                    ma20: ma20[i],
                    ma50: ma50[i],
                    ma200: ma200[i],

                    rsi: rsi[i],
                    ema12: ema_fast[i],
                    ema26: ema_slow[i],
                    macd: macd.macd[i],
                    macd_signal: macd.signal[i],
                    macd_hist: macd.histogram[i],
                    momentum: momentum[i],
                    roc: roc[i],

                    bb_middle: bands.middle[i],
                    bb_upper: bands.upper[i],
                    bb_lower: bands.lower[i],
                    bb_width: bands.width[i],
                    tr: tr[i],
                    atr: atr[i],
                    price_range: r.range().map(|(h, l)| (h - l) / close),
                    hl_ratio: r.range().and_then(|(h, l)| (l != 0.0).then(|| h / l)),
                    co_ratio: r.open.and_then(|o| (o != 0.0).then(|| close / o)),
                    tenkan: tenkan[i],
                    kijun: kijun[i],

                    usd_ma5: usd_ma5[i],
                    selic_ma5: selic_ma5[i],
                    corr_usd: corr_usd[i],
                    corr_selic: corr_selic[i],
                    close_usd_ratio: r.usd_close.and_then(|u| (u != 0.0).then(|| close / u)),
                    selic_normalized: selic_normalized[i],
                }
            })
            .collect();

        debug!("Computed features for {} rows", n);
        FeatureFrame::new(rows)
    }
}
