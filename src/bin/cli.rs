use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trendcast::application::dashboard::DashboardSnapshot;
use trendcast::application::system::Application;
use trendcast::config::{Config, layout_from_env};
use trendcast::domain::ml::PredictionOutcome;
use trendcast::infrastructure::export::{export_features, export_prices};
use trendcast::infrastructure::synthetic::{SyntheticConfig, generate};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Headless Trendcast: indicators, prediction and stats",
    long_about = None
)]
struct Cli {
    /// Price CSV (overrides DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// CSV layout: unified or localized (overrides CSV_LAYOUT)
    #[arg(long, global = true)]
    layout: Option<String>,

    /// Keep close-price outliers
    #[arg(long, global = true)]
    keep_outliers: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the next-period direction from the latest complete row
    Predict {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the latest indicator values and their reading
    Indicators {
        /// Number of trailing rows to print
        #[arg(short, long, default_value_t = 1)]
        rows: usize,
    },

    /// Print performance statistics
    Stats {
        /// Lookback for the period change, in rows
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Write the cleaned prices and/or computed features to CSV
    Export {
        #[arg(long)]
        prices: Option<PathBuf>,

        #[arg(long)]
        features: Option<PathBuf>,
    },

    /// Generate a deterministic synthetic price file in the unified layout
    Synth {
        #[arg(short, long, default_value = "synthetic_prices.csv")]
        output: PathBuf,

        #[arg(long, default_value_t = 500)]
        rows: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Mean daily return
        #[arg(long, default_value_t = 0.0004)]
        drift: f64,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();

    if let Commands::Synth {
        output,
        rows,
        seed,
        drift,
    } = &cli.command
    {
        let config = SyntheticConfig {
            rows: *rows,
            seed: *seed,
            drift: *drift,
            ..SyntheticConfig::default()
        };
        let series = generate(&config);
        export_prices(output, &series)?;
        println!("Wrote {} rows to {}", series.len(), output.display());
        return Ok(());
    }

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(layout) = cli.layout {
        config.csv_layout = layout_from_env(&layout).context("Invalid --layout")?;
    }
    if cli.keep_outliers {
        config.remove_outliers = false;
    }
    if let Commands::Stats {
        window: Some(window),
    } = &cli.command
    {
        config.default_window_days = *window;
    }

    let service = Application::build(config)?.into_dashboard();
    let snapshot = service
        .snapshot()
        .context("Failed to load price data")?;

    match cli.command {
        Commands::Predict { json } => print_prediction(&snapshot, json)?,
        Commands::Indicators { rows } => print_indicators(&snapshot, rows),
        Commands::Stats { .. } => print_stats(&snapshot),
        Commands::Export { prices, features } => {
            if prices.is_none() && features.is_none() {
                anyhow::bail!("Nothing to export: pass --prices and/or --features");
            }
            if let Some(path) = prices {
                export_prices(&path, &snapshot.series)?;
                println!("Prices written to {}", path.display());
            }
            if let Some(path) = features {
                export_features(&path, &snapshot.frame)?;
                println!("Features written to {}", path.display());
            }
        }
        Commands::Synth { .. } => {}
    }

    Ok(())
}

fn print_prediction(snapshot: &DashboardSnapshot, json: bool) -> anyhow::Result<()> {
    match &snapshot.prediction {
        PredictionOutcome::Available(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(report)?);
                return Ok(());
            }
            let date = report
                .date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "{} ({:.1}% confidence) as of {} [{}]",
                report.prediction.direction,
                report.confidence,
                date,
                snapshot.model_name.as_deref().unwrap_or("model")
            );
            for reason in &report.reasons {
                println!("  - {}", reason);
            }
        }
        PredictionOutcome::Unavailable(reason) => {
            if json {
                println!("{}", serde_json::json!({ "unavailable": reason }));
            } else {
                println!("Prediction unavailable: {}", reason);
            }
        }
    }
    Ok(())
}

fn print_indicators(snapshot: &DashboardSnapshot, rows: usize) {
    let fmt = |v: Option<f64>| v.map(|x| format!("{:.4}", x)).unwrap_or_else(|| "-".to_string());

    println!(
        "{:<12} {:>14} {:>14} {:>14} {:>8} {:>12} {:>12}",
        "date", "close", "ma20", "ma50", "rsi", "macd", "volatility"
    );
    for row in snapshot.frame.tail(rows.max(1)) {
        println!(
            "{:<12} {:>14} {:>14} {:>14} {:>8} {:>12} {:>12}",
            row.date.map(|d| d.to_string()).unwrap_or_default(),
            fmt(row.close),
            fmt(row.ma20),
            fmt(row.ma50),
            row.rsi.map(|x| format!("{:.2}", x)).unwrap_or_else(|| "-".to_string()),
            fmt(row.macd),
            fmt(row.volatility),
        );
    }

    if let Some(reading) = &snapshot.reading {
        println!();
        for reason in reading.reasons() {
            println!("  - {}", reason);
        }
    }
}

fn print_stats(snapshot: &DashboardSnapshot) {
    let report = &snapshot.report;
    println!(
        "Source: {} ({} read, {} dropped, {} duplicates, {} outliers removed)",
        snapshot.source_id,
        report.rows_read,
        report.rows_dropped,
        report.duplicates,
        report.outliers_removed
    );

    let Some(s) = &snapshot.summary else {
        println!("Not enough data for statistics");
        return;
    };
    println!(
        "Range:                 {} .. {} ({} rows)",
        s.first_date, s.last_date, s.observations
    );
    println!("Last close:            {:.2}", s.last_close);
    if let Some(day) = s.day_change_pct {
        println!("Day change:            {:+.2}%", day);
    }
    println!("Change ({} rows):     {:+.2}%", s.period_days, s.period_change_pct);
    println!("Total return:          {:+.2}%", s.total_return_pct);
    println!("Max drawdown:          {:.2}%", s.max_drawdown_pct);
    println!("Annualized volatility: {:.2}%", s.annualized_volatility_pct);
    println!("Sharpe ratio:          {:.2}", s.sharpe_ratio);
    println!("Close min/max:         {:.2} / {:.2}", s.min_close, s.max_close);
}
