//! FxLab CLI — one-shot analysis reports without the TUI.
//!
//! Commands:
//! - `pairs` — list the supported currency pairs
//! - `analyze` — run a full analysis and print a terminal report (or raw JSON)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use fxlab_core::api::{AnalysisApi, HttpApi};
use fxlab_core::catalog::load_catalog;
use fxlab_core::domain::{AnalysisResult, Interval, Period, Selection};
use fxlab_core::view::{IndicatorsView, NewsView, SentimentView, SignalView};

#[derive(Parser)]
#[command(name = "fxlab", about = "FxLab CLI — FX signal analysis reports")]
struct Cli {
    /// API root, e.g. http://localhost:8000/api.
    #[arg(long, global = true, env = "FXLAB_API_URL", default_value = "http://localhost:8000/api")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported currency pairs.
    Pairs,
    /// Run a full analysis for one pair and print the report.
    Analyze {
        /// Pair symbol (e.g. EURUSD=X).
        #[arg(long, default_value = "EURUSD=X")]
        pair: String,

        /// Candle interval: 1m 5m 15m 30m 1h 4h 1d.
        #[arg(long, default_value = "1h")]
        interval: Interval,

        /// Lookback window: 1d 5d 7d 1mo 3mo 6mo 1y.
        #[arg(long, default_value = "7d")]
        period: Period,

        /// Print the raw response JSON instead of the report.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let api = HttpApi::new(&cli.api_url);

    match cli.command {
        Commands::Pairs => run_pairs(&api),
        Commands::Analyze {
            pair,
            interval,
            period,
            json,
        } => run_analyze(&api, pair, interval, period, json),
    }
}

fn run_pairs(api: &dyn AnalysisApi) -> Result<()> {
    let instruments = load_catalog(api);
    println!("{:<12} {:<12} Description", "Symbol", "Name");
    println!("{}", "-".repeat(60));
    for inst in instruments {
        println!("{:<12} {:<12} {}", inst.symbol, inst.name, inst.description);
    }
    Ok(())
}

fn run_analyze(
    api: &dyn AnalysisApi,
    pair: String,
    interval: Interval,
    period: Period,
    json: bool,
) -> Result<()> {
    let selection = Selection {
        pair,
        interval,
        period,
    };
    let result = api
        .analyze(&selection)
        .map_err(|e| anyhow!(e.user_message()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&result);
    Ok(())
}

fn print_report(result: &AnalysisResult) {
    let signal = SignalView::from_result(result);
    let indicators = IndicatorsView::from_result(result);
    let sentiment = SentimentView::from_result(result);
    let news = NewsView::from_result(result);

    println!("{}  (as of {})", signal.pair, signal.timestamp);
    println!("{}", "=".repeat(50));
    println!(
        "Signal: {}   Confidence: {} ({})",
        signal.final_signal,
        signal.confidence_pct,
        signal.tier.as_str()
    );
    println!("Close:  {}", signal.close_display);
    println!("{}", signal.context_line);
    println!();

    println!("Technical");
    println!("  {} at {}", signal.technical_signal, signal.technical_pct);
    println!(
        "  RSI {} ({})   MACD {}",
        indicators.rsi_display,
        indicators.rsi_zone.as_str(),
        indicators.macd_display
    );
    println!(
        "  MA50 {}   MA200 {}   Trend {}",
        indicators.ma50_display,
        indicators.ma200_display,
        indicators.ma_trend.as_str()
    );
    for reason in &indicators.reasons {
        println!("  - {reason}");
    }
    println!();

    println!("Sentiment");
    if let Some(warning) = &sentiment.warning {
        println!("  warning: {warning}");
    }
    println!(
        "  {} {}   {}",
        sentiment.mood.icon(),
        sentiment.label.as_str(),
        sentiment.score_display
    );
    if !sentiment.is_empty() {
        println!(
            "  positive {}  neutral {}  negative {}  ({} analyzed)",
            sentiment.positive, sentiment.neutral, sentiment.negative, sentiment.analyzed
        );
    }
    println!("  {}", sentiment.impact);
    println!();

    if !news.is_empty() {
        println!("Headlines");
        for item in &news.items {
            println!("  - {}", item.title);
        }
        println!("{}", news.summary);
    }
}
