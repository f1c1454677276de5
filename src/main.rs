use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use augur::{Config, SeriesStore, SignalRunner};

/// Symbols the synthetic feed publishes, with their starting prices.
const DEMO_SYMBOLS: &[(&str, f64)] = &[("btc", 64_000.0), ("eth", 3_200.0), ("sol", 150.0)];

/// Feed cadence; several points land between evaluation ticks so the series
/// keeps moving.
const FEED_INTERVAL_MS: u64 = 1_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "augur=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!(
        "Starting Augur engine {} (tick every {}s, {} points of history)",
        config.instance_id, config.eval_interval_secs, config.history_capacity
    );

    let store = Arc::new(SeriesStore::with_capacity(config.history_capacity));
    let runner = Arc::new(SignalRunner::new(
        store.clone(),
        Duration::from_secs(config.eval_interval_secs),
    ));

    // Synthetic random-walk feed so the pipeline has data to evaluate
    {
        let store = store.clone();
        tokio::spawn(async move {
            run_demo_feed(store).await;
        });
    }

    // Periodically dump the latest evaluations as JSON records
    {
        let runner = runner.clone();
        let every_secs = config.eval_interval_secs;
        tokio::spawn(async move {
            report_loop(runner, every_secs).await;
        });
    }

    // Run the evaluation loop until Ctrl+C
    let runner_task = {
        let runner = runner.clone();
        tokio::spawn(async move { runner.start().await })
    };

    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested");
    runner.stop();
    let _ = runner_task.await;

    Ok(())
}

/// Push a random-walk price and volume point for each demo symbol.
async fn run_demo_feed(store: Arc<SeriesStore>) {
    let mut prices: Vec<f64> = DEMO_SYMBOLS.iter().map(|(_, start)| *start).collect();
    let mut ticker = tokio::time::interval(Duration::from_millis(FEED_INTERVAL_MS));

    loop {
        ticker.tick().await;
        let timestamp = chrono::Utc::now().timestamp_millis();

        for (i, (symbol, _)) in DEMO_SYMBOLS.iter().enumerate() {
            let (step, volume) = {
                let mut rng = rand::thread_rng();
                (rng.gen_range(-0.01..0.01), rng.gen_range(500.0..5_000.0))
            };
            prices[i] *= 1.0 + step;
            store.record(symbol, prices[i], Some(volume), timestamp);
        }
    }
}

/// Log the latest evaluation for each demo symbol on the runner's cadence.
async fn report_loop(runner: Arc<SignalRunner>, every_secs: u64) {
    let mut ticker = tokio::time::interval(Duration::from_secs(every_secs));

    loop {
        ticker.tick().await;

        for (symbol, _) in DEMO_SYMBOLS {
            if let Some(evaluation) = runner.latest(symbol) {
                match serde_json::to_string(&evaluation) {
                    Ok(json) => info!("{}", json),
                    Err(e) => warn!("failed to serialize evaluation for {}: {}", symbol, e),
                }
            }
        }
    }
}
