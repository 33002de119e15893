use anyhow::Context;
use clap::Parser;
use std::io;
use std::time::Duration;

use clicker::cli::Cli;
use clicker::config::Config;
use clicker::headless::run_headless;
use clicker::logging::init_tracing;
use clicker::shutdown::{listen_for_signals, ShutdownCoordinator};
use clicker::store::Store;
use clicker::ui::counter::{Count, CounterReducer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("validating command-line overrides")?;

    init_tracing(&config.logging);
    tracing::info!(seed = config.counter.initial, headless = cli.headless, "starting");

    let store: Store<CounterReducer> = Store::with_state(Count::new(config.counter.initial));

    if cli.headless {
        run_headless(&store, cli.intents(), io::stdout()).context("writing headless output")?;
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("starting tokio runtime")?;

    let shutdown = ShutdownCoordinator::new();
    runtime.spawn(listen_for_signals(shutdown.handle()));

    let result = clicker::ui::run(&config, store, runtime.handle().clone(), shutdown.handle());
    runtime.shutdown_timeout(Duration::from_millis(100));
    result.context("running terminal UI")
}
