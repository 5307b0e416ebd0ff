use buildwatch::cli::Cli;
use buildwatch::context::BuildContext;
use buildwatch::metrics::CloudWatchPublisher;
use buildwatch::probe::DiskProber;
use buildwatch::sampler::Sampler;
use clap::Parser;
use std::process;
use std::time::Duration;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    info!("Starting buildwatch v{}", env!("CARGO_PKG_VERSION"));

    let context = match BuildContext::from_env() {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let prober = DiskProber::new(cli.path);
    let publisher = CloudWatchPublisher::from_env().await;
    let sampler = Sampler::new(
        prober,
        publisher,
        context,
        Duration::from_secs(cli.interval_secs),
    );

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    if let Err(e) = sampler.run(cancel).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    info!("buildwatch stopped");
}
