//! Fixed-interval sampler loop
//!
//! Probe, publish, wait, repeat. One sample in flight at a time: a new
//! measurement never starts until the previous publish has completed, so
//! samples reach the backend in measurement order.
//!
//! Fail-fast on purpose: the first probe or publish error aborts the loop
//! and the process. There is no retry or backoff here; restarting is the
//! container supervisor's job.

use crate::context::BuildContext;
use crate::error::Result;
use crate::metrics::{MetricSample, MetricSink};
use crate::probe::UsageProbe;
use std::time::Duration;
use tokio::select;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct Sampler<P, S> {
    probe: P,
    sink: S,
    context: BuildContext,
    period: Duration,
}

impl<P, S> Sampler<P, S>
where
    P: UsageProbe,
    S: MetricSink,
{
    pub fn new(probe: P, sink: S, context: BuildContext, period: Duration) -> Self {
        Self {
            probe,
            sink,
            context,
            period,
        }
    }

    /// Run the loop until cancelled or until an iteration fails.
    ///
    /// The first sample is taken immediately; subsequent samples follow at
    /// the configured period. Returns Ok on cancellation, otherwise the
    /// first probe or publish error.
    pub async fn run(self, cancel: CancellationToken) -> Result<()> {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Sampling every {}s for project={} build_id={} build_number={}",
            self.period.as_secs(),
            self.context.project_name,
            self.context.build_id,
            self.context.build_number
        );

        loop {
            select! {
                // Shutdown wins over a tick when both are ready.
                biased;
                _ = cancel.cancelled() => {
                    info!("Shutdown signal received");
                    return Ok(());
                }
                _ = ticker.tick() => {
                    let percent = self.probe.usage_percent().await?;
                    let sample = MetricSample::disk_usage(percent);
                    self.sink.publish(&sample, &self.context).await?;
                }
            }
        }
    }
}
