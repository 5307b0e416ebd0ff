//! Metric publisher backed by CloudWatch PutMetricData
//!
//! The sampler loop talks to a [`MetricSink`]; production wires in
//! [`CloudWatchPublisher`], tests wire in a recorder. The publisher holds no
//! local state: one API call per sample, failures propagate to the loop.

use crate::context::BuildContext;
use crate::error::{BuildwatchError, Result};
use crate::metrics::{MetricSample, NAMESPACE};
use async_trait::async_trait;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::operation::RequestId;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};
use aws_sdk_cloudwatch::Client;
use tracing::info;

/// Destination for metric samples
#[async_trait]
pub trait MetricSink {
    async fn publish(&self, sample: &MetricSample, context: &BuildContext) -> Result<()>;
}

/// Publishes samples to CloudWatch under the `DiskMetrics` namespace
pub struct CloudWatchPublisher {
    client: Client,
}

impl CloudWatchPublisher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a publisher from the default AWS credential and region chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl MetricSink for CloudWatchPublisher {
    async fn publish(&self, sample: &MetricSample, context: &BuildContext) -> Result<()> {
        let mut dimensions = Vec::with_capacity(3);
        for (name, value) in MetricSample::dimension_pairs(context) {
            let dimension = Dimension::builder()
                .name(name)
                .value(value)
                .build();
            dimensions.push(dimension);
        }

        let datum = MetricDatum::builder()
            .metric_name(sample.name)
            .unit(StandardUnit::from(sample.unit))
            .value(f64::from(sample.value))
            .set_dimensions(Some(dimensions))
            .build();

        let response = self
            .client
            .put_metric_data()
            .namespace(NAMESPACE)
            .metric_data(datum)
            .send()
            .await
            .map_err(|e| BuildwatchError::Publish(DisplayErrorContext(&e).to_string()))?;

        info!(
            "Published {}={}{} (request id: {})",
            sample.name,
            sample.value,
            sample.unit,
            response.request_id().unwrap_or("unknown")
        );

        Ok(())
    }
}
