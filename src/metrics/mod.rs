//! CloudWatch metric names, units, and dimensions
//!
//! Single source of truth for the namespace, metric names, and dimension
//! names so the publisher and any consumer querying the metrics agree.

pub mod publisher;

pub use publisher::{CloudWatchPublisher, MetricSink};

use crate::context::BuildContext;

/// CloudWatch namespace for all buildwatch metrics
pub const NAMESPACE: &str = "DiskMetrics";

/// Dimension names attached to every datapoint
pub mod dimensions {
    pub const BUILD_ID: &str = "BuildId";
    pub const BUILD_NUMBER: &str = "BuildNumber";
    pub const PROJECT_NAME: &str = "ProjectName";
}

/// Metric names
pub mod names {
    pub const DISK_USAGE: &str = "DiskUsage";
}

/// Units
pub mod units {
    pub const PERCENT: &str = "Percent";
}

/// One datapoint, created fresh each loop iteration and discarded after
/// publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSample {
    pub name: &'static str,
    pub unit: &'static str,
    pub value: u8,
}

impl MetricSample {
    pub fn disk_usage(percent: u8) -> Self {
        Self {
            name: names::DISK_USAGE,
            unit: units::PERCENT,
            value: percent,
        }
    }

    /// Dimension name/value pairs for this sample under the given build.
    pub fn dimension_pairs(context: &BuildContext) -> [(&'static str, &str); 3] {
        [
            (dimensions::BUILD_ID, context.build_id.as_str()),
            (dimensions::BUILD_NUMBER, context.build_number.as_str()),
            (dimensions::PROJECT_NAME, context.project_name.as_str()),
        ]
    }
}
