use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Installed-GPU summary. This one shape uses lower-camel keys on the wire;
/// keep them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GpuInfo {
    #[serde(rename = "count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl WireModel for GpuInfo {}

/// Snapshot of a single GPU device on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeGpuMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// 0 idle, 1 busy, 2 unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_rate: Option<f64>,
}

impl WireModel for NodeGpuMetric {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDatapoint {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub timestamp: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl WireModel for MetricDatapoint {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeMetrics {
    #[serde(rename = "NodeID", skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(rename = "GPUType", skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
    #[serde(rename = "GPUInfo", skip_serializing_if = "Option::is_none")]
    pub gpu_info: Option<GpuInfo>,
    /// Only populated for GPU metric types with Verbose set.
    #[serde(rename = "GPUMetrics", default)]
    pub gpu_metrics: Vec<NodeGpuMetric>,
    #[serde(default)]
    pub metrics: Vec<MetricDatapoint>,
}

impl WireModel for NodeMetrics {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(info) = &self.gpu_info {
            info.validate()?;
        }
        for metric in &self.gpu_metrics {
            metric.validate()?;
        }
        for datapoint in &self.metrics {
            datapoint.validate()?;
        }
        Ok(())
    }
}

/// Aggregated datapoint of a resource-group level series. Timestamps are
/// epoch milliseconds here, unlike the RFC 3339 node series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Datapoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl WireModel for Datapoint {}
