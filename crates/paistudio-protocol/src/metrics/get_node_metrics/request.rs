use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetNodeMetricsPath {
    pub resource_group_id: String,
    /// "GpuCoreUsage", "GpuMemoryUsage", "CpuUsage" or "MemoryUsage".
    pub metric_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetNodeMetricsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Sampling step in seconds; defaults to 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_step: Option<i64>,
    #[serde(rename = "GPUType", skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
    /// Include per-device GPU metrics in the reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl WireModel for GetNodeMetricsQuery {}

#[derive(Debug, Clone)]
pub struct GetNodeMetricsRequest {
    pub path: GetNodeMetricsPath,
    pub query: GetNodeMetricsQuery,
}
