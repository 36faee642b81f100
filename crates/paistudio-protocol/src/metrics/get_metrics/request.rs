use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMetricsPath {
    pub resource_group_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricsQuery {
    /// JSON-encoded dimension filter, e.g. {"machineGroup": "mg-0198aaef"}.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// "CpuUsage", "GpuUsage", "MemoryUsage" or "DiskUsage".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    /// Aggregation period in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

impl WireModel for GetMetricsQuery {}

#[derive(Debug, Clone)]
pub struct GetMetricsRequest {
    pub path: GetMetricsPath,
    pub query: GetMetricsQuery,
}
