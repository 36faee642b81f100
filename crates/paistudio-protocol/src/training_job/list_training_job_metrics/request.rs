use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTrainingJobMetricsPath {
    pub training_job_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrainingJobMetricsQuery {
    /// Comma-separated metric names, e.g. "loss,accuracy".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Sampling step in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_step: Option<i64>,
}

impl WireModel for ListTrainingJobMetricsQuery {}

#[derive(Debug, Clone)]
pub struct ListTrainingJobMetricsRequest {
    pub path: ListTrainingJobMetricsPath,
    pub query: ListTrainingJobMetricsQuery,
}
