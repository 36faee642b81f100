use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTrainingJobLogsPath {
    pub training_job_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrainingJobLogsQuery {
    /// RFC 3339; lines before this instant are excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Instance id, e.g. "instance-0"; defaults to the master.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
}

impl WireModel for ListTrainingJobLogsQuery {}

#[derive(Debug, Clone)]
pub struct ListTrainingJobLogsRequest {
    pub path: ListTrainingJobLogsPath,
    pub query: ListTrainingJobLogsQuery,
}
