use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrainingJobLogsResponseBody {
    /// Raw log lines, oldest first.
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl WireModel for ListTrainingJobLogsResponseBody {}

pub type ListTrainingJobLogsResponse = ResponseEnvelope<ListTrainingJobLogsResponseBody>;
