use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StopTrainingJobResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_id: Option<String>,
}

impl WireModel for StopTrainingJobResponseBody {}

pub type StopTrainingJobResponse = ResponseEnvelope<StopTrainingJobResponseBody>;
