use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::training_job::types::TrainingJob;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrainingJobsResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub training_jobs: Vec<TrainingJob>,
}

impl WireModel for ListTrainingJobsResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for job in &self.training_jobs {
            job.validate()?;
        }
        Ok(())
    }
}

pub type ListTrainingJobsResponse = ResponseEnvelope<ListTrainingJobsResponseBody>;
