use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTrainingJobPath {
    pub training_job_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteTrainingJobRequest {
    pub path: DeleteTrainingJobPath,
}
