use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::algorithm::types::AlgorithmVersion;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListAlgorithmVersionsResponseBody {
    #[serde(default)]
    pub algorithm_versions: Vec<AlgorithmVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl WireModel for ListAlgorithmVersionsResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for version in &self.algorithm_versions {
            version.validate()?;
        }
        Ok(())
    }
}

pub type ListAlgorithmVersionsResponse = ResponseEnvelope<ListAlgorithmVersionsResponseBody>;
