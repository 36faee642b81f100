use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::algorithm::types::Algorithm;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListAlgorithmsResponseBody {
    #[serde(default)]
    pub algorithms: Vec<Algorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl WireModel for ListAlgorithmsResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for algorithm in &self.algorithms {
            algorithm.validate()?;
        }
        Ok(())
    }
}

pub type ListAlgorithmsResponse = ResponseEnvelope<ListAlgorithmsResponseBody>;
