use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::algorithm::types::AlgorithmSpec;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetAlgorithmVersionResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_spec: Option<AlgorithmSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

impl WireModel for GetAlgorithmVersionResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(spec) = &self.algorithm_spec {
            spec.validate()?;
        }
        Ok(())
    }
}

pub type GetAlgorithmVersionResponse = ResponseEnvelope<GetAlgorithmVersionResponseBody>;
