use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::component::types::Component;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListComponentsResponseBody {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl WireModel for ListComponentsResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for component in &self.components {
            component.validate()?;
        }
        Ok(())
    }
}

pub type ListComponentsResponse = ResponseEnvelope<ListComponentsResponseBody>;
