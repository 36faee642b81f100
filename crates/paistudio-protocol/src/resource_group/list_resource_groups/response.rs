use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::resource_group::types::ResourceGroup;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListResourceGroupsResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(default)]
    pub resource_groups: Vec<ResourceGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl WireModel for ListResourceGroupsResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for group in &self.resource_groups {
            group.validate()?;
        }
        Ok(())
    }
}

pub type ListResourceGroupsResponse = ResponseEnvelope<ListResourceGroupsResponseBody>;
