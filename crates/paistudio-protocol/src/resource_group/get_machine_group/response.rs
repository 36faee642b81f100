use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::resource_group::types::NodeSpec;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetMachineGroupResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecs_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecs_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_expired_time: Option<String>,
    #[serde(rename = "MachineGroupID", skip_serializing_if = "Option::is_none")]
    pub machine_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_spec: Option<NodeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_duration_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl WireModel for GetMachineGroupResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(spec) = &self.node_spec {
            spec.validate()?;
        }
        Ok(())
    }
}

pub type GetMachineGroupResponse = ResponseEnvelope<GetMachineGroupResponseBody>;
