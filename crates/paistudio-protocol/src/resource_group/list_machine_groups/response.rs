use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::resource_group::types::MachineGroup;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListMachineGroupsResponseBody {
    #[serde(default)]
    pub machine_groups: Vec<MachineGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl WireModel for ListMachineGroupsResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for group in &self.machine_groups {
            group.validate()?;
        }
        Ok(())
    }
}

pub type ListMachineGroupsResponse = ResponseEnvelope<ListMachineGroupsResponseBody>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_group_key_keeps_the_remote_id_casing() {
        let json = r#"
        {
          "MachineGroups": [
            {
              "MachineGroupID": "mg-0198aaef",
              "EcsCount": 4,
              "EcsSpec": "ecs.gn7e-c16g1.4xlarge",
              "NodeSpec": {"CPU": "16vCPU", "GPU": "1", "GPUType": "A100", "Memory": "125Gi"},
              "PaymentType": "PrePaid",
              "Status": "Active"
            }
          ],
          "TotalCount": 1,
          "RequestId": "7E33CE2B-1D73-5A75-87F1-B3E94A2171F5"
        }
        "#;

        let parsed: ListMachineGroupsResponseBody =
            serde_json::from_str(json).expect("deserialize machine groups");
        let group = &parsed.machine_groups[0];
        assert_eq!(group.machine_group_id.as_deref(), Some("mg-0198aaef"));

        let map = group.to_map().expect("to_map");
        assert!(map.contains_key("MachineGroupID"));
        assert!(!map.contains_key("MachineGroupId"));
    }
}
