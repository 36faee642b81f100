use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// "Train", "Inference" or "Develop".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "SupportRDMA", skip_serializing_if = "Option::is_none")]
    pub support_rdma: Option<bool>,
}

impl WireModel for ResourceGroup {}

/// Per-node hardware of a machine group. Quantities are strings on the wire
/// ("96vCPU", "8", "768Gi").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeSpec {
    #[serde(rename = "CPU", skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(rename = "GPU", skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    #[serde(rename = "GPUType", skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

impl WireModel for NodeSpec {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MachineGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecs_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecs_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_expired_time: Option<String>,
    /// The remote API spells this key with a trailing "ID".
    #[serde(rename = "MachineGroupID", skip_serializing_if = "Option::is_none")]
    pub machine_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_spec: Option<NodeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_duration: Option<String>,
    /// "Week", "Month" or "Year".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_duration_unit: Option<String>,
    /// "PrePaid" or "PostPaid".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl WireModel for MachineGroup {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(spec) = &self.node_spec {
            spec.validate()?;
        }
        Ok(())
    }
}
