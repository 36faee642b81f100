use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::types::Label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuotaStatusKnown {
    Creating,
    Available,
    Updating,
    Deleting,
    Abnormal,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuotaStatus {
    Known(QuotaStatusKnown),
    Custom(String),
}

/// Aggregate resource amounts. Quantities are strings on the wire
/// ("1024vCPU", "64", "4096Gi").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceSpec {
    #[serde(rename = "CPU", skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(rename = "GPU", skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    #[serde(rename = "GPUType", skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

impl WireModel for ResourceSpec {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AllocateStrategy {
    /// "FIFO" or "Fair".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preemptible: Option<bool>,
}

impl WireModel for AllocateStrategy {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct QueueInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_workloads: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_workloads: Option<i64>,
    /// "Block" or "Backfill".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_strategy: Option<String>,
}

impl WireModel for QueueInfo {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct QuotaDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_min_quota: Option<ResourceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocate_strategy: Option<AllocateStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_min_quota: Option<ResourceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_quota: Option<ResourceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_info: Option<QueueInfo>,
}

impl WireModel for QuotaDetails {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(spec) = &self.actual_min_quota {
            spec.validate()?;
        }
        if let Some(strategy) = &self.allocate_strategy {
            strategy.validate()?;
        }
        if let Some(spec) = &self.desired_min_quota {
            spec.validate()?;
        }
        if let Some(spec) = &self.max_quota {
            spec.validate()?;
        }
        if let Some(queue) = &self.queue_info {
            queue.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Quota {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_modified_time: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_details: Option<QuotaDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_name: Option<String>,
    /// "General" or "Lingjun".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_type: Option<String>,
    #[serde(default)]
    pub resource_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuotaStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl WireModel for Quota {
    fn validate(&self) -> Result<(), ValidateError> {
        for label in &self.labels {
            label.validate()?;
        }
        if let Some(details) = &self.quota_details {
            details.validate()?;
        }
        Ok(())
    }
}
