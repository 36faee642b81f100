use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{JsonObject, Label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingJobStatusKnown {
    Creating,
    Created,
    Initializing,
    Submitted,
    Running,
    Succeeded,
    Failed,
    Terminating,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrainingJobStatus {
    Known(TrainingJobStatusKnown),
    Custom(String),
}

/// Per-instance resource request. Quantities are strings on the wire
/// ("8vCPU", "32Gi", "1").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceSpec {
    #[serde(rename = "CPU", skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(rename = "GPU", skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    #[serde(rename = "GPUType", skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_memory: Option<String>,
}

impl WireModel for InstanceSpec {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SpotSpec {
    /// "SpotWithPriceLimit" or "SpotAsPriceGo".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_discount_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_price_limit: Option<f64>,
}

impl WireModel for SpotSpec {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ComputingResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecs_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecs_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_spec: Option<InstanceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_spec: Option<SpotSpec>,
}

impl WireModel for ComputingResource {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(spec) = &self.instance_spec {
            spec.validate()?;
        }
        if let Some(spot) = &self.spot_spec {
            spot.validate()?;
        }
        Ok(())
    }
}

/// Source-code location handed to the training container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CodeDir {
    /// "oss", "nas" or "git".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_value: Option<JsonObject>,
}

impl WireModel for CodeDir {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct HyperParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl WireModel for HyperParameter {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct InputChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl WireModel for InputChannel {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct OutputChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_uri: Option<String>,
}

impl WireModel for OutputChannel {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UserVpc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_route: Option<String>,
    #[serde(rename = "ExtendedCIDRs", default)]
    pub extended_cidrs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

impl WireModel for UserVpc {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Scheduler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_running_time_in_seconds: Option<i64>,
}

impl WireModel for Scheduler {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ExperimentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_id: Option<String>,
}

impl WireModel for ExperimentConfig {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StatusTransition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrainingJobStatus>,
    /// RFC 3339 strings, as delivered by the remote API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_message: Option<String>,
}

impl WireModel for StatusTransition {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TrainingJobInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// "master" or "worker".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrainingJobStatus>,
}

impl WireModel for TrainingJobInstance {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Metric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub timestamp: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl WireModel for Metric {}

/// List-item shape; the get-operation body carries the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TrainingJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computing_resource: Option<ComputingResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_modified_time: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrainingJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl WireModel for TrainingJob {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(resource) = &self.computing_resource {
            resource.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        Ok(())
    }
}
