use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::training_job::types::CodeDir;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Algorithm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl WireModel for Algorithm {}

/// How the platform schedules instances for jobs created from this
/// algorithm version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ComputeResourcePolicy {
    /// "default" or "spot-first".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}

impl WireModel for ComputeResourcePolicy {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct HyperParameterDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Documentation-level flag; presence is not enforced client-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// "String", "Int", "Float" or "Bool".
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl WireModel for HyperParameterDefinition {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// "dataset" and/or "modelcard".
    #[serde(default)]
    pub supported_channel_types: Vec<String>,
}

impl WireModel for ChannelDefinition {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Applied line-by-line to instance stdout; first capture group is the
    /// metric value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl WireModel for MetricDefinition {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ProgressDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl WireModel for ProgressDefinition {}

/// Everything the platform needs to turn an algorithm version into a
/// runnable training job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_dir: Option<CodeDir>,
    #[serde(default)]
    pub command: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_resource: Option<ComputeResourcePolicy>,
    #[serde(default)]
    pub hyper_parameters: Vec<HyperParameterDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub input_channels: Vec<ChannelDefinition>,
    /// "PyTorchJob", "TFJob", "XGBoostJob" or "MPIJob".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default)]
    pub metric_definitions: Vec<MetricDefinition>,
    #[serde(default)]
    pub output_channels: Vec<ChannelDefinition>,
    #[serde(default)]
    pub progress_definitions: Vec<ProgressDefinition>,
    #[serde(default)]
    pub supported_instance_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_distributed_training: Option<bool>,
}

impl WireModel for AlgorithmSpec {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(code_dir) = &self.code_dir {
            code_dir.validate()?;
        }
        if let Some(resource) = &self.compute_resource {
            resource.validate()?;
        }
        for parameter in &self.hyper_parameters {
            parameter.validate()?;
        }
        for channel in &self.input_channels {
            channel.validate()?;
        }
        for metric in &self.metric_definitions {
            metric.validate()?;
        }
        for channel in &self.output_channels {
            channel.validate()?;
        }
        for progress in &self.progress_definitions {
            progress.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmVersion {
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
}

impl WireModel for AlgorithmVersion {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(spec) = &self.algorithm_spec {
            spec.validate()?;
        }
        Ok(())
    }
}
