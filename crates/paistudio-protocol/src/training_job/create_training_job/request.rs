use std::collections::BTreeMap;

use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::training_job::types::{
    CodeDir, ComputingResource, ExperimentConfig, HyperParameter, InputChannel, OutputChannel,
    Scheduler, UserVpc,
};
use crate::types::Label;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrainingJobRequestBody {
    /// Required together with the provider and version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    /// "Community", "Official" or a workspace id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_dir: Option<CodeDir>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computing_resource: Option<ComputingResource>,
    /// Environment variables injected into every instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
    #[serde(default)]
    pub hyper_parameters: Vec<HyperParameter>,
    #[serde(default)]
    pub input_channels: Vec<InputChannel>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub output_channels: Vec<OutputChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default)]
    pub python_requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<Scheduler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_description: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_vpc: Option<UserVpc>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl WireModel for CreateTrainingJobRequestBody {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(code_dir) = &self.code_dir {
            code_dir.validate()?;
        }
        if let Some(resource) = &self.computing_resource {
            resource.validate()?;
        }
        if let Some(experiment) = &self.experiment_config {
            experiment.validate()?;
        }
        for parameter in &self.hyper_parameters {
            parameter.validate()?;
        }
        for channel in &self.input_channels {
            channel.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        for channel in &self.output_channels {
            channel.validate()?;
        }
        if let Some(scheduler) = &self.scheduler {
            scheduler.validate()?;
        }
        if let Some(vpc) = &self.user_vpc {
            vpc.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateTrainingJobRequest {
    pub body: CreateTrainingJobRequestBody,
}
