use std::collections::BTreeMap;

use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::training_job::types::{
    CodeDir, ComputingResource, ExperimentConfig, HyperParameter, InputChannel, Metric,
    OutputChannel, Scheduler, StatusTransition, TrainingJobInstance, TrainingJobStatus, UserVpc,
};
use crate::types::{Label, RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetTrainingJobResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_dir: Option<CodeDir>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computing_resource: Option<ComputingResource>,
    /// Seconds spent in the Running state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_modified_time: Option<String>,
    #[serde(default)]
    pub hyper_parameters: Vec<HyperParameter>,
    #[serde(default)]
    pub input_channels: Vec<InputChannel>,
    #[serde(default)]
    pub instances: Vec<TrainingJobInstance>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub latest_metrics: Vec<Metric>,
    #[serde(default)]
    pub output_channels: Vec<OutputChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<Scheduler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrainingJobStatus>,
    #[serde(default)]
    pub status_transitions: Vec<StatusTransition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_vpc: Option<UserVpc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl WireModel for GetTrainingJobResponseBody {
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
        for instance in &self.instances {
            instance.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        for metric in &self.latest_metrics {
            metric.validate()?;
        }
        for channel in &self.output_channels {
            channel.validate()?;
        }
        if let Some(scheduler) = &self.scheduler {
            scheduler.validate()?;
        }
        for transition in &self.status_transitions {
            transition.validate()?;
        }
        if let Some(vpc) = &self.user_vpc {
            vpc.validate()?;
        }
        Ok(())
    }
}

pub type GetTrainingJobResponse = ResponseEnvelope<GetTrainingJobResponseBody>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_job::types::TrainingJobStatusKnown;

    #[test]
    fn deserializes_get_training_job_payload() {
        let json = r#"
        {
          "TrainingJobId": "train-8d022f69vxxx",
          "TrainingJobName": "qwen-sft-nightly",
          "Status": "Running",
          "AlgorithmName": "pytorch-train",
          "AlgorithmProvider": "Community",
          "AlgorithmVersion": "v1.2.0",
          "ComputingResource": {
            "EcsCount": 2,
            "EcsSpec": "ecs.gn7i-c32g1.8xlarge",
            "InstanceSpec": {
              "CPU": "32vCPU",
              "GPU": "1",
              "GPUType": "A10",
              "Memory": "188Gi"
            }
          },
          "Instances": [
            {"Id": "instance-0", "Role": "master", "Status": "Running"},
            {"Id": "instance-1", "Role": "worker", "Status": "Running"}
          ],
          "StatusTransitions": [
            {"Status": "Creating", "StartTime": "2024-11-02T08:15:00Z", "EndTime": "2024-11-02T08:15:21Z"},
            {"Status": "Running", "StartTime": "2024-11-02T08:15:21Z"}
          ],
          "LatestMetrics": [
            {"Name": "loss", "Timestamp": "2024-11-02T09:00:00Z", "Value": 0.42}
          ],
          "GmtCreateTime": "2024-11-02T08:15:00Z",
          "WorkspaceId": "ws-12345",
          "RequestId": "2C44D4B5-8B26-5AAC-9B27-A9DD50FEC8C6"
        }
        "#;

        let parsed: GetTrainingJobResponseBody =
            serde_json::from_str(json).expect("deserialize get-training-job payload");
        assert_eq!(
            parsed.status,
            Some(TrainingJobStatus::Known(TrainingJobStatusKnown::Running))
        );
        assert_eq!(parsed.instances.len(), 2);
        assert_eq!(parsed.instances[1].role.as_deref(), Some("worker"));
        assert_eq!(parsed.status_transitions.len(), 2);
        assert_eq!(
            parsed
                .computing_resource
                .as_ref()
                .and_then(|r| r.instance_spec.as_ref())
                .and_then(|s| s.gpu_type.as_deref()),
            Some("A10")
        );
        assert_eq!(parsed.latest_metrics[0].value, Some(0.42));
        // Absent sequence keys reset to empty.
        assert!(parsed.hyper_parameters.is_empty());
        assert!(parsed.labels.is_empty());
    }
}
