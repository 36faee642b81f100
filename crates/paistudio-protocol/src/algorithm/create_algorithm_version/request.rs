use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::algorithm::types::AlgorithmSpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAlgorithmVersionPath {
    pub algorithm_id: String,
    /// Semantic version string, e.g. "v1.2.0".
    pub algorithm_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAlgorithmVersionRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_spec: Option<AlgorithmSpec>,
}

impl WireModel for CreateAlgorithmVersionRequestBody {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(spec) = &self.algorithm_spec {
            spec.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CreateAlgorithmVersionRequest {
    pub path: CreateAlgorithmVersionPath,
    pub body: CreateAlgorithmVersionRequestBody,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::types::{ChannelDefinition, HyperParameterDefinition};
    use crate::training_job::types::CodeDir;
    use serde_json::json;

    #[test]
    fn nested_spec_round_trips_through_the_wire_map() {
        let body = CreateAlgorithmVersionRequestBody {
            algorithm_spec: Some(AlgorithmSpec {
                code_dir: Some(CodeDir {
                    location_type: Some("oss".to_string()),
                    location_value: None,
                }),
                command: vec!["python".to_string(), "train.py".to_string()],
                hyper_parameters: vec![HyperParameterDefinition {
                    name: Some("learning_rate".to_string()),
                    default_value: Some("0.001".to_string()),
                    required: Some(true),
                    r#type: Some("Float".to_string()),
                    ..Default::default()
                }],
                image: Some("registry.cn-hangzhou.aliyuncs.com/pai/pytorch:2.1".to_string()),
                input_channels: vec![ChannelDefinition {
                    name: Some("train".to_string()),
                    required: Some(true),
                    supported_channel_types: vec!["dataset".to_string()],
                    ..Default::default()
                }],
                job_type: Some("PyTorchJob".to_string()),
                supports_distributed_training: Some(true),
                ..Default::default()
            }),
        };

        let map = body.to_map().expect("to_map");
        let spec = map["AlgorithmSpec"].as_object().expect("spec object");
        assert_eq!(spec["Command"], json!(["python", "train.py"]));
        assert_eq!(
            spec["HyperParameters"][0]["Name"],
            json!("learning_rate")
        );
        assert_eq!(spec["InputChannels"][0]["SupportedChannelTypes"], json!(["dataset"]));
        // Unset sequence fields still appear as empty arrays.
        assert_eq!(spec["MetricDefinitions"], json!([]));

        let back = CreateAlgorithmVersionRequestBody::from_map(map).expect("from_map");
        assert_eq!(back, body);
    }
}
