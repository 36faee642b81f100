//! Cross-cutting wire-contract tests over the real API models: round-trip
//! identity, tolerance for partial/unknown/empty input, ordered list
//! reconstruction and key-casing fidelity.

use paistudio_protocol::metrics::types::{GpuInfo, NodeGpuMetric};
use paistudio_protocol::quota::get_quota::GetQuotaResponseBody;
use paistudio_protocol::quota::types::{QuotaStatus, QuotaStatusKnown};
use paistudio_protocol::training_job::create_training_job::CreateTrainingJobRequestBody;
use paistudio_protocol::training_job::get_training_job::GetTrainingJobResponseBody;
use paistudio_protocol::training_job::list_training_jobs::ListTrainingJobsResponseBody;
use paistudio_protocol::training_job::types::{
    ComputingResource, HyperParameter, InputChannel, InstanceSpec, TrainingJobStatus,
    TrainingJobStatusKnown,
};
use paistudio_protocol::types::{Label, ResponseEnvelope};
use paistudio_wire::{WireMap, WireModel};
use serde_json::json;

fn sample_body() -> CreateTrainingJobRequestBody {
    CreateTrainingJobRequestBody {
        algorithm_name: Some("pytorch-train".to_string()),
        algorithm_provider: Some("Community".to_string()),
        algorithm_version: Some("v1.2.0".to_string()),
        computing_resource: Some(ComputingResource {
            instance_count: Some(2),
            instance_spec: Some(InstanceSpec {
                cpu: Some("32vCPU".to_string()),
                gpu: Some("1".to_string()),
                gpu_type: Some("A10".to_string()),
                memory: Some("188Gi".to_string()),
                shared_memory: None,
            }),
            ..Default::default()
        }),
        hyper_parameters: vec![
            HyperParameter {
                name: Some("epochs".to_string()),
                value: Some("3".to_string()),
            },
            HyperParameter {
                name: Some("learning_rate".to_string()),
                value: Some("2e-5".to_string()),
            },
        ],
        input_channels: vec![InputChannel {
            dataset_id: Some("d-a52b7xjqxn".to_string()),
            name: Some("train".to_string()),
            input_uri: None,
        }],
        labels: vec![Label {
            key: Some("team".to_string()),
            value: Some("nlp".to_string()),
        }],
        training_job_name: Some("qwen-sft-nightly".to_string()),
        workspace_id: Some("ws-12345".to_string()),
        ..Default::default()
    }
}

#[test]
fn fully_populated_request_body_round_trips() {
    let body = sample_body();
    let map = body.to_map().expect("to_map");
    let back = CreateTrainingJobRequestBody::from_map(map).expect("from_map");
    assert_eq!(back, body);
}

#[test]
fn missing_keys_never_error_and_stay_unset() {
    let mut map = WireMap::new();
    map.insert("TrainingJobName".to_string(), json!("partial"));
    let body = CreateTrainingJobRequestBody::from_map(map).expect("partial input");
    assert_eq!(body.training_job_name.as_deref(), Some("partial"));
    assert_eq!(body.algorithm_name, None);
    assert_eq!(body.computing_resource, None);
    assert!(body.hyper_parameters.is_empty());
    assert!(body.labels.is_empty());
}

#[test]
fn undeclared_keys_are_silently_ignored() {
    let mut map = WireMap::new();
    map.insert("QuotaId".to_string(), json!("quota-6aoyxxzn2fnd"));
    map.insert("SomeFutureField".to_string(), json!({"a": [1, 2]}));
    map.insert("AnotherOne".to_string(), json!(null));
    let body = GetQuotaResponseBody::from_map(map).expect("unknown keys");
    assert_eq!(body.quota_id.as_deref(), Some("quota-6aoyxxzn2fnd"));
}

#[test]
fn empty_and_absent_maps_decode_to_defaults() {
    let from_empty = GetTrainingJobResponseBody::from_map(WireMap::new()).expect("empty");
    assert_eq!(from_empty, GetTrainingJobResponseBody::default());
    let from_none = GetTrainingJobResponseBody::from_map_opt(None).expect("absent");
    assert_eq!(from_none, GetTrainingJobResponseBody::default());
}

#[test]
fn model_list_field_is_rebuilt_in_source_order() {
    let mut map = WireMap::new();
    map.insert(
        "TrainingJobs".to_string(),
        json!([
            {"TrainingJobId": "train-1", "Status": "Succeeded"},
            {"TrainingJobId": "train-2", "Status": "Running"},
            {"TrainingJobId": "train-3", "Status": "Failed"}
        ]),
    );
    map.insert("TotalCount".to_string(), json!(3));

    let body = ListTrainingJobsResponseBody::from_map(map).expect("from_map");
    assert_eq!(body.total_count, Some(3));
    let ids: Vec<&str> = body
        .training_jobs
        .iter()
        .filter_map(|job| job.training_job_id.as_deref())
        .collect();
    assert_eq!(ids, ["train-1", "train-2", "train-3"]);
    assert_eq!(
        body.training_jobs[1].status,
        Some(TrainingJobStatus::Known(TrainingJobStatusKnown::Running))
    );
}

#[test]
fn node_gpu_metric_emits_exactly_the_declared_pascal_keys() {
    let metric = NodeGpuMetric {
        index: Some(0),
        model: Some("A100".to_string()),
        status: Some(1),
        usage_rate: Some(0.75),
    };

    let map = metric.to_map().expect("to_map");
    assert_eq!(
        serde_json::Value::Object(map.clone()),
        json!({"Index": 0, "Model": "A100", "Status": 1, "UsageRate": 0.75})
    );

    let back = NodeGpuMetric::from_map(map).expect("from_map");
    assert_eq!(back, metric);
}

#[test]
fn gpu_info_keeps_its_lower_camel_keys() {
    let info = GpuInfo {
        count: Some(8),
        r#type: Some("A100-SXM4-80GB".to_string()),
    };

    let map = info.to_map().expect("to_map");
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["count", "type"]);
}

#[test]
fn response_envelope_uses_transport_casing_and_recurses_validation() {
    let envelope = ResponseEnvelope {
        headers: None,
        status_code: Some(200),
        body: Some(GetQuotaResponseBody {
            quota_id: Some("quota-6aoyxxzn2fnd".to_string()),
            status: Some(QuotaStatus::Known(QuotaStatusKnown::Available)),
            ..Default::default()
        }),
    };

    envelope.validate().expect("validate");

    let map = envelope.to_map().expect("to_map");
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["statusCode", "body"]);
    assert_eq!(map["body"]["QuotaId"], json!("quota-6aoyxxzn2fnd"));

    let back: ResponseEnvelope<GetQuotaResponseBody> =
        ResponseEnvelope::from_map(map).expect("from_map");
    assert_eq!(back, envelope);
}
