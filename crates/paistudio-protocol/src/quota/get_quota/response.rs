use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::quota::types::{QuotaDetails, QuotaStatus};
use crate::types::{Label, RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetQuotaResponseBody {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(default)]
    pub resource_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuotaStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl WireModel for GetQuotaResponseBody {
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

pub type GetQuotaResponse = ResponseEnvelope<GetQuotaResponseBody>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quota::types::{QuotaStatusKnown, ResourceSpec};

    #[test]
    fn deserializes_quota_payload_with_upper_gpu_keys() {
        let json = r#"
        {
          "QuotaId": "quota-6aoyxxzn2fnd",
          "QuotaName": "ml-prod",
          "QuotaType": "General",
          "Status": "Available",
          "QuotaDetails": {
            "ActualMinQuota": {"CPU": "512vCPU", "GPU": "32", "GPUType": "A100", "Memory": "2048Gi"},
            "DesiredMinQuota": {"CPU": "1024vCPU", "GPU": "64", "GPUType": "A100", "Memory": "4096Gi"},
            "QueueInfo": {"PendingWorkloads": 3, "RunningWorkloads": 12, "QueueStrategy": "Backfill"}
          },
          "ResourceGroupIds": ["rg-a", "rg-b"],
          "RequestId": "B0E42587-6A29-5BD6-8B32-6B164FBE637D"
        }
        "#;

        let parsed: GetQuotaResponseBody =
            serde_json::from_str(json).expect("deserialize quota payload");
        assert_eq!(
            parsed.status,
            Some(QuotaStatus::Known(QuotaStatusKnown::Available))
        );
        let details = parsed.quota_details.expect("details");
        assert_eq!(
            details.actual_min_quota,
            Some(ResourceSpec {
                cpu: Some("512vCPU".to_string()),
                gpu: Some("32".to_string()),
                gpu_type: Some("A100".to_string()),
                memory: Some("2048Gi".to_string()),
            })
        );
        assert_eq!(
            details.queue_info.and_then(|q| q.pending_workloads),
            Some(3)
        );
        assert_eq!(parsed.resource_group_ids, ["rg-a", "rg-b"]);
    }

    #[test]
    fn resource_spec_map_uses_the_declared_upper_case_keys() {
        let spec = ResourceSpec {
            cpu: Some("8vCPU".to_string()),
            gpu: Some("1".to_string()),
            gpu_type: Some("V100".to_string()),
            memory: Some("64Gi".to_string()),
        };
        let map = spec.to_map().expect("to_map");
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["CPU", "GPU", "GPUType", "Memory"]);
    }
}
