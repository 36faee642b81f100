use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::metrics::types::Datapoint;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricsResponseBody {
    #[serde(default)]
    pub datapoints: Vec<Datapoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// This endpoint spells the key lower-camel, unlike the rest of the API.
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

impl WireModel for GetMetricsResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for datapoint in &self.datapoints {
            datapoint.validate()?;
        }
        Ok(())
    }
}

pub type GetMetricsResponse = ResponseEnvelope<GetMetricsResponseBody>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_key_is_lower_camel_for_this_body() {
        let body = GetMetricsResponseBody {
            datapoints: vec![Datapoint {
                average: Some(0.62),
                timestamp: Some(1_730_538_000_000),
                ..Default::default()
            }],
            period: Some("300".to_string()),
            request_id: Some("0ED8D006-F706-4D23-88ED-E11ED28DCAC0".to_string()),
        };

        let map = body.to_map().expect("to_map");
        assert!(map.contains_key("requestId"));
        assert!(!map.contains_key("RequestId"));

        let back = GetMetricsResponseBody::from_map(map).expect("from_map");
        assert_eq!(back, body);
    }
}
