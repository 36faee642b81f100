use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::training_job::types::Metric;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrainingJobMetricsResponseBody {
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

impl WireModel for ListTrainingJobMetricsResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for metric in &self.metrics {
            metric.validate()?;
        }
        Ok(())
    }
}

pub type ListTrainingJobMetricsResponse = ResponseEnvelope<ListTrainingJobMetricsResponseBody>;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn deserializes_metric_series_payload() {
        let json = r#"
        {
          "Metrics": [
            {"Name": "loss", "Timestamp": "2024-11-02T09:00:00Z", "Value": 0.42},
            {"Name": "loss", "Timestamp": "2024-11-02T09:05:00Z", "Value": 0.37}
          ],
          "RequestId": "F620FF4A-6A76-5295-9D5A-9A8F3C271A88"
        }
        "#;

        let parsed: ListTrainingJobMetricsResponseBody =
            serde_json::from_str(json).expect("deserialize metric series");
        assert_eq!(parsed.metrics.len(), 2);
        assert_eq!(
            parsed.metrics[0].timestamp,
            Some(datetime!(2024-11-02 09:00:00 UTC))
        );
        assert_eq!(parsed.metrics[1].value, Some(0.37));
    }
}
