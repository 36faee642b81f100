use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::metrics::types::NodeMetrics;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetNodeMetricsResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<String>,
    #[serde(default)]
    pub nodes_metrics: Vec<NodeMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

impl WireModel for GetNodeMetricsResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for node in &self.nodes_metrics {
            node.validate()?;
        }
        Ok(())
    }
}

pub type GetNodeMetricsResponse = ResponseEnvelope<GetNodeMetricsResponseBody>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_verbose_node_metrics_payload() {
        let json = r#"
        {
          "MetricType": "GpuCoreUsage",
          "NodesMetrics": [
            {
              "NodeID": "node-0",
              "GPUType": "A100",
              "GPUInfo": {"count": 8, "type": "A100-SXM4-80GB"},
              "GPUMetrics": [
                {"Index": 0, "Model": "A100", "Status": 1, "UsageRate": 0.75},
                {"Index": 1, "Model": "A100", "Status": 0, "UsageRate": 0.0}
              ],
              "Metrics": [
                {"Timestamp": "2024-11-02T09:00:00Z", "Value": 61.5}
              ]
            }
          ],
          "RequestId": "0F72DD4C-9C26-51FD-8F4A-1D2C63D9BBD3"
        }
        "#;

        let parsed: GetNodeMetricsResponseBody =
            serde_json::from_str(json).expect("deserialize node metrics");
        let node = &parsed.nodes_metrics[0];
        assert_eq!(node.node_id.as_deref(), Some("node-0"));
        assert_eq!(node.gpu_info.as_ref().and_then(|i| i.count), Some(8));
        assert_eq!(node.gpu_metrics.len(), 2);
        assert_eq!(node.gpu_metrics[0].usage_rate, Some(0.75));
        assert_eq!(node.gpu_metrics[1].status, Some(0));
    }
}
