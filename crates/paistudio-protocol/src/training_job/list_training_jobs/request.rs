use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

use crate::training_job::types::TrainingJobStatus;
use crate::types::SortOrder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrainingJobsQuery {
    /// 1-based; defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// Defaults to 10; allowed range is 1..=100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// "GmtCreateTime" or "TrainingJobName".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrainingJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl WireModel for ListTrainingJobsQuery {}

#[derive(Debug, Clone, Default)]
pub struct ListTrainingJobsRequest {
    pub query: ListTrainingJobsQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_map_uses_pascal_case_keys_and_omits_unset_filters() {
        let query = ListTrainingJobsQuery {
            page_number: Some(2),
            page_size: Some(50),
            order: Some(SortOrder::Desc),
            sort_by: Some("GmtCreateTime".to_string()),
            workspace_id: Some("ws-12345".to_string()),
            ..Default::default()
        };

        let map = query.to_map().expect("to_map");
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["PageNumber", "PageSize", "Order", "SortBy", "WorkspaceId"]
        );
        assert_eq!(map["Order"], serde_json::json!("DESC"));
    }
}
