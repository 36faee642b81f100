use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

use crate::types::SortOrder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListQuotasQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_type: Option<String>,
    /// "GmtCreateTime" or "QuotaName".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Comma-separated status filter, e.g. "Available,Updating".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<String>,
}

impl WireModel for ListQuotasQuery {}

#[derive(Debug, Clone, Default)]
pub struct ListQuotasRequest {
    pub query: ListQuotasQuery,
}
