use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetQuotaPath {
    pub quota_id: String,
}

#[derive(Debug, Clone)]
pub struct GetQuotaRequest {
    pub path: GetQuotaPath,
}
