use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteQuotaPath {
    pub quota_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteQuotaRequest {
    pub path: DeleteQuotaPath,
}
