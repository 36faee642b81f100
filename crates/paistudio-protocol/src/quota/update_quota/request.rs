use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::quota::types::QuotaDetails;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuotaPath {
    pub quota_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateQuotaRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_details: Option<QuotaDetails>,
}

impl WireModel for UpdateQuotaRequestBody {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(details) = &self.quota_details {
            details.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UpdateQuotaRequest {
    pub path: UpdateQuotaPath,
    pub body: UpdateQuotaRequestBody,
}
