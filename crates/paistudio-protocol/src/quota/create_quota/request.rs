use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::quota::types::QuotaDetails;
use crate::types::Label;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateQuotaRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_details: Option<QuotaDetails>,
    /// Required; unique per account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_type: Option<String>,
    #[serde(default)]
    pub resource_group_ids: Vec<String>,
}

impl WireModel for CreateQuotaRequestBody {
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

#[derive(Debug, Clone, Default)]
pub struct CreateQuotaRequest {
    pub body: CreateQuotaRequestBody,
}
