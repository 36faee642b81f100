use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::quota::types::Quota;
use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListQuotasResponseBody {
    #[serde(default)]
    pub quotas: Vec<Quota>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl WireModel for ListQuotasResponseBody {
    fn validate(&self) -> Result<(), ValidateError> {
        for quota in &self.quotas {
            quota.validate()?;
        }
        Ok(())
    }
}

pub type ListQuotasResponse = ResponseEnvelope<ListQuotasResponseBody>;
