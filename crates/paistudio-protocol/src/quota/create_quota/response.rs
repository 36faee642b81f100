use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

use crate::types::{RequestId, ResponseEnvelope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateQuotaResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

impl WireModel for CreateQuotaResponseBody {}

pub type CreateQuotaResponse = ResponseEnvelope<CreateQuotaResponseBody>;
