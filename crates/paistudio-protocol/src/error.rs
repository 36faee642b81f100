use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

use crate::types::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCodeKnown {
    /// 400
    #[serde(rename = "InvalidParameter")]
    InvalidParameter,
    /// 403
    #[serde(rename = "Forbidden")]
    Forbidden,
    /// 404
    #[serde(rename = "ResourceNotFound")]
    ResourceNotFound,
    /// 409
    #[serde(rename = "ResourceConflict")]
    ResourceConflict,
    /// 429
    #[serde(rename = "Throttling")]
    Throttling,
    /// 429, quota side
    #[serde(rename = "QuotaExceeded")]
    QuotaExceeded,
    /// 500
    #[serde(rename = "InternalError")]
    InternalError,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Known(ErrorCodeKnown),
    Custom(String),
}

/// Error-shaped response body returned for any failed operation, decoded
/// through the same wire-map contract as the success bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommend: Option<String>,
}

impl WireModel for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_error_payload() {
        let json = r#"
        {
          "Code": "ResourceNotFound",
          "Message": "training job train-8d022f69vxxx does not exist",
          "RequestId": "40325405-579C-4D82-9624-EC2B03A63E90",
          "HostId": "pai.cn-hangzhou.aliyuncs.com"
        }
        "#;

        let parsed: ErrorResponse = serde_json::from_str(json).expect("deserialize error payload");
        assert_eq!(
            parsed.code,
            Some(ErrorCode::Known(ErrorCodeKnown::ResourceNotFound))
        );
        assert_eq!(
            parsed.request_id.as_deref(),
            Some("40325405-579C-4D82-9624-EC2B03A63E90")
        );
        assert_eq!(parsed.recommend, None);
    }

    #[test]
    fn unrecognized_codes_fall_back_to_custom() {
        let json = r#"{"Code": "InvalidParameter.TrainingJobName", "Message": "bad name"}"#;
        let parsed: ErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            parsed.code,
            Some(ErrorCode::Custom(
                "InvalidParameter.TrainingJobName".to_string()
            ))
        );
    }
}
