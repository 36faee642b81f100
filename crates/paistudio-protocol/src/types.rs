use std::collections::BTreeMap;

use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type JsonValue = Value;
pub type JsonObject = BTreeMap<String, JsonValue>;
pub type RequestId = String;

/// Key/value tag attached to most PAI resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Label {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl WireModel for Label {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

/// Transport-level envelope every response body is delivered in. The
/// envelope is an ordinary model; its keys are the only lower-camel ones
/// shared across the whole API surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<T>,
}

impl<T: WireModel> WireModel for ResponseEnvelope<T> {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(body) = &self.body {
            body.validate()?;
        }
        Ok(())
    }
}
