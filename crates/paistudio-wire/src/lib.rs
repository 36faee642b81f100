//! The wire-map (de)serialization contract shared by every PAI Studio API
//! model.
//!
//! The remote API exchanges flat or nested JSON objects. On our side each
//! object is a typed model struct; the boundary representation is a generic
//! insertion-ordered string-keyed mapping ([`WireMap`]) that the transport
//! layer JSON-encodes into a request body or decodes from a response body.
//! [`WireModel`] gives every model the same three operations — `validate`,
//! `to_map`, `from_map` — driven entirely by the model's serde field table,
//! so the per-shape code is nothing but field declarations.

use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use serde_json::Value as JsonValue;

/// Insertion-ordered string-keyed mapping, the in-memory counterpart of a
/// JSON object on the wire.
pub type WireMap = serde_json::Map<String, JsonValue>;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("{model} serialized to JSON {found}, expected an object")]
    NotAnObject {
        model: &'static str,
        found: &'static str,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A wire mapping carried a value that does not fit the declared field type.
#[derive(Debug, thiserror::Error)]
#[error("decoding {model} failed at `{path}`: {source}")]
pub struct DecodeError {
    model: &'static str,
    path: String,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    /// Dotted path of the field that rejected the input; `.` for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn model(&self) -> &'static str {
        self.model
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Uniform conversion contract between a model and its wire mapping.
///
/// Field conventions the provided methods rely on:
/// - optional scalars, nested models and generic maps are `Option<T>` with
///   `skip_serializing_if = "Option::is_none"`;
/// - sequence fields (of scalars or of models) are `Vec<T>` with
///   `#[serde(default)]` and no skip attribute, so they are always present on
///   the wire (empty when unset) and always reset to empty when the key is
///   absent.
pub trait WireModel: Serialize + DeserializeOwned + Default {
    /// Structural-prerequisite hook. Models holding nested model fields
    /// re-run it on each child that is present; fields documented as
    /// required are not enforced here.
    fn validate(&self) -> Result<(), ValidateError> {
        Ok(())
    }

    /// Serializes the model into the ordered wire mapping, wire key to
    /// value, in field-declaration order.
    fn to_map(&self) -> Result<WireMap, EncodeError> {
        match serde_json::to_value(self)? {
            JsonValue::Object(map) => Ok(map),
            other => Err(EncodeError::NotAnObject {
                model: type_name::<Self>(),
                found: json_kind(&other),
            }),
        }
    }

    /// Rebuilds a model from a wire mapping. Unknown keys are ignored and a
    /// missing key leaves the field at its default; a value that does not
    /// fit the declared field type reports the offending path.
    fn from_map(map: WireMap) -> Result<Self, DecodeError> {
        serde_path_to_error::deserialize(JsonValue::Object(map)).map_err(|err| {
            let path = err.path().to_string();
            DecodeError {
                model: type_name::<Self>(),
                path,
                source: err.into_inner(),
            }
        })
    }

    /// Absent payloads decode to an all-default instance.
    fn from_map_opt(map: Option<WireMap>) -> Result<Self, DecodeError> {
        match map {
            Some(map) => Self::from_map(map),
            None => Ok(Self::default()),
        }
    }
}
