//! Typed request/response models for the PAI Studio management API.
//!
//! One module per service area, one submodule per operation. Every model
//! declares its exact wire keys (the remote API's casing is preserved,
//! deviations included) and implements the [`paistudio_wire::WireModel`]
//! conversion contract; the HTTP transport and request signing live outside
//! this crate and only exchange wire mappings with it.

pub mod algorithm;
pub mod component;
pub mod error;
pub mod metrics;
pub mod quota;
pub mod resource_group;
pub mod training_job;
pub mod types;
