//! Contract tests for the wire-map conversion trait, using a small local
//! model tree covering every field kind: optional scalars, a nested model,
//! a sequence of models, a sequence of scalars and a generic map.

use std::collections::BTreeMap;

use paistudio_wire::{JsonValue, ValidateError, WireMap, WireModel};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
struct Worker {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slot: Option<i64>,
}

impl WireModel for Worker {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
struct Pool {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    leader: Option<Worker>,
    #[serde(default)]
    workers: Vec<Worker>,
    #[serde(default)]
    zones: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotations: Option<BTreeMap<String, JsonValue>>,
}

impl WireModel for Pool {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(leader) = &self.leader {
            leader.validate()?;
        }
        for worker in &self.workers {
            worker.validate()?;
        }
        Ok(())
    }
}

/// Serializes to a JSON array, not an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
struct Roster(Vec<String>);

impl WireModel for Roster {}

fn populated() -> Pool {
    Pool {
        name: Some("training".to_string()),
        leader: Some(Worker {
            id: Some("w-0".to_string()),
            slot: Some(0),
        }),
        workers: vec![
            Worker {
                id: Some("w-1".to_string()),
                slot: Some(1),
            },
            Worker {
                id: Some("w-2".to_string()),
                slot: Some(2),
            },
        ],
        zones: vec!["cn-hangzhou-i".to_string()],
        annotations: Some(BTreeMap::from([(
            "owner".to_string(),
            json!("infra"),
        )])),
    }
}

#[test]
fn round_trip_reproduces_every_populated_field() {
    let pool = populated();
    let map = pool.to_map().expect("to_map");
    let back = Pool::from_map(map).expect("from_map");
    assert_eq!(back, pool);
}

#[test]
fn unset_optionals_are_omitted_and_sequences_always_emitted() {
    let map = Pool::default().to_map().expect("to_map");
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Workers", "Zones"]);
    assert_eq!(map["Workers"], json!([]));
    assert_eq!(map["Zones"], json!([]));
}

#[test]
fn map_keys_follow_declaration_order() {
    let map = populated().to_map().expect("to_map");
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Name", "Leader", "Workers", "Zones", "Annotations"]);
}

#[test]
fn missing_keys_leave_fields_at_their_defaults() {
    let mut map = WireMap::new();
    map.insert("Name".to_string(), json!("partial"));
    let pool = Pool::from_map(map).expect("from_map");
    assert_eq!(pool.name.as_deref(), Some("partial"));
    assert_eq!(pool.leader, None);
    assert!(pool.workers.is_empty());
    assert!(pool.zones.is_empty());
    assert_eq!(pool.annotations, None);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut map = WireMap::new();
    map.insert("Name".to_string(), json!("p"));
    map.insert("NotAField".to_string(), json!({"nested": [1, 2, 3]}));
    let pool = Pool::from_map(map).expect("from_map");
    assert_eq!(pool.name.as_deref(), Some("p"));
}

#[test]
fn empty_and_absent_inputs_produce_default_instances() {
    let from_empty = Pool::from_map(WireMap::new()).expect("empty map");
    assert_eq!(from_empty, Pool::default());
    let from_none = Pool::from_map_opt(None).expect("absent map");
    assert_eq!(from_none, Pool::default());
}

#[test]
fn model_sequences_are_rebuilt_recursively_in_order() {
    let mut map = WireMap::new();
    map.insert(
        "Workers".to_string(),
        json!([{"Id": "a"}, {"Id": "b"}, {"Id": "c", "Slot": 7}]),
    );
    let pool = Pool::from_map(map).expect("from_map");
    assert_eq!(pool.workers.len(), 3);
    let ids: Vec<&str> = pool
        .workers
        .iter()
        .filter_map(|w| w.id.as_deref())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(pool.workers[2].slot, Some(7));
}

#[test]
fn mismatched_value_reports_the_offending_field_path() {
    let mut map = WireMap::new();
    map.insert("Workers".to_string(), json!([{"Slot": "three"}]));
    let err = Pool::from_map(map).expect_err("string is not a slot");
    assert_eq!(err.path(), "Workers[0].Slot");
    assert!(err.model().ends_with("Pool"));
}

#[test]
fn non_object_models_cannot_become_wire_maps() {
    let err = Roster(vec!["w-1".to_string()])
        .to_map()
        .expect_err("arrays are not wire maps");
    assert!(err.to_string().contains("expected an object"));
}

#[test]
fn validate_recurses_into_present_children() {
    assert!(populated().validate().is_ok());
    assert!(Pool::default().validate().is_ok());
}
