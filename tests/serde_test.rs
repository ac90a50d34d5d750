#![cfg(feature = "serde")]

use deferred::{Deferred, StackDeferred, StaticDeferred};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Settings {
    name: String,
    timeout: Deferred<u32>,
    tags: StaticDeferred<Vec<String>>,
}

#[test]
fn test_serialize_as_option() {
    let empty: Deferred<u32> = Deferred::new();
    assert_eq!(serde_json::to_string(&empty).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Deferred::from_value(5u32)).unwrap(), "5");
    assert_eq!(
        serde_json::to_string(&StackDeferred::from_value("x")).unwrap(),
        "\"x\""
    );
}

#[test]
fn test_deserialize_restores_state() {
    let constructed: Deferred<u32> = serde_json::from_str("7").unwrap();
    assert_eq!(*constructed.get(), 7);

    let empty: StackDeferred<u32> = serde_json::from_str("null").unwrap();
    assert!(!empty.is_constructed());
}

#[test]
fn test_struct_with_cells() {
    let settings = Settings {
        name: String::from("primary"),
        timeout: Deferred::from_value(30),
        tags: StaticDeferred::new(),
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(json, r#"{"name":"primary","timeout":30,"tags":null}"#);

    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(back.name, "primary");
    assert_eq!(*back.timeout.get(), 30);
    assert!(!back.tags.is_constructed());
}

#[test]
fn test_deserialize_type_error() {
    let result: Result<Deferred<u32>, _> = serde_json::from_str("\"seven\"");
    assert!(result.is_err());
}
