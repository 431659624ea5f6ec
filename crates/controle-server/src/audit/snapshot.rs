//! Entity snapshots
//!
//! A snapshot is the JSON text of an entity at one point in time. Encoding
//! goes through a `serde_json::Value` so object keys come out sorted, which
//! keeps two snapshots of the same entity textually comparable.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Serialise an entity into snapshot text with sorted object keys
pub fn encode_snapshot<T: Serialize + ?Sized>(entity: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(entity)?;
    serde_json::to_string(&value)
}

/// Parse snapshot text back into a JSON value
pub fn decode_snapshot(text: &str) -> Result<JsonValue, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        zeta: i64,
        alpha: &'static str,
        middle: bool,
    }

    #[test]
    fn test_keys_are_sorted() {
        let text = encode_snapshot(&Sample {
            zeta: 1,
            alpha: "a",
            middle: true,
        })
        .unwrap();
        assert_eq!(text, r#"{"alpha":"a","middle":true,"zeta":1}"#);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_snapshot("{not json").is_err());
    }

    #[test]
    fn test_null_fields_survive() {
        let value = json!({ "description": null, "id": 3 });
        let text = encode_snapshot(&value).unwrap();
        assert_eq!(decode_snapshot(&text).unwrap(), value);
    }

    fn json_leaf() -> impl Strategy<Value = JsonValue> {
        prop_oneof![
            Just(JsonValue::Null),
            any::<bool>().prop_map(JsonValue::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            ".{0,16}".prop_map(JsonValue::String),
        ]
    }

    fn json_value() -> impl Strategy<Value = JsonValue> {
        json_leaf().prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(JsonValue::Array),
                prop::collection::btree_map("[a-zA-Z_]{1,8}", inner, 0..8)
                    .prop_map(|map| JsonValue::Object(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_encode_decode_preserves_value(value in json_value()) {
            let text = encode_snapshot(&value).unwrap();
            prop_assert_eq!(decode_snapshot(&text).unwrap(), value);
        }

        #[test]
        fn prop_encoding_is_deterministic(value in json_value()) {
            prop_assert_eq!(encode_snapshot(&value).unwrap(), encode_snapshot(&value).unwrap());
        }
    }
}
