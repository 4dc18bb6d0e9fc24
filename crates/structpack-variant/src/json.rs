//! Conversion between [`Variant`] trees and `serde_json::Value`.
//!
//! Binary payloads travel as data-URI strings so a tree survives a JSON
//! round trip; struct entry order is preserved on both directions.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{Map, Number, Value as JsonValue};

use crate::{Variant, VariantStruct};

/// Prefix marking a JSON string as base64-encoded binary.
pub const BINARY_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// Convert a `Variant` tree to a JSON value.
///
/// Non-finite floats have no JSON number form and map to null.
pub fn variant_to_json(value: &Variant) -> JsonValue {
    match value {
        Variant::Empty => JsonValue::Null,
        Variant::Bool(b) => JsonValue::Bool(*b),
        Variant::Int32(v) => JsonValue::from(*v),
        Variant::UInt32(v) => JsonValue::from(*v),
        Variant::Int64(v) => JsonValue::from(*v),
        Variant::UInt64(v) => JsonValue::from(*v),
        Variant::Float(v) => float_to_json(f64::from(*v)),
        Variant::Double(v) => float_to_json(*v),
        Variant::Str(s) => JsonValue::String(s.clone()),
        Variant::Bytes(b) => JsonValue::String(encode_bytes(b)),
        Variant::ArrayBool(v) => v.iter().map(|b| JsonValue::Bool(*b)).collect(),
        Variant::ArrayInt32(v) => v.iter().map(|n| JsonValue::from(*n)).collect(),
        Variant::ArrayUInt32(v) => v.iter().map(|n| JsonValue::from(*n)).collect(),
        Variant::ArrayInt64(v) => v.iter().map(|n| JsonValue::from(*n)).collect(),
        Variant::ArrayUInt64(v) => v.iter().map(|n| JsonValue::from(*n)).collect(),
        Variant::ArrayFloat(v) => v.iter().map(|n| float_to_json(f64::from(*n))).collect(),
        Variant::ArrayDouble(v) => v.iter().map(|n| float_to_json(*n)).collect(),
        Variant::ArrayString(v) => v.iter().map(|s| JsonValue::String(s.clone())).collect(),
        Variant::ArrayBytes(v) => v.iter().map(|b| JsonValue::String(encode_bytes(b))).collect(),
        Variant::Struct(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (name, child) in entries {
                map.insert(name.clone(), variant_to_json(child));
            }
            JsonValue::Object(map)
        }
        Variant::List(items) => items.iter().map(variant_to_json).collect(),
    }
}

/// Convert a JSON value to a `Variant` tree.
///
/// Integers become `Int64` (`UInt64` beyond `i64::MAX`), floats `Double`,
/// arrays `List`, objects `Struct`. Strings carrying the binary data-URI
/// prefix decode to `Bytes`; a prefixed string that fails to decode stays
/// text.
pub fn json_to_variant(value: &JsonValue) -> Variant {
    match value {
        JsonValue::Null => Variant::Empty,
        JsonValue::Bool(b) => Variant::Bool(*b),
        JsonValue::Number(n) => number_to_variant(n),
        JsonValue::String(s) => match decode_bytes(s) {
            Some(bytes) => Variant::Bytes(bytes),
            None => Variant::Str(s.clone()),
        },
        JsonValue::Array(items) => Variant::List(items.iter().map(json_to_variant).collect()),
        JsonValue::Object(map) => {
            let entries: VariantStruct = map
                .iter()
                .map(|(name, child)| (name.clone(), json_to_variant(child)))
                .collect();
            Variant::Struct(entries)
        }
    }
}

fn float_to_json(value: f64) -> JsonValue {
    Number::from_f64(value).map_or(JsonValue::Null, JsonValue::Number)
}

fn number_to_variant(n: &Number) -> Variant {
    if let Some(v) = n.as_i64() {
        Variant::Int64(v)
    } else if let Some(v) = n.as_u64() {
        Variant::UInt64(v)
    } else {
        Variant::Double(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(BINARY_URI_PREFIX.len() + bytes.len() * 4 / 3 + 4);
    out.push_str(BINARY_URI_PREFIX);
    out.push_str(&BASE64.encode(bytes));
    out
}

fn decode_bytes(s: &str) -> Option<Vec<u8>> {
    let encoded = s.strip_prefix(BINARY_URI_PREFIX)?;
    BASE64.decode(encoded).ok()
}
