//! Dynamic value tree for structpack.
//!
//! [`Variant`] is a tagged union covering every primitive, every primitive
//! array, an insertion-ordered struct and an ordered list, so one type can
//! represent any document a schema describes. [`json`] converts trees to and
//! from `serde_json::Value` for interop and inspection.

pub mod json;
mod value;

pub use json::{json_to_variant, variant_to_json, BINARY_URI_PREFIX};
pub use value::{Variant, VariantList, VariantStruct};
