//! Schema model for structpack.
//!
//! Field and struct descriptors with declared [`TypeId`]s, plus the
//! [`MetaRegistry`] that owns struct definitions and enum alias tables.
//! Definitions are constructed once and consumed read-only by the
//! serialization stages.

mod error;
mod field;
mod registry;
mod type_id;

pub use error::MetaError;
pub use field::{FieldDef, StructDef};
pub use registry::{EnumDef, EnumEntry, MetaRegistry};
pub use type_id::TypeId;
