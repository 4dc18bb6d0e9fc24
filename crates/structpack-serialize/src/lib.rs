//! Push-based serialization core for structpack.
//!
//! A producer (format decoder or [`VariantReader`]) drives one traversal of
//! typed events against the [`ValueVisitor`] protocol. Stages compose by
//! value: [`TypeConverter`] coerces event payloads to each field's declared
//! type, [`SkipDefaultValues`] is the default-suppression slot, and
//! [`VariantTreeBuilder`] materializes the stream into a
//! [`Variant`](structpack_variant::Variant) tree. [`VariantSerializer`]
//! bundles the three into the standard chain.

mod converter;
mod error;
mod skip_defaults;
mod tree_builder;
mod variant_reader;
mod variant_serializer;
mod visitor;

pub use converter::TypeConverter;
pub use error::SerializeError;
pub use skip_defaults::SkipDefaultValues;
pub use tree_builder::VariantTreeBuilder;
pub use variant_reader::VariantReader;
pub use variant_serializer::{VariantSerializer, VariantSerializerOptions};
pub use visitor::ValueVisitor;
