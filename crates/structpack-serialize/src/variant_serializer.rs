//! Ready-made pipeline that materializes event streams into `Variant` trees.

use structpack_meta::{FieldDef, MetaRegistry, StructDef};
use structpack_variant::Variant;

use crate::{
    SerializeError, SkipDefaultValues, TypeConverter, ValueVisitor, VariantTreeBuilder,
};

/// Construction knobs for [`VariantSerializer`].
#[derive(Debug, Clone, Copy)]
pub struct VariantSerializerOptions {
    /// Materialize enum fields as alias strings instead of raw integers.
    pub enum_as_string: bool,
    /// Handed to the default-value filter stage.
    pub skip_default_values: bool,
}

impl Default for VariantSerializerOptions {
    fn default() -> Self {
        Self {
            enum_as_string: true,
            skip_default_values: false,
        }
    }
}

/// The full consumer chain for one document:
/// [`TypeConverter`] → [`SkipDefaultValues`] → [`VariantTreeBuilder`].
///
/// Feed it a traversal through its [`ValueVisitor`] surface (values are
/// coerced to each field's declared type on the way in), then take the
/// finished tree with [`into_variant`](Self::into_variant).
pub struct VariantSerializer<'m> {
    chain: TypeConverter<SkipDefaultValues<VariantTreeBuilder<'m>>>,
}

impl<'m> VariantSerializer<'m> {
    pub fn new(meta: &'m MetaRegistry) -> Self {
        Self::with_options(meta, VariantSerializerOptions::default())
    }

    pub fn with_options(meta: &'m MetaRegistry, options: VariantSerializerOptions) -> Self {
        let builder = VariantTreeBuilder::with_enum_policy(meta, options.enum_as_string);
        let defaults = SkipDefaultValues::new(builder, options.skip_default_values);
        Self {
            chain: TypeConverter::new(defaults),
        }
    }

    pub fn into_variant(self) -> Variant {
        self.chain.into_inner().into_inner().into_variant()
    }
}

impl ValueVisitor for VariantSerializer<'_> {
    fn notify_error(&mut self, message: &str) -> Result<(), SerializeError> {
        self.chain.notify_error(message)
    }
    fn start_struct(&mut self, def: &StructDef) -> Result<(), SerializeError> {
        self.chain.start_struct(def)
    }
    fn finished(&mut self) -> Result<(), SerializeError> {
        self.chain.finished()
    }
    fn enter_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.chain.enter_struct(field)
    }
    fn exit_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.chain.exit_struct(field)
    }
    fn enter_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.chain.enter_array_struct(field)
    }
    fn exit_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.chain.exit_array_struct(field)
    }
    fn enter_bool(&mut self, field: &FieldDef, value: bool) -> Result<(), SerializeError> {
        self.chain.enter_bool(field, value)
    }
    fn enter_int32(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        self.chain.enter_int32(field, value)
    }
    fn enter_uint32(&mut self, field: &FieldDef, value: u32) -> Result<(), SerializeError> {
        self.chain.enter_uint32(field, value)
    }
    fn enter_int64(&mut self, field: &FieldDef, value: i64) -> Result<(), SerializeError> {
        self.chain.enter_int64(field, value)
    }
    fn enter_uint64(&mut self, field: &FieldDef, value: u64) -> Result<(), SerializeError> {
        self.chain.enter_uint64(field, value)
    }
    fn enter_float(&mut self, field: &FieldDef, value: f32) -> Result<(), SerializeError> {
        self.chain.enter_float(field, value)
    }
    fn enter_double(&mut self, field: &FieldDef, value: f64) -> Result<(), SerializeError> {
        self.chain.enter_double(field, value)
    }
    fn enter_string(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        self.chain.enter_string(field, value)
    }
    fn enter_string_raw(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        self.chain.enter_string_raw(field, value)
    }
    fn enter_bytes(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        self.chain.enter_bytes(field, value)
    }
    fn enter_enum(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        self.chain.enter_enum(field, value)
    }
    fn enter_enum_name(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        self.chain.enter_enum_name(field, value)
    }
    fn enter_array_bool(
        &mut self,
        field: &FieldDef,
        values: &[bool],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_bool(field, values)
    }
    fn enter_array_int32(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_int32(field, values)
    }
    fn enter_array_uint32(
        &mut self,
        field: &FieldDef,
        values: &[u32],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_uint32(field, values)
    }
    fn enter_array_int64(
        &mut self,
        field: &FieldDef,
        values: &[i64],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_int64(field, values)
    }
    fn enter_array_uint64(
        &mut self,
        field: &FieldDef,
        values: &[u64],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_uint64(field, values)
    }
    fn enter_array_float(
        &mut self,
        field: &FieldDef,
        values: &[f32],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_float(field, values)
    }
    fn enter_array_double(
        &mut self,
        field: &FieldDef,
        values: &[f64],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_double(field, values)
    }
    fn enter_array_string(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_string(field, values)
    }
    fn enter_array_bytes(
        &mut self,
        field: &FieldDef,
        values: &[Vec<u8>],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_bytes(field, values)
    }
    fn enter_array_enum(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_enum(field, values)
    }
    fn enter_array_enum_names(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        self.chain.enter_array_enum_names(field, values)
    }
}
