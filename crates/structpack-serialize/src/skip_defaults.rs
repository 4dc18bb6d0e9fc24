//! Default-value filter stage.

use structpack_meta::{FieldDef, StructDef};

use crate::{SerializeError, ValueVisitor};

/// Decorator slot for default-value suppression.
///
/// Contract: with `skip` enabled, a suppressing implementation drops scalar
/// and array events whose value equals the declared type's default before
/// they reach the downstream visitor. This stage carries the flag through
/// the pipeline and forwards every event verbatim; the suppression policy
/// itself lives outside this core.
pub struct SkipDefaultValues<V> {
    visitor: V,
    skip: bool,
}

impl<V: ValueVisitor> SkipDefaultValues<V> {
    pub fn new(visitor: V, skip: bool) -> Self {
        Self { visitor, skip }
    }

    pub fn skip_enabled(&self) -> bool {
        self.skip
    }

    pub fn get_ref(&self) -> &V {
        &self.visitor
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    pub fn into_inner(self) -> V {
        self.visitor
    }
}

impl<V: ValueVisitor> ValueVisitor for SkipDefaultValues<V> {
    fn notify_error(&mut self, message: &str) -> Result<(), SerializeError> {
        self.visitor.notify_error(message)
    }
    fn start_struct(&mut self, def: &StructDef) -> Result<(), SerializeError> {
        self.visitor.start_struct(def)
    }
    fn finished(&mut self) -> Result<(), SerializeError> {
        self.visitor.finished()
    }
    fn enter_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.visitor.enter_struct(field)
    }
    fn exit_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.visitor.exit_struct(field)
    }
    fn enter_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.visitor.enter_array_struct(field)
    }
    fn exit_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.visitor.exit_array_struct(field)
    }
    fn enter_bool(&mut self, field: &FieldDef, value: bool) -> Result<(), SerializeError> {
        self.visitor.enter_bool(field, value)
    }
    fn enter_int32(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        self.visitor.enter_int32(field, value)
    }
    fn enter_uint32(&mut self, field: &FieldDef, value: u32) -> Result<(), SerializeError> {
        self.visitor.enter_uint32(field, value)
    }
    fn enter_int64(&mut self, field: &FieldDef, value: i64) -> Result<(), SerializeError> {
        self.visitor.enter_int64(field, value)
    }
    fn enter_uint64(&mut self, field: &FieldDef, value: u64) -> Result<(), SerializeError> {
        self.visitor.enter_uint64(field, value)
    }
    fn enter_float(&mut self, field: &FieldDef, value: f32) -> Result<(), SerializeError> {
        self.visitor.enter_float(field, value)
    }
    fn enter_double(&mut self, field: &FieldDef, value: f64) -> Result<(), SerializeError> {
        self.visitor.enter_double(field, value)
    }
    fn enter_string(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        self.visitor.enter_string(field, value)
    }
    fn enter_string_raw(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        self.visitor.enter_string_raw(field, value)
    }
    fn enter_bytes(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        self.visitor.enter_bytes(field, value)
    }
    fn enter_enum(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        self.visitor.enter_enum(field, value)
    }
    fn enter_enum_name(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        self.visitor.enter_enum_name(field, value)
    }
    fn enter_array_bool(
        &mut self,
        field: &FieldDef,
        values: &[bool],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_bool(field, values)
    }
    fn enter_array_int32(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_int32(field, values)
    }
    fn enter_array_uint32(
        &mut self,
        field: &FieldDef,
        values: &[u32],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_uint32(field, values)
    }
    fn enter_array_int64(
        &mut self,
        field: &FieldDef,
        values: &[i64],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_int64(field, values)
    }
    fn enter_array_uint64(
        &mut self,
        field: &FieldDef,
        values: &[u64],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_uint64(field, values)
    }
    fn enter_array_float(
        &mut self,
        field: &FieldDef,
        values: &[f32],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_float(field, values)
    }
    fn enter_array_double(
        &mut self,
        field: &FieldDef,
        values: &[f64],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_double(field, values)
    }
    fn enter_array_string(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_string(field, values)
    }
    fn enter_array_bytes(
        &mut self,
        field: &FieldDef,
        values: &[Vec<u8>],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_bytes(field, values)
    }
    fn enter_array_enum(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_enum(field, values)
    }
    fn enter_array_enum_names(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        self.visitor.enter_array_enum_names(field, values)
    }
}
