//! The push-based event protocol.

use structpack_meta::{FieldDef, StructDef};

use crate::SerializeError;

/// Consumer side of the typed event stream describing one document.
///
/// Producers (format decoders, [`VariantReader`](crate::VariantReader))
/// drive a visitor with one traversal: `start_struct` first, matched
/// `enter_*`/`exit_*` nesting for containers, scalar and array events in
/// between, `finished` last. `notify_error` is advisory and does not end
/// the traversal by itself.
///
/// Every method returns `Result` so a fatal conversion or lookup failure
/// propagates back to the producer; consumers must tolerate an `exit` with
/// no matching `enter` (treat it as a no-op) so malformed nesting cannot
/// corrupt their state.
pub trait ValueVisitor {
    fn notify_error(&mut self, message: &str) -> Result<(), SerializeError>;
    fn start_struct(&mut self, def: &StructDef) -> Result<(), SerializeError>;
    fn finished(&mut self) -> Result<(), SerializeError>;

    fn enter_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError>;
    fn exit_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError>;
    fn enter_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError>;
    fn exit_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError>;

    fn enter_bool(&mut self, field: &FieldDef, value: bool) -> Result<(), SerializeError>;
    fn enter_int32(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError>;
    fn enter_uint32(&mut self, field: &FieldDef, value: u32) -> Result<(), SerializeError>;
    fn enter_int64(&mut self, field: &FieldDef, value: i64) -> Result<(), SerializeError>;
    fn enter_uint64(&mut self, field: &FieldDef, value: u64) -> Result<(), SerializeError>;
    fn enter_float(&mut self, field: &FieldDef, value: f32) -> Result<(), SerializeError>;
    fn enter_double(&mut self, field: &FieldDef, value: f64) -> Result<(), SerializeError>;
    fn enter_string(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError>;
    /// Undecoded UTF-8 text, straight from a wire buffer.
    fn enter_string_raw(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError>;
    fn enter_bytes(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError>;
    fn enter_enum(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError>;
    fn enter_enum_name(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError>;

    fn enter_array_bool(&mut self, field: &FieldDef, values: &[bool])
        -> Result<(), SerializeError>;
    fn enter_array_int32(&mut self, field: &FieldDef, values: &[i32])
        -> Result<(), SerializeError>;
    fn enter_array_uint32(
        &mut self,
        field: &FieldDef,
        values: &[u32],
    ) -> Result<(), SerializeError>;
    fn enter_array_int64(&mut self, field: &FieldDef, values: &[i64])
        -> Result<(), SerializeError>;
    fn enter_array_uint64(
        &mut self,
        field: &FieldDef,
        values: &[u64],
    ) -> Result<(), SerializeError>;
    fn enter_array_float(&mut self, field: &FieldDef, values: &[f32])
        -> Result<(), SerializeError>;
    fn enter_array_double(
        &mut self,
        field: &FieldDef,
        values: &[f64],
    ) -> Result<(), SerializeError>;
    fn enter_array_string(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError>;
    fn enter_array_bytes(
        &mut self,
        field: &FieldDef,
        values: &[Vec<u8>],
    ) -> Result<(), SerializeError>;
    fn enter_array_enum(&mut self, field: &FieldDef, values: &[i32])
        -> Result<(), SerializeError>;
    fn enter_array_enum_names(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError>;
}

impl<V: ValueVisitor + ?Sized> ValueVisitor for &mut V {
    fn notify_error(&mut self, message: &str) -> Result<(), SerializeError> {
        (**self).notify_error(message)
    }
    fn start_struct(&mut self, def: &StructDef) -> Result<(), SerializeError> {
        (**self).start_struct(def)
    }
    fn finished(&mut self) -> Result<(), SerializeError> {
        (**self).finished()
    }
    fn enter_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        (**self).enter_struct(field)
    }
    fn exit_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        (**self).exit_struct(field)
    }
    fn enter_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        (**self).enter_array_struct(field)
    }
    fn exit_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        (**self).exit_array_struct(field)
    }
    fn enter_bool(&mut self, field: &FieldDef, value: bool) -> Result<(), SerializeError> {
        (**self).enter_bool(field, value)
    }
    fn enter_int32(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        (**self).enter_int32(field, value)
    }
    fn enter_uint32(&mut self, field: &FieldDef, value: u32) -> Result<(), SerializeError> {
        (**self).enter_uint32(field, value)
    }
    fn enter_int64(&mut self, field: &FieldDef, value: i64) -> Result<(), SerializeError> {
        (**self).enter_int64(field, value)
    }
    fn enter_uint64(&mut self, field: &FieldDef, value: u64) -> Result<(), SerializeError> {
        (**self).enter_uint64(field, value)
    }
    fn enter_float(&mut self, field: &FieldDef, value: f32) -> Result<(), SerializeError> {
        (**self).enter_float(field, value)
    }
    fn enter_double(&mut self, field: &FieldDef, value: f64) -> Result<(), SerializeError> {
        (**self).enter_double(field, value)
    }
    fn enter_string(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        (**self).enter_string(field, value)
    }
    fn enter_string_raw(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        (**self).enter_string_raw(field, value)
    }
    fn enter_bytes(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        (**self).enter_bytes(field, value)
    }
    fn enter_enum(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        (**self).enter_enum(field, value)
    }
    fn enter_enum_name(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        (**self).enter_enum_name(field, value)
    }
    fn enter_array_bool(
        &mut self,
        field: &FieldDef,
        values: &[bool],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_bool(field, values)
    }
    fn enter_array_int32(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_int32(field, values)
    }
    fn enter_array_uint32(
        &mut self,
        field: &FieldDef,
        values: &[u32],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_uint32(field, values)
    }
    fn enter_array_int64(
        &mut self,
        field: &FieldDef,
        values: &[i64],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_int64(field, values)
    }
    fn enter_array_uint64(
        &mut self,
        field: &FieldDef,
        values: &[u64],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_uint64(field, values)
    }
    fn enter_array_float(
        &mut self,
        field: &FieldDef,
        values: &[f32],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_float(field, values)
    }
    fn enter_array_double(
        &mut self,
        field: &FieldDef,
        values: &[f64],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_double(field, values)
    }
    fn enter_array_string(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_string(field, values)
    }
    fn enter_array_bytes(
        &mut self,
        field: &FieldDef,
        values: &[Vec<u8>],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_bytes(field, values)
    }
    fn enter_array_enum(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_enum(field, values)
    }
    fn enter_array_enum_names(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        (**self).enter_array_enum_names(field, values)
    }
}
