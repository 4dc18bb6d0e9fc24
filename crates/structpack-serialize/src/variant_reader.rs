//! `Variant`-tree to event-stream traversal.

use structpack_meta::{FieldDef, MetaError, MetaRegistry, StructDef, TypeId};
use structpack_variant::Variant;

use crate::{SerializeError, ValueVisitor};

/// Pushes one traversal describing a [`Variant`] tree into any visitor,
/// walking the fields of a registered struct definition in schema order.
///
/// Events carry the kind actually stored in the tree; compose the target
/// visitor with a [`TypeConverter`](crate::TypeConverter) when values must
/// arrive as the fields' declared types. Fields absent from the tree are
/// skipped, as are entries whose stored shape cannot back the field (a
/// non-struct value under a `Struct` field, a non-list under `ArrayStruct`).
pub struct VariantReader<'a> {
    meta: &'a MetaRegistry,
    variant: &'a Variant,
}

impl<'a> VariantReader<'a> {
    pub fn new(meta: &'a MetaRegistry, variant: &'a Variant) -> Self {
        Self { meta, variant }
    }

    /// Emit the traversal for the struct type registered as `type_name`.
    ///
    /// An unregistered type notifies the visitor, finishes the traversal and
    /// fails; lookup and downstream failures abort mid-stream.
    pub fn read_struct<V: ValueVisitor>(
        &self,
        type_name: &str,
        visitor: &mut V,
    ) -> Result<(), SerializeError> {
        let Some(def) = self.meta.struct_def(type_name) else {
            visitor.notify_error(&format!("unknown struct type `{type_name}`"))?;
            visitor.finished()?;
            return Err(MetaError::UnknownStruct(type_name.to_string()).into());
        };
        visitor.start_struct(def)?;
        self.read_fields(def, self.variant, visitor)?;
        visitor.finished()
    }

    fn read_fields<V: ValueVisitor>(
        &self,
        def: &StructDef,
        node: &Variant,
        visitor: &mut V,
    ) -> Result<(), SerializeError> {
        for field in def.fields() {
            let Some(value) = node.get(&field.name) else {
                continue;
            };
            self.read_field(field, value, visitor)?;
        }
        Ok(())
    }

    fn read_field<V: ValueVisitor>(
        &self,
        field: &FieldDef,
        value: &Variant,
        visitor: &mut V,
    ) -> Result<(), SerializeError> {
        match field.type_id {
            TypeId::Struct => {
                if !value.is_struct() {
                    return Ok(());
                }
                let sub = self.sub_def(field)?;
                visitor.enter_struct(field)?;
                self.read_fields(sub, value, visitor)?;
                visitor.exit_struct(field)
            }
            TypeId::ArrayStruct => {
                let Variant::List(items) = value else {
                    return Ok(());
                };
                let sub = self.sub_def(field)?;
                visitor.enter_array_struct(field)?;
                for item in items {
                    if !item.is_struct() {
                        continue;
                    }
                    visitor.enter_struct(field)?;
                    self.read_fields(sub, item, visitor)?;
                    visitor.exit_struct(field)?;
                }
                visitor.exit_array_struct(field)
            }
            TypeId::Enum | TypeId::ArrayEnum => self.emit_enum(field, value, visitor),
            _ => Self::emit_value(field, value, visitor),
        }
    }

    fn sub_def(&self, field: &FieldDef) -> Result<&StructDef, SerializeError> {
        self.meta
            .struct_def(&field.type_name)
            .ok_or_else(|| MetaError::UnknownStruct(field.type_name.clone()).into())
    }

    fn emit_enum<V: ValueVisitor>(
        &self,
        field: &FieldDef,
        value: &Variant,
        visitor: &mut V,
    ) -> Result<(), SerializeError> {
        match value {
            Variant::Int32(v) => visitor.enter_enum(field, *v),
            Variant::Str(s) => visitor.enter_enum_name(field, s),
            Variant::ArrayInt32(v) => visitor.enter_array_enum(field, v),
            Variant::ArrayString(v) => visitor.enter_array_enum_names(field, v),
            _ => Self::emit_value(field, value, visitor),
        }
    }

    fn emit_value<V: ValueVisitor>(
        field: &FieldDef,
        value: &Variant,
        visitor: &mut V,
    ) -> Result<(), SerializeError> {
        match value {
            Variant::Bool(v) => visitor.enter_bool(field, *v),
            Variant::Int32(v) => visitor.enter_int32(field, *v),
            Variant::UInt32(v) => visitor.enter_uint32(field, *v),
            Variant::Int64(v) => visitor.enter_int64(field, *v),
            Variant::UInt64(v) => visitor.enter_uint64(field, *v),
            Variant::Float(v) => visitor.enter_float(field, *v),
            Variant::Double(v) => visitor.enter_double(field, *v),
            Variant::Str(v) => visitor.enter_string(field, v),
            Variant::Bytes(v) => visitor.enter_bytes(field, v),
            Variant::ArrayBool(v) => visitor.enter_array_bool(field, v),
            Variant::ArrayInt32(v) => visitor.enter_array_int32(field, v),
            Variant::ArrayUInt32(v) => visitor.enter_array_uint32(field, v),
            Variant::ArrayInt64(v) => visitor.enter_array_int64(field, v),
            Variant::ArrayUInt64(v) => visitor.enter_array_uint64(field, v),
            Variant::ArrayFloat(v) => visitor.enter_array_float(field, v),
            Variant::ArrayDouble(v) => visitor.enter_array_double(field, v),
            Variant::ArrayString(v) => visitor.enter_array_string(field, v),
            Variant::ArrayBytes(v) => visitor.enter_array_bytes(field, v),
            // container or empty payloads have no scalar event form
            Variant::Empty | Variant::Struct(_) | Variant::List(_) => Ok(()),
        }
    }
}
