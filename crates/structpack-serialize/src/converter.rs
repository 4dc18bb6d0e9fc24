//! Type-coercing adapter stage.

use structpack_meta::{FieldDef, StructDef, TypeId};

use crate::{SerializeError, ValueVisitor};

/// Scalar payloads covered by the numeric conversion family.
///
/// Booleans belong to the family: truthiness on the way in, `true`/`false`
/// text on the way out. Casts carry the target type's native semantics:
/// integer narrowing wraps two's-complement, float-to-integer truncates
/// toward zero and saturates at the bounds.
trait ScalarValue: Copy {
    fn to_bool(self) -> bool;
    fn to_i32(self) -> i32;
    fn to_u32(self) -> u32;
    fn to_i64(self) -> i64;
    fn to_u64(self) -> u64;
    fn to_f32(self) -> f32;
    fn to_f64(self) -> f64;
    fn to_text(self) -> String;
}

macro_rules! scalar_value_impl {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScalarValue for $ty {
                fn to_bool(self) -> bool {
                    self != (0 as $ty)
                }
                fn to_i32(self) -> i32 {
                    self as i32
                }
                fn to_u32(self) -> u32 {
                    self as u32
                }
                fn to_i64(self) -> i64 {
                    self as i64
                }
                fn to_u64(self) -> u64 {
                    self as u64
                }
                fn to_f32(self) -> f32 {
                    self as f32
                }
                fn to_f64(self) -> f64 {
                    self as f64
                }
                fn to_text(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

scalar_value_impl!(i32, u32, i64, u64, f32, f64);

impl ScalarValue for bool {
    fn to_bool(self) -> bool {
        self
    }
    fn to_i32(self) -> i32 {
        self as i32
    }
    fn to_u32(self) -> u32 {
        self as u32
    }
    fn to_i64(self) -> i64 {
        self as i64
    }
    fn to_u64(self) -> u64 {
        self as u64
    }
    fn to_f32(self) -> f32 {
        self as i32 as f32
    }
    fn to_f64(self) -> f64 {
        self as i32 as f64
    }
    fn to_text(self) -> String {
        self.to_string()
    }
}

fn parse_text<T: std::str::FromStr>(
    field: &FieldDef,
    target: TypeId,
    text: &str,
) -> Result<T, SerializeError> {
    text.parse().map_err(|_| SerializeError::Parse {
        field: field.name.clone(),
        target,
        text: text.to_string(),
    })
}

/// Adapter that forwards events to a downstream visitor, converting the
/// carried value whenever its intrinsic type disagrees with the field's
/// declared [`TypeId`].
///
/// Exact matches forward unchanged. Numeric and string mismatches route
/// through a closed dispatch over the declared type; scalars aimed at array
/// fields wrap into single-element arrays; arrays convert element-wise with
/// length and order preserved. Bytes- and container-shaped disagreements are
/// dropped without any signal. Lifecycle calls always pass through.
///
/// The downstream visitor is a construction-time requirement, so no call can
/// ever find the sink missing.
pub struct TypeConverter<V> {
    visitor: V,
}

impl<V: ValueVisitor> TypeConverter<V> {
    pub fn new(visitor: V) -> Self {
        Self { visitor }
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

    fn convert_number<T: ScalarValue>(
        &mut self,
        field: &FieldDef,
        value: T,
    ) -> Result<(), SerializeError> {
        match field.type_id {
            TypeId::Bool => self.visitor.enter_bool(field, value.to_bool()),
            TypeId::Int32 => self.visitor.enter_int32(field, value.to_i32()),
            TypeId::UInt32 => self.visitor.enter_uint32(field, value.to_u32()),
            TypeId::Int64 => self.visitor.enter_int64(field, value.to_i64()),
            TypeId::UInt64 => self.visitor.enter_uint64(field, value.to_u64()),
            TypeId::Float => self.visitor.enter_float(field, value.to_f32()),
            TypeId::Double => self.visitor.enter_double(field, value.to_f64()),
            TypeId::String => self.visitor.enter_string(field, &value.to_text()),
            TypeId::Enum => self.visitor.enter_enum(field, value.to_i32()),
            TypeId::ArrayBool => self.visitor.enter_array_bool(field, &[value.to_bool()]),
            TypeId::ArrayInt32 => self.visitor.enter_array_int32(field, &[value.to_i32()]),
            TypeId::ArrayUInt32 => self.visitor.enter_array_uint32(field, &[value.to_u32()]),
            TypeId::ArrayInt64 => self.visitor.enter_array_int64(field, &[value.to_i64()]),
            TypeId::ArrayUInt64 => self.visitor.enter_array_uint64(field, &[value.to_u64()]),
            TypeId::ArrayFloat => self.visitor.enter_array_float(field, &[value.to_f32()]),
            TypeId::ArrayDouble => self.visitor.enter_array_double(field, &[value.to_f64()]),
            TypeId::ArrayString => self.visitor.enter_array_string(field, &[value.to_text()]),
            TypeId::ArrayEnum => self.visitor.enter_array_enum(field, &[value.to_i32()]),
            // no conversion path into bytes- or container-shaped fields
            TypeId::Bytes | TypeId::ArrayBytes | TypeId::Struct | TypeId::ArrayStruct => Ok(()),
        }
    }

    fn convert_string(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        let target = field.type_id;
        match target {
            TypeId::Bool => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_bool(field, v)
            }
            TypeId::Int32 => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_int32(field, v)
            }
            TypeId::UInt32 => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_uint32(field, v)
            }
            TypeId::Int64 => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_int64(field, v)
            }
            TypeId::UInt64 => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_uint64(field, v)
            }
            TypeId::Float => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_float(field, v)
            }
            TypeId::Double => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_double(field, v)
            }
            TypeId::String => self.visitor.enter_string(field, value),
            TypeId::Enum => self.visitor.enter_enum_name(field, value),
            TypeId::ArrayBool => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_array_bool(field, &[v])
            }
            TypeId::ArrayInt32 => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_array_int32(field, &[v])
            }
            TypeId::ArrayUInt32 => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_array_uint32(field, &[v])
            }
            TypeId::ArrayInt64 => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_array_int64(field, &[v])
            }
            TypeId::ArrayUInt64 => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_array_uint64(field, &[v])
            }
            TypeId::ArrayFloat => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_array_float(field, &[v])
            }
            TypeId::ArrayDouble => {
                let v = parse_text(field, target, value)?;
                self.visitor.enter_array_double(field, &[v])
            }
            TypeId::ArrayString => {
                self.visitor.enter_array_string(field, &[value.to_string()])
            }
            TypeId::ArrayEnum => {
                self.visitor
                    .enter_array_enum_names(field, &[value.to_string()])
            }
            TypeId::Bytes | TypeId::ArrayBytes | TypeId::Struct | TypeId::ArrayStruct => Ok(()),
        }
    }

    fn convert_array_number<T: ScalarValue>(
        &mut self,
        field: &FieldDef,
        values: &[T],
    ) -> Result<(), SerializeError> {
        match field.type_id {
            TypeId::ArrayBool => {
                let v: Vec<bool> = values.iter().map(|x| x.to_bool()).collect();
                self.visitor.enter_array_bool(field, &v)
            }
            TypeId::ArrayInt32 => {
                let v: Vec<i32> = values.iter().map(|x| x.to_i32()).collect();
                self.visitor.enter_array_int32(field, &v)
            }
            TypeId::ArrayUInt32 => {
                let v: Vec<u32> = values.iter().map(|x| x.to_u32()).collect();
                self.visitor.enter_array_uint32(field, &v)
            }
            TypeId::ArrayInt64 => {
                let v: Vec<i64> = values.iter().map(|x| x.to_i64()).collect();
                self.visitor.enter_array_int64(field, &v)
            }
            TypeId::ArrayUInt64 => {
                let v: Vec<u64> = values.iter().map(|x| x.to_u64()).collect();
                self.visitor.enter_array_uint64(field, &v)
            }
            TypeId::ArrayFloat => {
                let v: Vec<f32> = values.iter().map(|x| x.to_f32()).collect();
                self.visitor.enter_array_float(field, &v)
            }
            TypeId::ArrayDouble => {
                let v: Vec<f64> = values.iter().map(|x| x.to_f64()).collect();
                self.visitor.enter_array_double(field, &v)
            }
            TypeId::ArrayString => {
                let v: Vec<String> = values.iter().map(|x| x.to_text()).collect();
                self.visitor.enter_array_string(field, &v)
            }
            TypeId::ArrayEnum => {
                let v: Vec<i32> = values.iter().map(|x| x.to_i32()).collect();
                self.visitor.enter_array_enum(field, &v)
            }
            // arrays convert only to arrays
            _ => Ok(()),
        }
    }

    fn convert_array_string(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        let target = field.type_id;
        match target {
            TypeId::ArrayBool => {
                let v = parse_all(field, target, values)?;
                self.visitor.enter_array_bool(field, &v)
            }
            TypeId::ArrayInt32 => {
                let v = parse_all(field, target, values)?;
                self.visitor.enter_array_int32(field, &v)
            }
            TypeId::ArrayUInt32 => {
                let v = parse_all(field, target, values)?;
                self.visitor.enter_array_uint32(field, &v)
            }
            TypeId::ArrayInt64 => {
                let v = parse_all(field, target, values)?;
                self.visitor.enter_array_int64(field, &v)
            }
            TypeId::ArrayUInt64 => {
                let v = parse_all(field, target, values)?;
                self.visitor.enter_array_uint64(field, &v)
            }
            TypeId::ArrayFloat => {
                let v = parse_all(field, target, values)?;
                self.visitor.enter_array_float(field, &v)
            }
            TypeId::ArrayDouble => {
                let v = parse_all(field, target, values)?;
                self.visitor.enter_array_double(field, &v)
            }
            TypeId::ArrayString => self.visitor.enter_array_string(field, values),
            TypeId::ArrayEnum => self.visitor.enter_array_enum_names(field, values),
            _ => Ok(()),
        }
    }
}

fn parse_all<T: std::str::FromStr>(
    field: &FieldDef,
    target: TypeId,
    values: &[String],
) -> Result<Vec<T>, SerializeError> {
    values
        .iter()
        .map(|s| parse_text(field, target, s))
        .collect()
}

impl<V: ValueVisitor> ValueVisitor for TypeConverter<V> {
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
        if field.type_id == TypeId::Struct {
            self.visitor.enter_struct(field)
        } else {
            Ok(())
        }
    }

    fn exit_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        if field.type_id == TypeId::Struct {
            self.visitor.exit_struct(field)
        } else {
            Ok(())
        }
    }

    fn enter_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayStruct {
            self.visitor.enter_array_struct(field)
        } else {
            Ok(())
        }
    }

    fn exit_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayStruct {
            self.visitor.exit_array_struct(field)
        } else {
            Ok(())
        }
    }

    fn enter_bool(&mut self, field: &FieldDef, value: bool) -> Result<(), SerializeError> {
        if field.type_id == TypeId::Bool {
            self.visitor.enter_bool(field, value)
        } else {
            self.convert_number(field, value)
        }
    }

    fn enter_int32(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        if field.type_id == TypeId::Int32 {
            self.visitor.enter_int32(field, value)
        } else {
            self.convert_number(field, value)
        }
    }

    fn enter_uint32(&mut self, field: &FieldDef, value: u32) -> Result<(), SerializeError> {
        if field.type_id == TypeId::UInt32 {
            self.visitor.enter_uint32(field, value)
        } else {
            self.convert_number(field, value)
        }
    }

    fn enter_int64(&mut self, field: &FieldDef, value: i64) -> Result<(), SerializeError> {
        if field.type_id == TypeId::Int64 {
            self.visitor.enter_int64(field, value)
        } else {
            self.convert_number(field, value)
        }
    }

    fn enter_uint64(&mut self, field: &FieldDef, value: u64) -> Result<(), SerializeError> {
        if field.type_id == TypeId::UInt64 {
            self.visitor.enter_uint64(field, value)
        } else {
            self.convert_number(field, value)
        }
    }

    fn enter_float(&mut self, field: &FieldDef, value: f32) -> Result<(), SerializeError> {
        if field.type_id == TypeId::Float {
            self.visitor.enter_float(field, value)
        } else {
            self.convert_number(field, value)
        }
    }

    fn enter_double(&mut self, field: &FieldDef, value: f64) -> Result<(), SerializeError> {
        if field.type_id == TypeId::Double {
            self.visitor.enter_double(field, value)
        } else {
            self.convert_number(field, value)
        }
    }

    fn enter_string(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        if field.type_id == TypeId::String {
            self.visitor.enter_string(field, value)
        } else {
            self.convert_string(field, value)
        }
    }

    fn enter_string_raw(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        if field.type_id == TypeId::String {
            self.visitor.enter_string_raw(field, value)
        } else {
            let text = String::from_utf8_lossy(value);
            self.convert_string(field, &text)
        }
    }

    fn enter_bytes(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        if field.type_id == TypeId::Bytes {
            self.visitor.enter_bytes(field, value)
        } else {
            Ok(())
        }
    }

    fn enter_enum(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        if field.type_id == TypeId::Enum {
            self.visitor.enter_enum(field, value)
        } else {
            self.convert_number(field, value)
        }
    }

    fn enter_enum_name(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        if field.type_id == TypeId::Enum {
            self.visitor.enter_enum_name(field, value)
        } else {
            self.convert_string(field, value)
        }
    }

    fn enter_array_bool(
        &mut self,
        field: &FieldDef,
        values: &[bool],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayBool {
            self.visitor.enter_array_bool(field, values)
        } else {
            self.convert_array_number(field, values)
        }
    }

    fn enter_array_int32(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayInt32 {
            self.visitor.enter_array_int32(field, values)
        } else {
            self.convert_array_number(field, values)
        }
    }

    fn enter_array_uint32(
        &mut self,
        field: &FieldDef,
        values: &[u32],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayUInt32 {
            self.visitor.enter_array_uint32(field, values)
        } else {
            self.convert_array_number(field, values)
        }
    }

    fn enter_array_int64(
        &mut self,
        field: &FieldDef,
        values: &[i64],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayInt64 {
            self.visitor.enter_array_int64(field, values)
        } else {
            self.convert_array_number(field, values)
        }
    }

    fn enter_array_uint64(
        &mut self,
        field: &FieldDef,
        values: &[u64],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayUInt64 {
            self.visitor.enter_array_uint64(field, values)
        } else {
            self.convert_array_number(field, values)
        }
    }

    fn enter_array_float(
        &mut self,
        field: &FieldDef,
        values: &[f32],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayFloat {
            self.visitor.enter_array_float(field, values)
        } else {
            self.convert_array_number(field, values)
        }
    }

    fn enter_array_double(
        &mut self,
        field: &FieldDef,
        values: &[f64],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayDouble {
            self.visitor.enter_array_double(field, values)
        } else {
            self.convert_array_number(field, values)
        }
    }

    fn enter_array_string(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayString {
            self.visitor.enter_array_string(field, values)
        } else {
            self.convert_array_string(field, values)
        }
    }

    fn enter_array_bytes(
        &mut self,
        field: &FieldDef,
        values: &[Vec<u8>],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayBytes {
            self.visitor.enter_array_bytes(field, values)
        } else {
            Ok(())
        }
    }

    fn enter_array_enum(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayEnum {
            self.visitor.enter_array_enum(field, values)
        } else {
            self.convert_array_number(field, values)
        }
    }

    fn enter_array_enum_names(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        if field.type_id == TypeId::ArrayEnum {
            self.visitor.enter_array_enum_names(field, values)
        } else {
            self.convert_array_string(field, values)
        }
    }
}
