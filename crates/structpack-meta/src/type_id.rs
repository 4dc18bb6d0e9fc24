//! Declared field types.

/// The closed set of types a schema field can declare.
///
/// Every field carries exactly one scalar-or-array kind; `Struct` and
/// `ArrayStruct` reference a [`StructDef`](crate::StructDef) through the
/// field's `type_name`, `Enum` and `ArrayEnum` reference an
/// [`EnumDef`](crate::EnumDef) the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    Bool,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
    Bytes,
    Enum,
    Struct,
    ArrayBool,
    ArrayInt32,
    ArrayUInt32,
    ArrayInt64,
    ArrayUInt64,
    ArrayFloat,
    ArrayDouble,
    ArrayString,
    ArrayBytes,
    ArrayEnum,
    ArrayStruct,
}

impl TypeId {
    /// True for the `Array*` kinds.
    pub fn is_array(self) -> bool {
        self.element_type().is_some()
    }

    /// The scalar counterpart of an array kind, `None` for scalar kinds.
    pub fn element_type(self) -> Option<TypeId> {
        match self {
            TypeId::ArrayBool => Some(TypeId::Bool),
            TypeId::ArrayInt32 => Some(TypeId::Int32),
            TypeId::ArrayUInt32 => Some(TypeId::UInt32),
            TypeId::ArrayInt64 => Some(TypeId::Int64),
            TypeId::ArrayUInt64 => Some(TypeId::UInt64),
            TypeId::ArrayFloat => Some(TypeId::Float),
            TypeId::ArrayDouble => Some(TypeId::Double),
            TypeId::ArrayString => Some(TypeId::String),
            TypeId::ArrayBytes => Some(TypeId::Bytes),
            TypeId::ArrayEnum => Some(TypeId::Enum),
            TypeId::ArrayStruct => Some(TypeId::Struct),
            _ => None,
        }
    }
}
