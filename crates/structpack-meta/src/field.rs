//! Field and struct descriptors.

use crate::TypeId;

/// A single field of a struct definition.
///
/// `type_name` names the referenced [`StructDef`](crate::StructDef) or
/// [`EnumDef`](crate::EnumDef) for `Struct`/`ArrayStruct`/`Enum`/`ArrayEnum`
/// fields and is empty for plain primitives. Descriptors are immutable once
/// the owning registry is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub type_id: TypeId,
    pub type_name: String,
}

impl FieldDef {
    pub fn new(type_id: TypeId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id,
            type_name: String::new(),
        }
    }

    /// A field referencing a named struct or enum definition.
    pub fn with_type_name(
        type_id: TypeId,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_id,
            type_name: type_name.into(),
        }
    }
}

/// An ordered sequence of fields, registered under a dotted type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    type_name: String,
    fields: Vec<FieldDef>,
}

impl StructDef {
    pub fn new(type_name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First field with the given name.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_at(&self, index: usize) -> Option<&FieldDef> {
        self.fields.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_by_name_and_index() {
        let def = StructDef::new(
            "test.Point",
            vec![
                FieldDef::new(TypeId::Int32, "x"),
                FieldDef::new(TypeId::Int32, "y"),
            ],
        );
        assert_eq!(def.len(), 2);
        assert_eq!(def.field_by_name("y").unwrap().type_id, TypeId::Int32);
        assert_eq!(def.field_at(0).unwrap().name, "x");
        assert!(def.field_by_name("z").is_none());
    }

    #[test]
    fn reference_fields_carry_type_name() {
        let f = FieldDef::with_type_name(TypeId::Enum, "state", "test.State");
        assert_eq!(f.type_name, "test.State");
        assert!(FieldDef::new(TypeId::Bool, "flag").type_name.is_empty());
    }
}
