//! Definition registry and enum alias tables.

use std::collections::HashMap;

use crate::{FieldDef, MetaError, StructDef};

/// One named value of an enum definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub name: String,
    pub value: i32,
}

impl EnumEntry {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A bidirectional mapping between enum values and their alias strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    type_name: String,
    entries: Vec<EnumEntry>,
}

impl EnumDef {
    pub fn new(type_name: impl Into<String>, entries: Vec<EnumEntry>) -> Self {
        Self {
            type_name: type_name.into(),
            entries,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    pub fn alias_of(&self, value: i32) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.name.as_str())
    }

    pub fn value_of(&self, alias: &str) -> Option<i32> {
        self.entries.iter().find(|e| e.name == alias).map(|e| e.value)
    }
}

/// Owns all struct and enum definitions of a schema.
///
/// Populated once with [`add_struct`](Self::add_struct) /
/// [`add_enum`](Self::add_enum), then queried through `&self` only, so one
/// registry can back any number of concurrent traversals.
#[derive(Debug, Default, Clone)]
pub struct MetaRegistry {
    structs: HashMap<String, StructDef>,
    enums: HashMap<String, EnumDef>,
}

impl MetaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_struct(&mut self, def: StructDef) {
        self.structs.insert(def.type_name().to_string(), def);
    }

    pub fn add_enum(&mut self, def: EnumDef) {
        self.enums.insert(def.type_name().to_string(), def);
    }

    pub fn struct_def(&self, type_name: &str) -> Option<&StructDef> {
        self.structs.get(type_name)
    }

    pub fn enum_def(&self, type_name: &str) -> Option<&EnumDef> {
        self.enums.get(type_name)
    }

    /// Alias string of `value` for the enum referenced by `field.type_name`.
    pub fn enum_alias(&self, field: &FieldDef, value: i32) -> Result<&str, MetaError> {
        let def = self
            .enums
            .get(&field.type_name)
            .ok_or_else(|| MetaError::UnknownEnum(field.type_name.clone()))?;
        def.alias_of(value).ok_or_else(|| MetaError::UnknownEnumValue {
            enum_name: field.type_name.clone(),
            value,
        })
    }

    /// Integer value of `alias` for the enum referenced by `field.type_name`.
    pub fn enum_value(&self, field: &FieldDef, alias: &str) -> Result<i32, MetaError> {
        let def = self
            .enums
            .get(&field.type_name)
            .ok_or_else(|| MetaError::UnknownEnum(field.type_name.clone()))?;
        def.value_of(alias).ok_or_else(|| MetaError::UnknownEnumAlias {
            enum_name: field.type_name.clone(),
            alias: alias.to_string(),
        })
    }
}
