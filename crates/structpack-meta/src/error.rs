use thiserror::Error;

/// Lookup failures against the schema model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetaError {
    #[error("unknown struct type `{0}`")]
    UnknownStruct(String),
    #[error("unknown enum type `{0}`")]
    UnknownEnum(String),
    #[error("enum `{enum_name}` has no entry with value {value}")]
    UnknownEnumValue { enum_name: String, value: i32 },
    #[error("enum `{enum_name}` has no alias `{alias}`")]
    UnknownEnumAlias { enum_name: String, alias: String },
}
