#![allow(dead_code)]

use structpack_meta::{FieldDef, StructDef};
use structpack_serialize::{SerializeError, ValueVisitor};

/// One recorded visitor call, field identified by name.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    NotifyError(String),
    StartStruct(String),
    Finished,
    EnterStruct(String),
    ExitStruct(String),
    EnterArrayStruct(String),
    ExitArrayStruct(String),
    Bool(String, bool),
    Int32(String, i32),
    UInt32(String, u32),
    Int64(String, i64),
    UInt64(String, u64),
    Float(String, f32),
    Double(String, f64),
    Str(String, String),
    StrRaw(String, Vec<u8>),
    Bytes(String, Vec<u8>),
    Enum(String, i32),
    EnumName(String, String),
    ArrayBool(String, Vec<bool>),
    ArrayInt32(String, Vec<i32>),
    ArrayUInt32(String, Vec<u32>),
    ArrayInt64(String, Vec<i64>),
    ArrayUInt64(String, Vec<u64>),
    ArrayFloat(String, Vec<f32>),
    ArrayDouble(String, Vec<f64>),
    ArrayString(String, Vec<String>),
    ArrayBytes(String, Vec<Vec<u8>>),
    ArrayEnum(String, Vec<i32>),
    ArrayEnumNames(String, Vec<String>),
}

/// Visitor that records every call for sequence assertions.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueVisitor for Recorder {
    fn notify_error(&mut self, message: &str) -> Result<(), SerializeError> {
        self.events.push(Event::NotifyError(message.to_string()));
        Ok(())
    }
    fn start_struct(&mut self, def: &StructDef) -> Result<(), SerializeError> {
        self.events
            .push(Event::StartStruct(def.type_name().to_string()));
        Ok(())
    }
    fn finished(&mut self) -> Result<(), SerializeError> {
        self.events.push(Event::Finished);
        Ok(())
    }
    fn enter_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.events.push(Event::EnterStruct(field.name.clone()));
        Ok(())
    }
    fn exit_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.events.push(Event::ExitStruct(field.name.clone()));
        Ok(())
    }
    fn enter_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.events
            .push(Event::EnterArrayStruct(field.name.clone()));
        Ok(())
    }
    fn exit_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        self.events.push(Event::ExitArrayStruct(field.name.clone()));
        Ok(())
    }
    fn enter_bool(&mut self, field: &FieldDef, value: bool) -> Result<(), SerializeError> {
        self.events.push(Event::Bool(field.name.clone(), value));
        Ok(())
    }
    fn enter_int32(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        self.events.push(Event::Int32(field.name.clone(), value));
        Ok(())
    }
    fn enter_uint32(&mut self, field: &FieldDef, value: u32) -> Result<(), SerializeError> {
        self.events.push(Event::UInt32(field.name.clone(), value));
        Ok(())
    }
    fn enter_int64(&mut self, field: &FieldDef, value: i64) -> Result<(), SerializeError> {
        self.events.push(Event::Int64(field.name.clone(), value));
        Ok(())
    }
    fn enter_uint64(&mut self, field: &FieldDef, value: u64) -> Result<(), SerializeError> {
        self.events.push(Event::UInt64(field.name.clone(), value));
        Ok(())
    }
    fn enter_float(&mut self, field: &FieldDef, value: f32) -> Result<(), SerializeError> {
        self.events.push(Event::Float(field.name.clone(), value));
        Ok(())
    }
    fn enter_double(&mut self, field: &FieldDef, value: f64) -> Result<(), SerializeError> {
        self.events.push(Event::Double(field.name.clone(), value));
        Ok(())
    }
    fn enter_string(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        self.events
            .push(Event::Str(field.name.clone(), value.to_string()));
        Ok(())
    }
    fn enter_string_raw(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        self.events
            .push(Event::StrRaw(field.name.clone(), value.to_vec()));
        Ok(())
    }
    fn enter_bytes(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        self.events
            .push(Event::Bytes(field.name.clone(), value.to_vec()));
        Ok(())
    }
    fn enter_enum(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        self.events.push(Event::Enum(field.name.clone(), value));
        Ok(())
    }
    fn enter_enum_name(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        self.events
            .push(Event::EnumName(field.name.clone(), value.to_string()));
        Ok(())
    }
    fn enter_array_bool(
        &mut self,
        field: &FieldDef,
        values: &[bool],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayBool(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_int32(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayInt32(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_uint32(
        &mut self,
        field: &FieldDef,
        values: &[u32],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayUInt32(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_int64(
        &mut self,
        field: &FieldDef,
        values: &[i64],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayInt64(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_uint64(
        &mut self,
        field: &FieldDef,
        values: &[u64],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayUInt64(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_float(
        &mut self,
        field: &FieldDef,
        values: &[f32],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayFloat(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_double(
        &mut self,
        field: &FieldDef,
        values: &[f64],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayDouble(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_string(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayString(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_bytes(
        &mut self,
        field: &FieldDef,
        values: &[Vec<u8>],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayBytes(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_enum(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayEnum(field.name.clone(), values.to_vec()));
        Ok(())
    }
    fn enter_array_enum_names(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        self.events
            .push(Event::ArrayEnumNames(field.name.clone(), values.to_vec()));
        Ok(())
    }
}
