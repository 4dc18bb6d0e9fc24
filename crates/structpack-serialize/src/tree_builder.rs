//! Event-stream to `Variant`-tree materialization.

use structpack_meta::{FieldDef, MetaRegistry, StructDef};
use structpack_variant::{Variant, VariantList, VariantStruct};

use crate::{SerializeError, ValueVisitor};

/// A container that is still receiving children.
///
/// Open frames own their children until closed; popping a frame attaches the
/// finished container to the frame below it, and popping the last frame
/// yields the document root.
enum OpenFrame {
    Struct {
        name: Option<String>,
        entries: VariantStruct,
    },
    List {
        name: Option<String>,
        items: VariantList,
    },
}

impl OpenFrame {
    fn close(self) -> (Option<String>, Variant) {
        match self {
            OpenFrame::Struct { name, entries } => (name, Variant::Struct(entries)),
            OpenFrame::List { name, items } => (name, Variant::List(items)),
        }
    }
}

/// Builds a [`Variant`] tree from one event traversal.
///
/// `start_struct` opens the root; `enter_*`/`exit_*` pairs open and close
/// nested containers; scalar and array events insert into the innermost open
/// container, named when it is a struct and positional when it is a list.
/// Events arriving with no open container are ignored, and an `exit` on an
/// empty stack is a no-op, so malformed nesting never corrupts the builder.
///
/// The enum policy decides how enum events materialize: as alias strings
/// resolved through the registry (the default) or as raw integers. A failed
/// alias/value lookup aborts the traversal.
///
/// One builder handles one traversal at a time; `start_struct` resets it, so
/// an instance can be reused sequentially but never concurrently.
pub struct VariantTreeBuilder<'m> {
    meta: &'m MetaRegistry,
    enum_as_string: bool,
    stack: Vec<OpenFrame>,
    root: Option<Variant>,
}

impl<'m> VariantTreeBuilder<'m> {
    pub fn new(meta: &'m MetaRegistry) -> Self {
        Self::with_enum_policy(meta, true)
    }

    /// `enum_as_string = false` stores raw integer values for enum fields.
    pub fn with_enum_policy(meta: &'m MetaRegistry, enum_as_string: bool) -> Self {
        Self {
            meta,
            enum_as_string,
            stack: Vec::new(),
            root: None,
        }
    }

    /// Finish the traversal and yield the tree.
    ///
    /// Containers left open by a truncated event stream are closed as if
    /// their exits had arrived. `Variant::Empty` when no traversal ran.
    pub fn into_variant(mut self) -> Variant {
        while !self.stack.is_empty() {
            self.pop_frame();
        }
        self.root.take().unwrap_or_default()
    }

    fn push_struct(&mut self, name: Option<String>) {
        self.stack.push(OpenFrame::Struct {
            name,
            entries: VariantStruct::new(),
        });
    }

    fn push_list(&mut self, name: Option<String>) {
        self.stack.push(OpenFrame::List {
            name,
            items: VariantList::new(),
        });
    }

    /// Close the innermost container and attach it one level down.
    fn pop_frame(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let (name, value) = frame.close();
        match self.stack.last_mut() {
            Some(OpenFrame::Struct { entries, .. }) => {
                entries.push((name.unwrap_or_default(), value));
            }
            Some(OpenFrame::List { items, .. }) => items.push(value),
            None => self.root = Some(value),
        }
    }

    /// Insert a finished value into the innermost open container.
    fn add(&mut self, field: &FieldDef, value: Variant) {
        match self.stack.last_mut() {
            Some(OpenFrame::Struct { entries, .. }) => {
                entries.push((field.name.clone(), value));
            }
            Some(OpenFrame::List { items, .. }) => items.push(value),
            None => {}
        }
    }
}

impl ValueVisitor for VariantTreeBuilder<'_> {
    fn notify_error(&mut self, _message: &str) -> Result<(), SerializeError> {
        Ok(())
    }

    fn start_struct(&mut self, _def: &StructDef) -> Result<(), SerializeError> {
        self.stack.clear();
        self.root = None;
        self.push_struct(None);
        Ok(())
    }

    fn finished(&mut self) -> Result<(), SerializeError> {
        Ok(())
    }

    fn enter_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        if !self.stack.is_empty() {
            self.push_struct(Some(field.name.clone()));
        }
        Ok(())
    }

    fn exit_struct(&mut self, _field: &FieldDef) -> Result<(), SerializeError> {
        self.pop_frame();
        Ok(())
    }

    fn enter_array_struct(&mut self, field: &FieldDef) -> Result<(), SerializeError> {
        if !self.stack.is_empty() {
            self.push_list(Some(field.name.clone()));
        }
        Ok(())
    }

    fn exit_array_struct(&mut self, _field: &FieldDef) -> Result<(), SerializeError> {
        self.pop_frame();
        Ok(())
    }

    fn enter_bool(&mut self, field: &FieldDef, value: bool) -> Result<(), SerializeError> {
        self.add(field, Variant::Bool(value));
        Ok(())
    }

    fn enter_int32(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        self.add(field, Variant::Int32(value));
        Ok(())
    }

    fn enter_uint32(&mut self, field: &FieldDef, value: u32) -> Result<(), SerializeError> {
        self.add(field, Variant::UInt32(value));
        Ok(())
    }

    fn enter_int64(&mut self, field: &FieldDef, value: i64) -> Result<(), SerializeError> {
        self.add(field, Variant::Int64(value));
        Ok(())
    }

    fn enter_uint64(&mut self, field: &FieldDef, value: u64) -> Result<(), SerializeError> {
        self.add(field, Variant::UInt64(value));
        Ok(())
    }

    fn enter_float(&mut self, field: &FieldDef, value: f32) -> Result<(), SerializeError> {
        self.add(field, Variant::Float(value));
        Ok(())
    }

    fn enter_double(&mut self, field: &FieldDef, value: f64) -> Result<(), SerializeError> {
        self.add(field, Variant::Double(value));
        Ok(())
    }

    fn enter_string(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        self.add(field, Variant::Str(value.to_string()));
        Ok(())
    }

    fn enter_string_raw(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        let text = String::from_utf8_lossy(value).into_owned();
        self.add(field, Variant::Str(text));
        Ok(())
    }

    fn enter_bytes(&mut self, field: &FieldDef, value: &[u8]) -> Result<(), SerializeError> {
        self.add(field, Variant::Bytes(value.to_vec()));
        Ok(())
    }

    fn enter_enum(&mut self, field: &FieldDef, value: i32) -> Result<(), SerializeError> {
        if self.enum_as_string {
            let alias = self.meta.enum_alias(field, value)?.to_string();
            self.add(field, Variant::Str(alias));
        } else {
            self.add(field, Variant::Int32(value));
        }
        Ok(())
    }

    fn enter_enum_name(&mut self, field: &FieldDef, value: &str) -> Result<(), SerializeError> {
        if self.enum_as_string {
            self.add(field, Variant::Str(value.to_string()));
        } else {
            let v = self.meta.enum_value(field, value)?;
            self.add(field, Variant::Int32(v));
        }
        Ok(())
    }

    fn enter_array_bool(
        &mut self,
        field: &FieldDef,
        values: &[bool],
    ) -> Result<(), SerializeError> {
        self.add(field, Variant::ArrayBool(values.to_vec()));
        Ok(())
    }

    fn enter_array_int32(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        self.add(field, Variant::ArrayInt32(values.to_vec()));
        Ok(())
    }

    fn enter_array_uint32(
        &mut self,
        field: &FieldDef,
        values: &[u32],
    ) -> Result<(), SerializeError> {
        self.add(field, Variant::ArrayUInt32(values.to_vec()));
        Ok(())
    }

    fn enter_array_int64(
        &mut self,
        field: &FieldDef,
        values: &[i64],
    ) -> Result<(), SerializeError> {
        self.add(field, Variant::ArrayInt64(values.to_vec()));
        Ok(())
    }

    fn enter_array_uint64(
        &mut self,
        field: &FieldDef,
        values: &[u64],
    ) -> Result<(), SerializeError> {
        self.add(field, Variant::ArrayUInt64(values.to_vec()));
        Ok(())
    }

    fn enter_array_float(
        &mut self,
        field: &FieldDef,
        values: &[f32],
    ) -> Result<(), SerializeError> {
        self.add(field, Variant::ArrayFloat(values.to_vec()));
        Ok(())
    }

    fn enter_array_double(
        &mut self,
        field: &FieldDef,
        values: &[f64],
    ) -> Result<(), SerializeError> {
        self.add(field, Variant::ArrayDouble(values.to_vec()));
        Ok(())
    }

    fn enter_array_string(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        self.add(field, Variant::ArrayString(values.to_vec()));
        Ok(())
    }

    fn enter_array_bytes(
        &mut self,
        field: &FieldDef,
        values: &[Vec<u8>],
    ) -> Result<(), SerializeError> {
        self.add(field, Variant::ArrayBytes(values.to_vec()));
        Ok(())
    }

    fn enter_array_enum(
        &mut self,
        field: &FieldDef,
        values: &[i32],
    ) -> Result<(), SerializeError> {
        if self.enum_as_string {
            let mut aliases = Vec::with_capacity(values.len());
            for &value in values {
                aliases.push(self.meta.enum_alias(field, value)?.to_string());
            }
            self.add(field, Variant::ArrayString(aliases));
        } else {
            self.add(field, Variant::ArrayInt32(values.to_vec()));
        }
        Ok(())
    }

    fn enter_array_enum_names(
        &mut self,
        field: &FieldDef,
        values: &[String],
    ) -> Result<(), SerializeError> {
        if self.enum_as_string {
            self.add(field, Variant::ArrayString(values.to_vec()));
        } else {
            let mut ints = Vec::with_capacity(values.len());
            for value in values {
                ints.push(self.meta.enum_value(field, value)?);
            }
            self.add(field, Variant::ArrayInt32(ints));
        }
        Ok(())
    }
}
