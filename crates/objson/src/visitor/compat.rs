//! Legacy invocation shape: type descriptors arrive as untyped JSON
//! mappings (`{"name": "...", "params": [...]}`) and are converted before
//! delegating. No serialization policy lives here.

use serde_json::Value as JsonValue;

use super::JsonSerializationVisitor;
use crate::error::Result;
use crate::graph::{ArrayKey, Navigator, Raw, SerializationContext};
use crate::meta::{ClassMeta, PropertyMeta};
use crate::types::TypeDescriptor;
use crate::value::Value;

impl JsonSerializationVisitor {
    #[deprecated(note = "use `serialize_null` with a typed descriptor")]
    pub fn visit_null(&self, _data: &Raw, ty: &JsonValue, ctx: &SerializationContext) -> Value {
        self.serialize_null(&TypeDescriptor::from_legacy(ty), ctx)
    }

    #[deprecated(note = "use `serialize_string` with a typed descriptor")]
    pub fn visit_string(&self, data: &Raw, ty: &JsonValue, ctx: &SerializationContext) -> Value {
        self.serialize_string(data, &TypeDescriptor::from_legacy(ty), ctx)
    }

    #[deprecated(note = "use `serialize_boolean` with a typed descriptor")]
    pub fn visit_boolean(&self, data: &Raw, ty: &JsonValue, ctx: &SerializationContext) -> Value {
        self.serialize_boolean(data, &TypeDescriptor::from_legacy(ty), ctx)
    }

    #[deprecated(note = "use `serialize_integer` with a typed descriptor")]
    pub fn visit_integer(&self, data: &Raw, ty: &JsonValue, ctx: &SerializationContext) -> Value {
        self.serialize_integer(data, &TypeDescriptor::from_legacy(ty), ctx)
    }

    #[deprecated(note = "use `serialize_double` with a typed descriptor")]
    pub fn visit_double(&self, data: &Raw, ty: &JsonValue, ctx: &SerializationContext) -> Value {
        self.serialize_double(data, &TypeDescriptor::from_legacy(ty), ctx)
    }

    #[deprecated(note = "use `serialize_array` with a typed descriptor")]
    pub fn visit_array(
        &mut self,
        data: &[(ArrayKey, Raw)],
        ty: &JsonValue,
        navigator: &mut dyn Navigator,
        ctx: &mut SerializationContext,
    ) -> Value {
        self.serialize_array(data, &TypeDescriptor::from_legacy(ty), navigator, ctx)
    }

    #[deprecated(note = "use `start_serializing_object` with a typed descriptor")]
    pub fn start_visiting_object(
        &mut self,
        meta: &ClassMeta,
        data: &Raw,
        ty: &JsonValue,
        ctx: &SerializationContext,
    ) {
        self.start_serializing_object(meta, data, &TypeDescriptor::from_legacy(ty), ctx)
    }

    #[deprecated(note = "use `end_serializing_object` with a typed descriptor")]
    pub fn end_visiting_object(
        &mut self,
        meta: &ClassMeta,
        data: &Raw,
        ty: &JsonValue,
        ctx: &SerializationContext,
    ) -> Value {
        self.end_serializing_object(meta, data, &TypeDescriptor::from_legacy(ty), ctx)
    }

    #[deprecated(note = "use `serialize_property`")]
    pub fn visit_property(
        &mut self,
        meta: &PropertyMeta,
        owner: &Raw,
        navigator: &mut dyn Navigator,
        ctx: &mut SerializationContext,
    ) {
        self.serialize_property(meta, owner, navigator, ctx)
    }

    #[deprecated(note = "use `serialization_result` with the captured root")]
    pub fn result(&self) -> Result<String> {
        self.serialization_result(self.root().unwrap_or(&Value::Null))
    }
}
