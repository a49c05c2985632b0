//! Assembly of document values under external depth-first traversal.

mod coerce;
mod compat;

use crate::access::{FieldAccessor, IdentityNaming, NamingStrategy, PropertyAccessor};
use crate::error::Result;
use crate::graph::{ArrayKey, Navigator, Raw, SerializationContext};
use crate::meta::{ClassMeta, PropertyMeta};
use crate::options::RenderOptions;
use crate::render;
use crate::types::{ArrayShape, TypeDescriptor};
use crate::value::{Map, Value};

/// One saved entry of the frame stack.
#[derive(Debug)]
enum Saved {
    /// Frame of an enclosing object (`None` when there is none yet).
    Frame(Option<Map>),
    /// Guard for an array being assembled. Keeps the stack depth aligned
    /// with the traversal depth across re-entrant element visits.
    Array,
}

/// JSON serialization visitor.
///
/// An external [`Navigator`] walks a typed object graph depth-first and
/// calls in once per value; the visitor assembles scalars, sequences and
/// insertion-ordered maps, tracking nested objects on an explicit frame
/// stack. State lives for one top-level serialization call; nothing is
/// shared across calls.
pub struct JsonSerializationVisitor {
    options: RenderOptions,
    naming: Box<dyn NamingStrategy>,
    accessor: Box<dyn PropertyAccessor>,
    root: Option<Value>,
    stack: Vec<Saved>,
    data: Option<Map>,
}

impl JsonSerializationVisitor {
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            naming: Box::new(IdentityNaming),
            accessor: Box::new(FieldAccessor),
            root: None,
            stack: Vec::new(),
            data: None,
        }
    }

    pub fn with_naming(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming = Box::new(naming);
        self
    }

    pub fn with_accessor(mut self, accessor: impl PropertyAccessor + 'static) -> Self {
        self.accessor = Box::new(accessor);
        self
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn serialize_null(&self, _ty: &TypeDescriptor, _ctx: &SerializationContext) -> Value {
        Value::Null
    }

    pub fn serialize_string(
        &self,
        data: &Raw,
        _ty: &TypeDescriptor,
        _ctx: &SerializationContext,
    ) -> Value {
        Value::String(coerce::to_string(data))
    }

    pub fn serialize_boolean(
        &self,
        data: &Raw,
        _ty: &TypeDescriptor,
        _ctx: &SerializationContext,
    ) -> Value {
        Value::Bool(coerce::to_bool(data))
    }

    pub fn serialize_integer(
        &self,
        data: &Raw,
        _ty: &TypeDescriptor,
        _ctx: &SerializationContext,
    ) -> Value {
        Value::Int(coerce::to_i64(data))
    }

    pub fn serialize_double(
        &self,
        data: &Raw,
        _ty: &TypeDescriptor,
        _ctx: &SerializationContext,
    ) -> Value {
        Value::Float(coerce::to_f64(data))
    }

    /// Assembles an array per its declared shape: map-shaped descriptors
    /// yield a key-preserving map, list-shaped ones an ordered sequence,
    /// and untyped arrays pick by their keys. Null elements are dropped
    /// unless the context says otherwise.
    pub fn serialize_array(
        &mut self,
        data: &[(ArrayKey, Raw)],
        ty: &TypeDescriptor,
        navigator: &mut dyn Navigator,
        ctx: &mut SerializationContext,
    ) -> Value {
        let untyped = ArrayShape::Untyped;
        let shape = match ty {
            TypeDescriptor::Array(shape) => shape,
            _ => &untyped,
        };
        let element_type = shape.element_type();

        self.stack.push(Saved::Array);
        let result = match shape {
            ArrayShape::Map(..) => self.assemble_map(data, element_type, navigator, ctx),
            ArrayShape::List(_) => self.assemble_seq(data, element_type, navigator, ctx),
            ArrayShape::Untyped => {
                let keyed = data.iter().any(|(k, _)| matches!(k, ArrayKey::Name(_)));
                if keyed {
                    self.assemble_map(data, element_type, navigator, ctx)
                } else {
                    self.assemble_seq(data, element_type, navigator, ctx)
                }
            }
        };
        match self.stack.pop() {
            Some(Saved::Array) => {}
            _ => panic!("frame stack out of balance after array assembly"),
        }
        result
    }

    fn assemble_seq(
        &mut self,
        data: &[(ArrayKey, Raw)],
        element_type: Option<&TypeDescriptor>,
        navigator: &mut dyn Navigator,
        ctx: &mut SerializationContext,
    ) -> Value {
        let mut seq = Vec::with_capacity(data.len());
        for (_, raw) in data {
            let value = navigator.accept(self, raw, element_type, ctx);
            if value.is_null() && !ctx.should_serialize_null() {
                continue;
            }
            seq.push(value);
        }
        Value::Seq(seq)
    }

    fn assemble_map(
        &mut self,
        data: &[(ArrayKey, Raw)],
        element_type: Option<&TypeDescriptor>,
        navigator: &mut dyn Navigator,
        ctx: &mut SerializationContext,
    ) -> Value {
        let mut map = Map::with_capacity(data.len());
        for (key, raw) in data {
            let value = navigator.accept(self, raw, element_type, ctx);
            if value.is_null() && !ctx.should_serialize_null() {
                continue;
            }
            map.insert(key.as_map_key(), value);
        }
        Value::Map(map)
    }

    /// Opens a fresh frame for an object. Must be called before any of
    /// its properties are visited.
    pub fn start_serializing_object(
        &mut self,
        _meta: &ClassMeta,
        _data: &Raw,
        _ty: &TypeDescriptor,
        _ctx: &SerializationContext,
    ) {
        let saved = self.data.take();
        self.stack.push(Saved::Frame(saved));
        self.data = Some(Map::new());
    }

    /// Closes the object's frame and returns it as the object's value.
    /// Called exactly once per [`start_serializing_object`]; an object
    /// with no properties yields an empty map.
    ///
    /// [`start_serializing_object`]: JsonSerializationVisitor::start_serializing_object
    pub fn end_serializing_object(
        &mut self,
        _meta: &ClassMeta,
        _data: &Raw,
        _ty: &TypeDescriptor,
        _ctx: &SerializationContext,
    ) -> Value {
        let frame = self
            .data
            .take()
            .expect("object exit without a matching enter");
        match self.stack.pop() {
            Some(Saved::Frame(previous)) => self.data = previous,
            _ => panic!("frame stack out of balance"),
        }
        Value::Map(frame)
    }

    /// Reads a property off `owner`, recurses through the navigator and
    /// writes the result into the active frame under the translated key.
    /// Null results honor the context's policy; inline map results merge
    /// into the frame instead of nesting.
    pub fn serialize_property(
        &mut self,
        meta: &PropertyMeta,
        owner: &Raw,
        navigator: &mut dyn Navigator,
        ctx: &mut SerializationContext,
    ) {
        let raw = self.accessor.read(owner, meta);
        let value = navigator.accept(self, &raw, Some(&meta.ty), ctx);
        if value.is_null() && !ctx.should_serialize_null() {
            return;
        }

        let key = self.naming.translate(meta);
        let frame = self
            .data
            .as_mut()
            .expect("property visited outside an open object");

        if meta.inline {
            if let Value::Map(map) = value {
                frame.merge(map);
                return;
            }
        }

        frame.insert(key, value);
    }

    /// True if the active frame already holds `key`.
    pub fn has_data(&self, key: &str) -> bool {
        self.data
            .as_ref()
            .is_some_and(|frame| frame.contains_key(key))
    }

    /// Writes `key` on the active frame, bypassing null and inline
    /// policy. The caller decides whether the value belongs there.
    pub fn set_data(&mut self, key: impl Into<String>, value: Value) {
        let frame = self.data.as_mut().expect("no active frame to write to");
        frame.insert(key.into(), value);
    }

    /// Captures the completed top-level document value.
    pub fn set_root(&mut self, root: Value) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }

    /// Current frame stack depth; zero between top-level serializations.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Renders an assembled document value with the stored options.
    pub fn serialization_result(&self, value: &Value) -> Result<String> {
        render::render(value, self.options)
    }
}

impl Default for JsonSerializationVisitor {
    fn default() -> Self {
        Self::new()
    }
}
