//! Shared test traversal engine: a depth-first navigator over `Raw`
//! values with a class-metadata registry.

#![allow(dead_code)]

use objson::{
    ArrayKey, ClassMeta, JsonSerializationVisitor, Navigator, Raw, SerializationContext,
    TypeDescriptor, Value,
};

pub struct TestNavigator {
    classes: Vec<ClassMeta>,
}

impl TestNavigator {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    pub fn register(mut self, class: ClassMeta) -> Self {
        self.classes.push(class);
        self
    }

    fn class(&self, name: &str) -> Option<ClassMeta> {
        self.classes.iter().find(|c| c.name == name).cloned()
    }

    /// Serializes one value as the top-level document and captures it as
    /// the visitor's root.
    pub fn serialize(
        &mut self,
        visitor: &mut JsonSerializationVisitor,
        value: &Raw,
        ty: Option<&TypeDescriptor>,
        ctx: &mut SerializationContext,
    ) -> Value {
        let root = self.accept(visitor, value, ty, ctx);
        visitor.set_root(root.clone());
        root
    }
}

impl Navigator for TestNavigator {
    fn accept(
        &mut self,
        visitor: &mut JsonSerializationVisitor,
        value: &Raw,
        ty: Option<&TypeDescriptor>,
        ctx: &mut SerializationContext,
    ) -> Value {
        // Null data short-circuits regardless of the declared type, so
        // that null-suppression policy sees it.
        if matches!(value, Raw::Null) {
            return visitor.serialize_null(&TypeDescriptor::Null, ctx);
        }
        let ty = match ty {
            Some(ty) => ty.clone(),
            None => infer(value),
        };
        match &ty {
            TypeDescriptor::Null => visitor.serialize_null(&ty, ctx),
            TypeDescriptor::Bool => visitor.serialize_boolean(value, &ty, ctx),
            TypeDescriptor::Int => visitor.serialize_integer(value, &ty, ctx),
            TypeDescriptor::Float => visitor.serialize_double(value, &ty, ctx),
            TypeDescriptor::Str => visitor.serialize_string(value, &ty, ctx),
            TypeDescriptor::Array(_) => {
                let empty = Vec::new();
                let entries = match value {
                    Raw::Array(entries) => entries,
                    _ => &empty,
                };
                visitor.serialize_array(entries, &ty, self, ctx)
            }
            TypeDescriptor::Class(name) => {
                let meta = self
                    .class(name)
                    .unwrap_or_else(|| panic!("unregistered class {name}"));
                visitor.start_serializing_object(&meta, value, &ty, ctx);
                for property in &meta.properties {
                    visitor.serialize_property(property, value, self, ctx);
                }
                visitor.end_serializing_object(&meta, value, &ty, ctx)
            }
        }
    }
}

fn infer(value: &Raw) -> TypeDescriptor {
    match value {
        Raw::Null => TypeDescriptor::Null,
        Raw::Bool(_) => TypeDescriptor::Bool,
        Raw::Int(_) => TypeDescriptor::Int,
        Raw::Float(_) => TypeDescriptor::Float,
        Raw::Str(_) => TypeDescriptor::Str,
        Raw::Array(_) => TypeDescriptor::untyped_array(),
        Raw::Instance { class, .. } => TypeDescriptor::class(class.clone()),
    }
}

/// Builds an index-keyed raw array.
pub fn list(items: Vec<Raw>) -> Raw {
    Raw::Array(
        items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (ArrayKey::Index(i), v))
            .collect(),
    )
}

/// Builds a name-keyed raw array.
pub fn keyed(entries: Vec<(&str, Raw)>) -> Raw {
    Raw::Array(
        entries
            .into_iter()
            .map(|(k, v)| (ArrayKey::from(k), v))
            .collect(),
    )
}

/// Builds a raw class instance.
pub fn instance(class: &str, fields: Vec<(&str, Raw)>) -> Raw {
    Raw::Instance {
        class: class.to_string(),
        fields: fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    }
}

/// Builds an expected map value.
pub fn map(entries: Vec<(&str, Value)>) -> Value {
    Value::Map(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}
