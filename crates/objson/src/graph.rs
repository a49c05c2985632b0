//! Boundary types shared with the external traversal engine.

use crate::types::TypeDescriptor;
use crate::value::Value;
use crate::visitor::JsonSerializationVisitor;

/// Key of one array entry as produced by the traversal engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayKey {
    Index(usize),
    Name(String),
}

impl ArrayKey {
    /// Key used when the entry lands in a map-shaped result.
    pub fn as_map_key(&self) -> String {
        match self {
            ArrayKey::Index(index) => index.to_string(),
            ArrayKey::Name(name) => name.clone(),
        }
    }
}

impl From<usize> for ArrayKey {
    fn from(index: usize) -> Self {
        ArrayKey::Index(index)
    }
}

impl From<&str> for ArrayKey {
    fn from(name: &str) -> Self {
        ArrayKey::Name(name.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(name: String) -> Self {
        ArrayKey::Name(name)
    }
}

/// Array entries in traversal order. List-shaped assembly ignores the
/// keys; map-shaped assembly preserves them.
pub type Entries = Vec<(ArrayKey, Raw)>;

/// Dynamic value handed over by the traversal engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Raw {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Entries),
    /// A live object: class name plus named fields, read through a
    /// [`PropertyAccessor`](crate::access::PropertyAccessor).
    Instance {
        class: String,
        fields: Vec<(String, Raw)>,
    },
}

impl Raw {
    pub fn field(&self, name: &str) -> Option<&Raw> {
        match self {
            Raw::Instance { fields, .. } => {
                fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }
}

impl From<bool> for Raw {
    fn from(b: bool) -> Self {
        Raw::Bool(b)
    }
}

impl From<i64> for Raw {
    fn from(i: i64) -> Self {
        Raw::Int(i)
    }
}

impl From<f64> for Raw {
    fn from(f: f64) -> Self {
        Raw::Float(f)
    }
}

impl From<&str> for Raw {
    fn from(s: &str) -> Self {
        Raw::Str(s.to_string())
    }
}

impl From<String> for Raw {
    fn from(s: String) -> Self {
        Raw::Str(s)
    }
}

/// Re-entrant dispatch of the external traversal engine.
///
/// Called once per array element and per property value; the engine may
/// call back into the visitor, nesting further frame pushes and pops
/// before this returns.
pub trait Navigator {
    fn accept(
        &mut self,
        visitor: &mut JsonSerializationVisitor,
        value: &Raw,
        ty: Option<&TypeDescriptor>,
        ctx: &mut SerializationContext,
    ) -> Value;
}

/// Cross-cutting policy carried through one top-level serialization call.
#[derive(Debug, Clone, Default)]
pub struct SerializationContext {
    serialize_null: bool,
}

impl SerializationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether null results are written out or dropped. Off by default.
    pub fn serialize_null(mut self, yes: bool) -> Self {
        self.serialize_null = yes;
        self
    }

    pub fn should_serialize_null(&self) -> bool {
        self.serialize_null
    }
}
