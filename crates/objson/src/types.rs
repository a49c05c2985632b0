use serde_json::Value as JsonValue;

/// Declared type of a value handed to the visitor. Immutable; supplied by
/// the traversal engine for every visit.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Array(ArrayShape),
    /// A class type, resolved through metadata by the traversal engine.
    Class(String),
}

/// Array assembly strategy, resolved once from the declared type
/// parameters instead of branching per entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayShape {
    /// No type parameters: the keys decide between sequence and map
    /// during assembly.
    Untyped,
    /// One parameter: an ordered list of the element type.
    List(Box<TypeDescriptor>),
    /// Two parameters: a string-keyed map of the value type.
    Map(Box<TypeDescriptor>, Box<TypeDescriptor>),
}

impl ArrayShape {
    /// Declared type of the elements visited during assembly.
    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        match self {
            ArrayShape::Untyped => None,
            ArrayShape::List(element) => Some(element),
            ArrayShape::Map(_, value) => Some(value),
        }
    }
}

impl TypeDescriptor {
    pub fn untyped_array() -> Self {
        TypeDescriptor::Array(ArrayShape::Untyped)
    }

    pub fn list(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(ArrayShape::List(Box::new(element)))
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Array(ArrayShape::Map(Box::new(key), Box::new(value)))
    }

    pub fn class(name: impl Into<String>) -> Self {
        TypeDescriptor::Class(name.into())
    }

    /// Converts the legacy untyped descriptor shape,
    /// `{"name": "...", "params": [...]}`.
    ///
    /// A bare string is accepted as a name with no parameters. Names that
    /// are not built-in primitives are class names. Array descriptors take
    /// their shape from the parameter count; extra parameters are ignored.
    pub fn from_legacy(raw: &JsonValue) -> Self {
        let (name, params) = match raw {
            JsonValue::String(name) => (name.as_str(), None),
            JsonValue::Object(map) => (
                map.get("name").and_then(JsonValue::as_str).unwrap_or(""),
                map.get("params").and_then(JsonValue::as_array),
            ),
            _ => ("", None),
        };
        match name {
            "NULL" | "null" => TypeDescriptor::Null,
            "boolean" | "bool" => TypeDescriptor::Bool,
            "integer" | "int" => TypeDescriptor::Int,
            "double" | "float" => TypeDescriptor::Float,
            "string" => TypeDescriptor::Str,
            "array" => match params.map(Vec::as_slice).unwrap_or(&[]) {
                [] => TypeDescriptor::untyped_array(),
                [element] => TypeDescriptor::list(Self::from_legacy(element)),
                [key, value, ..] => {
                    TypeDescriptor::map(Self::from_legacy(key), Self::from_legacy(value))
                }
            },
            other => TypeDescriptor::Class(other.to_string()),
        }
    }
}
