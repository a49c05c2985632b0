use crate::types::TypeDescriptor;

/// Serialization metadata for one class of the object graph. Property
/// order is visitation order.
#[derive(Debug, Clone)]
pub struct ClassMeta {
    pub name: String,
    pub properties: Vec<PropertyMeta>,
}

impl ClassMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, property: PropertyMeta) -> Self {
        self.properties.push(property);
        self
    }
}

/// Serialization metadata for one property.
#[derive(Debug, Clone)]
pub struct PropertyMeta {
    pub name: String,
    pub ty: TypeDescriptor,
    /// Merge the serialized map into the owner's frame instead of nesting
    /// it under the property's key.
    pub inline: bool,
    /// Explicit key override, consulted by naming strategies.
    pub serialized_name: Option<String>,
}

impl PropertyMeta {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            inline: false,
            serialized_name: None,
        }
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    pub fn serialized_as(mut self, name: impl Into<String>) -> Self {
        self.serialized_name = Some(name.into());
        self
    }
}
