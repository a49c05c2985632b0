//! Property access and key naming, pluggable at the visitor seam.

use crate::graph::Raw;
use crate::meta::PropertyMeta;

/// Reads a property value off a live object.
pub trait PropertyAccessor {
    fn read(&self, owner: &Raw, property: &PropertyMeta) -> Raw;
}

/// Default accessor: reads named fields off [`Raw::Instance`] values.
/// Missing fields and non-instance owners read as null.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldAccessor;

impl PropertyAccessor for FieldAccessor {
    fn read(&self, owner: &Raw, property: &PropertyMeta) -> Raw {
        owner.field(&property.name).cloned().unwrap_or(Raw::Null)
    }
}

/// Translates a property into its emitted key.
pub trait NamingStrategy {
    fn translate(&self, property: &PropertyMeta) -> String;
}

/// Emits the property name unchanged. An explicit serialized name wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNaming;

impl NamingStrategy for IdentityNaming {
    fn translate(&self, property: &PropertyMeta) -> String {
        property
            .serialized_name
            .clone()
            .unwrap_or_else(|| property.name.clone())
    }
}

/// Converts camelCase property names to snake_case keys. An explicit
/// serialized name wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseNaming;

impl NamingStrategy for SnakeCaseNaming {
    fn translate(&self, property: &PropertyMeta) -> String {
        if let Some(name) = &property.serialized_name {
            return name.clone();
        }
        let mut out = String::with_capacity(property.name.len() + 4);
        for ch in property.name.chars() {
            if ch.is_ascii_uppercase() {
                if !out.is_empty() {
                    out.push('_');
                }
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDescriptor;

    #[test]
    fn snake_case_translation() {
        let naming = SnakeCaseNaming;
        let prop = PropertyMeta::new("createdAt", TypeDescriptor::Str);
        assert_eq!(naming.translate(&prop), "created_at");

        let plain = PropertyMeta::new("id", TypeDescriptor::Int);
        assert_eq!(naming.translate(&plain), "id");
    }

    #[test]
    fn serialized_name_wins() {
        let prop = PropertyMeta::new("createdAt", TypeDescriptor::Str).serialized_as("created");
        assert_eq!(SnakeCaseNaming.translate(&prop), "created");
        assert_eq!(IdentityNaming.translate(&prop), "created");
    }

    #[test]
    fn field_accessor_reads_missing_as_null() {
        let owner = Raw::Instance {
            class: "User".into(),
            fields: vec![("id".into(), Raw::Int(7))],
        };
        let id = PropertyMeta::new("id", TypeDescriptor::Int);
        let gone = PropertyMeta::new("gone", TypeDescriptor::Int);
        assert_eq!(FieldAccessor.read(&owner, &id), Raw::Int(7));
        assert_eq!(FieldAccessor.read(&owner, &gone), Raw::Null);
    }
}
