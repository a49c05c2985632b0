#![doc = include_str!("../README.md")]

pub mod access;
pub mod error;
pub mod graph;
pub mod meta;
pub mod options;
pub mod render;
pub mod types;
pub mod value;
pub mod visitor;

pub use crate::error::{Error, Result};
pub use crate::graph::{ArrayKey, Entries, Navigator, Raw, SerializationContext};
pub use crate::meta::{ClassMeta, PropertyMeta};
pub use crate::options::RenderOptions;
pub use crate::types::{ArrayShape, TypeDescriptor};
pub use crate::value::{Map, Value};
pub use crate::visitor::JsonSerializationVisitor;

use std::io::Write;

pub fn render_to_string(value: &Value, options: RenderOptions) -> Result<String> {
    crate::render::render(value, options)
}

pub fn render_to_writer<W: Write>(
    mut writer: W,
    value: &Value,
    options: RenderOptions,
) -> Result<()> {
    let s = render_to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
