//! Final text rendering. The JSON encoding itself is delegated to
//! serde_json; this module owns the error classification.

use crate::error::{Error, Result, codes};
use crate::options::RenderOptions;
use crate::value::Value;

/// Renders a completed document value to JSON text. Either the whole
/// document encodes, or the call fails; no partial output is returned.
pub fn render(value: &Value, options: RenderOptions) -> Result<String> {
    check_encodable(value)?;
    let bytes = if options.is_pretty() {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
    .map_err(classify)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

/// JSON has no representation for non-finite numbers. Reject them up
/// front instead of letting the encoder degrade them to null.
fn check_encodable(value: &Value) -> Result<()> {
    match value {
        Value::Float(f) if !f.is_finite() => Err(Error::Encode(codes::NON_FINITE)),
        Value::Seq(items) => items.iter().try_for_each(check_encodable),
        Value::Map(map) => map.iter().try_for_each(|(_, v)| check_encodable(v)),
        _ => Ok(()),
    }
}

fn classify(err: serde_json::Error) -> Error {
    use serde_json::error::Category;
    match err.classify() {
        Category::Io => Error::Encode(codes::IO),
        Category::Data => Error::Encode(codes::DATA),
        Category::Syntax | Category::Eof => Error::Encode(codes::OTHER),
    }
}
