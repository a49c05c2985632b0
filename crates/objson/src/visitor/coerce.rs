//! Best-effort scalar coercions. The declared type wins over the runtime
//! representation; coercion is a cast, not a validating parse, and never
//! fails.

use crate::graph::Raw;

pub(crate) fn to_bool(raw: &Raw) -> bool {
    match raw {
        Raw::Null => false,
        Raw::Bool(b) => *b,
        Raw::Int(i) => *i != 0,
        Raw::Float(f) => *f != 0.0,
        Raw::Str(s) => !matches!(s.as_str(), "" | "0" | "false"),
        Raw::Array(entries) => !entries.is_empty(),
        Raw::Instance { .. } => true,
    }
}

pub(crate) fn to_i64(raw: &Raw) -> i64 {
    match raw {
        Raw::Null => 0,
        Raw::Bool(b) => *b as i64,
        Raw::Int(i) => *i,
        // Truncating, saturating cast.
        Raw::Float(f) => *f as i64,
        Raw::Str(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .unwrap_or_else(|_| s.parse::<f64>().map(|f| f as i64).unwrap_or(0))
        }
        Raw::Array(_) | Raw::Instance { .. } => 0,
    }
}

pub(crate) fn to_f64(raw: &Raw) -> f64 {
    match raw {
        Raw::Null => 0.0,
        Raw::Bool(b) => *b as i64 as f64,
        Raw::Int(i) => *i as f64,
        Raw::Float(f) => *f,
        Raw::Str(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Raw::Array(_) | Raw::Instance { .. } => 0.0,
    }
}

pub(crate) fn to_string(raw: &Raw) -> String {
    match raw {
        Raw::Null => String::new(),
        Raw::Bool(true) => "true".to_string(),
        Raw::Bool(false) => "false".to_string(),
        Raw::Int(i) => i.to_string(),
        Raw::Float(f) => format_float(*f),
        Raw::Str(s) => s.clone(),
        Raw::Array(_) | Raw::Instance { .. } => String::new(),
    }
}

/// Shortest float representation with a trailing `.0` trimmed. Non-finite
/// values spell out their literal names.
pub(crate) fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return if f.is_nan() {
            "NaN".to_string()
        } else if f > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    let mut buf = ryu::Buffer::new();
    let s = buf.format_finite(f);
    s.strip_suffix(".0").unwrap_or(s).to_string()
}
