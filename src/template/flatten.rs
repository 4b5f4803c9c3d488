//! Argument value flattening
//!
//! Turns any argument value into a single line of text that can be
//! dropped inline into YAML:
//! - strings are inserted as-is
//! - numbers, bools and null use their plain form
//! - sequences and mappings become flow collections (`["a", 1]`,
//!   `{"k": "v"}`), with nested strings quoted and escaped

use serde_json::Value;

/// Flatten a value to its substitution text.
pub fn flatten(value: &Value) -> String {
    let mut out = String::new();
    match value {
        // Top-level strings are rendered quoted and then trimmed, so the
        // caller gets the raw string back.
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        other => write_flat(other, &mut out),
    }
    trim_quotes(&out).to_string()
}

fn write_flat(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        // Display on a JSON string value yields the quoted, escaped form
        Value::String(_) => out.push_str(&value.to_string()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_flat(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&Value::from(key.as_str()).to_string());
                out.push_str(": ");
                write_flat(item, out);
            }
            out.push('}');
        }
    }
}

/// Strip one leading and one trailing `"`, independently.
pub fn trim_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}
