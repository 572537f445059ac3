//! Rendering of key/value lists into display strings.
//!
//! Every log line's key/value text is produced by this one function, so the
//! accumulated-context half and the per-call half of a line can never drift
//! apart in formatting.

use crate::value::Value;

/// Placeholder rendered for a key whose value is missing (odd-length list).
pub(crate) const MISSING_VALUE: &str = "(MISSING)";

/// Render an ordered key/value list as space-separated `key=value` entries.
///
/// There is no leading separator before the first entry. Keys render bare;
/// values render according to their category. A trailing key with no value
/// renders as `key=(MISSING)`, with the placeholder emitted literally.
pub(crate) fn format_kv_list(entries: &[Value]) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < entries.len() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&entries[i].to_string());
        out.push('=');
        match entries.get(i + 1) {
            Some(value) => push_value(&mut out, value),
            None => out.push_str(MISSING_VALUE),
        }
        i += 2;
    }
    out
}

/// Append one value's representation, dispatching on its category.
///
/// Dispatch order: textual and error-like values first, then self-rendering
/// values, then the generic bare fallback.
fn push_value(out: &mut String, value: &Value) {
    match value {
        Value::Str(s) | Value::Err(Some(s)) => out.push_str(&format!("{:?}", s)),
        Value::Stringer(s) => out.push_str(&format!("{:?}", s)),
        Value::Err(None) => out.push_str("None"),
        Value::Bool(b) => out.push_str(&b.to_string()),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::UInt(n) => out.push_str(&n.to_string()),
        Value::Float(x) => out.push_str(&format!("{:?}", x)),
        Value::Debug(s) => out.push_str(s),
    }
}
