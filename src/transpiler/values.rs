//! Value literals and quoting.

use crate::ast::Value;

/// Characters that force a string literal to be quoted.
pub const RESERVED_CHARS: &[char] = &['"', '\'', '(', ')', ';', ',', '=', '!', '~', '<', '>', ' '];

/// Wire form of both `null` and the empty string.
pub const EMPTY_LITERAL: &str = "''";

/// Whether `s` contains any RSQL reserved character.
pub fn contains_reserved(s: &str) -> bool {
    s.contains(RESERVED_CHARS)
}

/// Quote `s` with whichever quote character needs fewer escapes.
///
/// Ties go to `'`. Only the chosen quote character is escaped; backslashes
/// pass through untouched.
pub fn escape(s: &str) -> String {
    let double_quotes = s.matches('"').count();
    let single_quotes = s.matches('\'').count();

    let quote = if double_quotes >= single_quotes { '\'' } else { '"' };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        if c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}

/// Render a string literal (also used for selectors).
pub fn format_str(s: &str) -> String {
    if s.is_empty() {
        EMPTY_LITERAL.to_string()
    } else if contains_reserved(s) {
        escape(s)
    } else {
        s.to_string()
    }
}

fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

/// Render a value as an RSQL literal.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_LITERAL.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => format_float(*n),
        Value::String(s) => format_str(s),
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(format_value).collect();
            format!("({})", rendered.join(","))
        }
    }
}
