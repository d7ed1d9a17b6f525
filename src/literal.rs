//! Render an `OptionObject` as the literal argument text of a
//! template macro call: unquoted keys, double-quoted strings, two
//! spaces of indentation per level.
//!
//! Only map keys are ever written without quotes, and only when they
//! are plain identifiers; string values always go through
//! `quote_str`.

use std::fmt::Write;

use crate::option_object::OptionObject;
use crate::str_util::is_identifier;

const INDENT: &str = "  ";

pub fn render(value: &OptionObject) -> String {
    let mut out = String::new();
    render_into(&mut out, value, 0);
    out
}

/// Double-quoted string literal. Only `"`, `\`, newline, carriage
/// return and tab are escaped; the template lexer reads any other
/// `\x` as a plain `x`, so remaining control characters go in raw.
pub fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    push_quoted(&mut out, s);
    out
}

fn push_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

fn render_into(out: &mut String, value: &OptionObject, level: usize) {
    match value {
        OptionObject::Str(s) => push_quoted(out, s),
        OptionObject::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        OptionObject::Num(n) => {
            let _ = write!(out, "{n}");
        }
        OptionObject::Null => out.push_str("null"),
        OptionObject::Var(name) => out.push_str(name),
        OptionObject::List(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, level + 1);
                render_into(out, item, level + 1);
            }
            out.push('\n');
            push_indent(out, level);
            out.push(']');
        }
        OptionObject::Map(fields) => {
            if fields.is_empty() {
                out.push_str("{}");
                return
            }
            out.push('{');
            for (i, (key, val)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, level + 1);
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    push_quoted(out, key);
                }
                out.push_str(": ");
                render_into(out, val, level + 1);
            }
            out.push('\n');
            push_indent(out, level);
            out.push('}');
        }
    }
}
