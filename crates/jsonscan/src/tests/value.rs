//! A minimal JSON value used to generate documents and to rebuild them from
//! token streams.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::{self, Write};

use bstr::ByteSlice;

use crate::OwnedToken;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Members in document order; duplicates are kept.
    Object(Vec<(String, Value)>),
}

/// Writes `src` as the body of a JSON string literal.
///
/// Control characters use `\u` escapes. Characters outside the BMP are written
/// as escaped surrogate pairs so that generated documents exercise pair
/// decoding.
pub(crate) fn write_escaped_string<W: Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() && u32::from(c) <= 0xFFFF => {
                write!(f, "\\u{:04X}", u32::from(c))?;
            }
            c if u32::from(c) > 0xFFFF => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(f, "\\u{unit:04x}")?;
                }
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            // Finite by construction; `Display` for f64 round-trips.
            Value::Number(n) => f.write_str(&n.to_string()),
            Value::String(s) => {
                f.write_char('"')?;
                write_escaped_string(s, f)?;
                f.write_char('"')
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(members) => {
                f.write_str("{")?;
                for (i, (k, v)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_char('"')?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

enum Frame {
    Array(Vec<Value>),
    Object(Vec<(String, Value)>, Option<String>),
}

/// Rebuilds a value from a complete token stream without recursion.
///
/// Returns `None` if the stream is not a single well-formed document ending in
/// `EndOfInput`, or if a number or string cannot be converted.
pub(crate) fn reconstruct(tokens: &[OwnedToken]) -> Option<Value> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut root = None;

    let (last, body) = tokens.split_last()?;
    if *last != OwnedToken::EndOfInput {
        return None;
    }

    for token in body {
        let value = match token {
            OwnedToken::ArrayStart => {
                stack.push(Frame::Array(Vec::new()));
                continue;
            }
            OwnedToken::ObjectStart => {
                stack.push(Frame::Object(Vec::new(), None));
                continue;
            }
            OwnedToken::Key(text) => {
                let Some(Frame::Object(_, pending)) = stack.last_mut() else {
                    return None;
                };
                *pending = Some(String::from_utf8(text.to_vec()).ok()?);
                continue;
            }
            OwnedToken::Separator => continue,
            OwnedToken::ArrayEnd => match stack.pop()? {
                Frame::Array(items) => Value::Array(items),
                Frame::Object(..) => return None,
            },
            OwnedToken::ObjectEnd => match stack.pop()? {
                Frame::Object(members, None) => Value::Object(members),
                _ => return None,
            },
            OwnedToken::String(text) => Value::String(String::from_utf8(text.to_vec()).ok()?),
            OwnedToken::Number(text) => Value::Number(text.to_str().ok()?.parse().ok()?),
            OwnedToken::True => Value::Boolean(true),
            OwnedToken::False => Value::Boolean(false),
            OwnedToken::Null => Value::Null,
            OwnedToken::EndOfInput => return None,
        };

        match stack.last_mut() {
            Some(Frame::Array(items)) => items.push(value),
            Some(Frame::Object(members, pending)) => members.push((pending.take()?, value)),
            None if root.is_none() => root = Some(value),
            None => return None,
        }
    }

    if stack.is_empty() { root } else { None }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::{Value, reconstruct};
    use crate::tests::lex_str;

    #[test]
    fn display_escapes_controls_and_astral_chars() {
        let value = Value::Array(vec![
            Value::String("a\"b\\c\n\u{1}".into()),
            Value::String("\u{1F600}é".into()),
            Value::Number(-1.5),
        ]);
        assert_eq!(
            value.to_string(),
            r#"["a\"b\\c\n\u0001","\ud83d\ude00é",-1.5]"#
        );
    }

    #[test]
    fn reconstruct_nested_document() {
        let tokens = lex_str(r#"{"a":[1,{"b":null}],"c":"d"}"#).unwrap();
        let expected = Value::Object(vec![
            (
                "a".into(),
                Value::Array(vec![
                    Value::Number(1.0),
                    Value::Object(vec![("b".into(), Value::Null)]),
                ]),
            ),
            ("c".into(), Value::String("d".into())),
        ]);
        assert_eq!(reconstruct(&tokens), Some(expected));
    }
}
