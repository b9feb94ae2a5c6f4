//! Value encoder: turns a [`Value`] into PDF 1.4 object syntax.
//!
//! The encoder walks the value tree once and appends bytes to an output
//! buffer. The rules per variant:
//!
//! - **Numbers**: integers in decimal; reals narrowed to `f32` and printed as
//!   the shortest decimal that round-trips, never with an exponent
//! - **Names**: `/` plus the UTF-8 bytes, anything outside `!`..`~` as `#xx`
//! - **Literal strings**: `( ... )`; parentheses are escaped only when the
//!   string's parentheses are unbalanced, and then all of them are
//! - **Hex strings**: `< ... >`, whitespace dropped, one low byte per char
//! - **Streams**: payload written ASCIIHex-encoded with a synthesized
//!   `Length`/`Filter`/`DL` dictionary
//!
//! # Example
//! ```
//! use minipdf_core::{dictionary, encode, Value};
//!
//! let dict = Value::Dictionary(dictionary! {
//!     "Type" => Value::name("Font"),
//!     "Size" => 12,
//! });
//! assert_eq!(encode(&dict).unwrap(), b"<</Type /Font\n/Size 12>>");
//! ```

use crate::error::{PdfError, Result};
use crate::types::{Dictionary, Stream, Value};

/// Keys the stream encoder owns.
const RESERVED_STREAM_KEYS: [&str; 3] = ["Length", "Filter", "DL"];

/// Encode a value as the body of an indirect object.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Append the encoding of `value` (in object-body position) to `out`.
///
/// On error `out` may hold a partial encoding; callers discard it.
pub fn encode_into(value: &Value, out: &mut Vec<u8>) -> Result<()> {
    encode_value(value, Position::ObjectBody, out)
}

/// Where a value sits. Streams are only legal directly under `obj`.
#[derive(Clone, Copy, PartialEq)]
enum Position {
    ObjectBody,
    Nested,
}

fn encode_value(value: &Value, pos: Position, out: &mut Vec<u8>) -> Result<()> {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Boolean(true) => out.extend_from_slice(b"true"),
        Value::Boolean(false) => out.extend_from_slice(b"false"),
        Value::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
        Value::Real(r) => encode_real(*r, out)?,
        Value::Name(name) => encode_name(name, out)?,
        Value::LiteralString(text) => encode_literal_string(text, out),
        Value::HexString(text) => encode_hex_string(text, out),
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b' ');
                }
                encode_value(item, Position::Nested, out)?;
            }
            out.push(b']');
        }
        Value::Dictionary(dict) => encode_dictionary(dict, out)?,
        Value::Reference(id) => {
            out.extend_from_slice(format!("{} {} R", id.number, id.generation).as_bytes());
        }
        Value::Stream(stream) => {
            if pos == Position::Nested {
                return Err(PdfError::UnsupportedValueType {
                    found: value.type_name(),
                    context: "inside an array or dictionary; streams must be indirect objects",
                });
            }
            encode_stream(stream, out)?;
        }
    }
    Ok(())
}

/// `<<` + `/Key value` entries joined by newlines + `>>`.
fn encode_dictionary(dict: &Dictionary, out: &mut Vec<u8>) -> Result<()> {
    out.extend_from_slice(b"<<");
    for (i, (key, value)) in dict.iter().enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        encode_name(key, out)?;
        out.push(b' ');
        encode_value(value, Position::Nested, out)?;
    }
    out.extend_from_slice(b">>");
    Ok(())
}

/// Narrow to `f32`, then print the shortest round-trip decimal.
///
/// `f32`'s `Display` never uses exponent notation, which PDF does not allow.
fn encode_real(r: f64, out: &mut Vec<u8>) -> Result<()> {
    let narrowed = r as f32;
    if !narrowed.is_finite() {
        return Err(PdfError::EncodingFailure(format!(
            "real number {r} has no PDF representation"
        )));
    }
    out.extend_from_slice(narrowed.to_string().as_bytes());
    Ok(())
}

fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<()> {
    out.push(b'/');
    for &b in name.as_bytes() {
        match b {
            0 => {
                return Err(PdfError::EncodingFailure(format!(
                    "name {name:?} contains a NUL character"
                )))
            }
            0x21..=0x7E => out.push(b),
            _ => out.extend_from_slice(format!("#{b:02x}").as_bytes()),
        }
    }
    Ok(())
}

/// Literal string with PDF escapes.
///
/// Parentheses are left alone when opens and closes balance out over the
/// whole string; otherwise every one of them is escaped, even the matched
/// ones.
fn encode_literal_string(text: &str, out: &mut Vec<u8>) {
    let imbalance: i64 = text
        .chars()
        .map(|c| match c {
            '(' => 1,
            ')' => -1,
            _ => 0,
        })
        .sum();

    out.push(b'(');
    for c in text.chars() {
        match c {
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\t' => out.extend_from_slice(b"\\t"),
            '\u{8}' => out.extend_from_slice(b"\\b"),
            '\u{c}' => out.extend_from_slice(b"\\f"),
            '(' | ')' => {
                if imbalance != 0 {
                    out.push(b'\\');
                }
                out.push(c as u8);
            }
            ' '..='~' => out.push(c as u8),
            _ => {
                out.push(b'\\');
                out.extend_from_slice(octal_escape(c).as_bytes());
            }
        }
    }
    out.push(b')');
}

/// Three octal digits for `c`, or `077` when three are not enough.
fn octal_escape(c: char) -> String {
    let code = u32::from(c);
    if code > 0o777 {
        "077".to_string()
    } else {
        format!("{code:03o}")
    }
}

fn encode_hex_string(text: &str, out: &mut Vec<u8>) {
    let bytes: Vec<u8> = text
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t' | '\u{c}' | ' '))
        .map(|c| u32::from(c) as u8)
        .collect();
    out.push(b'<');
    out.extend_from_slice(hex::encode(bytes).as_bytes());
    out.push(b'>');
}

/// Stream object: synthesized dictionary, then the ASCIIHex payload.
fn encode_stream(stream: &Stream, out: &mut Vec<u8>) -> Result<()> {
    if let Some(key) = RESERVED_STREAM_KEYS
        .iter()
        .find(|key| stream.dict.contains_key(**key))
    {
        return Err(PdfError::ReservedStreamKeyConflict {
            key: (*key).to_string(),
        });
    }

    let mut payload = hex::encode(&stream.data).into_bytes();
    payload.push(b'>');

    let mut dict = Dictionary::with_capacity(stream.dict.len() + 3);
    dict.insert("Length".to_string(), Value::Integer(payload.len() as i64));
    dict.insert("Filter".to_string(), Value::name("ASCIIHexDecode"));
    dict.insert("DL".to_string(), Value::Integer(stream.data.len() as i64));
    for (key, value) in &stream.dict {
        dict.insert(key.clone(), value.clone());
    }

    encode_dictionary(&dict, out)?;
    out.extend_from_slice(b"\nstream\n");
    out.extend_from_slice(&payload);
    out.extend_from_slice(b"\nendstream\n");
    Ok(())
}
