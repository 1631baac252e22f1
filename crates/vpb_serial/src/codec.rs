use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use crate::enum_table::EnumTable;
use crate::error::DecodeError;
use crate::value::{Extents, Value, ValueKind, Vec4};

// -----------------------------------------------------------------------------
// Codec

/// Text encoding of one [`ValueKind`].
///
/// - Scalars occupy one token, [`Vec4`] and [`Extents`] four.
/// - Numbers use Rust's locale independent formatting, which prints the
///   shortest text that parses back to the same value (`20.0` is written `20`).
/// - Booleans are exactly `true` or `false`.
/// - Strings are double quoted, with `\"`, `\\`, `\n` and `\t` escapes, so an
///   empty string or one containing spaces is still a single token.
/// - Enumerations are written by name, never by integer.
///
/// # Examples
///
/// ```
/// use vpb_serial::{Codec, Extents, Value};
///
/// let tokens = Codec::Extents
///     .encode(&Value::Extents(Extents::new(10.5, 20.0, 30.5, 40.0)))
///     .unwrap();
/// assert_eq!(tokens, ["10.5", "20", "30.5", "40"]);
///
/// let value = Codec::Extents.decode(&tokens).unwrap();
/// assert_eq!(value, Value::Extents(Extents::new(10.5, 20.0, 30.5, 40.0)));
/// ```
#[derive(Clone, Debug)]
pub enum Codec {
    String,
    UInt,
    Int,
    Float,
    Double,
    Bool,
    Vec4,
    Extents,
    Enum(EnumTable),
}

impl Codec {
    /// The value kind this codec reads and writes.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String => ValueKind::String,
            Self::UInt => ValueKind::UInt,
            Self::Int => ValueKind::Int,
            Self::Float => ValueKind::Float,
            Self::Double => ValueKind::Double,
            Self::Bool => ValueKind::Bool,
            Self::Vec4 => ValueKind::Vec4,
            Self::Extents => ValueKind::Extents,
            Self::Enum(_) => ValueKind::Enum,
        }
    }

    /// Number of tokens a value occupies.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.kind().arity()
    }

    /// Encodes `value` into its tokens.
    ///
    /// Returns `None` when there is nothing to emit: the value is of another
    /// kind, or it is an enum value without a registered name.
    pub fn encode(&self, value: &Value) -> Option<Vec<String>> {
        let tokens = match (self, value) {
            (Self::String, Value::String(v)) => alloc::vec![quote(v)],
            (Self::UInt, Value::UInt(v)) => alloc::vec![v.to_string()],
            (Self::Int, Value::Int(v)) => alloc::vec![v.to_string()],
            (Self::Float, Value::Float(v)) => alloc::vec![v.to_string()],
            (Self::Double, Value::Double(v)) => alloc::vec![v.to_string()],
            (Self::Bool, Value::Bool(v)) => alloc::vec![v.to_string()],
            (Self::Vec4, Value::Vec4(v)) => v.to_array().iter().map(f64::to_string).collect(),
            (Self::Extents, Value::Extents(v)) => {
                v.to_array().iter().map(f64::to_string).collect()
            }
            (Self::Enum(table), Value::Enum(v)) => alloc::vec![table.name_for(*v)?.into()],
            _ => return None,
        };
        Some(tokens)
    }

    /// Decodes a value from exactly [`arity`](Self::arity) tokens.
    ///
    /// String tokens are expected unquoted, as produced by
    /// [`TextInput`](crate::TextInput).
    pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Value, DecodeError> {
        let expected = self.arity();
        if tokens.len() != expected {
            return Err(DecodeError::MissingTokens {
                expected,
                found: tokens.len(),
            });
        }
        let first = tokens[0].as_ref();
        let value = match self {
            Self::String => Value::String(first.into()),
            Self::UInt => Value::UInt(parse_number(ValueKind::UInt, first)?),
            Self::Int => Value::Int(parse_number(ValueKind::Int, first)?),
            Self::Float => Value::Float(parse_number(ValueKind::Float, first)?),
            Self::Double => Value::Double(parse_number(ValueKind::Double, first)?),
            Self::Bool => Value::Bool(parse_bool(first)?),
            Self::Vec4 => Value::Vec4(Vec4::from(parse_quad(ValueKind::Vec4, tokens)?)),
            Self::Extents => Value::Extents(Extents::from(parse_quad(ValueKind::Extents, tokens)?)),
            Self::Enum(table) => match table.value_for(first) {
                Some(raw) => Value::Enum(raw),
                None => return Err(DecodeError::UnknownEnumName(first.into())),
            },
        };
        Ok(value)
    }
}

// -----------------------------------------------------------------------------
// Primitives

fn parse_number<T: FromStr>(kind: ValueKind, token: &str) -> Result<T, DecodeError> {
    token.parse::<T>().map_err(|_| DecodeError::InvalidNumber {
        kind,
        token: token.into(),
    })
}

fn parse_bool(token: &str) -> Result<bool, DecodeError> {
    match token {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DecodeError::InvalidBool(token.into())),
    }
}

fn parse_quad<S: AsRef<str>>(kind: ValueKind, tokens: &[S]) -> Result<[f64; 4], DecodeError> {
    let mut out = [0.0; 4];
    for (slot, token) in out.iter_mut().zip(tokens) {
        let token = token.as_ref();
        *slot = token.parse::<f64>().map_err(|_| DecodeError::InvalidNumber {
            kind,
            token: token.into(),
        })?;
    }
    Ok(out)
}

/// Wraps a string in double quotes, escaping what the tokenizer unescapes.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Joins a field name and its tokens into one output line.
pub(crate) fn field_line(name: &str, tokens: &[String]) -> String {
    format!("{name} {}", tokens.join(" "))
}
