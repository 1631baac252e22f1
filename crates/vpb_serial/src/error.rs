use alloc::string::String;

use thiserror::Error;

use crate::value::ValueKind;

// -----------------------------------------------------------------------------
// DecodeError

/// A field was present in the input but its value could not be decoded.
///
/// The target field is left unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("expected {expected} value token(s), found {found}")]
    MissingTokens { expected: usize, found: usize },

    #[error("`{token}` is not a valid {kind} value")]
    InvalidNumber { kind: ValueKind, token: String },

    #[error("`{0}` is not a boolean, expected `true` or `false`")]
    InvalidBool(String),

    #[error("`{0}` is not a registered enum name")]
    UnknownEnumName(String),

    #[error("enum value {0} has no matching variant")]
    UnmappedEnumValue(i32),

    #[error("value kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: ValueKind, found: ValueKind },
}

// -----------------------------------------------------------------------------
// ConfigError

/// A field table was declared incorrectly.
///
/// These are programming errors in the field declarations, reported when the
/// registry is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("field `{0}` is registered more than once")]
    DuplicateField(&'static str),

    #[error("`{0}` is not a valid field name, it must be a single bare token")]
    InvalidFieldName(&'static str),

    #[error("default of field `{field}` is {found}, but its codec expects {expected}")]
    DefaultKindMismatch {
        field: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("enum value {value} is already mapped, cannot map it to `{name}`")]
    DuplicateEnumValue { value: i32, name: &'static str },

    #[error("enum name `{name}` is already mapped, cannot map it to {value}")]
    DuplicateEnumName { name: &'static str, value: i32 },

    #[error("enum field `{0}` has no mappings")]
    EmptyEnumTable(&'static str),
}
