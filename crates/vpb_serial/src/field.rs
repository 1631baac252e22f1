use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::codec::{Codec, field_line};
use crate::error::{ConfigError, DecodeError};
use crate::text::{OutputSink, TokenSource};
use crate::value::Value;

type Getter<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;
type Setter<T> = Box<dyn Fn(&mut T, Value) -> Result<(), DecodeError> + Send + Sync>;

// -----------------------------------------------------------------------------
// FieldSerializer

/// Reads and writes one field of `T`.
///
/// Binds the field name, its default, an accessor pair and the [`Codec`] of
/// the field's kind. Immutable once created.
///
/// Usually created through [`RegistryBuilder`](crate::RegistryBuilder).
pub struct FieldSerializer<T> {
    name: &'static str,
    default: Value,
    codec: Codec,
    getter: Getter<T>,
    setter: Setter<T>,
}

impl<T> FieldSerializer<T> {
    /// Creates a serializer from value level accessors.
    ///
    /// The setter may refuse a value of the right kind, e.g. an enum value
    /// the Rust type cannot represent; the object must stay untouched then.
    pub fn new(
        name: &'static str,
        default: Value,
        codec: Codec,
        getter: impl Fn(&T) -> Value + Send + Sync + 'static,
        setter: impl Fn(&mut T, Value) -> Result<(), DecodeError> + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        if !is_bare_token(name) {
            return Err(ConfigError::InvalidFieldName(name));
        }
        if default.kind() != codec.kind() {
            return Err(ConfigError::DefaultKindMismatch {
                field: name,
                expected: codec.kind(),
                found: default.kind(),
            });
        }
        if let Codec::Enum(table) = &codec
            && table.is_empty()
        {
            return Err(ConfigError::EmptyEnumTable(name));
        }
        Ok(Self {
            name,
            default,
            codec,
            getter: Box::new(getter),
            setter: Box::new(setter),
        })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    #[inline]
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Current value of the field in `object`.
    #[inline]
    pub fn get(&self, object: &T) -> Value {
        (self.getter)(object)
    }

    /// Returns `true` if the field of `object` equals the default.
    pub fn is_default(&self, object: &T) -> bool {
        self.get(object) == self.default
    }

    /// The line this field would be written as, regardless of its default.
    ///
    /// `None` if the value has no text form, i.e. an enum value without a name.
    pub fn encode(&self, object: &T) -> Option<String> {
        let tokens = self.codec.encode(&self.get(object))?;
        Some(field_line(self.name, &tokens))
    }

    /// Writes the field as one `<name> <tokens>` line.
    ///
    /// Nothing is written when the value equals the default and the sink does
    /// not ask for defaults, or when the value has no text form.
    /// Returns whether a line was written.
    pub fn write<S: OutputSink + ?Sized>(&self, sink: &mut S, object: &T) -> bool {
        let value = self.get(object);
        if !sink.write_defaults() && value == self.default {
            return false;
        }
        match self.codec.encode(&value) {
            Some(tokens) => {
                let line = field_line(self.name, &tokens);
                log::trace!("write field: {line}");
                sink.write_line(&line);
                true
            }
            None => {
                log::warn!("field `{}` has no text form for {value:?}, not written", self.name);
                false
            }
        }
    }

    /// Reads the field if the next token is its name.
    ///
    /// - `Ok(false)`: the next token is not this field, nothing was consumed.
    /// - `Ok(true)`: the value was decoded and set.
    /// - `Err(_)`: the name and the available value tokens were consumed, but
    ///   the value was malformed; `object` is unmodified.
    pub fn read<S: TokenSource + ?Sized>(
        &self,
        source: &mut S,
        object: &mut T,
    ) -> Result<bool, DecodeError> {
        if source.peek() != Some(self.name) {
            return Ok(false);
        }
        let tokens = source.consume(1 + self.codec.arity());
        let value = self.codec.decode(tokens.get(1..).unwrap_or_default())?;
        (self.setter)(object, value)?;
        Ok(true)
    }
}

impl<T> fmt::Debug for FieldSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSerializer")
            .field("name", &self.name)
            .field("default", &self.default)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

/// A field name must read back as exactly one bare token.
fn is_bare_token(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | '"'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enum_table::EnumTable;
    use crate::text::{TextInput, TextOutput};
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Options {
        size: u32,
        database: i32,
    }

    fn size_field() -> FieldSerializer<Options> {
        FieldSerializer::new(
            "MaximumTileImageSize",
            Value::UInt(256),
            Codec::UInt,
            |o: &Options| Value::UInt(o.size),
            |o: &mut Options, v| match v {
                Value::UInt(v) => {
                    o.size = v;
                    Ok(())
                }
                other => Err(DecodeError::KindMismatch {
                    expected: crate::ValueKind::UInt,
                    found: other.kind(),
                }),
            },
        )
        .unwrap()
    }

    fn database_field() -> FieldSerializer<Options> {
        let mut table = EnumTable::new();
        table.add_mapping(0, "LOD_DATABASE").unwrap();
        table.add_mapping(1, "PagedLOD_DATABASE").unwrap();
        FieldSerializer::new(
            "DatabaseType",
            Value::Enum(0),
            Codec::Enum(table),
            |o: &Options| Value::Enum(o.database),
            |o: &mut Options, v| {
                if let Value::Enum(v) = v {
                    o.database = v;
                }
                Ok(())
            },
        )
        .unwrap()
    }

    #[test]
    fn default_elision() {
        let field = size_field();
        let mut output = TextOutput::new();
        let options = Options {
            size: 256,
            ..Default::default()
        };
        assert!(field.is_default(&options));
        assert!(!field.write(&mut output, &options));
        assert_eq!(output.as_str(), "");

        let mut output = TextOutput::with_defaults(true);
        assert!(field.write(&mut output, &options));
        assert_eq!(output.as_str(), "MaximumTileImageSize 256\n");
    }

    #[test]
    fn non_default_emits_one_line() {
        let field = size_field();
        let mut output = TextOutput::new();
        assert!(field.write(&mut output, &Options::default()));
        assert_eq!(output.as_str(), "MaximumTileImageSize 0\n");
        assert_eq!(output.line_count(), 1);
    }

    #[test]
    fn enum_by_name() {
        let field = database_field();
        let mut output = TextOutput::new();
        let mut options = Options {
            database: 1,
            ..Default::default()
        };
        assert!(field.write(&mut output, &options));
        assert_eq!(output.as_str(), "DatabaseType PagedLOD_DATABASE\n");

        options.database = 0;
        let mut input = TextInput::new("DatabaseType PagedLOD_DATABASE");
        assert_eq!(field.read(&mut input, &mut options), Ok(true));
        assert_eq!(options.database, 1);
    }

    #[test]
    fn unmapped_enum_is_silently_skipped() {
        let field = database_field();
        let mut output = TextOutput::with_defaults(true);
        let options = Options {
            database: 9,
            ..Default::default()
        };
        assert!(!field.write(&mut output, &options));
        assert_eq!(output.as_str(), "");
        assert_eq!(field.encode(&options), None);
    }

    #[test]
    fn read_mismatch_consumes_nothing() {
        let field = size_field();
        let mut options = Options::default();
        let mut input = TextInput::new("MaximumTileTerrainSize 64");
        assert_eq!(field.read(&mut input, &mut options), Ok(false));
        assert_eq!(input.remaining(), 2);
        assert_eq!(options.size, 0);
    }

    #[test]
    fn read_failure_leaves_field() {
        let field = database_field();
        let mut options = Options::default();
        let mut input = TextInput::new("DatabaseType BOGUS_TYPE\nNext 1");
        assert_eq!(
            field.read(&mut input, &mut options),
            Err(DecodeError::UnknownEnumName("BOGUS_TYPE".into()))
        );
        assert_eq!(options.database, 0);
        // The malformed entry is consumed.
        assert_eq!(input.peek(), Some("Next"));

        let field = size_field();
        let mut input = TextInput::new("MaximumTileImageSize\nMaximumTileImageSize big");
        assert_eq!(
            field.read(&mut input, &mut options),
            Err(DecodeError::MissingTokens {
                expected: 1,
                found: 0,
            })
        );
        assert!(field.read(&mut input, &mut options).is_err());
        assert_eq!(options.size, 0);
    }

    #[test]
    fn invalid_declarations() {
        let bad_name: Vec<&'static str> = alloc::vec!["", "Two Words", "Brace{", "\"Quoted\""];
        for name in bad_name {
            let result = FieldSerializer::<Options>::new(
                name,
                Value::UInt(0),
                Codec::UInt,
                |_| Value::UInt(0),
                |_, _| Ok(()),
            );
            assert_eq!(result.unwrap_err(), ConfigError::InvalidFieldName(name));
        }

        let result = FieldSerializer::<Options>::new(
            "Size",
            Value::Int(0),
            Codec::UInt,
            |_| Value::UInt(0),
            |_, _| Ok(()),
        );
        assert!(matches!(result, Err(ConfigError::DefaultKindMismatch { .. })));

        let result = FieldSerializer::<Options>::new(
            "DatabaseType",
            Value::Enum(0),
            Codec::Enum(EnumTable::new()),
            |_| Value::Enum(0),
            |_, _| Ok(()),
        );
        assert_eq!(result.unwrap_err(), ConfigError::EmptyEnumTable("DatabaseType"));
    }
}
