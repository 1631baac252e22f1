use alloc::vec::Vec;
use core::fmt;

use vpb_utils::hash::HashMap;

use crate::codec::Codec;
use crate::enum_table::EnumField;
use crate::error::{ConfigError, DecodeError};
use crate::field::FieldSerializer;
use crate::text::{OutputSink, TokenSource};
use crate::value::{Extents, FieldValue, Value, Vec4};

// -----------------------------------------------------------------------------
// FieldRead

/// Outcome of one [`SerializerRegistry::read_field`] pass.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRead {
    /// The named field was decoded and set.
    Applied(&'static str),
    /// The named field was present but malformed, its entry is consumed and
    /// the object is unmodified.
    Malformed {
        field: &'static str,
        error: DecodeError,
    },
    /// No field matched the next token, nothing was consumed.
    Unmatched,
}

// -----------------------------------------------------------------------------
// SerializerRegistry

/// The ordered field table of one object type.
///
/// Built once through [`RegistryBuilder`], then shared read-only: it holds no
/// per-object state, so one registry serves any number of objects and threads.
pub struct SerializerRegistry<T> {
    class_name: &'static str,
    fields: Vec<FieldSerializer<T>>,
    index: HashMap<&'static str, usize>,
}

impl<T: 'static> SerializerRegistry<T> {
    /// Starts a registry for `class_name`.
    ///
    /// Field defaults are taken from `prototype`, see [`RegistryBuilder`].
    #[inline]
    pub fn builder(class_name: &'static str, prototype: T) -> RegistryBuilder<T> {
        RegistryBuilder::new(class_name, prototype)
    }
}

impl<T> SerializerRegistry<T> {
    /// Name of the object type, used as block header.
    #[inline]
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field serializers in registration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldSerializer<T>> {
        self.fields.iter()
    }

    /// Field names in registration order.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldSerializer::name)
    }

    /// Returns the serializer of the named field.
    pub fn field(&self, name: &str) -> Option<&FieldSerializer<T>> {
        self.index.get(name).map(|&idx| &self.fields[idx])
    }

    /// Writes every field in registration order.
    ///
    /// Returns `true` if at least one line was written.
    pub fn write<S: OutputSink + ?Sized>(&self, sink: &mut S, object: &T) -> bool {
        let mut written = false;
        for field in &self.fields {
            written |= field.write(sink, object);
        }
        written
    }

    /// Tries each field in registration order against the next entry, until
    /// one matches.
    pub fn read_field<S: TokenSource + ?Sized>(&self, source: &mut S, object: &mut T) -> FieldRead {
        for field in &self.fields {
            match field.read(source, object) {
                Ok(false) => continue,
                Ok(true) => return FieldRead::Applied(field.name()),
                Err(error) => {
                    log::warn!(
                        "`{}`: failed to read field `{}`: {error}",
                        self.class_name,
                        field.name()
                    );
                    return FieldRead::Malformed {
                        field: field.name(),
                        error,
                    };
                }
            }
        }
        FieldRead::Unmatched
    }

    /// Consumes the next field if any serializer recognizes and decodes it.
    ///
    /// Returns `false` for an unknown field name, which is left in `source`
    /// for the caller to skip, and for a malformed value.
    #[inline]
    pub fn read<S: TokenSource + ?Sized>(&self, source: &mut S, object: &mut T) -> bool {
        matches!(self.read_field(source, object), FieldRead::Applied(_))
    }

    /// Writes `object` as a `<class_name> { ... }` block.
    ///
    /// Returns `true` if at least one field was written.
    pub fn write_object<S: OutputSink + ?Sized>(&self, sink: &mut S, object: &T) -> bool {
        sink.begin_block(self.class_name);
        let written = self.write(sink, object);
        sink.end_block();
        written
    }

    /// Reads fields into `object` until the input or the block ends.
    ///
    /// A leading `<class_name> {` header is optional. Unknown entries are
    /// skipped and malformed ones ignored, so `object` keeps its value for
    /// every field that is absent or invalid.
    ///
    /// Returns the number of fields applied.
    pub fn read_object<S: TokenSource + ?Sized>(&self, source: &mut S, object: &mut T) -> usize {
        let in_block = if source.peek() == Some(self.class_name) {
            let header = source.consume(2);
            if header.get(1).map(|s| s.as_str()) != Some("{") {
                // `{` may open the block on the line after the header.
                if source.peek() == Some("{") {
                    source.consume(1);
                } else {
                    log::warn!("`{}`: missing `{{` after the header", self.class_name);
                }
            }
            true
        } else {
            false
        };

        let mut applied = 0;
        loop {
            match source.peek() {
                None => {
                    if in_block {
                        log::warn!("`{}`: block is not closed", self.class_name);
                    }
                    break;
                }
                Some("}") => {
                    source.consume(1);
                    break;
                }
                Some(_) => {}
            }
            match self.read_field(source, object) {
                FieldRead::Applied(_) => applied += 1,
                FieldRead::Malformed { .. } => {}
                FieldRead::Unmatched => {
                    log::debug!(
                        "`{}`: skipping unknown field `{}`",
                        self.class_name,
                        source.peek().unwrap_or_default()
                    );
                    source.skip_entry();
                }
            }
        }
        applied
    }
}

impl<T> fmt::Debug for SerializerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerRegistry")
            .field("class_name", &self.class_name)
            .field("fields", &self.fields)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// RegistryBuilder

/// Declares the fields of a [`SerializerRegistry`], one call per field.
///
/// The default of each field is read from the prototype through the field's
/// own getter, so it always matches a freshly constructed object.
///
/// The first declaration error is kept and returned by [`build`](Self::build);
/// later declarations are ignored.
///
/// # Examples
///
/// ```
/// use vpb_serial::{ConfigError, SerializerRegistry};
///
/// #[derive(Default)]
/// struct Options {
///     skirt_ratio: f32,
/// }
///
/// let result = SerializerRegistry::builder("Options", Options::default())
///     .float("SkirtRatio", |o: &Options| o.skirt_ratio, |o, v| o.skirt_ratio = v)
///     .float("SkirtRatio", |o: &Options| o.skirt_ratio, |o, v| o.skirt_ratio = v)
///     .build();
///
/// assert_eq!(result.unwrap_err(), ConfigError::DuplicateField("SkirtRatio"));
/// ```
pub struct RegistryBuilder<T> {
    class_name: &'static str,
    prototype: T,
    fields: Vec<FieldSerializer<T>>,
    index: HashMap<&'static str, usize>,
    error: Option<ConfigError>,
}

impl<T: 'static> RegistryBuilder<T> {
    /// Starts an empty field table.
    pub fn new(class_name: &'static str, prototype: T) -> Self {
        Self {
            class_name,
            prototype,
            fields: Vec::new(),
            index: HashMap::default(),
            error: None,
        }
    }

    /// Appends a serializer.
    pub fn push(mut self, field: FieldSerializer<T>) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.index.contains_key(field.name()) {
            self.error = Some(ConfigError::DuplicateField(field.name()));
            return self;
        }
        self.index.insert(field.name(), self.fields.len());
        self.fields.push(field);
        self
    }

    fn push_result(mut self, field: Result<FieldSerializer<T>, ConfigError>) -> Self {
        match field {
            Ok(field) => self.push(field),
            Err(err) => {
                if self.error.is_none() {
                    self.error = Some(err);
                }
                self
            }
        }
    }

    /// Declares a field of any [`FieldValue`] type, defaulting to the
    /// prototype's value.
    pub fn field<V: FieldValue>(
        self,
        name: &'static str,
        get: impl Fn(&T) -> V + Send + Sync + 'static,
        set: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self {
        let default = get(&self.prototype);
        self.field_with_default(name, default, get, set)
    }

    /// Declares a field with an explicit default.
    pub fn field_with_default<V: FieldValue>(
        self,
        name: &'static str,
        default: V,
        get: impl Fn(&T) -> V + Send + Sync + 'static,
        set: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self {
        let field = FieldSerializer::new(
            name,
            default.into_value(),
            V::codec(),
            move |object| get(object).into_value(),
            move |object, value| {
                set(object, V::from_value(value)?);
                Ok(())
            },
        );
        self.push_result(field)
    }

    /// Declares an enumeration field, written by the names of
    /// [`EnumField::VARIANTS`].
    pub fn enumeration<E: EnumField>(
        self,
        name: &'static str,
        get: impl Fn(&T) -> E + Send + Sync + 'static,
        set: impl Fn(&mut T, E) + Send + Sync + 'static,
    ) -> Self {
        let default = get(&self.prototype);
        self.enumeration_with_default(name, default, get, set)
    }

    /// Declares an enumeration field with an explicit default.
    pub fn enumeration_with_default<E: EnumField>(
        self,
        name: &'static str,
        default: E,
        get: impl Fn(&T) -> E + Send + Sync + 'static,
        set: impl Fn(&mut T, E) + Send + Sync + 'static,
    ) -> Self {
        let field = E::enum_table().and_then(|table| {
            FieldSerializer::new(
                name,
                Value::Enum(default.to_raw()),
                Codec::Enum(table),
                move |object| Value::Enum(get(object).to_raw()),
                move |object, value| match value {
                    Value::Enum(raw) => {
                        let variant = E::from_raw(raw).ok_or(DecodeError::UnmappedEnumValue(raw))?;
                        set(object, variant);
                        Ok(())
                    }
                    other => Err(DecodeError::KindMismatch {
                        expected: crate::ValueKind::Enum,
                        found: other.kind(),
                    }),
                },
            )
        });
        self.push_result(field)
    }

    #[inline]
    pub fn string(
        self,
        name: &'static str,
        get: impl Fn(&T) -> alloc::string::String + Send + Sync + 'static,
        set: impl Fn(&mut T, alloc::string::String) + Send + Sync + 'static,
    ) -> Self {
        self.field(name, get, set)
    }

    #[inline]
    pub fn uint(
        self,
        name: &'static str,
        get: impl Fn(&T) -> u32 + Send + Sync + 'static,
        set: impl Fn(&mut T, u32) + Send + Sync + 'static,
    ) -> Self {
        self.field(name, get, set)
    }

    #[inline]
    pub fn int(
        self,
        name: &'static str,
        get: impl Fn(&T) -> i32 + Send + Sync + 'static,
        set: impl Fn(&mut T, i32) + Send + Sync + 'static,
    ) -> Self {
        self.field(name, get, set)
    }

    #[inline]
    pub fn float(
        self,
        name: &'static str,
        get: impl Fn(&T) -> f32 + Send + Sync + 'static,
        set: impl Fn(&mut T, f32) + Send + Sync + 'static,
    ) -> Self {
        self.field(name, get, set)
    }

    #[inline]
    pub fn double(
        self,
        name: &'static str,
        get: impl Fn(&T) -> f64 + Send + Sync + 'static,
        set: impl Fn(&mut T, f64) + Send + Sync + 'static,
    ) -> Self {
        self.field(name, get, set)
    }

    #[inline]
    pub fn boolean(
        self,
        name: &'static str,
        get: impl Fn(&T) -> bool + Send + Sync + 'static,
        set: impl Fn(&mut T, bool) + Send + Sync + 'static,
    ) -> Self {
        self.field(name, get, set)
    }

    #[inline]
    pub fn vec4(
        self,
        name: &'static str,
        get: impl Fn(&T) -> Vec4 + Send + Sync + 'static,
        set: impl Fn(&mut T, Vec4) + Send + Sync + 'static,
    ) -> Self {
        self.field(name, get, set)
    }

    #[inline]
    pub fn extents(
        self,
        name: &'static str,
        get: impl Fn(&T) -> Extents + Send + Sync + 'static,
        set: impl Fn(&mut T, Extents) + Send + Sync + 'static,
    ) -> Self {
        self.field(name, get, set)
    }

    /// Finishes the table, or returns the first declaration error.
    pub fn build(self) -> Result<SerializerRegistry<T>, ConfigError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        log::debug!(
            "built serializer registry `{}` with {} fields",
            self.class_name,
            self.fields.len()
        );
        Ok(SerializerRegistry {
            class_name: self.class_name,
            fields: self.fields,
            index: self.index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_enum_field;
    use crate::text::{TextInput, TextOutput};
    use alloc::string::String;

    extern crate std;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum DatabaseType {
        Lod,
        PagedLod,
    }

    impl_enum_field!(DatabaseType {
        Lod => "LOD_DATABASE",
        PagedLod => "PagedLOD_DATABASE",
    });

    #[derive(Clone, Debug, PartialEq)]
    struct Options {
        directory: String,
        maximum_tile_image_size: u32,
        build_overlays: bool,
        database_type: DatabaseType,
        extents: Extents,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                directory: String::new(),
                maximum_tile_image_size: 256,
                build_overlays: false,
                database_type: DatabaseType::Lod,
                extents: Extents::default(),
            }
        }
    }

    fn registry() -> SerializerRegistry<Options> {
        SerializerRegistry::builder("Options", Options::default())
            .string("Directory", |o| o.directory.clone(), |o, v| o.directory = v)
            .uint(
                "MaximumTileImageSize",
                |o| o.maximum_tile_image_size,
                |o, v| o.maximum_tile_image_size = v,
            )
            .boolean("BuildOverlays", |o| o.build_overlays, |o, v| o.build_overlays = v)
            .enumeration("DatabaseType", |o| o.database_type, |o, v| o.database_type = v)
            .extents("Extents", |o| o.extents, |o, v| o.extents = v)
            .build()
            .unwrap()
    }

    #[test]
    fn single_changed_field() {
        let registry = registry();
        let options = Options {
            build_overlays: true,
            ..Default::default()
        };
        let mut output = TextOutput::new();
        assert!(registry.write(&mut output, &options));
        assert_eq!(output.as_str(), "BuildOverlays true\n");

        let mut read_back = Options::default();
        let mut input = TextInput::new(output.as_str());
        assert!(registry.read(&mut input, &mut read_back));
        assert_eq!(read_back, options);
        assert!(input.is_empty());
    }

    #[test]
    fn nothing_to_write() {
        let mut output = TextOutput::new();
        assert!(!registry().write(&mut output, &Options::default()));
        assert_eq!(output.as_str(), "");
    }

    #[test]
    fn enum_scenario() {
        let registry = registry();
        let mut options = Options {
            database_type: DatabaseType::PagedLod,
            ..Default::default()
        };
        let mut output = TextOutput::new();
        registry.write(&mut output, &options);
        assert_eq!(output.as_str(), "DatabaseType PagedLOD_DATABASE\n");

        options.database_type = DatabaseType::Lod;
        let mut input = TextInput::new("DatabaseType PagedLOD_DATABASE");
        assert!(registry.read(&mut input, &mut options));
        assert_eq!(options.database_type, DatabaseType::PagedLod);

        let mut input = TextInput::new("DatabaseType BOGUS_TYPE");
        assert!(!registry.read(&mut input, &mut options));
        assert_eq!(options.database_type, DatabaseType::PagedLod);
    }

    #[test]
    fn extents_scenario() {
        let registry = registry();
        let options = Options {
            extents: Extents::new(10.5, 20.0, 30.5, 40.0),
            ..Default::default()
        };
        let mut output = TextOutput::new();
        registry.write(&mut output, &options);
        assert_eq!(output.as_str(), "Extents 10.5 20 30.5 40\n");

        let mut read_back = Options::default();
        let mut input = TextInput::new(output.as_str());
        assert!(registry.read(&mut input, &mut read_back));
        assert_eq!(read_back.extents, Extents::new(10.5, 20.0, 30.5, 40.0));
    }

    #[test]
    fn write_order_is_registration_order() {
        let registry = registry();
        let options = Options {
            directory: "tiles".into(),
            maximum_tile_image_size: 512,
            build_overlays: true,
            database_type: DatabaseType::PagedLod,
            extents: Extents::new(0.0, 0.0, 1.0, 1.0),
        };
        let mut output = TextOutput::new();
        registry.write(&mut output, &options);
        let names: Vec<&str> = output
            .as_str()
            .lines()
            .filter_map(|line| line.split(' ').next())
            .collect();
        let expected: Vec<&str> = registry.field_names().collect();
        assert_eq!(names, expected);

        let mut output = TextOutput::new();
        let partial = Options {
            maximum_tile_image_size: 512,
            extents: Extents::new(0.0, 0.0, 1.0, 1.0),
            ..Default::default()
        };
        registry.write(&mut output, &partial);
        assert_eq!(
            output.as_str(),
            "MaximumTileImageSize 512\nExtents 0 0 1 1\n"
        );
    }

    #[test]
    fn exhaustive_output() {
        let mut output = TextOutput::with_defaults(true);
        assert!(registry().write(&mut output, &Options::default()));
        assert_eq!(
            output.as_str(),
            "Directory \"\"\nMaximumTileImageSize 256\nBuildOverlays false\nDatabaseType LOD_DATABASE\nExtents 0 0 0 0\n"
        );
    }

    #[test]
    fn unknown_token_is_unmatched() {
        let registry = registry();
        let mut options = Options::default();
        let mut input = TextInput::new("NotAField 12");
        assert_eq!(registry.read_field(&mut input, &mut options), FieldRead::Unmatched);
        assert_eq!(input.remaining(), 2);
        assert_eq!(options, Options::default());
    }

    #[test]
    fn malformed_field_reported() {
        let registry = registry();
        let mut options = Options::default();
        let mut input = TextInput::new("MaximumTileImageSize -3");
        assert_eq!(
            registry.read_field(&mut input, &mut options),
            FieldRead::Malformed {
                field: "MaximumTileImageSize",
                error: DecodeError::InvalidNumber {
                    kind: crate::ValueKind::UInt,
                    token: "-3".into(),
                },
            }
        );
        assert_eq!(options.maximum_tile_image_size, 256);
    }

    #[test]
    fn read_object_any_order() {
        let registry = registry();
        let text = "Options {\n  Extents 1 2 3 4\n  Unknown {\n    a b\n  }\n  MaximumTileImageSize oops\n  BuildOverlays true\n  Mystery 1 2\n  Directory \"a b\"\n}\nAfter 1";
        let mut options = Options::default();
        let mut input = TextInput::new(text);
        assert_eq!(registry.read_object(&mut input, &mut options), 3);
        assert_eq!(options.extents, Extents::new(1.0, 2.0, 3.0, 4.0));
        assert!(options.build_overlays);
        assert_eq!(options.directory, "a b");
        assert_eq!(options.maximum_tile_image_size, 256);
        assert_eq!(input.peek(), Some("After"));
    }

    #[test]
    fn read_object_brace_on_next_line() {
        let registry = registry();
        let text = "Options\n{\n  BuildOverlays true\n  MaximumTileImageSize 512\n}\nAfter 1";
        let mut options = Options::default();
        let mut input = TextInput::new(text);
        assert_eq!(registry.read_object(&mut input, &mut options), 2);
        assert!(options.build_overlays);
        assert_eq!(options.maximum_tile_image_size, 512);
        assert_eq!(input.peek(), Some("After"));
    }

    #[test]
    fn object_round_trip() {
        let registry = registry();
        let options = Options {
            directory: "C:\\terrain \"v2\"".into(),
            maximum_tile_image_size: 1024,
            build_overlays: true,
            database_type: DatabaseType::PagedLod,
            extents: Extents::new(-180.0, -90.0, 180.0, 90.0),
        };
        let mut output = TextOutput::new();
        assert!(registry.write_object(&mut output, &options));

        let mut read_back = Options::default();
        let mut input = TextInput::new(output.as_str());
        assert_eq!(registry.read_object(&mut input, &mut read_back), 5);
        assert_eq!(read_back, options);
    }

    #[test]
    fn lookup() {
        let registry = registry();
        assert_eq!(registry.class_name(), "Options");
        assert_eq!(registry.len(), 5);
        let field = registry.field("MaximumTileImageSize").unwrap();
        assert_eq!(field.default_value(), &Value::UInt(256));
        assert!(registry.field("maximumtileimagesize").is_none());
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Terrain {
        level_offset: i32,
        sea_level: f64,
    }

    fn terrain_registry() -> SerializerRegistry<Terrain> {
        SerializerRegistry::builder("Terrain", Terrain::default())
            .int("LevelOffset", |o| o.level_offset, |o, v| o.level_offset = v)
            .double("SeaLevel", |o| o.sea_level, |o, v| o.sea_level = v)
            .build()
            .unwrap()
    }

    #[test]
    fn int_and_double_round_trip() {
        let registry = terrain_registry();
        for (level_offset, sea_level) in [(-3, -0.125), (i32::MIN, 1e300), (i32::MAX, 0.1 + 0.2)] {
            let terrain = Terrain {
                level_offset,
                sea_level,
            };
            let mut output = TextOutput::new();
            assert!(registry.write(&mut output, &terrain));
            assert_eq!(output.line_count(), 2);

            let mut read_back = Terrain::default();
            let mut input = TextInput::new(output.as_str());
            assert!(registry.read(&mut input, &mut read_back));
            assert!(registry.read(&mut input, &mut read_back));
            assert!(input.is_empty());
            assert_eq!(read_back, terrain);
        }

        let mut output = TextOutput::new();
        let terrain = Terrain {
            level_offset: -3,
            ..Default::default()
        };
        registry.write(&mut output, &terrain);
        assert_eq!(output.as_str(), "LevelOffset -3\n");
    }

    #[test]
    fn explicit_default_controls_emission() {
        let registry = SerializerRegistry::builder("Options", Options::default())
            .field_with_default(
                "MaximumTileImageSize",
                512_u32,
                |o: &Options| o.maximum_tile_image_size,
                |o, v| o.maximum_tile_image_size = v,
            )
            .enumeration_with_default(
                "DatabaseType",
                DatabaseType::PagedLod,
                |o: &Options| o.database_type,
                |o, v| o.database_type = v,
            )
            .build()
            .unwrap();
        assert_eq!(
            registry.field("MaximumTileImageSize").unwrap().default_value(),
            &Value::UInt(512)
        );

        // The prototype values differ from the declared defaults.
        let mut output = TextOutput::new();
        assert!(registry.write(&mut output, &Options::default()));
        assert_eq!(
            output.as_str(),
            "MaximumTileImageSize 256\nDatabaseType LOD_DATABASE\n"
        );

        let options = Options {
            maximum_tile_image_size: 512,
            database_type: DatabaseType::PagedLod,
            ..Default::default()
        };
        let mut output = TextOutput::new();
        assert!(!registry.write(&mut output, &options));
        assert_eq!(output.as_str(), "");

        let mut read_back = Options::default();
        let mut input = TextInput::new("DatabaseType PagedLOD_DATABASE");
        assert!(registry.read(&mut input, &mut read_back));
        assert_eq!(read_back.database_type, DatabaseType::PagedLod);
    }

    #[test]
    fn first_error_wins() {
        let result = SerializerRegistry::builder("Options", Options::default())
            .uint("Bad Name", |o| o.maximum_tile_image_size, |o, v| o.maximum_tile_image_size = v)
            .boolean("BuildOverlays", |o| o.build_overlays, |o, v| o.build_overlays = v)
            .boolean("BuildOverlays", |o| o.build_overlays, |o, v| o.build_overlays = v)
            .build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidFieldName("Bad Name"));
    }

    #[test]
    fn shared_across_threads() {
        let registry = alloc::sync::Arc::new(registry());
        let handles: Vec<_> = (0..4_u32)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    let options = Options {
                        maximum_tile_image_size: i,
                        ..Default::default()
                    };
                    let mut output = TextOutput::new();
                    registry.write(&mut output, &options);
                    output.into_string()
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), alloc::format!("MaximumTileImageSize {i}\n"));
        }
    }
}
