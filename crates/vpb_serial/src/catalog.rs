use alloc::sync::Arc;
use core::any::{Any, TypeId};
use core::fmt;

use vpb_utils::TypeIdMap;
use vpb_utils::hash::HashMap;

use crate::registry::SerializerRegistry;
use crate::text::{OutputSink, TokenSource};

// -----------------------------------------------------------------------------
// ObjectSerializer

/// Type-erased view of a [`SerializerRegistry`], for callers that only know
/// an object by its class name.
pub trait ObjectSerializer: Any + Send + Sync {
    /// Name of the object type.
    fn class_name(&self) -> &'static str;

    /// Reads a block into `object`.
    ///
    /// Returns `None` if `object` is not of the registry's type, otherwise the
    /// number of fields applied.
    fn read_object_dyn(&self, source: &mut dyn TokenSource, object: &mut dyn Any) -> Option<usize>;

    /// Writes `object` as a block.
    ///
    /// Returns `None` if `object` is not of the registry's type, otherwise
    /// whether any field was written.
    fn write_object_dyn(&self, sink: &mut dyn OutputSink, object: &dyn Any) -> Option<bool>;
}

impl<T: Any + Send + Sync> ObjectSerializer for SerializerRegistry<T> {
    #[inline]
    fn class_name(&self) -> &'static str {
        SerializerRegistry::class_name(self)
    }

    fn read_object_dyn(&self, source: &mut dyn TokenSource, object: &mut dyn Any) -> Option<usize> {
        let object = object.downcast_mut::<T>()?;
        Some(self.read_object(source, object))
    }

    fn write_object_dyn(&self, sink: &mut dyn OutputSink, object: &dyn Any) -> Option<bool> {
        let object = object.downcast_ref::<T>()?;
        Some(self.write_object(sink, object))
    }
}

// -----------------------------------------------------------------------------
// RegistryCatalog

/// Caller-owned lookup of registries by object type and by class name.
///
/// Filled by an initialization routine at startup, then shared read-only.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vpb_serial::{RegistryCatalog, SerializerRegistry, TextInput};
///
/// #[derive(Default)]
/// struct Options {
///     levels: u32,
/// }
///
/// let registry = SerializerRegistry::builder("Options", Options::default())
///     .uint("MaximumNumOfLevels", |o: &Options| o.levels, |o, v| o.levels = v)
///     .build()
///     .unwrap();
///
/// let mut catalog = RegistryCatalog::new();
/// assert!(catalog.insert(Arc::new(registry)));
///
/// let mut options = Options::default();
/// let mut input = TextInput::new("Options {\n  MaximumNumOfLevels 12\n}");
/// let serializer = catalog.get_with_class_name("Options").unwrap();
/// assert_eq!(serializer.read_object_dyn(&mut input, &mut options), Some(1));
/// assert_eq!(options.levels, 12);
/// ```
#[derive(Default)]
pub struct RegistryCatalog {
    by_type: TypeIdMap<Arc<dyn ObjectSerializer>>,
    by_class_name: HashMap<&'static str, TypeId>,
}

impl RegistryCatalog {
    /// Creates an empty catalog.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the registry of `T`.
    ///
    /// Returns `false` and keeps the existing entry if `T` or its class name
    /// is already registered.
    pub fn insert<T: Any + Send + Sync>(&mut self, registry: Arc<SerializerRegistry<T>>) -> bool {
        let class_name = registry.class_name();
        if self.by_class_name.contains_key(class_name) {
            return false;
        }
        let inserted = self
            .by_type
            .try_insert_type::<T>(|| registry as Arc<dyn ObjectSerializer>);
        if inserted {
            self.by_class_name.insert(class_name, TypeId::of::<T>());
        }
        inserted
    }

    /// Returns the registry of `T`.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&SerializerRegistry<T>> {
        let serializer: &dyn ObjectSerializer = &**self.by_type.get_type::<T>()?;
        let serializer: &dyn Any = serializer;
        serializer.downcast_ref::<SerializerRegistry<T>>()
    }

    /// Returns the registry with the given class name.
    pub fn get_with_class_name(&self, class_name: &str) -> Option<&dyn ObjectSerializer> {
        let type_id = self.by_class_name.get(class_name)?;
        self.by_type.get(type_id).map(|serializer| &**serializer)
    }

    /// Whether a registry for `T` is present.
    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.by_type.contains_type::<T>()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Class names in arbitrary order.
    pub fn class_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.by_class_name.keys().copied()
    }
}

impl fmt::Debug for RegistryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.by_class_name.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{TextInput, TextOutput};

    #[derive(Default)]
    struct Tiles {
        size: u32,
    }

    #[derive(Default)]
    struct Terrain {
        scale: f32,
    }

    fn catalog() -> RegistryCatalog {
        let tiles = SerializerRegistry::builder("Tiles", Tiles { size: 256 })
            .uint("MaximumTileImageSize", |o| o.size, |o, v| o.size = v)
            .build()
            .unwrap();
        let terrain = SerializerRegistry::builder("Terrain", Terrain { scale: 1.0 })
            .float("VerticalScale", |o| o.scale, |o, v| o.scale = v)
            .build()
            .unwrap();
        let mut catalog = RegistryCatalog::new();
        assert!(catalog.insert(Arc::new(tiles)));
        assert!(catalog.insert(Arc::new(terrain)));
        catalog
    }

    #[test]
    fn typed_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains::<Tiles>());
        assert!(!catalog.contains::<u32>());
        assert_eq!(catalog.get::<Terrain>().unwrap().class_name(), "Terrain");
        assert!(catalog.get::<u32>().is_none());
    }

    #[test]
    fn duplicates_rejected() {
        let mut catalog = catalog();
        let again = SerializerRegistry::builder("Tiles", Tiles::default()).build().unwrap();
        assert!(!catalog.insert(Arc::new(again)));
        let renamed = SerializerRegistry::builder("Tiles2", Tiles::default()).build().unwrap();
        assert!(!catalog.insert(Arc::new(renamed)));
        assert!(catalog.get_with_class_name("Tiles2").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn erased_read_write() {
        let catalog = catalog();
        let serializer = catalog.get_with_class_name("Terrain").unwrap();

        let mut terrain = Terrain { scale: 1.0 };
        let mut input = TextInput::new("Terrain {\n  VerticalScale 2.5\n}");
        assert_eq!(serializer.read_object_dyn(&mut input, &mut terrain), Some(1));
        assert_eq!(terrain.scale, 2.5);

        let mut output = TextOutput::new();
        assert_eq!(serializer.write_object_dyn(&mut output, &terrain), Some(true));
        assert_eq!(output.as_str(), "Terrain {\n  VerticalScale 2.5\n}\n");

        let mut wrong = Tiles::default();
        assert_eq!(serializer.read_object_dyn(&mut input, &mut wrong), None);
        assert_eq!(serializer.write_object_dyn(&mut output, &wrong), None);
    }
}
