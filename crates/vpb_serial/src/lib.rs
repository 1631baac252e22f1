//! A declarative field serialization engine.
//!
//! Each field of a configuration object is registered once, as a name, a
//! default value, a getter/setter pair and a [`Codec`]. The resulting
//! [`SerializerRegistry`] then reads and writes whole objects in a line based
//! text format:
//!
//! ```text
//! BuildOverlays true
//! DatabaseType PagedLOD_DATABASE
//! DestinationExtents 10.5 20 30.5 40
//! ```
//!
//! Fields equal to their default are not written, unless the [`OutputSink`]
//! asks for exhaustive output. Reading tolerates any field order and missing
//! fields.
//!
//! ## Menu
//!
//! - [`Value`], [`ValueKind`], [`Vec4`], [`Extents`]: the value model.
//! - [`FieldValue`]: bridge between Rust field types and [`Value`].
//! - [`EnumTable`], [`EnumField`]: symbolic names of enumerations.
//! - [`Codec`]: text encoding of one value kind.
//! - [`TokenSource`], [`OutputSink`]: text collaborators, with the
//!   [`TextInput`] and [`TextOutput`] implementations.
//! - [`FieldSerializer`]: read/write of a single field.
//! - [`SerializerRegistry`], [`RegistryBuilder`]: the field table of one type.
//! - [`RegistryCatalog`]: caller-owned lookup of registries by type or class name.
//!
//! # Example
//!
//! ```
//! use vpb_serial::{SerializerRegistry, TextInput, TextOutput};
//!
//! #[derive(Default)]
//! struct Options {
//!     directory: String,
//!     tile_size: u32,
//!     overlays: bool,
//! }
//!
//! let registry = SerializerRegistry::builder("Options", Options { tile_size: 256, ..Default::default() })
//!     .string("Directory", |o: &Options| o.directory.clone(), |o, v| o.directory = v)
//!     .uint("MaximumTileImageSize", |o: &Options| o.tile_size, |o, v| o.tile_size = v)
//!     .boolean("BuildOverlays", |o: &Options| o.overlays, |o, v| o.overlays = v)
//!     .build()
//!     .unwrap();
//!
//! let options = Options { tile_size: 256, overlays: true, ..Default::default() };
//! let mut output = TextOutput::new();
//! assert!(registry.write(&mut output, &options));
//! assert_eq!(output.as_str(), "BuildOverlays true\n");
//!
//! let mut read_back = Options { tile_size: 256, ..Default::default() };
//! let mut input = TextInput::new(output.as_str());
//! assert!(registry.read(&mut input, &mut read_back));
//! assert!(read_back.overlays);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod catalog;
mod codec;
mod enum_table;
mod error;
mod field;
mod registry;
mod text;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use catalog::{ObjectSerializer, RegistryCatalog};
pub use codec::Codec;
pub use enum_table::{EnumField, EnumTable};
pub use error::{ConfigError, DecodeError};
pub use field::FieldSerializer;
pub use registry::{FieldRead, RegistryBuilder, SerializerRegistry};
pub use text::{OutputSink, TextInput, TextOutput, TokenSource};
pub use value::{Extents, FieldValue, Value, ValueKind, Vec4};

#[cfg(feature = "std")]
pub use text::IoSink;

// -----------------------------------------------------------------------------
// Macros

/// Implements [`EnumField`] for a fieldless enum, listing the symbolic name
/// of every variant in table order.
///
/// The raw value of a variant is its discriminant.
///
/// # Example
///
/// ```
/// use vpb_serial::{EnumField, impl_enum_field};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum GeometryType {
///     HeightField,
///     Polygonal,
/// }
///
/// impl_enum_field!(GeometryType {
///     HeightField => "HEIGHT_FIELD",
///     Polygonal => "POLYGONAL",
/// });
///
/// assert_eq!(GeometryType::Polygonal.to_raw(), 1);
/// assert_eq!(GeometryType::from_raw(0), Some(GeometryType::HeightField));
/// ```
#[macro_export]
macro_rules! impl_enum_field {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $crate::EnumField for $ty {
            const VARIANTS: &'static [(Self, &'static str)] = &[$(($ty::$variant, $name)),+];

            #[inline]
            fn to_raw(self) -> i32 {
                self as i32
            }
        }
    };
}
