//! Declarative field serialization for `VirtualPlanetBuilder` style configuration objects.
//!
//! - [`utils`]: hash containers and the [`TypeId`](core::any::TypeId) keyed map.
//! - [`serial`]: values, codecs, enum tables, field serializers and registries.
//! - [`options`]: the `BuildOptions` configuration object and its field table.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vpb_options as options;
pub use vpb_serial as serial;
pub use vpb_utils as utils;
