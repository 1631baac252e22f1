//! Build options of a terrain database build, with their text serialization.
//!
//! [`BuildOptions`] is the configuration object; [`build_options_registry`]
//! returns its field table, built on first use and shared for the rest of
//! the process.
//!
//! # Example
//!
//! ```
//! use vpb_options::{BuildOptions, DatabaseType};
//!
//! let mut options = BuildOptions::default();
//! options.build_overlays = true;
//! options.database_type = DatabaseType::PagedLodDatabase;
//!
//! let text = options.write_to_string(false);
//! assert_eq!(
//!     text,
//!     "vpb::BuildOptions {\n  DatabaseType PagedLOD_DATABASE\n  BuildOverlays true\n}\n"
//! );
//!
//! let read_back = BuildOptions::read_from_str(&text);
//! assert_eq!(read_back, options);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod build_options;
mod enums;
mod io;

// -----------------------------------------------------------------------------
// Exports

pub use build_options::BuildOptions;
pub use enums::{DatabaseType, GeometryType, MipMappingMode, TextureType};
pub use io::{CLASS_NAME, build_options_registry, register_build_options};
