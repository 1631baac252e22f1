//! Small shared containers used by the serialization crates.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod type_id_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use type_id_map::TypeIdMap;
