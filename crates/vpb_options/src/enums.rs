#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vpb_serial::impl_enum_field;

/// Scene graph structure of the generated database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DatabaseType {
    #[default]
    LodDatabase,
    PagedLodDatabase,
}

impl_enum_field!(DatabaseType {
    LodDatabase => "LOD_DATABASE",
    PagedLodDatabase => "PagedLOD_DATABASE",
});

/// Terrain geometry representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryType {
    HeightField,
    #[default]
    Polygonal,
}

impl_enum_field!(GeometryType {
    HeightField => "HEIGHT_FIELD",
    Polygonal => "POLYGONAL",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MipMappingMode {
    NoMipMapping,
    MipMappingHardware,
    #[default]
    MipMappingImagery,
}

impl_enum_field!(MipMappingMode {
    NoMipMapping => "NO_MIP_MAPPING",
    MipMappingHardware => "MIP_MAPPING_HARDWARE",
    MipMappingImagery => "MIP_MAPPING_IMAGERY",
});

/// Pixel format of the generated imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextureType {
    Rgb24,
    Rgba,
    Rgb16,
    Rgba16,
    #[default]
    CompressedTexture,
    CompressedRgbaTexture,
}

impl_enum_field!(TextureType {
    Rgb24 => "RGB_24",
    Rgba => "RGBA",
    Rgb16 => "RGB_16",
    Rgba16 => "RGBA_16",
    CompressedTexture => "COMPRESSED_TEXTURE",
    CompressedRgbaTexture => "COMPRESSED_RGBA_TEXTURE",
});
