#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vpb_serial::{Extents, Vec4};

use crate::enums::{DatabaseType, GeometryType, MipMappingMode, TextureType};

// -----------------------------------------------------------------------------
// BuildOptions

/// Settings of one terrain database build.
///
/// Field names in the text format are the `CamelCase` forms of the field
/// names below, e.g. `maximum_tile_image_size` is `MaximumTileImageSize`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildOptions {
    /// Output directory.
    pub directory: String,
    pub destination_tile_base_name: String,
    pub destination_tile_extension: String,
    pub destination_image_extension: String,
    /// Archive to write tiles into, empty for plain files.
    pub archive_name: String,
    pub intermediate_build_name: String,
    pub log_file_name: String,
    pub task_file_name: String,
    /// Free text stored with the build.
    pub comment_string: String,

    pub database_type: DatabaseType,
    pub geometry_type: GeometryType,
    pub mip_mapping_mode: MipMappingMode,
    pub texture_type: TextureType,

    /// Largest image tile edge, in pixels.
    pub maximum_tile_image_size: u32,
    /// Largest terrain tile edge, in samples.
    pub maximum_tile_terrain_size: u32,

    pub maximum_visible_distance_of_top_level: f32,
    pub radius_to_max_visible_distance_ratio: f32,
    pub vertical_scale: f32,
    pub skirt_ratio: f32,
    pub max_anisotropy: f32,

    pub build_overlays: bool,
    pub reproject_sources: bool,
    pub generate_tiles: bool,
    pub convert_from_geographic_to_geocentric: bool,
    pub use_local_tile_transform: bool,
    pub simplify_terrain: bool,
    pub decorate_generated_scene_graph_with_coordinate_system_node: bool,
    pub decorate_generated_scene_graph_with_multi_texture_control: bool,
    pub write_node_before_simplification: bool,

    /// Color of tiles without imagery.
    pub default_color: Vec4,

    /// Coordinate system of the output, as WKT or PROJ text.
    pub destination_coordinate_system: String,
    /// Area to build, [`Extents::INVALID`] for the union of all sources.
    pub destination_extents: Extents,

    pub maximum_num_of_levels: u32,

    pub record_subtile_file_names_on_leaf_tile: bool,
    pub generate_subtile: bool,
    pub subtile_level: u32,
    pub subtile_x: u32,
    pub subtile_y: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            directory: String::new(),
            destination_tile_base_name: "output".into(),
            destination_tile_extension: ".ive".into(),
            destination_image_extension: ".dds".into(),
            archive_name: String::new(),
            intermediate_build_name: String::new(),
            log_file_name: String::new(),
            task_file_name: String::new(),
            comment_string: String::new(),

            database_type: DatabaseType::LodDatabase,
            geometry_type: GeometryType::Polygonal,
            mip_mapping_mode: MipMappingMode::MipMappingImagery,
            texture_type: TextureType::CompressedTexture,

            maximum_tile_image_size: 256,
            maximum_tile_terrain_size: 64,

            maximum_visible_distance_of_top_level: 1e10,
            radius_to_max_visible_distance_ratio: 7.0,
            vertical_scale: 1.0,
            skirt_ratio: 0.02,
            max_anisotropy: 1.0,

            build_overlays: false,
            reproject_sources: true,
            generate_tiles: true,
            convert_from_geographic_to_geocentric: false,
            use_local_tile_transform: true,
            simplify_terrain: true,
            decorate_generated_scene_graph_with_coordinate_system_node: true,
            decorate_generated_scene_graph_with_multi_texture_control: true,
            write_node_before_simplification: false,

            default_color: Vec4::new(0.5, 0.5, 1.0, 1.0),

            destination_coordinate_system: String::new(),
            destination_extents: Extents::INVALID,

            maximum_num_of_levels: 30,

            record_subtile_file_names_on_leaf_tile: false,
            generate_subtile: false,
            subtile_level: 0,
            subtile_x: 0,
            subtile_y: 0,
        }
    }
}

impl BuildOptions {
    /// Returns `true` if the build is restricted to a destination area.
    #[inline]
    pub fn has_destination_extents(&self) -> bool {
        self.destination_extents.is_valid()
    }
}
