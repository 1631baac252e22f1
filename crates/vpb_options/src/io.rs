use alloc::sync::Arc;
use std::sync::LazyLock;

use vpb_serial::{ConfigError, RegistryCatalog, SerializerRegistry, TextInput, TextOutput};

use crate::build_options::BuildOptions;

/// Block header of [`BuildOptions`] in the text format.
pub const CLASS_NAME: &str = "vpb::BuildOptions";

static REGISTRY: LazyLock<Arc<SerializerRegistry<BuildOptions>>> = LazyLock::new(|| {
    match build_registry() {
        Ok(registry) => Arc::new(registry),
        Err(err) => panic!("invalid `{CLASS_NAME}` field table: {err}"),
    }
});

/// The field table of [`BuildOptions`].
///
/// Built on first call; later calls return the same registry.
#[inline]
pub fn build_options_registry() -> &'static Arc<SerializerRegistry<BuildOptions>> {
    &REGISTRY
}

/// Adds the [`BuildOptions`] registry to `catalog`.
///
/// Returns `false` if it was already present.
pub fn register_build_options(catalog: &mut RegistryCatalog) -> bool {
    catalog.insert(Arc::clone(build_options_registry()))
}

macro_rules! add {
    ($builder:expr, string, $name:literal, $field:ident) => {
        $builder.string(
            $name,
            |o: &BuildOptions| o.$field.clone(),
            |o: &mut BuildOptions, v| o.$field = v,
        )
    };
    ($builder:expr, $kind:ident, $name:literal, $field:ident) => {
        $builder.$kind($name, |o: &BuildOptions| o.$field, |o: &mut BuildOptions, v| o.$field = v)
    };
}

fn build_registry() -> Result<SerializerRegistry<BuildOptions>, ConfigError> {
    let b = SerializerRegistry::builder(CLASS_NAME, BuildOptions::default());

    let b = add!(b, string, "Directory", directory);
    let b = add!(b, string, "DestinationTileBaseName", destination_tile_base_name);
    let b = add!(b, string, "DestinationTileExtension", destination_tile_extension);
    let b = add!(b, string, "DestinationImageExtension", destination_image_extension);
    let b = add!(b, string, "ArchiveName", archive_name);
    let b = add!(b, string, "IntermediateBuildName", intermediate_build_name);
    let b = add!(b, string, "LogFileName", log_file_name);
    let b = add!(b, string, "TaskFileName", task_file_name);
    let b = add!(b, string, "CommentString", comment_string);

    let b = add!(b, enumeration, "DatabaseType", database_type);
    let b = add!(b, enumeration, "GeometryType", geometry_type);
    let b = add!(b, enumeration, "MipMappingMode", mip_mapping_mode);
    let b = add!(b, enumeration, "TextureType", texture_type);

    let b = add!(b, uint, "MaximumTileImageSize", maximum_tile_image_size);
    let b = add!(b, uint, "MaximumTileTerrainSize", maximum_tile_terrain_size);

    let b = add!(b, float, "MaximumVisibleDistanceOfTopLevel", maximum_visible_distance_of_top_level);
    let b = add!(b, float, "RadiusToMaxVisibleDistanceRatio", radius_to_max_visible_distance_ratio);
    let b = add!(b, float, "VerticalScale", vertical_scale);
    let b = add!(b, float, "SkirtRatio", skirt_ratio);
    let b = add!(b, float, "MaxAnisotropy", max_anisotropy);

    let b = add!(b, boolean, "BuildOverlays", build_overlays);
    let b = add!(b, boolean, "ReprojectSources", reproject_sources);
    let b = add!(b, boolean, "GenerateTiles", generate_tiles);
    let b = add!(b, boolean, "ConvertFromGeographicToGeocentric", convert_from_geographic_to_geocentric);
    let b = add!(b, boolean, "UseLocalTileTransform", use_local_tile_transform);
    let b = add!(b, boolean, "SimplifyTerrain", simplify_terrain);
    let b = add!(
        b,
        boolean,
        "DecorateGeneratedSceneGraphWithCoordinateSystemNode",
        decorate_generated_scene_graph_with_coordinate_system_node
    );
    let b = add!(
        b,
        boolean,
        "DecorateGeneratedSceneGraphWithMultiTextureControl",
        decorate_generated_scene_graph_with_multi_texture_control
    );
    let b = add!(b, boolean, "WriteNodeBeforeSimplification", write_node_before_simplification);

    let b = add!(b, vec4, "DefaultColor", default_color);

    let b = add!(b, string, "DestinationCoordinateSystem", destination_coordinate_system);
    let b = add!(b, extents, "DestinationExtents", destination_extents);

    let b = add!(b, uint, "MaximumNumOfLevels", maximum_num_of_levels);

    let b = add!(b, boolean, "RecordSubtileFileNamesOnLeafTile", record_subtile_file_names_on_leaf_tile);
    let b = add!(b, boolean, "GenerateSubtile", generate_subtile);
    let b = add!(b, uint, "SubtileLevel", subtile_level);
    let b = add!(b, uint, "SubtileX", subtile_x);
    let b = add!(b, uint, "SubtileY", subtile_y);

    b.build()
}

// -----------------------------------------------------------------------------
// Text helpers

impl BuildOptions {
    /// Writes these options as a `vpb::BuildOptions { ... }` block.
    ///
    /// With `exhaustive`, fields equal to their default are written too.
    pub fn write_to_string(&self, exhaustive: bool) -> String {
        let mut output = TextOutput::with_defaults(exhaustive);
        build_options_registry().write_object(&mut output, self);
        output.into_string()
    }

    /// Reads options from text, starting from the defaults.
    ///
    /// Unknown and malformed fields are skipped; a missing field keeps its
    /// default.
    pub fn read_from_str(text: &str) -> Self {
        let mut options = Self::default();
        options.apply_str(text);
        options
    }

    /// Reads fields from text into these options, returning how many were set.
    pub fn apply_str(&mut self, text: &str) -> usize {
        let mut input = TextInput::new(text);
        let applied = build_options_registry().read_object(&mut input, self);
        log::debug!("applied {applied} field(s) to `{CLASS_NAME}`");
        applied
    }
}
