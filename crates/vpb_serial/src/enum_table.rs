use alloc::vec::Vec;

use vpb_utils::hash::{HashMap, new_map};

use crate::error::ConfigError;

// -----------------------------------------------------------------------------
// EnumField

/// A fieldless enum stored as a symbolic name.
///
/// Usually implemented through [`impl_enum_field!`](crate::impl_enum_field).
pub trait EnumField: Copy + 'static {
    /// Every variant with its symbolic name, in table order.
    const VARIANTS: &'static [(Self, &'static str)];

    /// The integer value of this variant.
    fn to_raw(self) -> i32;

    /// The variant with the given integer value.
    fn from_raw(raw: i32) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(variant, _)| variant.to_raw() == raw)
            .map(|(variant, _)| *variant)
    }

    /// Builds the name table of this enum.
    fn enum_table() -> Result<EnumTable, ConfigError> {
        let mut table = EnumTable::with_capacity(Self::VARIANTS.len());
        for (variant, name) in Self::VARIANTS {
            table.add_mapping(variant.to_raw(), *name)?;
        }
        Ok(table)
    }
}

// -----------------------------------------------------------------------------
// EnumTable

/// Bidirectional mapping between enum values and their symbolic names.
///
/// Both values and names are unique within one table.
///
/// # Examples
///
/// ```
/// use vpb_serial::EnumTable;
///
/// let mut table = EnumTable::new();
/// table.add_mapping(0, "LOD_DATABASE").unwrap();
/// table.add_mapping(1, "PagedLOD_DATABASE").unwrap();
///
/// assert_eq!(table.name_for(1), Some("PagedLOD_DATABASE"));
/// assert_eq!(table.value_for("LOD_DATABASE"), Some(0));
/// assert_eq!(table.value_for("BOGUS_TYPE"), None);
///
/// assert!(table.add_mapping(1, "OTHER").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnumTable {
    // Insertion order, for listing.
    entries: Vec<(i32, &'static str)>,
    value_to_name: HashMap<i32, &'static str>,
    name_to_value: HashMap<&'static str, i32>,
}

impl EnumTable {
    /// Creates an empty table.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            value_to_name: new_map(),
            name_to_value: new_map(),
        }
    }

    /// Creates an empty table with room for `capacity` mappings.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut table = Self::new();
        table.entries.reserve(capacity);
        table.value_to_name.reserve(capacity);
        table.name_to_value.reserve(capacity);
        table
    }

    /// Adds a mapping.
    ///
    /// Fails without modifying the table if either the value or the name is
    /// already present.
    pub fn add_mapping(&mut self, value: i32, name: &'static str) -> Result<(), ConfigError> {
        if self.value_to_name.contains_key(&value) {
            return Err(ConfigError::DuplicateEnumValue { value, name });
        }
        if self.name_to_value.contains_key(name) {
            return Err(ConfigError::DuplicateEnumName { name, value });
        }
        self.entries.push((value, name));
        self.value_to_name.insert(value, name);
        self.name_to_value.insert(name, value);
        Ok(())
    }

    /// Returns the name of `value`, if mapped.
    #[inline]
    pub fn name_for(&self, value: i32) -> Option<&'static str> {
        self.value_to_name.get(&value).copied()
    }

    /// Returns the value named `name`, if mapped.
    #[inline]
    pub fn value_for(&self, name: &str) -> Option<i32> {
        self.name_to_value.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mappings in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (i32, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}
