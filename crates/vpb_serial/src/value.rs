use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::Codec;
use crate::error::DecodeError;

// -----------------------------------------------------------------------------
// ValueKind

/// The kind of a [`Value`], which is also the kind a [`Codec`] handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    UInt,
    Int,
    Float,
    Double,
    Bool,
    Vec4,
    Extents,
    Enum,
}

impl ValueKind {
    /// Number of text tokens a value of this kind occupies.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Self::Vec4 | Self::Extents => 4,
            _ => 1,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.pad("string"),
            Self::UInt => f.pad("unsigned integer"),
            Self::Int => f.pad("integer"),
            Self::Float => f.pad("float"),
            Self::Double => f.pad("double"),
            Self::Bool => f.pad("boolean"),
            Self::Vec4 => f.pad("vec4"),
            Self::Extents => f.pad("extents"),
            Self::Enum => f.pad("enum"),
        }
    }
}

// -----------------------------------------------------------------------------
// Vec4

/// A four component vector, written as `x y z w`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Components in text order.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f64; 4]> for Vec4 {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self { x, y, z, w }
    }
}

// -----------------------------------------------------------------------------
// Extents

/// A geospatial min/max bounding box, written as `minX minY maxX maxY`.
///
/// The [`Default`] is the zero box. [`Extents::INVALID`] is the empty box
/// that any [`expand_by`](Extents::expand_by) call replaces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extents {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extents {
    pub const INVALID: Self = Self::new(f64::MAX, f64::MAX, -f64::MAX, -f64::MAX);

    #[inline]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns `true` if the box is not inverted.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Grows the box to include the point.
    pub fn expand_by(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Components in text order.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

impl From<[f64; 4]> for Extents {
    #[inline]
    fn from([min_x, min_y, max_x, max_y]: [f64; 4]) -> Self {
        Self::new(min_x, min_y, max_x, max_y)
    }
}

// -----------------------------------------------------------------------------
// Value

/// A field value of one of the supported kinds.
///
/// Values are never converted between kinds; [`PartialEq`] is exact for
/// scalars and component-wise for [`Vec4`] and [`Extents`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    String(String),
    UInt(u32),
    Int(i32),
    Float(f32),
    Double(f64),
    Bool(bool),
    Vec4(Vec4),
    Extents(Extents),
    Enum(i32),
}

impl Value {
    /// Returns the kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::UInt(_) => ValueKind::UInt,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::Bool(_) => ValueKind::Bool,
            Self::Vec4(_) => ValueKind::Vec4,
            Self::Extents(_) => ValueKind::Extents,
            Self::Enum(_) => ValueKind::Enum,
        }
    }
}

// -----------------------------------------------------------------------------
// FieldValue

/// A Rust type that can be stored in a serialized field.
///
/// Enumerations go through [`EnumField`](crate::EnumField) instead, since
/// their codec needs a name table.
pub trait FieldValue: Sized + 'static {
    /// The kind this type maps to.
    const KIND: ValueKind;

    /// The codec for this type.
    fn codec() -> Codec;

    fn into_value(self) -> Value;

    /// Fails with [`DecodeError::KindMismatch`] for any other kind.
    fn from_value(value: Value) -> Result<Self, DecodeError>;
}

macro_rules! impl_field_value {
    ($ty:ty, $variant:ident) => {
        impl FieldValue for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            #[inline]
            fn codec() -> Codec {
                Codec::$variant
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            #[inline]
            fn from_value(value: Value) -> Result<Self, DecodeError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(DecodeError::KindMismatch {
                        expected: Self::KIND,
                        found: other.kind(),
                    }),
                }
            }
        }
    };
}

impl_field_value!(String, String);
impl_field_value!(u32, UInt);
impl_field_value!(i32, Int);
impl_field_value!(f32, Float);
impl_field_value!(f64, Double);
impl_field_value!(bool, Bool);
impl_field_value!(Vec4, Vec4);
impl_field_value!(Extents, Extents);
