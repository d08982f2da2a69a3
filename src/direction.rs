use std::str::FromStr;

use glam::{IVec2, IVec3, Vec2, Vec3};
use strum_macros::{EnumIter, FromRepr};

use crate::axis::DirectionAxis;
use crate::error::DirectionError;

/// A discrete axis direction, or the absence of one.
///
/// Right/Left lie on X, Up/Down on Y and Forward/Backward on Z. The
/// discriminants are stable so a facing can be packed into block state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    FromRepr,
    strum_macros::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// Positive Y
    Up = 0,
    /// Negative Y
    Down = 1,
    /// Positive X
    Right = 2,
    /// Negative X
    Left = 3,
    /// Positive Z
    Forward = 4,
    /// Negative Z
    Backward = 5,
    #[default]
    None = 6,
}

impl Direction {
    /// Declaration order, same as `Direction::iter()`. Usable in const
    /// contexts and without importing `IntoEnumIterator`.
    pub const ALL: [Direction; 7] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
        Direction::Forward,
        Direction::Backward,
        Direction::None,
    ];

    /// Every direction that actually points somewhere.
    pub const ALL_3D: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
        Direction::Forward,
        Direction::Backward,
    ];

    pub const fn flip(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::None => Direction::None,
        }
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    #[inline]
    pub const fn is_depth_axis(self) -> bool {
        matches!(self, Direction::Forward | Direction::Backward)
    }

    #[inline]
    pub const fn is_2d(self) -> bool {
        self.is_horizontal() || self.is_vertical()
    }

    #[inline]
    pub const fn is_3d(self) -> bool {
        self.is_2d() || self.is_depth_axis()
    }

    /// Up, Right and Forward are the positive end of their axis.
    pub const fn is_positive_axis_value(self) -> bool {
        matches!(self, Direction::Up | Direction::Right | Direction::Forward)
    }

    /// The axis this direction lies on, if any.
    pub const fn axis(self) -> Option<DirectionAxis> {
        match self {
            Direction::Right | Direction::Left => Some(DirectionAxis::X),
            Direction::Up | Direction::Down => Some(DirectionAxis::Y),
            Direction::Forward | Direction::Backward => Some(DirectionAxis::Z),
            Direction::None => None,
        }
    }

    /// Unit vector in the XY plane. Depth directions have no 2D
    /// representation and map to zero, as does [Direction::None].
    pub const fn to_vec2(self) -> Vec2 {
        match self {
            Direction::Right => Vec2::X,
            Direction::Left => Vec2::NEG_X,
            Direction::Up => Vec2::Y,
            Direction::Down => Vec2::NEG_Y,
            Direction::Forward | Direction::Backward | Direction::None => Vec2::ZERO,
        }
    }

    pub const fn to_vec3(self) -> Vec3 {
        match self {
            Direction::Right => Vec3::X,
            Direction::Left => Vec3::NEG_X,
            Direction::Up => Vec3::Y,
            Direction::Down => Vec3::NEG_Y,
            Direction::Forward => Vec3::Z,
            Direction::Backward => Vec3::NEG_Z,
            Direction::None => Vec3::ZERO,
        }
    }

    pub const fn to_ivec2(self) -> IVec2 {
        match self {
            Direction::Right => IVec2::X,
            Direction::Left => IVec2::NEG_X,
            Direction::Up => IVec2::Y,
            Direction::Down => IVec2::NEG_Y,
            Direction::Forward | Direction::Backward | Direction::None => IVec2::ZERO,
        }
    }

    /// Grid offset of the neighbouring cell in this direction.
    pub const fn to_ivec3(self) -> IVec3 {
        match self {
            Direction::Right => IVec3::X,
            Direction::Left => IVec3::NEG_X,
            Direction::Up => IVec3::Y,
            Direction::Down => IVec3::NEG_Y,
            Direction::Forward => IVec3::Z,
            Direction::Backward => IVec3::NEG_Z,
            Direction::None => IVec3::ZERO,
        }
    }

    /// Case-insensitive lookup by variant name.
    pub fn from_name(name: &str) -> Result<Self, DirectionError> {
        name.parse()
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "right" => Ok(Direction::Right),
            "left" => Ok(Direction::Left),
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            "none" => Ok(Direction::None),
            _ => Err(DirectionError::UnknownName(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::from_repr(value).ok_or(DirectionError::InvalidRepr(value))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction as u8
    }
}
