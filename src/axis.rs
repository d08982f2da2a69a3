use glam::Vec3;
use strum_macros::EnumIter;

use crate::direction::Direction;

/// Selects which component of a continuous value decides the resulting
/// [Direction].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum_macros::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionAxis {
    X,
    Y,
    Z,
}

impl DirectionAxis {
    pub const fn positive(self) -> Direction {
        match self {
            DirectionAxis::X => Direction::Right,
            DirectionAxis::Y => Direction::Up,
            DirectionAxis::Z => Direction::Forward,
        }
    }

    pub const fn negative(self) -> Direction {
        match self {
            DirectionAxis::X => Direction::Left,
            DirectionAxis::Y => Direction::Down,
            DirectionAxis::Z => Direction::Backward,
        }
    }

    #[inline]
    pub const fn unit_vec3(self) -> Vec3 {
        self.positive().to_vec3()
    }
}
