use glam::{IVec2, IVec3, Vec2, Vec3};
use log::trace;

use crate::{axis::DirectionAxis, direction::Direction};

impl Direction {
    /// Resolves a direction from a 2D vector by looking only at the
    /// component on `priority_axis`.
    ///
    /// The other component is never consulted, so `(1, 1)` is [Direction::Right]
    /// with [DirectionAxis::X] and [Direction::Up] with [DirectionAxis::Y].
    /// A zero (or NaN) priority component, or [DirectionAxis::Z], gives
    /// [Direction::None].
    ///
    /// Discarding a nonzero off-axis component is reported at `trace` level.
    pub fn from_vec2(vec: Vec2, priority_axis: DirectionAxis) -> Self {
        let (value, ignored) = match priority_axis {
            DirectionAxis::X => (vec.x, vec.y),
            DirectionAxis::Y => (vec.y, vec.x),
            DirectionAxis::Z => return Direction::None,
        };

        if ignored != 0.0 {
            trace!(
                "Resolving {} along {}, discarding off-axis component {}",
                vec,
                priority_axis,
                ignored
            );
        }

        Direction::from_signed_scalar(value, priority_axis)
    }

    /// Maps the sign of `value` onto `priority_axis`. Zero, NaN and
    /// [DirectionAxis::Z] all give [Direction::None].
    pub fn from_signed_scalar(value: f32, priority_axis: DirectionAxis) -> Self {
        match priority_axis {
            DirectionAxis::X | DirectionAxis::Y => {
                if value > 0.0 {
                    priority_axis.positive()
                } else if value < 0.0 {
                    priority_axis.negative()
                } else {
                    Direction::None
                }
            }
            DirectionAxis::Z => Direction::None,
        }
    }
}

/// Conversion of continuous values into a discrete [Direction].
pub trait ToDirection {
    fn to_direction(self, priority_axis: DirectionAxis) -> Direction;
}

impl ToDirection for Vec2 {
    #[inline]
    fn to_direction(self, priority_axis: DirectionAxis) -> Direction {
        Direction::from_vec2(self, priority_axis)
    }
}

impl ToDirection for f32 {
    #[inline]
    fn to_direction(self, priority_axis: DirectionAxis) -> Direction {
        Direction::from_signed_scalar(self, priority_axis)
    }
}

impl From<Direction> for Vec2 {
    fn from(direction: Direction) -> Self {
        direction.to_vec2()
    }
}

impl From<Direction> for Vec3 {
    fn from(direction: Direction) -> Self {
        direction.to_vec3()
    }
}

impl From<Direction> for IVec2 {
    fn from(direction: Direction) -> Self {
        direction.to_ivec2()
    }
}

impl From<Direction> for IVec3 {
    fn from(direction: Direction) -> Self {
        direction.to_ivec3()
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_from_vec2_ignores_other_axis() {
        assert_eq!(
            Direction::from_vec2(vec2(1.0, 1.0), DirectionAxis::X),
            Direction::Right
        );
        assert_eq!(
            Direction::from_vec2(vec2(1.0, 1.0), DirectionAxis::Y),
            Direction::Up
        );
        assert_eq!(
            Direction::from_vec2(vec2(-0.1, 50.0), DirectionAxis::X),
            Direction::Left
        );
        assert_eq!(
            Direction::from_vec2(vec2(50.0, -0.1), DirectionAxis::Y),
            Direction::Down
        );
    }

    #[test]
    fn test_from_vec2_zero_priority_component_is_none() {
        assert_eq!(
            Direction::from_vec2(Vec2::ZERO, DirectionAxis::X),
            Direction::None
        );
        // Y is nonzero but never consulted.
        assert_eq!(
            Direction::from_vec2(vec2(0.0, 1.0), DirectionAxis::X),
            Direction::None
        );
        assert_eq!(
            Direction::from_vec2(vec2(1.0, 0.0), DirectionAxis::Y),
            Direction::None
        );
    }

    #[test]
    fn test_from_vec2_z_axis_is_none() {
        assert_eq!(
            Direction::from_vec2(vec2(1.0, -1.0), DirectionAxis::Z),
            Direction::None
        );
    }

    #[test]
    fn test_from_vec2_nan_is_none() {
        assert_eq!(
            Direction::from_vec2(vec2(f32::NAN, 1.0), DirectionAxis::X),
            Direction::None
        );
    }

    #[test]
    fn test_from_signed_scalar() {
        assert_eq!(
            Direction::from_signed_scalar(-3.5, DirectionAxis::Y),
            Direction::Down
        );
        assert_eq!(
            Direction::from_signed_scalar(2.0, DirectionAxis::Y),
            Direction::Up
        );
        assert_eq!(
            Direction::from_signed_scalar(2.0, DirectionAxis::X),
            Direction::Right
        );
        assert_eq!(
            Direction::from_signed_scalar(-2.0, DirectionAxis::X),
            Direction::Left
        );
        assert_eq!(
            Direction::from_signed_scalar(0.0, DirectionAxis::X),
            Direction::None
        );
        assert_eq!(
            Direction::from_signed_scalar(-0.0, DirectionAxis::Y),
            Direction::None
        );
        assert_eq!(
            Direction::from_signed_scalar(5.0, DirectionAxis::Z),
            Direction::None
        );
    }

    #[test]
    fn test_to_direction_trait() {
        assert_eq!(vec2(0.0, -4.0).to_direction(DirectionAxis::Y), Direction::Down);
        assert_eq!(1.5_f32.to_direction(DirectionAxis::X), Direction::Right);
    }

    #[test]
    fn test_vec2_round_trip_for_2d_directions() {
        for direction in Direction::iter().filter(|d| d.is_2d()) {
            let axis = direction.axis().unwrap();
            assert_eq!(direction.to_vec2().to_direction(axis), direction);
        }
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Vec3::from(Direction::Forward), Vec3::Z);
        assert_eq!(Vec2::from(Direction::Left), Vec2::NEG_X);
        assert_eq!(IVec3::from(Direction::Down), IVec3::NEG_Y);
        assert_eq!(IVec2::from(Direction::Backward), IVec2::ZERO);
    }
}
