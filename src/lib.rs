//! Discrete axis directions for the voxel world and conversions between
//! them and `glam` vectors.

pub mod axis;
pub mod convert;
pub mod direction;
pub mod error;

pub use axis::DirectionAxis;
pub use convert::ToDirection;
pub use direction::Direction;
pub use error::DirectionError;

pub mod prelude {
    pub use crate::{Direction, DirectionAxis, DirectionError, ToDirection};
}
