use crate::math::Vector2;
use nalgebra as na;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Rigid 2D placement of a body: translation plus rotation about the origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform2 {
    /// Position in world space
    pub position: Vector2,

    /// Counter-clockwise rotation in radians
    pub angle: f32,
}

impl Transform2 {
    #[inline]
    pub fn new(position: Vector2, angle: f32) -> Self {
        Self { position, angle }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates an unrotated transform at the given position
    #[inline]
    pub fn from_position(position: Vector2) -> Self {
        Self { position, angle: 0.0 }
    }

    #[inline]
    pub fn to_isometry(&self) -> na::Isometry2<f32> {
        na::Isometry2::new(self.position.to_nalgebra(), self.angle)
    }

    /// Maps a point from local to world space
    #[inline]
    pub fn transform_point(&self, local: Vector2) -> Vector2 {
        Vector2::from_point(&(self.to_isometry() * local.to_point()))
    }

    /// Rotates a direction from local to world space (no translation)
    ///
    /// An unrotated transform returns the input unchanged, so axis-aligned
    /// normals stay exactly axis-aligned.
    #[inline]
    pub fn rotate(&self, local: Vector2) -> Vector2 {
        let rotation = na::UnitComplex::new(self.angle);
        Vector2::from_nalgebra(&(rotation * local.to_nalgebra()))
    }
}
