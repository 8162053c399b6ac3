//! Geometry payloads carried on semantics nodes.
//!
//! These are plain value types in the remote consumer's coordinate model:
//! an axis-aligned bounding box spanning two corners and a column-major
//! 4x4 transform. The bridge never interprets them, it only sizes them and
//! forwards them, so no linear-algebra crate is pulled in.

use serde::{Deserialize, Serialize};

/// A point or extent in the consumer's 3-D coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned bounding box for a node.
///
/// The z components carry depth placement: `min.z` holds the node's
/// elevation and `max.z` its thickness, matching how source frameworks
/// project 2-D rects with depth into the consumer's scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Creates a bounding box from explicit corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a flat bounding box from a 2-D rect at zero depth.
    #[must_use]
    pub fn from_rect(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::from_rect_with_depth(left, top, right, bottom, 0.0, 0.0)
    }

    /// Creates a bounding box from a 2-D rect plus elevation and thickness.
    #[must_use]
    pub fn from_rect_with_depth(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        elevation: f32,
        thickness: f32,
    ) -> Self {
        Self {
            min: Vec3::new(left, top, elevation),
            max: Vec3::new(right, bottom, thickness),
        }
    }
}

/// A 4x4 transform stored as 16 floats in column-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Matrix entries, column major.
    pub matrix: [f32; 16],
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform {
        matrix: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a transform from column-major entries.
    #[must_use]
    pub const fn from_cols_array(matrix: [f32; 16]) -> Self {
        Self { matrix }
    }

    /// Creates a pure 2-D translation.
    #[must_use]
    pub const fn from_translation(x: f32, y: f32) -> Self {
        let mut matrix = Self::IDENTITY.matrix;
        matrix[12] = x;
        matrix[13] = y;
        Self { matrix }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transform_is_identity() {
        assert_eq!(Transform::default(), Transform::IDENTITY);
        assert_eq!(Transform::IDENTITY.matrix[0], 1.0);
        assert_eq!(Transform::IDENTITY.matrix[5], 1.0);
        assert_eq!(Transform::IDENTITY.matrix[10], 1.0);
        assert_eq!(Transform::IDENTITY.matrix[15], 1.0);
    }

    #[test]
    fn translation_lands_in_fourth_column() {
        let t = Transform::from_translation(3.0, -2.0);
        assert_eq!(t.matrix[12], 3.0);
        assert_eq!(t.matrix[13], -2.0);
        assert_eq!(t.matrix[0], 1.0);
        assert_eq!(t.matrix[14], 0.0);
    }

    #[test]
    fn rect_maps_depth_into_z() {
        let b = BoundingBox::from_rect_with_depth(0.0, 0.0, 100.0, 50.0, 4.0, 1.5);
        assert_eq!(b.min, Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(b.max, Vec3::new(100.0, 50.0, 1.5));
    }

    #[test]
    fn flat_rect_has_zero_depth() {
        let b = BoundingBox::from_rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(b.min.z, 0.0);
        assert_eq!(b.max.z, 0.0);
    }
}
