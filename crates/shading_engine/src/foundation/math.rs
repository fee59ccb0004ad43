//! Math utilities and types
//!
//! Provides the vector types the shading pipeline works in. Rasterizer inputs
//! arrive in double precision, so every alias here is `f64`.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type (texture coordinates)
pub type Vec2 = Vector2<f64>;

/// 3D vector type (colors, positions, normals)
pub type Vec3 = Vector3<f64>;

/// 4D vector type (color plus alpha or intensity)
pub type Vec4 = Vector4<f64>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = 2.0 * PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// A variant of `atan2` with a range of [0, 2pi) instead of (-pi, pi].
    pub fn full_atan2(y: f64, x: f64) -> f64 {
        let angle = y.atan2(x);
        if angle >= 0.0 {
            angle
        } else {
            constants::TAU + angle
        }
    }

    /// Horizontal angle of a view direction around the vertical (Y) axis.
    ///
    /// Distant materials take this in place of a world position.
    pub fn distant_theta(direction: &Vec3) -> f64 {
        full_atan2(direction.z, direction.x)
    }

    /// Largest of the three channels of a color
    pub fn max_component(color: &Vec3) -> f64 {
        color.x.max(color.y).max(color.z)
    }
}
