//! Per-pixel inputs handed over by the rasterizer
//!
//! The rasterizer resolves texture color, texture coordinate and world-space
//! attributes for every covered pixel before calling into the shading pipeline.

use crate::foundation::math::{utils, Vec2, Vec3};

/// Inputs for a surface pixel (unlit, lit and transparent materials)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelInputs {
    /// Interpolated texture color
    pub tex_color: Vec3,
    /// Texture coordinate in [0, 1] x [0, 1]
    pub tex_coord: Vec2,
    /// World-space position. Distant pixels store their angle in `x`.
    pub world_position: Vec3,
    /// World-space surface normal
    pub world_normal: Vec3,
    /// Precomputed lighting multiplier applied to the base pass
    pub lighting: Option<Vec3>,
    /// Renderer time, for animated shaders
    pub time: i32,
}

impl PixelInputs {
    /// Create inputs with only texture color and coordinate set
    pub fn new(tex_color: Vec3, tex_coord: Vec2) -> Self {
        Self {
            tex_color,
            tex_coord,
            world_position: Vec3::zeros(),
            world_normal: Vec3::new(0.0, 1.0, 0.0),
            lighting: None,
            time: 0,
        }
    }

    /// Set the world-space position
    pub fn with_position(mut self, world_position: Vec3) -> Self {
        self.world_position = world_position;
        self
    }

    /// Set the world-space normal
    pub fn with_normal(mut self, world_normal: Vec3) -> Self {
        self.world_normal = world_normal;
        self
    }

    /// Set the lighting multiplier for the base pass
    pub fn with_lighting(mut self, lighting: Vec3) -> Self {
        self.lighting = Some(lighting);
        self
    }

    /// Set the renderer time
    pub fn with_time(mut self, time: i32) -> Self {
        self.time = time;
        self
    }

    /// Set the sky angle for a distant pixel, stored in `world_position.x`
    pub fn with_theta(mut self, theta: f64) -> Self {
        self.world_position.x = theta;
        self
    }

    /// Set the sky angle from the view direction of a distant pixel
    pub fn with_view_direction(self, direction: &Vec3) -> Self {
        self.with_theta(utils::distant_theta(direction))
    }

    /// Reinterpret these inputs for a distant material
    ///
    /// Distant pixels have no depth or normal; the angle travels in the
    /// position's first component.
    pub fn distant(&self) -> DistantInputs {
        DistantInputs {
            tex_color: self.tex_color,
            tex_coord: self.tex_coord,
            theta: self.world_position.x,
            time: self.time,
        }
    }
}

/// Inputs for a sky/background pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistantInputs {
    /// Interpolated texture color
    pub tex_color: Vec3,
    /// Texture coordinate in [0, 1] x [0, 1]
    pub tex_coord: Vec2,
    /// Horizontal view angle in radians
    pub theta: f64,
    /// Renderer time, for animated shaders
    pub time: i32,
}

impl DistantInputs {
    /// Create distant inputs
    pub fn new(tex_color: Vec3, tex_coord: Vec2, theta: f64, time: i32) -> Self {
        Self {
            tex_color,
            tex_coord,
            theta,
            time,
        }
    }
}
