//! Material system for the shading pipeline
//!
//! A material is a domain plus the shader slots that domain reads. Each
//! domain is its own variant, so a slot the domain would ignore cannot be
//! set in the first place.
//!
//! # Material Domains
//!
//! | Domain | emission | base | opacity | distant |
//! |---|---|---|---|---|
//! | Unlit | used | - | - | - |
//! | Lit | optional | used | - | - |
//! | Transparent | optional | used | optional | - |
//! | Distant | - | - | - | used |
//!
//! An empty slot is not an error: an absent emission shader contributes
//! nothing, an absent base shader draws opaque black, and an absent opacity
//! shader leaves the surface opaque.

pub mod material_type;

pub use material_type::*;

use std::sync::Arc;

use crate::foundation::math::Vec3;
use crate::render::{DistantInputs, PixelInputs};

/// Color shader: per-pixel inputs to an unbounded linear RGB color
pub type ColorShader = Arc<dyn Fn(&PixelInputs) -> Vec3 + Send + Sync>;

/// Opacity shader: per-pixel inputs to an alpha in [0, inf)
pub type OpacityShader = Arc<dyn Fn(&PixelInputs) -> f64 + Send + Sync>;

/// Distant shader: sky inputs to an unbounded linear RGB color
pub type DistantShader = Arc<dyn Fn(&DistantInputs) -> Vec3 + Send + Sync>;

/// Wrap a closure as a [`ColorShader`]
pub fn shader<F>(f: F) -> ColorShader
where
    F: Fn(&PixelInputs) -> Vec3 + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as an [`OpacityShader`]
pub fn opacity_shader<F>(f: F) -> OpacityShader
where
    F: Fn(&PixelInputs) -> f64 + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`DistantShader`]
pub fn distant_shader<F>(f: F) -> DistantShader
where
    F: Fn(&DistantInputs) -> Vec3 + Send + Sync + 'static,
{
    Arc::new(f)
}
