//! # Shading Engine
//!
//! Per-pixel material shading for a software-rasterized pseudo-3D renderer.
//!
//! ## Features
//!
//! - **Material Domains**: Unlit, Lit, Transparent and Distant (sky) materials
//! - **Programmable Shaders**: emission, base, opacity and distant shader slots
//! - **HDR-safe Packing**: amplitude factoring keeps over-bright hues intact
//! - **Two Output Forms**: 32-bit screen pixels and base+emissive pairs for bloom
//! - **Thread-safe**: materials are immutable and shareable across render threads
//!
//! ## Quick Start
//!
//! ```rust
//! use shading_engine::prelude::*;
//!
//! let material = MaterialFactory::lit(
//!     Some(shader(|input: &PixelInputs| input.tex_color * 2.0)),
//!     Some(shader(|input: &PixelInputs| input.tex_color)),
//! );
//!
//! let inputs = PixelInputs::new(Vec3::new(0.5, 0.25, 0.1), Vec2::new(0.5, 0.5));
//! let pixel = shaded_pixel_screen(&material, &inputs);
//! assert_eq!(pixel.channels(), (255, 127, 51));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::math::{Vec2, Vec3, Vec4},
        config::{Config, ConfigError, ShadingConfig},
        assets::materials::{MaterialFactory, presets},
        render::{
            Material, MaterialDomain, PixelInputs, DistantInputs,
            ShadedColor, PackedColor, CombinedPixel,
            RenderParams, PixelOutput, ShadingError,
            shader, opacity_shader, distant_shader,
            shaded_pixel_emission, shaded_pixel_base, shaded_pixel_opacity,
            shaded_pixel_distant, shaded_pixel, shaded_pixel_screen,
            shaded_pixel_screen_color, shade_pixel,
        },
    };
}
