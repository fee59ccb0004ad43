//! Rendering module
//!
//! Per-pixel shading for the software rasterizer: materials and their shader
//! slots, the evaluation passes, and the packed pixel formats they produce.
//!
//! # Architecture
//!
//! The rasterizer resolves texture and world attributes for a covered pixel,
//! then calls one entry point:
//! - [`shaded_pixel_screen`]: finished `0x00RRGGBB` pixel
//! - [`shaded_pixel`]: base and emissive layers for the bloom pass
//! - [`shade_pixel`]: whichever of the two the [`RenderParams`] ask for
//!
//! The single-pass entry points ([`shaded_pixel_emission`],
//! [`shaded_pixel_base`], [`shaded_pixel_opacity`], [`shaded_pixel_distant`])
//! are public for renderers that composite layers themselves.

pub mod material;
pub mod color;
pub mod inputs;
pub mod shading;
pub mod params;
pub mod span;
pub mod error;

#[cfg(test)]
mod tests;

pub use material::{
    Material, MaterialDomain, MaterialShaders,
    ColorShader, OpacityShader, DistantShader,
    shader, opacity_shader, distant_shader,
};
pub use color::{ShadedColor, PackedColor, CombinedPixel};
pub use inputs::{PixelInputs, DistantInputs};
pub use shading::{
    shaded_pixel_emission, shaded_pixel_base, shaded_pixel_opacity, shaded_pixel_distant,
    shaded_pixel, shaded_pixel_screen, shaded_pixel_screen_color,
};
pub use params::{RenderParams, PixelOutput, shade_pixel};
pub use span::{shade_span, shade_span_combined, shade_span_with_params, framebuffer_bytes};
pub use error::ShadingError;
