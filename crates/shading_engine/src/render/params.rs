//! Render params and output selection
//!
//! The renderer keeps its post-processing switches as a bitmask. When bloom
//! runs, the framebuffer has to hold the emissive layer apart from the base
//! layer; otherwise it stores finished screen pixels.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::render::{shaded_pixel, shaded_pixel_screen, Material, PixelInputs};

bitflags! {
    /// Render params masks
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct RenderParams: u32 {
        /// Post-processing stage enabled
        const POST_PROCESSING = 0b1;
        /// Bloom pass enabled (only runs as part of post-processing)
        const BLOOM = 0b10;
    }
}

/// Pixel form a framebuffer stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelOutput {
    /// `0x00RRGGBB` screen pixels
    Screen,
    /// Base and emissive halves packed into 64 bits
    Combined,
}

impl RenderParams {
    /// The pixel form these params call for
    pub fn output(self) -> PixelOutput {
        if self.contains(RenderParams::POST_PROCESSING | RenderParams::BLOOM) {
            PixelOutput::Combined
        } else {
            PixelOutput::Screen
        }
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        RenderParams::empty()
    }
}

/// Evaluate a pixel in the form the render params call for
///
/// Screen pixels are zero-extended to 64 bits so both forms share one
/// framebuffer element type.
pub fn shade_pixel(material: &Material, params: RenderParams, inputs: &PixelInputs) -> u64 {
    match params.output() {
        PixelOutput::Screen => u64::from(shaded_pixel_screen(material, inputs).bits()),
        PixelOutput::Combined => shaded_pixel(material, inputs).to_bits(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Vec2, Vec3};
    use crate::render::shader;

    #[test]
    fn test_output_selection() {
        assert_eq!(RenderParams::empty().output(), PixelOutput::Screen);
        assert_eq!(RenderParams::POST_PROCESSING.output(), PixelOutput::Screen);
        assert_eq!(RenderParams::BLOOM.output(), PixelOutput::Screen);
        assert_eq!(
            (RenderParams::POST_PROCESSING | RenderParams::BLOOM).output(),
            PixelOutput::Combined
        );
    }

    #[test]
    fn test_masks_match_renderer_bits() {
        assert_eq!(RenderParams::POST_PROCESSING.bits(), 0b1);
        assert_eq!(RenderParams::BLOOM.bits(), 0b10);
    }

    #[test]
    fn test_shade_pixel_follows_output() {
        let material = Material::lit(
            Some(shader(|_| Vec3::new(0.0, 0.0, 1.0))),
            Some(shader(|_| Vec3::new(1.0, 0.0, 0.0))),
        );
        let inputs = PixelInputs::new(Vec3::zeros(), Vec2::zeros());

        let screen = shade_pixel(&material, RenderParams::empty(), &inputs);
        assert_eq!(screen, 0x00FF_00FF);

        let combined = shade_pixel(&material, RenderParams::all(), &inputs);
        assert_eq!(combined, 0xFFFF_0000_FF00_00FF);
    }
}
