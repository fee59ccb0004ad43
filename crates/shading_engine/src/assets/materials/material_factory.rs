//! Unified material creation API
//!
//! MaterialFactory provides a single interface for creating materials:
//! - Named constructors, one per material domain
//! - Preset materials for common use cases

use crate::foundation::math::{constants, Vec3};
use crate::render::{ColorShader, DistantShader, Material, OpacityShader};

use super::presets;

/// Unified factory for material creation
pub struct MaterialFactory;

impl MaterialFactory {
    /// Create an unlit material driven by its emission shader
    pub fn unlit(emission: Option<ColorShader>) -> Material {
        Material::unlit(emission)
    }

    /// Create a lit material
    ///
    /// # Arguments
    /// * `emission` - Optional glow drawn over the lit surface
    /// * `base` - Albedo response; without it the surface draws opaque black
    pub fn lit(emission: Option<ColorShader>, base: Option<ColorShader>) -> Material {
        Material::lit(emission, base)
    }

    /// Create a transparent material
    ///
    /// # Arguments
    /// * `emission` - Optional glow drawn over the surface
    /// * `base` - Albedo response
    /// * `opacity` - Optional alpha; without it the surface is opaque
    pub fn transparent(
        emission: Option<ColorShader>,
        base: Option<ColorShader>,
        opacity: Option<OpacityShader>,
    ) -> Material {
        Material::transparent(emission, base, opacity)
    }

    /// Create a distant (sky/background) material
    pub fn distant(distant: Option<DistantShader>) -> Material {
        Material::distant(distant)
    }

    /// Create material from preset
    ///
    /// Available presets:
    /// - "textured" - Lit surface showing its texture
    /// - "greyscale" - Lit surface with the texture desaturated
    /// - "blinking" - Unlit texture that switches on and off
    /// - "lava" - Textured surface with a pulsing over-bright glow
    /// - "glass" - Textured transparent surface
    /// - "sky" - Gradient sky with sun glare
    ///
    /// # Arguments
    /// * `preset_name` - Name of the preset
    ///
    /// # Returns
    /// Material with preset configuration, or None if preset doesn't exist
    pub fn from_preset(preset_name: &str) -> Option<Material> {
        let material = match preset_name {
            "textured" => Self::lit(None, Some(presets::texture())),
            "greyscale" => Self::lit(None, Some(presets::greyscale())),
            "blinking" => Self::unlit(Some(presets::blink(500))),
            "lava" => Self::lit(
                Some(presets::pulse_glow(Vec3::new(1.0, 0.35, 0.05), 3.0, 2000)),
                Some(presets::texture()),
            ),
            "glass" => Self::transparent(
                None,
                Some(presets::texture()),
                Some(presets::constant_opacity(0.35)),
            ),
            "sky" => Self::distant(Some(presets::sun_glare(
                presets::sky_gradient(Vec3::new(0.85, 0.75, 0.6), Vec3::new(0.2, 0.35, 0.7)),
                constants::PI * 0.5,
                Vec3::new(1.0, 0.9, 0.7),
                4.0,
            ))),
            _ => {
                log::warn!("Unknown material preset '{}'", preset_name);
                return None;
            }
        };

        Some(material.with_name(preset_name))
    }

    /// List all available preset names
    pub fn list_presets() -> Vec<&'static str> {
        vec![
            "textured",
            "greyscale",
            "blinking",
            "lava",
            "glass",
            "sky",
        ]
    }
}
