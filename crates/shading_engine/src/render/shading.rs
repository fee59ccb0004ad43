//! Per-pixel color evaluation
//!
//! Entry points the rasterizer calls once per covered pixel. All of them are
//! pure functions of the material and the inputs; nothing here allocates,
//! locks or logs.

use crate::foundation::math::Vec3;
use crate::render::{
    CombinedPixel, DistantInputs, Material, MaterialDomain, PackedColor, PixelInputs,
    ShadedColor,
};

/// Evaluate the emission shader, amplitude factored
///
/// Without an emission shader the result is black with unit intensity.
pub fn shaded_pixel_emission(material: &Material, inputs: &PixelInputs) -> ShadedColor {
    material
        .emission_shader()
        .map_or_else(ShadedColor::neutral, |shade| {
            ShadedColor::amplitude_factored(shade(inputs))
        })
}

/// Evaluate the base shader, lit and clamped, with alpha from the opacity pass
///
/// The lighting multiplier can only darken: each of its channels is capped
/// at 1.0 before it is applied. Without a base shader the result is opaque
/// black.
pub fn shaded_pixel_base(material: &Material, inputs: &PixelInputs) -> ShadedColor {
    let Some(shade) = material.base_shader() else {
        return ShadedColor::neutral();
    };

    let mut color = shade(inputs);
    if let Some(lighting) = &inputs.lighting {
        color.component_mul_assign(&lighting.map(|channel| channel.min(1.0)));
    }

    ShadedColor::new(
        color.map(|channel| channel.min(1.0)),
        shaded_pixel_opacity(material, inputs),
    )
}

/// Evaluate the opacity shader, capped at 1.0
///
/// Only transparent materials carry one; everything else is opaque.
pub fn shaded_pixel_opacity(material: &Material, inputs: &PixelInputs) -> f64 {
    material
        .opacity_shader()
        .map_or(1.0, |shade| shade(inputs).min(1.0))
}

/// Evaluate the distant shader, amplitude factored
///
/// Without a distant shader the result is black with unit intensity.
pub fn shaded_pixel_distant(material: &Material, inputs: &DistantInputs) -> ShadedColor {
    material
        .distant_shader()
        .map_or_else(ShadedColor::neutral, |shade| {
            ShadedColor::amplitude_factored(shade(inputs))
        })
}

/// Evaluate the base and emissive layers of a pixel for post-processing
///
/// The emissive half holds the emission result, or the distant result for
/// sky materials. Unlit and distant materials leave the base half empty.
pub fn shaded_pixel(material: &Material, inputs: &PixelInputs) -> CombinedPixel {
    let emissive = match material.domain() {
        MaterialDomain::Distant => shaded_pixel_distant(material, &inputs.distant()),
        _ => shaded_pixel_emission(material, inputs),
    };

    let base = if material.domain().has_base_layer() {
        shaded_pixel_base(material, inputs).to_packed_alpha()
    } else {
        PackedColor::BLACK
    };

    CombinedPixel::new(base, emissive.to_packed_intensity())
}

/// Evaluate the final display color of a pixel at full precision
///
/// Lit and transparent materials blend emission over base with a per-channel
/// `max`, so glow can brighten a surface but never darken it. The fourth
/// channel is the base pass alpha; unlit and distant results are opaque.
pub fn shaded_pixel_screen_color(material: &Material, inputs: &PixelInputs) -> ShadedColor {
    match material.domain() {
        MaterialDomain::Distant => {
            ShadedColor::new(shaded_pixel_distant(material, &inputs.distant()).rgb, 1.0)
        }
        MaterialDomain::Unlit => ShadedColor::new(shaded_pixel_emission(material, inputs).rgb, 1.0),
        MaterialDomain::Lit | MaterialDomain::Transparent => {
            let emission = shaded_pixel_emission(material, inputs);
            let base = shaded_pixel_base(material, inputs);
            let blended: Vec3 = emission
                .rgb
                .zip_map(&base.rgb, |e, b| e.max(b).min(1.0));
            ShadedColor::new(blended, base.alpha())
        }
    }
}

/// Evaluate the final screen pixel, `0x00RRGGBB` with no alpha
///
/// Compositing translucent pixels over the background is left to the
/// rasterizer.
pub fn shaded_pixel_screen(material: &Material, inputs: &PixelInputs) -> PackedColor {
    shaded_pixel_screen_color(material, inputs).to_screen()
}
