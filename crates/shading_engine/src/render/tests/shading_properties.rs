//! Property tests for amplitude factoring, domain dispatch and packing
//!
//! Sweeps a grid of shader outputs through the public entry points and checks
//! the invariants every rasterizer relies on.

use crate::foundation::math::{Vec2, Vec3};
use crate::render::{
    distant_shader, opacity_shader, shaded_pixel, shaded_pixel_base, shaded_pixel_distant,
    shaded_pixel_emission, shaded_pixel_opacity, shaded_pixel_screen, shader, Material,
    PixelInputs,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    /// Shader outputs covering in-range, boundary and over-bright colors
    fn sample_colors() -> Vec<Vec3> {
        let levels = [0.0, 0.1, 0.5, 1.0, 1.5, 7.25];
        let mut colors = Vec::new();
        for &r in &levels {
            for &g in &levels {
                for &b in &levels {
                    colors.push(Vec3::new(r, g, b));
                }
            }
        }
        colors
    }

    /// Emission shader that reads its color out of the texture input
    fn passthrough_emission() -> Material {
        Material::unlit(Some(shader(|input| input.tex_color)))
    }

    fn inputs_for(color: Vec3) -> PixelInputs {
        PixelInputs::new(color, Vec2::new(0.5, 0.5))
    }

    #[test]
    fn test_in_range_emission_is_unchanged() {
        let material = passthrough_emission();
        for color in sample_colors().into_iter().filter(|c| c.max() <= 1.0) {
            let emission = shaded_pixel_emission(&material, &inputs_for(color));
            assert_eq!(emission.rgb, color);
            assert_eq!(emission.intensity(), 1.0);
        }
    }

    #[test]
    fn test_over_bright_emission_round_trips() {
        let material = passthrough_emission();
        for color in sample_colors().into_iter().filter(|c| c.max() > 1.0) {
            let emission = shaded_pixel_emission(&material, &inputs_for(color));

            assert_eq!(emission.intensity(), color.max());
            assert!(emission.rgb.iter().all(|&c| c <= 1.0), "{:?} not normalized", emission.rgb);
            assert_relative_eq!(emission.rgb, color / color.max(), epsilon = EPSILON);
            assert_relative_eq!(emission.reconstructed(), color, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_distant_factoring_matches_emission() {
        let sky = Material::distant(Some(distant_shader(|input| input.tex_color)));
        let material = passthrough_emission();
        for color in sample_colors() {
            let inputs = inputs_for(color);
            assert_eq!(
                shaded_pixel_distant(&sky, &inputs.distant()),
                shaded_pixel_emission(&material, &inputs)
            );
        }
    }

    #[test]
    fn test_lit_without_base_is_opaque_black_for_any_input() {
        let material = Material::lit(Some(shader(|input| input.tex_color)), None);
        for color in sample_colors() {
            let inputs = inputs_for(color)
                .with_lighting(color)
                .with_normal(Vec3::new(color.z, color.x, color.y));
            let base = shaded_pixel_base(&material, &inputs);
            assert_eq!(base.rgb, Vec3::zeros());
            assert_eq!(base.alpha(), 1.0);
        }
    }

    #[test]
    fn test_opacity_clamps_two_to_one() {
        let material = Material::transparent(None, None, Some(opacity_shader(|_| 2.0)));
        assert_eq!(shaded_pixel_opacity(&material, &inputs_for(Vec3::zeros())), 1.0);
    }

    #[test]
    fn test_unlit_screen_ignores_normal() {
        let material = Material::unlit(Some(shader(|input| {
            input.tex_color * (1.0 + f64::from(input.time) * 0.01)
        })));
        let normals = [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.577, 0.577, 0.577),
        ];

        for color in sample_colors() {
            let base_inputs = inputs_for(color).with_time(25);
            let expected = shaded_pixel_screen(&material, &base_inputs);
            for normal in &normals {
                assert_eq!(shaded_pixel_screen(&material, &base_inputs.with_normal(*normal)), expected);
            }
        }
    }

    #[test]
    fn test_lit_screen_is_lighten_blend() {
        let material = Material::lit(
            Some(shader(|_| Vec3::new(0.2, 0.9, 0.1))),
            Some(shader(|_| Vec3::new(0.5, 0.5, 0.5))),
        );
        let pixel = shaded_pixel_screen(&material, &inputs_for(Vec3::zeros()));

        let expected = (
            (0.5f64 * 255.0).floor() as u8,
            (0.9f64 * 255.0).floor() as u8,
            (0.5f64 * 255.0).floor() as u8,
        );
        assert_eq!(pixel.channels(), expected);
    }

    #[test]
    fn test_glow_never_darkens_base() {
        let material = Material::lit(
            Some(shader(|input| input.tex_color)),
            Some(shader(|_| Vec3::new(0.4, 0.4, 0.4))),
        );
        for color in sample_colors() {
            let (r, g, b) = shaded_pixel_screen(&material, &inputs_for(color)).channels();
            assert!(r >= 102 && g >= 102 && b >= 102, "{:?} darkened to {:?}", color, (r, g, b));
        }
    }

    #[test]
    fn test_distant_combined_has_zero_high_bits() {
        let material = Material::distant(Some(distant_shader(|input| input.tex_color * 3.0)));
        for color in sample_colors() {
            let bits = shaded_pixel(&material, &inputs_for(color)).to_bits();
            assert_eq!(bits >> 32, 0);
        }
    }
}
