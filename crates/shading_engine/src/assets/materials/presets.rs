//! Preset shaders for common effects
//!
//! Each function returns a ready-to-attach shader. They modify the render
//! color without touching the underlying texture.

use crate::foundation::math::{constants, Vec3};
use crate::render::{distant_shader, opacity_shader, shader, ColorShader, DistantShader, OpacityShader};

/// Rec. 601 luma weights
const LUMA: [f64; 3] = [0.299, 0.587, 0.114];

/// Pass the texture color through unchanged
pub fn texture() -> ColorShader {
    shader(|input| input.tex_color)
}

/// Replace the texture color with its luma
pub fn greyscale() -> ColorShader {
    shader(|input| {
        let luma = Vec3::from(LUMA).dot(&input.tex_color);
        Vec3::repeat(luma)
    })
}

/// Show the texture for `period` time units, then black for `period`
pub fn blink(period: i32) -> ColorShader {
    let period = period.max(1);
    shader(move |input| {
        if input.time.div_euclid(period) % 2 == 0 {
            input.tex_color
        } else {
            Vec3::zeros()
        }
    })
}

/// Tint the texture and pulse its brightness between 1x and `peak`
///
/// Peaks above 1.0 are over-bright on purpose; the emission pass factors the
/// excess into intensity.
pub fn pulse_glow(tint: Vec3, peak: f64, period: i32) -> ColorShader {
    let period = f64::from(period.max(1));
    shader(move |input| {
        let phase = constants::TAU * f64::from(input.time) / period;
        let strength = 1.0 + (peak - 1.0) * 0.5 * (1.0 + phase.sin());
        input.tex_color.component_mul(&tint) * strength
    })
}

/// Constant opacity
pub fn constant_opacity(alpha: f64) -> OpacityShader {
    opacity_shader(move |_| alpha)
}

/// Vertical sky gradient from `horizon` (v = 1) to `zenith` (v = 0)
pub fn sky_gradient(horizon: Vec3, zenith: Vec3) -> DistantShader {
    distant_shader(move |input| zenith.lerp(&horizon, input.tex_coord.y.clamp(0.0, 1.0)))
}

/// Add a sun glare around `sun_theta` on top of another distant shader
///
/// The glare peaks at `strength` times `sun_color` when looking straight at
/// the sun and fades out a quarter turn away.
pub fn sun_glare(sky: DistantShader, sun_theta: f64, sun_color: Vec3, strength: f64) -> DistantShader {
    distant_shader(move |input| {
        let facing = (input.theta - sun_theta).cos().max(0.0);
        sky(input) + sun_color * (strength * facing.powi(8))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::render::{DistantInputs, PixelInputs};
    use approx::assert_relative_eq;

    fn pixel(color: Vec3, time: i32) -> PixelInputs {
        PixelInputs::new(color, Vec2::new(0.5, 0.5)).with_time(time)
    }

    #[test]
    fn test_greyscale_weights() {
        let grey = greyscale()(&pixel(Vec3::new(1.0, 0.0, 0.0), 0));
        assert_relative_eq!(grey, Vec3::repeat(0.299));

        let white = greyscale()(&pixel(Vec3::new(1.0, 1.0, 1.0), 0));
        assert_relative_eq!(white, Vec3::repeat(1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_blink_alternates() {
        let shade = blink(100);
        let color = Vec3::new(0.3, 0.6, 0.9);
        assert_eq!(shade(&pixel(color, 0)), color);
        assert_eq!(shade(&pixel(color, 99)), color);
        assert_eq!(shade(&pixel(color, 100)), Vec3::zeros());
        assert_eq!(shade(&pixel(color, 200)), color);
        assert_eq!(shade(&pixel(color, -1)), Vec3::zeros());
    }

    #[test]
    fn test_blink_zero_period_does_not_panic() {
        let shade = blink(0);
        let _ = shade(&pixel(Vec3::zeros(), 7));
    }

    #[test]
    fn test_pulse_glow_range() {
        let shade = pulse_glow(Vec3::new(1.0, 0.5, 0.0), 3.0, 400);
        let white = Vec3::new(1.0, 1.0, 1.0);

        // sin = 1 a quarter period in, sin = -1 three quarters in
        assert_relative_eq!(shade(&pixel(white, 100)), Vec3::new(3.0, 1.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(shade(&pixel(white, 300)), Vec3::new(1.0, 0.5, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_constant_opacity() {
        assert_eq!(constant_opacity(0.35)(&pixel(Vec3::zeros(), 0)), 0.35);
    }

    #[test]
    fn test_sky_gradient_ends() {
        let horizon = Vec3::new(1.0, 0.8, 0.6);
        let zenith = Vec3::new(0.1, 0.2, 0.5);
        let shade = sky_gradient(horizon, zenith);

        let top = DistantInputs::new(Vec3::zeros(), Vec2::new(0.0, 0.0), 0.0, 0);
        let bottom = DistantInputs::new(Vec3::zeros(), Vec2::new(0.0, 1.0), 0.0, 0);
        assert_relative_eq!(shade(&top), zenith);
        assert_relative_eq!(shade(&bottom), horizon);
    }

    #[test]
    fn test_sun_glare_peaks_at_sun() {
        let sky = sky_gradient(Vec3::zeros(), Vec3::zeros());
        let shade = sun_glare(sky, 1.0, Vec3::new(1.0, 1.0, 0.5), 4.0);

        let at_sun = DistantInputs::new(Vec3::zeros(), Vec2::zeros(), 1.0, 0);
        assert_relative_eq!(shade(&at_sun), Vec3::new(4.0, 4.0, 2.0), epsilon = 1e-12);

        let behind = DistantInputs::new(Vec3::zeros(), Vec2::zeros(), 1.0 + constants::PI, 0);
        assert_relative_eq!(shade(&behind), Vec3::zeros());
    }
}
