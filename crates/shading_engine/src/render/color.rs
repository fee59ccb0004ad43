//! Shaded color values and packed pixel formats
//!
//! Shaders produce unbounded linear colors. Before anything is quantized the
//! pipeline brings every channel into [0, 1]:
//! - base colors are clamped
//! - emissive and distant colors are *amplitude factored*: an over-bright
//!   color is divided by its largest channel, and that channel is carried
//!   alongside as an intensity. The hue survives, and `rgb * intensity`
//!   gives the original color back.
//!
//! # Packed layouts
//!
//! ```text
//! screen pixel   0x00RRGGBB
//! packed half    0xLLRRGGBB   LL = alpha (base) or 1 / intensity (emissive)
//! combined       base half << 32 | emissive half
//! ```

use crate::foundation::math::{utils, Vec3};

/// A color plus a fourth channel whose meaning depends on the pass
///
/// For base and screen results `w` is alpha. For emissive and distant
/// results it is the intensity amplitude factored out of the color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedColor {
    /// Linear RGB
    pub rgb: Vec3,
    /// Alpha or intensity amplitude
    pub w: f64,
}

impl ShadedColor {
    /// Create a shaded color
    pub fn new(rgb: Vec3, w: f64) -> Self {
        Self { rgb, w }
    }

    /// Opaque black with unit intensity, the result of an absent shader
    pub fn neutral() -> Self {
        Self::new(Vec3::zeros(), 1.0)
    }

    /// Factor an unbounded color into a displayable color and an intensity
    ///
    /// Colors whose channels are all at most 1.0 pass through with unit
    /// intensity.
    pub fn amplitude_factored(raw: Vec3) -> Self {
        let amplitude = utils::max_component(&raw);
        if amplitude <= 1.0 {
            Self::new(raw, 1.0)
        } else {
            Self::new(raw / amplitude, amplitude)
        }
    }

    /// Alpha of a base or screen result
    pub fn alpha(&self) -> f64 {
        self.w
    }

    /// Intensity amplitude of an emissive or distant result
    pub fn intensity(&self) -> f64 {
        self.w
    }

    /// Undo amplitude factoring, giving the unbounded color back
    pub fn reconstructed(&self) -> Vec3 {
        self.rgb * self.w
    }

    /// Quantize to a screen pixel, dropping the fourth channel
    pub fn to_screen(&self) -> PackedColor {
        PackedColor::from_rgb(&self.rgb)
    }

    /// Quantize with `w` as an alpha lane
    pub fn to_packed_alpha(&self) -> PackedColor {
        PackedColor::from_rgb_lane(&self.rgb, self.w)
    }

    /// Quantize with `1 / w` as the lane, so unit intensity packs as 0xFF
    ///
    /// Intensities never drop below 1.0, which keeps the reciprocal in (0, 1].
    pub fn to_packed_intensity(&self) -> PackedColor {
        PackedColor::from_rgb_lane(&self.rgb, self.w.recip())
    }
}

impl Default for ShadedColor {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Quantize one normalized channel to 8 bits
///
/// `as` saturates, so values outside [0, 1] land on 0 or 255.
fn quantize(channel: f64) -> u32 {
    u32::from((channel * 255.0).floor() as u8)
}

/// A 32-bit packed pixel, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// Opaque black screen pixel
    pub const BLACK: Self = Self(0);

    /// Pack a normalized color as `0x00RRGGBB`
    pub fn from_rgb(rgb: &Vec3) -> Self {
        Self((quantize(rgb.x) << 16) | (quantize(rgb.y) << 8) | quantize(rgb.z))
    }

    /// Pack a normalized color plus a normalized top lane as `0xLLRRGGBB`
    pub fn from_rgb_lane(rgb: &Vec3, lane: f64) -> Self {
        Self((quantize(lane) << 24) | Self::from_rgb(rgb).0)
    }

    /// The raw packed value
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Red, green and blue bytes
    pub fn channels(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// The top lane byte (alpha or reciprocal intensity)
    pub fn lane(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// This pixel without its top lane
    pub fn without_lane(self) -> Self {
        Self(self.0 & 0x00FF_FFFF)
    }

    /// Normalized RGB, each channel `byte / 255`
    pub fn to_rgb(self) -> Vec3 {
        let (r, g, b) = self.channels();
        Vec3::new(f64::from(r), f64::from(g), f64::from(b)) / 255.0
    }

    /// Intensity amplitude encoded in the lane of an emissive half
    pub fn intensity(self) -> f64 {
        255.0 / f64::from(self.lane().max(1))
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

/// Base and emissive halves of a pixel, kept apart for post-processing
///
/// The bloom pass reads the emissive half on its own; the base half is zero
/// for unlit and distant materials. A zero base half does not mean the
/// material has no base layer: a transparent black surface with zero
/// opacity packs to zero too. Ask [`MaterialDomain::has_base_layer`] instead.
///
/// [`MaterialDomain::has_base_layer`]: crate::render::MaterialDomain::has_base_layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CombinedPixel {
    /// Packed base color with alpha lane
    pub base: PackedColor,
    /// Packed emissive or distant color with reciprocal intensity lane
    pub emissive: PackedColor,
}

impl CombinedPixel {
    /// Create a combined pixel
    pub fn new(base: PackedColor, emissive: PackedColor) -> Self {
        Self { base, emissive }
    }

    /// Serialize as `base << 32 | emissive`
    pub fn to_bits(self) -> u64 {
        (u64::from(self.base.0) << 32) | u64::from(self.emissive.0)
    }

    /// Split a serialized combined pixel
    pub fn from_bits(bits: u64) -> Self {
        Self {
            base: PackedColor((bits >> 32) as u32),
            emissive: PackedColor(bits as u32),
        }
    }
}

impl From<CombinedPixel> for u64 {
    fn from(pixel: CombinedPixel) -> Self {
        pixel.to_bits()
    }
}
