//! Span shading
//!
//! Batch entry points for a rasterizer worker: shade one span of pixels into
//! a slice of the framebuffer. Spans can be split across threads freely since
//! materials are immutable.

use crate::render::{
    shade_pixel, shaded_pixel, shaded_pixel_screen, Material, PixelInputs, RenderParams,
    ShadingError,
};

fn check_lengths(inputs: usize, output: usize) -> Result<(), ShadingError> {
    if inputs == output {
        Ok(())
    } else {
        Err(ShadingError::SpanLengthMismatch { inputs, output })
    }
}

/// Shade a span into screen pixels
pub fn shade_span(
    material: &Material,
    inputs: &[PixelInputs],
    output: &mut [u32],
) -> Result<(), ShadingError> {
    check_lengths(inputs.len(), output.len())?;
    for (pixel, input) in output.iter_mut().zip(inputs) {
        *pixel = shaded_pixel_screen(material, input).bits();
    }
    Ok(())
}

/// Shade a span into combined base+emissive pixels
pub fn shade_span_combined(
    material: &Material,
    inputs: &[PixelInputs],
    output: &mut [u64],
) -> Result<(), ShadingError> {
    check_lengths(inputs.len(), output.len())?;
    for (pixel, input) in output.iter_mut().zip(inputs) {
        *pixel = shaded_pixel(material, input).to_bits();
    }
    Ok(())
}

/// Shade a span in whichever form the render params call for
pub fn shade_span_with_params(
    material: &Material,
    params: RenderParams,
    inputs: &[PixelInputs],
    output: &mut [u64],
) -> Result<(), ShadingError> {
    check_lengths(inputs.len(), output.len())?;
    for (pixel, input) in output.iter_mut().zip(inputs) {
        *pixel = shade_pixel(material, params, input);
    }
    Ok(())
}

/// View a screen framebuffer as raw bytes for upload or blitting
pub fn framebuffer_bytes(pixels: &[u32]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}
