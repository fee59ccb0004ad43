//! Material creation subsystem
//!
//! Named per-domain factories plus a library of preset shaders for common
//! effects (blinking, greyscaling, glow, skies).

pub mod presets;
pub mod material_factory;

pub use material_factory::MaterialFactory;
