//! Asset-side material creation

pub mod materials;

pub use materials::{MaterialFactory, presets};
