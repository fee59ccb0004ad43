//! Material type definitions and enums
//!
//! This module defines the material domains supported by the shading pipeline
//! and the material value a rasterizer evaluates per pixel.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ColorShader, DistantShader, OpacityShader};

/// How a material's color channels are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialDomain {
    /// Emission only, no lighting
    Unlit,
    /// Lit base color with optional emission
    Lit,
    /// Lit base color with optional emission and opacity
    Transparent,
    /// Sky/background, shaded by view angle
    Distant,
}

impl MaterialDomain {
    /// Whether materials of this domain produce a base layer
    pub fn has_base_layer(self) -> bool {
        matches!(self, MaterialDomain::Lit | MaterialDomain::Transparent)
    }
}

impl fmt::Display for MaterialDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaterialDomain::Unlit => "unlit",
            MaterialDomain::Lit => "lit",
            MaterialDomain::Transparent => "transparent",
            MaterialDomain::Distant => "distant",
        };
        f.write_str(name)
    }
}

/// Shader slots, one variant per domain
#[derive(Clone)]
pub enum MaterialShaders {
    /// Unlit material
    Unlit {
        /// Emission shader
        emission: Option<ColorShader>,
    },
    /// Lit material
    Lit {
        /// Emission shader
        emission: Option<ColorShader>,
        /// Base (albedo) shader
        base: Option<ColorShader>,
    },
    /// Transparent material
    Transparent {
        /// Emission shader
        emission: Option<ColorShader>,
        /// Base (albedo) shader
        base: Option<ColorShader>,
        /// Opacity shader
        opacity: Option<OpacityShader>,
    },
    /// Sky/background material
    Distant {
        /// Distant shader
        distant: Option<DistantShader>,
    },
}

impl MaterialShaders {
    /// The domain these slots belong to
    pub fn domain(&self) -> MaterialDomain {
        match self {
            MaterialShaders::Unlit { .. } => MaterialDomain::Unlit,
            MaterialShaders::Lit { .. } => MaterialDomain::Lit,
            MaterialShaders::Transparent { .. } => MaterialDomain::Transparent,
            MaterialShaders::Distant { .. } => MaterialDomain::Distant,
        }
    }
}

/// A material: a domain, its shader slots and an optional debug name
///
/// Immutable once built. Shaders are shared, so cloning is cheap and a
/// material can be evaluated from any number of threads at once.
#[derive(Clone)]
pub struct Material {
    /// Shader slots (and with them the domain)
    shaders: MaterialShaders,
    /// Optional name for debugging
    pub name: Option<String>,
}

impl Material {
    fn from_shaders(shaders: MaterialShaders) -> Self {
        let material = Self { shaders, name: None };
        log::debug!("Created material {:?}", material);
        material
    }

    /// Create an unlit material
    pub fn unlit(emission: Option<ColorShader>) -> Self {
        Self::from_shaders(MaterialShaders::Unlit { emission })
    }

    /// Create a lit material
    pub fn lit(emission: Option<ColorShader>, base: Option<ColorShader>) -> Self {
        Self::from_shaders(MaterialShaders::Lit { emission, base })
    }

    /// Create a transparent material
    pub fn transparent(
        emission: Option<ColorShader>,
        base: Option<ColorShader>,
        opacity: Option<OpacityShader>,
    ) -> Self {
        Self::from_shaders(MaterialShaders::Transparent { emission, base, opacity })
    }

    /// Create a distant (sky/background) material
    pub fn distant(distant: Option<DistantShader>) -> Self {
        Self::from_shaders(MaterialShaders::Distant { distant })
    }

    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The material's domain
    pub fn domain(&self) -> MaterialDomain {
        self.shaders.domain()
    }

    /// The shader slots
    pub fn shaders(&self) -> &MaterialShaders {
        &self.shaders
    }

    /// Emission shader, if the domain reads one and it is set
    pub fn emission_shader(&self) -> Option<&ColorShader> {
        match &self.shaders {
            MaterialShaders::Unlit { emission }
            | MaterialShaders::Lit { emission, .. }
            | MaterialShaders::Transparent { emission, .. } => emission.as_ref(),
            MaterialShaders::Distant { .. } => None,
        }
    }

    /// Base shader, if the domain reads one and it is set
    pub fn base_shader(&self) -> Option<&ColorShader> {
        match &self.shaders {
            MaterialShaders::Lit { base, .. } | MaterialShaders::Transparent { base, .. } => {
                base.as_ref()
            }
            MaterialShaders::Unlit { .. } | MaterialShaders::Distant { .. } => None,
        }
    }

    /// Opacity shader, only ever present on transparent materials
    pub fn opacity_shader(&self) -> Option<&OpacityShader> {
        match &self.shaders {
            MaterialShaders::Transparent { opacity, .. } => opacity.as_ref(),
            _ => None,
        }
    }

    /// Distant shader, only ever present on distant materials
    pub fn distant_shader(&self) -> Option<&DistantShader> {
        match &self.shaders {
            MaterialShaders::Distant { distant } => distant.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Material")
            .field("name", &self.name)
            .field("domain", &self.domain())
            .field("emission", &self.emission_shader().is_some())
            .field("base", &self.base_shader().is_some())
            .field("opacity", &self.opacity_shader().is_some())
            .field("distant", &self.distant_shader().is_some())
            .finish()
    }
}
