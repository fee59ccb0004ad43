//! Cross-module tests for the shading pipeline

mod shading_properties;
