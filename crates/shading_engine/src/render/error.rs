//! Shading errors

/// Errors from batch shading
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShadingError {
    /// Input and output spans differ in length
    #[error("Span length mismatch: {inputs} inputs for {output} output pixels")]
    SpanLengthMismatch {
        /// Number of pixel inputs
        inputs: usize,
        /// Number of output pixels
        output: usize,
    },
}
