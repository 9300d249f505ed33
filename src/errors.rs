//! Error types with diagnostics using miette
//!
//! The geometry functions themselves are total and never fail; these errors
//! come from the validating constructors, the path data parser and the host
//! adapter.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised while validating shape parameters
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("invalid semi-axis `{axis}`")]
    #[diagnostic(code(squircley::shape::invalid_axis), help("semi-axes must be finite and greater than zero"))]
    InvalidAxis {
        axis: &'static str,
        source: NumericError,
    },

    #[error("invalid exponent {value}")]
    #[diagnostic(code(squircley::shape::invalid_exponent), help("the exponent must lie within [0.5, 10]"))]
    InvalidExponent { value: f64, source: NumericError },

    #[error("invalid rotation")]
    #[diagnostic(code(squircley::shape::invalid_rotation))]
    InvalidRotation { source: NumericError },
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing SVG path data
#[derive(Error, Diagnostic, Debug)]
pub enum PathParseError {
    #[error("malformed path data: expected {expected}")]
    #[diagnostic(code(squircley::parse::syntax))]
    Syntax {
        expected: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number: {text}")]
    #[diagnostic(code(squircley::parse::invalid_number))]
    InvalidNumber {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a finite number")]
        span: SourceSpan,
    },
}

// ============================================================================
// Host Errors
// ============================================================================

/// Errors surfaced at the plugin message boundary
#[derive(Error, Diagnostic, Debug)]
pub enum HostError {
    #[error("curvature value is required for create-squircle")]
    #[diagnostic(code(squircley::host::missing_curvature))]
    MissingCurvature,

    #[error("curvature must be a number")]
    #[diagnostic(code(squircley::host::invalid_curvature))]
    InvalidCurvature { source: NumericError },

    #[error("host rejected the operation: {message}")]
    #[diagnostic(code(squircley::host::rejected))]
    Rejected { message: String },
}

impl HostError {
    /// Convenience for host implementations reporting a failed call.
    pub fn rejected(message: impl Into<String>) -> Self {
        HostError::Rejected {
            message: message.into(),
        }
    }
}
