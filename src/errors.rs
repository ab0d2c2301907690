//! Error types with rich diagnostics using miette
//!
//! Geometry generation itself never fails. The only fallible surface is
//! turning raw adjustment guide formulas into numbers.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (the guide name, e.g. "adj1")
    pub name: String,
    /// The full formula text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

/// Errors raised while reading an adjustment guide formula such as `val 50000`.
#[derive(Error, Diagnostic, Debug)]
pub enum GuideError {
    #[error("empty guide formula")]
    #[diagnostic(
        code(prstgeom::guide::empty),
        help("adjustment guides are written as `val <integer>`")
    )]
    Empty {
        #[source_code]
        src: NamedSource<String>,
        #[label("nothing here")]
        span: SourceSpan,
    },

    #[error("unsupported guide operator: {operator}")]
    #[diagnostic(
        code(prstgeom::guide::unsupported_operator),
        help("only `val` is accepted for adjustment values")
    )]
    UnsupportedOperator {
        operator: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `val`")]
        span: SourceSpan,
    },

    #[error("missing operand")]
    #[diagnostic(code(prstgeom::guide::missing_operand))]
    MissingOperand {
        #[source_code]
        src: NamedSource<String>,
        #[label("`val` needs a number after it")]
        span: SourceSpan,
    },

    #[error("invalid number: {text}")]
    #[diagnostic(code(prstgeom::guide::invalid_number))]
    InvalidNumber {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a finite number")]
        span: SourceSpan,
    },

    #[error("unexpected trailing input")]
    #[diagnostic(code(prstgeom::guide::trailing_input))]
    TrailingInput {
        #[source_code]
        src: NamedSource<String>,
        #[label("remove this")]
        span: SourceSpan,
    },
}
