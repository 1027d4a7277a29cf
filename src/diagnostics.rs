//! The error-reporting channel (`spec.md` §4.4, §7): a non-fatal callback
//! surface for unsupported syntax. The engine always keeps producing output;
//! diagnostics only ever inform the caller.

#[cfg(feature = "serde")]
use serde::Serialize;

/// The unsupported-construct taxonomy from `spec.md` §7.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, schemars::JsonSchema))]
pub enum UnsupportedSyntax {
    #[error("`import ... = require(...)` is not supported")]
    ImportEquals,

    #[error("`export =` is not supported by the target module system")]
    ExportEquals,

    /// Carries the keyword (`"enum"`, `"namespace"`, or `"module"`) for the
    /// diagnostic message; the construct is left in the output verbatim.
    #[error("non-`declare` `{0}` has no runtime erasure and is left intact")]
    NonAmbientContainer(&'static str),

    #[error("legacy type assertions (`<T>expr`) are not supported")]
    LegacyTypeAssertion,

    #[error("parameter properties cannot be erased without rewriting the constructor body")]
    ParameterProperty,
}

/// A reported unsupported construct, with the byte range of the offending
/// node so a host can underline it in the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, schemars::JsonSchema))]
pub struct Diagnostic {
    pub kind: UnsupportedSyntax,
    pub start: u32,
    pub end: u32,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}: {}", self.start, self.end, self.kind)
    }
}
