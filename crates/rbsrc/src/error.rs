use miette::Diagnostic;
use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while turning a node tree back into source text.
///
/// Rendering is all-or-nothing: any error aborts the whole call and no
/// partial text is returned.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum UnparseError {
    /// The input does not match any accepted node shape.
    #[error("Malformed tree: {0}")]
    MalformedTree(String),
    /// The requested version is not covered by any stratum.
    #[error("Unsupported dialect `{0}`")]
    UnsupportedDialect(String),
    /// The active stratum has no renderer for this kind, or declines it here.
    #[error("Unsupported construct `{0}`")]
    UnsupportedConstruct(SmolStr),
}

impl UnparseError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        UnparseError::MalformedTree(msg.into())
    }

    pub(crate) fn unsupported(kind: impl Into<SmolStr>) -> Self {
        UnparseError::UnsupportedConstruct(kind.into())
    }
}

impl From<serde_json::Error> for UnparseError {
    fn from(err: serde_json::Error) -> Self {
        UnparseError::MalformedTree(err.to_string())
    }
}

impl Diagnostic for UnparseError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let c = match self {
            UnparseError::MalformedTree(_) => "rbsrc::malformed_tree",
            UnparseError::UnsupportedDialect(_) => "rbsrc::unsupported_dialect",
            UnparseError::UnsupportedConstruct(_) => "rbsrc::unsupported_construct",
        };

        Some(Box::new(c))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let msg = match self {
            UnparseError::MalformedTree(_) => {
                "Nodes are accepted as {\"type\": ..., \"children\": [...]} documents or [\"TYPE\", [...]] arrays"
            }
            UnparseError::UnsupportedDialect(_) => "Supported versions range from 2.6.0 up to (but excluding) 4.0.0",
            UnparseError::UnsupportedConstruct(_) => {
                "This node kind cannot be rendered faithfully for the selected dialect"
            }
        };

        Some(Box::new(msg))
    }
}

pub type UnparseResult<T = String> = Result<T, UnparseError>;
