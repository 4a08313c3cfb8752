use thiserror::Error;

/// Result type for skeleton extraction
pub type Result<T> = std::result::Result<T, SkeletonError>;

/// Errors that can occur during skeleton extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkeletonError {
    /// No profile is registered for the requested language
    #[error("Language '{requested}' not supported. Supported: {}", supported.join(", "))]
    UnsupportedLanguage {
        requested: String,
        supported: Vec<&'static str>,
    },

    /// A profile's body query failed to compile against its grammar
    #[error("Invalid body query for {language}: {message}")]
    Query {
        language: &'static str,
        message: String,
    },

    /// Tree-sitter rejected the grammar
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    /// The parser produced no tree at all
    #[error("Parse error: {0}")]
    Parse(String),
}

impl SkeletonError {
    /// Create an unsupported language error listing every registered language
    pub fn unsupported_language(requested: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            requested: requested.into(),
            supported: crate::profile::supported_languages(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a tree-sitter error
    pub fn tree_sitter(msg: impl Into<String>) -> Self {
        Self::TreeSitter(msg.into())
    }

    /// True when the error names a language without a profile
    pub const fn is_unsupported_language(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage { .. })
    }
}
