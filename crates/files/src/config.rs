use serde::{Deserialize, Serialize};

/// Configuration for file discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Descend into subdirectories (otherwise only the root's own files)
    pub recursive: bool,

    /// Extra gitignore-style patterns
    pub ignore_patterns: Vec<String>,

    /// Apply the built-in ignore list (VCS metadata, dependencies, build output)
    pub use_default_ignore: bool,

    /// Merge patterns from the root's `.gitignore`
    pub respect_gitignore: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            ignore_patterns: Vec::new(),
            use_default_ignore: true,
            respect_gitignore: true,
        }
    }
}

impl DiscoveryConfig {
    /// Only the root's immediate files
    pub fn shallow() -> Self {
        Self {
            recursive: false,
            ..Default::default()
        }
    }

    /// No ignore rules at all; every non-binary file is listed
    pub fn unfiltered() -> Self {
        Self {
            use_default_ignore: false,
            respect_gitignore: false,
            ..Default::default()
        }
    }

    /// Add one extra ignore pattern
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_patterns.push(pattern.into());
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(idx) = self
            .ignore_patterns
            .iter()
            .position(|p| p.trim().is_empty())
        {
            return Err(format!("ignore pattern #{} is empty", idx + 1));
        }
        Ok(())
    }
}
