use crate::config::DiscoveryConfig;
use crate::error::{FilesError, Result};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::Path;

/// Built-in gitignore-style patterns applied unless disabled
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // VCS / tooling
    ".git/",
    ".hg/",
    ".svn/",
    ".idea/",
    ".vscode/",
    // dependencies
    "node_modules/",
    "bower_components/",
    "vendor/",
    ".venv/",
    "venv/",
    "env/",
    // caches / builds
    "__pycache__/",
    "*.pyc",
    "*.pyo",
    ".mypy_cache/",
    ".pytest_cache/",
    ".ruff_cache/",
    ".tox/",
    ".cache/",
    ".next/",
    ".nuxt/",
    ".gradle/",
    "target/",
    "build/",
    "dist/",
    "out/",
    "coverage/",
    "*.egg-info/",
    // lock files and OS noise
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    "poetry.lock",
    ".DS_Store",
    "Thumbs.db",
];

/// Build one matcher from the defaults, the root `.gitignore` and extra patterns
pub fn build_ignore_matcher(root: &Path, config: &DiscoveryConfig) -> Result<Gitignore> {
    let mut builder = GitignoreBuilder::new(root);

    if config.use_default_ignore {
        for pattern in DEFAULT_IGNORE_PATTERNS {
            add_pattern(&mut builder, pattern)?;
        }
    }

    if config.respect_gitignore {
        let gitignore_path = root.join(".gitignore");
        if gitignore_path.is_file() {
            let content = fs::read_to_string(&gitignore_path)?;
            let mut added = 0usize;
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                add_pattern(&mut builder, line)?;
                added += 1;
            }
            log::debug!(
                "Loaded {added} patterns from {}",
                gitignore_path.display()
            );
        }
    }

    for pattern in &config.ignore_patterns {
        add_pattern(&mut builder, pattern)?;
    }

    builder.build().map_err(|e| FilesError::InvalidPattern {
        pattern: "<combined>".to_string(),
        message: e.to_string(),
    })
}

fn add_pattern(builder: &mut GitignoreBuilder, pattern: &str) -> Result<()> {
    builder
        .add_line(None, pattern)
        .map(|_| ())
        .map_err(|e| FilesError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}
