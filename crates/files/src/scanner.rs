use crate::binary::is_binary;
use crate::config::DiscoveryConfig;
use crate::error::{FilesError, Result};
use crate::ignore_rules::build_ignore_matcher;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Scanner for finding text files under a root directory
pub struct FileScanner {
    root: PathBuf,
    config: DiscoveryConfig,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>, config: DiscoveryConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Collect non-binary files, as sorted `/`-separated paths relative to the root
    pub fn scan(&self) -> Result<Vec<String>> {
        ensure_directory(&self.root)?;
        self.config.validate().map_err(FilesError::InvalidConfig)?;

        let matcher = Arc::new(build_ignore_matcher(&self.root, &self.config)?);

        let mut builder = WalkBuilder::new(&self.root);
        // Ignore handling is ours alone: defaults + root .gitignore + extra patterns.
        builder.standard_filters(false).follow_links(false);
        if !self.config.recursive {
            builder.max_depth(Some(1));
        }
        let root = self.root.clone();
        builder.filter_entry(move |entry| {
            if entry.path() == root {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !matcher.matched(entry.path(), is_dir).is_ignore()
        });

        let mut files = Vec::new();
        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if is_binary(path) {
                        log::debug!("Skipping binary file {}", path.display());
                        continue;
                    }

                    if let Some(relative) = self.relative(path) {
                        files.push(relative);
                    }
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files.sort();
        log::info!("Found {} files under {}", files.len(), self.root.display());
        Ok(files)
    }

    fn relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Some(parts.join("/"))
    }
}

/// Fail unless `root` exists and is a directory
pub(crate) fn ensure_directory(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(FilesError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(FilesError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Collect all non-binary text files under `root`
pub fn find_files(root: impl AsRef<Path>, config: &DiscoveryConfig) -> Result<Vec<String>> {
    FileScanner::new(root, config.clone()).scan()
}
