use crate::error::{FilesError, Result};
use crate::scanner::ensure_directory;
use loppers_skeleton::{language_for_path, SkeletonExtractor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Options for [`concatenate_files`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcatOptions {
    /// Replace bodies with skeletons for supported languages
    pub extract: bool,

    /// Skip listed files that do not exist instead of failing
    pub ignore_not_found: bool,
}

impl Default for ConcatOptions {
    fn default() -> Self {
        Self {
            extract: true,
            ignore_not_found: false,
        }
    }
}

/// Read `path`, detect its language from the extension and return its skeleton.
///
/// With `add_header`, the result starts with `--- <path>\n`.
pub fn get_skeleton(path: impl AsRef<Path>, add_header: bool) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(FilesError::FileNotFound(path.to_path_buf()));
    }

    let language =
        language_for_path(path).ok_or_else(|| FilesError::UnsupportedFileType(path.to_path_buf()))?;
    let content = read_text(path)?;
    let skeleton = SkeletonExtractor::new(language)?.extract(&content)?;

    if add_header {
        Ok(format!("--- {}\n{skeleton}", path.display()))
    } else {
        Ok(skeleton)
    }
}

/// Concatenate files listed relative to `root`, each under a `--- <path>` header.
///
/// Files whose language is supported are reduced to skeletons when
/// `options.extract` is set; anything else (or a failed extraction) keeps its
/// raw content. Unreadable files are logged and skipped.
pub fn concatenate_files<S: AsRef<str>>(
    root: impl AsRef<Path>,
    files: &[S],
    options: &ConcatOptions,
) -> Result<String> {
    if files.is_empty() {
        return Err(FilesError::EmptyFileList);
    }
    let root = root.as_ref();
    ensure_directory(root)?;

    let mut extractors: HashMap<&'static str, SkeletonExtractor> = HashMap::new();
    let mut sections = Vec::with_capacity(files.len());

    for relative in files {
        let relative = relative.as_ref();
        let full_path = root.join(relative);

        if !full_path.is_file() {
            if options.ignore_not_found {
                log::warn!("Skipping missing file {relative}");
                continue;
            }
            return Err(FilesError::FileNotFound(full_path));
        }

        let content = match read_text(&full_path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read {relative}: {e}");
                continue;
            }
        };

        let body = if options.extract {
            skeleton_or_raw(&mut extractors, &full_path, relative, content)
        } else {
            content
        };

        sections.push(format!("--- {relative}\n{body}\n"));
    }

    log::debug!("Concatenated {} of {} files", sections.len(), files.len());
    Ok(sections.join("\n").trim_end().to_string())
}

fn skeleton_or_raw(
    extractors: &mut HashMap<&'static str, SkeletonExtractor>,
    path: &Path,
    relative: &str,
    content: String,
) -> String {
    let Some(language) = language_for_path(path) else {
        log::debug!("No skeleton extraction for {relative}, including as-is");
        return content;
    };

    let extractor = match extractors.entry(language) {
        std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
        std::collections::hash_map::Entry::Vacant(entry) => match SkeletonExtractor::new(language) {
            Ok(extractor) => entry.insert(extractor),
            Err(e) => {
                log::warn!("Could not extract skeleton from {relative}: {e}");
                return content;
            }
        },
    };

    match extractor.extract(&content) {
        Ok(skeleton) => {
            log::debug!("Extracted skeleton from {relative}");
            skeleton
        }
        Err(e) => {
            log::warn!("Could not extract skeleton from {relative}: {e}");
            content
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| FilesError::NotText(path.to_path_buf()))
}
