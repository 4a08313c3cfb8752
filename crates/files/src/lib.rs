//! # Loppers Files
//!
//! Repository-level helpers around skeleton extraction:
//!
//! - **Discovery**: walk a root directory honoring built-in ignores, the root
//!   `.gitignore` and extra patterns, skipping binary files
//! - **Tree**: render discovered paths as an indented tree
//! - **Concatenation**: join files under `--- <path>` headers, reducing
//!   supported sources to skeletons
//!
//! ## Example
//!
//! ```no_run
//! use loppers_files::{concatenate_files, find_files, ConcatOptions, DiscoveryConfig};
//!
//! # fn main() -> loppers_files::Result<()> {
//! let files = find_files("src", &DiscoveryConfig::default())?;
//! let bundle = concatenate_files("src", &files, &ConcatOptions::default())?;
//! println!("{bundle}");
//! # Ok(())
//! # }
//! ```

mod binary;
mod concat;
mod config;
mod error;
mod ignore_rules;
mod scanner;
mod tree;

pub use binary::{is_binary, is_binary_content};
pub use concat::{concatenate_files, get_skeleton, ConcatOptions};
pub use config::DiscoveryConfig;
pub use error::{FilesError, Result};
pub use ignore_rules::{build_ignore_matcher, DEFAULT_IGNORE_PATTERNS};
pub use scanner::{find_files, FileScanner};
pub use tree::{get_tree, render_tree};
