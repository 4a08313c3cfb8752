//! # Loppers Skeleton
//!
//! Reduce source files to skeletons: declaration signatures, type structure and
//! (for Python) docstrings are kept, implementation bodies are removed.
//!
//! ## Architecture
//!
//! ```text
//! Source Code + language id
//!     │
//!     ├──> Profile lookup (query patterns + delimiter policy)
//!     │
//!     ├──> Tree-sitter Parsing → AST (error-tolerant)
//!     │
//!     ├──> Body Locator
//!     │    └─> captures of body nodes, in document order
//!     │
//!     ├──> Line-Range Reducer
//!     │    ├─> docstring and brace-header rules
//!     │    ├─> inline `( ... )` expression bodies as column edits
//!     │    └─> union of all ranges into one DeletionPlan
//!     │
//!     └──> Assembler
//!          └─> retained lines, byte for byte, trailing blanks trimmed
//! ```
//!
//! ## Example
//!
//! ```rust
//! use loppers_skeleton::extract;
//!
//! let code = r#"
//! fn process_data(input: &str) -> String {
//!     let cleaned = input.trim();
//!     cleaned.to_uppercase()
//! }
//! "#;
//!
//! let skeleton = extract(code, "rust").unwrap();
//! assert_eq!(skeleton, "\nfn process_data(input: &str) -> String {\n}");
//! ```

mod assembler;
mod error;
mod extractor;
mod language;
mod locator;
mod profile;
mod reducer;

pub use assembler::{assemble, split_lines};
pub use error::{Result, SkeletonError};
pub use extractor::{extract, Skeleton, SkeletonExtractor};
pub use language::{language_for_extension, language_for_path};
pub use locator::{locate, Capture};
pub use profile::{get_profile, is_supported, supported_languages, DelimiterStyle, LanguageProfile};
pub use reducer::{line_range, reduce, DeletionPlan, LineEdit};
