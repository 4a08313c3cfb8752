use crate::assembler::{assemble, split_lines};
use crate::error::{Result, SkeletonError};
use crate::locator::locate;
use crate::profile::{get_profile, LanguageProfile};
use crate::reducer::{reduce, DeletionPlan};
use tree_sitter::{Parser, Tree};

/// Result of one extraction, with counters useful for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    pub text: String,
    pub language: &'static str,
    /// Number of body captures found
    pub captures: usize,
    /// Number of source lines removed
    pub removed_lines: usize,
    /// The parse tree contained error nodes; the skeleton is best effort
    pub degraded: bool,
}

/// Extracts skeletons for one language. Holds its own parser, so keep one per thread.
pub struct SkeletonExtractor {
    profile: &'static LanguageProfile,
    parser: Parser,
}

impl SkeletonExtractor {
    /// Create an extractor for `language`
    pub fn new(language: &str) -> Result<Self> {
        let profile = get_profile(language)?;

        let mut parser = Parser::new();
        parser
            .set_language(&profile.language())
            .map_err(|e| SkeletonError::tree_sitter(format!("Failed to set language: {e}")))?;

        // Surface query errors at construction rather than on first use.
        profile.query()?;

        Ok(Self { profile, parser })
    }

    pub fn language(&self) -> &'static str {
        self.profile.id()
    }

    pub fn profile(&self) -> &'static LanguageProfile {
        self.profile
    }

    /// Remove implementation bodies from `source`
    pub fn extract(&mut self, source: &str) -> Result<String> {
        self.extract_with_report(source).map(|skeleton| skeleton.text)
    }

    /// Compute the deletion plan for `source` without assembling output
    pub fn plan(&mut self, source: &str) -> Result<DeletionPlan> {
        if source.is_empty() {
            return Ok(DeletionPlan::new());
        }
        let tree = self.parse(source)?;
        let captures = locate(&tree, source, self.profile)?;
        Ok(reduce(&captures, self.profile, &split_lines(source)))
    }

    /// Remove implementation bodies and report what happened
    pub fn extract_with_report(&mut self, source: &str) -> Result<Skeleton> {
        if source.is_empty() {
            return Ok(Skeleton {
                text: String::new(),
                language: self.profile.id(),
                captures: 0,
                removed_lines: 0,
                degraded: false,
            });
        }

        let tree = self.parse(source)?;
        let degraded = tree.root_node().has_error();
        if degraded {
            log::warn!(
                "{} source has syntax errors; skeleton is best effort",
                self.profile.id()
            );
        }

        let lines = split_lines(source);
        let captures = locate(&tree, source, self.profile)?;
        let plan = reduce(&captures, self.profile, &lines);
        let text = assemble(&lines, &plan);

        log::debug!(
            "Extracted {} skeleton: {} captures, {} of {} lines removed",
            self.profile.id(),
            captures.len(),
            plan.deleted_lines().len(),
            lines.len()
        );

        Ok(Skeleton {
            text,
            language: self.profile.id(),
            captures: captures.len(),
            removed_lines: plan.deleted_lines().len(),
            degraded,
        })
    }

    fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| SkeletonError::parse("Failed to parse source code"))
    }
}

/// Extract a skeleton from `source` written in `language`
pub fn extract(source: &str, language: &str) -> Result<String> {
    SkeletonExtractor::new(language)?.extract(source)
}
