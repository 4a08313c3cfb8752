use crate::error::{Result, SkeletonError};
use once_cell::sync::{Lazy, OnceCell};
use std::fmt;
use tree_sitter::Query;

/// How a language marks where a body ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterStyle {
    /// `{ ... }`: the closing brace sits on its own line and is retained
    Brace,
    /// `def ... end` or indentation: the captured body has no terminator line
    Keyword,
}

/// Per-language extraction policy: which nodes are bodies and how to cut them
pub struct LanguageProfile {
    id: &'static str,
    patterns: &'static [&'static str],
    delimiter: DelimiterStyle,
    preserves_docstrings: bool,
    inline_expression_bodies: bool,
    grammar: fn() -> tree_sitter::Language,
    query: OnceCell<Query>,
}

impl LanguageProfile {
    const fn new(
        id: &'static str,
        delimiter: DelimiterStyle,
        patterns: &'static [&'static str],
        grammar: fn() -> tree_sitter::Language,
    ) -> Self {
        Self {
            id,
            patterns,
            delimiter,
            preserves_docstrings: false,
            inline_expression_bodies: false,
            grammar,
            query: OnceCell::new(),
        }
    }

    const fn brace(
        id: &'static str,
        patterns: &'static [&'static str],
        grammar: fn() -> tree_sitter::Language,
    ) -> Self {
        Self::new(id, DelimiterStyle::Brace, patterns, grammar)
    }

    const fn keyword(
        id: &'static str,
        patterns: &'static [&'static str],
        grammar: fn() -> tree_sitter::Language,
    ) -> Self {
        Self::new(id, DelimiterStyle::Keyword, patterns, grammar)
    }

    const fn with_docstrings(mut self) -> Self {
        self.preserves_docstrings = true;
        self
    }

    const fn with_inline_expressions(mut self) -> Self {
        self.inline_expression_bodies = true;
        self
    }

    /// Language identifier, e.g. `"python"`
    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn delimiter(&self) -> DelimiterStyle {
        self.delimiter
    }

    /// Whether a leading string-literal statement survives body removal
    pub const fn preserves_docstrings(&self) -> bool {
        self.preserves_docstrings
    }

    /// Whether parenthesized single-expression bodies are blanked in place
    pub const fn inline_expression_bodies(&self) -> bool {
        self.inline_expression_bodies
    }

    /// Alternative body patterns; a node matching any of them is a body
    pub const fn patterns(&self) -> &'static [&'static str] {
        self.patterns
    }

    /// Tree-sitter grammar for this language
    pub fn language(&self) -> tree_sitter::Language {
        (self.grammar)()
    }

    /// Compiled union of all body patterns, built once and shared
    pub fn query(&self) -> Result<&Query> {
        self.query.get_or_try_init(|| {
            let source = self.patterns.join("\n");
            log::debug!(
                "Compiling {} body patterns for {}",
                self.patterns.len(),
                self.id
            );
            Query::new(&self.language(), &source).map_err(|e| SkeletonError::Query {
                language: self.id,
                message: e.to_string(),
            })
        })
    }
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("id", &self.id)
            .field("delimiter", &self.delimiter)
            .field("preserves_docstrings", &self.preserves_docstrings)
            .field("inline_expression_bodies", &self.inline_expression_bodies)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}

const JS_FAMILY_PATTERNS: &[&str] = &[
    "(function_declaration body: (statement_block) @body)",
    "(generator_function_declaration body: (statement_block) @body)",
    "(function_expression body: (statement_block) @body)",
    "(method_definition body: (statement_block) @body)",
    "(arrow_function body: (_) @body)",
];

static REGISTRY: Lazy<Vec<LanguageProfile>> = Lazy::new(|| {
    vec![
        LanguageProfile::keyword(
            "python",
            &["(function_definition body: (block) @body)"],
            || tree_sitter_python::LANGUAGE.into(),
        )
        .with_docstrings(),
        LanguageProfile::brace("javascript", JS_FAMILY_PATTERNS, || {
            tree_sitter_javascript::LANGUAGE.into()
        })
        .with_inline_expressions(),
        LanguageProfile::brace("typescript", JS_FAMILY_PATTERNS, || {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        })
        .with_inline_expressions(),
        LanguageProfile::brace("tsx", JS_FAMILY_PATTERNS, || {
            tree_sitter_typescript::LANGUAGE_TSX.into()
        })
        .with_inline_expressions(),
        LanguageProfile::brace(
            "java",
            &[
                "(method_declaration body: (block) @body)",
                "(constructor_declaration (constructor_body) @body)",
                "(lambda_expression body: (block) @body)",
            ],
            || tree_sitter_java::LANGUAGE.into(),
        ),
        LanguageProfile::brace(
            "go",
            &[
                "(function_declaration body: (block) @body)",
                "(method_declaration body: (block) @body)",
                "(func_literal body: (block) @body)",
            ],
            || tree_sitter_go::LANGUAGE.into(),
        ),
        LanguageProfile::brace(
            "rust",
            &[
                "(function_item body: (block) @body)",
                "(closure_expression body: (block) @body)",
            ],
            || tree_sitter_rust::LANGUAGE.into(),
        ),
        LanguageProfile::brace(
            "cpp",
            &[
                "(function_definition body: (compound_statement) @body)",
                "(lambda_expression body: (compound_statement) @body)",
            ],
            || tree_sitter_cpp::LANGUAGE.into(),
        ),
        LanguageProfile::brace(
            "c",
            &["(function_definition body: (compound_statement) @body)"],
            || tree_sitter_c::LANGUAGE.into(),
        ),
        LanguageProfile::brace(
            "csharp",
            &[
                "(method_declaration body: (block) @body)",
                "(constructor_declaration body: (block) @body)",
                "(local_function_statement body: (block) @body)",
                "(accessor_declaration body: (block) @body)",
                "(lambda_expression body: (block) @body)",
                "(anonymous_method_expression (block) @body)",
            ],
            || tree_sitter_c_sharp::LANGUAGE.into(),
        ),
        LanguageProfile::keyword(
            "ruby",
            &[
                "(method body: (body_statement) @body)",
                "(singleton_method body: (body_statement) @body)",
            ],
            || tree_sitter_ruby::LANGUAGE.into(),
        ),
        LanguageProfile::brace(
            "php",
            &[
                "(method_declaration body: (compound_statement) @body)",
                "(function_definition body: (compound_statement) @body)",
            ],
            || tree_sitter_php::LANGUAGE_PHP.into(),
        ),
        LanguageProfile::brace(
            "kotlin",
            &[
                "(function_declaration (function_body) @body)",
                "(getter (function_body) @body)",
                "(setter (function_body) @body)",
            ],
            || tree_sitter_kotlin_ng::LANGUAGE.into(),
        ),
        LanguageProfile::brace(
            "swift",
            &["(function_declaration (function_body) @body)"],
            || tree_sitter_swift::LANGUAGE.into(),
        ),
        LanguageProfile::keyword(
            "lua",
            &[
                "(function_declaration (block) @body)",
                "(function_definition (block) @body)",
            ],
            || tree_sitter_lua::LANGUAGE.into(),
        ),
        LanguageProfile::brace(
            "scala",
            &["(function_definition (block) @body)"],
            || tree_sitter_scala::LANGUAGE.into(),
        ),
        LanguageProfile::brace("objc", &["(compound_statement) @body"], || {
            tree_sitter_objc::LANGUAGE.into()
        }),
    ]
});

/// Look up the profile registered for `language`
pub fn get_profile(language: &str) -> Result<&'static LanguageProfile> {
    REGISTRY
        .iter()
        .find(|profile| profile.id == language)
        .ok_or_else(|| SkeletonError::unsupported_language(language))
}

/// Every registered language identifier, in registry order
pub fn supported_languages() -> Vec<&'static str> {
    REGISTRY.iter().map(LanguageProfile::id).collect()
}

/// Check whether `language` has a registered profile
pub fn is_supported(language: &str) -> bool {
    REGISTRY.iter().any(|profile| profile.id == language)
}
