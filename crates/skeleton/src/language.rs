use std::path::Path;

/// Resolve a file extension (with or without the leading dot) to a language id
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    let lang = match ext.to_lowercase().as_str() {
        "py" | "pyi" | "pyw" => "python",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "tsx",
        "java" => "java",
        "go" => "go",
        "rs" => "rust",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h++" => "cpp",
        "cs" => "csharp",
        "rb" | "rbw" | "rake" | "gemspec" => "ruby",
        "php" | "phtml" | "php3" | "php4" | "php5" | "phps" => "php",
        "kt" | "kts" => "kotlin",
        "swift" => "swift",
        "lua" => "lua",
        "scala" | "sc" => "scala",
        "m" | "mm" => "objc",
        _ => return None,
    };
    Some(lang)
}

/// Resolve a file path to a language id using its extension
pub fn language_for_path(path: impl AsRef<Path>) -> Option<&'static str> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(language_for_extension)
}
