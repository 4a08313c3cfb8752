use crate::locator::Capture;
use crate::profile::{DelimiterStyle, LanguageProfile};
use std::collections::BTreeSet;
use std::ops::Range;

/// In-place replacement of a byte-column span on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    /// 0-based line index
    pub line: usize,
    /// Byte column where the replaced span starts
    pub start: usize,
    /// Byte column one past the replaced span
    pub end: usize,
    pub replacement: String,
}

impl LineEdit {
    fn blank(line: usize, start: usize, end: usize) -> Self {
        Self {
            line,
            start,
            end,
            replacement: String::new(),
        }
    }

    fn contains(&self, other: &LineEdit) -> bool {
        self.line == other.line && self.start <= other.start && other.end <= self.end
    }
}

/// Everything that must change to turn a file into its skeleton
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    lines: BTreeSet<usize>,
    edits: Vec<LineEdit>,
}

impl DeletionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every line in `range` for deletion. Already-marked lines stay marked.
    pub fn delete_range(&mut self, range: Range<usize>) {
        self.lines.extend(range);
    }

    /// Record an in-place edit. An edit fully inside an existing one is dropped,
    /// and an edit that covers existing ones replaces them.
    pub fn push_edit(&mut self, edit: LineEdit) {
        if edit.start >= edit.end {
            return;
        }
        if self.edits.iter().any(|existing| existing.contains(&edit)) {
            return;
        }
        self.edits.retain(|existing| !edit.contains(existing));
        self.edits.push(edit);
    }

    pub fn is_deleted(&self, line: usize) -> bool {
        self.lines.contains(&line)
    }

    pub fn deleted_lines(&self) -> &BTreeSet<usize> {
        &self.lines
    }

    pub fn edits(&self) -> &[LineEdit] {
        &self.edits
    }

    /// Edits for `line`, ordered right to left so applying them keeps columns valid
    pub fn edits_for_line(&self, line: usize) -> Vec<&LineEdit> {
        let mut edits: Vec<_> = self.edits.iter().filter(|e| e.line == line).collect();
        edits.sort_by(|a, b| b.start.cmp(&a.start));
        edits
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.edits.is_empty()
    }

    /// Drop line indices and edits that fall outside a file of `line_count` lines
    pub fn clamp(&mut self, line_count: usize) {
        self.lines.retain(|&line| line < line_count);
        self.edits.retain(|e| e.line < line_count);
    }
}

/// Fold every capture into one deletion plan for a file whose lines are `lines`
pub fn reduce(captures: &[Capture<'_>], profile: &LanguageProfile, lines: &[&str]) -> DeletionPlan {
    let mut plan = DeletionPlan::new();

    for capture in captures {
        if profile.inline_expression_bodies() && is_recovered_arrow_body(capture) {
            log::debug!(
                "Ignoring {} arrow body on line {} inside error recovery",
                profile.id(),
                capture.start_line() + 1
            );
            continue;
        }
        if profile.inline_expression_bodies() && capture.kind() == "parenthesized_expression" {
            reduce_inline_expression(capture, lines, &mut plan);
        } else {
            plan.delete_range(line_range(capture, profile));
        }
    }

    plan.clamp(lines.len());
    plan
}

/// Lines a single capture removes
pub fn line_range(capture: &Capture<'_>, profile: &LanguageProfile) -> Range<usize> {
    let start = capture.start_line();
    let end = capture.end_line();

    let mut skip_start = start;

    if profile.preserves_docstrings() {
        if let Some(doc_end) = docstring_end_line(capture) {
            skip_start = doc_end + 1;
        }
    }

    let brace = profile.delimiter() == DelimiterStyle::Brace;
    if brace && start < end {
        skip_start = start + 1;
    }

    let end_exclusive = if start == end || !brace { end + 1 } else { end };

    skip_start..end_exclusive.max(skip_start)
}

/// Last line of a leading string-literal statement in the body, if there is one
fn docstring_end_line(capture: &Capture<'_>) -> Option<usize> {
    let first = capture.first_child()?;
    if first.kind() != "expression_statement" {
        return None;
    }
    if first.named_child_count() != 1 {
        return None;
    }
    let literal = first.child(0)?;
    (literal.kind() == "string").then(|| first.end_position().row)
}

/// An arrow body the parser attached while recovering from an error in the
/// same `arrow_function`, e.g. the emptied `()` of an already reduced
/// expression body. The "body" is then whatever statement follows.
fn is_recovered_arrow_body(capture: &Capture<'_>) -> bool {
    let Some(arrow) = capture.node.parent() else {
        return false;
    };
    if arrow.kind() != "arrow_function" {
        return false;
    }
    if capture.node.is_error() {
        return true;
    }
    let mut cursor = arrow.walk();
    let recovered = arrow.children(&mut cursor).any(|child| child.is_error());
    recovered
}

/// Keep the delimiters of a parenthesized expression body and blank what is between them
fn reduce_inline_expression(capture: &Capture<'_>, lines: &[&str], plan: &mut DeletionPlan) {
    let start = capture.node.start_position();
    let end = capture.node.end_position();
    // Columns just inside `(` and just before `)`.
    let open = start.column + 1;
    let close = end.column.saturating_sub(1);

    if start.row == end.row {
        plan.push_edit(LineEdit::blank(start.row, open, close));
        return;
    }

    if let Some(first) = lines.get(start.row) {
        plan.push_edit(LineEdit::blank(start.row, open, content_len(first)));
    }
    if let Some(last) = lines.get(end.row) {
        let indent = indent_len(last).min(close);
        plan.push_edit(LineEdit::blank(end.row, indent, close));
    }
    plan.delete_range(start.row + 1..end.row);
}

/// Byte length of a line without its terminator
fn content_len(line: &str) -> usize {
    line.trim_end_matches(['\n', '\r']).len()
}

fn indent_len(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::split_lines;
    use crate::locator::locate;
    use crate::profile::get_profile;
    use tree_sitter::Parser;

    fn plan_for(code: &str, lang: &str) -> DeletionPlan {
        let profile = get_profile(lang).unwrap();
        let mut parser = Parser::new();
        parser.set_language(&profile.language()).unwrap();
        let tree = parser.parse(code, None).unwrap();
        let captures = locate(&tree, code, profile).unwrap();
        let lines = split_lines(code);
        reduce(&captures, profile, &lines)
    }

    fn deleted(plan: &DeletionPlan) -> Vec<usize> {
        plan.deleted_lines().iter().copied().collect()
    }

    #[test]
    fn test_brace_keeps_header_and_closing_line() {
        let code = "fn main() {\n    let x = 1;\n    println!(\"{x}\");\n}\n";
        let plan = plan_for(code, "rust");
        assert_eq!(deleted(&plan), vec![1, 2]);
    }

    #[test]
    fn test_brace_single_line_body_drops_line() {
        let code = "struct A;\nfn f() { 1 }\nfn g() {}\n";
        let plan = plan_for(code, "rust");
        assert_eq!(deleted(&plan), vec![1, 2]);
    }

    #[test]
    fn test_keyword_deletes_through_last_body_line() {
        let code = "def add(a, b):\n    c = a + b\n    return c\n\nx = 1\n";
        let plan = plan_for(code, "python");
        assert_eq!(deleted(&plan), vec![1, 2]);
    }

    #[test]
    fn test_docstring_lines_are_kept() {
        let code = "def f():\n    \"\"\"Doc\n    more.\n    \"\"\"\n    return 1\n";
        let plan = plan_for(code, "python");
        assert_eq!(deleted(&plan), vec![4]);
    }

    #[test]
    fn test_docstring_only_body_deletes_nothing() {
        let code = "def f():\n    \"\"\"Doc.\"\"\"\n";
        let plan = plan_for(code, "python");
        assert!(plan.is_empty());
    }

    #[test]
    fn test_non_python_string_statement_is_not_a_docstring() {
        let code = "function f() {\n    \"use strict\";\n    return 1;\n}\n";
        let plan = plan_for(code, "javascript");
        assert_eq!(deleted(&plan), vec![1, 2]);
    }

    #[test]
    fn test_nested_captures_union() {
        let code = "\
fn outer() {
    let f = |x| {
        x + 1
    };
    f(2);
}
";
        let plan = plan_for(code, "rust");
        assert_eq!(deleted(&plan), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ruby_keeps_end() {
        let code = "def add(a, b)\n  r = a + b\n  r\nend\n";
        let plan = plan_for(code, "ruby");
        assert_eq!(deleted(&plan), vec![1, 2]);
    }

    #[test]
    fn test_inline_expression_single_line() {
        let code = "const double = (x) => (x * 2);\n";
        let plan = plan_for(code, "javascript");
        assert!(plan.deleted_lines().is_empty());
        assert_eq!(
            plan.edits(),
            &[LineEdit {
                line: 0,
                start: 23,
                end: 28,
                replacement: String::new(),
            }]
        );
    }

    #[test]
    fn test_inline_expression_multi_line() {
        let code = "const view = () => (\n  <div>\n    hi\n  </div>\n);\n";
        let plan = plan_for(code, "javascript");
        assert_eq!(deleted(&plan), vec![1, 2, 3]);
        // `(` is the last byte on the first line, `)` the first on the last.
        assert!(plan.edits().is_empty());
    }

    #[test]
    fn test_docstring_requires_lone_string() {
        let code = "def f():\n    \"a\", \"b\"\n    return 1\n";
        let plan = plan_for(code, "python");
        assert_eq!(deleted(&plan), vec![1, 2]);
    }

    #[test]
    fn test_reduced_inline_arrow_leaves_next_statement() {
        let code = "const v = (x) => ();\nconst w = 1;\nfunction keep() {\n  return 2;\n}\n";
        let plan = plan_for(code, "javascript");
        assert_eq!(deleted(&plan), vec![3]);
        assert!(plan.edits().is_empty());
    }

    #[test]
    fn test_plain_expression_arrow_drops_line() {
        let code = "const concise = (x) => x * 2;\n";
        let plan = plan_for(code, "javascript");
        assert_eq!(deleted(&plan), vec![0]);
    }

    #[test]
    fn test_push_edit_keeps_outermost() {
        let mut plan = DeletionPlan::new();
        plan.push_edit(LineEdit::blank(0, 5, 8));
        plan.push_edit(LineEdit::blank(0, 2, 10));
        plan.push_edit(LineEdit::blank(0, 3, 4));
        plan.push_edit(LineEdit::blank(1, 4, 4));
        assert_eq!(plan.edits(), &[LineEdit::blank(0, 2, 10)]);
    }

    #[test]
    fn test_clamp_drops_out_of_range() {
        let mut plan = DeletionPlan::new();
        plan.delete_range(2..6);
        plan.push_edit(LineEdit::blank(7, 0, 1));
        plan.clamp(4);
        assert_eq!(deleted(&plan), vec![2, 3]);
        assert!(plan.edits().is_empty());
    }
}
