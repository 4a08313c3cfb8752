use crate::reducer::DeletionPlan;
use std::borrow::Cow;

/// Split source into lines, each keeping its `\n` (or `\r\n`) terminator.
///
/// Rows line up with tree-sitter's row numbering, which only breaks on `\n`.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.split_inclusive('\n').collect()
}

/// Rebuild text from `lines`, dropping and editing what `plan` says.
///
/// Retained lines keep their original bytes and order. Trailing blank lines
/// are removed, and the last retained line loses its terminator, so an input
/// that reduces to nothing yields `""`.
pub fn assemble(lines: &[&str], plan: &DeletionPlan) -> String {
    let mut kept: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        if plan.is_deleted(idx) {
            continue;
        }
        kept.push(apply_edits(idx, line, plan));
    }

    while kept.last().is_some_and(|line| line.trim().is_empty()) {
        kept.pop();
    }

    let mut out: String = kept.concat();
    let trimmed = out.trim_end_matches(['\n', '\r']).len();
    out.truncate(trimmed);
    out
}

fn apply_edits<'a>(idx: usize, line: &'a str, plan: &DeletionPlan) -> Cow<'a, str> {
    let edits = plan.edits_for_line(idx);
    if edits.is_empty() {
        return Cow::Borrowed(line);
    }

    let mut edited = line.to_string();
    for edit in edits {
        let end = edit.end.min(edited.len());
        let start = edit.start.min(end);
        if !edited.is_char_boundary(start) || !edited.is_char_boundary(end) {
            log::warn!("Skipping edit on line {idx}: columns {start}..{end} split a character");
            continue;
        }
        edited.replace_range(start..end, &edit.replacement);
    }
    Cow::Owned(edited)
}
