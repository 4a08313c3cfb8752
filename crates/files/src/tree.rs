use crate::config::DiscoveryConfig;
use crate::error::Result;
use crate::scanner::find_files;
use std::collections::BTreeMap;
use std::path::Path;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE_INDENT: &str = "│  ";
const BLANK_INDENT: &str = "   ";

/// Directory node; a node without children is a file
#[derive(Debug, Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        let mut root = Self::default();
        for path in paths {
            let mut node = &mut root;
            for part in path.as_ref().split('/').filter(|p| !p.is_empty() && *p != ".") {
                node = node.children.entry(part.to_string()).or_default();
            }
        }
        root
    }

    fn is_dir(&self) -> bool {
        !self.children.is_empty()
    }

    /// Children with directories first, then case-insensitive by name
    fn sorted_children(&self) -> Vec<(&String, &TreeNode)> {
        let mut entries: Vec<_> = self.children.iter().collect();
        entries.sort_by_key(|(name, node)| (!node.is_dir(), name.to_lowercase()));
        entries
    }

    fn render(&self, prefix: &str, collapse: bool, out: &mut Vec<String>) {
        let entries = self.sorted_children();
        let count = entries.len();
        for (idx, (name, node)) in entries.into_iter().enumerate() {
            let last = idx + 1 == count;
            let mut display = name.clone();
            let mut current = node;

            if collapse {
                while current.children.len() == 1 {
                    let Some((child_name, child)) = current.children.iter().next() else {
                        break;
                    };
                    if !child.is_dir() {
                        break;
                    }
                    display.push('/');
                    display.push_str(child_name);
                    current = child;
                }
            }

            let connector = if last { LAST_BRANCH } else { BRANCH };
            out.push(format!("{prefix}{connector}{display}"));

            if current.is_dir() {
                let indent = if last { BLANK_INDENT } else { PIPE_INDENT };
                current.render(&format!("{prefix}{indent}"), collapse, out);
            }
        }
    }
}

/// Render `/`-separated relative paths as an indented tree rooted at `.`
pub fn render_tree<S: AsRef<str>>(paths: &[S], collapse_single_dirs: bool) -> String {
    let root = TreeNode::from_paths(paths);
    let mut lines = vec![".".to_string()];
    root.render("", collapse_single_dirs, &mut lines);
    lines.join("\n")
}

/// Discover files under `root` and render them as a tree
pub fn get_tree(
    root: impl AsRef<Path>,
    config: &DiscoveryConfig,
    collapse_single_dirs: bool,
) -> Result<String> {
    let files = find_files(root, config)?;
    Ok(render_tree(&files, collapse_single_dirs))
}
