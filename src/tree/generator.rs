//! Recursive tree rendering
//!
//! Turns a directory hierarchy into an ordered sequence of lines. The
//! traversal is depth-first and pre-order; each visited entry produces
//! exactly one line, with the connector chosen by sibling position and an
//! indentation prefix threaded through the recursion.

use std::io;
use std::path::{MAIN_SEPARATOR, Path};

use super::config::TreeConfig;
use super::filter::prepare;

pub const PIPE: &str = "│";
pub const ELBOW: &str = "└──";
pub const TEE: &str = "├──";
pub const PIPE_PREFIX: &str = "│   ";
pub const SPACE_PREFIX: &str = "    ";

/// A fully rendered tree: the output lines plus entry totals.
///
/// Line order is the traversal order and is the visual tree itself.
/// `directories` and `files` equal the number of directory and file lines
/// emitted; excluded directories are never counted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tree {
    pub lines: Vec<String>,
    pub directories: usize,
    pub files: usize,
}

/// Render the subtree rooted at `root`.
///
/// The caller is expected to have verified that `root` is an existing,
/// readable directory; a filesystem error anywhere in the walk aborts the
/// whole traversal.
pub fn generate(root: &Path, config: &TreeConfig) -> io::Result<Tree> {
    let mut tree = Tree::default();
    // Fixed two-line head block, present even for an empty root
    tree.lines.push(format!("{}{}", root.display(), MAIN_SEPARATOR));
    tree.lines.push(PIPE.to_string());
    visit(root, "", 0, config, &mut tree)?;
    Ok(tree)
}

/// Body recursion. `prefix` encodes ancestor continuation: one 4-column
/// segment per ancestor, `│   ` when that ancestor has later siblings,
/// spaces when it was the last child.
fn visit(
    directory: &Path,
    prefix: &str,
    depth: usize,
    config: &TreeConfig,
    tree: &mut Tree,
) -> io::Result<()> {
    let entries = prepare(directory, config)?;
    let count = entries.len();

    for (i, entry) in entries.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { ELBOW } else { TEE };

        if entry.is_dir {
            tree.lines
                .push(format!("{prefix}{connector} {}{MAIN_SEPARATOR}", entry.name));
            tree.directories += 1;

            let segment = if is_last { SPACE_PREFIX } else { PIPE_PREFIX };
            let child_prefix = format!("{prefix}{segment}");
            if config.max_depth.is_none_or(|max| depth + 1 < max) {
                visit(&entry.path, &child_prefix, depth + 1, config, tree)?;
            }
            // Closing line for the subtree box
            tree.lines.push(child_prefix.trim_end().to_string());
        } else {
            tree.lines.push(format!("{prefix}{connector} {}", entry.name));
            tree.files += 1;
        }
    }

    Ok(())
}
