//! Internal module for assembling walker entries into a [`DirNode`] tree.

use crate::error::FlattenError;
use crate::types::{DirNode, FileEntry};
use std::path::{Component, Path, PathBuf};

/// A path yielded by the walker after filtering.
#[derive(Debug, Clone)]
pub(crate) struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

enum Leaf {
    Dir(String),
    File(FileEntry),
}

/// Name printed on the root line: the base name, or the path as given when
/// it has none (`.` for the current directory).
pub(crate) fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// Builds the node tree from walk entries.
///
/// Entries must arrive parents first, as a depth-first walk yields them, so
/// every file or directory finds its parent node already in place. Sibling
/// order is preserved.
///
/// # Errors
///
/// Returns [`FlattenError::Walk`] if an entry lies outside `root` or its
/// parent directory was never yielded.
pub(crate) fn build_tree_from_entries(
    root: &Path,
    entries: &[WalkEntry],
) -> Result<DirNode, FlattenError> {
    let mut tree = DirNode::new(root_name(root), 0);

    for entry in entries {
        let relative = entry.path.strip_prefix(root).map_err(|_| {
            FlattenError::Walk(format!(
                "entry {} is outside root {}",
                entry.path.display(),
                root.display()
            ))
        })?;
        let mut parts: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let Some(name) = parts.pop() else {
            continue;
        };

        let leaf = if entry.is_dir {
            Leaf::Dir(name)
        } else {
            let display_path = display_path(&parts, &name);
            Leaf::File(FileEntry {
                name,
                path: entry.path.clone(),
                display_path,
            })
        };

        if !insert(&mut tree, &parts, leaf) {
            return Err(FlattenError::Walk(format!(
                "parent of {} was not visited",
                entry.path.display()
            )));
        }
    }

    Ok(tree)
}

fn insert(node: &mut DirNode, parents: &[String], leaf: Leaf) -> bool {
    match parents.split_first() {
        None => {
            match leaf {
                Leaf::Dir(name) => node.dirs.push(DirNode::new(name, node.depth + 1)),
                Leaf::File(file) => node.files.push(file),
            }
            true
        }
        Some((head, rest)) => match node.dirs.iter_mut().find(|d| &d.name == head) {
            Some(child) => insert(child, rest, leaf),
            None => false,
        },
    }
}

fn display_path(parents: &[String], name: &str) -> String {
    let mut out = String::from(".");
    for part in parents {
        out.push('/');
        out.push_str(part);
    }
    out.push('/');
    out.push_str(name);
    out
}
