//! Rendering of the flattened artifact.
//!
//! The artifact has two sections: an indented structure listing, then one
//! START/END block per file in the same order. Everything here writes to a
//! plain [`Write`], so the same code fills the output file and in-memory
//! buffers.

use crate::engine::read_file_content;
use crate::types::{DirNode, FileContent, Snapshot};
use std::io::{self, Write};
use std::path::Path;

pub const STRUCTURE_HEADER: &str = "PROJECT STRUCTURE:";
pub const CONTENTS_HEADER: &str = "FILE CONTENTS:";
const RULE: &str = "==================";
const INDENT: &str = "    ";

/// Writes the structure section: the header, then every directory line
/// followed by its files, indented four spaces per level.
pub fn write_structure<W: Write>(out: &mut W, root: &DirNode) -> io::Result<()> {
    writeln!(out, "{STRUCTURE_HEADER}")?;
    writeln!(out, "{RULE}")?;
    write_dir(out, root)
}

fn write_dir<W: Write>(out: &mut W, node: &DirNode) -> io::Result<()> {
    writeln!(out, "{}{}/", INDENT.repeat(node.depth), node.name)?;
    let file_indent = INDENT.repeat(node.depth + 1);
    for file in &node.files {
        writeln!(out, "{}{}", file_indent, file.name)?;
    }
    for dir in &node.dirs {
        write_dir(out, dir)?;
    }
    Ok(())
}

/// Writes the contents section, reading each file through `read`.
///
/// A file that fails to read gets a bracketed diagnostic line instead of its
/// block. Returns the display paths of those files.
pub fn write_contents<W, F>(out: &mut W, root: &DirNode, mut read: F) -> io::Result<Vec<String>>
where
    W: Write,
    F: FnMut(&Path) -> FileContent,
{
    write!(out, "\n\n{CONTENTS_HEADER}\n{RULE}\n")?;
    let mut unreadable = Vec::new();
    for file in root.walk_files() {
        match read(&file.path) {
            Ok(content) => {
                write!(out, "\n\n--- START FILE: {} ---\n", file.display_path)?;
                out.write_all(content.as_bytes())?;
                write!(out, "\n--- END FILE: {} ---\n", file.display_path)?;
            }
            Err(e) => {
                write!(out, "\n[Could not read {}: {}]\n", file.display_path, e)?;
                unreadable.push(file.display_path.clone());
            }
        }
    }
    Ok(unreadable)
}

/// Writes both sections, reading file contents from disk.
pub fn write_artifact<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<Vec<String>> {
    write_structure(out, &snapshot.root)?;
    write_contents(out, &snapshot.root, read_file_content)
}

/// Renders the whole artifact into a string.
pub fn format_snapshot(snapshot: &Snapshot) -> io::Result<String> {
    let mut buf = Vec::with_capacity(1024);
    write_artifact(&mut buf, snapshot)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
