use std::io;
use std::path::PathBuf;

/// Outcome of reading one file: its text, or the reason it could not be read.
///
/// Decoding failures surface as [`io::ErrorKind::InvalidData`].
pub type FileContent = Result<String, io::Error>;

/// A single file that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The bare file name, as shown in the structure listing.
    pub name: String,
    /// The path used to read the file from disk.
    pub path: PathBuf,
    /// The root-relative path shown in the content markers, e.g. `./src/lib.rs`.
    pub display_path: String,
}

/// A directory visited during the walk, with its surviving children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    /// The name printed on the directory line. For the root this is its base
    /// name, or `.` when the root has none.
    pub name: String,
    /// Distance from the root; the root itself has depth 0.
    pub depth: usize,
    /// Files directly inside this directory, sorted by name.
    pub files: Vec<FileEntry>,
    /// Subdirectories that were not pruned, sorted by name.
    pub dirs: Vec<DirNode>,
}

impl DirNode {
    pub(crate) fn new(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            depth,
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// Every file under this node, in listing order: this directory's own
    /// files first, then each subdirectory depth-first.
    pub fn walk_files(&self) -> Vec<&FileEntry> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a FileEntry>) {
        out.extend(self.files.iter());
        for dir in &self.dirs {
            dir.collect_files(out);
        }
    }
}

/// The filtered tree of a project, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub root: DirNode,
}

impl Snapshot {
    pub fn file_count(&self) -> usize {
        self.root.walk_files().len()
    }
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct FlattenReport {
    /// Where the artifact was written.
    pub output_path: PathBuf,
    /// Number of START/END blocks written.
    pub files_written: usize,
    /// Display paths of files replaced by a diagnostic line.
    pub unreadable: Vec<String>,
}
