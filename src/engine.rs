use crate::error::FlattenError;
use crate::options::FlattenOptions;
use crate::output;
use crate::tree::{WalkEntry, build_tree_from_entries};
use crate::types::{FileContent, FlattenReport, Snapshot};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &FlattenOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let filter = options.clone();
        builder.filter_entry(move |entry| keep_entry(&filter, entry));
        Self {
            inner: builder.build(),
        }
    }
    fn collect_entries(self) -> Vec<WalkEntry> {
        let mut entries = Vec::new();
        let mut unlisted: Vec<PathBuf> = Vec::new();
        for result in self.inner {
            match result {
                Ok(entry) => entries.extend(classify(&entry)),
                Err(e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    unlisted.extend(error_path(&e).map(Path::to_path_buf));
                }
            }
        }
        // A directory that could not be listed gets no line of its own.
        entries.retain(|entry| !(entry.is_dir && unlisted.contains(&entry.path)));
        entries
    }
}
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}
fn keep_entry(options: &FlattenOptions, entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if entry.file_type().is_some_and(|t| t.is_dir()) {
        let keep = !options.excludes_dir(&name);
        #[cfg(feature = "logging")]
        if !keep {
            tracing::debug!("Pruning ignored directory {}", entry.path().display());
        }
        keep
    } else {
        !options.excludes_file(&name)
    }
}
fn classify(entry: &DirEntry) -> Option<WalkEntry> {
    if entry.depth() == 0 {
        return None;
    }
    let file_type = entry.file_type()?;
    let is_dir = if file_type.is_dir() {
        true
    } else if file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir()) {
        false
    } else {
        #[cfg(feature = "logging")]
        tracing::debug!("Skipping non-regular entry {}", entry.path().display());
        return None;
    };
    Some(WalkEntry {
        path: entry.path().to_path_buf(),
        is_dir,
    })
}
pub fn read_file_content(path: &Path) -> FileContent {
    fs::read_to_string(path)
}
pub fn scan(options: &FlattenOptions) -> Result<Snapshot, FlattenError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Scanning root: {}", options.root.display());
    fs::read_dir(&options.root).map_err(|e| FlattenError::io(&options.root, e))?;
    let entries = Walker::new(options).collect_entries();
    let root = build_tree_from_entries(&options.root, &entries)?;
    Ok(Snapshot { root })
}
pub fn flatten(options: &FlattenOptions) -> Result<FlattenReport, FlattenError> {
    let output_path = options.output_path();
    let file = File::create(&output_path).map_err(|e| FlattenError::io(&output_path, e))?;
    let mut out = BufWriter::new(file);
    let snapshot = scan(options)?;
    let unreadable = output::write_artifact(&mut out, &snapshot)
        .map_err(|e| FlattenError::io(&output_path, e))?;
    out.flush().map_err(|e| FlattenError::io(&output_path, e))?;
    #[cfg(feature = "logging")]
    for path in &unreadable {
        tracing::warn!("Could not read {}", path);
    }
    let files_written = snapshot.file_count() - unreadable.len();
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Wrote {} file blocks to {}",
        files_written,
        output_path.display()
    );
    Ok(FlattenReport {
        output_path,
        files_written,
        unreadable,
    })
}
