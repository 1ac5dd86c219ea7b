//! # Projcat
//!
//! `projcat` flattens a project directory into one text artifact: an indented
//! listing of the directory structure, followed by the contents of every file
//! that survives the ignore rules, each wrapped in START/END markers.
//!
//! Directories named in the ignore set are pruned before they are descended
//! into. Files are skipped when their name ends with an ignored suffix, or
//! when they are the artifact itself or the running tool. A file that cannot
//! be read as UTF-8 text is replaced by a one-line diagnostic; the run carries
//! on.
//!
//! # Features
//!
//! - `logging` (default): debug and warning output via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use projcat::{FlattenBuilder, flatten};
//!
//! let options = FlattenBuilder::new(".")
//!     .ignore_dirs(["target", ".git"])
//!     .ignore_extensions([".lock"])
//!     .build();
//!
//! let report = flatten(&options).expect("Failed to flatten project");
//! println!("Wrote {} files to {}", report.files_written, report.output_path.display());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{flatten, read_file_content, scan};
pub use error::FlattenError;
pub use options::{
    DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_EXTENSIONS, DEFAULT_OUTPUT_FILE, DEFAULT_TOOL_NAME,
    FlattenBuilder, FlattenOptions, IgnoreRules,
};
pub use types::{DirNode, FileContent, FileEntry, FlattenReport, Snapshot};
