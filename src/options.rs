use std::collections::BTreeSet;
use std::path::PathBuf;

/// Directory names pruned from the walk by default.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    "venv",
    ".idea",
    ".vscode",
    "build",
    "dist",
];

/// File name suffixes excluded by default.
pub const DEFAULT_IGNORE_EXTENSIONS: &[&str] = &[
    ".pyc", ".exe", ".dll", ".so", ".zip", ".png", ".jpg", ".jpeg", ".ts", ".json",
];

pub const DEFAULT_OUTPUT_FILE: &str = "_project_context.txt";

pub const DEFAULT_TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// The two fixed exclusion sets applied during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRules {
    pub dirs: BTreeSet<String>,
    pub extensions: BTreeSet<String>,
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_IGNORE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl IgnoreRules {
    /// Exact name match against the directory set.
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Plain suffix match: `.json` matches `a.json` but not `abcjson`.
    pub fn excludes_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct FlattenOptions {
    pub root: PathBuf,
    pub rules: IgnoreRules,
    pub output_file: String,
    pub tool_name: String,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            rules: IgnoreRules::default(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
        }
    }
}

impl FlattenOptions {
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.rules.excludes_dir(name)
    }

    /// A file is left out of both sections when it is the artifact itself,
    /// the running tool, or carries an ignored suffix.
    pub fn excludes_file(&self, name: &str) -> bool {
        name == self.output_file || name == self.tool_name || self.rules.excludes_extension(name)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_file)
    }
}

#[derive(Debug, Default)]
pub struct FlattenBuilder {
    options: FlattenOptions,
}

impl FlattenBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FlattenOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn ignore_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.rules.dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
    pub fn ignore_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.rules.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
    pub fn output_file(mut self, name: impl Into<String>) -> Self {
        self.options.output_file = name.into();
        self
    }
    pub fn tool_name(mut self, name: impl Into<String>) -> Self {
        self.options.tool_name = name.into();
        self
    }
    pub fn build(self) -> FlattenOptions {
        self.options
    }
}
