use std::path::{Path, PathBuf};

/// Maximum size of a single project document: 10MB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Source directory, relative to the root
pub const DEFAULT_PROJECTS_DIR: &str = "data/projects";

/// Output file, relative to the root
pub const DEFAULT_OUTPUT_FILE: &str = "data/search/search_index.json";

/// Resolved input and output locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPaths {
    pub projects_dir: PathBuf,
    pub output_file: PathBuf,
}

impl IndexPaths {
    /// Conventional layout under `root`
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::{Path, PathBuf};
    /// use project_search_index::utils::IndexPaths;
    ///
    /// let paths = IndexPaths::from_root(Path::new("/srv/site"));
    /// assert_eq!(paths.projects_dir, PathBuf::from("/srv/site/data/projects"));
    /// assert_eq!(paths.output_file, PathBuf::from("/srv/site/data/search/search_index.json"));
    /// ```
    pub fn from_root(root: &Path) -> Self {
        Self {
            projects_dir: root.join(DEFAULT_PROJECTS_DIR),
            output_file: root.join(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Conventional layout with optional overrides; relative overrides resolve against `root`
    pub fn with_overrides(
        root: &Path,
        projects_dir: Option<&Path>,
        output_file: Option<&Path>,
    ) -> Self {
        let defaults = Self::from_root(root);
        Self {
            projects_dir: projects_dir
                .map(|p| resolve_against(root, p))
                .unwrap_or(defaults.projects_dir),
            output_file: output_file.map(|p| resolve_against(root, p)).unwrap_or(defaults.output_file),
        }
    }
}

/// Join `path` onto `root` unless it is already absolute
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}
