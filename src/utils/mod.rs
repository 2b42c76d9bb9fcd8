pub mod environment;
pub mod paths;

pub use environment::get_working_dir;
pub use paths::{
    DEFAULT_OUTPUT_FILE, DEFAULT_PROJECTS_DIR, IndexPaths, MAX_FILE_SIZE_BYTES, resolve_against,
};
