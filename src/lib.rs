pub mod config;
pub mod errors;
pub mod logging;
pub mod paths;
pub mod resolver;
pub mod text;

#[cfg(test)]
mod tests;

pub use crate::config::{Config, FileNames};
pub use crate::errors::{PathError, PathResult};
pub use crate::paths::{
    canonical_path, full_path, is_in_directory, path_has_file_name, paths_equal, relative_path,
    resolve_full_path,
};
pub use crate::resolver::PathResolver;
pub use crate::text::{open_read, read_file_text, read_file_text_with, ChardetDetector, CharsetDetector};
