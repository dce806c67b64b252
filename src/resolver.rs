use crate::{
    config::{Config, FileNames},
    errors::PathResult,
    paths, text,
};
use encoding_rs::Encoding;
use std::path::{Path, PathBuf};

/// Single handle a host can keep around: the configured file names plus every
/// path helper. Holds no other state; cloning and sharing across threads is
/// free.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    files: FileNames,
}

impl PathResolver {
    pub fn new(files: FileNames) -> Self { Self { files } }

    /// Validates `cfg` first, so blank or nested file names are rejected here
    /// instead of making the file-name checks silently never match.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        cfg.validate()?;
        Ok(Self::new(cfg.files.clone()))
    }

    pub fn file_names(&self) -> &FileNames { &self.files }

    pub fn is_settings_file(&self, path: &str) -> bool {
        paths::path_has_file_name(path, &self.files.settings_filename)
    }

    pub fn is_karma_config_file(&self, path: &str) -> bool {
        paths::path_has_file_name(path, &self.files.karma_config_filename)
    }

    pub fn resolve_full_path(&self, path: &str, base_path: &str) -> Option<PathBuf> {
        paths::resolve_full_path(path, base_path)
    }

    pub fn paths_equal(&self, path1: &str, path2: &str) -> bool { paths::paths_equal(path1, path2) }

    pub fn path_has_file_name(&self, path: &str, file_name: &str) -> bool {
        paths::path_has_file_name(path, file_name)
    }

    pub fn is_in_directory(&self, path: &str, directory: &str) -> bool {
        paths::is_in_directory(path, directory)
    }

    pub fn relative_path(&self, base_path: &str, full_path: &str, only_local: bool) -> String {
        paths::relative_path(base_path, full_path, only_local)
    }

    pub fn canonical_path(&self, path: &str) -> PathResult<PathBuf> { paths::canonical_path(path) }

    pub fn read_file_text(&self, path: impl AsRef<Path>, default_encoding: Option<&'static Encoding>) -> PathResult<String> {
        text::read_file_text(path, default_encoding)
    }
}
