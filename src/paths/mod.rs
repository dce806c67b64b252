//! Lexical path helpers: resolution against a base, comparison and relative
//! paths. Nothing here touches the process working directory except to read
//! it when a path has no base to resolve against.

pub mod canonical;

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};
use tracing::debug;

pub use canonical::canonical_path;

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Rewrites `/` into the platform separator. A no-op on unix.
pub fn to_native(path: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace('/', MAIN_SEPARATOR_STR)
    }
}

/// Case-insensitive name comparison (full Unicode lowercase folding).
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}

fn component_eq(a: &Component<'_>, b: &Component<'_>, ignore_case: bool) -> bool {
    if ignore_case {
        names_match(&a.as_os_str().to_string_lossy(), &b.as_os_str().to_string_lossy())
    } else {
        a == b
    }
}

fn same_components(a: &Path, b: &Path) -> bool {
    let mut left = a.components();
    let mut right = b.components();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if component_eq(&x, &y, true) => {}
            _ => return false,
        }
    }
}

/// Drops `.`, folds `..` into the preceding segment and never climbs above
/// the root. Leading `..` on a relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::Prefix(p) => out.push(p.as_os_str()),
            Component::RootDir => out.push(MAIN_SEPARATOR_STR),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::ParentDir) | None => out.push(".."),
                _ => {}
            },
            Component::Normal(name) => out.push(name),
        }
    }
    out
}

fn absolute_normalized(base: &Path, path: &Path) -> PathBuf {
    let joined = base.join(path);
    dunce::simplified(&normalize(&joined)).to_path_buf()
}

/// Absolute, normalized form of `path` against the current working directory.
pub fn full_path(path: &str) -> PathBuf {
    let native = PathBuf::from(to_native(path));
    if native.is_absolute() {
        return dunce::simplified(&normalize(&native)).to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => absolute_normalized(&cwd, &native),
        Err(e) => {
            debug!(error = %e, "working directory unavailable, normalizing relative path");
            normalize(&native)
        }
    }
}

/// Resolves `path` against `base_path`.
///
/// Returns `None` for a blank `path`. A blank `base_path` only converts
/// separators and leaves the path relative.
pub fn resolve_full_path(path: &str, base_path: &str) -> Option<PathBuf> {
    if is_blank(path) {
        return None;
    }
    if is_blank(base_path) {
        return Some(PathBuf::from(to_native(path)));
    }
    let base = full_path(base_path);
    Some(absolute_normalized(&base, Path::new(&to_native(path))))
}

/// True when both paths name the same location, ignoring case.
pub fn paths_equal(path1: &str, path2: &str) -> bool {
    if is_blank(path1) || is_blank(path2) {
        return false;
    }
    same_components(&full_path(path1), &full_path(path2))
}

pub fn path_has_file_name(path: &str, file_name: &str) -> bool {
    if is_blank(path) || is_blank(file_name) {
        return false;
    }
    let native = to_native(path);
    // "dir/" names a directory, it has no file name
    if native.ends_with(MAIN_SEPARATOR) {
        return false;
    }
    Path::new(&native)
        .file_name()
        .map(|n| names_match(&n.to_string_lossy(), file_name))
        .unwrap_or(false)
}

/// True when `directory` is the immediate parent of `path`. Ancestors further
/// up do not count.
pub fn is_in_directory(path: &str, directory: &str) -> bool {
    if is_blank(path) || is_blank(directory) {
        return false;
    }
    let native = to_native(path);
    match Path::new(&native).parent() {
        Some(parent) => same_components(parent, Path::new(&to_native(directory))),
        None => false,
    }
}

/// Path from `base_path` to `full_path`, or `full_path` itself when no
/// relative form applies.
///
/// A `base_path` without a trailing separator is treated as a file, so its
/// parent is the base, unless it exists on disk as a directory. With
/// `only_local`, results that climb out of the base are rejected and
/// `full_path` is returned instead.
pub fn relative_path(base_path: &str, full_path: &str, only_local: bool) -> String {
    if is_blank(base_path) || is_blank(full_path) {
        return full_path.to_string();
    }

    let mut base = to_native(base_path);
    if Path::new(&base).is_dir() && !base.ends_with(MAIN_SEPARATOR) {
        base.push(MAIN_SEPARATOR);
    }
    let base_full = self::full_path(&base);
    let base_dir = if base.ends_with(MAIN_SEPARATOR) {
        base_full
    } else {
        base_full.parent().map(Path::to_path_buf).unwrap_or(base_full)
    };
    let target = self::full_path(full_path);

    let Some(relative) = diff_paths(&base_dir, &target) else {
        debug!(base = %base_dir.display(), target = %target.display(), "no common root");
        return full_path.to_string();
    };
    if only_local && matches!(relative.components().next(), Some(Component::ParentDir)) {
        debug!(base = %base_dir.display(), target = %target.display(), "relative path escapes base");
        return full_path.to_string();
    }
    relative.to_string_lossy().into_owned()
}

fn diff_paths(from: &Path, to: &Path) -> Option<PathBuf> {
    let ignore_case = cfg!(windows);
    let mut from_iter = from.components().peekable();
    let mut to_iter = to.components().peekable();

    match (from_iter.peek(), to_iter.peek()) {
        (Some(a), Some(b)) if component_eq(a, b, ignore_case) => {}
        _ => return None,
    }
    while let (Some(a), Some(b)) = (from_iter.peek(), to_iter.peek()) {
        if !component_eq(a, b, ignore_case) {
            break;
        }
        from_iter.next();
        to_iter.next();
    }

    let mut result = PathBuf::new();
    for c in from_iter {
        if !matches!(c, Component::Normal(_)) {
            return None;
        }
        result.push("..");
    }
    for c in to_iter {
        if !matches!(c, Component::Normal(_)) {
            return None;
        }
        result.push(c);
    }
    Some(result)
}


#[cfg(all(test, windows))]
mod windows_tests {
    use super::*;

    #[test]
    fn relative_path_across_drives_returns_full_path() {
        assert_eq!(relative_path("C:\\base\\", "D:\\other\\f.txt", true), "D:\\other\\f.txt");
        assert_eq!(relative_path("C:\\base\\", "D:\\other\\f.txt", false), "D:\\other\\f.txt");
    }

    #[test]
    fn relative_path_ignores_case_and_forward_slashes() {
        assert_eq!(relative_path("c:/Base/", "C:\\base\\Sub\\f.txt", true), "Sub\\f.txt");
    }
}
