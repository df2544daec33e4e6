//! Lexical path normalization
//!
//! Chapter lookups compare paths for equality, so `book/./api/../api/mod.md`
//! and `book/api/mod.md` must collapse to the same value. Nothing here touches
//! the filesystem: symlinks are not resolved.

use std::path::{Component, Path, PathBuf};

/// Remove `.` components and fold `..` into its parent.
///
/// A `..` that would climb above the root (or above the first component of a
/// relative path) is kept, matching how the OS would treat it.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    out.iter().map(|c| c.as_os_str()).collect()
}
