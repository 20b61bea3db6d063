//! Project root discovery and the relative working path.

use std::path::{Component, Path, PathBuf};

use crate::error::{ChapsError, Result};

/// Pants build files that mark a project root. Only regular files count, so
/// a Python package directory named `pants` is not mistaken for the root.
pub const PANTS_MARKERS: &[&str] = &["pants.toml", "pants.ini", "pants"];

/// Fallback root marker when no Pants marker exists above the start.
pub const VCS_MARKER: &str = ".git";

fn is_pants_root(dir: &Path) -> bool {
    PANTS_MARKERS.iter().any(|marker| dir.join(marker).is_file())
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. The closest directory holding one of the [`PANTS_MARKERS`] files
/// 2. The closest directory holding `.git` (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_pants_root(dir))
        .or_else(|| start.ancestors().find(|dir| dir.join(VCS_MARKER).exists()))
        .map(Path::to_path_buf)
}

/// Where chaps was invoked from, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    root: PathBuf,
    relative: String,
}

impl InvocationContext {
    /// Build a context from a root and a slash-separated relative path.
    pub fn new(root: impl Into<PathBuf>, relative: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            relative: relative.into(),
        }
    }

    /// Resolve the context for `cwd`.
    ///
    /// With `root_override` the given root is used as-is (after
    /// canonicalization) and `cwd` must lie inside it. Otherwise the root is
    /// discovered with [`find_project_root`].
    ///
    /// # Errors
    ///
    /// Returns `ProjectRootNotFound` if no marker exists above `cwd`,
    /// `OutsideProject` if `cwd` is not under the override, and
    /// `NonUtf8Path` if the relative path cannot be expressed as a string.
    pub fn discover(cwd: &Path, root_override: Option<&Path>) -> Result<Self> {
        let (cwd, root) = match root_override {
            Some(root) => (cwd.canonicalize()?, root.canonicalize()?),
            None => {
                let root = find_project_root(cwd).ok_or_else(|| {
                    ChapsError::ProjectRootNotFound {
                        start: cwd.to_path_buf(),
                    }
                })?;
                (cwd.to_path_buf(), root)
            }
        };

        let suffix = cwd
            .strip_prefix(&root)
            .map_err(|_| ChapsError::OutsideProject {
                cwd: cwd.clone(),
                root: root.clone(),
            })?;
        let relative = slash_path(suffix)?;

        tracing::debug!("Project root {}, relative path '{}'", root.display(), relative);

        Ok(Self { root, relative })
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The working directory relative to the root, `/`-separated.
    /// Empty at the root itself.
    pub fn relative(&self) -> &str {
        &self.relative
    }
}

/// Join the normal components of `path` with `/`, whatever the platform
/// separator is.
fn slash_path(path: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| ChapsError::NonUtf8Path {
                path: path.to_path_buf(),
            })?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_project_root_finds_pants_toml() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("src").join("foo");
        fs::create_dir_all(&subdir).unwrap();
        fs::write(temp.path().join("pants.toml"), "").unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_finds_pants_script() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("src");
        fs::create_dir_all(&subdir).unwrap();
        fs::write(temp.path().join("pants"), "#!/bin/sh\n").unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_finds_git_dir() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("src");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_prefers_closest_marker() {
        let temp = TempDir::new().unwrap();
        let inner = temp.path().join("nested").join("project");
        let subdir = inner.join("src");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::write(inner.join("pants.ini"), "").unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(inner));
    }

    #[test]
    fn find_project_root_skips_pants_package_dir() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("src/python/pants/backend");
        fs::create_dir_all(&subdir).unwrap();
        fs::write(temp.path().join("pants.toml"), "").unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(temp.path().to_path_buf()));

        let ctx = InvocationContext::discover(&subdir, None).unwrap();
        assert_eq!(ctx.relative(), "src/python/pants/backend");
    }

    #[test]
    fn find_project_root_prefers_pants_over_nested_git() {
        let temp = TempDir::new().unwrap();
        let vendored = temp.path().join("third_party").join("lib");
        let subdir = vendored.join("src");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(vendored.join(".git")).unwrap();
        fs::write(temp.path().join("pants.toml"), "").unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn discover_rejects_non_utf8_component() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pants.toml"), "").unwrap();
        let subdir = temp.path().join(OsStr::from_bytes(b"\xff")).join("pkg");
        fs::create_dir_all(&subdir).unwrap();

        let err = InvocationContext::discover(&subdir, None).unwrap_err();
        assert!(matches!(err, ChapsError::NonUtf8Path { .. }));
    }

    #[test]
    fn discover_builds_slash_relative_path() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("src").join("python").join("app");
        fs::create_dir_all(&subdir).unwrap();
        fs::write(temp.path().join("pants.toml"), "").unwrap();

        let ctx = InvocationContext::discover(&subdir, None).unwrap();
        assert_eq!(ctx.relative(), "src/python/app");
        assert_eq!(ctx.root(), temp.path());
    }

    #[test]
    fn discover_at_root_is_empty_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pants.toml"), "").unwrap();

        let ctx = InvocationContext::discover(temp.path(), None).unwrap();
        assert_eq!(ctx.relative(), "");
    }

    #[test]
    fn discover_with_override() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("src").join("foo");
        fs::create_dir_all(&subdir).unwrap();

        let ctx = InvocationContext::discover(&subdir, Some(temp.path())).unwrap();
        assert_eq!(ctx.relative(), "src/foo");
    }

    #[test]
    fn discover_outside_override_fails() {
        let root = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();

        let err = InvocationContext::discover(other.path(), Some(root.path())).unwrap_err();
        assert!(matches!(err, ChapsError::OutsideProject { .. }));
    }

    #[test]
    fn discover_missing_override_is_io_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = InvocationContext::discover(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, ChapsError::Io(_)));
    }

    #[test]
    fn slash_path_skips_non_normal_components() {
        let path = Path::new("./a/b");
        assert_eq!(slash_path(path).unwrap(), "a/b");
    }
}
