//! Target address resolution.
//!
//! Turns a relative working path plus user arguments into Pants target
//! addresses. Nothing here touches the filesystem; whether an address
//! exists is for Pants to decide.

/// Separator between a path and a target name in a Pants address.
pub const SEPARATOR: char = ':';

/// Source root segment swapped out by [`test_root`].
pub const SOURCE_SEGMENT: &str = "src";

/// Test root segment swapped in by [`test_root`].
pub const TEST_SEGMENT: &str = "tests";

/// Addresses for `args` under `path`, one per argument.
///
/// An empty argument list yields the single wildcard address for `path`.
/// Order is preserved and duplicates are kept.
pub fn addresses<S: AsRef<str>>(path: &str, args: &[S]) -> Vec<String> {
    if args.is_empty() {
        return vec![wildcard(path)];
    }

    args.iter()
        .map(|arg| format!("{path}{SEPARATOR}{}", arg.as_ref()))
        .collect()
}

/// Target specifier for `args` under `path`, space-joined.
///
/// # Example
///
/// ```
/// use chaps::target::resolve;
///
/// assert_eq!(resolve("src/app", &[] as &[&str]), "src/app:");
/// assert_eq!(resolve("src/app", &["lib", "bin"]), "src/app:lib src/app:bin");
/// ```
pub fn resolve<S: AsRef<str>>(path: &str, args: &[S]) -> String {
    addresses(path, args).join(" ")
}

/// Every target defined directly at `path`.
pub fn wildcard(path: &str) -> String {
    format!("{path}{SEPARATOR}")
}

/// Every target at or below `path`.
pub fn recursive(path: &str) -> String {
    format!("{path}{SEPARATOR}{SEPARATOR}")
}

/// Guess the test directory matching a source directory.
///
/// Replaces the first occurrence of `src` with `tests` as plain text. This is
/// a heuristic for the common `src/...` / `tests/...` mirror layout and is
/// not path-aware: `docsrc/x` becomes `doctests/x`.
pub fn test_root(path: &str) -> String {
    path.replacen(SOURCE_SEGMENT, TEST_SEGMENT, 1)
}
