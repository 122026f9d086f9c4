//! version
//!
//! Version string reported by `burrow-client version` and the root help.

/// Package version from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit the binary was built from, when the build set
/// `BURROW_CLIENT_COMMIT`.
pub const COMMIT: Option<&str> = option_env!("BURROW_CLIENT_COMMIT");

/// Full version: `<version>` or `<version>+<commit>`.
///
/// # Example
///
/// ```
/// let version = burrow_client::version::full_version();
/// assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
/// ```
pub fn full_version() -> String {
    format_version(VERSION, COMMIT)
}

fn format_version(version: &str, commit: Option<&str>) -> String {
    match commit.filter(|c| !c.is_empty()) {
        Some(commit) => format!("{}+{}", version, short_commit(commit)),
        None => version.to_string(),
    }
}

fn short_commit(commit: &str) -> &str {
    commit.get(..8).unwrap_or(commit)
}
