//! VCS commit recovery shared by all lockfile dialects.
//!
//! A resolution URL or version string may pin a git ref instead of a registry
//! version. When a ref is recoverable it becomes part of the package identity,
//! so two edges pinned to the same commit dedup even when their declared
//! version strings differ.

use crate::shared::regex_cache::capture;
use url::Url;

/// Patterns tried in order; group 1 is the commit
const COMMIT_PATTERNS: &[&str] = &[
    // git://, ssh://, git+ssh://, git+https://
    r"(?:^|.+@)(?:git(?:\+(?:ssh|https))?|ssh)://.+#(\w+)$",
    // https://....git#ref
    r"(?:^|.+@)https://.+\.git#(\w+)$",
    CODELOAD_TARBALL,
    r".+#commit[:=](\w+)$",
    // github:, gitlab:, bitbucket: shorthand
    r"^(?:github|gitlab|bitbucket):.+#(\w+)$",
];

/// GitHub tarball download URL; group 1 is the commit
pub const CODELOAD_TARBALL: &str =
    r"https://codeload\.github\.com(?:/[\w.\-]+){2}/tar\.gz/(\w+)$";

const GIT_REPO_HOSTS: &[&str] = &["bitbucket.org", "github.com", "gitlab.com"];

/// Recovers the commit a resolution or version string is pinned to, if any
pub fn try_extract_commit(resolution: &str) -> Option<String> {
    if resolution.is_empty() {
        return None;
    }

    COMMIT_PATTERNS
        .iter()
        .find_map(|pattern| capture(pattern, resolution, 1))
        .or_else(|| commit_from_repo_url(resolution))
}

/// Hosted-repo URLs carry the ref in `?ref=` or, failing that, the fragment
fn commit_from_repo_url(resolution: &str) -> Option<String> {
    let url = Url::parse(resolution).ok()?;
    if !GIT_REPO_HOSTS.contains(&url.host_str()?) {
        return None;
    }

    if let Some((_, reference)) = url.query_pairs().find(|(key, _)| key == "ref") {
        return non_empty(reference.into_owned());
    }

    let fragment = url.fragment()?;
    let fragment = urlencoding::decode(fragment)
        .map(|f| f.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    non_empty(fragment)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
