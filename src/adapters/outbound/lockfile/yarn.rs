use super::commit::try_extract_commit;
use crate::dependency_attribution::domain::{
    sort_packages, Dependency, LockfileKind, PackageDetails,
};
use crate::ports::outbound::LockfileParser;
use crate::shared::regex_cache::{capture, is_match};
use crate::shared::Result;

const VERSION_LINE: &str = r#"^ {2}version:? "?([\w\-.]+)"?$"#;
const RESOLUTION_LINE: &str = r#"^ {2}(?:resolution:|resolved) "([^ '"]+)"$"#;
const DEPENDENCIES_HEADER: &str = r"^  dependencies:$";

/// Yarn berry lockfiles open with a metadata block that is not a package
const METADATA_HEADER: &str = "__metadata:";

/// YarnLockParser adapter for `yarn.lock` (classic v1 and berry)
///
/// The format is line oriented: every package is a block opened by an
/// unindented header line and followed by indented fields.
pub struct YarnLockParser;

impl YarnLockParser {
    pub fn new() -> Self {
        Self
    }

    /// Splits the file into per-package blocks, dropping blank and comment lines
    fn group_lines(content: &str) -> Vec<Vec<&str>> {
        let mut groups = Vec::new();
        let mut group: Vec<&str> = Vec::new();

        for line in content.lines() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            if !line.starts_with(' ') && !group.is_empty() {
                groups.push(std::mem::take(&mut group));
            }
            group.push(line);
        }

        if !group.is_empty() {
            groups.push(group);
        }
        groups
    }

    /// `"@scope/name@^1.0.0", "@scope/name@^1.1.0":` -> `@scope/name`
    fn extract_name(header: &str) -> String {
        let header = header.strip_prefix('"').unwrap_or(header);

        match header.strip_prefix('@') {
            Some(scoped) => format!("@{}", scoped.split('@').next().unwrap_or_default()),
            None => header.split('@').next().unwrap_or_default().to_string(),
        }
    }

    fn first_capture(group: &[&str], pattern: &str) -> Option<String> {
        group.iter().find_map(|line| capture(pattern, line, 1))
    }

    fn extract_dependencies(group: &[&str]) -> Vec<Dependency> {
        let Some(start) = group
            .iter()
            .position(|line| is_match(DEPENDENCIES_HEADER, line))
        else {
            return Vec::new();
        };

        group[start + 1..]
            .iter()
            .take_while(|line| line.starts_with("    "))
            .filter_map(|line| {
                let parts: Vec<&str> = line.trim().split(' ').collect();
                let [name, version] = parts.as_slice() else {
                    return None;
                };
                let name = name
                    .trim_end_matches([':', '"'])
                    .trim_start_matches('"');
                Some(Dependency::new(name, version.trim_matches('"')))
            })
            .collect()
    }

    fn parse_group(group: &[&str]) -> PackageDetails {
        let name = Self::extract_name(group[0]);
        let version = Self::first_capture(group, VERSION_LINE).unwrap_or_default();
        let resolution = Self::first_capture(group, RESOLUTION_LINE).unwrap_or_default();

        if version.is_empty() {
            tracing::warn!(package = %name, "could not determine version in yarn.lock");
        }

        PackageDetails::new(name, version)
            .with_commit(try_extract_commit(&resolution))
            .with_dependencies(Self::extract_dependencies(group))
    }
}

impl Default for YarnLockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileParser for YarnLockParser {
    fn kind(&self) -> LockfileKind {
        LockfileKind::Yarn
    }

    fn parse(&self, content: &str) -> Result<Vec<PackageDetails>> {
        let mut packages: Vec<PackageDetails> = Self::group_lines(content)
            .iter()
            .filter(|group| group[0] != METADATA_HEADER)
            .map(|group| Self::parse_group(group))
            .collect();

        sort_packages(&mut packages);
        tracing::debug!(packages = packages.len(), "parsed yarn.lock");
        Ok(packages)
    }
}
