/// TrustedRoots policy naming the packages whose transitive dependencies are
/// not held against a plugin author
///
/// These are the Grafana front-end SDK packages. A plugin cannot choose what
/// they pull in, so findings reachable only through them are attributed
/// upstream instead of being reported against the plugin.
///
/// The list is fixed.
pub struct TrustedRoots;

impl TrustedRoots {
    /// Trusted root names, sorted
    const NAMES: &'static [&'static str] = &[
        "@grafana/data",
        "@grafana/e2e",
        "@grafana/runtime",
        "@grafana/toolkit",
        "@grafana/ui",
    ];

    pub fn names() -> &'static [&'static str] {
        Self::NAMES
    }

    pub fn is_trusted(name: &str) -> bool {
        Self::NAMES.contains(&name)
    }
}
