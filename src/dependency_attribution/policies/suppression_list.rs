use crate::shared::error::FilterError;
use crate::shared::Result;

/// A `name@version` finding that has been reviewed and accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressedPackage {
    pub name: String,
    pub version: String,
    pub reason: Option<String>,
}

impl SuppressedPackage {
    /// Parses `name@version`, keeping a leading `@scope/` intact
    ///
    /// # Errors
    /// Returns a validation error when either the name or the version is empty
    pub fn parse(id: &str, reason: Option<String>) -> Result<Self> {
        let id = id.trim();
        // skip the first byte so a scope's leading '@' is never the separator
        let split = id.get(1..).and_then(|s| s.rfind('@')).map(|i| i + 1);

        let (name, version) = match split {
            Some(i) => (&id[..i], &id[i + 1..]),
            None => (id, ""),
        };

        if name.is_empty() || version.is_empty() {
            return Err(FilterError::Validation {
                message: format!(
                    "suppressed package '{}' must have the form name@version",
                    id
                ),
            }
            .into());
        }

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            reason,
        })
    }

    fn matches(&self, name: &str, version: &str) -> bool {
        self.name == name && self.version == version
    }
}

/// SuppressionList policy: exact `name@version` findings dropped before any
/// attribution takes place
#[derive(Debug, Clone, Default)]
pub struct SuppressionList {
    entries: Vec<SuppressedPackage>,
}

impl SuppressionList {
    /// Entries shipped with the tool. None are currently accepted; deployments
    /// add their own through the config file.
    const BUILTIN: &'static [&'static str] = &[];

    /// Creates the list with the built-in entries only
    pub fn builtin() -> Self {
        let entries = Self::BUILTIN
            .iter()
            .filter_map(|id| SuppressedPackage::parse(id, None).ok())
            .collect();
        Self { entries }
    }

    /// Adds entries on top of the current list
    pub fn extend(mut self, extra: impl IntoIterator<Item = SuppressedPackage>) -> Self {
        for entry in extra {
            if !self.is_suppressed(&entry.name, &entry.version) {
                self.entries.push(entry);
            }
        }
        self
    }

    pub fn is_suppressed(&self, name: &str, version: &str) -> bool {
        self.find(name, version).is_some()
    }

    pub fn find(&self, name: &str, version: &str) -> Option<&SuppressedPackage> {
        self.entries.iter().find(|e| e.matches(name, version))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
