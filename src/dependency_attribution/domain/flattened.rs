use super::Dependency;

/// An edge in a closure, plus whether its own dependencies were merged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyState {
    pub package: Dependency,
    pub processed: bool,
}

impl DependencyState {
    pub fn unprocessed(package: Dependency) -> Self {
        Self {
            package,
            processed: false,
        }
    }
}

/// Transitive closure computed for one root package
///
/// Never holds two entries with the same dependency name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFlattened {
    pub name: String,
    pub version: String,
    pub dependencies: Vec<DependencyState>,
}

impl PackageFlattened {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn contains(&self, dependency_name: &str) -> bool {
        self.dependencies
            .iter()
            .any(|d| d.package.name == dependency_name)
    }

    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(|d| d.package.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
