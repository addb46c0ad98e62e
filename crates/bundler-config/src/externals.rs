//! Registry of modules the runtime host provides

/// Module names the host supplies to every bundle at runtime.
///
/// A module may not declare any of these as its own externals. Order is
/// preserved and used when reporting collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostExternals {
    names: Vec<String>,
}

impl HostExternals {
    pub fn with_builtins() -> Self {
        Self::from_names([
            "@americanexpress/one-app-ducks",
            "@americanexpress/one-app-router",
            "create-shared-react-context",
            "holocron",
            "holocron-module-route",
            "immutable",
            "prop-types",
            "react",
            "react-dom",
            "react-helmet",
            "react-redux",
            "redux",
            "redux-immutable",
            "reselect",
        ])
    }

    /// Build a registry from an ordered list; duplicates keep their first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    pub fn is_provided(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Registry names that also appear in `declared`, in registry order.
    pub fn collisions(&self, declared: &[&str]) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| declared.contains(&name.as_str()))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for HostExternals {
    fn default() -> Self {
        Self::with_builtins()
    }
}
