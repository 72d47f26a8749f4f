use std::fmt;
use serde::{Deserialize, Serialize};

/// A single requested or installed plugin: a name and a version string.
///
/// The version is expected, by convention, to be a semantic version
/// (`MAJOR.MINOR.PATCH[-prerelease][+build]`). No normalization is applied
/// here; a non-conforming string is dropped by
/// [`PluginList::sanitize`](crate::plugin_list::PluginList::sanitize) or
/// turns a comparison fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry {
    /// Plugin name; identity for "same plugin" comparisons
    pub name: String,

    /// Version string; together with the name it defines an exact match
    pub version: String,
}

impl PluginEntry {
    /// Create a new plugin entry
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    /// Whether this entry names the same plugin as `other`, any version.
    pub fn same_plugin_as(&self, other: &PluginEntry) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for PluginEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
