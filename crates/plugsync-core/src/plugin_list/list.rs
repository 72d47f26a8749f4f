use std::cmp::Ordering;
use std::fmt;
use semver::Version;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::plugin_list::entry::PluginEntry;
use crate::plugin_list::error::PluginListError;

/// An ordered list of plugin entries.
///
/// Insertion order is preserved; it carries no correctness meaning but keeps
/// [`hash`](PluginList::hash) and [`Display`](fmt::Display) deterministic.
/// No invariant holds on construction: a freshly built list may contain
/// duplicate names or malformed versions until [`sanitize`](PluginList::sanitize)
/// is applied, and callers must treat an unsanitized list as raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginList(Vec<PluginEntry>);

impl PluginList {
    /// Create an empty plugin list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginEntry> {
        self.0.iter()
    }

    /// Append an entry. This is the insertion path for genuinely new
    /// plugins; [`update`](PluginList::update) never appends.
    pub fn push(&mut self, entry: PluginEntry) {
        self.0.push(entry);
    }

    /// Deterministic fingerprint over the list's current order: the
    /// lowercase hex SHA-256 digest of each entry's name immediately
    /// followed by its version, no separators.
    ///
    /// A cheap change signal for "did desired state move since the last
    /// reconciliation", not an integrity guarantee.
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        for plugin in &self.0 {
            hasher.update(plugin.name.as_bytes());
            hasher.update(plugin.version.as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }

    /// True if the list contains the same plugin in the exact or a
    /// different version.
    pub fn has_some_version_of(&self, plugin: &PluginEntry) -> bool {
        self.0.iter().any(|listed| listed.same_plugin_as(plugin))
    }

    /// True if the list contains the same plugin in the same version.
    /// String equality on both fields: `1.2.3` and `1.2.3+build` differ.
    pub fn has_exact_version_of(&self, plugin: &PluginEntry) -> bool {
        self.0
            .iter()
            .any(|listed| listed.same_plugin_as(plugin) && listed.version == plugin.version)
    }

    /// First entry naming the same plugin, regardless of version.
    pub fn get_installed_version_of(&self, plugin: &PluginEntry) -> Option<&PluginEntry> {
        self.0.iter().find(|listed| listed.same_plugin_as(plugin))
    }

    /// Number of entries naming the same plugin. Expected to be 0 or 1
    /// after sanitization, but defined for any list.
    pub fn versions_of(&self, plugin: &PluginEntry) -> usize {
        self.0
            .iter()
            .filter(|listed| listed.same_plugin_as(plugin))
            .count()
    }

    /// True if the list contains the same plugin in a strictly newer
    /// version under semantic-version precedence (build metadata does not
    /// order versions).
    ///
    /// Any unparsable version, listed or queried, aborts the whole call
    /// with [`PluginListError::InvalidVersion`]; offending entries are
    /// never skipped.
    pub fn has_newer_version_of(&self, plugin: &PluginEntry) -> Result<bool, PluginListError> {
        for listed in &self.0 {
            if !listed.same_plugin_as(plugin) {
                continue;
            }

            let listed_version = parse_version(listed)?;
            let requested_version = parse_version(plugin)?;

            if listed_version.cmp_precedence(&requested_version) == Ordering::Greater {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Set the version of the first entry naming the same plugin to
    /// `plugin.version`, in place. No-op when no entry matches.
    pub fn update(&mut self, plugin: &PluginEntry) {
        if let Some(listed) = self
            .0
            .iter_mut()
            .find(|listed| listed.name == plugin.name)
        {
            listed.version = plugin.version.clone();
        }
    }

    /// Produce a new list holding, per plugin name, the first entry (in
    /// original order) whose version parses as a semantic version.
    ///
    /// Entries with malformed versions are silently excluded rather than
    /// reported; sanitization is the lenient counterpart to the strict
    /// comparison operations. The receiver is never mutated.
    pub fn sanitize(&self) -> PluginList {
        let mut sanitized = PluginList::new();
        for plugin in &self.0 {
            if Version::parse(&plugin.version).is_err() {
                log::debug!("dropping plugin entry with malformed version: {plugin}");
                continue;
            }
            if !sanitized.has_some_version_of(plugin) {
                sanitized.push(plugin.clone());
            }
        }
        sanitized
    }

    /// Fold `incoming` into a fresh list, keeping the highest requested
    /// version per plugin name and collapsing duplicates.
    ///
    /// The receiver's own entries are NOT part of the output: the result is
    /// built solely from `incoming`, in order. This asymmetry matches the
    /// long-standing behavior callers depend on, but a "concat" that never
    /// contains the receiver's starting state is a likely latent defect
    /// rather than deliberate design.
    ///
    /// Per incoming entry: first sighting of a name is appended; an entry
    /// older than the accumulated version, or identical to it, is skipped;
    /// otherwise the accumulated entry is overwritten in place. Any version
    /// that fails semantic-version parsing aborts the whole call with
    /// [`PluginListError::InvalidVersion`] and no partial result; callers
    /// wanting malformed entries ignored must [`sanitize`](PluginList::sanitize)
    /// first.
    pub fn consolidated_concat(&self, incoming: &PluginList) -> Result<PluginList, PluginListError> {
        let mut consolidated = PluginList::new();

        for plugin in &incoming.0 {
            // new plugin
            if !consolidated.has_some_version_of(plugin) {
                log::trace!("consolidation: appending first sighting of {plugin}");
                consolidated.push(plugin.clone());
                continue;
            }

            // newer version already accumulated
            if consolidated.has_newer_version_of(plugin)? {
                log::trace!("consolidation: skipping {plugin}, newer version already accumulated");
                continue;
            }

            // duplicate entry
            if consolidated.has_exact_version_of(plugin) {
                log::trace!("consolidation: skipping duplicate {plugin}");
                continue;
            }

            // some version is accumulated, but it is neither newer nor the
            // same string: must be older or equal under precedence
            log::trace!("consolidation: overwriting accumulated version with {plugin}");
            consolidated.update(plugin);
        }
        Ok(consolidated)
    }
}

/// Strict parse for the comparison paths: a failure is surfaced to the
/// caller, carrying the offending entry. `sanitize` intentionally does not
/// go through here.
fn parse_version(plugin: &PluginEntry) -> Result<Version, PluginListError> {
    Version::parse(&plugin.version).map_err(|source| PluginListError::InvalidVersion {
        plugin: plugin.name.clone(),
        version: plugin.version.clone(),
        source,
    })
}

impl fmt::Display for PluginList {
    /// Renders `"name version"` pairs joined by commas, in sequence order.
    /// Diagnostics only; there is no parsing contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(|plugin| plugin.to_string()).collect();
        write!(f, "{}", rendered.join(","))
    }
}

impl From<Vec<PluginEntry>> for PluginList {
    fn from(entries: Vec<PluginEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<PluginEntry> for PluginList {
    fn from_iter<I: IntoIterator<Item = PluginEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PluginList {
    type Item = PluginEntry;
    type IntoIter = std::vec::IntoIter<PluginEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PluginList {
    type Item = &'a PluginEntry;
    type IntoIter = std::slice::Iter<'a, PluginEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
