use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::plugin_list::list::PluginList;

/// A keyed grouping of plugin lists, e.g. one list of requested plugins per
/// configuration source. A thin container: no behavior beyond lookup.
///
/// Backed by a `BTreeMap` so iteration order is deterministic when a whole
/// map is logged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginMap(BTreeMap<String, PluginList>);

impl PluginMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a list under `key`, returning the previously stored list if
    /// the key was already present.
    pub fn insert(&mut self, key: &str, list: PluginList) -> Option<PluginList> {
        self.0.insert(key.to_string(), list)
    }

    pub fn get(&self, key: &str) -> Option<&PluginList> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PluginList> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PluginList)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
