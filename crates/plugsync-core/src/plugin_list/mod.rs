//! # Plugsync Core Plugin Lists
//!
//! This module provides the value types a declarative plugin controller
//! diffs against actual state: named, semantically versioned plugin entries
//! grouped into ordered lists, plus the consolidation, sanitization,
//! comparison, and fingerprinting operations over them.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`entry`]**: Defines [`PluginEntry`], the immutable name + version
//!   pair all other operations are built from.
//! - **[`error`]**: Defines [`PluginListError`](error::PluginListError),
//!   raised when a semantic-version comparison meets an unparsable version.
//! - **[`list`]**: Defines [`PluginList`], the ordered entry sequence with
//!   the merge/sanitize/compare algorithms and the SHA-256 fingerprint.
//! - **[`map`]**: Defines [`PluginMap`], a keyed grouping of lists used to
//!   hold per-source desired state.
//!
//! Two version-parsing policies coexist deliberately: [`PluginList::sanitize`]
//! silently drops entries whose version does not parse, while the comparison
//! operations ([`PluginList::has_newer_version_of`],
//! [`PluginList::consolidated_concat`]) abort with an error. Callers wanting
//! malformed entries ignored rather than fatal must sanitize first.
pub mod entry;
pub mod error;
pub mod list;
pub mod map;

pub use entry::PluginEntry;
pub use list::PluginList;
pub use map::PluginMap;
