//! # Plugsync Core Plugin List Errors
//!
//! Defines [`PluginListError`], the error type for plugin list operations.
//! The only failure mode is an unparsable version string reaching a
//! semantic-version comparison; lookup misses are reported through
//! `Option`/`bool`/`0` returns, never as errors, and
//! [`sanitize`](crate::plugin_list::PluginList::sanitize) filters bad
//! versions out instead of failing.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginListError {
    /// A version string could not be parsed where a semantic-version
    /// comparison required it. The operation that hit it produced no
    /// partial result.
    #[error("invalid semantic version '{version}' for plugin '{plugin}': {source}")]
    InvalidVersion {
        plugin: String,
        version: String,
        #[source]
        source: semver::Error,
    },
}
