pub mod plugin_list;

// Re-export key public types for easier use by the controller and tests
pub use plugin_list::{PluginEntry, PluginList, PluginMap};
pub use plugin_list::error::PluginListError;
