//! Installed-plugin metadata lookup and the output-schema version gate.
//!
//! The HipChat plugin changed its publisher fields in 0.1.8: older versions
//! read a single `jenkinsUrl`, newer ones `buildServerUrl` plus `sendAs`.
//! Which set to emit depends only on the version string the target server
//! reports for the plugin, so the choice is a pure function kept separate
//! from the translator.

use std::collections::HashMap;

use semver::Version;
use tracing::debug;

/// Name under which the build server reports the HipChat plugin.
pub const HIPCHAT_PLUGIN_NAME: &str = "Jenkins HipChat Plugin";

/// Source of installed-plugin metadata on the target server.
pub trait PluginRegistry {
    /// Version string reported for the named plugin, if installed.
    fn plugin_version(&self, plugin: &str) -> Option<String>;
}

/// Plugin registry backed by a static map, for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticPluginRegistry {
    versions: HashMap<String, String>,
}

impl StaticPluginRegistry {
    /// Create an empty registry (no plugins installed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin version.
    pub fn with_plugin(mut self, plugin: impl Into<String>, version: impl Into<String>) -> Self {
        self.versions.insert(plugin.into(), version.into());
        self
    }
}

impl PluginRegistry for StaticPluginRegistry {
    fn plugin_version(&self, plugin: &str) -> Option<String> {
        self.versions.get(plugin).cloned()
    }
}

/// Which publisher field set the installed plugin understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// `buildServerUrl` and `sendAs` (plugin at or above the baseline).
    Modern,
    /// Single legacy `jenkinsUrl` field.
    Legacy,
}

impl SchemaVariant {
    /// Pick the variant for a reported plugin version string.
    pub fn select(reported: &str, baseline: &Version) -> Self {
        let parsed = parse_lenient(reported);
        let variant = if parsed >= *baseline {
            Self::Modern
        } else {
            Self::Legacy
        };
        debug!(reported, version = %parsed, ?variant, "selected publisher schema");
        variant
    }
}

/// Parse a reported version string without insisting on strict semver.
///
/// Leading numeric dot-separated components are kept, missing components
/// are zero and anything unparseable compares as 0.0.0, so an unknown or
/// unreported plugin always falls back to the legacy schema.
fn parse_lenient(reported: &str) -> Version {
    let mut parts = reported.trim().split('.').map(|part| {
        let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse::<u64>().unwrap_or(0)
    });
    Version::new(
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}
