//! Per-job notification fragment and the global key/value store.

use std::collections::HashMap;

use serde::Deserialize;

/// Per-job HipChat notification options.
///
/// All fields are optional. A present fragment is enabled unless `enabled`
/// is explicitly false. Event flags left unset are emitted as false, except
/// `start-notify` which is only written when explicitly given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HipChatConfig {
    /// General cut-off switch. Absent means enabled.
    pub enabled: Option<bool>,
    /// Single room to post messages to. Deprecated, use `rooms`.
    pub room: Option<String>,
    /// Rooms to post messages to, comma-joined in the output.
    pub rooms: Option<Vec<String>>,
    /// Post messages about the build start event.
    #[serde(rename = "start-notify")]
    pub start_notify: Option<bool>,
    /// Post messages about successful builds.
    #[serde(rename = "notify-success")]
    pub notify_success: Option<bool>,
    /// Post messages about aborted builds.
    #[serde(rename = "notify-aborted")]
    pub notify_aborted: Option<bool>,
    /// Post messages about builds set to NOT_BUILT.
    #[serde(rename = "notify-not-built")]
    pub notify_not_built: Option<bool>,
    /// Post messages about unstable builds.
    #[serde(rename = "notify-unstable")]
    pub notify_unstable: Option<bool>,
    /// Post messages about failed builds.
    #[serde(rename = "notify-failure")]
    pub notify_failure: Option<bool>,
    /// Post messages about builds recovering from unstable or failed.
    #[serde(rename = "notify-back-to-normal")]
    pub notify_back_to_normal: Option<bool>,
}

impl HipChatConfig {
    /// Whether XML should be generated for this fragment at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Sectioned global configuration store (ini-style lookups).
///
/// Holds the deployment-wide settings that are not part of any single job
/// definition, keyed by section name then option name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalConfig {
    #[serde(flatten)]
    sections: HashMap<String, HashMap<String, String>>,
}

impl GlobalConfig {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an option under a named section.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    /// Insert an option, creating the section on demand.
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_defaults_to_true() {
        let config = HipChatConfig::default();
        assert!(config.is_enabled());

        let config = HipChatConfig {
            enabled: Some(false),
            ..Default::default()
        };
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_deserialize_yaml_fragment() {
        let yaml = r#"
            rooms:
              - Dev Team
              - QA
            start-notify: true
            notify-failure: true
            notify-back-to-normal: false
        "#;
        let config: HipChatConfig = serde_yaml::from_str(yaml).unwrap();

        assert!(config.is_enabled());
        assert_eq!(
            config.rooms,
            Some(vec!["Dev Team".to_owned(), "QA".to_owned()])
        );
        assert_eq!(config.start_notify, Some(true));
        assert_eq!(config.notify_failure, Some(true));
        assert_eq!(config.notify_back_to_normal, Some(false));
        assert_eq!(config.notify_success, None);
    }

    #[test]
    fn test_global_config_lookup() {
        let mut global = GlobalConfig::new();
        global.set("hipchat", "authtoken", "secret");
        global.set("jenkins", "url", "https://jenkins.example.com/");

        assert_eq!(global.get("hipchat", "authtoken"), Some("secret"));
        assert_eq!(global.get("hipchat", "missing"), None);
        assert_eq!(global.get("nope", "authtoken"), None);
    }

    #[test]
    fn test_global_config_deserialize() {
        let yaml = r#"
            hipchat:
              authtoken: tok
              send-as: Jenkins
            jenkins:
              url: https://ci.example.com/
        "#;
        let global: GlobalConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(global.get("hipchat", "send-as"), Some("Jenkins"));
        assert_eq!(global.get("jenkins", "url"), Some("https://ci.example.com/"));
    }
}
