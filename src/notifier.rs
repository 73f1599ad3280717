//! The HipChat notification translator.
//!
//! Enabling notifications on a job touches two places in its XML: a job
//! property holding the default room, and a publisher entry carrying the
//! runtime notifier settings. The publisher also needs deployment-wide
//! details (auth token, server URL, send-as name) that no per-job fragment
//! carries, which is why the translator resolves credentials from the
//! global config store.

use semver::Version;
use tracing::warn;

use crate::config::{GlobalConfig, HipChatConfig};
use crate::credentials::Credentials;
use crate::error::{NotifierError, Result};
use crate::plugin::{HIPCHAT_PLUGIN_NAME, PluginRegistry, SchemaVariant};
use crate::xml::Element;

/// Element name of the per-job default-room property.
const JOB_PROPERTY_TAG: &str = "jenkins.plugins.hipchat.HipChatNotifier_-HipChatJobProperty";
/// Element name of the publisher entry.
const PUBLISHER_TAG: &str = "jenkins.plugins.hipchat.HipChatNotifier";

/// Translates per-job notification fragments into job XML.
///
/// Credentials are resolved from the global config on first use and cached
/// for the lifetime of the instance.
#[derive(Debug)]
pub struct HipChatNotifier {
    global: GlobalConfig,
    credentials: Option<Credentials>,
    baseline: Version,
}

impl HipChatNotifier {
    /// Create a notifier reading credentials from the given global config.
    pub fn new(global: GlobalConfig) -> Self {
        Self {
            global,
            credentials: None,
            // first plugin version reading buildServerUrl/sendAs
            baseline: Version::new(0, 1, 8),
        }
    }

    /// The cached credentials, if they have been loaded.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Credentials from the global config, loaded on first use.
    fn load_credentials(&mut self) -> Result<Credentials> {
        match &self.credentials {
            Some(creds) => Ok(creds.clone()),
            None => {
                let creds = Credentials::load(&self.global)?;
                self.credentials = Some(creds.clone());
                Ok(creds)
            }
        }
    }

    /// Generate the notification subtrees for one job.
    ///
    /// Does nothing when the fragment is absent or disabled. Appends one
    /// job-property node under `properties` and one notifier node under
    /// `publishers`, creating either section when missing; existing
    /// siblings are kept. On a format error the document is left
    /// untouched.
    pub fn generate(
        &mut self,
        config: Option<&HipChatConfig>,
        xml_parent: &mut Element,
        plugins: &dyn PluginRegistry,
    ) -> Result<()> {
        let Some(config) = config else {
            return Ok(());
        };
        if !config.is_enabled() {
            return Ok(());
        }

        let creds = self.load_credentials()?;

        // Resolve everything before touching the document so a malformed
        // fragment leaves it unchanged.
        let room_text = resolve_room(config)?;
        let fields = event_fields(config);

        let properties = xml_parent.child_or_create("properties");
        let property = properties.append_child(Element::new(JOB_PROPERTY_TAG));
        property.append_text_child("room", room_text.as_str());
        for (name, value) in &fields {
            property.append_text_child(*name, value.to_string());
        }

        let reported = plugins
            .plugin_version(HIPCHAT_PLUGIN_NAME)
            .unwrap_or_else(|| "0".to_owned());
        let variant = SchemaVariant::select(&reported, &self.baseline);

        let publishers = xml_parent.child_or_create("publishers");
        let publisher = publishers.append_child(Element::new(PUBLISHER_TAG));
        for (name, value) in &fields {
            publisher.append_text_child(*name, value.to_string());
        }
        match variant {
            SchemaVariant::Modern => {
                publisher.append_text_child("buildServerUrl", creds.server_url.as_str());
                publisher.append_text_child("sendAs", creds.send_as.as_str());
            }
            SchemaVariant::Legacy => {
                publisher.append_text_child("jenkinsUrl", creds.server_url.as_str());
            }
        }
        publisher.append_text_child("authToken", creds.auth_token.as_str());
        // The publisher's room is the plugin-level default; it mirrors the
        // job property so both stay in sync.
        publisher.append_text_child("room", room_text.as_str());

        Ok(())
    }
}

/// Comma-joined `rooms`, or the deprecated singular `room`.
fn resolve_room(config: &HipChatConfig) -> Result<String> {
    if let Some(rooms) = &config.rooms {
        return Ok(rooms.join(","));
    }
    if let Some(room) = &config.room {
        warn!("'room' is deprecated, please use 'rooms'");
        return Ok(room.clone());
    }
    Err(NotifierError::MissingRoom)
}

/// Resolved `(field name, value)` pairs for the event flags.
///
/// `start-notify` is only emitted when explicitly configured; the rest are
/// always emitted and default to false.
fn event_fields(config: &HipChatConfig) -> Vec<(&'static str, bool)> {
    let mut fields = Vec::with_capacity(7);
    if let Some(value) = config.start_notify {
        fields.push(("startNotification", value));
    }
    fields.push(("notifySuccess", config.notify_success.unwrap_or(false)));
    fields.push(("notifyAborted", config.notify_aborted.unwrap_or(false)));
    fields.push(("notifyNotBuilt", config.notify_not_built.unwrap_or(false)));
    fields.push(("notifyUnstable", config.notify_unstable.unwrap_or(false)));
    fields.push(("notifyFailure", config.notify_failure.unwrap_or(false)));
    fields.push((
        "notifyBackToNormal",
        config.notify_back_to_normal.unwrap_or(false),
    ));
    fields
}
