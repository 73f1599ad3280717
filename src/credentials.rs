//! Global HipChat credentials.
//!
//! The publisher configuration needs details that are not part of any
//! per-job fragment: the HipChat auth token, the build server URL and the
//! display name to send as. These live in the global config store and are
//! resolved once per notifier instance.

use tracing::error;

use crate::config::GlobalConfig;
use crate::error::{NotifierError, Result};

/// Resolved credential triple from the global config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// HipChat API auth token. Required, never blank.
    pub auth_token: String,
    /// Base URL of the build server, empty when unconfigured.
    pub server_url: String,
    /// Display name notifications are sent as, empty when unconfigured.
    pub send_as: String,
}

impl Credentials {
    /// Read the credential triple from the `[hipchat]` and `[jenkins]`
    /// sections of the global config.
    ///
    /// A missing or blank auth token is a fatal configuration error: the
    /// whole generation run cannot proceed without it, so the caller should
    /// stop rather than skip the job.
    pub fn load(global: &GlobalConfig) -> Result<Self> {
        let auth_token = match global.get("hipchat", "authtoken") {
            None => {
                error!("the global config needs a [hipchat] section containing authtoken");
                return Err(NotifierError::MissingAuthToken);
            }
            Some(token) if token.is_empty() => {
                error!("hipchat authtoken must not be a blank string");
                return Err(NotifierError::BlankAuthToken);
            }
            Some(token) => token.to_owned(),
        };

        Ok(Self {
            auth_token,
            server_url: global.get("jenkins", "url").unwrap_or_default().to_owned(),
            send_as: global.get("hipchat", "send-as").unwrap_or_default().to_owned(),
        })
    }
}
