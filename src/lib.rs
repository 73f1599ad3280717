//! HipChat notification XML generation for Jenkins-style job definitions.
//!
//! Translates a declarative per-job notification fragment into the two XML
//! subtrees the HipChat plugin reads: a job property holding the default
//! room and a publisher entry carrying the runtime notifier settings.
//! Which publisher fields are emitted depends on the plugin version the
//! target server reports.
//!
//! ## Core types
//!
//! - [`HipChatConfig`] - the per-job notification fragment
//! - [`GlobalConfig`] - sectioned global key/value store
//! - [`Credentials`] - auth token, server URL and send-as name
//! - [`HipChatNotifier`] - the translator
//! - [`PluginRegistry`] - installed-plugin metadata lookup
//! - [`SchemaVariant`] - version-gated choice of publisher fields
//! - [`Element`] - mutable XML tree the translator appends into
//!
//! ## Example
//!
//! ```
//! use hipchat_notif::{
//!     Element, GlobalConfig, HIPCHAT_PLUGIN_NAME, HipChatConfig, HipChatNotifier,
//!     StaticPluginRegistry,
//! };
//!
//! let mut global = GlobalConfig::new();
//! global.set("hipchat", "authtoken", "secret");
//! global.set("jenkins", "url", "https://ci.example.com/");
//!
//! let config = HipChatConfig {
//!     rooms: Some(vec!["Dev Team".into()]),
//!     notify_failure: Some(true),
//!     ..Default::default()
//! };
//!
//! let plugins = StaticPluginRegistry::new().with_plugin(HIPCHAT_PLUGIN_NAME, "0.1.9");
//! let mut job = Element::new("project");
//!
//! let mut notifier = HipChatNotifier::new(global);
//! notifier.generate(Some(&config), &mut job, &plugins)?;
//!
//! assert!(job.find_child("publishers").is_some());
//! # Ok::<(), hipchat_notif::NotifierError>(())
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod notifier;
pub mod plugin;
pub mod xml;

pub use config::{GlobalConfig, HipChatConfig};
pub use credentials::Credentials;
pub use error::{NotifierError, Result};
pub use notifier::HipChatNotifier;
pub use plugin::{HIPCHAT_PLUGIN_NAME, PluginRegistry, SchemaVariant, StaticPluginRegistry};
pub use xml::Element;
