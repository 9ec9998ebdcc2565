//! Configuration module for hayrack
//!
//! Sections of options start from the compiled-in [`DEFAULTS`] and are
//! overridden from a settings file (`/etc/hayrack/hayrack.conf`, or the path in
//! `$HAYRACK_CONFIG`). Overrides replace whole sections: a section present in
//! the settings file keeps only the options listed there.
//!
//! # Example
//!
//! ```no_run
//! use hayrack::config::ConfigStore;
//!
//! let mut store = ConfigStore::new();
//! let config = store.get().expect("Failed to load config");
//! if let Some(port) = config.get("core", "zmq_bind_port") {
//!     println!("Bind port: {port}");
//! }
//! ```

pub mod configuration;
pub mod defaults;
pub mod provider;
pub mod section;
pub mod settings;
pub mod store;
pub mod value;

pub use configuration::Configuration;
pub use defaults::{DefaultTable, DEFAULTS, DEFAULT_CONFIG_FILE};
pub use provider::SectionProvider;
pub use section::Section;
pub use settings::SettingsFile;
pub use store::ConfigStore;
pub use value::Value;
