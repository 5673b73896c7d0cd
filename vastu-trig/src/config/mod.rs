//! Configuration loading for VastuTrig.
//!
//! Loads settings from a YAML file with sensible defaults. Every field is
//! optional; missing fields take the values below.
//!
//! ## Example YAML
//!
//! ```yaml
//! cache:
//!   max_entries: 20   # flush all tables once this many geometries are cached
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vastu_trig::{TrigConfig, TrigTableCache};
//!
//! // Load from default path (configs/config.yaml), or defaults if absent
//! let config = TrigConfig::load_default()?;
//! let cache = TrigTableCache::from_config(&config);
//! ```

mod cache;
mod defaults;
mod error;
mod trig;

pub use cache::CacheSection;
pub use error::ConfigLoadError;
pub use trig::TrigConfig;
