//! Cache configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Lookup-table cache settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheSection {
    /// Distinct geometries kept before the cache is flushed
    #[serde(default = "defaults::max_entries")]
    pub max_entries: usize,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            max_entries: defaults::max_entries(),
        }
    }
}
