//! Default value functions for serde deserialization.

pub fn max_entries() -> usize {
    crate::lut::DEFAULT_MAX_ENTRIES
}
