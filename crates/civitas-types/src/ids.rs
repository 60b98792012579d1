//! City identifiers.
//!
//! Cities are referred to by name on screen, but log records and external
//! collaborators (save files, the presentation layer) key them by
//! [`CityId`]. IDs use UUID v7 so they sort by founding time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique identifier for a city. Serializes as a bare UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct CityId(Uuid);

impl CityId {
    /// A fresh time-ordered identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// The underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CityId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for CityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for CityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
