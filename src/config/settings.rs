// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Persisted sound settings.

use serde::{Deserialize, Serialize};

fn default_linked() -> bool {
    true
}

/// User-facing sound preferences persisted across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundSettings {
    /// Keep the notification volume equal to the ring volume.
    /// Defaults to on when the setting has never been written.
    #[serde(default = "default_linked")]
    pub notifications_use_ring_volume: bool,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            notifications_use_ring_volume: true,
        }
    }
}

impl SoundSettings {
    /// Load settings from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
