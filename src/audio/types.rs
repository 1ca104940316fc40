// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Core audio type definitions for channels, ringer modes, and events.

use serde::{Deserialize, Serialize};

/// One independently adjustable audio output level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Incoming-call ringer. The primary, always-visible channel.
    Ring,
    /// Notification sounds. May be linked to follow the ring volume.
    Notification,
    /// Media playback (music, video).
    Media,
    /// Alarm clock.
    Alarm,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Notification => "notification",
            Self::Media => "media",
            Self::Alarm => "alarm",
        }
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global ringer mode reported by the audio subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingerMode {
    /// Ring and notification channels audible.
    Normal,
    /// Silenced with vibration.
    Vibrate,
    /// Fully silenced.
    Silent,
}

impl RingerMode {
    /// Mode a mute-button press requests next: audible becomes silent,
    /// anything already silenced becomes audible again.
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Silent,
            Self::Vibrate | Self::Silent => Self::Normal,
        }
    }
}

/// Events delivered by the audio subsystem.
///
/// Senders may fire these from any thread; the dialog drains them on its
/// owning thread (see [`crate::dialog::DialogCoordinator::pump_events`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// The global ringer mode changed, carrying the new mode.
    RingerModeChanged(RingerMode),
}
