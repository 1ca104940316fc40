// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Message types for user actions on the dialog.

use crate::audio::ChannelKind;

/// User actions the host forwards into the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMessage {
    /// A channel slider moved (kind, new volume).
    VolumeChanged(ChannelKind, u32),
    /// Any mute button pressed. Requests a ringer-mode toggle from the
    /// backend; the visible result arrives via the change notification.
    MuteButtonPressed,
    /// The "notifications use ring volume" toggle changed.
    LinkToggled(bool),
    /// A channel is about to play its preview sample.
    SampleStarting(ChannelKind),
}

/// Hardware keys the dialog cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    VolumeUp,
    VolumeDown,
    VolumeMute,
    /// Any other key, carrying the host's key code.
    Other(u32),
}

/// What the host should do with a key event after the dialog saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Swallowed; treat as handled and do nothing.
    Consumed,
    /// Delegate to the host's default volume-key handling.
    Forward,
    /// Not a key this dialog handles.
    Ignored,
}
