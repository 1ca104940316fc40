// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! VolDial - coordination engine for multi-channel volume dialogs.
//!
//! Tracks ring, notification, media, and alarm levels edited together in one
//! modal dialog: live values applied to the audio subsystem as sliders move,
//! mute state mirrored from asynchronous ringer-mode notifications, an
//! optional "notifications use ring volume" link, and an atomic commit or
//! revert of all channels when the dialog is dismissed. The dialog layout
//! and the audio subsystem itself are the host's business, reached through
//! the [`ui::ChannelRow`] and [`audio::AudioBackend`] traits.

pub mod audio;
pub mod config;
pub mod dialog;
pub mod link;
pub mod message;
pub mod registry;
pub mod state;
pub mod sync;
pub mod ui;
pub mod volumizer;

#[cfg(test)]
pub(crate) mod testing;

pub use audio::{AudioBackend, AudioEvent, ChannelKind, EventSender, RingerMode, SharedBackend};
pub use config::{ConfigError, ConfigManager, SoundSettings};
pub use dialog::{DialogBindings, DialogCoordinator, DialogError};
pub use link::{LinkState, LinkToggleController};
pub use message::{DialogKey, DialogMessage, KeyOutcome};
pub use registry::{default_descriptors, ChannelDescriptor, ChannelRegistry};
pub use state::{SavedState, SavedVolume};
pub use ui::{ChannelRow, RowIcon, RowVisibility};
pub use volumizer::ChannelVolumizer;
