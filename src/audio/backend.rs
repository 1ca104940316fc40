// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Audio subsystem abstraction.
//!
//! The dialog engine never talks to hardware directly; everything goes
//! through [`AudioBackend`]. Volume and ringer-mode writes are
//! fire-and-forget local calls, and consistency with the real subsystem is
//! restored by the next refresh.

use crate::audio::types::{AudioEvent, ChannelKind, RingerMode};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

/// Cloneable handle the backend uses to deliver [`AudioEvent`]s.
///
/// Safe to move to a delivery thread; the receiving side is drained on the
/// dialog's owning thread only.
pub type EventSender = mpsc::Sender<AudioEvent>;

/// Shared single-threaded handle to the audio subsystem.
pub type SharedBackend = Rc<RefCell<dyn AudioBackend>>;

/// Per-channel volume, mute, and ringer-mode control surface.
pub trait AudioBackend {
    /// Whether the subsystem has this channel at all. Unsupported channels
    /// end up as empty registry slots.
    fn supports(&self, kind: ChannelKind) -> bool;

    /// Maximum volume step for the channel. Sliders are ranged to this.
    fn max_volume(&self, kind: ChannelKind) -> u32;

    /// Current live volume of the channel.
    fn volume(&self, kind: ChannelKind) -> u32;

    /// Apply a new live volume.
    fn set_volume(&mut self, kind: ChannelKind, volume: u32);

    /// Whether the channel is currently muted.
    fn is_muted(&self, kind: ChannelKind) -> bool;

    /// Volume the channel had when it was last audible. Shown on the slider
    /// while the channel is muted.
    fn last_audible_volume(&self, kind: ChannelKind) -> u32;

    /// Current global ringer mode.
    fn ringer_mode(&self) -> RingerMode;

    /// Request a ringer-mode change. The resulting state is observed through
    /// the ringer-mode-changed event, never assumed locally.
    fn set_ringer_mode(&mut self, mode: RingerMode);

    /// Whether the device has the primary voice/ring capability.
    fn is_voice_capable(&self) -> bool;

    /// Start the preview sample for a channel. `source` overrides the
    /// default sample (the media channel carries its own).
    fn start_sample(&mut self, kind: ChannelKind, source: Option<&str>);

    /// Stop the channel's preview sample if one is playing.
    fn stop_sample(&mut self, kind: ChannelKind);

    /// Register the event sender for ringer-mode-changed notifications.
    fn subscribe(&mut self, events: EventSender);

    /// Drop the registered event sender.
    fn unsubscribe(&mut self);
}
