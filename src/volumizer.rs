// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single-channel volume control.
//!
//! A [`ChannelVolumizer`] owns one channel's live volume, the snapshot taken
//! when the dialog opened, the mute flag, and the bound UI row. Changes are
//! forwarded live to the audio backend; the snapshot makes cancel-time
//! revert possible.

use crate::audio::{ChannelKind, SharedBackend};
use crate::ui::{ChannelRow, RowIcon, RowVisibility};
use tracing::{debug, trace};

/// Live volume state for one audio channel.
pub struct ChannelVolumizer {
    kind: ChannelKind,
    backend: SharedBackend,
    row: Box<dyn ChannelRow>,
    /// Volume currently applied to the backend.
    current_volume: u32,
    /// Snapshot taken at open; only a state restore may rewrite it.
    original_volume: u32,
    max: u32,
    muted: bool,
    /// Channel-specific preview sample source, if any.
    sample: Option<String>,
    sample_playing: bool,
}

impl ChannelVolumizer {
    /// Bind to the backend and take the opening snapshot.
    ///
    /// Returns `None` when the backend does not support the channel; the
    /// caller treats the channel as absent.
    pub fn open(
        backend: SharedBackend,
        kind: ChannelKind,
        mut row: Box<dyn ChannelRow>,
        sample: Option<String>,
    ) -> Option<Self> {
        let (volume, muted, max) = {
            let b = backend.borrow();
            if !b.supports(kind) {
                debug!("channel {} not supported, leaving slot empty", kind);
                return None;
            }
            (b.volume(kind), b.is_muted(kind), b.max_volume(kind))
        };

        row.set_range(max);
        row.set_progress(volume);

        debug!("opened {} channel: volume {}/{}", kind, volume, max);

        Some(Self {
            kind,
            backend,
            row,
            current_volume: volume,
            original_volume: volume,
            max,
            muted,
            sample,
            sample_playing: false,
        })
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn current_volume(&self) -> u32 {
        self.current_volume
    }

    pub fn original_volume(&self) -> u32 {
        self.original_volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn max_volume(&self) -> u32 {
        self.max
    }

    pub fn is_sample_playing(&self) -> bool {
        self.sample_playing
    }

    /// Apply a new live volume. The opening snapshot is untouched.
    pub fn set_volume(&mut self, volume: u32) {
        let volume = volume.min(self.max);
        trace!("set {} volume to {}", self.kind, volume);
        self.backend.borrow_mut().set_volume(self.kind, volume);
        self.current_volume = volume;
        self.row.set_progress(volume);
    }

    /// Re-apply the opening snapshot. Idempotent.
    pub fn revert(&mut self) {
        debug!(
            "reverting {} volume {} -> {}",
            self.kind, self.current_volume, self.original_volume
        );
        self.backend
            .borrow_mut()
            .set_volume(self.kind, self.original_volume);
        self.current_volume = self.original_volume;
        self.row.set_progress(self.current_volume);
    }

    /// Accept the live value as final. The backend already carries it, so
    /// there is nothing external to do.
    pub fn commit(&mut self) {
        trace!("committing {} volume {}", self.kind, self.current_volume);
    }

    /// Release the channel. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.stop_sample();
    }

    /// Start this channel's preview sample.
    pub fn start_sample(&mut self) {
        if self.sample_playing {
            return;
        }
        trace!("starting {} preview sample", self.kind);
        self.backend
            .borrow_mut()
            .start_sample(self.kind, self.sample.as_deref());
        self.sample_playing = true;
    }

    /// Stop this channel's preview sample if one is playing.
    pub fn stop_sample(&mut self) {
        if !self.sample_playing {
            return;
        }
        trace!("stopping {} preview sample", self.kind);
        self.backend.borrow_mut().stop_sample(self.kind);
        self.sample_playing = false;
    }

    /// Pull mute flag and effective volume into the row and in-memory state.
    /// Backend-read-only; called from the mute-state refresh.
    pub(crate) fn apply_refresh(&mut self, muted: bool, live: u32, shown: u32) {
        self.muted = muted;
        self.current_volume = live.min(self.max);
        self.row.set_enabled(!muted);
        self.row
            .set_icon(if muted { RowIcon::Muted } else { RowIcon::Unmuted });
        self.row.set_progress(shown);
    }

    /// Re-apply a `(volume, original)` pair captured before a host teardown.
    pub(crate) fn restore(&mut self, volume: u32, original_volume: u32) {
        self.original_volume = original_volume.min(self.max);
        self.set_volume(volume);
    }

    pub(crate) fn set_row_visibility(&mut self, visibility: RowVisibility) {
        self.row.set_visibility(visibility);
    }
}
