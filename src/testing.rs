// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shared test doubles: a scriptable audio backend and recording UI rows.

use crate::audio::{
    AudioBackend, AudioEvent, ChannelKind, EventSender, RingerMode, SharedBackend,
};
use crate::ui::{ChannelRow, RowIcon, RowVisibility};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

/// Install a subscriber once so `RUST_LOG` filtering works under
/// `cargo test`. Safe to call from every test; later calls are no-ops.
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub(crate) struct MockChannel {
    pub volume: u32,
    pub max: u32,
    pub muted: bool,
    pub last_audible: u32,
}

impl Default for MockChannel {
    fn default() -> Self {
        Self {
            volume: 5,
            max: 7,
            muted: false,
            last_audible: 5,
        }
    }
}

/// In-memory audio subsystem with all four channels present by default.
pub(crate) struct MockBackend {
    pub channels: HashMap<ChannelKind, MockChannel>,
    pub ringer_mode: RingerMode,
    pub voice_capable: bool,
    pub events: Option<EventSender>,
    pub samples_playing: HashSet<ChannelKind>,
    pub sample_sources: HashMap<ChannelKind, Option<String>>,
    /// Set when a sample starts while another is still playing.
    pub sample_overlap: bool,
    pub volume_writes: u32,
    pub subscribe_count: u32,
    pub unsubscribe_count: u32,
}

impl MockBackend {
    pub fn new() -> Self {
        let channels = [
            ChannelKind::Ring,
            ChannelKind::Notification,
            ChannelKind::Media,
            ChannelKind::Alarm,
        ]
        .into_iter()
        .map(|kind| (kind, MockChannel::default()))
        .collect();

        Self {
            channels,
            ringer_mode: RingerMode::Normal,
            voice_capable: true,
            events: None,
            samples_playing: HashSet::new(),
            sample_sources: HashMap::new(),
            sample_overlap: false,
            volume_writes: 0,
            subscribe_count: 0,
            unsubscribe_count: 0,
        }
    }

    pub fn without_voice() -> Self {
        let mut backend = Self::new();
        backend.voice_capable = false;
        backend
    }

    pub fn remove_channel(&mut self, kind: ChannelKind) {
        self.channels.remove(&kind);
    }

    pub fn channel(&self, kind: ChannelKind) -> &MockChannel {
        self.channels.get(&kind).expect("channel not present")
    }

    pub fn channel_mut(&mut self, kind: ChannelKind) -> &mut MockChannel {
        self.channels.get_mut(&kind).expect("channel not present")
    }
}

impl AudioBackend for MockBackend {
    fn supports(&self, kind: ChannelKind) -> bool {
        self.channels.contains_key(&kind)
    }

    fn max_volume(&self, kind: ChannelKind) -> u32 {
        self.channel(kind).max
    }

    fn volume(&self, kind: ChannelKind) -> u32 {
        self.channel(kind).volume
    }

    fn set_volume(&mut self, kind: ChannelKind, volume: u32) {
        self.volume_writes += 1;
        let ch = self.channel_mut(kind);
        ch.volume = volume;
        if !ch.muted {
            ch.last_audible = volume;
        }
    }

    fn is_muted(&self, kind: ChannelKind) -> bool {
        self.channel(kind).muted
    }

    fn last_audible_volume(&self, kind: ChannelKind) -> u32 {
        self.channel(kind).last_audible
    }

    fn ringer_mode(&self) -> RingerMode {
        self.ringer_mode
    }

    fn set_ringer_mode(&mut self, mode: RingerMode) {
        self.ringer_mode = mode;
        let muted = mode != RingerMode::Normal;
        for kind in [ChannelKind::Ring, ChannelKind::Notification] {
            if let Some(ch) = self.channels.get_mut(&kind) {
                if muted && !ch.muted {
                    ch.last_audible = ch.volume;
                }
                ch.muted = muted;
            }
        }
        if let Some(tx) = &self.events {
            let _ = tx.send(AudioEvent::RingerModeChanged(mode));
        }
    }

    fn is_voice_capable(&self) -> bool {
        self.voice_capable
    }

    fn start_sample(&mut self, kind: ChannelKind, source: Option<&str>) {
        if !self.samples_playing.is_empty() {
            self.sample_overlap = true;
        }
        self.samples_playing.insert(kind);
        self.sample_sources
            .insert(kind, source.map(str::to_string));
    }

    fn stop_sample(&mut self, kind: ChannelKind) {
        self.samples_playing.remove(&kind);
    }

    fn subscribe(&mut self, events: EventSender) {
        self.subscribe_count += 1;
        self.events = Some(events);
    }

    fn unsubscribe(&mut self) {
        self.unsubscribe_count += 1;
        self.events = None;
    }
}

/// Everything a row binding was last told.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RowState {
    pub enabled: Option<bool>,
    pub progress: Option<u32>,
    pub max: Option<u32>,
    pub icon: Option<RowIcon>,
    pub visibility: Option<RowVisibility>,
}

pub(crate) type RowHandle = Rc<RefCell<RowState>>;

struct MockRow {
    state: RowHandle,
}

impl ChannelRow for MockRow {
    fn set_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().enabled = Some(enabled);
    }

    fn set_progress(&mut self, value: u32) {
        self.state.borrow_mut().progress = Some(value);
    }

    fn set_range(&mut self, max: u32) {
        self.state.borrow_mut().max = Some(max);
    }

    fn set_icon(&mut self, icon: RowIcon) {
        self.state.borrow_mut().icon = Some(icon);
    }

    fn set_visibility(&mut self, visibility: RowVisibility) {
        self.state.borrow_mut().visibility = Some(visibility);
    }
}

/// A row binding plus a handle for asserting what was written to it.
pub(crate) fn mock_row() -> (Box<dyn ChannelRow>, RowHandle) {
    let state: RowHandle = Rc::new(RefCell::new(RowState::default()));
    (Box::new(MockRow {
        state: state.clone(),
    }), state)
}

/// Share a mock backend, keeping a typed handle for assertions.
pub(crate) fn shared_backend(backend: MockBackend) -> (SharedBackend, Rc<RefCell<MockBackend>>) {
    init_test_logging();
    let mock = Rc::new(RefCell::new(backend));
    let shared: SharedBackend = mock.clone();
    (shared, mock)
}
