// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dialog lifecycle coordination.
//!
//! [`DialogCoordinator`] wires the registry, the distinct primary ring
//! channel, the link toggle, and the ringer-mode-changed subscription
//! together, and decides commit vs revert when the dialog goes away. Every
//! exit path (OK, cancel, host stop) funnels through one release routine.
//!
//! The coordinator is single-threaded; the only asynchronous input is the
//! backend's change notification, which lands in an internal queue and is
//! drained by [`DialogCoordinator::pump_events`] on the owning thread.

use crate::audio::{AudioEvent, ChannelKind, SharedBackend};
use crate::config::{ConfigError, ConfigManager, SoundSettings};
use crate::link::LinkToggleController;
use crate::message::{DialogKey, DialogMessage, KeyOutcome};
use crate::registry::{ChannelDescriptor, ChannelRegistry};
use crate::state::{SavedState, SavedVolume};
use crate::sync;
use crate::ui::{ChannelRow, RowVisibility};
use crate::volumizer::ChannelVolumizer;
use std::sync::mpsc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum DialogError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Row bindings handed over by the host when the dialog view is built.
/// Scoped to the dialog's lifetime.
pub struct DialogBindings {
    /// The always-visible primary ring row.
    pub ring_row: Box<dyn ChannelRow>,
    /// The "notifications use ring volume" toggle control.
    pub link_control: Box<dyn ChannelRow>,
    /// Secondary channel descriptors with their rows, in display order.
    pub channels: Vec<(ChannelDescriptor, Box<dyn ChannelRow>)>,
}

/// Top-level orchestrator for one dialog session.
pub struct DialogCoordinator {
    backend: SharedBackend,
    registry: ChannelRegistry,
    /// Primary channel, kept outside the registry.
    ring: Option<ChannelVolumizer>,
    link: LinkToggleController,
    settings: SoundSettings,
    config: Option<ConfigManager>,
    /// Receiver half of the notification queue; `None` once released.
    events: Option<mpsc::Receiver<AudioEvent>>,
    voice_capable: bool,
    /// When the host persists dialog values durably itself, no transient
    /// state blob is produced.
    durably_persisted: bool,
    open: bool,
}

impl DialogCoordinator {
    /// Build the registry, run the initial refresh, and subscribe to
    /// ringer-mode-changed notifications.
    pub fn open(
        backend: SharedBackend,
        bindings: DialogBindings,
        config: Option<ConfigManager>,
        durably_persisted: bool,
    ) -> Result<Self, DialogError> {
        let settings = match &config {
            Some(manager) => manager.load_settings()?,
            None => SoundSettings::default(),
        };
        let voice_capable = backend.borrow().is_voice_capable();

        let mut ring = ChannelVolumizer::open(
            backend.clone(),
            ChannelKind::Ring,
            bindings.ring_row,
            None,
        );
        if !voice_capable {
            // Static per-row policy: controls that need the voice capability
            // are hidden for the dialog's lifetime.
            if let Some(ring) = ring.as_mut() {
                ring.set_row_visibility(RowVisibility::Hidden);
            }
        }

        let mut registry = ChannelRegistry::open(&backend, bindings.channels);
        sync::refresh_all(&backend, &mut registry);

        let link = LinkToggleController::open(
            settings.notifications_use_ring_volume,
            voice_capable,
            bindings.link_control,
            &mut registry,
        );

        let (event_tx, event_rx) = mpsc::channel();
        backend.borrow_mut().subscribe(event_tx);

        info!(
            "volume dialog opened: {} secondary slots, ring {}, voice_capable={}",
            registry.len(),
            if ring.is_some() { "bound" } else { "absent" },
            voice_capable
        );

        Ok(Self {
            backend,
            registry,
            ring,
            link,
            settings,
            config,
            events: Some(event_rx),
            voice_capable,
            durably_persisted,
            open: true,
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_linked(&self) -> bool {
        self.link.is_linked()
    }

    pub fn settings(&self) -> &SoundSettings {
        &self.settings
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    pub fn ring(&self) -> Option<&ChannelVolumizer> {
        self.ring.as_ref()
    }

    fn volumizer_mut(&mut self, kind: ChannelKind) -> Option<&mut ChannelVolumizer> {
        if kind == ChannelKind::Ring {
            self.ring.as_mut()
        } else {
            self.registry.get_mut(kind)
        }
    }

    /// Apply one user action.
    pub fn handle(&mut self, message: DialogMessage) {
        if !self.open {
            return;
        }
        match message {
            DialogMessage::VolumeChanged(kind, volume) => {
                if let Some(vol) = self.volumizer_mut(kind) {
                    vol.set_volume(volume);
                }
            }
            DialogMessage::MuteButtonPressed => {
                // The click only requests a mode change; muted state and
                // sliders update when the change notification comes back.
                let mut backend = self.backend.borrow_mut();
                let next = backend.ringer_mode().toggled();
                debug!("mute button pressed, requesting ringer mode {:?}", next);
                backend.set_ringer_mode(next);
            }
            DialogMessage::LinkToggled(linked) => {
                if self
                    .link
                    .set_linked(linked, &mut self.registry, self.ring.as_ref())
                {
                    self.settings.notifications_use_ring_volume = linked;
                    if let Some(config) = &self.config {
                        if let Err(e) = config.save_settings(&self.settings) {
                            warn!("failed to persist link setting: {}", e);
                        }
                    }
                }
            }
            DialogMessage::SampleStarting(kind) => self.on_sample_starting(kind),
        }
    }

    /// Volume keys are swallowed on voice-incapable devices, delegated to
    /// the host's default handling otherwise. Other keys are not ours.
    pub fn on_key(&self, key: DialogKey) -> KeyOutcome {
        match key {
            DialogKey::VolumeUp | DialogKey::VolumeDown | DialogKey::VolumeMute => {
                if self.voice_capable {
                    KeyOutcome::Forward
                } else {
                    KeyOutcome::Consumed
                }
            }
            DialogKey::Other(_) => KeyOutcome::Ignored,
        }
    }

    /// Stop every other channel's preview before this one plays. At most one
    /// preview is active across ring and registry.
    pub fn on_sample_starting(&mut self, kind: ChannelKind) {
        if let Some(ring) = self.ring.as_mut() {
            if ring.kind() != kind {
                ring.stop_sample();
            }
        }
        for vol in self.registry.live_mut() {
            if vol.kind() != kind {
                vol.stop_sample();
            }
        }
        if let Some(target) = self.volumizer_mut(kind) {
            target.start_sample();
        }
    }

    /// Drain queued backend notifications on the owning thread. Returns the
    /// number of events handled.
    pub fn pump_events(&mut self) -> usize {
        let drained: Vec<AudioEvent> = match &self.events {
            Some(rx) => rx.try_iter().collect(),
            None => return 0,
        };
        let mut handled = 0;
        for event in drained {
            match event {
                AudioEvent::RingerModeChanged(mode) => {
                    debug!("ringer mode changed to {:?}", mode);
                    sync::refresh_all(&self.backend, &mut self.registry);
                    handled += 1;
                }
            }
        }
        handled
    }

    /// Dialog dismissed. Reverts every channel unless committed, then
    /// releases rows and the notification subscription. A second call is a
    /// no-op.
    pub fn close(&mut self, committed: bool) {
        if !self.open {
            return;
        }
        info!("volume dialog closing, committed={}", committed);
        if committed {
            if let Some(ring) = self.ring.as_mut() {
                ring.commit();
            }
            for vol in self.registry.live_mut() {
                vol.commit();
            }
        } else {
            self.revert_all();
        }
        self.release();
    }

    /// Host stopped with the dialog still up: treated as cancel.
    pub fn on_host_stop(&mut self) {
        if !self.open {
            return;
        }
        info!("host stopped with dialog showing, reverting");
        self.revert_all();
        self.release();
    }

    fn revert_all(&mut self) {
        if let Some(ring) = self.ring.as_mut() {
            ring.revert();
        }
        for vol in self.registry.live_mut() {
            vol.revert();
        }
    }

    /// The single release routine every exit path funnels through.
    fn release(&mut self) {
        if let Some(ring) = self.ring.as_mut() {
            ring.close();
        }
        for vol in self.registry.live_mut() {
            vol.close();
        }
        // Guard against double unsubscribe.
        if self.events.take().is_some() {
            self.backend.borrow_mut().unsubscribe();
        }
        self.open = false;
    }

    /// Capture `(volume, original)` pairs per secondary slot for a host
    /// teardown without commit. `None` when the values are durably persisted
    /// elsewhere. The ring channel is not captured.
    pub fn save_state(&self) -> Option<SavedState> {
        if self.durably_persisted {
            return None;
        }
        Some(SavedState {
            channels: self
                .registry
                .slots()
                .map(|slot| {
                    slot.map(|vol| SavedVolume {
                        volume: vol.current_volume(),
                        original_volume: vol.original_volume(),
                    })
                    .unwrap_or_default()
                })
                .collect(),
        })
    }

    /// Re-apply a previously captured state. A length mismatch with the
    /// current registry keeps the fresh state instead of restoring
    /// partially.
    pub fn restore_state(&mut self, saved: &SavedState) {
        if saved.len() != self.registry.len() {
            warn!(
                "saved state has {} slots but registry has {}, keeping fresh state",
                saved.len(),
                self.registry.len()
            );
            return;
        }
        for (slot, pair) in self.registry.slots_mut().zip(&saved.channels) {
            if let Some(vol) = slot {
                vol.restore(pair.volume, pair.original_volume);
            }
        }
    }
}
