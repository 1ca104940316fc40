// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Secondary channel registry.
//!
//! One ordered sequence of per-channel descriptor records, so labels, kinds,
//! and samples can never drift out of index-sync. Slot order is fixed for
//! the dialog's lifetime; unsupported channels occupy empty slots that every
//! operation skips.

use crate::audio::{ChannelKind, SharedBackend};
use crate::ui::ChannelRow;
use crate::volumizer::ChannelVolumizer;
use tracing::{debug, info};

/// Preview sample source used for the media channel.
pub const MEDIA_SAMPLE: &str = "media_volume";

/// Static description of one secondary channel slot.
#[derive(Debug, Clone)]
pub struct ChannelDescriptor {
    pub kind: ChannelKind,
    /// Display label for the row.
    pub label: &'static str,
    /// Channel-specific preview sample source; `None` uses the backend
    /// default for the channel.
    pub sample: Option<String>,
}

impl ChannelDescriptor {
    pub fn new(kind: ChannelKind, label: &'static str) -> Self {
        Self {
            kind,
            label,
            sample: None,
        }
    }

    pub fn with_sample(mut self, sample: impl Into<String>) -> Self {
        self.sample = Some(sample.into());
        self
    }
}

/// The stock secondary channel set: notification, media, alarm.
pub fn default_descriptors() -> Vec<ChannelDescriptor> {
    vec![
        ChannelDescriptor::new(ChannelKind::Notification, "Notification"),
        ChannelDescriptor::new(ChannelKind::Media, "Media").with_sample(MEDIA_SAMPLE),
        ChannelDescriptor::new(ChannelKind::Alarm, "Alarm"),
    ]
}

/// Fixed-order collection of secondary channel volumizers.
///
/// The primary ring channel lives outside the registry and is handled
/// distinctly by the dialog coordinator.
pub struct ChannelRegistry {
    slots: Vec<Option<ChannelVolumizer>>,
}

impl ChannelRegistry {
    /// Bind every described channel, leaving an empty slot wherever the
    /// backend lacks the channel.
    pub fn open(
        backend: &SharedBackend,
        channels: Vec<(ChannelDescriptor, Box<dyn ChannelRow>)>,
    ) -> Self {
        let slots: Vec<Option<ChannelVolumizer>> = channels
            .into_iter()
            .map(|(desc, row)| {
                let slot =
                    ChannelVolumizer::open(backend.clone(), desc.kind, row, desc.sample);
                debug!(
                    "slot \"{}\" ({}): {}",
                    desc.label,
                    desc.kind,
                    if slot.is_some() { "bound" } else { "absent" }
                );
                slot
            })
            .collect();

        info!(
            "channel registry opened: {}/{} channels bound",
            slots.iter().filter(|s| s.is_some()).count(),
            slots.len()
        );

        Self { slots }
    }

    /// Number of slots, counting empty ones. Fixed for the dialog's lifetime.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in registry order, empty ones included.
    pub fn slots(&self) -> impl Iterator<Item = Option<&ChannelVolumizer>> {
        self.slots.iter().map(Option::as_ref)
    }

    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = Option<&mut ChannelVolumizer>> {
        self.slots.iter_mut().map(Option::as_mut)
    }

    /// Bound volumizers in registry order, skipping empty slots.
    pub fn live(&self) -> impl Iterator<Item = &ChannelVolumizer> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub fn live_mut(&mut self) -> impl Iterator<Item = &mut ChannelVolumizer> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    pub fn get(&self, kind: ChannelKind) -> Option<&ChannelVolumizer> {
        self.live().find(|v| v.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: ChannelKind) -> Option<&mut ChannelVolumizer> {
        self.live_mut().find(|v| v.kind() == kind)
    }
}
