// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mute-state synchronization.
//!
//! Pulls each channel's mute flag and effective volume out of the audio
//! backend into the volumizers and their rows. Runs at dialog open and on
//! every ringer-mode-changed notification. Read-only towards the backend.

use crate::audio::SharedBackend;
use crate::registry::ChannelRegistry;
use tracing::debug;

/// Refresh mute flags, slider enablement, icons, and displayed positions for
/// every bound channel.
///
/// A muted channel shows its last audible volume with the slider disabled;
/// an audible one shows the live volume. Idempotent, and never writes back
/// to the backend.
pub fn refresh_all(backend: &SharedBackend, registry: &mut ChannelRegistry) {
    let b = backend.borrow();
    for vol in registry.live_mut() {
        let kind = vol.kind();
        let muted = b.is_muted(kind);
        let live = b.volume(kind);
        let shown = if muted { b.last_audible_volume(kind) } else { live };
        debug!(
            "refresh {}: muted={} live={} shown={}",
            kind, muted, live, shown
        );
        vol.apply_refresh(muted, live, shown);
    }
}
