// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Transient dialog state carried across a host destroy/recreate cycle.

use serde::{Deserialize, Serialize};

/// One secondary channel's `(live, snapshot)` volume pair.
///
/// Empty registry slots are recorded as the default pair so the sequence
/// always has one entry per slot, in registry order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedVolume {
    pub volume: u32,
    pub original_volume: u32,
}

/// Ordered per-slot volume pairs for the secondary channels.
///
/// The primary ring channel is intentionally excluded: its value is persisted
/// elsewhere by the surrounding settings system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub channels: Vec<SavedVolume>,
}

impl SavedState {
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_preserves_order_and_pairing() {
        let state = SavedState {
            channels: vec![
                SavedVolume {
                    volume: 3,
                    original_volume: 5,
                },
                SavedVolume::default(),
                SavedVolume {
                    volume: 7,
                    original_volume: 2,
                },
            ],
        };

        let blob = serde_json::to_string(&state).unwrap();
        let back: SavedState = serde_json::from_str(&blob).unwrap();
        assert_eq!(back, state);
    }
}
