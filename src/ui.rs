// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! UI row bindings.
//!
//! The dialog layout is owned by the host toolkit. The engine only writes
//! slider/icon state through [`ChannelRow`] handles passed in at open time
//! and scoped to the dialog's lifetime.

/// Icon shown next to a channel slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    Unmuted,
    Muted,
}

/// Visibility of a dialog control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVisibility {
    Visible,
    Hidden,
}

/// One channel row (slider + mute icon) in the dialog.
///
/// Range configuration is the row's clamping mechanism: the engine sets the
/// range to the channel maximum at open time and the slider control keeps
/// user input inside it.
pub trait ChannelRow {
    /// Enable or disable the slider (disabled while muted).
    fn set_enabled(&mut self, enabled: bool);

    /// Move the slider position.
    fn set_progress(&mut self, value: u32);

    /// Configure the slider range as `0..=max`.
    fn set_range(&mut self, max: u32);

    /// Swap the mute/unmute icon.
    fn set_icon(&mut self, icon: RowIcon);

    /// Show or hide the whole row.
    fn set_visibility(&mut self, visibility: RowVisibility);
}
