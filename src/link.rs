// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! "Notifications use ring volume" toggle.
//!
//! Two-state machine driving notification-row visibility and the one-shot
//! ring-to-notification volume copy. Linking does not keep following the
//! ring slider afterwards; the copy happens once, at the moment of toggling.

use crate::audio::ChannelKind;
use crate::registry::ChannelRegistry;
use crate::ui::{ChannelRow, RowVisibility};
use crate::volumizer::ChannelVolumizer;
use tracing::{debug, warn};

/// Whether the notification channel follows the ring channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Linked,
    Unlinked,
}

/// Controller for the link toggle and its derived row visibility.
pub struct LinkToggleController {
    state: LinkState,
    voice_capable: bool,
    /// Binding for the toggle control itself, hidden on voice-incapable
    /// devices.
    control: Box<dyn ChannelRow>,
}

impl LinkToggleController {
    /// Initialize from the persisted setting.
    ///
    /// The stored value is only honored on voice-capable devices; otherwise
    /// the state is forced to [`LinkState::Unlinked`] and the toggle control
    /// is hidden.
    pub fn open(
        stored_linked: bool,
        voice_capable: bool,
        mut control: Box<dyn ChannelRow>,
        registry: &mut ChannelRegistry,
    ) -> Self {
        let linked = stored_linked && voice_capable;
        if !voice_capable {
            control.set_visibility(RowVisibility::Hidden);
        }
        let controller = Self {
            state: if linked {
                LinkState::Linked
            } else {
                LinkState::Unlinked
            },
            voice_capable,
            control,
        };
        debug!("link toggle opened in state {:?}", controller.state);
        controller.apply_notification_visibility(registry);
        controller
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_linked(&self) -> bool {
        self.state == LinkState::Linked
    }

    /// Transition on user interaction with the toggle.
    ///
    /// Updates notification-row visibility, and on the unlinked-to-linked
    /// edge copies the ring volume onto the notification channel exactly
    /// once. Returns `true` when the state changed and the new value should
    /// be persisted.
    pub fn set_linked(
        &mut self,
        linked: bool,
        registry: &mut ChannelRegistry,
        ring: Option<&ChannelVolumizer>,
    ) -> bool {
        if linked == self.is_linked() {
            return false;
        }
        if linked && !self.voice_capable {
            warn!("ignoring link request on voice-incapable device");
            return false;
        }

        self.state = if linked {
            LinkState::Linked
        } else {
            LinkState::Unlinked
        };
        debug!("link toggle -> {:?}", self.state);
        self.apply_notification_visibility(registry);

        if linked {
            // One-time sync; the notification slider does not keep
            // following the ring slider afterwards.
            if let (Some(ring), Some(notification)) =
                (ring, registry.get_mut(ChannelKind::Notification))
            {
                notification.set_volume(ring.current_volume());
            }
        }

        true
    }

    /// Notification row is shown only while unlinked.
    fn apply_notification_visibility(&self, registry: &mut ChannelRegistry) {
        if let Some(notification) = registry.get_mut(ChannelKind::Notification) {
            notification.set_row_visibility(if self.is_linked() {
                RowVisibility::Hidden
            } else {
                RowVisibility::Visible
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_descriptors;
    use crate::testing::{mock_row, shared_backend, MockBackend, RowHandle};
    use crate::ui::RowVisibility;

    struct Fixture {
        registry: ChannelRegistry,
        ring: ChannelVolumizer,
        notification_row: RowHandle,
    }

    fn fixture() -> Fixture {
        let (backend, _mock) = shared_backend(MockBackend::new());
        let mut notification_row = None;
        let channels = default_descriptors()
            .into_iter()
            .map(|desc| {
                let (row, state) = mock_row();
                if desc.kind == ChannelKind::Notification {
                    notification_row = Some(state);
                }
                (desc, row)
            })
            .collect();
        let registry = ChannelRegistry::open(&backend, channels);
        let ring =
            ChannelVolumizer::open(backend, ChannelKind::Ring, mock_row().0, None).unwrap();
        Fixture {
            registry,
            ring,
            notification_row: notification_row.unwrap(),
        }
    }

    #[test]
    fn test_open_linked_hides_notification_row() {
        let mut fx = fixture();
        let ctl = LinkToggleController::open(true, true, mock_row().0, &mut fx.registry);
        assert!(ctl.is_linked());
        assert_eq!(
            fx.notification_row.borrow().visibility,
            Some(RowVisibility::Hidden)
        );
    }

    #[test]
    fn test_voice_incapable_forces_unlinked_and_hides_control() {
        let mut fx = fixture();
        let (control, control_state) = mock_row();
        let ctl = LinkToggleController::open(true, false, control, &mut fx.registry);

        assert_eq!(ctl.state(), LinkState::Unlinked);
        assert_eq!(
            control_state.borrow().visibility,
            Some(RowVisibility::Hidden)
        );
        assert_eq!(
            fx.notification_row.borrow().visibility,
            Some(RowVisibility::Visible)
        );
    }

    #[test]
    fn test_link_copies_ring_volume_once() {
        let mut fx = fixture();
        let mut ctl = LinkToggleController::open(false, true, mock_row().0, &mut fx.registry);

        fx.ring.set_volume(6);
        assert!(ctl.set_linked(true, &mut fx.registry, Some(&fx.ring)));
        assert_eq!(
            fx.registry
                .get(ChannelKind::Notification)
                .unwrap()
                .current_volume(),
            6
        );

        // Moving ring afterwards must not drag notification along.
        fx.ring.set_volume(2);
        assert_eq!(
            fx.registry
                .get(ChannelKind::Notification)
                .unwrap()
                .current_volume(),
            6
        );
    }

    #[test]
    fn test_unlink_shows_row_without_copy() {
        let mut fx = fixture();
        let mut ctl = LinkToggleController::open(true, true, mock_row().0, &mut fx.registry);

        let before = fx
            .registry
            .get(ChannelKind::Notification)
            .unwrap()
            .current_volume();
        assert!(ctl.set_linked(false, &mut fx.registry, Some(&fx.ring)));
        assert_eq!(
            fx.notification_row.borrow().visibility,
            Some(RowVisibility::Visible)
        );
        assert_eq!(
            fx.registry
                .get(ChannelKind::Notification)
                .unwrap()
                .current_volume(),
            before
        );
    }

    #[test]
    fn test_same_state_transition_is_a_noop() {
        let mut fx = fixture();
        let mut ctl = LinkToggleController::open(true, true, mock_row().0, &mut fx.registry);
        assert!(!ctl.set_linked(true, &mut fx.registry, Some(&fx.ring)));
    }
}
