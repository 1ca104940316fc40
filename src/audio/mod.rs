// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Audio subsystem types and abstraction.

pub mod backend;
pub mod types;

pub use backend::{AudioBackend, EventSender, SharedBackend};
pub use types::{AudioEvent, ChannelKind, RingerMode};
