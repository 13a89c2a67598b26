// SPDX-License-Identifier: MPL-2.0
//! Frame source for animations.

use super::Message;
use crate::animation::FRAME_INTERVAL;
use iced::{time, Subscription};

/// Emits [`Message::Frame`] at roughly display rate while an effect is
/// running, and nothing otherwise.
pub fn frames(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}
