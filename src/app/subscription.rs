// SPDX-License-Identifier: MPL-2.0
//! Frame tick subscription for the toast render pass.

use super::Message;
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Interval between render passes while toasts are live (about 60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Ticks every frame while there are toasts to animate, and not at all otherwise.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Reports window size changes so toast heights are estimated at the real width.
pub fn create_resize_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}
