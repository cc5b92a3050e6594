// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo gallery.
//!
//! While the overlay is visible, window, mouse, and touch events are routed
//! into it so its gesture recognizer sees the raw stream. While it is
//! closed, only window resizes are forwarded to keep the expanded endpoint
//! current.

use super::Message;
use crate::ui::lightbox;
use iced::{event, mouse, time, window, Subscription};

fn forward(event: event::Event) -> Message {
    Message::Lightbox(lightbox::Message::RawEvent { event })
}

/// Creates the raw-event subscription for the current overlay visibility.
pub fn create_event_subscription(overlay_visible: bool) -> Subscription<Message> {
    if overlay_visible {
        event::listen_with(|event, _status, _window| match &event {
            event::Event::Window(window::Event::Resized(_)) => Some(forward(event)),
            event::Event::Mouse(
                mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorLeft
                | mouse::Event::ButtonPressed(mouse::Button::Left)
                | mouse::Event::ButtonReleased(mouse::Button::Left),
            ) => Some(forward(event)),
            event::Event::Touch(_) => Some(forward(event)),
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, _window| match &event {
            event::Event::Window(window::Event::Resized(_)) => Some(forward(event)),
            _ => None,
        })
    }
}

/// Creates the animation heartbeat, running only while the overlay has
/// live springs.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(lightbox::TICK_INTERVAL)
            .map(|instant| Message::Lightbox(lightbox::Message::Tick(instant)))
    } else {
        Subscription::none()
    }
}
