// SPDX-License-Identifier: MPL-2.0
//! Notification queue and per-frame expiry.
//!
//! The `Manager` keeps live notifications in arrival order. Each frame the host
//! calls [`Manager::render_pass`], which drops expired toasts and hands every
//! remaining one to a [`Surface`] together with its opacity and stacking offset.

use super::notification::Notification;
use super::phase::Phase;
use crate::config::PADDING_MESSAGE_Y;
use std::time::Instant;

/// Where and how visibly a live toast is drawn during a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position among the live toasts of this pass (0 is closest to the anchor).
    pub index: usize,
    pub phase: Phase,
    pub opacity: f32,
    /// Distance from the anchor edge, accumulated over earlier toasts.
    pub offset: f32,
}

/// Draws toasts handed out by a render pass.
pub trait Surface {
    /// Draws one toast and returns the height it occupies.
    fn draw(&mut self, notification: &Notification, placement: Placement) -> f32;
}

/// Owns the live notifications, in display order.
#[derive(Debug, Default)]
pub struct Manager {
    notifications: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification after every live one.
    pub fn insert(&mut self, notification: Notification) {
        tracing::debug!(
            id = notification.id().get(),
            kind = ?notification.kind(),
            "toast inserted"
        );
        self.notifications.push(notification);
    }

    /// Removes the notification at `index`, shifting later ones down.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Notification {
        self.notifications.remove(index)
    }

    /// Drops expired notifications and draws the rest onto `surface`.
    ///
    /// Must run once per frame. Live toasts are drawn in queue order, each one
    /// offset by the heights of those before it plus [`PADDING_MESSAGE_Y`].
    pub fn render_pass<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) {
        let mut offset = 0.0;
        let mut index = 0;

        while index < self.notifications.len() {
            let lifecycle = self.notifications[index].lifecycle(now);

            if lifecycle.is_expired() {
                let expired = self.remove_at(index);
                tracing::trace!(id = expired.id().get(), "toast expired");
                // The next toast shifted into `index`; examine it without advancing.
                continue;
            }

            let placement = Placement {
                index,
                phase: lifecycle.phase,
                opacity: lifecycle.opacity,
                offset,
            };
            let height = surface.draw(&self.notifications[index], placement);
            offset += height + PADDING_MESSAGE_Y;
            index += 1;
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Notification> {
        self.notifications.get(index)
    }

    /// Returns the live notifications in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DISMISS, FADE};
    use crate::ui::notifications::{Kind, NotificationId};
    use std::time::Duration;

    const TOAST_HEIGHT: f32 = 40.0;

    /// Records what a render pass drew.
    #[derive(Default)]
    struct Recorder {
        drawn: Vec<(NotificationId, Placement)>,
    }

    impl Surface for Recorder {
        fn draw(&mut self, notification: &Notification, placement: Placement) -> f32 {
            self.drawn.push((notification.id(), placement));
            TOAST_HEIGHT
        }
    }

    fn pass(manager: &mut Manager, now: Instant) -> Recorder {
        let mut recorder = Recorder::default();
        manager.render_pass(now, &mut recorder);
        recorder
    }

    fn toast(start: Instant, dismiss_ms: u64) -> Notification {
        Notification::created_at(Kind::Info, start).dismiss_after(Duration::from_millis(dismiss_ms))
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
    }

    #[test]
    fn render_pass_on_empty_manager_draws_nothing() {
        let mut manager = Manager::new();
        let recorder = pass(&mut manager, Instant::now());
        assert!(recorder.drawn.is_empty());
    }

    #[test]
    fn insert_then_render_at_creation_is_transparent_fade_in() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.insert(Notification::created_at(Kind::Success, start));

        let recorder = pass(&mut manager, start);
        let (_, placement) = recorder.drawn[0];
        assert_eq!(placement.phase, Phase::FadeIn);
        assert_eq!(placement.opacity, 0.0);
        assert_eq!(placement.offset, 0.0);
    }

    #[test]
    fn toasts_are_drawn_in_insertion_order_with_stacked_offsets() {
        let start = Instant::now();
        let mut manager = Manager::new();
        let a = toast(start, 3000);
        let b = toast(start, 3000);
        let c = toast(start, 3000);
        let ids = [a.id(), b.id(), c.id()];
        manager.insert(a);
        manager.insert(b);
        manager.insert(c);

        let recorder = pass(&mut manager, start + FADE);
        let drawn: Vec<NotificationId> = recorder.drawn.iter().map(|(id, _)| *id).collect();
        assert_eq!(drawn, ids);

        let offsets: Vec<f32> = recorder.drawn.iter().map(|(_, p)| p.offset).collect();
        let step = TOAST_HEIGHT + PADDING_MESSAGE_Y;
        assert_eq!(offsets, vec![0.0, step, 2.0 * step]);
    }

    #[test]
    fn expired_toasts_are_removed_without_skipping_neighbours() {
        let start = Instant::now();
        let mut manager = Manager::new();
        // Two adjacent short-lived toasts between long-lived ones.
        let keep_first = toast(start, 10_000);
        let short_a = toast(start, 0);
        let short_b = toast(start, 0);
        let keep_last = toast(start, 10_000);
        let kept = [keep_first.id(), keep_last.id()];
        for n in [keep_first, short_a, short_b, keep_last] {
            manager.insert(n);
        }

        let now = start + FADE * 3;
        let recorder = pass(&mut manager, now);

        let drawn: Vec<NotificationId> = recorder.drawn.iter().map(|(id, _)| *id).collect();
        assert_eq!(drawn, kept);
        assert_eq!(manager.len(), 2);

        let indices: Vec<usize> = recorder.drawn.iter().map(|(_, p)| p.index).collect();
        assert_eq!(indices, vec![0, 1]);
        // The survivor after the gap stacks directly on the first one.
        assert_eq!(recorder.drawn[1].1.offset, TOAST_HEIGHT + PADDING_MESSAGE_Y);
    }

    #[test]
    fn expiry_happens_just_after_full_lifetime() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.insert(toast(start, 500));

        let boundary = start + FADE * 2 + Duration::from_millis(500);
        let recorder = pass(&mut manager, boundary);
        assert_eq!(recorder.drawn.len(), 1);
        assert_eq!(recorder.drawn[0].1.phase, Phase::FadeOut);

        let recorder = pass(&mut manager, boundary + Duration::from_millis(1));
        assert!(recorder.drawn.is_empty());
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_at_preserves_relative_order() {
        let start = Instant::now();
        let mut manager = Manager::new();
        let toasts: Vec<Notification> = (0..4).map(|_| toast(start, 3000)).collect();
        let ids: Vec<NotificationId> = toasts.iter().map(Notification::id).collect();
        for n in toasts {
            manager.insert(n);
        }

        let removed = manager.remove_at(1);
        assert_eq!(removed.id(), ids[1]);

        let remaining: Vec<NotificationId> = manager.iter().map(Notification::id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    #[should_panic]
    fn remove_at_out_of_range_panics() {
        let mut manager = Manager::new();
        manager.remove_at(0);
    }

    #[test]
    fn repeated_passes_eventually_empty_the_queue() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for dismiss in [0, 250, 1000, 3000] {
            manager.insert(toast(start, dismiss));
        }
        manager.insert(Notification::created_at(Kind::Error, start));

        let frame = Duration::from_millis(16);
        let mut now = start;
        let deadline = start + FADE * 2 + DEFAULT_DISMISS + frame * 2;
        while now < deadline {
            pass(&mut manager, now);
            now += frame;
        }
        assert!(manager.is_empty());

        // Further passes on the empty queue stay harmless.
        pass(&mut manager, now);
        pass(&mut manager, now + frame);
        assert!(manager.is_empty());
    }

    #[test]
    fn ids_keep_increasing_across_removals() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.insert(toast(start, 0));
        let first = manager.get(0).map(Notification::id);
        pass(&mut manager, start + FADE * 3);
        assert!(manager.is_empty());

        manager.insert(toast(start, 0));
        let second = manager.get(0).map(Notification::id);
        assert!(second > first);
    }
}
