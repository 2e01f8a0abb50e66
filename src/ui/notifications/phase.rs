// SPDX-License-Identifier: MPL-2.0
//! Time-driven lifecycle of a toast.
//!
//! A toast fades in over [`FADE`], waits for its dismiss duration, fades out
//! over [`FADE`] again and then expires. Phase and opacity are a pure function
//! of elapsed time and are recomputed on every frame.

use crate::config::{FADE, OPACITY_CEILING};
use std::time::Duration;

/// Lifecycle stage of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FadeIn,
    Wait,
    FadeOut,
    /// Terminal. The toast is removed on the next render pass.
    Expired,
}

/// Phase and opacity of a toast at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifecycle {
    pub phase: Phase,
    /// Opacity in `0.0..=OPACITY_CEILING`.
    pub opacity: f32,
}

impl Lifecycle {
    /// Evaluates the lifecycle of a toast that waits `dismiss_after` between fades.
    ///
    /// Intervals are closed on the right: `elapsed == FADE` is still
    /// [`Phase::FadeIn`] and `elapsed == 2 * FADE + dismiss_after` is still
    /// [`Phase::FadeOut`] with opacity zero.
    #[must_use]
    pub fn at(elapsed: Duration, dismiss_after: Duration) -> Self {
        let fade_out_start = FADE.saturating_add(dismiss_after);
        let end = fade_out_start.saturating_add(FADE);

        let (phase, opacity) = if elapsed <= FADE {
            (Phase::FadeIn, ratio(elapsed, FADE))
        } else if elapsed <= fade_out_start {
            (Phase::Wait, 1.0)
        } else if elapsed <= end {
            (Phase::FadeOut, 1.0 - ratio(elapsed - fade_out_start, FADE))
        } else {
            (Phase::Expired, 0.0)
        };

        Self {
            phase,
            opacity: opacity * OPACITY_CEILING,
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.phase == Phase::Expired
    }
}

/// Total visible time of a toast, from creation to the last fade-out frame.
#[must_use]
pub fn lifetime(dismiss_after: Duration) -> Duration {
    FADE.saturating_add(dismiss_after).saturating_add(FADE)
}

fn ratio(part: Duration, whole: Duration) -> f32 {
    (part.as_secs_f64() / whole.as_secs_f64()).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-2;
    const MS: Duration = Duration::from_millis(1);
    const DISMISS: Duration = Duration::from_millis(3000);

    fn at(elapsed: Duration) -> Lifecycle {
        Lifecycle::at(elapsed, DISMISS)
    }

    #[test]
    fn creation_instant_is_transparent_fade_in() {
        let lifecycle = at(Duration::ZERO);
        assert_eq!(lifecycle.phase, Phase::FadeIn);
        assert_eq!(lifecycle.opacity, 0.0);
    }

    #[test]
    fn fade_in_ramps_linearly() {
        let lifecycle = at(FADE / 2);
        assert_eq!(lifecycle.phase, Phase::FadeIn);
        assert!((lifecycle.opacity - 0.5 * OPACITY_CEILING).abs() < EPSILON);
    }

    #[test]
    fn opacity_is_continuous_at_end_of_fade_in() {
        let before = at(FADE);
        let after = at(FADE + MS);
        assert_eq!(before.phase, Phase::FadeIn);
        assert_eq!(after.phase, Phase::Wait);
        assert!((before.opacity - OPACITY_CEILING).abs() < EPSILON);
        assert!((after.opacity - OPACITY_CEILING).abs() < EPSILON);
    }

    #[test]
    fn opacity_is_continuous_at_start_of_fade_out() {
        let before = at(FADE + DISMISS);
        let after = at(FADE + DISMISS + MS);
        assert_eq!(before.phase, Phase::Wait);
        assert_eq!(after.phase, Phase::FadeOut);
        assert!((before.opacity - OPACITY_CEILING).abs() < EPSILON);
        assert!((after.opacity - OPACITY_CEILING).abs() < EPSILON);
    }

    #[test]
    fn fade_out_ramps_down_linearly() {
        let lifecycle = at(FADE + DISMISS + FADE / 4);
        assert_eq!(lifecycle.phase, Phase::FadeOut);
        assert!((lifecycle.opacity - 0.75 * OPACITY_CEILING).abs() < EPSILON);
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let last = at(FADE + DISMISS + FADE);
        assert_eq!(last.phase, Phase::FadeOut);
        assert!(last.opacity.abs() < EPSILON);

        let expired = at(FADE + DISMISS + FADE + MS);
        assert_eq!(expired.phase, Phase::Expired);
        assert!(expired.is_expired());
        assert_eq!(expired.opacity, 0.0);
    }

    #[test]
    fn phases_partition_time_in_order() {
        let order = |phase: Phase| match phase {
            Phase::FadeIn => 0,
            Phase::Wait => 1,
            Phase::FadeOut => 2,
            Phase::Expired => 3,
        };

        let mut previous = 0;
        let mut seen = [false; 4];
        for step in 0..=6000u64 {
            let lifecycle = at(Duration::from_millis(step));
            let current = order(lifecycle.phase);
            assert!(current >= previous, "phase went backwards at {step}ms");
            assert!((0.0..=OPACITY_CEILING).contains(&lifecycle.opacity));
            seen[current] = true;
            previous = current;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn zero_dismiss_goes_straight_to_fade_out() {
        let lifecycle = Lifecycle::at(FADE + MS, Duration::ZERO);
        assert_eq!(lifecycle.phase, Phase::FadeOut);
    }

    #[test]
    fn huge_dismiss_does_not_overflow() {
        let lifecycle = Lifecycle::at(Duration::from_secs(10), Duration::MAX);
        assert_eq!(lifecycle.phase, Phase::Wait);
        assert_eq!(lifetime(Duration::MAX), Duration::MAX);
    }

    #[test]
    fn lifetime_is_two_fades_plus_dismiss() {
        assert_eq!(lifetime(DISMISS), FADE * 2 + DISMISS);
    }
}
