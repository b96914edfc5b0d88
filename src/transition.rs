use std::time::{Duration, Instant};

use crate::layout::Rect;

/// Easing function for menu transitions. Entrances and exits decelerate;
/// linear is kept for hosts that want mechanical motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed interpolation.
    Linear,
    /// Cubic ease-out: fast start, slow end (deceleration).
    EaseOut,
    /// Cubic ease-in-out: slow start, fast middle, slow end.
    EaseInOut,
}

/// Apply an easing function to a linear progress value `t` in [0, 1].
fn ease(t: f32, easing: Easing) -> f32 {
    match easing {
        Easing::Linear => t,
        Easing::EaseOut => {
            let f = 1.0 - t;
            1.0 - f * f * f
        }
        Easing::EaseInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let f = -2.0 * t + 2.0;
                1.0 - f * f * f / 2.0
            }
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One sampled state of the menu surface: where it is and how opaque it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuFrame {
    pub rect: Rect,
    pub opacity: f32,
}

impl MenuFrame {
    pub fn new(rect: Rect, opacity: f32) -> Self {
        Self { rect, opacity }
    }
}

/// Time-driven interpolation between two menu frames.
///
/// Ticks on wall-clock time (`Instant` passed in by the caller, never read
/// internally), so tests can drive it deterministically. A zero duration
/// snaps to the target immediately.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: MenuFrame,
    to: MenuFrame,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    pub fn new(
        from: MenuFrame,
        to: MenuFrame,
        start: Instant,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// A transition that is already at its target.
    pub fn immediate(to: MenuFrame, now: Instant) -> Self {
        Self::new(to, to, now, Duration::ZERO, Easing::Linear)
    }

    /// Current interpolated frame. Returns the target once complete.
    pub fn sample(&self, now: Instant) -> MenuFrame {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = ease(
            elapsed.as_secs_f32() / self.duration.as_secs_f32(),
            self.easing,
        );
        MenuFrame {
            rect: Rect {
                x: lerp(self.from.rect.x, self.to.rect.x, t),
                y: lerp(self.from.rect.y, self.to.rect.y, t),
                width: lerp(self.from.rect.width, self.to.rect.width, t),
                height: lerp(self.from.rect.height, self.to.rect.height, t),
            },
            opacity: lerp(self.from.opacity, self.to.opacity, t),
        }
    }

    /// True once the transition has reached its target.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.duration.is_zero() || now.saturating_duration_since(self.start) >= self.duration
    }
}
