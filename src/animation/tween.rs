use glam::Vec2;

use super::easing::Ease;

/// Values that can be linearly interpolated
pub trait Lerp: Copy {
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        Vec2::lerp(self, to, t)
    }
}

/// A pure interpolation from `from` to `to` starting at `start` seconds.
///
/// Evaluation never mutates the tween, so the same tween can be sampled at
/// any clock value. Before `start` it yields `from`, after the end `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    /// Normalized linear progress in [0, 1]
    pub fn progress(&self, time: f64) -> f32 {
        if self.duration <= 0.0 {
            return if time >= self.start { 1.0 } else { 0.0 };
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn value_at(&self, time: f64) -> T {
        if self.is_finished(time) {
            return self.to;
        }
        let p = self.progress(time);
        self.from.interpolate(self.to, self.ease.apply(p))
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    pub fn is_finished(&self, time: f64) -> bool {
        time >= self.end()
    }
}

/// Goes from `base` to `peak` and plays the same curve back once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Yoyo {
    pub base: f32,
    pub peak: f32,
    pub start: f64,
    pub half_duration: f64,
    pub ease: Ease,
}

impl Yoyo {
    pub fn value_at(&self, time: f64) -> f32 {
        let elapsed = time - self.start;
        if elapsed <= 0.0 || self.is_finished(time) {
            return self.base;
        }
        let p = if elapsed < self.half_duration {
            elapsed / self.half_duration
        } else {
            (2.0 * self.half_duration - elapsed) / self.half_duration
        };
        self.base.interpolate(self.peak, self.ease.apply(p as f32))
    }

    pub fn is_finished(&self, time: f64) -> bool {
        time >= self.start + 2.0 * self.half_duration
    }
}
