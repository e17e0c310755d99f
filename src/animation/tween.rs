//! Time-bounded interpolation advanced explicitly once per tick.

use std::time::Duration;

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    QuadraticOut,
}

impl Easing {
    /// Applies the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::QuadraticOut => t * (2.0 - t),
        }
    }
}

pub trait Lerp: Copy {
    fn lerp_to(self, end: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_to(self, end: Self, t: f32) -> Self {
        self + (end - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp_to(self, end: Self, t: f32) -> Self {
        self.lerp(end, t)
    }
}

#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start: Duration,
    duration: Duration,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start: Duration, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Duration) -> T {
        self.from.lerp_to(self.to, self.easing.apply(self.progress(now)))
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.duration
    }

    pub fn target(&self) -> T {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_functions() {
        assert_eq!(Easing::QuadraticOut.apply(0.0), 0.0);
        assert!((Easing::QuadraticOut.apply(0.5) - 0.75).abs() < 0.001);
        assert_eq!(Easing::QuadraticOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_tween_progress() {
        let start = Duration::from_millis(1000);
        let tween = Tween::new(0.0_f32, 1.0, start, Duration::from_millis(200), Easing::QuadraticOut);

        assert_eq!(tween.value_at(start), 0.0);
        assert!((tween.value_at(start + Duration::from_millis(100)) - 0.75).abs() < 1e-5);
        assert!(!tween.is_finished(start + Duration::from_millis(199)));
        assert!(tween.is_finished(start + Duration::from_millis(200)));
        assert_eq!(tween.value_at(start + Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_tween_before_start_holds_initial_value() {
        let tween = Tween::new(
            Vec3::ZERO,
            Vec3::ONE,
            Duration::from_millis(500),
            Duration::from_millis(200),
            Easing::QuadraticOut,
        );
        assert_eq!(tween.value_at(Duration::ZERO), Vec3::ZERO);
    }
}
