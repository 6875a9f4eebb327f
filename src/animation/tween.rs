//! Keyed property tweens.
//!
//! A [`Tweener`] owns every running [`Vec3Tween`], keyed by the property it
//! drives. Starting a tween on a key that is already animating replaces the
//! old tween, so two flights never fight over the same property. The host
//! advances all tweens with [`Tweener::tick`] and applies the returned
//! [`TweenEvent`]s.

use std::fmt::Debug;
use std::time::Duration;

use glam::Vec3;

use super::easing::EasingFunction;

/// Interpolates a point from `from` to `to` over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3Tween {
    from: Vec3,
    to: Vec3,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFunction,
}

impl Vec3Tween {
    /// Tween from `from` to `to` over `duration`.
    #[must_use]
    pub fn new(
        from: Vec3,
        to: Vec3,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Start point.
    #[must_use]
    pub fn start(&self) -> Vec3 {
        self.from
    }

    /// End point.
    #[must_use]
    pub fn end(&self) -> Vec3 {
        self.to
    }

    /// Linear progress in [0, 1]. Zero-length tweens are always complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the tween has reached its end point.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current eased value.
    #[must_use]
    pub fn value(&self) -> Vec3 {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.evaluate(self.progress()))
    }

    /// Advance by `dt` and return the new value.
    pub fn advance(&mut self, dt: Duration) -> Vec3 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }
}

/// Handle of a started tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

/// Output of [`Tweener::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenEvent<K> {
    /// A tween moved; apply `value` to `key`.
    Updated {
        /// Property the tween drives.
        key: K,
        /// Tween that produced the value.
        id: TweenId,
        /// New value.
        value: Vec3,
    },
    /// A tween reached its end point and was removed.
    Completed {
        /// Property the tween drove.
        key: K,
        /// Tween that finished.
        id: TweenId,
        /// Final value (always the tween's end point).
        value: Vec3,
    },
}

impl<K: Copy> TweenEvent<K> {
    /// Property the event refers to.
    #[must_use]
    pub fn key(&self) -> K {
        match self {
            Self::Updated { key, .. } | Self::Completed { key, .. } => *key,
        }
    }

    /// Value to apply.
    #[must_use]
    pub fn value(&self) -> Vec3 {
        match self {
            Self::Updated { value, .. } | Self::Completed { value, .. } => {
                *value
            }
        }
    }
}

/// Running tweens keyed by property.
#[derive(Debug, Clone)]
pub struct Tweener<K> {
    active: Vec<(TweenId, K, Vec3Tween)>,
    next_id: u64,
}

impl<K> Default for Tweener<K> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: Copy + PartialEq + Debug> Tweener<K> {
    /// Create an empty tweener.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tween` on `key`, replacing any tween already driving it.
    pub fn to(&mut self, key: K, tween: Vec3Tween) -> TweenId {
        let killed = self.kill_tweens_of(key);
        if killed > 0 {
            log::debug!("tween on {key:?} overwritten");
        }
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.active.push((id, key, tween));
        id
    }

    /// Stop every tween driving `key` without completing it. Returns the
    /// number of tweens removed.
    pub fn kill_tweens_of(&mut self, key: K) -> usize {
        let before = self.active.len();
        self.active.retain(|(_, k, _)| *k != key);
        before - self.active.len()
    }

    /// Whether any tween drives `key`.
    #[must_use]
    pub fn is_tweening(&self, key: K) -> bool {
        self.active.iter().any(|(_, k, _)| *k == key)
    }

    /// The tween driving `key`, if any.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&Vec3Tween> {
        self.active
            .iter()
            .find(|(_, k, _)| *k == key)
            .map(|(_, _, t)| t)
    }

    /// Number of running tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether nothing is animating.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Stop everything.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Advance all tweens by `dt`.
    ///
    /// Every running tween yields exactly one event: `Updated` while it is
    /// still running, `Completed` on the tick it reaches its end point.
    /// Completed tweens are removed before this returns.
    pub fn tick(&mut self, dt: Duration) -> Vec<TweenEvent<K>> {
        let mut events = Vec::with_capacity(self.active.len());
        for (id, key, tween) in &mut self.active {
            let value = tween.advance(dt);
            let event = if tween.is_finished() {
                TweenEvent::Completed {
                    key: *key,
                    id: *id,
                    value,
                }
            } else {
                TweenEvent::Updated {
                    key: *key,
                    id: *id,
                    value,
                }
            };
            events.push(event);
        }
        self.active.retain(|(_, _, t)| !t.is_finished());
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Prop {
        A,
        B,
    }

    fn linear(to: Vec3, millis: u64) -> Vec3Tween {
        Vec3Tween::new(
            Vec3::ZERO,
            to,
            Duration::from_millis(millis),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn tween_reaches_exact_end_point() {
        let mut tween = Vec3Tween::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(5.0, 3.0, 5.0),
            Duration::from_secs(2),
            EasingFunction::CubicInOut,
        );
        for _ in 0..7 {
            let _ = tween.advance(Duration::from_millis(333));
        }
        assert!(tween.is_finished());
        assert_eq!(tween.value(), Vec3::new(5.0, 3.0, 5.0));
    }

    #[test]
    fn tick_reports_updates_then_completion() {
        let mut tweener = Tweener::new();
        let id = tweener.to(Prop::A, linear(Vec3::X * 10.0, 100));

        let events = tweener.tick(Duration::from_millis(50));
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TweenEvent::Updated { .. }));
        assert!((events[0].value().x - 5.0).abs() < 1e-4);

        let events = tweener.tick(Duration::from_millis(80));
        assert_eq!(
            events,
            vec![TweenEvent::Completed {
                key: Prop::A,
                id,
                value: Vec3::X * 10.0
            }]
        );
        assert!(tweener.is_empty());
    }

    #[test]
    fn same_key_overwrites_and_other_keys_coexist() {
        let mut tweener = Tweener::new();
        let first = tweener.to(Prop::A, linear(Vec3::X, 100));
        let _ = tweener.to(Prop::B, linear(Vec3::Y, 100));
        let second = tweener.to(Prop::A, linear(Vec3::Z, 100));
        assert_ne!(first, second);
        assert_eq!(tweener.len(), 2);
        assert_eq!(tweener.get(Prop::A).map(Vec3Tween::end), Some(Vec3::Z));
    }

    #[test]
    fn killed_tween_never_completes() {
        let mut tweener = Tweener::new();
        let _ = tweener.to(Prop::A, linear(Vec3::X, 10));
        assert_eq!(tweener.kill_tweens_of(Prop::A), 1);
        assert!(!tweener.is_tweening(Prop::A));
        assert!(tweener.tick(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut tweener = Tweener::new();
        let _ = tweener.to(Prop::B, linear(Vec3::ONE, 0));
        let events = tweener.tick(Duration::ZERO);
        assert!(matches!(events[0], TweenEvent::Completed { .. }));
    }
}
