//! Animation system for camera flights.
//!
//! Easing curves plus a small keyed tween engine. The engine ticks all
//! tweens once per frame and forwards their events to whoever owns the
//! animated property.

pub mod easing;
pub mod tween;

pub use easing::EasingFunction;
pub use tween::{TweenEvent, TweenId, Tweener, Vec3Tween};
