//! The mutable animation state holder.
//!
//! [`Animation`] composes an easing curve ([`Ease`]) and a playback policy
//! ([`Playback`]) around three scalars: raw `progress`, the derived
//! `value`, and an advisory `paused` flag.  It owns no clock: an external
//! driver (render loop, test harness, …) pushes progress in once per tick
//! and reads the eased value back out.
//!
//! # Driver contract
//!
//! ```
//! use tweenkit::animation::Animation;
//! use tweenkit::ease::Curve;
//!
//! let mut fade = Animation::new(Curve::OutCubic);
//! // once per frame:
//! if !fade.paused() {
//!     fade.set_progress(fade.progress() + fade.speed());
//! }
//! let opacity = fade.value();
//! # assert!(opacity > 0.0);
//! ```
//!
//! [`Animation::advance`] packages exactly that step.  Note that pausing is
//! advisory: `set_progress` itself performs no gating, so a driver that
//! ignores `paused()` will keep animating.

use crate::ease::Ease;
use crate::playback::{Playback, Snapshot};
use log::trace;

/// Default per-tick progress increment.
pub const DEFAULT_SPEED: f64 = 0.1;

/// A caller-driven scalar animation.
///
/// `value` is a derived cache: after every [`set_progress`] it equals
/// `playback.compute_value(snapshot)` for the current state.  The only way
/// to break that relation is the [`set_value`] escape hatch, and the next
/// `set_progress` restores it.
///
/// `speed`, `ease`, and `playback` are fixed at construction; `progress`,
/// `value`, and `paused` are the mutable state.
///
/// [`set_progress`]: Animation::set_progress
/// [`set_value`]: Animation::set_value
#[derive(Debug, Clone)]
pub struct Animation<E: Ease> {
    value: f64,
    progress: f64,
    paused: bool,
    speed: f64,
    playback: Playback,
    ease: E,
}

impl<E: Ease> Animation<E> {
    /// Create an animation with the default parameters: `playback = Once`,
    /// `paused = false`, `speed = 0.1`, `progress = 0`.
    ///
    /// The value is computed immediately, so `value()` reflects the
    /// starting progress without waiting for the first tick.
    pub fn new(ease: E) -> Self {
        Self::builder(ease).build()
    }

    /// Start a builder for an animation with non-default parameters.
    pub fn builder(ease: E) -> AnimationBuilder<E> {
        AnimationBuilder {
            ease,
            playback: Playback::default(),
            paused: false,
            speed: DEFAULT_SPEED,
            progress: 0.0,
        }
    }

    //  Accessors

    /// The cached eased value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The raw progress as last set, before folding and shaping.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether the animation is flagged as paused.
    ///
    /// The flag is advisory storage for the driver — see [`set_paused`].
    ///
    /// [`set_paused`]: Animation::set_paused
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// The suggested per-tick progress increment.
    ///
    /// The engine never applies it on its own; drivers read it to decide
    /// how far to advance progress each tick.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The playback policy.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// The easing curve.
    pub fn ease(&self) -> &E {
        &self.ease
    }

    /// How far the value is from 1: `1.0 - value()`.
    pub fn remaining(&self) -> f64 {
        1.0 - self.value
    }

    //  Mutators

    /// Set the raw progress and recompute the value through the playback
    /// policy and easing curve.  Chainable.
    ///
    /// This is the steady-state driver path and the only operation that
    /// keeps `value` consistent with `progress`.  It is *not* gated by
    /// [`paused`](Animation::paused): honoring the pause flag is the
    /// driver's job.
    pub fn set_progress(&mut self, progress: f64) -> &mut Self {
        self.progress = progress;
        self.value = self.playback.compute_value(&self.snapshot());
        trace!(
            "progress {:.4} -> value {:.4} ({:?})",
            self.progress,
            self.value,
            self.playback
        );
        self
    }

    /// Overwrite the cached value directly, bypassing the playback/ease
    /// computation.  Chainable.
    ///
    /// Escape hatch for initialization and hand-offs only: after this call
    /// `value` and `progress` are unrelated until the next
    /// [`set_progress`](Animation::set_progress).
    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.value = value;
        self
    }

    /// Set the pause flag.  Chainable.
    ///
    /// Purely advisory: the engine does not gate
    /// [`set_progress`](Animation::set_progress) on it.  The driver
    /// contract is to skip the tick while `paused()` is true (which is
    /// what [`advance`](Animation::advance) does).
    pub fn set_paused(&mut self, paused: bool) -> &mut Self {
        self.paused = paused;
        self
    }

    /// Perform one conventional driver tick: a no-op while paused,
    /// otherwise `set_progress(progress + speed)`.  Chainable.
    pub fn advance(&mut self) -> &mut Self {
        self.advance_by(1.0)
    }

    /// Like [`advance`](Animation::advance), but scales the increment:
    /// `set_progress(progress + speed * delta)`.  Useful for drivers that
    /// tick with a variable frame delta.
    pub fn advance_by(&mut self, delta: f64) -> &mut Self {
        if self.paused {
            return self;
        }
        self.set_progress(self.progress + self.speed * delta)
    }

    /// Read-only view of the current state, as handed to the playback
    /// policy.
    pub fn snapshot(&self) -> Snapshot<'_, E> {
        Snapshot {
            progress: self.progress,
            speed: self.speed,
            paused: self.paused,
            ease: &self.ease,
        }
    }
}

/// Fluent builder returned by [`Animation::builder`].
///
/// Every parameter has a default (`playback = Once`, `paused = false`,
/// `speed = 0.1`, `progress = 0`); [`build`](AnimationBuilder::build) runs
/// one progress pass so the finished animation's value is already
/// consistent with its starting progress.
#[derive(Debug, Clone)]
pub struct AnimationBuilder<E: Ease> {
    ease: E,
    playback: Playback,
    paused: bool,
    speed: f64,
    progress: f64,
}

impl<E: Ease> AnimationBuilder<E> {
    /// Set the playback policy.
    pub fn playback(mut self, playback: Playback) -> Self {
        self.playback = playback;
        self
    }

    /// Start the animation paused.
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Set the suggested per-tick increment.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the starting progress.
    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    /// Finish the builder.
    pub fn build(self) -> Animation<E> {
        let mut animation = Animation {
            value: 0.0,
            progress: 0.0,
            paused: self.paused,
            speed: self.speed,
            playback: self.playback,
            ease: self.ease,
        };
        animation.set_progress(self.progress);
        animation
    }
}

//  Tests
