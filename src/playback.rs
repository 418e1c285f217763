//! Playback policy: how raw progress is folded into `[0, 1]`.
//!
//! Progress is caller-driven and may run past 1 or below 0.  The
//! [`Playback`] policy decides what that means — clamp and hold
//! ([`Playback::Once`]), wrap around for a repeating cycle
//! ([`Playback::Loop`]), or reflect for back-and-forth motion
//! ([`Playback::PingPong`]) — *before* the easing curve sees the input.
//! Every policy is a total function over any finite progress; out-of-range
//! values are resolved, never rejected.

use crate::ease::Ease;
use serde::{Deserialize, Serialize};

/// Read-only view of an animation's state, handed to the playback policy.
///
/// The policy only reads from the snapshot; computing a value never mutates
/// the animation.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a, E: Ease> {
    /// Raw, pre-shaping progress as last set by the driver.
    pub progress: f64,
    /// Suggested per-tick progress increment.
    pub speed: f64,
    /// Advisory pause flag.
    pub paused: bool,
    /// The easing curve applied after folding.
    pub ease: &'a E,
}

/// How out-of-`[0, 1]` progress is folded before easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Playback {
    /// Run once and hold: progress is clamped to `[0, 1]`, so the value
    /// plateaus at `ease.apply(1.0)` once progress reaches 1 (and at
    /// `ease.apply(0.0)` below 0).
    #[default]
    Once,
    /// Repeat: progress wraps modulo 1, so the cycle restarts at each
    /// whole number.  Exactly 1.0 wraps to 0.0.
    Loop,
    /// Back and forth: progress reflects off 0 and 1 in a triangle wave
    /// with period 2, so `[1, 2)` maps to `2 - progress`.
    PingPong,
}

impl Playback {
    /// Fold raw progress into `[0, 1]` according to this policy.
    pub fn fold(self, progress: f64) -> f64 {
        match self {
            Playback::Once => progress.clamp(0.0, 1.0),
            Playback::Loop => progress.rem_euclid(1.0),
            Playback::PingPong => {
                let t = progress.rem_euclid(2.0);
                if t > 1.0 {
                    2.0 - t
                } else {
                    t
                }
            }
        }
    }

    /// Compute the externally visible value for the given snapshot: fold
    /// the raw progress, then shape it with the snapshot's ease.
    pub fn compute_value<E: Ease>(self, snapshot: &Snapshot<'_, E>) -> f64 {
        snapshot.ease.apply(self.fold(snapshot.progress))
    }
}

//  Tests
