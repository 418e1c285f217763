//! **tweenkit** — a small caller-driven easing and interpolation engine.
//!
//! Given a progress input in the unit interval, the engine produces an
//! eased, time-evolving scalar value, optionally looping, bouncing back and
//! forth, or running once and holding.  It owns no clock and renders
//! nothing: a host (render loop, UI widget, test harness, …) pushes
//! progress in once per tick and reads the shaped value back out.
//!
//! # Architecture
//!
//! Three concepts compose:
//!
//! * [`ease::Ease`] — a pure shaping curve from normalized progress to a
//!   (possibly overshooting) output.  Built-in curves live in
//!   [`ease::Curve`]; any closure works too.
//! * [`playback::Playback`] — the policy that folds out-of-range progress
//!   into `[0, 1]` (clamp / wrap / reflect) before the curve is applied.
//! * [`animation::Animation`] — the mutable state holder combining the
//!   two with raw progress, the derived value, and an advisory pause flag.
//!
//! [`config::AnimationConfig`] additionally lets hosts describe animations
//! declaratively in JSON.
//!
//! # Example
//!
//! ```
//! use tweenkit::animation::Animation;
//! use tweenkit::ease::Curve;
//! use tweenkit::playback::Playback;
//!
//! let mut pulse = Animation::builder(Curve::InOutQuad)
//!     .playback(Playback::PingPong)
//!     .speed(0.05)
//!     .build();
//!
//! for _ in 0..30 {
//!     pulse.advance();
//! }
//! assert!((0.0..=1.0).contains(&pulse.value()));
//! ```

pub mod animation;
pub mod config;
pub mod ease;
pub mod playback;
