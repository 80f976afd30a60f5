//! Visual effects for glint.
//!
//! The centrepiece is [`ParticleSystem`], a set of drifting points that
//! bounce inside the surface and link up with translucent lines when they
//! come close. [`CursorTrail`] keeps a short decaying queue of pointer
//! samples. Both implement [`glint_core::Animation`] and can be driven by
//! [`run_until_cancelled`].

mod frame_loop;
pub mod motion;
mod particles;
mod trail;

pub use frame_loop::{FramePacer, run_until_cancelled};
pub use particles::{
    CONNECTION_DISTANCE, MAX_PARTICLES, Particle, ParticleConfig, ParticleSystem,
};
pub use trail::{CursorTrail, MAX_TRAIL_POINTS, TrailConfig, TrailPoint};
