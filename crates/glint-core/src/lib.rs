//! Core types shared by the glint effects and the terminal host.
//!
//! Effects draw through the [`Surface`] trait and are driven frame by frame
//! through [`Animation`]. [`DrawList`] is a recording surface that hosts can
//! replay onto whatever backend they render with.

mod animation;
mod color;
mod geometry;
mod surface;

pub use animation::Animation;
pub use color::{ParseColorError, Rgba};
pub use geometry::{Point, Rect, Size};
pub use surface::{DrawCommand, DrawList, Surface};
