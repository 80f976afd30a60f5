//! Frame-driven effects.

use crate::{Size, Surface};

/// An effect advanced once per frame.
pub trait Animation {
    /// Advance one frame and draw it onto `surface`.
    fn tick(&mut self, surface: &mut dyn Surface);

    /// The hosting container changed size.
    fn resize(&mut self, size: Size);
}
