//! Immediate-mode drawing surface.

use crate::{Point, Rgba, Size};

/// A 2D immediate-mode drawing target.
///
/// Coordinates are surface-local with the origin in the top-left corner.
pub trait Surface {
    /// Current drawable area.
    fn size(&self) -> Size;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw a filled disc.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
}

/// A surface that records draw calls instead of rasterizing them.
///
/// `clear` drops everything recorded so far, so after a tick the list holds
/// exactly that frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for DrawList {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }
}
