//! Replaying recorded draw lists onto a braille canvas.
//!
//! Surface units are braille dots: every terminal cell is 2 dots wide and
//! 4 dots tall, so the particle maths runs on a finer grid than the cells.

use glint_core::{DrawCommand, DrawList, Point, Rgba, Size};
use ratatui::{
    layout::Rect,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Context, Line, Points},
    },
};

/// Braille dots per cell, horizontally.
pub const DOTS_X: f64 = 2.0;
/// Braille dots per cell, vertically.
pub const DOTS_Y: f64 = 4.0;

/// Terminal background assumed when flattening translucent colors.
const BACKGROUND: Rgba = Rgba::BLACK;

/// Surface size covering a terminal area.
pub fn surface_size(area: Rect) -> Size {
    Size::new(area.width as f64 * DOTS_X, area.height as f64 * DOTS_Y)
}

/// Surface point at the centre of a terminal cell.
pub fn cell_center(column: u16, row: u16) -> Point {
    Point::new(
        (column as f64 + 0.5) * DOTS_X,
        (row as f64 + 0.5) * DOTS_Y,
    )
}

/// Surface rectangle covering a terminal area.
pub fn surface_rect(area: Rect) -> glint_core::Rect {
    glint_core::Rect::new(
        area.x as f64 * DOTS_X,
        area.y as f64 * DOTS_Y,
        area.width as f64 * DOTS_X,
        area.height as f64 * DOTS_Y,
    )
}

/// A canvas widget painting `layers` in order, later layers on top.
pub fn layers<'a>(size: Size, layers: &'a [&'a DrawList]) -> impl Widget + 'a {
    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, size.width])
        .y_bounds([0.0, size.height])
        .paint(move |ctx| {
            for layer in layers {
                for command in layer.commands() {
                    paint(ctx, size.height, command);
                }
                ctx.layer();
            }
        })
}

/// Canvas y grows upwards, surface y grows downwards.
fn paint(ctx: &mut Context, height: f64, command: &DrawCommand) {
    match *command {
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => {
            let color = color.over(BACKGROUND);
            let (x, y) = (center.x, height - center.y);
            ctx.draw(&Points {
                coords: &[(x, y)],
                color,
            });
            ctx.draw(&Circle {
                x,
                y,
                radius,
                color,
            });
        }
        DrawCommand::Line {
            from, to, color, ..
        } => {
            ctx.draw(&Line {
                x1: from.x,
                y1: height - from.y,
                x2: to.x,
                y2: height - to.y,
                color: color.over(BACKGROUND),
            });
        }
    }
}
