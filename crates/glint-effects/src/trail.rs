//! Cursor trail: a short queue of pointer samples that fade out.

use std::collections::VecDeque;

use glint_core::{Animation, Point, Rgba, Size, Surface};
use serde::{Deserialize, Serialize};

/// Upper bound on `max_points`.
pub const MAX_TRAIL_POINTS: usize = 1_000;

/// Cursor trail options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Maximum number of live samples; older ones are dropped first.
    pub max_points: usize,
    /// Life lost per tick. A sample starts with life 1.
    pub decay: f32,
    /// Radius of a fresh sample.
    pub radius: f64,
    pub color: Rgba,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_points: 20,
            decay: 0.05,
            radius: 2.0,
            color: Rgba::opaque(0, 102, 255),
        }
    }
}

/// One pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub position: Point,
    /// Remaining life in `(0, 1]`.
    pub life: f32,
}

/// Bounded, continuously decaying queue of pointer samples.
#[derive(Debug, Clone, Default)]
pub struct CursorTrail {
    config: TrailConfig,
    points: VecDeque<TrailPoint>,
}

impl CursorTrail {
    /// Create an empty trail; `max_points` is capped at [`MAX_TRAIL_POINTS`].
    pub fn new(mut config: TrailConfig) -> Self {
        config.max_points = config.max_points.min(MAX_TRAIL_POINTS);
        let points = VecDeque::with_capacity(config.max_points + 1);
        Self { config, points }
    }

    /// Record a pointer sample.
    pub fn push(&mut self, position: Point) {
        if self.config.max_points == 0 {
            return;
        }
        self.points.push_back(TrailPoint {
            position,
            life: 1.0,
        });
        while self.points.len() > self.config.max_points {
            self.points.pop_front();
        }
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Age every sample by one tick and drop the dead ones.
    pub fn update(&mut self) {
        // A non-positive decay would keep samples alive forever.
        let decay = if self.config.decay > 0.0 {
            self.config.decay
        } else {
            TrailConfig::default().decay
        };
        for point in &mut self.points {
            point.life -= decay;
        }
        self.points.retain(|p| p.life > 0.0);
    }

    /// Draw each sample shrunk and faded by its remaining life.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for point in &self.points {
            surface.fill_circle(
                point.position,
                self.config.radius * point.life as f64,
                self.config.color.with_alpha(point.life),
            );
        }
    }
}

impl Animation for CursorTrail {
    fn tick(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        self.update();
        self.draw(surface);
    }

    fn resize(&mut self, _size: Size) {}
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glint_core::{DrawCommand, DrawList};

    use super::*;

    #[test]
    fn test_trail_is_bounded() {
        let mut trail = CursorTrail::new(TrailConfig::default());
        for i in 0..30 {
            trail.push(Point::new(i as f64, 0.0));
        }
        assert_eq!(trail.points().len(), 20);
        // Oldest samples were evicted first.
        assert_eq!(trail.points().next().unwrap().position, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_points_die_after_twenty_ticks() {
        let mut trail = CursorTrail::new(TrailConfig::default());
        trail.push(Point::new(5.0, 5.0));

        for _ in 0..19 {
            trail.update();
        }
        assert_eq!(trail.points().len(), 1);
        assert!(trail.points().next().unwrap().life > 0.0);

        trail.update();
        assert!(trail.is_empty());
    }

    #[test]
    fn test_draw_scales_with_life() {
        let mut trail = CursorTrail::new(TrailConfig::default());
        trail.push(Point::new(1.0, 2.0));
        let mut surface = DrawList::new(Size::new(10.0, 10.0));

        for _ in 0..10 {
            trail.tick(&mut surface);
        }
        let circles: Vec<_> = surface.circles().collect();
        assert_eq!(circles.len(), 1);
        match circles[0] {
            DrawCommand::Circle { radius, color, .. } => {
                assert_relative_eq!(*radius, 1.0, epsilon = 1e-5);
                assert_relative_eq!(color.a, 0.5, epsilon = 1e-5);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn test_huge_capacity_is_capped() {
        let config: TrailConfig = toml::from_str("max_points = 9223372036854775807").unwrap();
        let mut trail = CursorTrail::new(config);
        for i in 0..MAX_TRAIL_POINTS + 10 {
            trail.push(Point::new(i as f64, 0.0));
        }
        assert_eq!(trail.points().len(), MAX_TRAIL_POINTS);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut trail = CursorTrail::new(TrailConfig {
            max_points: 0,
            ..Default::default()
        });
        trail.push(Point::new(1.0, 1.0));
        assert!(trail.is_empty());
    }

    #[test]
    fn test_non_positive_decay_still_fades() {
        let mut trail = CursorTrail::new(TrailConfig {
            decay: 0.0,
            ..Default::default()
        });
        trail.push(Point::new(1.0, 1.0));
        for _ in 0..25 {
            trail.update();
        }
        assert!(trail.is_empty());
    }
}
