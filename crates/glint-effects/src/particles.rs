//! Bouncing particles with proximity connections.

use glint_core::{Animation, Point, Rgba, Size, Surface};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Particles closer than this are joined by a line.
pub const CONNECTION_DISTANCE: f64 = 100.0;

/// Stroke width of connection lines.
const CONNECTION_WIDTH: f64 = 0.5;

/// Upper bound on `count`; connections cost O(n²) per tick.
pub const MAX_PARTICLES: usize = 2_000;

/// Particle system options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles.
    pub count: usize,
    /// Velocity components are drawn from `[-speed/2, speed/2)`.
    pub speed: f64,
    /// Radii are drawn from `[1, size + 1)`.
    pub size: f64,
    /// Fill color for particles; connections reuse its RGB.
    pub color: Rgba,
    /// Draw lines between nearby particles.
    pub connections: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            speed: 1.0,
            size: 2.0,
            color: Rgba::default(),
            connections: true,
        }
    }
}

impl ParticleConfig {
    /// Clamp out-of-range values to the nearest harmless setting.
    ///
    /// `count` is capped at [`MAX_PARTICLES`]. Negative, NaN and infinite
    /// `speed`/`size` become 0, which yields stationary particles of
    /// radius 1.
    pub fn sanitized(mut self) -> Self {
        self.count = self.count.min(MAX_PARTICLES);
        self.speed = non_negative(self.speed);
        self.size = non_negative(self.size);
        self
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// A single moving point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    /// Spawn a particle at a uniformly random spot inside `bounds`.
    pub fn random(bounds: Size, config: &ParticleConfig, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random::<f64>() * bounds.width,
            y: rng.random::<f64>() * bounds.height,
            vx: (rng.random::<f64>() - 0.5) * config.speed,
            vy: (rng.random::<f64>() - 0.5) * config.speed,
            radius: rng.random::<f64>() * config.size + 1.0,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move by one tick's velocity and bounce off the edges of `bounds`.
    ///
    /// Each axis is handled on its own. A particle found outside the bounds
    /// gets its velocity on that axis pointed back inside, so it may
    /// overshoot by at most one tick before heading back.
    pub fn step(&mut self, bounds: Size) {
        self.x += self.vx;
        self.y += self.vy;
        self.vx = bounce(self.x, self.vx, bounds.width);
        self.vy = bounce(self.y, self.vy, bounds.height);
    }
}

fn bounce(pos: f64, vel: f64, extent: f64) -> f64 {
    if pos < 0.0 {
        vel.abs()
    } else if pos > extent {
        -vel.abs()
    } else {
        vel
    }
}

/// Opacity of the line joining two particles `distance` apart, if any.
fn connection_opacity(distance: f64) -> Option<f32> {
    (distance < CONNECTION_DISTANCE).then(|| (1.0 - distance / CONNECTION_DISTANCE) as f32)
}

/// A fixed set of particles drifting across a surface.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    config: ParticleConfig,
    /// `None` when there is no container to draw into.
    bounds: Option<Size>,
    particles: Vec<Particle>,
}

impl ParticleSystem {
    /// Create a system sized to `container`, spawning particles from `rng`.
    ///
    /// Without a container the system is inert: it holds no particles and
    /// never draws.
    pub fn new(config: ParticleConfig, container: Option<Size>, rng: &mut impl Rng) -> Self {
        let config = config.sanitized();
        let Some(bounds) = container.map(sanitize_size) else {
            tracing::warn!("no drawing surface available, particle system disabled");
            return Self {
                config,
                bounds: None,
                particles: Vec::new(),
            };
        };

        let particles = (0..config.count)
            .map(|_| Particle::random(bounds, &config, rng))
            .collect();
        tracing::debug!(
            count = config.count,
            width = bounds.width,
            height = bounds.height,
            "spawned particles"
        );

        Self {
            config,
            bounds: Some(bounds),
            particles,
        }
    }

    /// Create a system from explicit particles.
    pub fn with_particles(config: ParticleConfig, bounds: Size, particles: Vec<Particle>) -> Self {
        Self {
            config: config.sanitized(),
            bounds: Some(sanitize_size(bounds)),
            particles,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn bounds(&self) -> Option<Size> {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance all particles by one tick without drawing.
    pub fn update(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        for particle in &mut self.particles {
            particle.step(bounds);
        }
    }

    /// Draw the current state: discs first, then connections.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.bounds.is_none() {
            return;
        }

        for p in &self.particles {
            surface.fill_circle(p.position(), p.radius, self.config.color);
        }

        if !self.config.connections {
            return;
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position().distance(b.position());
                if let Some(opacity) = connection_opacity(distance) {
                    surface.stroke_line(
                        a.position(),
                        b.position(),
                        self.config.color.with_alpha(opacity),
                        CONNECTION_WIDTH,
                    );
                }
            }
        }
    }
}

impl Animation for ParticleSystem {
    fn tick(&mut self, surface: &mut dyn Surface) {
        if self.bounds.is_none() {
            return;
        }
        surface.clear();
        self.update();
        self.draw(surface);
    }

    /// Adopt the new bounds; particles stay where they are and bounce back
    /// in on their own.
    fn resize(&mut self, size: Size) {
        if self.bounds.is_none() {
            return;
        }
        let size = sanitize_size(size);
        tracing::debug!(width = size.width, height = size.height, "particle surface resized");
        self.bounds = Some(size);
    }
}

fn sanitize_size(size: Size) -> Size {
    Size::new(non_negative(size.width), non_negative(size.height))
}
