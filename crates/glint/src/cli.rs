//! Command-line options.

use std::path::PathBuf;

use clap::Parser;
use glint_config::Config;
use glint_core::Rgba;

/// Drifting particles and a cursor trail for your terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for particle placement; makes runs reproducible.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of particles.
    #[arg(long)]
    pub count: Option<usize>,

    /// Particle speed scale.
    #[arg(long)]
    pub speed: Option<f64>,

    /// Particle size scale.
    #[arg(long)]
    pub size: Option<f64>,

    /// Particle color: #rrggbb, rgb(r, g, b) or rgba(r, g, b, a).
    #[arg(long)]
    pub color: Option<Rgba>,

    /// Don't draw lines between nearby particles.
    #[arg(long)]
    pub no_connections: bool,

    /// Target frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Hide the hover card.
    #[arg(long)]
    pub no_card: bool,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Override config-file values with whatever was given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(count) = self.count {
            config.particles.count = count;
        }
        if let Some(speed) = self.speed {
            config.particles.speed = speed;
        }
        if let Some(size) = self.size {
            config.particles.size = size;
        }
        if let Some(color) = self.color {
            config.particles.color = color;
        }
        if self.no_connections {
            config.particles.connections = false;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if self.no_card {
            config.show_card = false;
        }
    }
}
