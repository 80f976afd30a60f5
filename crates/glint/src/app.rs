//! The terminal application.

use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use glint_config::Config;
use glint_core::{Animation, DrawList, Point};
use glint_effects::{
    CursorTrail, FramePacer, ParticleSystem,
    motion::{self, Tilt},
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, LineGauge, Paragraph},
};
use tokio_util::sync::CancellationToken;

use crate::canvas;

/// Height of the pretend page the scroll wheel moves through, in rows.
const PAGE_ROWS: f64 = 400.0;
/// Rows moved per wheel notch.
const SCROLL_STEP: f64 = 3.0;

const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 7;

const ACCENT: Color = Color::Rgb(0, 102, 255);

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Stops the frame loop when cancelled.
    cancel: CancellationToken,
    config: Config,
    rng: StdRng,
    particles: ParticleSystem,
    trail: CursorTrail,
    particle_layer: DrawList,
    trail_layer: DrawList,
    /// Last known drawing area, in cells.
    last_area: Option<Rect>,
    /// Latest pointer position in surface units.
    pointer: Option<Point>,
    /// Scroll offset into the pretend page, in rows.
    scroll_y: f64,
    show_card: bool,
    frame_interval: Duration,
}

impl App {
    /// Construct a new instance of [`App`].
    ///
    /// `container` is the initial drawing area; `None` if the terminal size
    /// could not be read, in which case the particles stay disabled.
    pub fn new(config: Config, container: Option<Rect>, cancel: CancellationToken) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "starting glint");
        let mut rng = StdRng::seed_from_u64(seed);

        let size = container.map(canvas::surface_size);
        let particles = ParticleSystem::new(config.particles.clone(), size, &mut rng);
        let trail = CursorTrail::new(config.trail.clone());

        Self {
            cancel,
            rng,
            particles,
            trail,
            particle_layer: DrawList::new(size.unwrap_or_default()),
            trail_layer: DrawList::new(size.unwrap_or_default()),
            last_area: container,
            pointer: None,
            scroll_y: 0.0,
            show_card: config.show_card,
            frame_interval: config.frame_interval(),
            config,
        }
    }

    /// Run the application's main loop until cancelled.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut pacer = FramePacer::new(self.frame_interval);
        while !self.cancel.is_cancelled() {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(pacer.next_deadline())?;
        }
        Ok(())
    }

    /// Advance the effects one tick and render the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if self.last_area != Some(area) {
            self.resize(area);
        }

        self.particles.tick(&mut self.particle_layer);
        self.trail.tick(&mut self.trail_layer);

        let size = canvas::surface_size(area);
        let layers = [&self.particle_layer, &self.trail_layer];
        frame.render_widget(canvas::layers(size, &layers), area);

        let [progress, _, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_scroll_progress(frame, progress, area.height);
        if self.show_card {
            self.render_card(frame, area);
        }
        self.render_help(frame, help);
    }

    fn resize(&mut self, area: Rect) {
        let size = canvas::surface_size(area);
        self.particles.resize(size);
        self.trail.resize(size);
        self.particle_layer.set_size(size);
        self.trail_layer.set_size(size);
        self.last_area = Some(area);
        self.scroll_y = self.scroll_y.min(self.max_scroll(area.height));
    }

    fn max_scroll(&self, rows: u16) -> f64 {
        (PAGE_ROWS - rows as f64).max(0.0)
    }

    fn render_scroll_progress(&self, frame: &mut Frame, area: Rect, rows: u16) {
        let percent = motion::scroll_progress(self.scroll_y, PAGE_ROWS, rows as f64);
        let gauge = LineGauge::default()
            .filled_style(Style::new().fg(ACCENT))
            .unfilled_style(Style::new().fg(Color::DarkGray))
            .label(format!("{percent:>3.0}%"))
            .ratio(percent / 100.0);
        frame.render_widget(gauge, area);
    }

    /// A card that leans towards the pointer and is pulled along by it.
    fn render_card(&self, frame: &mut Frame, area: Rect) {
        let home = centered(area, CARD_WIDTH, CARD_HEIGHT);
        let home_rect = canvas::surface_rect(home);

        let (tilt, (dx, dy)) = match self.pointer {
            Some(p) => (motion::tilt(p, home_rect), motion::magnetic_offset(p, home_rect)),
            None => (Tilt::REST, (0.0, 0.0)),
        };
        let hovered = tilt != Tilt::REST;
        let card = offset(
            home,
            area,
            (dx / canvas::DOTS_X).round() as i32,
            (dy / canvas::DOTS_Y).round() as i32,
        );

        let border = if hovered { ACCENT } else { Color::DarkGray };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(border))
            .title(" glint ".bold());
        let text = vec![
            Line::from(format!("tilt x {:+6.1}°", tilt.rotate_x)),
            Line::from(format!("tilt y {:+6.1}°", tilt.rotate_y)),
            Line::from(format!("scale  {:6.2}", tilt.scale)),
            Line::from(format!("pull   {dx:+5.1}, {dy:+5.1}")).dark_gray(),
        ];

        frame.render_widget(Clear, card);
        frame.render_widget(Paragraph::new(text).centered().block(block), card);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = Line::from(vec![
            "q".bold().fg(ACCENT),
            " quit  ".dark_gray(),
            "r".bold().fg(ACCENT),
            " respawn  ".dark_gray(),
            "h".bold().fg(ACCENT),
            " toggle card  ".dark_gray(),
            "wheel".bold().fg(ACCENT),
            " scroll".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, area);
    }

    /// Reads crossterm events until the next frame is due.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> Result<()> {
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(());
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                // Picked up by the next render.
                Event::Resize(_, _) => {}
                _ => {}
            }
            if self.cancel.is_cancelled() {
                return Ok(());
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('r')) => self.respawn(),
            (_, KeyCode::Char('h')) => self.show_card = !self.show_card,
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let point = canvas::cell_center(mouse.column, mouse.row);
                self.pointer = Some(point);
                self.trail.push(point);
            }
            MouseEventKind::ScrollDown => self.scroll_by(SCROLL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-SCROLL_STEP),
            _ => {}
        }
    }

    fn scroll_by(&mut self, rows: f64) {
        let max = self.last_area.map_or(0.0, |a| self.max_scroll(a.height));
        self.scroll_y = (self.scroll_y + rows).clamp(0.0, max);
    }

    /// Recreate the whole particle set from the current RNG state.
    fn respawn(&mut self) {
        let size = self.last_area.map(canvas::surface_size);
        self.particles = ParticleSystem::new(self.config.particles.clone(), size, &mut self.rng);
    }

    /// Cancel the frame loop to quit the application.
    fn quit(&mut self) {
        self.cancel.cancel();
    }
}

/// A `width`×`height` rectangle centred in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Move `rect` by whole cells, keeping it inside `bounds`.
fn offset(rect: Rect, bounds: Rect, dx: i32, dy: i32) -> Rect {
    let max_x = (bounds.right() - rect.width) as i32;
    let max_y = (bounds.bottom() - rect.height) as i32;
    let x = (rect.x as i32 + dx).clamp(bounds.x as i32, max_x);
    let y = (rect.y as i32 + dy).clamp(bounds.y as i32, max_y);
    Rect::new(x as u16, y as u16, rect.width, rect.height)
}
