use std::io;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use glint_config::Config;
use ratatui::{DefaultTerminal, layout::Rect};
use tokio_util::sync::CancellationToken;

mod app;
mod canvas;
mod cli;
mod logging;

use app::App;
use cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.verbose, glint_config::default_log_path().as_deref());

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = run(terminal, config);
    ratatui::restore();
    result
}

fn run(terminal: DefaultTerminal, config: Config) -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture)?;

    let container = match terminal.size() {
        Ok(size) => Some(Rect::new(0, 0, size.width, size.height)),
        Err(err) => {
            tracing::warn!(%err, "could not read terminal size");
            None
        }
    };

    let result = App::new(config, container, CancellationToken::new()).run(terminal);
    execute!(io::stdout(), DisableMouseCapture)?;
    result
}
