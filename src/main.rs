// Entry point: terminal setup, then hand over to the App event loop.

mod app;
mod config;
mod logging;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use app::App;
use app::status::HttpStatusSource;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    logging::init_logging(&config.log_file, &config.log_level)?;

    let source = HttpStatusSource::new(&config.status_url, config.timeout())?;
    info!(url = %source.url(), "starting status dashboard");

    // Restore the terminal before the default hook prints the panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let year = chrono::Local::now().year();
    let mut app = App::new(Arc::new(source), year);
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "dashboard exited with error");
    }
    result
}
