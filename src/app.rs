// The central application controller and event loop.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub mod model;
pub mod status;
pub mod ui;
pub mod view;

use status::StatusSource;
use view::StatusView;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub struct App {
    view: StatusView,
    copyright_year: i32,
    should_quit: bool,
}

impl App {
    pub fn new(source: Arc<dyn StatusSource>, copyright_year: i32) -> Self {
        Self {
            view: StatusView::new(source),
            copyright_year,
            should_quit: false,
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.view.mount();
        let mut dirty = true;

        loop {
            dirty |= self.view.poll();
            if dirty {
                terminal.draw(|f| ui::render(f, self.view.state(), self.copyright_year))?;
                dirty = false;
            }

            // Blocks this worker; the fetch task runs on the other runtime threads.
            if event::poll(POLL_TIMEOUT)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.on_key(key.code);
                        dirty = true;
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            if self.should_quit {
                self.view.unmount();
                return Ok(());
            }
        }
    }

    fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                info!("manual refresh");
                self.view.mount();
            }
            _ => {}
        }
    }
}
