//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use catgallery::fetch::FetchCommand;
use catgallery::models::{Cat, FavoriteId};
use catgallery::store::{AppState, StoreContext};
use catgallery::ui::app::App;
use catgallery::ui::home::{HomePage, DEFAULT_PAGE_SIZE};
use catgallery::ui::render::draw;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

pub fn cat(id: &str) -> Cat {
    Cat::new(id, format!("https://cdn.example/{}.jpg", id))
}

pub fn cats(ids: &[&str]) -> Vec<Cat> {
    ids.iter().map(|id| cat(id)).collect()
}

/// Home page wired to a command channel the test can inspect.
pub fn make_app(ctx: &StoreContext<'_>) -> (App, mpsc::Receiver<FetchCommand>) {
    let (tx, rx) = mpsc::channel(64);
    let app = App::new(HomePage::new(ctx, tx, DEFAULT_PAGE_SIZE));
    (app, rx)
}

pub fn drain(rx: &mut mpsc::Receiver<FetchCommand>) -> Vec<FetchCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Draw one frame of the whole app and return the screen as text.
pub fn render(app: &App, state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|frame| draw(frame, app, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
