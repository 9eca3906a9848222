use crate::api::CatApiClient;
use crate::config::Config;
use crate::fetch::spawn_fetch_worker;
use crate::store::AppProvider;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::home::HomePage;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the gallery until the user quits.
///
/// The UI loop owns the store; network work runs on `runtime`.
pub fn run(config: &Config, client: Arc<CatApiClient>, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let fetcher = spawn_fetch_worker(runtime, client, events.sender());
    let provider = AppProvider::new();

    let result = provider.provide(|ctx| -> io::Result<()> {
        let mut app = App::new(HomePage::new(
            ctx,
            fetcher,
            config.query.initial_page_size,
        ));
        if let Ok((cols, rows)) = crossterm::terminal::size() {
            app.on_resize(cols, rows);
        }
        app.mount();

        loop {
            terminal.draw(|frame| draw(frame, &app, &ctx.read()))?;
            if app.should_quit() {
                break;
            }

            match events.next(tick_rate) {
                Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
                Ok(AppEvent::Tick) => {}
                Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
                Ok(AppEvent::Fetch(outcome)) => app.on_fetch(outcome),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        Ok(())
    });

    drop(guard);
    tracing::info!(cats = provider.snapshot().cats.len(), "Gallery closed");
    result
}
