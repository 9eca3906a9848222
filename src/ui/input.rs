use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press to the topmost layer: confirmation dialog, then
/// modal, then grid. While the error indicator or the skeleton covers the
/// body only the quit keys work.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.home().is_halted() {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            app.request_quit();
        }
        return;
    }

    if app.home().is_confirming() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.home_mut().confirm_unfavorite(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.home_mut().cancel_confirmation()
            }
            _ => {}
        }
        return;
    }

    if app.home().is_modal_open() {
        match key.code {
            KeyCode::Esc => app.home_mut().close_modal(),
            KeyCode::Char('f') => app.home_mut().toggle_favorite(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        }
        return;
    }

    let home = app.home_mut();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => home.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => home.move_cursor(1, 0),
        KeyCode::Up | KeyCode::Char('k') => home.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => home.move_cursor(0, 1),
        KeyCode::Enter => home.open_focused(),
        KeyCode::Char('n') | KeyCode::Char(' ') => home.load_more(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
