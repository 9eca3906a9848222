use crate::store::AppState;
use crate::ui::app::App;
use crate::ui::footer::{render_footer, FooterMode};
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, state: &AppState) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(state, app.home().is_fetching()), header);
    frame.render_widget(Clear, body);
    render_home(frame, body, app.home(), state);
    render_footer(frame, footer, FooterMode::for_page(app.home(), state));
}
