use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::store::AppState;
use crate::ui::home::grid::CatGrid;
use crate::ui::home::modal::{render_cat_modal, render_confirmation_dialog};
use crate::ui::home::page::HomePage;
use crate::ui::home::placeholder::{ErrorIndicator, Skeleton};
use crate::ui::theme::{CAT_ORANGE, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};

const BUTTON_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 20;

/// Render the home page into `area`.
///
/// Error wins over loading; otherwise the grid, pagination button,
/// optional notice and modal are drawn.
pub fn render_home(frame: &mut Frame, area: Rect, page: &HomePage, state: &AppState) {
    if page.is_error() {
        frame.render_widget(ErrorIndicator::new(page.error_message()), area);
        return;
    }
    if page.is_loading() {
        frame.render_widget(Skeleton, area);
        return;
    }

    let notice_height = u16::from(page.notice().is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(notice_height),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(area);

    frame.render_widget(CatGrid::new(state, page.cursor()), chunks[0]);

    if let Some(notice) = page.notice() {
        frame.render_widget(
            Paragraph::new(Line::styled(notice.to_string(), Style::default().fg(STATUS_ERROR))),
            chunks[1],
        );
    }

    let button_area = Rect {
        x: chunks[2].x + chunks[2].width.saturating_sub(BUTTON_WIDTH) / 2,
        width: BUTTON_WIDTH.min(chunks[2].width),
        ..chunks[2]
    };
    let button_style = if page.is_fetching() {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(CAT_ORANGE).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(page.pagination_label())
            .style(button_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        button_area,
    );

    if let Some(cat) = state.modal_cat() {
        render_cat_modal(
            frame,
            area,
            cat,
            state.is_favorite(&cat.id),
            page.is_favorite_pending(&cat.id),
        );
        if state.confirmation_dialog {
            render_confirmation_dialog(frame, area);
        }
    }
}
