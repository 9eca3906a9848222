//! Image grid widget. Each image is a fixed-size cell showing its id,
//! dimensions and favorite marker.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::models::Cat;
use crate::store::AppState;
use crate::ui::theme::{CAT_ORANGE, FAVORITE_STAR, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

pub const CELL_WIDTH: u16 = 18;
pub const CELL_HEIGHT: u16 = 4;

/// Number of grid columns that fit in `width`.
pub fn columns_for(width: u16) -> usize {
    usize::from((width / CELL_WIDTH).max(1))
}

/// First visible row so that `cursor_row` stays on screen.
pub fn first_visible_row(cursor_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if cursor_row >= visible_rows {
        cursor_row + 1 - visible_rows
    } else {
        0
    }
}

pub struct CatGrid<'a> {
    state: &'a AppState,
    cursor: usize,
}

impl<'a> CatGrid<'a> {
    pub fn new(state: &'a AppState, cursor: usize) -> Self {
        Self { state, cursor }
    }
}

impl Widget for CatGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.state.cats.is_empty() {
            Paragraph::new("No images yet.")
                .style(Style::default().fg(HEADER_SEPARATOR))
                .render(area, buf);
            return;
        }

        let columns = columns_for(area.width);
        let visible_rows = usize::from((area.height / CELL_HEIGHT).max(1));
        let first_row = first_visible_row(self.cursor / columns, visible_rows);

        for (index, cat) in self
            .state
            .cats
            .iter()
            .enumerate()
            .skip(first_row * columns)
            .take(visible_rows * columns)
        {
            let row = (index / columns - first_row) as u16;
            let col = (index % columns) as u16;
            let cell = Rect {
                x: area.x + col * CELL_WIDTH,
                y: area.y + row * CELL_HEIGHT,
                width: CELL_WIDTH.min(area.width.saturating_sub(col * CELL_WIDTH)),
                height: CELL_HEIGHT.min(area.height.saturating_sub(row * CELL_HEIGHT)),
            };
            render_cell(
                cat,
                index == self.cursor,
                self.state.is_favorite(&cat.id),
                cell,
                buf,
            );
        }
    }
}

fn render_cell(cat: &Cat, focused: bool, favorite: bool, area: Rect, buf: &mut Buffer) {
    let border = if focused {
        Style::default().fg(CAT_ORANGE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };
    let star = if favorite {
        Span::styled("★ ", Style::default().fg(FAVORITE_STAR))
    } else {
        Span::raw("  ")
    };
    let lines = vec![
        Line::from(vec![
            star,
            Span::styled(cat.id.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(Span::styled(
            cat.dimensions().unwrap_or_default(),
            Style::default().fg(HEADER_SEPARATOR),
        )),
    ];
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border))
        .render(area, buf);
}
