//! Full-body stand-ins shown instead of the grid.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::home::grid::{columns_for, CELL_HEIGHT, CELL_WIDTH};
use crate::ui::theme::{HEADER_SEPARATOR, SKELETON, STATUS_ERROR};

pub const ERROR_TITLE: &str = "Something went wrong while fetching cats.";

/// Generic error indicator.
pub struct ErrorIndicator<'a> {
    detail: Option<&'a str>,
}

impl<'a> ErrorIndicator<'a> {
    pub fn new(detail: Option<&'a str>) -> Self {
        Self { detail }
    }
}

impl Widget for ErrorIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(""),
            Line::styled(
                ERROR_TITLE,
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(detail) = self.detail {
            lines.push(Line::styled(
                detail.to_string(),
                Style::default().fg(HEADER_SEPARATOR),
            ));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Restart the application to try again. Press q to quit.",
            Style::default().fg(HEADER_SEPARATOR),
        ));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Grid-shaped loading placeholder.
pub struct Skeleton;

impl Widget for Skeleton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = columns_for(area.width) as u16;
        let rows = (area.height / CELL_HEIGHT).max(1);
        let style = Style::default().fg(SKELETON);
        for row in 0..rows {
            for col in 0..columns {
                let cell = Rect {
                    x: area.x + col * CELL_WIDTH,
                    y: area.y + row * CELL_HEIGHT,
                    width: CELL_WIDTH.min(area.width.saturating_sub(col * CELL_WIDTH)),
                    height: CELL_HEIGHT.min(area.height.saturating_sub(row * CELL_HEIGHT)),
                };
                let fill = "░".repeat(usize::from(cell.width.saturating_sub(2)));
                Paragraph::new(vec![Line::from(fill.clone()), Line::from(fill)])
                    .style(style)
                    .block(Block::default().borders(Borders::ALL).border_style(style))
                    .render(cell, buf);
            }
        }
    }
}
