use crate::store::AppState;
use crate::ui::theme::{CAT_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &AppState, fetching: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let activity = if fetching {
            Span::styled("⟳", Style::default().fg(CAT_ORANGE))
        } else {
            Span::styled("●", Style::default().fg(STATUS_OK))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            activity,
            Span::styled("  ", text_style),
            Span::styled(
                "catgallery",
                Style::default().fg(CAT_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} images", state.cats.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} favorites", state.favorites.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} breeds", state.breeds.len()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
