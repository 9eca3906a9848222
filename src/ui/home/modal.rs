//! Detail modal for the selected image and the unfavorite confirmation.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::Cat;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    CAT_ORANGE, FAVORITE_STAR, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
};

const MODAL_WIDTH: u16 = 64;
const CONFIRM_WIDTH: u16 = 44;

pub fn render_cat_modal(frame: &mut Frame, area: Rect, cat: &Cat, favorite: bool, pending: bool) {
    let label = Style::default().fg(HEADER_SEPARATOR);
    let value = Style::default().fg(HEADER_TEXT);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("URL:  ", label),
            Span::styled(cat.url.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Size: ", label),
            Span::styled(
                cat.dimensions().unwrap_or_else(|| "unknown".to_string()),
                value,
            ),
        ]),
    ];

    if let Some(breed) = cat.breed() {
        let origin = breed
            .origin
            .as_deref()
            .map(|origin| format!(" ({})", origin))
            .unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled("Breed: ", label),
            Span::styled(format!("{}{}", breed.name, origin), value),
        ]));
        if let Some(temperament) = &breed.temperament {
            lines.push(Line::from(vec![
                Span::styled("Temperament: ", label),
                Span::styled(temperament.clone(), value),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(if pending {
        Line::styled("☆ Saving favorite...", label)
    } else if favorite {
        Line::styled("★ Favorite", Style::default().fg(FAVORITE_STAR))
    } else {
        Line::styled("☆ Not a favorite", label)
    });
    lines.push(Line::from(""));
    lines.push(Line::styled("f: Favorite/Unfavorite  Esc: Close", label));

    let height = lines.len() as u16 + 4;
    let rect = centered_rect_by_size(area, MODAL_WIDTH, height);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            format!(" Cat {} ", cat.id),
            Style::default().fg(CAT_ORANGE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        rect,
    );
}

pub fn render_confirmation_dialog(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Remove this image from favorites?"),
        Line::from(""),
        Line::styled("y: Remove  n/Esc: Keep", Style::default().fg(HEADER_SEPARATOR)),
    ];
    let rect = centered_rect_by_size(area, CONFIRM_WIDTH, lines.len() as u16 + 2);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(" Confirm ", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
