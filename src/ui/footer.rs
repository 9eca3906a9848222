//! Bottom bar: key hints for whichever layer has focus, version on the right.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::store::AppState;
use crate::ui::home::HomePage;
use crate::ui::theme::{CAT_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

/// Which keys are live right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    Grid,
    Modal,
    Confirm,
    /// Error indicator or skeleton: only quitting works.
    Halted,
}

impl FooterMode {
    pub fn for_page(page: &HomePage, state: &AppState) -> Self {
        if page.is_halted() {
            FooterMode::Halted
        } else if state.modal_cat().is_none() {
            FooterMode::Grid
        } else if state.confirmation_dialog {
            FooterMode::Confirm
        } else {
            FooterMode::Modal
        }
    }

    fn hints(self) -> &'static [(&'static str, &'static str)] {
        match self {
            FooterMode::Grid => &[
                ("←↑↓→", "move"),
                ("Enter", "open"),
                ("n", "next page"),
                ("q", "quit"),
            ],
            FooterMode::Modal => &[("f", "favorite"), ("Esc", "close"), ("q", "quit")],
            FooterMode::Confirm => &[("y", "remove"), ("n/Esc", "keep")],
            FooterMode::Halted => &[("q", "quit")],
        }
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, mode: FooterMode) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key_style = Style::default().fg(CAT_ORANGE);
    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let mut spans = vec![Span::raw(" ")];
    for (index, (key, action)) in mode.hints().iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(HEADER_SEPARATOR)));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", action), text_style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    frame.render_widget(
        Paragraph::new(Line::styled(
            concat!("catgallery v", env!("CARGO_PKG_VERSION"), " "),
            text_style,
        ))
        .alignment(Alignment::Right),
        inner,
    );
}
