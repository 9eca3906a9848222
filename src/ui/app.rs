use crate::fetch::FetchOutcome;
use crate::ui::home::HomePage;
use crate::ui::layout::body_rect;
use ratatui::layout::Rect;

pub struct App {
    should_quit: bool,
    home: HomePage,
}

impl App {
    pub fn new(home: HomePage) -> Self {
        Self {
            should_quit: false,
            home,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn home(&self) -> &HomePage {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomePage {
        &mut self.home
    }

    pub fn mount(&mut self) {
        self.home.mount();
    }

    /// Terminal resized to `cols` x `rows`.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let body = body_rect(Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        });
        self.home.on_resize(body.width.max(1));
    }

    pub fn on_fetch(&mut self, outcome: FetchOutcome) {
        self.home.on_fetch(outcome);
    }
}
