//! Home page controller: fetch orchestration and user actions.
//!
//! Holds only view-local state (page counter, query flags, grid cursor).
//! Everything shared lives in the store and is changed through [`Dispatch`].

use std::collections::HashSet;

use crate::fetch::{FetchCommand, FetchOutcome, FetchSender};
use crate::models::{Cat, FavoriteId};
use crate::store::{AppAction, Dispatch, StateHandle, StoreContext};
use crate::ui::home::grid::columns_for;
use crate::ui::home::query::KeyedQuery;

/// Page counter value at mount.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

pub struct HomePage {
    page: u32,
    cats_query: KeyedQuery<u32>,
    dispatch: Dispatch,
    state: StateHandle,
    fetcher: FetchSender,
    cursor: usize,
    columns: usize,
    /// Images with an add-favorite request in flight.
    pending_favorites: HashSet<String>,
    notice: Option<String>,
}

impl HomePage {
    pub fn new(ctx: &StoreContext<'_>, fetcher: FetchSender, initial_page: u32) -> Self {
        Self {
            page: initial_page,
            cats_query: KeyedQuery::new(),
            dispatch: ctx.dispatcher(),
            state: ctx.state_handle(),
            fetcher,
            cursor: 0,
            columns: 1,
            pending_favorites: HashSet::new(),
            notice: None,
        }
    }

    /// Issue the initial requests: first image page, favorites and breeds.
    pub fn mount(&mut self) {
        self.request_cats(self.page);
        // Queue failures are logged by `send`; the grid renders without either list.
        let _ = self.send(FetchCommand::Favorites);
        let _ = self.send(FetchCommand::Breeds);
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.cats_query.is_loading()
    }

    pub fn is_fetching(&self) -> bool {
        self.cats_query.is_fetching()
    }

    pub fn is_error(&self) -> bool {
        self.cats_query.is_error()
    }

    /// The body shows the error indicator or the skeleton instead of the grid.
    pub fn is_halted(&self) -> bool {
        self.is_error() || self.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.cats_query.error_message()
    }

    pub fn pagination_label(&self) -> &'static str {
        if self.is_fetching() {
            "Fetching..."
        } else {
            "Load more"
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.read().modal_cat().is_some()
    }

    /// Unfavorite confirmation is showing on top of the modal.
    pub fn is_confirming(&self) -> bool {
        let state = self.state.read();
        state.modal_cat().is_some() && state.confirmation_dialog
    }

    pub fn is_favorite_pending(&self, image_id: &str) -> bool {
        self.pending_favorites.contains(image_id)
    }

    /// Advance the page counter and fetch the page keyed by the new value.
    pub fn load_more(&mut self) {
        let Some(next) = self.page.checked_add(1) else {
            tracing::warn!(page = self.page, "Page counter at maximum");
            self.notice = Some("No more pages can be requested.".to_string());
            return;
        };
        self.page = next;
        self.request_cats(next);
    }

    fn request_cats(&mut self, page_size: u32) {
        self.cats_query.begin(page_size);
        if let Err(message) = self.send(FetchCommand::Cats { page_size }) {
            self.cats_query.fail(page_size, message);
        }
    }

    fn send(&self, command: FetchCommand) -> Result<(), String> {
        self.fetcher.try_send(command).map_err(|err| {
            tracing::error!(error = %err, "Failed to queue fetch");
            format!("Fetch queue unavailable: {}", err)
        })
    }

    /// Apply a finished request to the store.
    pub fn on_fetch(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Cats { page_size, result } => match result {
                Ok(cats) => {
                    tracing::info!(page_size, count = cats.len(), "Fetched cats");
                    self.cats_query.succeed(page_size);
                    self.dispatch.dispatch(AppAction::SetCatList { cats });
                }
                Err(err) => {
                    tracing::warn!(page_size, error = %err, "Cats fetch failed");
                    self.cats_query.fail(page_size, err.user_message());
                }
            },
            FetchOutcome::Favorites { result } => match result {
                Ok(records) => {
                    let favorites = records.into_iter().map(FavoriteId::from).collect();
                    self.dispatch
                        .dispatch(AppAction::SetFavoriteList { favorites });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Favorites fetch failed");
                }
            },
            FetchOutcome::Breeds { result } => match result {
                Ok(breeds) => {
                    self.dispatch.dispatch(AppAction::SetBreedList { breeds });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Breeds fetch failed");
                }
            },
            FetchOutcome::FavoriteAdded { image_id, result } => {
                self.pending_favorites.remove(&image_id);
                match result {
                    Ok(favorite) => {
                        tracing::info!(image_id = %favorite.image_id, id = favorite.id, "Favorited");
                        self.notice = None;
                        self.dispatch.dispatch(AppAction::AddToFavorites { favorite });
                    }
                    Err(err) => {
                        tracing::warn!(%image_id, error = %err, "Add favorite failed");
                        self.notice = Some(format!(
                            "Could not favorite {}: {}",
                            image_id,
                            err.user_message()
                        ));
                    }
                }
            }
            FetchOutcome::FavoriteRemoved {
                favorite_id,
                result,
            } => match result {
                Ok(()) => {
                    tracing::info!(id = favorite_id, "Unfavorited");
                    self.notice = None;
                    self.dispatch
                        .dispatch(AppAction::RemoveFromFavorites { favorite_id });
                }
                Err(err) => {
                    tracing::warn!(id = favorite_id, error = %err, "Remove favorite failed");
                    self.notice = Some(format!(
                        "Could not remove favorite: {}",
                        err.user_message()
                    ));
                }
            },
        }
    }

    /// Select `cat` and open the modal.
    pub fn select(&mut self, cat: Cat) {
        self.dispatch
            .dispatch(AppAction::SetSelectedCat { cat: Some(cat) });
        self.dispatch
            .dispatch(AppAction::ToggleCatModal { cat_modal: true });
    }

    /// Open the modal for the cat under the grid cursor.
    pub fn open_focused(&mut self) {
        let focused = self.state.read().cats.get(self.cursor).cloned();
        if let Some(cat) = focused {
            self.select(cat);
        }
    }

    pub fn close_modal(&mut self) {
        if self.state.read().confirmation_dialog {
            self.dispatch
                .dispatch(AppAction::ToggleConfirmationDialog { dialog: false });
        }
        self.dispatch
            .dispatch(AppAction::ToggleCatModal { cat_modal: false });
        self.dispatch
            .dispatch(AppAction::SetSelectedCat { cat: None });
    }

    /// Favorite the modal's cat, or ask before removing an existing favorite.
    pub fn toggle_favorite(&mut self) {
        let (image_id, favorited) = {
            let state = self.state.read();
            let Some(cat) = state.modal_cat() else {
                return;
            };
            (cat.id.clone(), state.is_favorite(&cat.id))
        };

        if favorited {
            self.dispatch
                .dispatch(AppAction::ToggleConfirmationDialog { dialog: true });
            return;
        }

        if self.pending_favorites.contains(&image_id) {
            return;
        }
        match self.send(FetchCommand::AddFavorite {
            image_id: image_id.clone(),
        }) {
            Ok(()) => {
                self.pending_favorites.insert(image_id);
            }
            Err(message) => self.notice = Some(message),
        }
    }

    /// Remove the modal cat's favorite after the user confirmed.
    pub fn confirm_unfavorite(&mut self) {
        let favorite_id = {
            let state = self.state.read();
            if !state.confirmation_dialog {
                return;
            }
            state
                .modal_cat()
                .and_then(|cat| state.favorite_for(&cat.id))
                .map(|fav| fav.id)
        };

        self.dispatch
            .dispatch(AppAction::ToggleConfirmationDialog { dialog: false });
        if let Some(favorite_id) = favorite_id {
            if let Err(message) = self.send(FetchCommand::RemoveFavorite { favorite_id }) {
                self.notice = Some(message);
            }
        }
    }

    pub fn cancel_confirmation(&mut self) {
        self.dispatch
            .dispatch(AppAction::ToggleConfirmationDialog { dialog: false });
    }

    pub fn on_resize(&mut self, width: u16) {
        self.columns = columns_for(width);
    }

    /// Move the grid cursor by whole cells; clamps at the grid edges.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let len = self.state.read().cats.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let columns = self.columns.max(1) as isize;
        let target = self.cursor as isize + dx + dy * columns;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }
}
