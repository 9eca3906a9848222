use crate::models::{Breed, Cat, FavoriteId};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Every image fetched so far, in arrival order. Never de-duplicated.
    pub cats: Vec<Cat>,
    /// Image shown in the home modal. Paired with `is_home_modal_open` by the view.
    pub selected_cat: Option<Cat>,
    pub favorites: Vec<FavoriteId>,
    pub breeds: Vec<Breed>,
    pub is_home_modal_open: bool,
    pub confirmation_dialog: bool,
}

impl UiState for AppState {}

impl AppState {
    /// Favorite record for `image_id`, if the image is marked.
    pub fn favorite_for(&self, image_id: &str) -> Option<&FavoriteId> {
        self.favorites.iter().find(|fav| fav.image_id == image_id)
    }

    pub fn is_favorite(&self, image_id: &str) -> bool {
        self.favorite_for(image_id).is_some()
    }

    /// Selected cat, but only while the modal flag is set.
    pub fn modal_cat(&self) -> Option<&Cat> {
        if self.is_home_modal_open {
            self.selected_cat.as_ref()
        } else {
            None
        }
    }
}
