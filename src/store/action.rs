use crate::models::{Breed, Cat, FavoriteId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Declared for callers that predate the store; the reducer ignores it.
    ChangeGlobalVar { updated_var: String },
    SetCatList { cats: Vec<Cat> },
    SetSelectedCat { cat: Option<Cat> },
    AddToFavorites { favorite: FavoriteId },
    RemoveFromFavorites { favorite_id: u64 },
    SetBreedList { breeds: Vec<Breed> },
    SetFavoriteList { favorites: Vec<FavoriteId> },
    ToggleCatModal { cat_modal: bool },
    ToggleConfirmationDialog { dialog: bool },
}

impl Intent for AppAction {}

impl AppAction {
    /// Stable action name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            AppAction::ChangeGlobalVar { .. } => "CHANGE_GLOBAL_VAR",
            AppAction::SetCatList { .. } => "SET_CAT_LIST",
            AppAction::SetSelectedCat { .. } => "SET_SELECTED_CAT",
            AppAction::AddToFavorites { .. } => "ADD_TO_FAVORITES",
            AppAction::RemoveFromFavorites { .. } => "REMOVE_FROM_FAVORITES",
            AppAction::SetBreedList { .. } => "SET_BREED_LIST",
            AppAction::SetFavoriteList { .. } => "SET_FAVORITE_LIST",
            AppAction::ToggleCatModal { .. } => "TOGGLE_CAT_MODAL",
            AppAction::ToggleConfirmationDialog { .. } => "TOGGLE_CONFIRMATION_DIALOG",
        }
    }
}
