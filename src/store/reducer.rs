use crate::store::action::AppAction;
use crate::store::state::AppState;
use crate::ui::mvi::Reducer;

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppAction::SetCatList { cats } => {
                let mut state = state;
                state.cats.extend(cats);
                state
            }
            AppAction::SetBreedList { breeds } => AppState { breeds, ..state },
            AppAction::SetSelectedCat { cat } => AppState {
                selected_cat: cat,
                ..state
            },
            AppAction::AddToFavorites { favorite } => {
                let mut state = state;
                state.favorites.push(favorite);
                state
            }
            AppAction::RemoveFromFavorites { favorite_id } => {
                let mut state = state;
                state.favorites.retain(|fav| fav.id != favorite_id);
                state
            }
            AppAction::SetFavoriteList { favorites } => AppState { favorites, ..state },
            AppAction::ToggleCatModal { cat_modal } => AppState {
                is_home_modal_open: cat_modal,
                ..state
            },
            AppAction::ToggleConfirmationDialog { dialog } => AppState {
                confirmation_dialog: dialog,
                ..state
            },
            AppAction::ChangeGlobalVar { .. } => state,
        }
    }
}
