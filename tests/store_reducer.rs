mod common;

use catgallery::models::{Breed, FavoriteId};
use catgallery::store::{AppAction, AppReducer, AppState};
use catgallery::ui::mvi::Reducer;
use common::{cat, cats};

fn seeded() -> AppState {
    AppState {
        cats: cats(&["a", "b"]),
        favorites: vec![
            FavoriteId::new(1, "a"),
            FavoriteId::new(2, "b"),
            FavoriteId::new(1, "c"),
            FavoriteId::new(3, "d"),
        ],
        ..AppState::default()
    }
}

fn all_actions() -> Vec<AppAction> {
    vec![
        AppAction::ChangeGlobalVar {
            updated_var: "x".to_string(),
        },
        AppAction::SetCatList {
            cats: cats(&["c"]),
        },
        AppAction::SetSelectedCat {
            cat: Some(cat("a")),
        },
        AppAction::AddToFavorites {
            favorite: FavoriteId::new(9, "z"),
        },
        AppAction::RemoveFromFavorites { favorite_id: 1 },
        AppAction::SetBreedList { breeds: vec![] },
        AppAction::SetFavoriteList { favorites: vec![] },
        AppAction::ToggleCatModal { cat_modal: true },
        AppAction::ToggleConfirmationDialog { dialog: true },
    ]
}

#[test]
fn reducer_is_pure() {
    for action in all_actions() {
        let first = AppReducer::reduce(seeded(), action.clone());
        let second = AppReducer::reduce(seeded(), action);
        assert_eq!(first, second);
    }
}

#[test]
fn set_cat_list_appends() {
    for incoming in [vec![], cats(&["x"]), cats(&["x", "y", "a"])] {
        let state = seeded();
        let before = state.cats.len();
        let added = incoming.len();
        let next = AppReducer::reduce(state, AppAction::SetCatList { cats: incoming });
        assert_eq!(next.cats.len(), before + added);
    }
}

#[test]
fn set_cat_list_twice_keeps_order() {
    let state = AppReducer::reduce(
        AppState::default(),
        AppAction::SetCatList {
            cats: vec![catgallery::models::Cat::new("1", "u1")],
        },
    );
    let state = AppReducer::reduce(
        state,
        AppAction::SetCatList {
            cats: vec![catgallery::models::Cat::new("2", "u2")],
        },
    );
    let ids: Vec<&str> = state.cats.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(state.cats[0].url, "u1");
    assert_eq!(state.cats[1].url, "u2");
}

#[test]
fn duplicates_are_not_removed() {
    let state = AppReducer::reduce(seeded(), AppAction::SetCatList { cats: cats(&["a"]) });
    assert_eq!(state.cats.iter().filter(|c| c.id == "a").count(), 2);
}

#[test]
fn remove_from_favorites_filters_matching_ids() {
    let state = seeded();
    let expected: Vec<FavoriteId> = state
        .favorites
        .iter()
        .filter(|f| f.id != 1)
        .cloned()
        .collect();
    let next = AppReducer::reduce(state, AppAction::RemoveFromFavorites { favorite_id: 1 });
    assert_eq!(next.favorites, expected);
    assert_eq!(
        next.favorites,
        vec![FavoriteId::new(2, "b"), FavoriteId::new(3, "d")]
    );
}

#[test]
fn remove_unknown_favorite_is_harmless() {
    let state = seeded();
    let next = AppReducer::reduce(state.clone(), AppAction::RemoveFromFavorites { favorite_id: 42 });
    assert_eq!(next, state);
}

#[test]
fn add_then_remove_scenario() {
    let state = AppReducer::reduce(
        AppState::default(),
        AppAction::AddToFavorites {
            favorite: FavoriteId::new(1, "1"),
        },
    );
    let state = AppReducer::reduce(
        state,
        AppAction::AddToFavorites {
            favorite: FavoriteId::new(2, "2"),
        },
    );
    let state = AppReducer::reduce(state, AppAction::RemoveFromFavorites { favorite_id: 1 });
    assert_eq!(state.favorites, vec![FavoriteId::new(2, "2")]);
}

#[test]
fn toggle_cat_modal_sets_exact_value() {
    for value in [true, false] {
        let once = AppReducer::reduce(seeded(), AppAction::ToggleCatModal { cat_modal: value });
        assert_eq!(once.is_home_modal_open, value);
        let twice = AppReducer::reduce(once.clone(), AppAction::ToggleCatModal { cat_modal: value });
        assert_eq!(twice, once);
    }
}

#[test]
fn toggle_confirmation_dialog_sets_flag() {
    let open = AppReducer::reduce(
        AppState::default(),
        AppAction::ToggleConfirmationDialog { dialog: true },
    );
    assert!(open.confirmation_dialog);
    let closed = AppReducer::reduce(open, AppAction::ToggleConfirmationDialog { dialog: false });
    assert!(!closed.confirmation_dialog);
    assert_eq!(closed, AppState::default());
}

#[test]
fn unhandled_action_leaves_state_unchanged() {
    let state = seeded();
    let next = AppReducer::reduce(
        state.clone(),
        AppAction::ChangeGlobalVar {
            updated_var: "anything".to_string(),
        },
    );
    assert_eq!(next, state);
}

#[test]
fn replacing_lists() {
    let breeds = vec![Breed {
        id: "abys".to_string(),
        name: "Abyssinian".to_string(),
        temperament: None,
        origin: Some("Egypt".to_string()),
        description: None,
        life_span: None,
        wikipedia_url: None,
    }];
    let state = AppReducer::reduce(seeded(), AppAction::SetBreedList { breeds: breeds.clone() });
    assert_eq!(state.breeds, breeds);

    let state = AppReducer::reduce(
        state,
        AppAction::SetFavoriteList {
            favorites: vec![FavoriteId::new(5, "e")],
        },
    );
    assert_eq!(state.favorites, vec![FavoriteId::new(5, "e")]);
    assert_eq!(state.cats.len(), 2);
}

#[test]
fn selected_cat_is_independent_of_modal_flag() {
    let state = AppReducer::reduce(
        AppState::default(),
        AppAction::SetSelectedCat {
            cat: Some(cat("a")),
        },
    );
    assert_eq!(state.selected_cat, Some(cat("a")));
    assert!(!state.is_home_modal_open);

    let state = AppReducer::reduce(state, AppAction::SetSelectedCat { cat: None });
    assert!(state.selected_cat.is_none());
}

#[test]
fn action_names_match_log_labels() {
    let names: Vec<&str> = all_actions().iter().map(AppAction::name).collect();
    assert_eq!(
        names,
        vec![
            "CHANGE_GLOBAL_VAR",
            "SET_CAT_LIST",
            "SET_SELECTED_CAT",
            "ADD_TO_FAVORITES",
            "REMOVE_FROM_FAVORITES",
            "SET_BREED_LIST",
            "SET_FAVORITE_LIST",
            "TOGGLE_CAT_MODAL",
            "TOGGLE_CONFIRMATION_DIALOG",
        ]
    );
}
