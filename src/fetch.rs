//! Background execution of API requests.
//!
//! The UI thread never awaits the network. It sends a [`FetchCommand`] to the
//! worker, which runs each command as its own task so independent requests
//! overlap, and posts the matching [`FetchOutcome`] back on the UI event
//! channel.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::{ApiError, CatApiClient};
use crate::models::{Breed, Cat, FavoriteId, FavoriteRecord};
use crate::ui::events::AppEvent;

const FETCH_BUFFER: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    Cats { page_size: u32 },
    Favorites,
    Breeds,
    AddFavorite { image_id: String },
    RemoveFavorite { favorite_id: u64 },
}

#[derive(Debug)]
pub enum FetchOutcome {
    Cats {
        page_size: u32,
        result: Result<Vec<Cat>, ApiError>,
    },
    Favorites {
        result: Result<Vec<FavoriteRecord>, ApiError>,
    },
    Breeds {
        result: Result<Vec<Breed>, ApiError>,
    },
    FavoriteAdded {
        image_id: String,
        result: Result<FavoriteId, ApiError>,
    },
    FavoriteRemoved {
        favorite_id: u64,
        result: Result<(), ApiError>,
    },
}

pub type FetchSender = mpsc::Sender<FetchCommand>;

/// Start the worker on `runtime` and return the command sender.
///
/// The worker stops once every sender is dropped.
pub fn spawn_fetch_worker(
    runtime: &Handle,
    client: Arc<CatApiClient>,
    events: std_mpsc::Sender<AppEvent>,
) -> FetchSender {
    let (sender, mut receiver) = mpsc::channel::<FetchCommand>(FETCH_BUFFER);

    runtime.spawn(async move {
        while let Some(command) = receiver.recv().await {
            let client = Arc::clone(&client);
            let events = events.clone();
            tokio::spawn(async move {
                let outcome = execute(&client, command).await;
                if events.send(AppEvent::Fetch(outcome)).is_err() {
                    tracing::debug!("Event channel closed, dropping fetch outcome");
                }
            });
        }
        tracing::debug!("Fetch worker stopped");
    });

    sender
}

/// Run a single command against the API.
pub async fn execute(client: &CatApiClient, command: FetchCommand) -> FetchOutcome {
    match command {
        FetchCommand::Cats { page_size } => FetchOutcome::Cats {
            page_size,
            result: client.get_cats(page_size).await,
        },
        FetchCommand::Favorites => FetchOutcome::Favorites {
            result: client.get_favorites().await,
        },
        FetchCommand::Breeds => FetchOutcome::Breeds {
            result: client.get_breeds().await,
        },
        FetchCommand::AddFavorite { image_id } => {
            let result = client.add_favorite(&image_id).await;
            FetchOutcome::FavoriteAdded { image_id, result }
        }
        FetchCommand::RemoveFavorite { favorite_id } => FetchOutcome::FavoriteRemoved {
            favorite_id,
            result: client.remove_favorite(favorite_id).await,
        },
    }
}
