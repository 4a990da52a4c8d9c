//! Events flowing from the backend worker to the UI thread.
//!
//! Fetch failures never carry an error payload: the helpers swallow
//! and log them, so a `None` here is the whole failure signal and the
//! UI degrades to a quiet status-line note.

use shared::domain::{AlbumId, AlbumSummary, SearchResults, TrackSummary};

pub enum UiEvent {
    BackendReady,
    Info(String),
    AlbumsLoaded(Option<Vec<AlbumSummary>>),
    TracksLoaded {
        album_id: AlbumId,
        tracks: Option<Vec<TrackSummary>>,
    },
    SearchFinished {
        query: String,
        results: Option<SearchResults>,
    },
}
