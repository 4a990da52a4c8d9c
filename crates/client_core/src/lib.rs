use reqwest::Client;
use shared::{
    domain::{AlbumId, AlbumSummary, SearchResults, TrackSummary},
    routes,
};
use tracing::error;

pub mod captions;
pub mod carousel;
pub mod share;

pub use captions::CaptionDeck;
pub use carousel::{CarouselState, SwipeDirection, SwipeTracker, SWIPE_THRESHOLD};
pub use share::{
    add_to_favorites, share_album, ClipboardSink, NativeShare, ShareError, ShareOutcome,
    ShareRequest,
};

/// HTTP client for the fan site's read-only JSON API.
///
/// All public fetch helpers share the same failure semantics: any
/// network, HTTP-status, or parse failure is caught, logged, and
/// swallowed, and the helper resolves to `None`. Callers treat the
/// absent value as the sole failure signal; no error type crosses this
/// boundary. Requests carry no timeout and are never retried.
pub struct FanSiteClient {
    http: Client,
    origin: String,
}

impl FanSiteClient {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            origin: origin.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// `GET /api/albums` — every album in release order.
    pub async fn fetch_albums(&self) -> Option<Vec<AlbumSummary>> {
        match self.try_fetch_albums().await {
            Ok(albums) => Some(albums),
            Err(err) => {
                error!("failed to fetch albums: {err}");
                None
            }
        }
    }

    /// `GET /api/album/{id}/tracks` — the album's tracks in
    /// `track_number` order.
    pub async fn fetch_tracks(&self, album_id: AlbumId) -> Option<Vec<TrackSummary>> {
        match self.try_fetch_tracks(album_id).await {
            Ok(tracks) => Some(tracks),
            Err(err) => {
                error!(album_id = album_id.0, "failed to fetch tracks: {err}");
                None
            }
        }
    }

    /// `GET /api/search?q=` — albums and tracks matching `query`,
    /// which rides along as a URL parameter. An empty query
    /// short-circuits to an empty result without touching the network,
    /// mirroring the server.
    pub async fn search(&self, query: &str) -> Option<SearchResults> {
        if query.trim().is_empty() {
            return Some(SearchResults::default());
        }
        match self.try_search(query).await {
            Ok(results) => Some(results),
            Err(err) => {
                error!(query, "search failed: {err}");
                None
            }
        }
    }

    async fn try_fetch_albums(&self) -> Result<Vec<AlbumSummary>, reqwest::Error> {
        self.http
            .get(routes::api_albums(&self.origin))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn try_fetch_tracks(
        &self,
        album_id: AlbumId,
    ) -> Result<Vec<TrackSummary>, reqwest::Error> {
        self.http
            .get(routes::api_album_tracks(&self.origin, album_id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn try_search(&self, query: &str) -> Result<SearchResults, reqwest::Error> {
        self.http
            .get(routes::api_search(&self.origin))
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[cfg(test)]
mod tests;
