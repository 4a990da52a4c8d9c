//! URL builders for the fan site's routes, shared by the fetch helpers
//! and by share-link construction.

use crate::domain::AlbumId;

pub fn api_albums(origin: &str) -> String {
    format!("{}/api/albums", origin.trim_end_matches('/'))
}

pub fn api_album_tracks(origin: &str, album_id: AlbumId) -> String {
    format!(
        "{}/api/album/{}/tracks",
        origin.trim_end_matches('/'),
        album_id.0
    )
}

/// Bare search route; callers attach the `q` parameter themselves.
pub fn api_search(origin: &str) -> String {
    format!("{}/api/search", origin.trim_end_matches('/'))
}

/// Detail page for an album: target of card-click navigation and of
/// constructed share URLs.
pub fn album_detail(origin: &str, album_id: AlbumId) -> String {
    format!("{}/album/{}", origin.trim_end_matches('/'), album_id.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_api_routes_without_double_slashes() {
        assert_eq!(
            api_albums("http://127.0.0.1:5000/"),
            "http://127.0.0.1:5000/api/albums"
        );
        assert_eq!(
            api_album_tracks("http://127.0.0.1:5000", AlbumId(7)),
            "http://127.0.0.1:5000/api/album/7/tracks"
        );
        assert_eq!(
            api_search("http://127.0.0.1:5000/"),
            "http://127.0.0.1:5000/api/search"
        );
    }

    #[test]
    fn album_detail_matches_site_route() {
        assert_eq!(
            album_detail("https://example.org", AlbumId(3)),
            "https://example.org/album/3"
        );
    }
}
