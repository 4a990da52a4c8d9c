use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(AlbumId);
id_newtype!(TrackId);

/// One album row as served by `GET /api/albums`.
///
/// `hover_texts` is the `|`-delimited caption source the site
/// pre-generates from lyric excerpts; absent when no lyrics exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: AlbumId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_texts: Option<String>,
}

/// One track row as served by `GET /api/album/{id}/tracks`, ordered by
/// `track_number`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: TrackId,
    pub album_id: AlbumId,
    pub title: String,
    pub track_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// `GET /api/search?q=` response: matching albums and tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub albums: Vec<AlbumSummary>,
    #[serde(default)]
    pub tracks: Vec<TrackSummary>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_rows_parse_from_the_site_payload() {
        let album: AlbumSummary = serde_json::from_str(
            r#"{
                "id": 3,
                "title": "Gusare",
                "release_date": "2021-02-10",
                "hover_texts": "fallen leaf\nstill spinning|wrong side of dawn"
            }"#,
        )
        .expect("album json");

        assert_eq!(album.id, AlbumId(3));
        assert_eq!(
            album.release_date,
            NaiveDate::from_ymd_opt(2021, 2, 10)
        );
        // Fields the server omits fall back to None.
        assert_eq!(album.cover_url, None);
    }

    #[test]
    fn track_rows_parse_without_an_audio_url() {
        let track: TrackSummary = serde_json::from_str(
            r#"{"id": 9, "album_id": 3, "title": "Obenkyou", "track_number": 2}"#,
        )
        .expect("track json");

        assert_eq!(track.id, TrackId(9));
        assert_eq!(track.album_id, AlbumId(3));
        assert_eq!(track.audio_url, None);
    }
}
