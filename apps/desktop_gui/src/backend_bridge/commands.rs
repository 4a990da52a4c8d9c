//! Backend commands queued from UI to the backend worker.

use shared::domain::AlbumId;

pub enum BackendCommand {
    LoadAlbums,
    LoadTracks { album_id: AlbumId },
    Search { query: String },
}
