//! Favorite and share actions. Sharing branches on a runtime
//! capability check: a native share target when one exists, otherwise
//! copying the album link to the clipboard.

use shared::{domain::AlbumId, routes};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("native share target rejected the request: {0}")]
    Rejected(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// A platform share sheet, when the platform has one. Detected once per
/// share call; desktop builds typically have none and fall back to the
/// clipboard.
pub trait NativeShare {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Destination for the clipboard fallback.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError>;
}

/// What the UI should confirm to the user, if anything. Failures never
/// reach the user; they are logged and the outcome is [`Suppressed`].
///
/// [`Suppressed`]: ShareOutcome::Suppressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    SharedNatively,
    /// The album link was copied; carries the copied URL.
    CopiedToClipboard(String),
    Suppressed,
}

/// Add an album to favorites. Stub: logs and returns the confirmation
/// message to surface; nothing is persisted.
pub fn add_to_favorites(album_id: AlbumId) -> String {
    info!(album_id = album_id.0, "album added to favorites");
    "Added to favorites!".to_string()
}

/// Share an album's detail page.
///
/// If a native share target is present it receives title, text, and
/// URL, and any rejection is logged and swallowed. Without one, the
/// constructed URL is copied to the clipboard and the caller confirms
/// via dialog.
pub fn share_album(
    origin: &str,
    album_id: AlbumId,
    album_title: &str,
    native: Option<&dyn NativeShare>,
    clipboard: &mut dyn ClipboardSink,
) -> ShareOutcome {
    let url = routes::album_detail(origin, album_id);

    if let Some(target) = native {
        let request = ShareRequest {
            title: album_title.to_string(),
            text: format!("Check out this album: {album_title}"),
            url,
        };
        return match target.share(&request) {
            Ok(()) => ShareOutcome::SharedNatively,
            Err(err) => {
                info!(album_id = album_id.0, "share failed: {err}");
                ShareOutcome::Suppressed
            }
        };
    }

    match clipboard.set_text(&url) {
        Ok(()) => ShareOutcome::CopiedToClipboard(url),
        Err(err) => {
            warn!(album_id = album_id.0, "clipboard fallback failed: {err}");
            ShareOutcome::Suppressed
        }
    }
}
