use std::cell::RefCell;

use shared::domain::AlbumId;

use crate::share::{
    add_to_favorites, share_album, ClipboardSink, NativeShare, ShareError, ShareOutcome,
    ShareRequest,
};

struct RecordingShareTarget {
    requests: RefCell<Vec<ShareRequest>>,
    fail_with: Option<String>,
}

impl RecordingShareTarget {
    fn accepting() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            fail_with: None,
        }
    }

    fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }
}

impl NativeShare for RecordingShareTarget {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        self.requests.borrow_mut().push(request.clone());
        match &self.fail_with {
            Some(reason) => Err(ShareError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
struct FakeClipboard {
    text: Option<String>,
    broken: bool,
}

impl ClipboardSink for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError> {
        if self.broken {
            return Err(ShareError::Clipboard("no clipboard daemon".to_string()));
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

const ORIGIN: &str = "https://fans.example.org";

#[test]
fn native_target_receives_title_text_and_url() {
    let target = RecordingShareTarget::accepting();
    let mut clipboard = FakeClipboard::default();

    let outcome = share_album(ORIGIN, AlbumId(5), "Sukima", Some(&target), &mut clipboard);

    assert_eq!(outcome, ShareOutcome::SharedNatively);
    assert_eq!(clipboard.text, None, "clipboard untouched on native path");
    let requests = target.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].title, "Sukima");
    assert_eq!(requests[0].text, "Check out this album: Sukima");
    assert_eq!(requests[0].url, "https://fans.example.org/album/5");
}

#[test]
fn native_rejection_is_swallowed_without_fallback() {
    let target = RecordingShareTarget::rejecting("user dismissed the sheet");
    let mut clipboard = FakeClipboard::default();

    let outcome = share_album(ORIGIN, AlbumId(5), "Sukima", Some(&target), &mut clipboard);

    assert_eq!(outcome, ShareOutcome::Suppressed);
    assert_eq!(clipboard.text, None);
}

#[test]
fn missing_capability_copies_the_album_link() {
    let mut clipboard = FakeClipboard::default();

    let outcome = share_album(ORIGIN, AlbumId(12), "Gusare", None, &mut clipboard);

    let url = "https://fans.example.org/album/12".to_string();
    assert_eq!(outcome, ShareOutcome::CopiedToClipboard(url.clone()));
    assert_eq!(clipboard.text, Some(url));
}

#[test]
fn clipboard_failure_is_swallowed_too() {
    let mut clipboard = FakeClipboard {
        broken: true,
        ..FakeClipboard::default()
    };

    let outcome = share_album(ORIGIN, AlbumId(12), "Gusare", None, &mut clipboard);

    assert_eq!(outcome, ShareOutcome::Suppressed);
}

#[test]
fn favorites_stub_confirms_without_persisting_anything() {
    assert_eq!(add_to_favorites(AlbumId(3)), "Added to favorites!");
}
