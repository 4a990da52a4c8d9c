use std::collections::HashMap;

use arboard::Clipboard;
use client_core::{
    captions::CaptionDeck,
    carousel::{CarouselState, SwipeTracker},
    share::{self, ClipboardSink, NativeShare, ShareError, ShareOutcome},
};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::{AlbumId, AlbumSummary, TrackSummary};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

const CARD_WIDTH: f32 = 168.0;
const CAROUSEL_HEIGHT: f32 = 150.0;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub origin: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            // The fan site's development origin.
            origin: "http://127.0.0.1:5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppView {
    Grid,
    Album(AlbumId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SectionId {
    Albums,
    About,
}

impl SectionId {
    fn label(self) -> &'static str {
        match self {
            SectionId::Albums => "Albums",
            SectionId::About => "About",
        }
    }
}

/// In-flight animation toward an anchor's scroll offset, easing a
/// fraction of the remaining distance each frame.
#[derive(Debug, Default)]
struct SmoothScroll {
    target: Option<f32>,
}

impl SmoothScroll {
    fn request(&mut self, offset: f32) {
        self.target = Some(offset.max(0.0));
    }

    fn step(&mut self, current: f32) -> Option<f32> {
        let target = self.target?;
        let next = current + (target - current) * 0.2;
        if (next - target).abs() < 1.0 {
            self.target = None;
            Some(target)
        } else {
            Some(next)
        }
    }
}

struct AlbumCarousel {
    state: CarouselState,
    swipe: SwipeTracker,
}

impl AlbumCarousel {
    fn new(total_items: usize) -> Self {
        Self {
            state: CarouselState::new(total_items),
            swipe: SwipeTracker::default(),
        }
    }
}

/// Capability check for a platform share sheet, performed once per
/// share call. No desktop target exists here, so sharing always takes
/// the clipboard fallback.
fn native_share_target() -> Option<&'static dyn NativeShare> {
    None
}

struct DesktopClipboard;

impl ClipboardSink for DesktopClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError> {
        Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text))
            .map_err(|err| ShareError::Clipboard(err.to_string()))
    }
}

pub struct FanSiteApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    origin: String,

    view: AppView,
    albums: Vec<AlbumSummary>,
    tracks: HashMap<AlbumId, Vec<TrackSummary>>,
    caption_decks: HashMap<AlbumId, CaptionDeck>,
    hovered_album: Option<AlbumId>,
    active_caption: Option<(AlbumId, String)>,
    carousel: Option<AlbumCarousel>,

    search_query: String,
    search_results: Option<(String, shared::domain::SearchResults)>,

    section_offsets: HashMap<SectionId, f32>,
    grid_scroll_offset: f32,
    smooth_scroll: SmoothScroll,

    status: String,
    notice: Option<String>,
}

impl FanSiteApp {
    pub fn new(
        config: StartupConfig,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            origin: config.origin,
            view: AppView::Grid,
            albums: Vec::new(),
            tracks: HashMap::new(),
            caption_decks: HashMap::new(),
            hovered_album: None,
            active_caption: None,
            carousel: None,
            search_query: String::new(),
            search_results: None,
            section_offsets: HashMap::new(),
            grid_scroll_offset: 0.0,
            smooth_scroll: SmoothScroll::default(),
            status: "Starting backend worker...".to_string(),
            notice: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::BackendReady => {
                    self.status = format!("Connected to {}", self.origin);
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::LoadAlbums,
                        &mut self.status,
                    );
                }
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::AlbumsLoaded(Some(albums)) => {
                    self.caption_decks.clear();
                    for album in &albums {
                        let Some(raw) = album.hover_texts.as_deref() else {
                            continue;
                        };
                        if let Some(deck) = CaptionDeck::parse(raw) {
                            self.caption_decks.insert(album.id, deck);
                        }
                    }
                    self.status = format!("Loaded {} albums", albums.len());
                    self.albums = albums;
                }
                UiEvent::AlbumsLoaded(None) => {
                    self.status = "Couldn't load albums".to_string();
                }
                UiEvent::TracksLoaded {
                    album_id,
                    tracks: Some(tracks),
                } => {
                    self.tracks.insert(album_id, tracks);
                    if self.view == AppView::Album(album_id) {
                        self.rebuild_carousel(album_id);
                    }
                }
                UiEvent::TracksLoaded {
                    tracks: None,
                    ..
                } => {
                    self.status = "Couldn't load tracks for this album".to_string();
                }
                UiEvent::SearchFinished {
                    query,
                    results: Some(results),
                } => {
                    self.status = format!(
                        "Found {} albums and {} tracks",
                        results.albums.len(),
                        results.tracks.len()
                    );
                    self.search_results = Some((query, results));
                }
                UiEvent::SearchFinished { results: None, .. } => {
                    self.status = "Search failed".to_string();
                }
            }
        }
    }

    fn playable_tracks(&self, album_id: AlbumId) -> Vec<TrackSummary> {
        self.tracks
            .get(&album_id)
            .map(|tracks| {
                tracks
                    .iter()
                    .filter(|track| track.audio_url.is_some())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn rebuild_carousel(&mut self, album_id: AlbumId) {
        let players = self.playable_tracks(album_id).len();
        self.carousel = Some(AlbumCarousel::new(players));
    }

    fn open_album(&mut self, album_id: AlbumId) {
        self.view = AppView::Album(album_id);
        self.carousel = None;
        self.hovered_album = None;
        self.active_caption = None;
        self.search_results = None;
        if self.tracks.contains_key(&album_id) {
            self.rebuild_carousel(album_id);
        } else {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::LoadTracks { album_id },
                &mut self.status,
            );
        }
    }

    fn share_album(&mut self, album: &AlbumSummary) {
        let mut clipboard = DesktopClipboard;
        let outcome = share::share_album(
            &self.origin,
            album.id,
            &album.title,
            native_share_target(),
            &mut clipboard,
        );
        match outcome {
            ShareOutcome::SharedNatively => {
                self.status = format!("Shared {}", album.title);
            }
            ShareOutcome::CopiedToClipboard(_) => {
                self.notice = Some("Link copied to clipboard!".to_string());
            }
            // Rejections are logged by the share layer; nothing to show.
            ShareOutcome::Suppressed => {}
        }
    }

    /// Arrow keys drive the carousel globally, regardless of focus:
    /// the album view hosts the only carousel on screen.
    fn handle_carousel_keys(&mut self, ctx: &egui::Context) {
        if !matches!(self.view, AppView::Album(_)) {
            return;
        }
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let (left, right) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });
        if left {
            carousel.state.prev();
        }
        if right {
            carousel.state.next();
        }
    }

    fn show_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("site_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Encore");
                ui.separator();
                for section in [SectionId::Albums, SectionId::About] {
                    if ui.selectable_label(false, section.label()).clicked() {
                        self.view = AppView::Grid;
                        self.carousel = None;
                        // A section that has never been laid out has no
                        // recorded offset; the click is a no-op then,
                        // like a dangling anchor link.
                        if let Some(&offset) = self.section_offsets.get(&section) {
                            self.smooth_scroll.request(offset);
                        }
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let search = ui.add(
                        egui::TextEdit::singleline(&mut self.search_query)
                            .hint_text("Search albums and tracks")
                            .desired_width(220.0),
                    );
                    let submitted =
                        search.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if submitted {
                        dispatch_backend_command(
                            &self.cmd_tx,
                            BackendCommand::Search {
                                query: self.search_query.trim().to_string(),
                            },
                            &mut self.status,
                        );
                    }
                });
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
    }

    fn show_grid(&mut self, ui: &mut egui::Ui) {
        let mut section_screen_y: HashMap<SectionId, f32> = HashMap::new();

        let mut area = egui::ScrollArea::vertical().id_salt("grid_scroll");
        if let Some(offset) = self.smooth_scroll.step(self.grid_scroll_offset) {
            area = area.vertical_scroll_offset(offset);
            ui.ctx().request_repaint();
        }

        let output = area.show(ui, |ui| {
            section_screen_y.insert(SectionId::Albums, ui.next_widget_position().y);
            ui.heading("Albums");
            ui.add_space(8.0);

            if self.albums.is_empty() {
                ui.weak("No albums yet.");
            } else {
                let albums = self.albums.clone();
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(14.0, 14.0);
                    for album in &albums {
                        self.album_card(ui, album);
                    }
                });
            }

            ui.add_space(32.0);
            section_screen_y.insert(SectionId::About, ui.next_widget_position().y);
            ui.heading("About");
            ui.add_space(8.0);
            ui.label(
                "A fan-made companion for browsing the discography: hover a \
                 cover for a random lyric excerpt, click a card for the \
                 track list, and share your favorites.",
            );
            ui.add_space(48.0);
        });

        self.grid_scroll_offset = output.state.offset.y;
        for (section, y) in section_screen_y {
            let offset = (y - output.inner_rect.top() + output.state.offset.y).max(0.0);
            self.section_offsets.insert(section, offset);
        }
    }

    fn album_card(&mut self, ui: &mut egui::Ui, album: &AlbumSummary) {
        let frame = egui::Frame::group(ui.style())
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(8));

        let inner = frame.show(ui, |ui| {
            ui.set_width(CARD_WIDTH);

            let (cover_rect, _) =
                ui.allocate_exact_size(egui::vec2(CARD_WIDTH, CARD_WIDTH), egui::Sense::hover());
            let caption = self
                .active_caption
                .as_ref()
                .filter(|(id, _)| *id == album.id)
                .map(|(_, text)| text.clone());

            let painter = ui.painter();
            painter.rect_filled(
                cover_rect,
                egui::CornerRadius::same(6),
                egui::Color32::from_rgb(38, 41, 54),
            );
            let initial = album.title.chars().next().unwrap_or('♪');
            painter.text(
                cover_rect.center(),
                egui::Align2::CENTER_CENTER,
                initial,
                egui::FontId::proportional(52.0),
                egui::Color32::from_gray(90),
            );
            if caption.is_some() {
                painter.rect_filled(
                    cover_rect,
                    egui::CornerRadius::same(6),
                    egui::Color32::from_black_alpha(180),
                );
            }
            if let Some(caption) = caption {
                ui.put(
                    cover_rect.shrink(8.0),
                    egui::Label::new(
                        egui::RichText::new(caption)
                            .color(egui::Color32::WHITE)
                            .size(12.0),
                    )
                    .wrap(),
                );
            }

            ui.add_space(6.0);
            ui.label(egui::RichText::new(&album.title).strong());
            match album.release_date {
                Some(date) => ui.small(date.format("%Y").to_string()),
                None => ui.small("—"),
            };

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                (ui.small_button("♥ Favorite"), ui.small_button("Share"))
            })
            .inner
        });

        let (favorite, share_button) = inner.inner;
        let card = inner.response.interact(egui::Sense::click());

        // Pointer-enter re-rolls the caption; leaving clears it.
        if card.hovered() {
            if self.hovered_album != Some(album.id) {
                self.hovered_album = Some(album.id);
                let rolled = self
                    .caption_decks
                    .get(&album.id)
                    .map(|deck| deck.pick(&mut rand::thread_rng()).to_string());
                self.active_caption = rolled.map(|caption| (album.id, caption));
            }
        } else if self.hovered_album == Some(album.id) {
            self.hovered_album = None;
            self.active_caption = None;
        }

        if favorite.clicked() {
            self.notice = Some(share::add_to_favorites(album.id));
        }
        if share_button.clicked() {
            self.share_album(album);
        }

        // Anywhere on the card except its action controls navigates to
        // the album detail view.
        let over_control = favorite.hovered() || share_button.hovered();
        if card.clicked() && !over_control {
            self.open_album(album.id);
        }
    }

    fn show_album(&mut self, ui: &mut egui::Ui, album_id: AlbumId) {
        if ui.button("← All albums").clicked() {
            self.view = AppView::Grid;
            self.carousel = None;
            return;
        }
        ui.add_space(8.0);

        let Some(album) = self.albums.iter().find(|album| album.id == album_id).cloned() else {
            ui.weak("Album not found.");
            return;
        };

        ui.horizontal(|ui| {
            ui.heading(&album.title);
            if let Some(date) = album.release_date {
                ui.weak(date.format("%Y-%m-%d").to_string());
            }
        });
        ui.horizontal(|ui| {
            if ui.small_button("♥ Favorite").clicked() {
                self.notice = Some(share::add_to_favorites(album.id));
            }
            if ui.small_button("Share").clicked() {
                self.share_album(&album);
            }
        });
        ui.separator();

        match self.tracks.get(&album_id) {
            None => {
                ui.weak("Loading tracks...");
            }
            Some(tracks) if tracks.is_empty() => {
                ui.weak("No tracks listed for this album.");
            }
            Some(tracks) => {
                for track in tracks.clone() {
                    ui.label(format!("{:>2}. {}", track.track_number, track.title));
                }
            }
        }

        ui.add_space(16.0);
        ui.heading("Players");
        ui.add_space(8.0);
        self.show_carousel(ui, album_id);
    }

    fn show_carousel(&mut self, ui: &mut egui::Ui, album_id: AlbumId) {
        let players = self.playable_tracks(album_id);
        let Some(carousel) = self.carousel.as_mut() else {
            ui.weak("Players are still loading.");
            return;
        };
        if players.is_empty() {
            ui.weak("This album has no playable tracks.");
            return;
        }

        let enabled = carousel.state.is_enabled();
        ui.horizontal(|ui| {
            if enabled && ui.button("⟨").clicked() {
                carousel.state.prev();
            }

            let viewport_width = ui.available_width().clamp(240.0, 520.0) - 48.0;
            let (viewport, response) = ui.allocate_exact_size(
                egui::vec2(viewport_width, CAROUSEL_HEIGHT),
                egui::Sense::click_and_drag(),
            );

            // The visual track is translated by -current_index * 100%
            // of the viewport; items land at exact multiples, so only
            // the active one intersects.
            let offset_x = viewport.width() * carousel.state.track_offset_percent() / 100.0;
            for (index, track) in players.iter().enumerate() {
                let item_rect = egui::Rect::from_min_size(
                    viewport.min + egui::vec2(offset_x + index as f32 * viewport.width(), 0.0),
                    viewport.size(),
                );
                if !viewport.intersects(item_rect) {
                    continue;
                }
                player_panel(ui, viewport, item_rect, track, carousel.state.is_active(index));
            }

            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    carousel.swipe.begin(pos.x);
                }
            }
            if response.drag_stopped() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some(direction) = carousel.swipe.finish(pos.x) {
                        direction.apply(&mut carousel.state);
                    }
                }
            }

            if enabled && ui.button("⟩").clicked() {
                carousel.state.next();
            }
        });

        if enabled {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for index in 0..carousel.state.total_items() {
                    let active = carousel.state.is_active(index);
                    let dot = egui::RichText::new("●")
                        .size(if active { 14.0 } else { 10.0 })
                        .color(if active {
                            egui::Color32::from_rgb(120, 150, 255)
                        } else {
                            egui::Color32::from_gray(110)
                        });
                    if ui.add(egui::Button::new(dot).frame(false)).clicked() {
                        carousel.state.jump(index);
                    }
                }
            });
        }
    }

    fn show_search_results(&mut self, ctx: &egui::Context) {
        let Some((query, results)) = self.search_results.clone() else {
            return;
        };
        let mut open = true;
        egui::Window::new(format!("Search: {query}"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                if results.is_empty() {
                    ui.weak("No matches.");
                }
                for album in &results.albums {
                    if ui.link(&album.title).clicked() {
                        self.open_album(album.id);
                    }
                }
                if !results.tracks.is_empty() {
                    ui.separator();
                    for track in &results.tracks {
                        ui.label(format!("{} (track)", track.title));
                    }
                }
            });
        if !open {
            self.search_results = None;
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };
        egui::Window::new("Encore")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    self.notice = None;
                }
            });
    }
}

fn player_panel(
    ui: &mut egui::Ui,
    viewport: egui::Rect,
    item_rect: egui::Rect,
    track: &TrackSummary,
    active: bool,
) {
    let clip = item_rect.intersect(viewport);
    let fill = if active {
        egui::Color32::from_rgb(44, 48, 66)
    } else {
        egui::Color32::from_rgb(32, 34, 46)
    };
    ui.painter()
        .with_clip_rect(clip)
        .rect_filled(item_rect.shrink(4.0), egui::CornerRadius::same(10), fill);

    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(item_rect.shrink(18.0))
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(clip);
    child.label(egui::RichText::new(&track.title).strong().size(16.0));
    child.small(format!("Track {}", track.track_number));
    if let Some(url) = &track.audio_url {
        child.add_space(10.0);
        child.weak(format!("Streams from {url}"));
    }
}

impl eframe::App for FanSiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.handle_carousel_keys(ctx);
        self.show_top_panel(ctx);
        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            AppView::Grid => self.show_grid(ui),
            AppView::Album(album_id) => self.show_album(ui, album_id),
        });
        self.show_search_results(ctx);
        self.show_notice(ctx);

        // Backend replies arrive on a plain channel; poll for them even
        // when no input wakes the UI.
        ctx.request_repaint_after(std::time::Duration::from_millis(200));
    }
}
