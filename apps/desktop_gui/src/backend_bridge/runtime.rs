//! Backend worker: owns a tokio runtime on its own thread, drains the
//! UI command queue, and answers with `UiEvent`s.

use std::thread;

use client_core::FanSiteClient;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(origin: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Backend worker failed to start: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = FanSiteClient::new(origin);
            let _ = ui_tx.try_send(UiEvent::BackendReady);

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadAlbums => {
                        let albums = client.fetch_albums().await;
                        let _ = ui_tx.try_send(UiEvent::AlbumsLoaded(albums));
                    }
                    BackendCommand::LoadTracks { album_id } => {
                        let tracks = client.fetch_tracks(album_id).await;
                        let _ = ui_tx.try_send(UiEvent::TracksLoaded { album_id, tracks });
                    }
                    BackendCommand::Search { query } => {
                        let results = client.search(&query).await;
                        let _ = ui_tx.try_send(UiEvent::SearchFinished { query, results });
                    }
                }
            }
        });
    });
}
