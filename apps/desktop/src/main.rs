//! Terminal front end for the Encore fan site API. Handy for poking at
//! a dev server without launching the GUI.

use anyhow::{bail, Result};
use clap::Parser;
use client_core::FanSiteClient;
use shared::{domain::AlbumId, routes};

#[derive(Parser, Debug)]
#[command(name = "encore-cli", about = "Query the Encore fan site API")]
struct Args {
    /// Origin of the fan site server, e.g. http://127.0.0.1:5000
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    origin: String,

    /// Print the track list and share link for this album instead of
    /// the album index.
    #[arg(long)]
    album: Option<i64>,

    /// Run a search query instead of the album index.
    #[arg(long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    let client = FanSiteClient::new(args.origin.clone());

    if let Some(id) = args.album {
        let album_id = AlbumId(id);
        let Some(tracks) = client.fetch_tracks(album_id).await else {
            bail!("couldn't fetch tracks for album {id} from {}", args.origin);
        };
        println!("{}", serde_json::to_string_pretty(&tracks)?);
        println!("share link: {}", routes::album_detail(&args.origin, album_id));
        return Ok(());
    }

    if let Some(query) = args.search {
        let Some(results) = client.search(&query).await else {
            bail!("search failed against {}", args.origin);
        };
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let Some(albums) = client.fetch_albums().await else {
        bail!("couldn't fetch albums from {}", args.origin);
    };
    println!("{}", serde_json::to_string_pretty(&albums)?);
    Ok(())
}
