//! raudio - command-line client for the raudio audio server
//!
//! Each subcommand exercises one control-API operation and prints a
//! human-readable result. Sentinel results ("no song playing", a rejected
//! pause) exit zero; transport and decode errors exit nonzero.

use anyhow::Result;
use clap::{Parser, Subcommand};
use raudio::{ServerAddress, Song, TrackClient};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "raudio", version, about = "Control a local raudio audio server")]
struct Cli {
    /// Server host including the scheme (overrides RAUDIO_HOST and the
    /// config file)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Server port (overrides RAUDIO_PORT and the config file)
    #[arg(long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the currently playing track
    Song,
    /// Ask the server to queue a track
    Request {
        #[arg(long)]
        title: String,
        #[arg(long)]
        album: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        album_art: Option<String>,
    },
    /// Pause the current track
    Pause,
    /// Skip to the next track
    Skip,
    /// Open a control connection and start listening for the stream
    Connect,
    /// Ask the server to terminate the stream
    Disconnect,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let address = ServerAddress::resolve(cli.host.as_deref(), cli.port)?;
    let client = TrackClient::new(address);

    match cli.command {
        Command::Song => match client.request_track_info().await? {
            Some(song) => print_song(&song),
            None => println!("no song playing"),
        },
        Command::Request {
            title,
            album,
            artist,
            album_art,
        } => {
            let song = Song {
                title,
                album,
                artist,
                album_art,
            };
            match client.request_track(&song).await? {
                Some(song) => {
                    println!("requested:");
                    print_song(&song);
                }
                None => println!("request rejected"),
            }
        }
        Command::Pause => {
            if client.pause_track().await? {
                println!("paused");
            } else {
                println!("pause rejected");
            }
        }
        Command::Skip => match client.request_skip().await? {
            Some(song) => {
                println!("now playing:");
                print_song(&song);
            }
            None => println!("skip rejected"),
        },
        Command::Connect => client.establish_connection().await?,
        Command::Disconnect => {
            client.close_connection().await?;
        }
    }

    Ok(())
}

fn print_song(song: &Song) {
    println!("  title:  {}", song.title);
    if let Some(album) = &song.album {
        println!("  album:  {}", album);
    }
    if let Some(artist) = &song.artist {
        println!("  artist: {}", artist);
    }
    if let Some(art) = &song.album_art {
        println!("  art:    {}", art);
    }
}
