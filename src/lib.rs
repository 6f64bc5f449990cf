//! # raudio client library
//!
//! Client wrapper around the raudio local audio-streaming server's HTTP
//! API: query the current track, request a track, pause, and skip. Each
//! operation is a single HTTP call mapped into a [`Song`] record or a
//! boolean.
//!
//! The streaming-feed operations (`establish_connection`,
//! `close_connection`) carry their intended contract but fail with
//! [`ClientError::NotImplemented`] until the push channel is designed.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::TrackClient;
pub use config::ServerAddress;
pub use error::{ClientError, Result};
pub use models::Song;
