//! HTTP client for the raudio server control API
//!
//! Each operation issues exactly one request against the configured server
//! and maps the response into a [`Song`] or a boolean. Non-success HTTP
//! statuses are logged and become sentinel returns (`None` / `false`);
//! transport faults and undecodable bodies propagate as errors.

use crate::config::ServerAddress;
use crate::error::{ClientError, Result};
use crate::models::Song;
use tracing::{debug, error};

/// Client for the audio server's control API.
///
/// Holds the fixed server address and the underlying HTTP transport.
/// Stateless beyond that: calls are independent, with no retries and no
/// client-imposed timeout (the transport's defaults apply).
pub struct TrackClient {
    address: ServerAddress,
    http: reqwest::Client,
}

impl TrackClient {
    /// Create a client for the given server address.
    pub fn new(address: ServerAddress) -> Self {
        Self {
            address,
            http: reqwest::Client::new(),
        }
    }

    /// Address this client talks to.
    pub fn address(&self) -> &ServerAddress {
        &self.address
    }

    fn url(&self, path: &str) -> String {
        format!("{}:{}{}", self.address.host, self.address.port, path)
    }

    /// Open a control connection to the server.
    ///
    /// Intended contract: perform a handshake request, then register a
    /// listener for the server's out-of-band UDP streaming feed. Not yet
    /// implemented; always fails with [`ClientError::NotImplemented`].
    pub async fn establish_connection(&self) -> Result<()> {
        Err(ClientError::NotImplemented("establish_connection"))
    }

    /// Ask the server to terminate the stream, reporting success.
    ///
    /// Not yet implemented; always fails with
    /// [`ClientError::NotImplemented`].
    pub async fn close_connection(&self) -> Result<bool> {
        Err(ClientError::NotImplemented("close_connection"))
    }

    /// Fetch the currently playing track.
    ///
    /// Returns `Ok(None)` when the server answers with a non-success
    /// status; "no song playing" and "request failed" are not
    /// distinguished.
    pub async fn request_track_info(&self) -> Result<Option<Song>> {
        let url = self.url("/song");
        debug!(%url, "requesting current track");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            error!(status = %response.status(), "current-track request rejected by server");
            return Ok(None);
        }

        let body = response.text().await?;
        Ok(Some(Song::from_json(&body)?))
    }

    /// Ask the server to queue the given track.
    ///
    /// On success the input song is handed back unchanged; the server's
    /// response body is not inspected. Returns `Ok(None)` on a non-success
    /// status.
    pub async fn request_track(&self, song: &Song) -> Result<Option<Song>> {
        let url = self.url("/request");
        debug!(%url, title = %song.title, "requesting track");

        let response = self.http.post(&url).json(song).send().await?;
        if !response.status().is_success() {
            error!(status = %response.status(), "track request rejected by server");
            return Ok(None);
        }

        Ok(Some(song.clone()))
    }

    /// Pause the current track. Returns whether the server acknowledged.
    pub async fn pause_track(&self) -> Result<bool> {
        let url = self.url("/pause");
        debug!(%url, "pausing playback");

        let response = self.http.put(&url).send().await?;
        if !response.status().is_success() {
            error!(status = %response.status(), "pause request rejected by server");
            return Ok(false);
        }

        Ok(true)
    }

    /// Skip the current track, returning the track now playing.
    ///
    /// Decodes the response with the same rules as
    /// [`request_track_info`](Self::request_track_info), and returns
    /// `Ok(None)` on a non-success status.
    pub async fn request_skip(&self) -> Result<Option<Song>> {
        let url = self.url("/play");
        debug!(%url, "skipping current track");

        let response = self.http.put(&url).send().await?;
        if !response.status().is_success() {
            error!(status = %response.status(), "skip request rejected by server");
            return Ok(None);
        }

        let body = response.text().await?;
        Ok(Some(Song::from_json(&body)?))
    }
}
