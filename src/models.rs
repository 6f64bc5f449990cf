//! Track metadata model

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Immutable metadata record for a track.
///
/// Equality and ordering are structural, field by field in declaration
/// order, so songs sort lexicographically by (title, album, artist,
/// album_art).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Song {
    /// Track title. Always present and non-empty in a decoded payload.
    pub title: String,
    /// Album name, when the server knows it.
    pub album: Option<String>,
    /// Artist name, when the server knows it.
    pub artist: Option<String>,
    /// URL of an album art image.
    pub album_art: Option<String>,
}

impl Song {
    /// Create a song carrying only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            album: None,
            artist: None,
            album_art: None,
        }
    }

    /// Decode a server payload into a song.
    ///
    /// `title` is required; the optional fields decode to `None` when their
    /// key is missing from the payload.
    pub fn from_json(body: &str) -> Result<Self> {
        let song: Song = serde_json::from_str(body)?;
        if song.title.is_empty() {
            return Err(ClientError::EmptyTitle);
        }
        Ok(song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_payload() {
        let song = Song::from_json(
            r#"{"title": "So What", "album": "Kind of Blue",
                "artist": "Miles Davis", "album_art": "https://example.com/kob.jpg"}"#,
        )
        .unwrap();

        assert_eq!(song.title, "So What");
        assert_eq!(song.album.as_deref(), Some("Kind of Blue"));
        assert_eq!(song.artist.as_deref(), Some("Miles Davis"));
        assert_eq!(song.album_art.as_deref(), Some("https://example.com/kob.jpg"));
    }

    #[test]
    fn missing_optional_fields_decode_to_none() {
        let song = Song::from_json(r#"{"title": "Freddie Freeloader"}"#).unwrap();

        assert_eq!(song.title, "Freddie Freeloader");
        assert_eq!(song.album, None);
        assert_eq!(song.artist, None);
        assert_eq!(song.album_art, None);
    }

    #[test]
    fn missing_title_is_a_decode_error() {
        let err = Song::from_json(r#"{"album": "Kind of Blue"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = Song::from_json("not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = Song::from_json(r#"{"title": ""}"#).unwrap_err();
        assert!(matches!(err, ClientError::EmptyTitle));
    }

    #[test]
    fn equality_is_structural() {
        let a = Song {
            title: "Blue in Green".into(),
            album: Some("Kind of Blue".into()),
            artist: Some("Miles Davis".into()),
            album_art: None,
        };
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Song::new("Blue in Green"));
    }

    #[test]
    fn ordering_is_lexicographic_by_field() {
        // Title dominates.
        assert!(Song::new("All Blues") < Song::new("So What"));

        // Equal titles fall through to album; None sorts before Some.
        let untagged = Song::new("So What");
        let tagged = Song {
            album: Some("Kind of Blue".into()),
            ..Song::new("So What")
        };
        assert!(untagged < tagged);

        // Equal titles and albums fall through to artist.
        let davis = Song {
            artist: Some("Miles Davis".into()),
            ..tagged.clone()
        };
        let evans = Song {
            artist: Some("Bill Evans".into()),
            ..tagged.clone()
        };
        assert!(evans < davis);
    }
}
