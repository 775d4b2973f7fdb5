//! # Song Records
//!
//! The song record supplied by the surrounding application: free-form
//! annotated text plus a little metadata. Two sources are understood:
//!
//! ## Song files
//! ```text
//! ---
//! title: Amazing Grace
//! key: G
//! style: Hymn
//! tempo: 80
//! ---
//! [G]Amazing [G7]grace, how [C]sweet the [G]sound
//! ```
//! The frontmatter is optional; everything after it is the lyric text.
//!
//! ## JSON records
//! A single record as stored by the song library:
//! `{"title": "...", "lyrics": "...", "chords": "...", "key": "G", "style": "...", "tempo": 80}`

use serde::Deserialize;

use crate::error::SongError;
use crate::transpose::transpose_token;

/// A song as handed to the chord pipeline
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Song {
    pub title: Option<String>,
    pub key: Option<String>,
    pub style: Option<String>,
    pub tempo: Option<u32>,
    pub lyrics: Option<String>,
    pub chords: Option<String>,
}

/// Raw frontmatter for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawMetadata {
    title: Option<String>,
    key: Option<String>,
    style: Option<String>,
    tempo: Option<u32>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl Song {
    /// Parse a song file with optional YAML frontmatter.
    ///
    /// # Example
    /// ```
    /// use chordsheet::Song;
    ///
    /// let song = Song::from_source("---\ntitle: Test\nkey: Bb\n---\n[Bb]La la").unwrap();
    /// assert_eq!(song.title.as_deref(), Some("Test"));
    /// assert_eq!(song.text(), "[Bb]La la");
    /// ```
    pub fn from_source(source: &str) -> Result<Self, SongError> {
        let (metadata, body) = extract_frontmatter(source);
        let raw: RawMetadata = match metadata {
            Some(content) if !content.trim().is_empty() => {
                serde_yaml::from_str(&content).map_err(|e| SongError::MetadataError(e.to_string()))?
            }
            _ => RawMetadata::default(),
        };

        let song = Song {
            title: raw.title,
            key: raw.key,
            style: raw.style,
            tempo: raw.tempo,
            lyrics: Some(body),
            chords: None,
        };
        tracing::debug!(title = song.display_title(), "loaded song file");
        Ok(song)
    }

    /// Parse one JSON song record.
    pub fn from_json(source: &str) -> Result<Self, SongError> {
        let song: Song =
            serde_json::from_str(source).map_err(|e| SongError::RecordError(e.to_string()))?;
        tracing::debug!(title = song.display_title(), "loaded song record");
        Ok(song)
    }

    /// Annotated text: the lyrics, else the chords field, else empty
    pub fn text(&self) -> &str {
        non_empty(&self.lyrics)
            .or_else(|| non_empty(&self.chords))
            .unwrap_or("")
    }

    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or("Untitled")
    }

    /// The declared key moved by `steps` semitones
    pub fn transposed_key(&self, steps: i32) -> Option<String> {
        self.key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| transpose_token(key, steps))
    }
}

/// Split a leading `---` frontmatter block from the song body.
///
/// Only a block opened on the very first line counts as frontmatter, so a
/// `---` rule inside the lyrics is left alone.
pub(crate) fn extract_frontmatter(source: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = source.lines().collect();

    if lines.first().map(|line| line.trim()) != Some("---") {
        return (None, source.to_string());
    }

    match lines[1..].iter().position(|line| line.trim() == "---") {
        Some(offset) => {
            let end = offset + 1;
            let metadata = lines[1..end].join("\n");
            let body = lines[end + 1..].join("\n");
            (Some(metadata), body)
        }
        None => (None, source.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter_split() {
        let (metadata, body) = extract_frontmatter("---\ntitle: X\n---\n[C]line\n\nnext");
        assert_eq!(metadata.as_deref(), Some("title: X"));
        assert_eq!(body, "[C]line\n\nnext");
    }

    #[test]
    fn test_no_frontmatter() {
        let (metadata, body) = extract_frontmatter("[C]line\n---\nmore");
        assert!(metadata.is_none());
        assert_eq!(body, "[C]line\n---\nmore");
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let (metadata, body) = extract_frontmatter("---\ntitle: X");
        assert!(metadata.is_none());
        assert_eq!(body, "---\ntitle: X");
    }

    #[test]
    fn test_song_from_source() {
        let song = Song::from_source("---\ntitle: Grace\nkey: G\nstyle: Hymn\ntempo: 80\n---\n[G]Amazing").unwrap();
        assert_eq!(song.display_title(), "Grace");
        assert_eq!(song.key.as_deref(), Some("G"));
        assert_eq!(song.style.as_deref(), Some("Hymn"));
        assert_eq!(song.tempo, Some(80));
        assert_eq!(song.text(), "[G]Amazing");
    }

    #[test]
    fn test_invalid_metadata() {
        let result = Song::from_source("---\ntempo: fast\n---\nla");
        assert!(matches!(result, Err(SongError::MetadataError(_))));
    }

    #[test]
    fn test_song_from_json_falls_back_to_chords() {
        let song = Song::from_json(r#"{"title": "", "lyrics": "", "chords": "[Am] [F]", "tempo": 120}"#).unwrap();
        assert_eq!(song.text(), "[Am] [F]");
        assert_eq!(song.display_title(), "Untitled");
        assert_eq!(song.tempo, Some(120));
    }

    #[test]
    fn test_song_without_text() {
        let song = Song::from_json("{}").unwrap();
        assert_eq!(song.text(), "");
        assert!(matches!(Song::from_json("[1, 2]"), Err(SongError::RecordError(_))));
    }

    #[test]
    fn test_transposed_key() {
        let song = Song {
            key: Some("Bb".to_string()),
            ..Song::default()
        };
        assert_eq!(song.transposed_key(0).as_deref(), Some("A#"));
        assert_eq!(song.transposed_key(2).as_deref(), Some("C"));

        let minor = Song {
            key: Some(" Em ".to_string()),
            ..Song::default()
        };
        assert_eq!(minor.transposed_key(-2).as_deref(), Some("Dm"));
        assert_eq!(Song::default().transposed_key(3), None);
    }
}
