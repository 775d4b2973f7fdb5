//! # Annotation Tokenizer
//!
//! Splits chord-annotated lyric text into an ordered sequence of chunks.
//!
//! ## Grammar
//! ```text
//! [[C]]   escaped chord  -> shown literally as [C]
//! [G]     chord          -> brackets hidden, chord shown as a performance cue
//! other   text           -> runs until the next '['
//! ```
//!
//! A `[` without a matching closer is never an error; it is absorbed into a
//! text chunk that runs to the next `[` (or end of input). A `[[` without a
//! matching `]]` falls back to the single-bracket rule, so `[[G]` is a chord
//! whose content is `[G`.
//!
//! Every byte of the input lands in exactly one chunk, so writing each chunk
//! back in its source form reproduces the input.

use std::fmt;

/// Kind of a tokenized chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Text,
    Chord,
    EscapedChord,
}

/// A slice of annotated text. For chord kinds `content` is the raw material
/// between the delimiters, not yet transposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub kind: ChunkKind,
    pub content: &'a str,
}

impl<'a> Chunk<'a> {
    pub fn text(content: &'a str) -> Self {
        Self { kind: ChunkKind::Text, content }
    }

    pub fn chord(content: &'a str) -> Self {
        Self { kind: ChunkKind::Chord, content }
    }

    pub fn escaped_chord(content: &'a str) -> Self {
        Self { kind: ChunkKind::EscapedChord, content }
    }

    pub fn is_chord(&self) -> bool {
        matches!(self.kind, ChunkKind::Chord | ChunkKind::EscapedChord)
    }

    /// Opening and closing delimiters this chunk was written with
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self.kind {
            ChunkKind::Text => ("", ""),
            ChunkKind::Chord => ("[", "]"),
            ChunkKind::EscapedChord => ("[[", "]]"),
        }
    }

    /// Length in bytes of the chunk as it appeared in the source
    pub fn source_len(&self) -> usize {
        let (open, close) = self.delimiters();
        open.len() + self.content.len() + close.len()
    }

    /// Whitespace and word runs of the content, in order
    pub fn words(&self) -> Words<'a> {
        words(self.content)
    }
}

/// Displays the chunk in its source form, delimiters included.
impl fmt::Display for Chunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.delimiters();
        write!(f, "{}{}{}", open, self.content, close)
    }
}

/// Lazy chunk iterator over an annotated string
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Chunks<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Index of the next '[' strictly after `from`, or end of input
    fn text_end(&self, from: usize) -> usize {
        let after = from + self.input[from..].chars().next().map_or(0, char::len_utf8);
        self.input[after..]
            .find('[')
            .map(|offset| after + offset)
            .unwrap_or(self.input.len())
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let start = self.position;
        if start >= self.input.len() {
            return None;
        }
        let remaining = &self.input[start..];

        if remaining.starts_with("[[") {
            if let Some(end) = remaining[2..].find("]]") {
                self.position = start + 2 + end + 2;
                return Some(Chunk::escaped_chord(&remaining[2..2 + end]));
            }
        }

        if remaining.starts_with('[') {
            if let Some(end) = remaining[1..].find(']') {
                self.position = start + 1 + end + 1;
                return Some(Chunk::chord(&remaining[1..1 + end]));
            }
        }

        // Plain text, or an unterminated '[' read as text
        let end = self.text_end(start);
        self.position = end;
        Some(Chunk::text(&self.input[start..end]))
    }
}

/// Iterate the chunks of `text` lazily.
pub fn chunks(text: &str) -> Chunks<'_> {
    Chunks::new(text)
}

/// Tokenize annotated text into chunks.
///
/// # Example
/// ```
/// use chordsheet::{tokenize, Chunk};
///
/// let chunks = tokenize("Hello [G]World [[C]]!");
/// assert_eq!(
///     chunks,
///     vec![
///         Chunk::text("Hello "),
///         Chunk::chord("G"),
///         Chunk::text("World "),
///         Chunk::escaped_chord("C"),
///         Chunk::text("!"),
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Chunk<'_>> {
    chunks(text).collect()
}

/// A run inside chord content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Space(&'a str),
    Word(&'a str),
}

/// Iterator splitting a string into alternating whitespace and word runs
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Words<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let first = self.rest.chars().next()?;
        let space = first.is_whitespace();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != space)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if space { Segment::Space(run) } else { Segment::Word(run) })
    }
}

pub fn words(content: &str) -> Words<'_> {
    Words { rest: content }
}
