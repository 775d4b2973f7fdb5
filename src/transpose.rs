use crate::chord::{split_root, split_slash, ChordToken, PitchClass};
use crate::tokenizer::{words, Segment};

/// Transpose a single note spelling, leaving unknown spellings untouched
fn transpose_note(name: &str, steps: i32) -> String {
    match PitchClass::parse(name) {
        Some(pitch) => pitch.transpose(steps).name().to_string(),
        None => {
            tracing::trace!(note = name, "unknown pitch spelling left as is");
            name.to_string()
        }
    }
}

/// Transpose one chord token by `steps` semitones.
///
/// Flats are always normalized to sharps, even for `steps == 0`. Tokens that
/// do not start with a note letter come back unchanged; an unknown root or
/// bass spelling is left as written while the other part still moves.
///
/// # Example
/// ```
/// use chordsheet::transpose_token;
///
/// assert_eq!(transpose_token("G", 2), "A");
/// assert_eq!(transpose_token("Dbmaj7", 1), "Dmaj7");
/// assert_eq!(transpose_token("G/B", -2), "F/A");
/// assert_eq!(transpose_token("Xyz123", 5), "Xyz123");
/// ```
pub fn transpose_token(token: &str, steps: i32) -> String {
    if let Some(chord) = ChordToken::parse(token) {
        return chord.transpose(steps).to_string();
    }

    // Partially recognized: move the parts that are known pitch classes
    let (main, bass) = split_slash(token);
    let Some((root, suffix)) = split_root(main) else {
        return token.to_string();
    };

    let mut result = transpose_note(root, steps);
    result.push_str(suffix);
    if let Some(bass) = bass {
        result.push('/');
        result.push_str(&transpose_note(bass, steps));
    }
    result
}

/// Transpose every chord word inside a chord chunk's content, keeping the
/// whitespace between them exactly as written.
///
/// # Example
/// ```
/// use chordsheet::transpose_chunk_content;
///
/// assert_eq!(transpose_chunk_content("Gsus  G", 2), "Asus  A");
/// ```
pub fn transpose_chunk_content(content: &str, steps: i32) -> String {
    let mut result = String::with_capacity(content.len() + 4);
    for segment in words(content) {
        match segment {
            Segment::Space(space) => result.push_str(space),
            Segment::Word(word) => result.push_str(&transpose_token(word, steps)),
        }
    }
    result
}
