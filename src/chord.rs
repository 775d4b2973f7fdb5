//! # Chord Model
//!
//! Pitch classes and chord tokens as they appear inside chord annotations.
//!
//! ## Pitch Classes
//! Twelve equal-tempered note names, always spelled with sharps:
//! ```text
//! C  C#  D  D#  E  F  F#  G  G#  A  A#  B
//! 0  1   2  3   4  5  6   7  8   9  10  11
//! ```
//! Flat spellings `Db Eb Gb Ab Bb` are accepted on input and normalized to
//! their sharp equivalent. `Cb`, `Fb`, `E#` and `B#` are not recognized.
//!
//! ## Chord Tokens
//! A chord token is one whitespace-free word: `<root><suffix>[/<bass>]`.
//! The suffix (`m`, `maj7`, `sus4`, ...) is opaque and never validated.

use std::fmt;
use std::str::FromStr;

/// One of the twelve pitch classes, sharp-spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// The chromatic sequence, in arithmetic order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at `index` modulo 12
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// Canonical sharp spelling
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Parse an exact note spelling, normalizing flats to sharps.
    ///
    /// # Example
    /// ```
    /// use chordsheet::PitchClass;
    ///
    /// assert_eq!(PitchClass::parse("Db"), Some(PitchClass::CSharp));
    /// assert_eq!(PitchClass::parse("G#"), Some(PitchClass::GSharp));
    /// assert_eq!(PitchClass::parse("Cb"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        let pitch = match name {
            "C" => PitchClass::C,
            "C#" | "Db" => PitchClass::CSharp,
            "D" => PitchClass::D,
            "D#" | "Eb" => PitchClass::DSharp,
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F#" | "Gb" => PitchClass::FSharp,
            "G" => PitchClass::G,
            "G#" | "Ab" => PitchClass::GSharp,
            "A" => PitchClass::A,
            "A#" | "Bb" => PitchClass::ASharp,
            "B" => PitchClass::B,
            _ => return None,
        };
        Some(pitch)
    }

    /// Shift by `steps` semitones, wrapping around the octave in both directions
    pub fn transpose(self, steps: i32) -> Self {
        Self::from_index(self.index() as i64 + steps as i64)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown pitch class: {}", s))
    }
}

/// Split `token` at its first '/' into main part and bass, trimming both.
pub(crate) fn split_slash(token: &str) -> (&str, Option<&str>) {
    match token.split_once('/') {
        Some((main, bass)) => (main.trim(), Some(bass.trim())),
        None => (token.trim(), None),
    }
}

/// Split a chord's main part into root spelling and suffix.
///
/// The root is one letter A-G optionally followed by `#` or `b`. Returns
/// `None` when the main part does not start with a note letter.
pub(crate) fn split_root(main: &str) -> Option<(&str, &str)> {
    let bytes = main.as_bytes();
    match bytes.first() {
        Some(b'A'..=b'G') => {}
        _ => return None,
    }
    let root_len = match bytes.get(1) {
        Some(b'#') | Some(b'b') => 2,
        _ => 1,
    };
    Some(main.split_at(root_len))
}

/// A fully recognized chord token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordToken<'a> {
    pub root: PitchClass,
    pub suffix: &'a str,
    pub bass: Option<PitchClass>,
}

impl<'a> ChordToken<'a> {
    /// Parse a chord token whose root and bass (if any) are both known
    /// pitch classes.
    ///
    /// # Example
    /// ```
    /// use chordsheet::{ChordToken, PitchClass};
    ///
    /// let chord = ChordToken::parse("Bbmaj7/D").unwrap();
    /// assert_eq!(chord.root, PitchClass::ASharp);
    /// assert_eq!(chord.suffix, "maj7");
    /// assert_eq!(chord.bass, Some(PitchClass::D));
    /// assert!(ChordToken::parse("N.C.").is_none());
    /// ```
    pub fn parse(token: &'a str) -> Option<Self> {
        let (main, bass) = split_slash(token);
        let (root, suffix) = split_root(main)?;
        let root = PitchClass::parse(root)?;
        let bass = match bass {
            Some(bass) => Some(PitchClass::parse(bass)?),
            None => None,
        };
        Some(Self { root, suffix, bass })
    }

    pub fn transpose(self, steps: i32) -> Self {
        Self {
            root: self.root.transpose(steps),
            suffix: self.suffix,
            bass: self.bass.map(|bass| bass.transpose(steps)),
        }
    }
}

impl fmt::Display for ChordToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}
