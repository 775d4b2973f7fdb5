//! Integration tests for chordsheet
//!
//! Tests the full pipeline from a song source to rendered output.

use chordsheet::{
    render_song, render_song_source, render_text, split_columns, tokenize, transpose_chunk_content,
    ChunkKind, Format, Layout, RenderOptions, Song,
};

const GRACE: &str = r#"---
title: Amazing Grace
key: G
style: Hymn
tempo: 80
---
[G]Amazing [G7]grace, how [C]sweet the [G]sound
That saved a wretch like [D]me

[G]I once was [G7]lost, but [C]now am [G]found
Was blind, but [D]now I [G]see

'Twas grace that taught my heart to fear
And grace my fears relieved

[G]How precious [C]did that [G]grace appear
The hour I [D]first be[G]lieved
"#;

#[test]
fn test_render_song_plain_transposed() {
    let options = RenderOptions { steps: 2, ..RenderOptions::default() };
    let result = render_song_source(GRACE, &options);
    assert!(result.is_ok(), "Should render song successfully");
    let out = result.unwrap();
    assert!(out.starts_with("Amazing Grace\nKey: A\n\n"));
    assert!(out.contains(" A Amazing  A7 grace, how  D sweet the  A sound"));
    assert!(out.contains("That saved a wretch like  E me"));
}

#[test]
fn test_render_does_not_alter_source() {
    let song = Song::from_source(GRACE).unwrap();
    let before = song.text().to_string();
    let _ = render_song(&song, &RenderOptions { steps: 5, ..RenderOptions::default() });
    assert_eq!(song.text(), before);
}

#[test]
fn test_two_column_split_starts_on_chord_line() {
    let song = Song::from_source(GRACE).unwrap();
    let columns = split_columns(song.text());
    assert_eq!(columns.left.len() + columns.right.len(), 4);
    // The naive split lands on the unaccompanied third verse; the right column waits for the next chord line
    assert_eq!(columns.split_index(), 3);
    assert!(columns.right[0].is_chord_leading());
}

#[test]
fn test_two_column_html() {
    let song = Song::from_source(GRACE).unwrap();
    let options = RenderOptions {
        steps: -1,
        layout: Layout::TwoColumn,
        format: Format::Html,
        zoom: 2.0,
    };
    let html = render_song(&song, &options);
    assert!(html.starts_with("<h2 class=\"title\">Amazing Grace</h2>\n<p class=\"key\">Key: F#</p>\n"));
    assert!(html.contains("<div class=\"column\" style=\"font-size: 48px\">"));
    assert!(html.contains("<span class=\"text\">&#39;Twas grace that taught my heart to fear</span>"));
    assert!(!html.contains("\n\n"));
}

#[test]
fn test_json_record_pipeline() {
    let record = r#"{"title":"Riff","lyrics":"","chords":"[Em  D] [[C/G]]","key":"Em"}"#;
    let song = Song::from_json(record).unwrap();
    let out = render_song(&song, &RenderOptions { steps: 3, ..RenderOptions::default() });
    assert_eq!(out, "Riff\nKey: Gm\n\n Gm  F  [D#/A#]");
}

#[test]
fn test_escaped_chords_are_transposed_like_chords() {
    let chunks = tokenize("[Bb] [[Bb]]");
    assert_eq!(chunks[0].kind, ChunkKind::Chord);
    assert_eq!(chunks[2].kind, ChunkKind::EscapedChord);
    assert_eq!(
        transpose_chunk_content(chunks[0].content, 2),
        transpose_chunk_content(chunks[2].content, 2)
    );
}

#[test]
fn test_malformed_input_never_fails() {
    let text = "[G unterminated [[also\n\n]] stray [";
    let options = RenderOptions { steps: 7, layout: Layout::TwoColumn, ..RenderOptions::default() };
    let out = render_text(text, &options);
    assert!(out.contains("[G unterminated"));
    assert!(out.contains("]] stray ["));
}

#[test]
fn test_empty_song() {
    let song = Song::default();
    let out = render_song(&song, &RenderOptions::default());
    assert_eq!(out, "Untitled\n\n");
    let columns = render_text("", &RenderOptions { layout: Layout::TwoColumn, ..RenderOptions::default() });
    assert_eq!(columns, "");
}

#[test]
fn test_bundled_song_with_presentation_options() {
    let source = include_str!("../songs/amazing_grace.song");
    let options = RenderOptions::from_yaml(include_str!("../songs/presentation.yaml")).unwrap();
    assert_eq!(options.layout, Layout::TwoColumn);
    assert_eq!(options.format, Format::Html);

    let html = render_song_source(source, &options).unwrap();
    assert!(html.contains("<div class=\"column\" style=\"font-size: 30px\">"));
    assert_eq!(html.matches("<div class=\"block\">").count(), 4);
}
