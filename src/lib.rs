use std::fmt::Write;

pub mod chord;
pub mod columns;
pub mod error;
pub mod render;
pub mod song;
pub mod tokenizer;
pub mod transpose;

pub use chord::{ChordToken, PitchClass};
pub use columns::{blocks, split_columns, Block, Columns};
pub use error::*;
pub use render::{render_inline, render_text, Format, Layout, RenderOptions};
pub use song::Song;
pub use tokenizer::{chunks, tokenize, Chunk, ChunkKind, Chunks, Segment};
pub use transpose::{transpose_chunk_content, transpose_token};

/// Render a song with a title heading above its transposed body.
pub fn render_song(song: &Song, options: &RenderOptions) -> String {
    let title = song.display_title();
    let key = song.transposed_key(options.steps);
    let body = render_text(song.text(), options);

    // Writing into a String cannot fail
    let mut out = String::new();
    match options.format {
        Format::Plain => {
            let _ = writeln!(out, "{}", title);
            if let Some(key) = key {
                let _ = writeln!(out, "Key: {}", key);
            }
            out.push('\n');
        }
        Format::Html => {
            let _ = writeln!(out, "<h2 class=\"title\">{}</h2>", render::escape_html(title));
            if let Some(key) = key {
                let _ = writeln!(out, "<p class=\"key\">Key: {}</p>", render::escape_html(&key));
            }
        }
    }
    out.push_str(&body);
    out
}

/// Parse a song file and render it.
/// This is the main entry point for the library.
pub fn render_song_source(source: &str, options: &RenderOptions) -> Result<String, SongError> {
    let song = Song::from_source(source)?;
    Ok(render_song(&song, options))
}
