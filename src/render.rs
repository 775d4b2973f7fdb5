//! # Rendering
//!
//! Turns annotated text into a presentable surface, transposing every chord
//! on the way. Transposition is applied on the fly; the source text is never
//! modified.
//!
//! ## Chunk Rendering
//! | Chunk          | Plain            | HTML                                          |
//! |----------------|------------------|-----------------------------------------------|
//! | text           | verbatim         | `<span class="text">`                         |
//! | chord `[G]`    | ` A ` (hidden brackets keep their width) | `<span class="chord">` with invisible brackets |
//! | escaped `[[G]]`| `[A]`            | `<span class="chord">[A]</span>`              |
//!
//! ## Layouts
//! - `Single` renders the whole text in one pass.
//! - `TwoColumn` balances blocks with [`split_columns`] and renders each
//!   line of each block on its own.

use serde::Deserialize;

use crate::columns::{split_columns, Block};
use crate::error::SongError;
use crate::tokenizer::{chunks, Chunk, ChunkKind};
use crate::transpose::transpose_chunk_content;

/// Base font sizes in pixels at zoom 1.0
const SINGLE_FONT_PX: f64 = 16.0;
const COLUMN_FONT_PX: f64 = 24.0;

/// Spaces between the two plain-text columns
const GUTTER: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Single,
    TwoColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    #[default]
    Plain,
    Html,
}

/// Presentation parameters, passed in on every render call
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RenderOptions {
    /// Transposition offset in semitones
    #[serde(alias = "transpose")]
    pub steps: i32,
    pub layout: Layout,
    pub format: Format,
    pub zoom: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            steps: 0,
            layout: Layout::Single,
            format: Format::Plain,
            zoom: 1.0,
        }
    }
}

impl RenderOptions {
    /// Load options from a YAML document.
    ///
    /// # Example
    /// ```
    /// use chordsheet::{Layout, RenderOptions};
    ///
    /// let options = RenderOptions::from_yaml("steps: -2\nlayout: two-column").unwrap();
    /// assert_eq!(options.steps, -2);
    /// assert_eq!(options.layout, Layout::TwoColumn);
    /// assert_eq!(options.zoom, 1.0);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, SongError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| SongError::ConfigError(e.to_string()))
    }

    fn font_px(&self) -> u32 {
        let base = match self.layout {
            Layout::Single => SINGLE_FONT_PX,
            Layout::TwoColumn => COLUMN_FONT_PX,
        };
        (base * self.zoom).round().max(1.0) as u32
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn push_chunk(out: &mut String, chunk: &Chunk, steps: i32, format: Format) {
    match (chunk.kind, format) {
        (ChunkKind::Text, Format::Plain) => out.push_str(chunk.content),
        (ChunkKind::Text, Format::Html) => {
            out.push_str(&format!("<span class=\"text\">{}</span>", escape_html(chunk.content)));
        }
        (ChunkKind::Chord, Format::Plain) => {
            out.push(' ');
            out.push_str(&transpose_chunk_content(chunk.content, steps));
            out.push(' ');
        }
        (ChunkKind::Chord, Format::Html) => {
            out.push_str(&format!(
                "<span class=\"chord\"><span class=\"invisible\">[</span>{}<span class=\"invisible\">]</span></span>",
                escape_html(&transpose_chunk_content(chunk.content, steps))
            ));
        }
        (ChunkKind::EscapedChord, Format::Plain) => {
            out.push('[');
            out.push_str(&transpose_chunk_content(chunk.content, steps));
            out.push(']');
        }
        (ChunkKind::EscapedChord, Format::Html) => {
            out.push_str(&format!(
                "<span class=\"chord\">[{}]</span>",
                escape_html(&transpose_chunk_content(chunk.content, steps))
            ));
        }
    }
}

/// Render annotated text inline (no layout wrapper).
///
/// # Example
/// ```
/// use chordsheet::{render_inline, Format};
///
/// assert_eq!(render_inline("[G]Amazing [[D]]grace", 2, Format::Plain), " A Amazing [E]grace");
/// ```
pub fn render_inline(text: &str, steps: i32, format: Format) -> String {
    let mut out = String::with_capacity(text.len());
    for chunk in chunks(text) {
        push_chunk(&mut out, &chunk, steps, format);
    }
    out
}

fn render_block_lines(block: &Block, steps: i32, format: Format) -> Vec<String> {
    block
        .lines
        .iter()
        .map(|line| render_inline(line.strip_suffix('\r').unwrap_or(line), steps, format))
        .collect()
}

/// Plain-text lines for one column, blocks separated by a blank line
fn plain_column(blocks: &[Block], steps: i32) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(render_block_lines(block, steps, Format::Plain));
    }
    lines
}

fn render_plain_columns(text: &str, steps: i32) -> String {
    let columns = split_columns(text);
    let left = plain_column(&columns.left, steps);
    let right = plain_column(&columns.right, steps);
    let width = left.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let rows = left.len().max(right.len());
    let mut out = Vec::with_capacity(rows);
    for row in 0..rows {
        let l = left.get(row).map(String::as_str).unwrap_or("");
        match right.get(row) {
            Some(r) if !r.is_empty() => {
                let pad = width - l.chars().count() + GUTTER;
                out.push(format!("{}{}{}", l, " ".repeat(pad), r));
            }
            _ => out.push(l.to_string()),
        }
    }
    out.join("\n")
}

fn html_column(blocks: &[Block], options: &RenderOptions) -> String {
    let mut html = format!("  <div class=\"column\" style=\"font-size: {}px\">\n", options.font_px());
    for block in blocks {
        html.push_str("    <div class=\"block\">\n");
        for line in render_block_lines(block, options.steps, Format::Html) {
            html.push_str(&format!("      <div class=\"line\">{}</div>\n", line));
        }
        html.push_str("    </div>\n");
    }
    html.push_str("  </div>\n");
    html
}

fn render_html_columns(text: &str, options: &RenderOptions) -> String {
    let columns = split_columns(text);
    let mut html = String::from("<div class=\"columns\">\n");
    html.push_str(&html_column(&columns.left, options));
    html.push_str(&html_column(&columns.right, options));
    html.push_str("</div>\n");
    html
}

/// Render annotated text according to `options`.
pub fn render_text(text: &str, options: &RenderOptions) -> String {
    let rendered = match (options.layout, options.format) {
        (Layout::Single, Format::Plain) => render_inline(text, options.steps, Format::Plain),
        (Layout::Single, Format::Html) => format!(
            "<pre class=\"song\" style=\"font-size: {}px\">{}</pre>\n",
            options.font_px(),
            render_inline(text, options.steps, Format::Html)
        ),
        (Layout::TwoColumn, Format::Plain) => render_plain_columns(text, options.steps),
        (Layout::TwoColumn, Format::Html) => render_html_columns(text, options),
    };
    tracing::debug!(
        layout = ?options.layout,
        format = ?options.format,
        steps = options.steps,
        bytes = rendered.len(),
        "rendered text"
    );
    rendered
}
