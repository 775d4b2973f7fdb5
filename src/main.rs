use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use chordsheet::{render_song, Format, Layout, RenderOptions, Song};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chordsheet")]
#[command(about = "Render chord-annotated lyrics, transposed and optionally in two columns")]
struct Args {
    /// Song file (YAML frontmatter + annotated lyrics, or a JSON record with --json)
    file: PathBuf,

    /// Transpose all chords by this many semitones
    #[arg(short, long, allow_hyphen_values = true)]
    transpose: Option<i32>,

    /// Balance the song into two columns
    #[arg(long)]
    columns: bool,

    /// Emit HTML instead of plain text
    #[arg(long)]
    html: bool,

    /// Font zoom factor for HTML output
    #[arg(long)]
    zoom: Option<f64>,

    /// Read the file as a JSON song record
    #[arg(long)]
    json: bool,

    /// YAML file with default render options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn read_file(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn render_options(args: &Args) -> RenderOptions {
    let mut options = match &args.config {
        Some(path) => match RenderOptions::from_yaml(&read_file(path)) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error in '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => RenderOptions::default(),
    };

    // Flags win over the config file
    if let Some(steps) = args.transpose {
        options.steps = steps;
    }
    if args.columns {
        options.layout = Layout::TwoColumn;
    }
    if args.html {
        options.format = Format::Html;
    }
    if let Some(zoom) = args.zoom {
        options.zoom = zoom;
    }
    options
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chordsheet=warn")),
        )
        .init();

    let args = Args::parse();
    let options = render_options(&args);
    tracing::debug!(?options, "render options");

    let source = read_file(&args.file);
    let song = if args.json {
        Song::from_json(&source)
    } else {
        Song::from_source(&source)
    };
    let song = match song {
        Ok(song) => song,
        Err(e) => {
            eprintln!("Error loading song: {}", e);
            process::exit(1);
        }
    };

    let rendered = render_song(&song, &options);

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!("Error writing to '{}': {}", path.display(), e);
                process::exit(1);
            }
            eprintln!("Wrote {} to {}", song.display_title(), path.display());
        }
        None => {
            println!("{}", rendered);
        }
    }
}
