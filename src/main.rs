mod config;
mod session;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use grid::codegen::{class_collisions, generate_css, generate_full_html, generate_html};
use grid::doc::GridStore;
use grid::engine::EngineCore;
use grid::layout::{Layout, LayoutError};
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, EditorConfig};
use crate::session::{Session, SessionError};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read script {path}: {source}")]
    ReadScript { path: String, source: io::Error },
    #[error("invalid script JSON: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("layout check found {0} problem(s)")]
    CheckFailed(usize),
}

#[derive(Parser, Debug)]
#[command(name = "gridmaker", about = "Design CSS grid layouts and generate their CSS/HTML")]
struct Cli {
    /// Layout JSON file to start from (the demo layout when absent).
    #[arg(long, global = true, env = "GRIDMAKER_LAYOUT")]
    layout: Option<PathBuf>,

    /// Start from an empty 5×5 grid; overrides `--layout`.
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generated stylesheet.
    Css,
    /// Print the generated markup.
    Html,
    /// Print the standalone HTML document.
    Full,
    /// Write the standalone HTML document as grid-layout.html.
    Export {
        #[arg(long, env = "GRIDMAKER_EXPORT_DIR", default_value = ".")]
        dir: PathBuf,
    },
    /// Print the layout as JSON.
    Layout,
    /// Report class-name collisions and out-of-range spans.
    Check,
    /// Apply a JSON script of editor steps, then print the result.
    Run {
        /// Script file path.
        script: PathBuf,

        #[arg(long, value_enum, default_value_t = Emit::Css)]
        emit: Emit,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    Css,
    Html,
    Full,
    Layout,
    Clipboard,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridmaker=info,grid=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let store = load_store(cli.layout.as_deref(), cli.empty)?;

    match cli.command {
        Command::Css => print_text(&generate_css(&store.config(), store.items())),
        Command::Html => print_text(&generate_html(store.items())),
        Command::Full => print_text(&generate_full_html(&store.config(), store.items())),
        Command::Export { dir } => run_export(&store, &dir),
        Command::Layout => print_text(&store.layout().to_json()?),
        Command::Check => run_check(&store),
        Command::Run { script, emit } => run_script(store, &script, emit),
    }
}

fn load_store(layout: Option<&Path>, empty: bool) -> Result<GridStore, CliError> {
    if empty {
        return Ok(GridStore::empty());
    }
    let Some(path) = layout else {
        return Ok(GridStore::new());
    };
    let store = GridStore::from_layout(Layout::read(path)?);
    tracing::info!(path = %path.display(), items = store.len(), "layout loaded");
    Ok(store)
}

fn print_text(text: &str) -> Result<(), CliError> {
    println!("{text}");
    Ok(())
}

fn warn_collisions(store: &GridStore) -> usize {
    let collisions = class_collisions(store.items());
    for (class, ids) in &collisions {
        tracing::warn!(class = %class, items = ids.len(), "items share a generated class name");
    }
    collisions.len()
}

fn run_export(store: &GridStore, dir: &Path) -> Result<(), CliError> {
    warn_collisions(store);
    let export = EngineCore::with_store(store.clone()).export();
    let path = dir.join(export.file_name);
    fs::write(&path, &export.contents)
        .map_err(|source| CliError::Write { path: path.display().to_string(), source })?;
    tracing::info!(path = %path.display(), bytes = export.contents.len(), mime = export.mime_type, "layout exported");
    println!("{}", path.display());
    Ok(())
}

fn run_check(store: &GridStore) -> Result<(), CliError> {
    let config = store.config();
    let mut problems = warn_collisions(store);
    for item in store.items() {
        let span = item.span();
        if span.clamped(&config) != span {
            tracing::warn!(
                item = %item.name,
                col_start = span.col_start,
                col_end = span.col_end,
                row_start = span.row_start,
                row_end = span.row_end,
                "span out of range or empty"
            );
            problems += 1;
        }
    }
    if problems > 0 {
        return Err(CliError::CheckFailed(problems));
    }
    println!("ok");
    Ok(())
}

fn run_script(store: GridStore, script: &Path, emit: Emit) -> Result<(), CliError> {
    let text = fs::read_to_string(script)
        .map_err(|source| CliError::ReadScript { path: script.display().to_string(), source })?;
    let steps = Session::parse_script(&text)?;
    let editor = EditorConfig::from_env()?;

    let mut core = EngineCore::with_store(store);
    core.set_container(editor.container());
    let mut session = Session::new(core);
    session.run(&steps)?;
    tracing::info!(steps = steps.len(), items = session.core.store.len(), "script applied");

    let store = &session.core.store;
    match emit {
        Emit::Css => print_text(&generate_css(&store.config(), store.items())),
        Emit::Html => print_text(&generate_html(store.items())),
        Emit::Full => print_text(&generate_full_html(&store.config(), store.items())),
        Emit::Layout => print_text(&store.layout().to_json()?),
        Emit::Clipboard => print_text(session.clipboard().unwrap_or_default()),
    }
}
