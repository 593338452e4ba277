//! nocco — literate-programming documentation generator.
//!
//! Reads source files, splits them into comment/code sections, renders the
//! comments as Markdown and writes one HTML page per file with the prose next
//! to the code it describes:
//!
//! ```text
//! nocco '*.cs'            # every .cs file below the current directory
//! nocco -o site 'src/**/*.js'
//! ```
//!
//! Pages land in `docs/` (mirroring the source tree, lower-cased) together
//! with `nocco.css` and the `prettify.js` highlighter.

mod assets;
mod discover;
mod language;
mod model;
mod parser;
mod paths;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::language::Languages;
use crate::model::{DocumentationPage, SourceFile};
use crate::render::html::HtmlRenderer;
use crate::render::Renderer;

#[derive(Parser)]
#[command(
    name = "nocco",
    about = "Generate side-by-side HTML documentation from commented source files"
)]
struct Cli {
    /// Glob patterns of files to document, e.g. '*.cs' or 'src/**/*.js'.
    /// Patterns without '/' match file names in every directory.
    targets: Vec<String>,

    /// Output directory
    #[arg(short = 'o', long, default_value = "docs")]
    output: PathBuf,

    /// Directory to search for sources
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Keep generating other pages when one fails; exit non-zero at the end
    #[arg(short = 'k', long)]
    keep_going: bool,
}

/// Settings for one generation run.
struct Config {
    targets: Vec<String>,
    root: PathBuf,
    output: PathBuf,
    keep_going: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            targets: cli.targets,
            root: cli.root,
            output: cli.output,
            keep_going: cli.keep_going,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let config = Config::from(Cli::parse());

    if config.targets.is_empty() {
        return Ok(());
    }

    let languages = Languages::builtin().context("failed to build language table")?;
    generate(&config, &languages)
}

/// Log to stderr, filtered by `NOCCO_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("NOCCO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Discover every target file and write its page, plus the static assets.
fn generate(config: &Config, languages: &Languages) -> Result<()> {
    fs::create_dir_all(&config.output).with_context(|| {
        format!("failed to create output directory: {}", config.output.display())
    })?;
    assets::write_assets(&config.output)?;

    // Never document our own output
    let output = fs::canonicalize(&config.output)
        .with_context(|| format!("failed to resolve {}", config.output.display()))?;

    let files = discover::discover(&config.root, &config.targets, languages, &[output])?;
    println!("{} file(s) found.", files.len());

    let sources: Vec<String> = files.iter().map(|f| f.path.clone()).collect();
    let renderer = HtmlRenderer;

    let mut failed: Vec<&str> = Vec::new();
    for file in &files {
        match generate_page(config, file, &sources, &renderer) {
            Ok(()) => {}
            Err(e) if config.keep_going => {
                error!(path = %file.path, "{:#}", e);
                failed.push(&file.path);
            }
            Err(e) => return Err(e),
        }
    }

    if !failed.is_empty() {
        for path in &failed {
            eprintln!("failed: {}", path);
        }
        bail!("{} of {} file(s) failed", failed.len(), files.len());
    }

    info!(pages = files.len(), output = %config.output.display(), "documentation generated");
    Ok(())
}

/// Read, segment, render and write the page for one source file.
fn generate_page(
    config: &Config,
    file: &SourceFile,
    sources: &[String],
    renderer: &dyn Renderer,
) -> Result<()> {
    let source_path = config.root.join(&file.path);
    let bytes = fs::read(&source_path)
        .with_context(|| format!("failed to read {}", source_path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let sections = parser::parse_and_highlight(&content, file.language);
    let path_to_root = paths::path_to_root(paths::depth(&file.path));

    let page = DocumentationPage {
        title: paths::title(&file.path).to_string(),
        path_to_stylesheet: format!("{}{}", path_to_root, assets::STYLESHEET),
        path_to_script: format!("{}{}", path_to_root, assets::SCRIPT),
        path_to_root,
        sections,
        sources,
    };
    let html = renderer
        .render(&page)
        .with_context(|| format!("failed to render {}", file.path))?;

    let destination = paths::destination(&config.output, &file.path);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(&destination, html)
        .with_context(|| format!("failed to write {}", destination.display()))?;

    debug!(
        source = %file.path,
        language = %file.language.name,
        sections = page.sections.len(),
        page = %destination.display(),
        "generated page"
    );
    Ok(())
}
