use anyhow::{Context, Result};
use cli::Cli;
use config::Configuration;
use document::{Document, DocumentAssembler};
use highlight::Highlighter;
use indicatif::{ProgressBar, ProgressStyle};
use markdown::CommonMark;
use pdf::{Chrome, PdfEngine};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod document;
mod highlight;
mod markdown;
mod pdf;
mod styles;
mod transform;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    // --verbose shows debug output, otherwise use RUST_LOG or default to warnings
    let filter = if cli.verbose {
        EnvFilter::new("warn,html2pdf=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (input, output) = match required_paths(&cli) {
        Ok(paths) => paths,
        Err(message) => {
            println!("{message}");
            return Ok(());
        }
    };

    let config = Configuration::load(cli.config.as_deref())?;

    let document = Document::load(input)?;
    let title = match (&cli.title, cli.no_title || !config.document.title) {
        (Some(title), _) => Some(title.clone()),
        (None, false) => Some(document.title()),
        (None, true) => None,
    };

    let html = build_html(&document, title.as_deref(), &config)?;
    if let Some(html_path) = &cli.html {
        std::fs::write(html_path, &html)
            .with_context(|| format!("Failed to write {}", html_path.display()))?;
    }

    render_pdf(&html, output, &config)?;
    println!("success");
    Ok(())
}

/// The input and output paths, or the message naming the first one missing.
fn required_paths(cli: &Cli) -> Result<(&Path, &Path), &'static str> {
    let input = cli
        .input
        .as_deref()
        .ok_or("Missing Parameter \"input\".")?;
    let output = cli
        .output
        .as_deref()
        .ok_or("Missing Parameter \"output\".")?;
    Ok((input, output))
}

/// Run the document through the whole HTML pipeline.
fn build_html(document: &Document, title: Option<&str>, config: &Configuration) -> Result<String> {
    let body = document.body_html(&CommonMark);
    let body = transform::transform_body(
        &body,
        &config.document.iframe_label,
        &Highlighter::default(),
    );

    log::debug!("Highlighting with theme {}", config.highlight.theme);
    let stylesheet = styles::generate_stylesheet(config.highlight.theme)?;
    Ok(DocumentAssembler::new(stylesheet).assemble(title, &body))
}

fn render_pdf(html: &str, output: &Path, config: &Configuration) -> Result<()> {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("can parse progress style"),
    );
    progress.set_message("Rendering PDF...");
    progress.enable_steady_tick(Duration::from_millis(100));

    let engine = Chrome::new(config.page.clone(), config.browser.clone());
    let pdf = engine.render(html);
    progress.finish_and_clear();
    let pdf = pdf.with_context(|| "Failed to render PDF")?;

    std::fs::write(output, pdf)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
