use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, disable_version_flag = true)]
pub struct Cli {
    /// The file to convert (*.html, *.md)
    #[clap(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the PDF (*.pdf)
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file [default: html2pdf.toml, if present]
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the assembled HTML document to this path
    #[clap(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Title printed above the content instead of the file name
    #[clap(long, conflicts_with = "no_title")]
    pub title: Option<String>,

    /// Don't print a title above the content
    #[clap(long)]
    pub no_title: bool,

    /// Log progress details
    #[clap(long)]
    pub verbose: bool,

    /// Show version number
    #[clap(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}
