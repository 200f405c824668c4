//! PDF output through a headless Chrome/Chromium.
//!
//! The assembled HTML is written to a temporary file, loaded into a fresh browser
//! tab, and printed with the configured page geometry. Loading from a file rather
//! than a data URL keeps large documents (embedded images, long listings) within
//! the browser's URL limits.

use crate::config::{BrowserConfig, PageConfig};
use anyhow::{anyhow, Context, Result};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use log::debug;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Turns a complete HTML document into PDF bytes.
pub trait PdfEngine {
    fn render(&self, html: &str) -> Result<Vec<u8>>;
}

pub struct Chrome {
    page: PageConfig,
    browser: BrowserConfig,
}

impl Chrome {
    pub fn new(page: PageConfig, browser: BrowserConfig) -> Chrome {
        Chrome { page, browser }
    }

    fn launch_options(&self) -> Result<LaunchOptions<'static>> {
        LaunchOptions::default_builder()
            .headless(self.browser.headless)
            .sandbox(self.browser.sandbox)
            .path(self.browser.executable_path())
            .idle_browser_timeout(Duration::from_secs(self.browser.idle_timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build browser launch options: {e}"))
    }

    fn print_options(&self) -> PrintToPdfOptions {
        let margin = self.page.margin_in();
        PrintToPdfOptions {
            landscape: Some(false),
            display_header_footer: Some(false),
            print_background: Some(self.page.print_background),
            scale: Some(1.0),
            paper_width: Some(self.page.width_in()),
            paper_height: Some(self.page.height_in()),
            margin_top: Some(margin),
            margin_bottom: Some(margin),
            margin_left: Some(margin),
            margin_right: Some(margin),
            prefer_css_page_size: Some(false),
            ..Default::default()
        }
    }
}

impl PdfEngine for Chrome {
    fn render(&self, html: &str) -> Result<Vec<u8>> {
        let mut page_file = tempfile::Builder::new()
            .prefix("html2pdf-")
            .suffix(".html")
            .tempfile()
            .with_context(|| "Failed to create temporary HTML file")?;
        page_file
            .write_all(html.as_bytes())
            .with_context(|| "Failed to write temporary HTML file")?;
        page_file
            .flush()
            .with_context(|| "Failed to write temporary HTML file")?;

        let browser = Browser::new(self.launch_options()?)
            .with_context(|| "Failed to launch headless browser")?;
        let tab = browser
            .new_tab()
            .with_context(|| "Failed to open browser tab")?;

        let url = file_url(page_file.path())?;
        debug!("Loading {url}");
        tab.navigate_to(url.as_str())
            .with_context(|| format!("Failed to navigate to {url}"))?;
        tab.wait_until_navigated()
            .with_context(|| "Failed to wait for the document to load")?;

        tab.print_to_pdf(Some(self.print_options()))
            .with_context(|| "Failed to print document to PDF")
    }
}

/// Percent-encoded `file://` URL for an absolute path.
fn file_url(path: &Path) -> Result<Url> {
    Url::from_file_path(path)
        .map_err(|()| anyhow!("Failed to build a file URL for {}", path.display()))
}
