//! Viewer URL construction and browser launching
//!
//! The serialized document travels in the URL fragment, so nothing is sent
//! to the viewer's server; the page decodes it client-side.

use crate::core::error::{Result, VizError};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Default online Graphviz renderer
pub const DEFAULT_VIEWER_URL: &str = "https://dreampuf.github.io/GraphvizOnline/#";

/// Characters escaped in the fragment: everything but RFC 3986 unreserved characters and `/`
const FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode `document` and append it to `base`
///
/// A `#` is inserted when `base` does not already end with one. An empty
/// `base` falls back to [`DEFAULT_VIEWER_URL`].
#[must_use]
pub fn build_viewer_url(base: &str, document: &str) -> String {
    let base = if base.is_empty() { DEFAULT_VIEWER_URL } else { base };
    let encoded = utf8_percent_encode(document, FRAGMENT);
    if base.ends_with('#') {
        format!("{base}{encoded}")
    } else {
        format!("{base}#{encoded}")
    }
}

/// Something that can show a URL to the user
pub trait BrowserOpener {
    /// Open `url`
    ///
    /// # Errors
    /// Returns [`VizError::Browser`] if the URL could not be handed off
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs in the system default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(|e| VizError::Browser(e.to_string()))
    }
}

/// Does nothing; used when browser launching is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOpener;

impl BrowserOpener for NoopOpener {
    fn open(&self, _url: &str) -> Result<()> {
        Ok(())
    }
}
