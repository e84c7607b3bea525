//! Stylesheet and window icon compiled into the binary.

use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use tracing::error;

#[derive(RustEmbed)]
#[folder = "assets"]
struct Bundled;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BundledAsset {
    Stylesheet,
    Favicon,
}

impl BundledAsset {
    fn file_name(self) -> &'static str {
        match self {
            BundledAsset::Stylesheet => "main.css",
            BundledAsset::Favicon => "favicon.svg",
        }
    }
}

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| String::from_utf8_lossy(&bytes_of(BundledAsset::Stylesheet)).into_owned())
        .as_str()
}

/// The SVG icon as an inline `data:` URI, usable as a `link` href.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            let svg = String::from_utf8_lossy(&bytes_of(BundledAsset::Favicon)).into_owned();
            svg_data_uri(&svg)
        })
        .as_str()
}

fn bytes_of(asset: BundledAsset) -> Cow<'static, [u8]> {
    match Bundled::get(asset.file_name()) {
        Some(file) => file.data,
        None => {
            error!(file = asset.file_name(), "bundled asset missing from binary");
            Cow::Borrowed(&[])
        }
    }
}

/// SVG is text, so it only needs the characters that break a URI escaped.
fn svg_data_uri(svg: &str) -> String {
    let mut uri = String::from("data:image/svg+xml;utf8,");
    for ch in svg.trim().chars() {
        match ch {
            '%' => uri.push_str("%25"),
            '#' => uri.push_str("%23"),
            '<' => uri.push_str("%3C"),
            '>' => uri.push_str("%3E"),
            '"' => uri.push('\''),
            '\n' | '\r' | '\t' => uri.push(' '),
            other => uri.push(other),
        }
    }
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_data_uri_escapes_markup() {
        let uri = svg_data_uri("<svg fill=\"#fff\">\n</svg>");
        assert_eq!(uri, "data:image/svg+xml;utf8,%3Csvg fill='%23fff'%3E %3C/svg%3E");
    }

    #[test]
    fn test_bundled_assets_resolve() {
        assert!(main_css().contains(".fruit-row"));
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;utf8,%3Csvg"));
    }
}
