//! Product domain model

use base64::Engine;
use serde::{Deserialize, Serialize};

/// A watch in the catalog
///
/// Products are seeded once and never edited afterwards. `price` is in
/// whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// URL-safe slug, unique within the catalog
    pub id: String,
    pub title: String,
    pub price: i64,
    /// 0.0 to 5.0
    pub rating: f64,
    pub genre: String,
    #[serde(alias = "desc")]
    pub description: String,
    /// Self-contained `data:image/svg+xml` URI
    pub image: String,
}

/// Colors used to render a product's watch illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchPalette {
    pub base: &'static str,
    pub accent: &'static str,
    pub glow: &'static str,
}

impl WatchPalette {
    pub const fn new(base: &'static str, accent: &'static str, glow: &'static str) -> Self {
        Self { base, accent, glow }
    }
}

impl Default for WatchPalette {
    fn default() -> Self {
        Self::new("#7C5CFF", "#00E6FF", "#35F29B")
    }
}

const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Render the 800x600 watch illustration for a palette as a data URI
pub fn watch_image(palette: WatchPalette) -> String {
    let WatchPalette { base, accent, glow } = palette;
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600" viewBox="0 0 800 600">
  <defs>
    <radialGradient id="g" cx="30%" cy="20%" r="80%">
      <stop offset="0%" stop-color="{accent}" stop-opacity="0.25"/>
      <stop offset="60%" stop-color="{base}" stop-opacity="0.10"/>
      <stop offset="100%" stop-color="#050712" stop-opacity="1"/>
    </radialGradient>
    <linearGradient id="s" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="{base}" stop-opacity="0.9"/>
      <stop offset="100%" stop-color="{accent}" stop-opacity="0.7"/>
    </linearGradient>
    <filter id="glow" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="10" result="b"/>
      <feMerge>
        <feMergeNode in="b"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>
  </defs>
  <rect width="800" height="600" fill="url(#g)"/>
  <g transform="translate(0,10)">
    <rect x="340" y="40" width="120" height="130" rx="26" fill="#0a0f24" stroke="rgba(255,255,255,.16)"/>
    <rect x="340" y="430" width="120" height="130" rx="26" fill="#0a0f24" stroke="rgba(255,255,255,.16)"/>
    <rect x="360" y="75" width="80" height="55" rx="14" fill="url(#s)" opacity="0.55"/>
    <rect x="360" y="470" width="80" height="55" rx="14" fill="url(#s)" opacity="0.55"/>
    <circle cx="400" cy="300" r="150" fill="#071027" stroke="rgba(255,255,255,.18)" stroke-width="2"/>
    <circle cx="400" cy="300" r="120" fill="url(#s)" opacity="0.18" filter="url(#glow)"/>
    <circle cx="400" cy="300" r="92" fill="#060B18" stroke="rgba(255,255,255,.12)"/>
    <circle cx="400" cy="300" r="6" fill="{glow}" filter="url(#glow)"/>
    <g stroke="rgba(255,255,255,.45)" stroke-linecap="round">
      <line x1="400" y1="300" x2="400" y2="235" stroke-width="6"/>
      <line x1="400" y1="300" x2="460" y2="320" stroke-width="4"/>
      <line x1="400" y1="300" x2="385" y2="360" stroke-width="3"/>
    </g>
    <g fill="rgba(255,255,255,.30)">
      <circle cx="400" cy="214" r="4"/><circle cx="400" cy="386" r="4"/>
      <circle cx="314" cy="300" r="4"/><circle cx="486" cy="300" r="4"/>
    </g>
  </g>
</svg>"##
    );
    format!(
        "{}{}",
        DATA_URI_PREFIX,
        base64::engine::general_purpose::STANDARD.encode(svg)
    )
}

/// Decode the SVG markup back out of a product image URI
///
/// Returns `None` for URIs that are not base64 SVG data URIs.
pub fn decode_image(uri: &str) -> Option<Vec<u8>> {
    let payload = uri.strip_prefix(DATA_URI_PREFIX)?;
    base64::engine::general_purpose::STANDARD.decode(payload).ok()
}
