//! Embedded lesson videos.

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// A video reference resolved to its embeddable player URL.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VideoEmbed {
    /// Reference as configured: a bare id or any share/watch URL ending in the id.
    pub raw: String,
    pub id: String,
    pub embed_url: String,
}

impl VideoEmbed {
    /// Resolve `url`. The id is its last `/` segment without the query string; if that
    /// comes out empty the raw reference is used as-is.
    pub fn from_url(url: &str) -> Self {
        let id = video_id(url);
        Self {
            raw: url.to_owned(),
            embed_url: format!("{EMBED_BASE}{id}?rel=0"),
            id: id.to_owned(),
        }
    }
}

fn video_id(url: &str) -> &str {
    let last = url.rsplit('/').next().unwrap_or(url);
    let id = last.split('?').next().unwrap_or(last);
    if id.is_empty() { url } else { id }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/video.rs"]
mod tests;
