//! oEmbed metadata lookups for the properties-panel media preview.
//!
//! Platform links get their title, author, and thumbnail from the platform's
//! oEmbed endpoint. Direct files and unrecognized URLs synthesize a preview
//! locally so the panel never blocks on the network for them.

use serde::Deserialize;
use std::time::Duration;

use crate::core::media::{self, MediaKind, MediaLink};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// What the properties panel shows under the media URL field.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPreview {
    pub kind: MediaKind,
    pub title: String,
    pub author: String,
    pub thumbnail_url: String,
}

impl MediaPreview {
    fn offline(link: &MediaLink) -> Self {
        let title = match link.kind {
            MediaKind::Audio | MediaKind::Video => file_label(&link.original_url),
            _ => link.original_url.clone(),
        };
        Self {
            kind: link.kind,
            title,
            author: String::new(),
            thumbnail_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct OembedInfo {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author_name: String,
    #[serde(default)]
    thumbnail_url: String,
}

/// Preview built from the URL alone, with no network involved. This is
/// what a failed platform lookup degrades to.
pub fn offline_preview(url: &str) -> MediaPreview {
    MediaPreview::offline(&media::classify(url))
}

/// Fetch preview metadata for a media URL.
///
/// Only YouTube, Vimeo, and SoundCloud links touch the network; everything
/// else resolves immediately from the URL itself.
pub async fn fetch_preview(url: &str) -> Result<MediaPreview, String> {
    let link = media::classify(url);
    let Some(endpoint) = oembed_endpoint(&link) else {
        return Ok(MediaPreview::offline(&link));
    };

    let client = reqwest::Client::new();
    let info = fetch_oembed(&client, &endpoint).await?;
    Ok(MediaPreview {
        kind: link.kind,
        title: info.title,
        author: info.author_name,
        thumbnail_url: info.thumbnail_url,
    })
}

fn oembed_endpoint(link: &MediaLink) -> Option<String> {
    let target = urlencoding::encode(&link.original_url);
    match link.kind {
        MediaKind::YouTube => Some(format!(
            "https://www.youtube.com/oembed?url={}&format=json",
            target
        )),
        MediaKind::Vimeo => Some(format!("https://vimeo.com/api/oembed.json?url={}", target)),
        MediaKind::SoundCloud => Some(format!(
            "https://soundcloud.com/oembed?url={}&format=json",
            target
        )),
        _ => None,
    }
}

async fn fetch_oembed(client: &reqwest::Client, endpoint: &str) -> Result<OembedInfo, String> {
    let response = client
        .get(endpoint)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .send()
        .await
        .map_err(|err| format!("Preview request failed: {}", err))?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("Preview request failed: {}", status));
    }
    response
        .json()
        .await
        .map_err(|err| format!("Could not parse preview response: {}", err))
}

/// Last path segment without query or fragment, for labeling direct files.
fn file_label(url: &str) -> String {
    let without_query = url.split(|c| c == '?' || c == '#').next().unwrap_or(url);
    without_query
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(without_query)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_audio_previews_offline() {
        let link = media::classify("https://cdn.example.com/sounds/track.mp3?cache=1");
        let preview = MediaPreview::offline(&link);
        assert_eq!(preview.kind, MediaKind::Audio);
        assert_eq!(preview.title, "track.mp3");
        assert!(preview.author.is_empty());
    }

    #[test]
    fn test_unknown_url_previews_as_itself() {
        let link = media::classify("https://example.com/page");
        let preview = MediaPreview::offline(&link);
        assert_eq!(preview.kind, MediaKind::Unknown);
        assert_eq!(preview.title, "https://example.com/page");
    }

    #[test]
    fn test_youtube_endpoint_encodes_target() {
        let link = media::classify("https://www.youtube.com/watch?v=abc123");
        let endpoint = oembed_endpoint(&link).unwrap();
        assert!(endpoint.starts_with("https://www.youtube.com/oembed?url="));
        assert!(endpoint.ends_with("&format=json"));
        assert!(endpoint.contains("%3A%2F%2F"));
    }

    #[test]
    fn test_vimeo_endpoint() {
        let link = media::classify("https://vimeo.com/76979871");
        let endpoint = oembed_endpoint(&link).unwrap();
        assert!(endpoint.starts_with("https://vimeo.com/api/oembed.json?url="));
    }

    #[test]
    fn test_direct_files_have_no_endpoint() {
        let link = media::classify("https://cdn.example.com/clip.mp4");
        assert!(oembed_endpoint(&link).is_none());
    }

    #[test]
    fn test_file_label_strips_query_and_path() {
        assert_eq!(file_label("https://a.io/x/y/song.flac#t=10"), "song.flac");
        assert_eq!(file_label("song.wav"), "song.wav");
    }
}
