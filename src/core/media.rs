//! Media link classification.
//!
//! Turns whatever the user pastes into a marker's media field into a
//! deterministic [`MediaLink`]: platform links become embed URLs, direct
//! files become player sources, and anything unrecognized degrades to a
//! plain external link. Never fails; malformed input classifies as
//! [`MediaKind::Unknown`].

use http::Uri;
use percent_encoding::percent_decode_str;

/// Audio file extensions recognized as directly playable.
const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "ogg", "m4a", "aac", "flac"];
/// Video file extensions recognized as directly playable.
const VIDEO_EXTENSIONS: [&str; 7] = ["mp4", "webm", "ogg", "mov", "avi", "mkv", "m4v"];

/// What a media URL resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    YouTube,
    Vimeo,
    SoundCloud,
    /// Direct audio file
    Audio,
    /// Direct video file
    Video,
    /// Not recognized; rendered as an external link
    Unknown,
}

impl MediaKind {
    /// Short label for the properties-panel preview.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::YouTube => "YouTube",
            MediaKind::Vimeo => "Vimeo",
            MediaKind::SoundCloud => "SoundCloud",
            MediaKind::Audio => "Audio file",
            MediaKind::Video => "Video file",
            MediaKind::Unknown => "Link",
        }
    }
}

/// A classified media link, carrying everything previews and exports need.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaLink {
    pub kind: MediaKind,
    /// The cleaned-up URL the user meant (tracking parameters stripped).
    pub original_url: String,
    /// Iframe or player source URL, when the link can be embedded.
    pub embed_url: Option<String>,
    /// Set for links that are known not to embed (e.g. SoundCloud share
    /// links); these render as external links instead of iframes.
    pub external_only: bool,
}

impl MediaLink {
    fn unknown(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Unknown,
            original_url: url.into(),
            embed_url: None,
            external_only: false,
        }
    }

    /// Self-contained HTML fragment playing or linking this media.
    ///
    /// This is what exported documents carry in their marker payloads, so
    /// viewers never re-derive platform rules.
    pub fn embed_html(&self) -> String {
        if self.external_only {
            return format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">Listen on {}</a>",
                escape_attr(&self.original_url),
                self.kind.label()
            );
        }
        match (self.kind, &self.embed_url) {
            (MediaKind::YouTube | MediaKind::Vimeo, Some(embed)) => format!(
                "<iframe src=\"{}\" frameborder=\"0\" allow=\"autoplay; encrypted-media; picture-in-picture\" allowfullscreen></iframe>",
                escape_attr(embed)
            ),
            (MediaKind::SoundCloud, Some(embed)) => format!(
                "<iframe src=\"{}\" frameborder=\"no\" scrolling=\"no\" allow=\"autoplay\"></iframe>",
                escape_attr(embed)
            ),
            (MediaKind::Audio, Some(src)) => format!(
                "<audio controls><source src=\"{}\">Your browser does not support audio.</audio>",
                escape_attr(src)
            ),
            (MediaKind::Video, Some(src)) => format!(
                "<video controls><source src=\"{}\">Your browser does not support video.</video>",
                escape_attr(src)
            ),
            _ => {
                if self.original_url.is_empty() {
                    String::new()
                } else {
                    format!(
                        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">Open media</a>",
                        escape_attr(&self.original_url)
                    )
                }
            }
        }
    }
}

/// Classify a media URL. Total: any input yields a usable [`MediaLink`].
pub fn classify(url: &str) -> MediaLink {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return MediaLink::unknown("");
    }

    let normalized = strip_tracking_params(trimmed);
    let Some((uri, host)) = parse_host(&normalized) else {
        return MediaLink::unknown(normalized);
    };

    // platform rules run before extension rules, so a track page ending in
    // ".mp3" still classifies by its platform
    if host.contains("soundcloud.com") {
        return classify_soundcloud(&normalized, &uri, &host);
    }
    if host.contains("youtube.com") || host.contains("youtu.be") {
        return classify_youtube(&normalized, &uri, &host);
    }
    if host.contains("vimeo.com") {
        return classify_vimeo(&normalized, &uri);
    }

    let extension = path_extension(uri.path());
    if AUDIO_EXTENSIONS.contains(&extension.as_str()) {
        return MediaLink {
            kind: MediaKind::Audio,
            embed_url: Some(normalized.clone()),
            original_url: normalized,
            external_only: false,
        };
    }
    if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        return MediaLink {
            kind: MediaKind::Video,
            embed_url: Some(normalized.clone()),
            original_url: normalized,
            external_only: false,
        };
    }

    MediaLink::unknown(normalized)
}

/// Escape text for use inside a double-quoted HTML attribute.
pub fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for use in an HTML element body.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Whether a string can serve as a link target. A scheme is implied the
/// same way classification implies one, so `example.com/page` passes;
/// scheme-less single words do not.
pub fn is_plausible_url(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }
    let Some((_, host)) = parse_host(trimmed) else {
        return false;
    };
    trimmed.contains("://") || host.contains('.')
}

fn classify_soundcloud(normalized: &str, uri: &Uri, host: &str) -> MediaLink {
    // share links redirect through an app gate and refuse to embed
    if host == "on.soundcloud.com" {
        return MediaLink {
            kind: MediaKind::SoundCloud,
            original_url: normalized.to_string(),
            embed_url: None,
            external_only: true,
        };
    }

    // an already-built widget URL carries the track URL as its `url` param
    if host == "w.soundcloud.com" {
        let inner = query_value(uri, "url")
            .and_then(|value| percent_decode_str(&value).decode_utf8().ok().map(String::from));
        return MediaLink {
            kind: MediaKind::SoundCloud,
            original_url: inner.unwrap_or_else(|| normalized.to_string()),
            embed_url: Some(normalized.to_string()),
            external_only: false,
        };
    }

    let widget = format!(
        "https://w.soundcloud.com/player/?url={}&auto_play=false&visual=true",
        urlencoding::encode(normalized)
    );
    MediaLink {
        kind: MediaKind::SoundCloud,
        original_url: normalized.to_string(),
        embed_url: Some(widget),
        external_only: false,
    }
}

fn classify_youtube(normalized: &str, uri: &Uri, host: &str) -> MediaLink {
    let path = uri.path();
    let id = if host.contains("youtu.be") {
        first_path_segment(path).and_then(clean_video_id)
    } else if let Some(rest) = path.strip_prefix("/embed/") {
        clean_video_id(rest)
    } else if let Some(rest) = path.strip_prefix("/shorts/") {
        clean_video_id(rest)
    } else if let Some(rest) = path.strip_prefix("/live/") {
        clean_video_id(rest)
    } else {
        query_value(uri, "v").as_deref().and_then(clean_video_id)
    };

    MediaLink {
        kind: MediaKind::YouTube,
        original_url: normalized.to_string(),
        embed_url: id.map(|id| format!("https://www.youtube.com/embed/{id}")),
        external_only: false,
    }
}

fn classify_vimeo(normalized: &str, uri: &Uri) -> MediaLink {
    let id = uri
        .path()
        .split('/')
        .find(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string);

    MediaLink {
        kind: MediaKind::Vimeo,
        original_url: normalized.to_string(),
        embed_url: id.map(|id| format!("https://player.vimeo.com/video/{id}")),
        external_only: false,
    }
}

/// Drop `si`, `utm_*` and `feature=share` query parameters; everything else
/// (including the fragment) passes through untouched.
fn strip_tracking_params(url: &str) -> String {
    let Some((base, rest)) = url.split_once('?') else {
        return url.to_string();
    };
    let (query, fragment) = match rest.split_once('#') {
        Some((query, fragment)) => (query, Some(fragment)),
        None => (rest, None),
    };

    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => (*pair, ""),
            };
            let key = key.to_ascii_lowercase();
            !(key == "si" || key.starts_with("utm_") || (key == "feature" && value == "share"))
        })
        .collect();

    let mut result = base.to_string();
    if !kept.is_empty() {
        result.push('?');
        result.push_str(&kept.join("&"));
    }
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    result
}

/// Parse the URL and pull out a lowercase host. Inputs without a scheme get
/// an implied `https://` so pasted bare domains still classify.
fn parse_host(url: &str) -> Option<(Uri, String)> {
    let candidate = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };
    let uri: Uri = candidate.parse().ok()?;
    let host = uri.host()?.to_ascii_lowercase();
    Some((uri, host))
}

fn query_value(uri: &Uri, name: &str) -> Option<String> {
    uri.query()?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}

fn first_path_segment(path: &str) -> Option<&str> {
    path.trim_start_matches('/').split('/').next().filter(|s| !s.is_empty())
}

/// Video ids stop at the first character outside the id alphabet, which
/// also sheds trailing slashes and stray punctuation.
fn clean_video_id(raw: &str) -> Option<String> {
    let id: String = raw
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

fn path_extension(path: &str) -> String {
    path.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_url() {
        let link = classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(link.kind, MediaKind::YouTube);
        assert_eq!(
            link.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert!(!link.external_only);
    }

    #[test]
    fn test_youtube_short_link() {
        let link = classify("https://youtu.be/abc123");
        assert_eq!(link.kind, MediaKind::YouTube);
        assert_eq!(
            link.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn test_youtube_shorts_and_embed_paths() {
        let shorts = classify("https://www.youtube.com/shorts/xyz789");
        assert_eq!(
            shorts.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/xyz789")
        );

        let embed = classify("https://www.youtube.com/embed/xyz789?start=30");
        assert_eq!(
            embed.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/xyz789")
        );
    }

    #[test]
    fn test_youtube_without_video_id_has_no_embed() {
        let link = classify("https://www.youtube.com/@somechannel");
        assert_eq!(link.kind, MediaKind::YouTube);
        assert_eq!(link.embed_url, None);
    }

    #[test]
    fn test_tracking_params_are_stripped() {
        let link = classify("https://youtu.be/abc123?si=tracking_blob&feature=share");
        assert_eq!(link.original_url, "https://youtu.be/abc123");

        let utm = classify("https://vimeo.com/76979871?utm_source=mail&utm_campaign=x");
        assert_eq!(utm.original_url, "https://vimeo.com/76979871");
    }

    #[test]
    fn test_feature_param_survives_when_not_share() {
        let link = classify("https://www.youtube.com/watch?v=abc123&feature=related");
        assert_eq!(
            link.original_url,
            "https://www.youtube.com/watch?v=abc123&feature=related"
        );
        assert_eq!(
            link.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn test_vimeo_numeric_id() {
        let link = classify("https://vimeo.com/76979871");
        assert_eq!(link.kind, MediaKind::Vimeo);
        assert_eq!(
            link.embed_url.as_deref(),
            Some("https://player.vimeo.com/video/76979871")
        );
    }

    #[test]
    fn test_vimeo_channel_path_still_finds_id() {
        let link = classify("https://vimeo.com/channels/staffpicks/76979871");
        assert_eq!(
            link.embed_url.as_deref(),
            Some("https://player.vimeo.com/video/76979871")
        );
    }

    #[test]
    fn test_soundcloud_track_gets_widget_url() {
        let link = classify("https://soundcloud.com/artist/some-track");
        assert_eq!(link.kind, MediaKind::SoundCloud);
        let embed = link.embed_url.unwrap();
        assert!(embed.starts_with("https://w.soundcloud.com/player/?url="));
        assert!(embed.contains("soundcloud.com%2Fartist%2Fsome-track"));
        assert!(!link.external_only);
    }

    #[test]
    fn test_soundcloud_share_link_is_external_only() {
        let link = classify("https://on.soundcloud.com/AbCdEf");
        assert_eq!(link.kind, MediaKind::SoundCloud);
        assert_eq!(link.embed_url, None);
        assert!(link.external_only);

        let html = link.embed_html();
        assert!(html.starts_with("<a href="));
        assert!(html.contains("on.soundcloud.com/AbCdEf"));
    }

    #[test]
    fn test_soundcloud_widget_url_recovers_track() {
        let widget = "https://w.soundcloud.com/player/?url=https%3A%2F%2Fsoundcloud.com%2Fartist%2Ftrack&auto_play=false";
        let link = classify(widget);
        assert_eq!(link.kind, MediaKind::SoundCloud);
        assert_eq!(link.original_url, "https://soundcloud.com/artist/track");
        assert_eq!(link.embed_url.as_deref(), Some(widget));
    }

    #[test]
    fn test_audio_extensions() {
        for ext in AUDIO_EXTENSIONS {
            let url = format!("https://cdn.example.com/sounds/clip.{ext}");
            let link = classify(&url);
            assert_eq!(link.kind, MediaKind::Audio, "extension {ext}");
            assert_eq!(link.embed_url.as_deref(), Some(url.as_str()));
        }
    }

    #[test]
    fn test_video_extensions_with_ogg_going_to_audio() {
        for ext in ["mp4", "webm", "mov", "avi", "mkv", "m4v"] {
            let url = format!("https://cdn.example.com/clips/take.{ext}");
            assert_eq!(classify(&url).kind, MediaKind::Video, "extension {ext}");
        }
        // ogg sits in both tables; the audio check runs first
        assert_eq!(classify("https://cdn.example.com/a.ogg").kind, MediaKind::Audio);
    }

    #[test]
    fn test_extension_is_case_insensitive_and_ignores_query() {
        assert_eq!(classify("https://example.com/A.MP3").kind, MediaKind::Audio);
        assert_eq!(
            classify("https://example.com/clip.mp4?token=abc123").kind,
            MediaKind::Video
        );
    }

    #[test]
    fn test_scheme_less_input_still_classifies() {
        let link = classify("youtube.com/watch?v=abc123");
        assert_eq!(link.kind, MediaKind::YouTube);
        assert_eq!(
            link.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn test_malformed_input_is_unknown_not_a_panic() {
        for input in ["", "   ", "not a url at all", "http://", "ht!tp://bad^host/x"] {
            let link = classify(input);
            assert_eq!(link.kind, MediaKind::Unknown, "input {input:?}");
            assert_eq!(link.embed_url, None);
        }
    }

    #[test]
    fn test_unrecognized_url_is_unknown() {
        let link = classify("https://example.com/article/360-photography");
        assert_eq!(link.kind, MediaKind::Unknown);
        let html = link.embed_html();
        assert!(html.contains("Open media"));
        assert!(html.contains("https://example.com/article/360-photography"));
    }

    #[test]
    fn test_embed_html_for_players() {
        let audio = classify("https://example.com/song.mp3").embed_html();
        assert!(audio.starts_with("<audio controls>"));
        assert!(audio.contains("song.mp3"));

        let video = classify("https://example.com/clip.webm").embed_html();
        assert!(video.starts_with("<video controls>"));

        let youtube = classify("https://youtu.be/abc123").embed_html();
        assert!(youtube.starts_with("<iframe"));
        assert!(youtube.contains("allowfullscreen"));
    }

    #[test]
    fn test_embed_html_escapes_attribute_text() {
        let link = MediaLink {
            kind: MediaKind::Unknown,
            original_url: "https://example.com/?a=1&b=\"2\"".to_string(),
            embed_url: None,
            external_only: false,
        };
        let html = link.embed_html();
        assert!(html.contains("a=1&amp;b=&quot;2&quot;"));
        assert!(!html.contains("b=\"2\""));
    }

    #[test]
    fn test_plausible_url_accepts_common_link_shapes() {
        assert!(is_plausible_url("https://example.com/page"));
        assert!(is_plausible_url("example.com/page?tab=1"));
        assert!(is_plausible_url("http://localhost:8080/demo"));
        assert!(is_plausible_url("  https://example.com  "));
    }

    #[test]
    fn test_plausible_url_rejects_non_links() {
        assert!(!is_plausible_url(""));
        assert!(!is_plausible_url("   "));
        assert!(!is_plausible_url("hello"));
        assert!(!is_plausible_url("not a url"));
    }
}
