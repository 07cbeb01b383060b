//! YouTube identifier extraction from pasted URLs or bare ids.

use regex::Regex;
use shared_types::VideoId;
use std::sync::OnceLock;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();
static BARE_ID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| {
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]{11,})")
            .expect("static url pattern")
    })
}

fn bare_id_pattern() -> &'static Regex {
    BARE_ID_PATTERN
        .get_or_init(|| Regex::new(r"^([a-zA-Z0-9_-]{11})$").expect("static id pattern"))
}

/// Match the url/embed form first, then a bare 11-character id.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    [url_pattern(), bare_id_pattern()]
        .into_iter()
        .find_map(|pattern| pattern.captures(input))
        .and_then(|captures| captures.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extracted(input: &str) -> Option<String> {
        extract_video_id(input).map(|id| id.0)
    }

    #[test]
    fn bare_id() {
        assert_eq!(extracted("dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(extracted("a-b_c-d_e-f").as_deref(), Some("a-b_c-d_e-f"));
    }

    #[test]
    fn watch_url_stops_at_query_separators() {
        let expected = Some("dQw4w9WgXcQ");
        assert_eq!(
            extracted("https://youtube.com/watch?v=dQw4w9WgXcQ&t=10").as_deref(),
            expected
        );
        assert_eq!(
            extracted("https://www.youtube.com/watch?v=dQw4w9WgXcQ#comments").as_deref(),
            expected
        );
        assert_eq!(
            extracted("youtube.com/watch?v=dQw4w9WgXcQ\nsecond line").as_deref(),
            expected
        );
    }

    #[test]
    fn short_and_embed_urls() {
        assert_eq!(
            extracted("https://youtu.be/dQw4w9WgXcQ?si=abc").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extracted("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn url_segment_may_exceed_eleven_chars() {
        assert_eq!(
            extracted("https://youtu.be/dQw4w9WgXcQextra").as_deref(),
            Some("dQw4w9WgXcQextra")
        );
    }

    #[test]
    fn rejects_non_matching_input() {
        assert_eq!(extracted("not a valid id"), None);
        assert_eq!(extracted(""), None);
        assert_eq!(extracted("dQw4w9WgXc"), None);
        assert_eq!(extracted("dQw4w9WgXcQQ"), None);
        assert_eq!(extracted(" dQw4w9WgXcQ"), None);
        assert_eq!(extracted("https://youtu.be/short"), None);
        assert_eq!(extracted("https://vimeo.com/watch?v=dQw4w9WgXcQ"), None);
    }
}
