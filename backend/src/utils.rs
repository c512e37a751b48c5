use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `watch?v=<id>` and path-segment forms such as `youtu.be/<id>`.
    static ref WATCH_OR_PATH: Regex =
        Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("invalid watch pattern");
    static ref EMBED: Regex =
        Regex::new(r"embed/([0-9A-Za-z_-]{11})").expect("invalid embed pattern");
    static ref BARE: Regex =
        Regex::new(r"^([0-9A-Za-z_-]{11})$").expect("invalid bare-id pattern");
}

/// Extract the 11-character video ID from a YouTube URL or bare ID.
///
/// Recognizers are tried in order; the first capture wins. Unrecognized
/// input is returned unchanged and left for the upstream fetch to reject.
pub fn extract_video_id(input: &str) -> String {
    for pattern in [&*WATCH_OR_PATH, &*EMBED, &*BARE] {
        if let Some(captures) = pattern.captures(input) {
            if let Some(id) = captures.get(1) {
                return id.as_str().to_string();
            }
        }
    }
    input.to_string()
}

/// Format a caption offset as `MM:SS`, or `HH:MM:SS` past the hour mark.
pub fn format_time(seconds: f64) -> String {
    let total = seconds as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    if h > 0 {
        format!("{h:02}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_video_id_passes_through() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abcdefghijk"),
            "abcdefghijk"
        );
    }

    #[test]
    fn watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn short_url() {
        assert_eq!(extract_video_id("https://youtu.be/abcdefghijk"), "abcdefghijk");
    }

    #[test]
    fn embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/abcdefghijk"),
            "abcdefghijk"
        );
    }

    #[test]
    fn unrecognized_input_is_returned_unchanged() {
        assert_eq!(extract_video_id("definitely-not-an-id"), "definitely-not-an-id");
        assert_eq!(extract_video_id("abc123"), "abc123");
    }

    #[test]
    fn format_time_under_an_hour() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(59.0), "00:59");
        assert_eq!(format_time(60.0), "01:00");
        assert_eq!(format_time(3599.0), "59:59");
    }

    #[test]
    fn format_time_past_the_hour() {
        assert_eq!(format_time(3600.0), "01:00:00");
        assert_eq!(format_time(3661.0), "01:01:01");
    }

    #[test]
    fn format_time_truncates_fractional_seconds() {
        assert_eq!(format_time(2.7), "00:02");
    }
}
