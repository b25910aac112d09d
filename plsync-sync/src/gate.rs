//! Change suppression — skip writes whose content would not change.

use plsync_core::footer;

/// Whether `candidate_body` (pre-footer) differs from what the store
/// currently holds at a destination.
///
/// The stored body is stripped of its footer and both sides are trimmed
/// before the comparison, so footer-only differences never trigger a
/// write.
pub fn should_write(current_remote_body: &str, candidate_body: &str) -> bool {
    footer::strip_footer(current_remote_body).trim() != candidate_body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "#EXTINF:-1,Channel One\nhttp://example.com/one.m3u8";

    #[test]
    fn identical_content_is_suppressed() {
        let stored = footer::frame(BODY, "DC01OKTOBER2025", false);
        assert!(!should_write(&stored, BODY));
    }

    #[test]
    fn footer_only_difference_is_suppressed() {
        let stored = footer::frame(BODY, "DC01OKTOBER2025", false);
        // Same body, would get a different footer — still no write.
        assert!(!should_write(&stored, BODY));
        let stored_expired = footer::frame(BODY, "DC01OKTOBER2025", true);
        assert!(!should_write(&stored_expired, BODY));
    }

    #[test]
    fn content_difference_triggers_a_write() {
        let stored = footer::frame(BODY, "DC01OKTOBER2025", false);
        assert!(should_write(&stored, "#EXTINF:-1,Channel Two\nhttp://example.com/two.m3u8"));
    }

    #[test]
    fn whitespace_padding_does_not_trigger_a_write() {
        let stored = footer::frame(BODY, "DC01OKTOBER2025", false);
        let padded = format!("\n{BODY}\n\n");
        assert!(!should_write(&stored, &padded));
    }

    #[test]
    fn footerless_stored_body_compares_on_content() {
        assert!(!should_write(BODY, BODY));
        assert!(should_write("other", BODY));
    }
}
