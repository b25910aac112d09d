//! Footer framing — one regenerable status line at the end of every
//! published document.
//!
//! The footer is a single `#EXTM3U billed-msg="…"` line. Framing always
//! strips prior footers first, so a document never accumulates more than
//! one, and `strip_footer(frame(body, …)) == strip_footer(body)` holds for
//! any body without an embedded footer look-alike.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches any footer line, whatever its payload.
static FOOTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"#EXTM3U billed-msg="[^"]+""#).expect("valid footer regex"));

/// Footer line for `destination`.
///
/// The active payload embeds the destination's own name, so footers are
/// destination-specific and must be rebuilt per destination. The expired
/// payload is one fixed literal shared by every destination.
pub fn footer_for(destination: &str, expired: bool) -> String {
    if expired {
        return r#"#EXTM3U billed-msg="MASA BERLAKU HABIS| lynk.id/magelife😎""#.to_string();
    }
    format!(r#"#EXTM3U billed-msg="😎{destination}| lynk.id/magelife😎""#)
}

/// Remove every footer occurrence and trim surrounding whitespace.
///
/// Safe on text with zero footers; applying it twice equals applying it
/// once.
pub fn strip_footer(text: &str) -> String {
    FOOTER_RE.replace_all(text, "").trim().to_string()
}

/// Frame `body` with a fresh footer for `destination`.
pub fn frame(body: &str, destination: &str, expired: bool) -> String {
    let cleaned = strip_footer(body);
    format!("{cleaned}\n\n{}\n", footer_for(destination, expired))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "#EXTINF:-1,Channel One\nhttp://example.com/one.m3u8\n";

    #[test]
    fn active_footer_embeds_the_destination() {
        let footer = footer_for("DC05OKTOBER2025", false);
        assert!(footer.contains("DC05OKTOBER2025"));
        assert!(footer.starts_with("#EXTM3U billed-msg=\""));
        assert_eq!(footer.lines().count(), 1);
    }

    #[test]
    fn expired_footer_is_the_fixed_literal() {
        let footer = footer_for("DC05OKTOBER2025", true);
        assert!(footer.contains("MASA BERLAKU HABIS"));
        assert!(!footer.contains("DC05OKTOBER2025"));
    }

    #[test]
    fn strip_removes_the_footer_and_trims() {
        let framed = frame(BODY, "DC05OKTOBER2025", false);
        assert_eq!(strip_footer(&framed), BODY.trim());
    }

    #[test]
    fn strip_is_idempotent() {
        let framed = frame(BODY, "DC05OKTOBER2025", false);
        let once = strip_footer(&framed);
        assert_eq!(strip_footer(&once), once);
    }

    #[test]
    fn strip_removes_every_occurrence() {
        let doubled = format!(
            "{}\n{}\n{BODY}",
            footer_for("A", false),
            footer_for("B", false)
        );
        assert_eq!(strip_footer(&doubled), BODY.trim());
    }

    #[test]
    fn strip_on_footer_free_text_is_a_trim() {
        assert_eq!(strip_footer("  plain text  \n"), "plain text");
    }

    #[test]
    fn framing_twice_equals_framing_once() {
        let once = frame(BODY, "DC05OKTOBER2025", false);
        let twice = frame(&once, "DC05OKTOBER2025", false);
        assert_eq!(once, twice);
    }

    #[test]
    fn reframing_replaces_a_stale_footer() {
        let stale = frame(BODY, "DC01OKTOBER2025", false);
        let fresh = frame(&stale, "DC02OKTOBER2025", false);
        assert!(fresh.contains("DC02OKTOBER2025"));
        assert!(!fresh.contains("DC01OKTOBER2025"));
        assert_eq!(fresh.matches("#EXTM3U billed-msg=").count(), 1);
    }

    #[test]
    fn framed_document_ends_with_single_trailing_newline() {
        let framed = frame(BODY, "DC05OKTOBER2025", false);
        assert!(framed.ends_with("\"\n"));
        assert!(!framed.ends_with("\n\n"));
    }
}
