//! Response formatter: untrusted reply text in, safe markup out.
//!
//! The step order is load-bearing. Escaping runs first, so every `&`, `<`,
//! and `>` that came from the model is neutralized before any structural
//! markup is introduced; the only unescaped tags in the output are the ones
//! this module generates itself. Reversing the order would let a reply like
//! `[x](https://e.com/"><script>)` smuggle live markup into the page.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Substituted for an absent or empty reply before formatting.
pub const FALLBACK_TEXT: &str = "No response from AI.";

/// Markdown-style links over already-escaped text: `[label](http(s)://...)`.
/// The URL may not contain `)` or whitespace, so an unterminated bracket
/// never matches and stays literal.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").expect("link pattern is valid")
});

/// HTML markup in which everything that came from untrusted input is escaped.
///
/// The only constructors are [`format_reply`] and [`SafeMarkup::from_trusted`];
/// downstream code (the typing reveal, sinks) can rely on tags in this string
/// being formatter-generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeMarkup(String);

impl SafeMarkup {
    /// Wrap markup the caller already knows is safe.
    ///
    /// For callers that bypass the formatter deliberately, such as fixed
    /// warning strings and tests.
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert one raw reply into safe, renderable markup.
///
/// Steps, in fixed order:
/// 1. absent/empty reply -> [`FALLBACK_TEXT`]
/// 2. escape `&`, `<`, `>`
/// 3. markdown links -> `<a href="..." target="_blank">...</a>`
/// 4. `\n` -> `<br>`
/// 5. `•` -> `&bull;`
pub fn format_reply(raw: Option<&str>) -> SafeMarkup {
    let raw = match raw {
        Some(text) if !text.is_empty() => text,
        _ => FALLBACK_TEXT,
    };

    let escaped = escape_html(raw);
    let linked = LINK_RE
        .replace_all(&escaped, r#"<a href="$2" target="_blank">$1</a>"#)
        .into_owned();

    SafeMarkup(linked.replace('\n', "<br>").replace('•', "&bull;"))
}

/// Escape the characters that can open markup: `&`, `<`, `>`.
///
/// Quotes are left alone; formatter output never places untrusted text in
/// an attribute it did not build itself.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_angle_brackets_and_ampersand() {
        let markup = format_reply(Some("<script>alert(1)</script> & co"));
        assert_eq!(
            markup.as_str(),
            "&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"
        );
    }

    #[test]
    fn test_ampersand_escaped_before_brackets() {
        // "&lt;" in the input must not survive as a live entity for "<"
        let markup = format_reply(Some("&lt;"));
        assert_eq!(markup.as_str(), "&amp;lt;");
    }

    #[test]
    fn test_markdown_link_conversion() {
        let markup = format_reply(Some("see [docs](https://example.com) here"));
        assert_eq!(
            markup.as_str(),
            r#"see <a href="https://example.com" target="_blank">docs</a> here"#
        );
    }

    #[test]
    fn test_link_label_with_escaped_entity() {
        let markup = format_reply(Some("[a & b](http://example.com/x)"));
        assert_eq!(
            markup.as_str(),
            r#"<a href="http://example.com/x" target="_blank">a &amp; b</a>"#
        );
    }

    #[test]
    fn test_unterminated_link_stays_literal() {
        let markup = format_reply(Some("[docs](https://example.com"));
        assert_eq!(markup.as_str(), "[docs](https://example.com");
    }

    #[test]
    fn test_non_http_scheme_does_not_match() {
        let markup = format_reply(Some("[x](javascript:alert(1))"));
        assert!(!markup.as_str().contains("<a "));
    }

    #[test]
    fn test_newlines_and_bullets() {
        let markup = format_reply(Some("a\n•b"));
        assert_eq!(markup.as_str(), "a<br>&bull;b");
    }

    #[test]
    fn test_fallback_on_empty_and_absent() {
        assert_eq!(format_reply(Some("")).as_str(), FALLBACK_TEXT);
        assert_eq!(format_reply(None).as_str(), FALLBACK_TEXT);
    }

    #[test]
    fn test_quotes_pass_through_unescaped() {
        let markup = format_reply(Some(r#"say "hi" to 'them'"#));
        assert_eq!(markup.as_str(), r#"say "hi" to 'them'"#);
    }

    #[test]
    fn test_no_untrusted_bracket_survives_unescaped() {
        // Mixed input exercising every step at once
        let markup =
            format_reply(Some("<b>&\n[go](https://e.com/a?x=1&y=2)•[](https://e.com)"));
        // Every '<' or '>' in the output belongs to formatter-made tags
        let stripped = markup
            .as_str()
            .replace("<a href=", "")
            .replace(" target=\"_blank\">", "")
            .replace("</a>", "")
            .replace("<br>", "");
        assert!(!stripped.contains('<'));
        // The empty-label link must not have matched
        assert!(markup.as_str().contains("[](https://e.com)"));
    }

    #[test]
    fn test_escape_count_never_decreases() {
        // Every literal '<', '>', '&' in the input shows up as an entity
        for input in ["<", ">", "&", "<<>>", "a<b>c&d", "&&&", "<>&<>&"] {
            let markup = format_reply(Some(input));
            let lt = markup.as_str().matches("&lt;").count();
            let gt = markup.as_str().matches("&gt;").count();
            let amp = markup.as_str().matches("&amp;").count();
            assert_eq!(lt, input.matches('<').count(), "input: {input}");
            assert_eq!(gt, input.matches('>').count(), "input: {input}");
            assert_eq!(amp, input.matches('&').count(), "input: {input}");
        }
    }
}
