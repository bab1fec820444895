//! Tag-atomic tokenization of safe markup.
//!
//! Slicing markup by character count can cut an HTML tag in half and hand
//! broken markup to the sink for a frame or more. The reveal therefore
//! advances one *token* at a time: a token is either one complete `<...>`
//! tag or one literal character.

/// Split markup into reveal tokens.
///
/// At each position the scan captures a full `<...>` run, or exactly one
/// character. A `<` with no closing `>` captures the remainder of the
/// string as a single token.
///
/// Invariant: concatenating the returned tokens in order reproduces
/// `markup` exactly, and no token boundary falls inside a tag.
pub fn tokenize(markup: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(c) = markup[i..].chars().next() {
        if c == '<' {
            match markup[i..].find('>') {
                Some(rel) => {
                    let end = i + rel + 1;
                    tokens.push(&markup[i..end]);
                    i = end;
                }
                None => {
                    // Unterminated tag: keep the remainder whole so the
                    // concatenation invariant holds.
                    tokens.push(&markup[i..]);
                    break;
                }
            }
        } else {
            let end = i + c.len_utf8();
            tokens.push(&markup[i..end]);
            i = end;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_token_per_char() {
        assert_eq!(tokenize("abc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tags_are_single_tokens() {
        assert_eq!(
            tokenize("a<br>b"),
            vec!["a", "<br>", "b"]
        );
        assert_eq!(
            tokenize(r#"<a href="https://e.com" target="_blank">x</a>"#),
            vec![r#"<a href="https://e.com" target="_blank">"#, "x", "</a>"]
        );
    }

    #[test]
    fn test_multibyte_chars_are_single_tokens() {
        assert_eq!(tokenize("•⚠️"), vec!["•", "⚠", "\u{fe0f}"]);
    }

    #[test]
    fn test_unterminated_tag_is_one_trailing_token() {
        assert_eq!(tokenize("ab<br"), vec!["a", "b", "<br"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let cases = [
            "",
            "plain",
            "a<br>b",
            "<b><i>x</i></b>",
            "<<b>>",
            "a<b",
            "<",
            ">",
            "tag<br>•&bull;<a href=\"x\">y</a>",
            "entity &amp; text",
            "ütf-8 ⚡<br>",
        ];
        for case in cases {
            assert_eq!(tokenize(case).concat(), case, "case: {case}");
        }
        // Generated combinations of the interesting fragments
        let fragments = ["<br>", "a", "•", "<", ">", "&amp;", "</a>", "\n"];
        for a in fragments {
            for b in fragments {
                for c in fragments {
                    let case = format!("{a}{b}{c}");
                    assert_eq!(tokenize(&case).concat(), case, "case: {case}");
                }
            }
        }
    }

    #[test]
    fn test_every_tag_lands_in_exactly_one_token() {
        // No token is a strict non-empty prefix of a tag opener: a token
        // starting with '<' either ends with '>' or runs to end of input.
        let cases = ["a<br>b", "<<b>>", "x<b><i>y", "a<b", "<a href=\"u\">l</a>"];
        for case in cases {
            let tokens = tokenize(case);
            for (idx, tok) in tokens.iter().enumerate() {
                if tok.starts_with('<') && tok.len() > 1 {
                    let terminated = tok.ends_with('>');
                    let is_last = idx == tokens.len() - 1;
                    assert!(terminated || is_last, "split tag in {case:?}: {tok:?}");
                }
            }
        }
    }

    #[test]
    fn test_nested_looking_tags() {
        // "<<b>>" -- the first '<' swallows through the first '>', the
        // trailing '>' is a literal character token.
        assert_eq!(tokenize("<<b>>"), vec!["<<b>", ">"]);
    }
}
