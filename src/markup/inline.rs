//! Inline content parsing for a single line of tip text.
//!
//! Two passes: an optional bold label (text up to and including an early
//! colon), then a left-to-right scan for `[label](url)` links.

/// A colon at or beyond this char column is not treated as a label separator.
pub const LABEL_COLUMN_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSegment {
    PlainText(String),
    Link { label: String, url: String },
    BoldLabel(String),
}

impl InlineSegment {
    /// Text as it appears on screen (links show their label)
    pub fn display_text(&self) -> &str {
        match self {
            InlineSegment::PlainText(text) | InlineSegment::BoldLabel(text) => text,
            InlineSegment::Link { label, .. } => label,
        }
    }
}

/// Parse one line's text into inline segments.
pub fn parse_inline(text: &str) -> Vec<InlineSegment> {
    match split_label(text) {
        Some((label, rest)) => {
            let mut segments = vec![InlineSegment::BoldLabel(label.to_string())];
            segments.extend(parse_links(rest));
            segments
        }
        None => parse_links(text),
    }
}

/// Split at the leftmost colon when it sits before `LABEL_COLUMN_LIMIT`.
/// The label keeps the colon.
fn split_label(text: &str) -> Option<(&str, &str)> {
    let (column, (byte_idx, _)) = text
        .char_indices()
        .enumerate()
        .find(|(_, (_, ch))| *ch == ':')?;

    if column < LABEL_COLUMN_LIMIT {
        Some(text.split_at(byte_idx + 1))
    } else {
        None
    }
}

struct LinkMatch<'a> {
    label: &'a str,
    url: &'a str,
    end: usize,
}

/// Scan `text` for `[label](url)` links, left to right, non-overlapping.
///
/// Anything that does not form a complete link stays literal plain text.
/// Empty text yields no segments.
pub fn parse_links(text: &str) -> Vec<InlineSegment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find('[') {
        let open = cursor + offset;
        match match_link(text, open) {
            Some(link) => {
                if open > plain_start {
                    segments.push(InlineSegment::PlainText(text[plain_start..open].to_string()));
                }
                segments.push(InlineSegment::Link {
                    label: link.label.to_string(),
                    url: link.url.to_string(),
                });
                cursor = link.end;
                plain_start = link.end;
            }
            None => cursor = open + 1,
        }
    }

    if plain_start < text.len() {
        segments.push(InlineSegment::PlainText(text[plain_start..].to_string()));
    }

    segments
}

/// Try to match a link whose `[` is at byte offset `open`.
/// Label is the run of non-`]` chars, url the run of non-`)` chars; both non-empty.
fn match_link(text: &str, open: usize) -> Option<LinkMatch<'_>> {
    let label_start = open + 1;
    let label_len = text[label_start..].find(']')?;
    if label_len == 0 {
        return None;
    }
    let label = &text[label_start..label_start + label_len];

    let paren = label_start + label_len + 1;
    if !text[paren..].starts_with('(') {
        return None;
    }

    let url_start = paren + 1;
    let url_len = text[url_start..].find(')')?;
    if url_len == 0 {
        return None;
    }

    Some(LinkMatch {
        label,
        url: &text[url_start..url_start + url_len],
        end: url_start + url_len + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> InlineSegment {
        InlineSegment::PlainText(text.to_string())
    }

    fn link(label: &str, url: &str) -> InlineSegment {
        InlineSegment::Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    fn bold(text: &str) -> InlineSegment {
        InlineSegment::BoldLabel(text.to_string())
    }

    #[test]
    fn test_two_links_make_five_segments() {
        let text = "Use tools like [Anki](https://apps.ankiweb.net/) or [Quizlet](https://quizlet.com/).";
        assert_eq!(
            parse_links(text),
            vec![
                plain("Use tools like "),
                link("Anki", "https://apps.ankiweb.net/"),
                plain(" or "),
                link("Quizlet", "https://quizlet.com/"),
                plain("."),
            ]
        );
    }

    #[test]
    fn test_no_links_is_single_plain_segment() {
        assert_eq!(parse_links("just words"), vec![plain("just words")]);
        assert!(parse_links("").is_empty());
    }

    #[test]
    fn test_link_at_edges() {
        assert_eq!(parse_links("[a](b)"), vec![link("a", "b")]);
        assert_eq!(
            parse_links("[a](b)[c](d)"),
            vec![link("a", "b"), link("c", "d")]
        );
    }

    #[test]
    fn test_malformed_links_stay_literal() {
        for text in [
            "[unclosed label",
            "[label] (space before paren)",
            "[label](unclosed url",
            "[](empty-label)",
            "[empty-url]()",
            "no open ](x)",
            "[",
        ] {
            assert_eq!(parse_links(text), vec![plain(text)], "input: {text}");
        }
    }

    #[test]
    fn test_malformed_prefix_then_valid_link() {
        assert_eq!(
            parse_links("see [broken and [ok](u) end"),
            vec![plain("see "), link("broken and [ok", "u"), plain(" end")]
        );
        assert_eq!(
            parse_links("[x] then [y](z)"),
            vec![plain("[x] then "), link("y", "z")]
        );
    }

    #[test]
    fn test_url_stops_at_first_close_paren() {
        assert_eq!(
            parse_links("[wiki](https://en.wikipedia.org/wiki/Foo_(bar))"),
            vec![link("wiki", "https://en.wikipedia.org/wiki/Foo_(bar"), plain(")")]
        );
    }

    #[test]
    fn test_label_emphasis_keeps_colon() {
        assert_eq!(
            parse_inline("Review 1: 1 day after learning."),
            vec![bold("Review 1:"), plain(" 1 day after learning.")]
        );
    }

    #[test]
    fn test_label_then_links() {
        assert_eq!(
            parse_inline("Flashcards: Use [Anki](https://apps.ankiweb.net/)."),
            vec![
                bold("Flashcards:"),
                plain(" Use "),
                link("Anki", "https://apps.ankiweb.net/"),
                plain("."),
            ]
        );
    }

    #[test]
    fn test_label_colon_column_limit() {
        let at_29 = format!("{}: rest", "a".repeat(29));
        assert_eq!(parse_inline(&at_29)[0], bold(&format!("{}:", "a".repeat(29))));

        let at_30 = format!("{}: rest", "a".repeat(30));
        assert_eq!(parse_inline(&at_30), vec![plain(&at_30)]);
    }

    #[test]
    fn test_label_column_counts_chars_not_bytes() {
        // 29 two-byte chars put the colon at byte 58 but char column 29
        let text = format!("{}: x", "é".repeat(29));
        assert!(matches!(parse_inline(&text)[0], InlineSegment::BoldLabel(_)));
    }

    #[test]
    fn test_only_first_colon_is_bolded() {
        assert_eq!(
            parse_inline("Note: time: 5pm"),
            vec![bold("Note:"), plain(" time: 5pm")]
        );
    }

    #[test]
    fn test_colon_inside_url_is_a_label_when_early() {
        // The label rule runs before link parsing, so an early colon wins
        assert_eq!(
            parse_inline("[x](https://a.b)"),
            vec![bold("[x](https:"), plain("//a.b)")]
        );
    }

    #[test]
    fn test_label_only_line() {
        assert_eq!(parse_inline("Steps:"), vec![bold("Steps:")]);
    }

    #[test]
    fn test_display_text_shows_link_labels() {
        let segments = parse_inline("Tip: try [Anki](https://apps.ankiweb.net/) daily");
        let text: String = segments.iter().map(InlineSegment::display_text).collect();
        assert_eq!(text, "Tip: try Anki daily");
    }
}
