//! Plain text output for non-interactive use (`--print`, `--list`)

use crate::content::{ContentLibrary, Tip};
use crate::markup::{InlineSegment, RenderedBlock};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Format a tip as plain text. Links become `label[n]` with the urls listed at the end.
pub fn format_tip(tip: &Tip) -> String {
    let blocks = tip.render();
    let mut out = String::new();
    let mut urls: Vec<&str> = Vec::new();

    // Drop the leading and trailing blank lines content files tend to have
    let start = blocks.iter().position(|b| !b.is_blank()).unwrap_or(blocks.len());
    let end = blocks.iter().rposition(|b| !b.is_blank()).map_or(start, |i| i + 1);

    for block in &blocks[start..end] {
        match block {
            RenderedBlock::Blank => {}
            RenderedBlock::Heading(text) => {
                let _ = write!(out, "{text}\n{}", "=".repeat(text.width()));
            }
            RenderedBlock::BulletItem(content) => {
                let _ = write!(out, "  • {}", inline_text(content, &mut urls));
            }
            RenderedBlock::NumberedItem { number, content } => {
                let _ = write!(out, "  {number}. {}", inline_text(content, &mut urls));
            }
            RenderedBlock::Paragraph(content) => out.push_str(&inline_text(content, &mut urls)),
        }
        out.push('\n');
    }

    if !urls.is_empty() {
        out.push_str("\nLinks:\n");
        for (i, url) in urls.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {url}", i + 1);
        }
    }
    out
}

fn inline_text<'a>(content: &'a [InlineSegment], urls: &mut Vec<&'a str>) -> String {
    let mut text = String::new();
    for segment in content {
        text.push_str(segment.display_text());
        if let InlineSegment::Link { url, .. } = segment {
            urls.push(url);
            let _ = write!(text, "[{}]", urls.len());
        }
    }
    text
}

/// One line per tip and website, with ids
pub fn format_listing(library: &ContentLibrary) -> String {
    let mut out = String::from("Tips:\n");
    for tip in library.tips() {
        let _ = writeln!(out, "  {:>4}  {}", tip.id, tip.title);
    }
    out.push_str("\nWebsites:\n");
    for site in library.websites() {
        let _ = writeln!(out, "  {:>4}  {} {}  {}", site.id, site.icon, site.title, site.url);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tip() {
        let tip = Tip::new(
            "2",
            "Active Recall",
            "\n    ## Active Recall\n\n    How to do it:\n    - Flashcards: Use [Anki](https://apps.ankiweb.net/).\n    1. Repeat.\n  ",
        );
        assert_eq!(
            format_tip(&tip),
            "Active Recall\n=============\n\nHow to do it:\n  • Flashcards: Use Anki[1].\n  1. Repeat.\n\nLinks:\n  [1] https://apps.ankiweb.net/\n"
        );
    }

    #[test]
    fn test_format_tip_without_links() {
        let tip = Tip::new("1", "T", "just text");
        assert_eq!(format_tip(&tip), "just text\n");
        assert_eq!(format_tip(&Tip::new("1", "T", "  \n ")), "");
    }

    #[test]
    fn test_format_listing() {
        let listing = format_listing(&ContentLibrary::builtin());
        assert!(listing.contains("     3  Spaced Repetition"));
        assert!(listing.contains("Khan Academy  https://www.khanacademy.org"));
    }
}
