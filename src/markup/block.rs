use super::inline::{InlineSegment, parse_inline};
use regex::Regex;
use std::str::Split;
use std::sync::LazyLock;

/// A single ASCII digit followed by a period, at the start of a trimmed line
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]\.").expect("numbered item pattern is valid"));

/// One structural unit of rendered output, derived from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    Heading(String),
    BulletItem(Vec<InlineSegment>),
    NumberedItem {
        number: String,
        content: Vec<InlineSegment>,
    },
    Paragraph(Vec<InlineSegment>),
    Blank,
}

impl RenderedBlock {
    /// Classify a single line. First matching rule wins.
    pub fn from_line(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return RenderedBlock::Blank;
        }

        if let Some(rest) = trimmed.strip_prefix("##") {
            return RenderedBlock::Heading(rest.trim().to_string());
        }

        if let Some(rest) = trimmed.strip_prefix('-') {
            return RenderedBlock::BulletItem(parse_inline(rest.trim()));
        }

        if NUMBERED_ITEM.is_match(trimmed) {
            if let Some((number, rest)) = trimmed.split_once('.') {
                return RenderedBlock::NumberedItem {
                    number: number.to_string(),
                    content: parse_inline(rest.trim()),
                };
            }
        }

        RenderedBlock::Paragraph(parse_inline(trimmed))
    }

    /// Inline segments, for the block kinds that carry them
    pub fn inline(&self) -> Option<&[InlineSegment]> {
        match self {
            RenderedBlock::BulletItem(content)
            | RenderedBlock::Paragraph(content)
            | RenderedBlock::NumberedItem { content, .. } => Some(content),
            RenderedBlock::Heading(_) | RenderedBlock::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, RenderedBlock::Blank)
    }
}

/// Single-pass iterator over the blocks of a text, one per `'\n'`-separated line
pub struct Blocks<'a> {
    lines: Split<'a, char>,
}

impl Iterator for Blocks<'_> {
    type Item = RenderedBlock;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(RenderedBlock::from_line)
    }
}

pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks {
        lines: text.split('\n'),
    }
}

pub fn render(text: &str) -> Vec<RenderedBlock> {
    blocks(text).collect()
}

/// Every link in the blocks as `(label, url)`, in document order
pub fn collect_links(blocks: &[RenderedBlock]) -> Vec<(&str, &str)> {
    blocks
        .iter()
        .filter_map(RenderedBlock::inline)
        .flatten()
        .filter_map(|segment| match segment {
            InlineSegment::Link { label, url } => Some((label.as_str(), url.as_str())),
            _ => None,
        })
        .collect()
}
