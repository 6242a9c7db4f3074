use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub accent: bool,
    pub bold: bool,
    pub underline: bool,
    pub reverse: bool,
    pub dim: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        accent: false,
        bold: false,
        underline: false,
        reverse: false,
        dim: false,
    };

    pub fn accent() -> Self {
        Self {
            accent: true,
            ..Self::PLAIN
        }
    }

    pub fn accent_bold() -> Self {
        Self {
            accent: true,
            bold: true,
            ..Self::PLAIN
        }
    }

    pub fn dim() -> Self {
        Self {
            dim: true,
            ..Self::PLAIN
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            reverse: true,
            ..self
        }
    }

    pub fn underlined(self) -> Self {
        Self {
            underline: true,
            ..self
        }
    }
}

/// Something on screen that reacts to a pointer click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    ShowTips,
    ShowWebsites,
    Back,
    Tip(usize),
    Website(usize),
    Link(usize),
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
    pub target: Option<HitTarget>,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            target: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }

    pub fn with_target(mut self, target: HitTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        let mut line = Self::new();
        for span in spans {
            line.push(span);
        }
        line
    }

    /// Append, merging into the last span when style and target match
    pub fn push(&mut self, span: Span) {
        if span.text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.style == span.style && last.target == span.target {
                last.text.push_str(&span.text);
                return;
            }
        }
        self.spans.push(span);
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn append(&mut self, other: StyledLine) {
        for span in other.spans {
            self.push(span);
        }
    }

    /// Cut to at most `width` columns. A wide char that would straddle the edge is dropped.
    pub fn truncate(&mut self, width: usize) {
        let mut used = 0;
        let mut kept = Vec::with_capacity(self.spans.len());
        for mut span in self.spans.drain(..) {
            if used >= width {
                break;
            }
            let span_width = span.width();
            if used + span_width <= width {
                used += span_width;
                kept.push(span);
                continue;
            }
            let mut cut = String::new();
            for ch in span.text.chars() {
                let w = ch.width().unwrap_or(0);
                if used + w > width {
                    break;
                }
                used += w;
                cut.push(ch);
            }
            span.text = cut;
            if !span.text.is_empty() {
                kept.push(span);
            }
            break;
        }
        self.spans = kept;
    }

    /// Truncate, then pad with plain spaces to exactly `width` columns
    pub fn fit(&mut self, width: usize) {
        self.truncate(width);
        let current = self.width();
        if current < width {
            self.push(Span::plain(" ".repeat(width - current)));
        }
    }

    pub fn fitted(mut self, width: usize) -> Self {
        self.fit(width);
        self
    }

    /// Restyle every span that points at `target`
    pub fn restyle_target(&mut self, target: HitTarget, restyle: impl Fn(Style) -> Style) {
        for span in &mut self.spans {
            if span.target == Some(target) {
                span.style = restyle(span.style);
            }
        }
    }
}

/// Centre `line` inside `width` columns
pub fn centered(line: StyledLine, width: usize) -> StyledLine {
    let line_width = line.width();
    if line_width >= width {
        return line.fitted(width);
    }
    let mut out = StyledLine::new();
    out.push(Span::plain(" ".repeat((width - line_width) / 2)));
    out.append(line);
    out.fitted(width)
}

/// A maximal run of whitespace or non-whitespace, possibly spread over several spans
enum Run {
    Space(Vec<Span>),
    Word(Vec<Span>),
}

impl Run {
    fn is_space(&self) -> bool {
        matches!(self, Run::Space(_))
    }

    fn pieces_mut(&mut self) -> &mut Vec<Span> {
        match self {
            Run::Space(pieces) | Run::Word(pieces) => pieces,
        }
    }
}

fn runs(spans: &[Span]) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::new();
    let mut push_piece = |text: &str, span: &Span, space: bool| {
        let piece = Span {
            text: text.to_string(),
            style: span.style,
            target: span.target,
        };
        if out.last().is_some_and(|run| run.is_space() == space) {
            if let Some(run) = out.last_mut() {
                run.pieces_mut().push(piece);
            }
        } else if space {
            out.push(Run::Space(vec![piece]));
        } else {
            out.push(Run::Word(vec![piece]));
        }
    };

    for span in spans {
        let mut start = 0;
        let mut in_space = None;
        for (idx, ch) in span.text.char_indices() {
            let space = ch.is_whitespace();
            if let Some(prev) = in_space {
                if prev != space {
                    push_piece(&span.text[start..idx], span, prev);
                    start = idx;
                }
            }
            in_space = Some(space);
        }
        if let Some(space) = in_space {
            push_piece(&span.text[start..], span, space);
        }
    }
    out
}

fn pieces_width(pieces: &[Span]) -> usize {
    pieces.iter().map(Span::width).sum()
}

/// Greedy word wrap.
///
/// The first line starts with `prefix`; continuation lines are indented by
/// the prefix width. Lines only break at whitespace, and a word keeps its
/// pieces together even when they carry different styles (a link followed by
/// punctuation). Whitespace at a break is dropped. Words wider than the
/// available width are split by character. Always returns at least one line.
pub fn wrap(spans: &[Span], width: usize, prefix: StyledLine) -> Vec<StyledLine> {
    let indent = prefix.width();
    let width = width.max(indent + 1);
    let mut lines = Vec::new();
    let mut line = prefix;
    let mut used = indent;
    let mut pending: Vec<Span> = Vec::new();

    for run in runs(spans) {
        let pieces = match run {
            Run::Space(pieces) => {
                pending.extend(pieces);
                continue;
            }
            Run::Word(pieces) => pieces,
        };

        let pending_width = pieces_width(&pending);
        let word_width = pieces_width(&pieces);
        if used > indent && used + pending_width + word_width > width {
            lines.push(std::mem::take(&mut line));
            line.push(Span::plain(" ".repeat(indent)));
            used = indent;
            pending.clear();
        } else {
            for space in pending.drain(..) {
                line.push(space);
            }
            used += pending_width;
        }

        if used + word_width <= width {
            used += word_width;
            for piece in pieces {
                line.push(piece);
            }
            continue;
        }

        // Longer than a whole line: hard split
        for piece in pieces {
            let mut chunk = String::new();
            for ch in piece.text.chars() {
                let w = ch.width().unwrap_or(0);
                if used + w > width && used > indent {
                    line.push(Span {
                        text: std::mem::take(&mut chunk),
                        style: piece.style,
                        target: piece.target,
                    });
                    lines.push(std::mem::take(&mut line));
                    line.push(Span::plain(" ".repeat(indent)));
                    used = indent;
                }
                used += w;
                chunk.push(ch);
            }
            line.push(Span {
                text: chunk,
                style: piece.style,
                target: piece.target,
            });
        }
    }

    lines.push(line);
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub row: u16,
    pub start_col: u16,
    /// Exclusive
    pub end_col: u16,
    pub target: HitTarget,
}

/// A full screen of styled lines plus the clickable regions on it
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub width: usize,
    pub lines: Vec<StyledLine>,
    pub hits: Vec<HitRegion>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            lines: vec![StyledLine::new().fitted(width); height],
            hits: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Draw `line` at (`row`, `col`), clipped to the frame, and record its hit regions
    pub fn put(&mut self, row: usize, col: usize, mut line: StyledLine) {
        if row >= self.lines.len() || col >= self.width {
            return;
        }
        line.truncate(self.width - col);

        let mut x = col;
        for span in &line.spans {
            let w = span.width();
            if let Some(target) = span.target {
                if w > 0 {
                    self.hits.push(HitRegion {
                        row: row as u16,
                        start_col: x as u16,
                        end_col: (x + w) as u16,
                        target,
                    });
                }
            }
            x += w;
        }

        let existing = std::mem::take(&mut self.lines[row]);
        let mut head = existing.clone();
        head.truncate(col);
        head.fit(col);

        let line_width = line.width();
        let mut merged = head;
        merged.append(line);
        merged.append(skip_columns(existing, col + line_width));
        merged.fit(self.width);
        self.lines[row] = merged;
    }

    pub fn hit_at(&self, col: u16, row: u16) -> Option<HitTarget> {
        self.hits
            .iter()
            .rev()
            .find(|hit| hit.row == row && col >= hit.start_col && col < hit.end_col)
            .map(|hit| hit.target)
    }

    /// Restyle every span on screen that points at `target`
    pub fn restyle_target(&mut self, target: HitTarget, restyle: impl Fn(Style) -> Style + Copy) {
        for line in &mut self.lines {
            line.restyle_target(target, restyle);
        }
    }
}

/// Drop the first `columns` columns of `line`
fn skip_columns(line: StyledLine, columns: usize) -> StyledLine {
    let mut out = StyledLine::new();
    let mut x = 0;
    for span in line.spans {
        let w = span.width();
        if x >= columns {
            out.push(span);
        } else if x + w > columns {
            let mut text = String::new();
            let mut cx = x;
            for ch in span.text.chars() {
                let cw = ch.width().unwrap_or(0);
                if cx >= columns {
                    text.push(ch);
                } else if cx + cw > columns {
                    // Half of a wide char is covered; pad the other half
                    text.push(' ');
                }
                cx += cw;
            }
            out.push(Span {
                text,
                style: span.style,
                target: span.target,
            });
        }
        x += w;
    }
    out
}
