use super::layout::{Frame, HitTarget, Span, Style, StyledLine, centered, wrap};
use super::view_model::ViewModel;
use crate::content::Website;
use crate::controller::{HomeButton, Screen};
use crate::markup::{InlineSegment, RenderedBlock};
use unicode_width::UnicodeWidthStr;

const TITLE: &str = "Study Buddy";
/// Home footer when no contact address is configured
const CONTENT_HINT: &str = "add your own tips and websites with --content <FILE>";
const BUTTON_INNER: usize = 18;
const BUTTON_GAP: usize = 4;
const CARD_INNER: usize = 18;
const CARD_WIDTH: usize = CARD_INNER + 2;
const CARD_HEIGHT: usize = 5;
const CARD_GAP: usize = 2;
/// First row below the header bar
const BODY_TOP: usize = 2;

pub struct ScreenOptions<'a> {
    pub width: usize,
    pub height: usize,
    pub sidebar_width: usize,
    pub show_link_urls: bool,
    pub content_scroll: usize,
    /// Scroll the tip content so the focused link is on screen
    pub reveal_link: bool,
    pub hovered: Option<HitTarget>,
    pub pressed: bool,
    pub status: &'a str,
    pub help: Option<&'a [&'a str]>,
}

pub struct Composition {
    pub frame: Frame,
    /// Tip content scroll after clamping
    pub content_scroll: usize,
    /// Links in the visible tip, zero on other screens
    pub link_count: usize,
}

pub fn compose(model: &dyn ViewModel, options: &ScreenOptions) -> Composition {
    let mut frame = Frame::new(options.width, options.height);
    let mut content_scroll = 0;
    let mut link_count = 0;

    match model.screen() {
        Screen::Home => compose_home(&mut frame, model),
        Screen::TipsList => {
            (content_scroll, link_count) = compose_tips(&mut frame, model, options);
        }
        Screen::WebsiteGrid => compose_websites(&mut frame, model, options),
    }

    if let Some(help) = options.help {
        compose_help(&mut frame, help);
    }
    compose_status(&mut frame, model.screen(), options.status);

    if let Some(target) = options.hovered {
        let pressed = options.pressed;
        frame.restyle_target(target, move |style| {
            if pressed {
                style.reversed()
            } else {
                style.underlined()
            }
        });
    }

    Composition {
        frame,
        content_scroll,
        link_count,
    }
}

/// How many website cards fit side by side
pub fn grid_columns(width: usize) -> usize {
    ((width.saturating_sub(2) + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1)
}

fn boxed(content: Vec<StyledLine>, inner: usize, border: Style, target: Option<HitTarget>) -> Vec<StyledLine> {
    let tag = |span: Span| match target {
        Some(target) => span.with_target(target),
        None => span,
    };
    let edge = |left: &str, right: &str| {
        StyledLine::from_spans(vec![tag(Span::new(format!("{left}{}{right}", "─".repeat(inner)), border))])
    };

    let mut lines = vec![edge("╭", "╮")];
    for line in content {
        let mut body = centered(line, inner);
        for span in &mut body.spans {
            span.target = target;
        }
        let mut row = StyledLine::new();
        row.push(tag(Span::new("│", border)));
        row.append(body);
        row.push(tag(Span::new("│", border)));
        lines.push(row);
    }
    lines.push(edge("╰", "╯"));
    lines
}

fn compose_home(frame: &mut Frame, model: &dyn ViewModel) {
    let width = frame.width;
    let usable = frame.height().saturating_sub(1);
    let button_width = BUTTON_INNER + 2;
    let side_by_side = width >= 2 * button_width + BUTTON_GAP + 2;
    let buttons_height = if side_by_side { 5 } else { 11 };
    let block_height = 2 + buttons_height + 3;
    let top = usable.saturating_sub(block_height) / 2;

    let title: String = TITLE
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    frame.put(top, 0, centered(StyledLine::from_spans(vec![Span::new(title, Style::accent_bold())]), width));

    let button = |icon: &str, label: &str, which: HomeButton, target: HitTarget| {
        let focused = model.home_focus() == which;
        let (border, label_style) = if focused {
            (Style::accent_bold(), Style::accent_bold().reversed())
        } else {
            (Style::accent(), Style::accent_bold())
        };
        boxed(
            vec![
                StyledLine::from_spans(vec![Span::plain(icon)]),
                StyledLine::from_spans(vec![Span::new(format!(" {label} "), label_style)]),
                StyledLine::new(),
            ],
            BUTTON_INNER,
            border,
            Some(target),
        )
    };
    let tips = button("🌀", "Tips", HomeButton::Tips, HitTarget::ShowTips);
    let sites = button("🌐", "Websites", HomeButton::Websites, HitTarget::ShowWebsites);

    let row = top + 2;
    if side_by_side {
        let left = (width - (2 * button_width + BUTTON_GAP)) / 2;
        for (i, line) in tips.into_iter().enumerate() {
            frame.put(row + i, left, line);
        }
        for (i, line) in sites.into_iter().enumerate() {
            frame.put(row + i, left + button_width + BUTTON_GAP, line);
        }
    } else {
        let left = width.saturating_sub(button_width) / 2;
        let stacked = tips.len() + 1;
        for (i, line) in tips.into_iter().enumerate() {
            frame.put(row + i, left, line);
        }
        for (i, line) in sites.into_iter().enumerate() {
            frame.put(row + stacked + i, left, line);
        }
    }

    let footer = match model.contact() {
        Some(contact) => StyledLine::from_spans(vec![
            Span::new("email me any extra tips or websites you want ", Style::accent()),
            Span::new(contact, Style::accent_bold().underlined()).with_target(HitTarget::Contact),
        ]),
        None => StyledLine::from_spans(vec![Span::new(CONTENT_HINT, Style::dim())]),
    };
    frame.put(row + buttons_height + 2, 0, centered(footer, width));
}

fn compose_header(frame: &mut Frame, title: &str) {
    let width = frame.width;
    let bar = Style::accent_bold().reversed();
    frame.put(0, 0, StyledLine::from_spans(vec![Span::new(" ".repeat(width), bar)]));

    let title_width = title.width();
    frame.put(
        0,
        width.saturating_sub(title_width) / 2,
        StyledLine::from_spans(vec![Span::new(title, bar)]),
    );
    frame.put(
        0,
        0,
        StyledLine::from_spans(vec![Span::new(" ← Back Home ", bar).with_target(HitTarget::Back)]),
    );
}

fn compose_tips(frame: &mut Frame, model: &dyn ViewModel, options: &ScreenOptions) -> (usize, usize) {
    compose_header(frame, "Study Tips 🌀");

    let width = frame.width;
    let body_height = frame.height().saturating_sub(BODY_TOP + 1);
    let sidebar = match options.sidebar_width.min(width / 2) {
        w if w < 6 => 0,
        w => w,
    };

    if sidebar > 0 {
        let (side_lines, selected_row) = sidebar_lines(model, sidebar);
        let offset = (selected_row + 1).saturating_sub(body_height);
        for (r, line) in side_lines.into_iter().skip(offset).take(body_height).enumerate() {
            frame.put(BODY_TOP + r, 0, line);
        }
        for r in 0..body_height {
            frame.put(
                BODY_TOP + r,
                sidebar,
                StyledLine::from_spans(vec![Span::new("│", Style::accent())]),
            );
        }
    }

    let left = if sidebar > 0 { sidebar + 2 } else { 1 };
    let content_width = width.saturating_sub(left + 1).max(1);
    let blocks = model.selected_tip().render();
    let (lines, link_rows) = content_lines(&blocks, content_width, options.show_link_urls, model.focused_link());

    let max_scroll = lines.len().saturating_sub(body_height);
    let mut scroll = options.content_scroll;
    if options.reveal_link && body_height > 0 {
        if let Some(&row) = model.focused_link().and_then(|i| link_rows.get(i)) {
            if row < scroll {
                scroll = row;
            } else if row >= scroll + body_height {
                scroll = row + 1 - body_height;
            }
        }
    }
    let scroll = scroll.min(max_scroll);

    for (r, line) in lines.into_iter().skip(scroll).take(body_height).enumerate() {
        frame.put(BODY_TOP + r, left, line);
    }

    (scroll, link_rows.len())
}

/// Sidebar rows for the tip titles, and the first row of the selected one
fn sidebar_lines(model: &dyn ViewModel, sidebar: usize) -> (Vec<StyledLine>, usize) {
    let text_width = sidebar.saturating_sub(1);
    let selected_index = model.selected_tip_index();
    let mut lines = Vec::new();
    let mut selected_row = 0;

    for (i, tip) in model.tips().iter().enumerate() {
        let target = HitTarget::Tip(i);
        let style = if i == selected_index {
            selected_row = lines.len();
            Style::accent_bold().reversed()
        } else {
            Style::accent()
        };

        let wrapped = wrap(
            &[Span::new(tip.title.clone(), style)],
            text_width.saturating_sub(1),
            StyledLine::from_spans(vec![Span::new(" ", style)]),
        );
        for mut line in wrapped {
            line.fit(text_width);
            for span in &mut line.spans {
                span.style = style;
                span.target = Some(target);
            }
            lines.push(line);
        }
        lines.push(StyledLine::new());
    }

    (lines, selected_row)
}

/// Wrap rendered blocks into styled lines.
///
/// Also returns the first row of each link, indexed in document order.
pub fn content_lines(
    blocks: &[RenderedBlock],
    width: usize,
    show_link_urls: bool,
    focused_link: Option<usize>,
) -> (Vec<StyledLine>, Vec<usize>) {
    let mut lines = Vec::new();
    let mut next_link = 0;

    for block in blocks {
        match block {
            RenderedBlock::Blank => lines.push(StyledLine::new()),
            RenderedBlock::Heading(text) => {
                lines.extend(wrap(
                    &[Span::new(text.clone(), Style::accent_bold())],
                    width,
                    StyledLine::new(),
                ));
                lines.push(StyledLine::from_spans(vec![Span::new("━".repeat(width), Style::accent())]));
            }
            RenderedBlock::BulletItem(content) => {
                let prefix = StyledLine::from_spans(vec![
                    Span::plain(" "),
                    Span::new("•", Style::accent_bold()),
                    Span::plain(" "),
                ]);
                let spans = inline_spans(content, &mut next_link, show_link_urls, focused_link);
                lines.extend(wrap(&spans, width, prefix));
            }
            RenderedBlock::NumberedItem { number, content } => {
                let prefix = StyledLine::from_spans(vec![
                    Span::plain(" "),
                    Span::new(format!("{number}."), Style::accent_bold()),
                    Span::plain(" "),
                ]);
                let spans = inline_spans(content, &mut next_link, show_link_urls, focused_link);
                lines.extend(wrap(&spans, width, prefix));
            }
            RenderedBlock::Paragraph(content) => {
                let spans = inline_spans(content, &mut next_link, show_link_urls, focused_link);
                lines.extend(wrap(&spans, width, StyledLine::new()));
            }
        }
    }

    let mut link_rows: Vec<Option<usize>> = vec![None; next_link];
    for (row, line) in lines.iter().enumerate() {
        for span in &line.spans {
            if let Some(HitTarget::Link(k)) = span.target {
                if let Some(slot @ None) = link_rows.get_mut(k) {
                    *slot = Some(row);
                }
            }
        }
    }
    let mut last = 0;
    let link_rows = link_rows
        .into_iter()
        .map(|row| {
            last = row.unwrap_or(last);
            last
        })
        .collect();

    (lines, link_rows)
}

fn inline_spans(
    content: &[InlineSegment],
    next_link: &mut usize,
    show_link_urls: bool,
    focused_link: Option<usize>,
) -> Vec<Span> {
    let mut spans = Vec::with_capacity(content.len());
    for segment in content {
        match segment {
            InlineSegment::PlainText(text) => spans.push(Span::plain(text.clone())),
            InlineSegment::BoldLabel(text) => spans.push(Span::new(text.clone(), Style::accent_bold())),
            InlineSegment::Link { label, url } => {
                let index = *next_link;
                *next_link += 1;
                let target = HitTarget::Link(index);
                let mut style = Style::accent_bold().underlined();
                if focused_link == Some(index) {
                    style = style.reversed();
                }
                spans.push(Span::new(label.clone(), style).with_target(target));
                if show_link_urls {
                    spans.push(Span::new(format!(" ({url})"), Style::dim()).with_target(target));
                }
            }
        }
    }
    spans
}

fn compose_websites(frame: &mut Frame, model: &dyn ViewModel, options: &ScreenOptions) {
    compose_header(frame, "Helpful Websites 🌐");

    let width = frame.width;
    let body_height = frame.height().saturating_sub(BODY_TOP + 1);
    let sites = model.websites();
    if sites.is_empty() {
        let empty = StyledLine::from_spans(vec![Span::new("No websites configured", Style::dim())]);
        frame.put(BODY_TOP, 0, centered(empty, width));
        return;
    }

    let columns = grid_columns(width);
    let grid_width = columns * CARD_WIDTH + (columns - 1) * CARD_GAP;
    let left = width.saturating_sub(grid_width) / 2;
    let row_height = CARD_HEIGHT + 1;
    let visible_rows = (body_height / row_height).max(1);
    let focused = model.focused_website().min(sites.len() - 1);
    let first_row = (focused / columns + 1).saturating_sub(visible_rows);

    for (i, site) in sites.iter().enumerate() {
        let grid_row = i / columns;
        if grid_row < first_row || grid_row >= first_row + visible_rows {
            continue;
        }
        let target = HitTarget::Website(i);
        let active = i == focused || options.hovered == Some(target);
        let top = BODY_TOP + (grid_row - first_row) * row_height;
        let x = left + (i % columns) * (CARD_WIDTH + CARD_GAP);
        for (r, line) in website_card(site, active, target).into_iter().enumerate() {
            frame.put(top + r, x, line);
        }
    }
}

fn website_card(site: &Website, active: bool, target: HitTarget) -> Vec<StyledLine> {
    let border = if active { Style::accent_bold() } else { Style::accent() };
    let hint = if active {
        Span::new("GO TO SITE", Style::accent_bold().reversed())
    } else {
        Span::new(display_host(&site.url), Style::dim())
    };
    boxed(
        vec![
            StyledLine::from_spans(vec![Span::plain(site.icon.clone())]),
            StyledLine::from_spans(vec![Span::new(site.title.clone(), Style::accent_bold())]),
            StyledLine::from_spans(vec![hint]),
        ],
        CARD_INNER,
        border,
        Some(target),
    )
}

/// `https://www.example.com/path` -> `example.com`
fn display_host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.split(['/', '?', '#']).next().unwrap_or(rest)
}

fn compose_help(frame: &mut Frame, help: &[&str]) {
    let width = frame.width;
    let inner = (help.iter().map(|line| line.width()).max().unwrap_or(0) + 2).min(width.saturating_sub(2));
    let lines = help
        .iter()
        .map(|line| StyledLine::from_spans(vec![Span::plain(format!(" {line}"))]).fitted(inner))
        .collect();
    let boxed_help = boxed(lines, inner, Style::accent_bold(), None);

    let top = frame.height().saturating_sub(boxed_help.len() + 1) / 2;
    let left = width.saturating_sub(inner + 2) / 2;
    for (r, line) in boxed_help.into_iter().enumerate() {
        frame.put(top + r, left, line);
    }
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "t tips · w websites · ←→ choose · Enter open · ? help · q quit",
        Screen::TipsList => "↑↓ tip · Tab link · Enter open · y copy · PgUp/PgDn scroll · Esc back · ? help",
        Screen::WebsiteGrid => "arrows move · Enter open · y copy url · Esc back · ? help",
    }
}

fn compose_status(frame: &mut Frame, screen: Screen, status: &str) {
    let Some(row) = frame.height().checked_sub(1) else {
        return;
    };
    let message = if status.is_empty() {
        Span::new(key_hints(screen), Style::dim())
    } else {
        Span::new(status, Style::accent_bold())
    };
    frame.put(row, 0, StyledLine::from_spans(vec![Span::plain(" "), message]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentLibrary, Tip};
    use crate::controller::ViewState;
    use crate::controller::view_state::NavAction;
    use crate::markup;
    use crate::view::view_model::AppViewModel;

    fn options(width: usize, height: usize) -> ScreenOptions<'static> {
        ScreenOptions {
            width,
            height,
            sidebar_width: 24,
            show_link_urls: false,
            content_scroll: 0,
            reveal_link: false,
            hovered: None,
            pressed: false,
            status: "",
            help: None,
        }
    }

    fn contains(frame: &Frame, needle: &str) -> bool {
        frame.lines.iter().any(|line| line.text().contains(needle))
    }

    fn find(frame: &Frame, needle: &str) -> Option<(u16, u16)> {
        frame.lines.iter().enumerate().find_map(|(row, line)| {
            let text = line.text();
            text.find(needle)
                .map(|byte| (text[..byte].width() as u16, row as u16))
        })
    }

    #[test]
    fn test_home_screen_buttons_are_clickable() {
        let library = ContentLibrary::builtin();
        let state = ViewState::new(&library);
        let model = AppViewModel::new(&state, &library);
        let composition = compose(&model, &options(80, 24));
        let frame = &composition.frame;

        assert!(contains(frame, "S t u d y   B u d d y"));
        let (col, row) = find(frame, "Tips").unwrap();
        assert_eq!(frame.hit_at(col, row), Some(HitTarget::ShowTips));
        let (col, row) = find(frame, "Websites").unwrap();
        assert_eq!(frame.hit_at(col, row), Some(HitTarget::ShowWebsites));
        assert_eq!(composition.link_count, 0);
    }

    #[test]
    fn test_home_screen_stacks_buttons_when_narrow() {
        let library = ContentLibrary::builtin();
        let state = ViewState::new(&library);
        let model = AppViewModel::new(&state, &library);
        let frame = compose(&model, &options(30, 30)).frame;

        let (_, tips_row) = find(&frame, "Tips").unwrap();
        let (_, sites_row) = find(&frame, "Websites").unwrap();
        assert!(sites_row > tips_row);
    }

    #[test]
    fn test_home_footer_shows_contact() {
        let library = ContentLibrary::new(vec![Tip::new("1", "One", "x")], vec![], Some("me@example.com".into())).unwrap();
        let state = ViewState::new(&library);
        let model = AppViewModel::new(&state, &library);
        let frame = compose(&model, &options(100, 24)).frame;

        let (col, row) = find(&frame, "me@example.com").unwrap();
        assert_eq!(frame.hit_at(col, row), Some(HitTarget::Contact));
    }

    #[test]
    fn test_home_footer_without_contact_shows_content_hint() {
        let library = ContentLibrary::builtin();
        let state = ViewState::new(&library);
        let model = AppViewModel::new(&state, &library);
        let frame = compose(&model, &options(100, 24)).frame;

        let (col, row) = find(&frame, "--content").unwrap();
        assert_eq!(frame.hit_at(col, row), None);
        assert!(!frame.hits.iter().any(|hit| hit.target == HitTarget::Contact));
    }

    #[test]
    fn test_tips_screen_lists_titles_and_content() {
        let library = ContentLibrary::builtin();
        let state = ViewState::new(&library).apply(&NavAction::ShowTips, &library);
        let model = AppViewModel::new(&state, &library);
        let frame = compose(&model, &options(100, 40)).frame;

        assert!(contains(&frame, "Study Tips"));
        assert!(contains(&frame, "Back Home"));
        assert!(contains(&frame, "Spaced Repetition"));
        assert!(contains(&frame, "1. Choose a task."));

        let (col, row) = find(&frame, "Feynman").unwrap();
        assert_eq!(frame.hit_at(col, row), Some(HitTarget::Tip(3)));
        assert_eq!(frame.hit_at(2, 0), Some(HitTarget::Back));
    }

    #[test]
    fn test_tips_screen_links_and_focus() {
        let library = ContentLibrary::builtin();
        let state = ViewState::new(&library)
            .apply(&NavAction::ShowTips, &library)
            .apply(&NavAction::SelectTip("2".into()), &library)
            .apply(&NavAction::FocusNextLink { count: 2 }, &library);
        let model = AppViewModel::new(&state, &library);
        let composition = compose(&model, &options(120, 40));
        assert_eq!(composition.link_count, 2);

        let frame = &composition.frame;
        let (col, row) = find(frame, "Quizlet").unwrap();
        assert_eq!(frame.hit_at(col, row), Some(HitTarget::Link(1)));

        let anki = frame.lines.iter().flat_map(|l| &l.spans).find(|s| s.text == "Anki").unwrap();
        assert!(anki.style.reverse);
        let quizlet = frame.lines.iter().flat_map(|l| &l.spans).find(|s| s.text == "Quizlet").unwrap();
        assert!(!quizlet.style.reverse);
    }

    #[test]
    fn test_tips_scroll_is_clamped() {
        let library = ContentLibrary::builtin();
        let state = ViewState::new(&library).apply(&NavAction::ShowTips, &library);
        let model = AppViewModel::new(&state, &library);
        let mut opts = options(100, 10);
        opts.content_scroll = 10_000;
        let composition = compose(&model, &opts);

        let blocks = library.first_tip().render();
        let (lines, _) = content_lines(&blocks, 100 - 24 - 3, false, None);
        assert_eq!(composition.content_scroll, lines.len() - (10 - 3));
    }

    #[test]
    fn test_reveal_link_scrolls_to_focused_link() {
        let content = format!("{}[Far](https://example.com)", "line\n".repeat(50));
        let library = ContentLibrary::new(vec![Tip::new("1", "One", &content)], vec![], None).unwrap();
        let state = ViewState::new(&library)
            .apply(&NavAction::ShowTips, &library)
            .apply(&NavAction::FocusNextLink { count: 1 }, &library);
        let model = AppViewModel::new(&state, &library);

        let mut opts = options(80, 12);
        opts.reveal_link = true;
        let composition = compose(&model, &opts);
        assert!(composition.content_scroll > 0);
        assert!(contains(&composition.frame, "Far"));
    }

    #[test]
    fn test_content_lines_layout() {
        let blocks = markup::render("## Head\n- Tip: [Docs](https://docs.example.com) help\n\n3. three");
        let (lines, link_rows) = content_lines(&blocks, 30, true, None);
        let texts: Vec<String> = lines.iter().map(StyledLine::text).collect();

        assert_eq!(texts[0], "Head");
        assert_eq!(texts[1], "━".repeat(30));
        assert!(texts[2].starts_with(" • Tip: Docs"));
        assert!(texts.iter().any(|t| t.contains("(https://docs.example.com)")));
        assert!(texts.contains(&" 3. three".to_string()));
        assert_eq!(link_rows, vec![2]);
    }

    #[test]
    fn test_website_grid() {
        let library = ContentLibrary::builtin();
        let state = ViewState::new(&library)
            .apply(&NavAction::ShowWebsites, &library)
            .apply(&NavAction::FocusWebsite(1), &library);
        let model = AppViewModel::new(&state, &library);
        let frame = compose(&model, &options(80, 30)).frame;

        assert!(contains(&frame, "Helpful Websites"));
        assert!(contains(&frame, "GO TO SITE"));
        assert!(contains(&frame, "docs.google.com"));
        let (col, row) = find(&frame, "Google Docs").unwrap();
        assert_eq!(frame.hit_at(col, row), Some(HitTarget::Website(0)));
    }

    #[test]
    fn test_website_grid_scrolls_to_focus() {
        let library = ContentLibrary::builtin();
        let last = library.websites().len() - 1;
        let state = ViewState::new(&library)
            .apply(&NavAction::ShowWebsites, &library)
            .apply(&NavAction::FocusWebsite(last), &library);
        let model = AppViewModel::new(&state, &library);
        let frame = compose(&model, &options(80, 16)).frame;

        assert!(contains(&frame, "Coursera"));
        assert!(!contains(&frame, "Google Docs"));
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(80), 3);
        assert_eq!(grid_columns(200), 9);
    }

    #[test]
    fn test_display_host() {
        assert_eq!(display_host("https://www.dictionary.com"), "dictionary.com");
        assert_eq!(display_host("https://app.youlearn.ai/"), "app.youlearn.ai");
        assert_eq!(display_host("quizlet.com/x?y"), "quizlet.com");
    }

    #[test]
    fn test_status_and_help_overlay() {
        let library = ContentLibrary::builtin();
        let state = ViewState::new(&library);
        let model = AppViewModel::new(&state, &library);
        let help: &'static [&'static str] = &["HELP LINE"];
        let mut opts = options(80, 24);
        opts.status = "Copied";
        opts.help = Some(help);
        let frame = compose(&model, &opts).frame;

        assert!(frame.lines[23].text().contains("Copied"));
        assert!(contains(&frame, "HELP LINE"));
    }

    #[test]
    fn test_hovered_target_is_restyled() {
        let library = ContentLibrary::builtin();
        let state = ViewState::new(&library);
        let model = AppViewModel::new(&state, &library);
        let mut opts = options(80, 24);
        opts.hovered = Some(HitTarget::ShowWebsites);
        let frame = compose(&model, &opts).frame;

        let hovered = frame
            .lines
            .iter()
            .flat_map(|l| &l.spans)
            .filter(|s| s.target == Some(HitTarget::ShowWebsites))
            .all(|s| s.style.underline);
        assert!(hovered);
    }
}
