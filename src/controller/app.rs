use super::browser::{self, UrlClipboard};
use super::help;
use super::key_handler::{Command, KeyContext, KeyHandler, Scroll};
use super::view_state::{NavAction, Screen, ViewState};
use crate::config::RcConfig;
use crate::content::ContentLibrary;
use crate::markup::collect_links;
use crate::view::{
    AppViewModel, Frame, MouseCapture, PointerAction, PointerState, ScreenOptions, View, compose,
    grid_columns,
};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind, MouseEvent},
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, stdout};

/// Rows taken by the header bar and the status line
const CHROME_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Raw mode and the alternate screen, restored when dropped (also on panic)
struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let session = Self { _private: () };
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = execute!(stdout(), cursor::Show, LeaveAlternateScreen) {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }
    }
}

pub struct AppController {
    library: ContentLibrary,
    state: ViewState,
    key_handler: KeyHandler,
    view: View,
    pointer: PointerState,
    clipboard: UrlClipboard,
    last_frame: Frame,

    content_scroll: usize,
    reveal_link: bool,
    link_count: usize,
    show_help: bool,
    status_message: String,

    // Settings
    mouse_enabled: bool,
    show_link_urls: bool,
    sidebar_width: usize,
    browser: Option<String>,
}

impl AppController {
    pub fn new(library: ContentLibrary) -> Self {
        let state = ViewState::new(&library);
        let defaults = RcConfig::default();
        Self {
            library,
            state,
            key_handler: KeyHandler::new(),
            view: View::new(),
            pointer: PointerState::new(),
            clipboard: UrlClipboard::new(),
            last_frame: Frame::new(0, 0),
            content_scroll: 0,
            reveal_link: false,
            link_count: 0,
            show_help: false,
            status_message: String::new(),
            mouse_enabled: defaults.mouse,
            show_link_urls: defaults.link_urls,
            sidebar_width: defaults.sidebar_width,
            browser: defaults.browser,
        }
    }

    pub fn apply_config(&mut self, config: &RcConfig) {
        self.mouse_enabled = config.mouse;
        self.show_link_urls = config.link_urls;
        self.sidebar_width = config.sidebar_width;
        self.browser = config.browser.clone();
        self.view.set_color(config.color);
    }

    pub fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        let _session = TerminalSession::enter()?;

        // Dropped before the session so capture is released while still in raw mode
        let _capture = if self.mouse_enabled {
            match MouseCapture::acquire() {
                Ok(capture) => Some(capture),
                Err(e) => {
                    tracing::warn!("mouse capture unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        tracing::info!(tips = self.library.tips().len(), "session started");
        let result = self.run_loop();
        tracing::info!("session ended");
        result
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            let (width, height) = terminal::size()?;
            let frame = self.compose_frame(width as usize, height as usize);
            self.view.render(&frame)?;
            self.last_frame = frame;

            let control = match event::read()? {
                // Windows also reports releases
                Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    self.handle_key(key_event)
                }
                Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
                Event::Resize(_, _) => {
                    self.view.force_redraw();
                    LoopControl::Continue
                }
                Event::FocusLost => {
                    self.pointer.hide();
                    LoopControl::Continue
                }
                _ => LoopControl::Continue,
            };

            if control == LoopControl::Quit {
                break;
            }
        }

        Ok(())
    }

    fn compose_frame(&mut self, width: usize, height: usize) -> Frame {
        let hovered = self.pointer.hovered(&self.last_frame);
        let model = AppViewModel::new(&self.state, &self.library);
        let options = ScreenOptions {
            width,
            height,
            sidebar_width: self.sidebar_width,
            show_link_urls: self.show_link_urls,
            content_scroll: self.content_scroll,
            reveal_link: self.reveal_link,
            hovered,
            pressed: self.pointer.is_pressed(),
            status: &self.status_message,
            help: self.show_help.then(help::help_lines),
        };

        let composition = compose(&model, &options);
        self.content_scroll = composition.content_scroll;
        self.link_count = composition.link_count;
        self.reveal_link = false;
        composition.frame
    }

    fn key_context(&self) -> KeyContext<'_> {
        KeyContext {
            state: &self.state,
            library: &self.library,
            grid_columns: grid_columns(self.last_frame.width),
            link_count: self.link_count,
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) -> LoopControl {
        if self.show_help {
            self.show_help = false;
            return LoopControl::Continue;
        }

        // Built field by field: `key_context()` would borrow all of self while
        // `key_handler` is borrowed mutably
        let ctx = KeyContext {
            state: &self.state,
            library: &self.library,
            grid_columns: grid_columns(self.last_frame.width),
            link_count: self.link_count,
        };
        match self.key_handler.parse_key(&key_event, &ctx) {
            Some(command) => self.execute(command),
            None => LoopControl::Continue,
        }
    }

    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> LoopControl {
        match self.pointer.handle(&mouse_event) {
            PointerAction::Click { column, row } => {
                if self.show_help {
                    self.show_help = false;
                    return LoopControl::Continue;
                }
                let Some(target) = self.last_frame.hit_at(column, row) else {
                    return LoopControl::Continue;
                };
                tracing::debug!(?target, "click");

                let commands = KeyHandler::commands_for_target(target, &self.key_context());
                for command in commands {
                    if self.execute(command) == LoopControl::Quit {
                        return LoopControl::Quit;
                    }
                }
                LoopControl::Continue
            }
            PointerAction::Scroll(lines) if self.state.screen() == Screen::TipsList => {
                self.execute(Command::Scroll(Scroll::Lines(lines)))
            }
            _ => LoopControl::Continue,
        }
    }

    pub fn execute(&mut self, command: Command) -> LoopControl {
        match command {
            Command::Navigate(action) => self.navigate(&action),
            Command::OpenFocused => match self.focused_url() {
                Some((label, url)) => self.open(&label, &url),
                None => self.status_message = "Nothing selected to open".to_string(),
            },
            Command::CopyFocused => match self.focused_url() {
                Some((_, url)) => self.copy(&url),
                None => self.status_message = "Nothing selected to copy".to_string(),
            },
            Command::OpenContact => {
                if let Some(contact) = self.library.contact() {
                    let url = format!("mailto:{contact}");
                    let label = contact.to_string();
                    self.open(&label, &url);
                }
            }
            Command::Scroll(scroll) => self.scroll(scroll),
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::Redraw => self.view.force_redraw(),
            Command::Quit => return LoopControl::Quit,
        }
        LoopControl::Continue
    }

    fn navigate(&mut self, action: &NavAction) {
        let next = self.state.apply(action, &self.library);
        if next == self.state {
            return;
        }

        if next.screen() != self.state.screen() || next.selected_tip_id() != self.state.selected_tip_id()
        {
            self.content_scroll = 0;
        }
        if next.focused_link().is_some() && next.focused_link() != self.state.focused_link() {
            self.reveal_link = true;
        }

        tracing::debug!(?action, screen = ?next.screen(), tip = next.selected_tip_id(), "navigate");
        self.status_message.clear();
        self.state = next;
    }

    fn scroll(&mut self, scroll: Scroll) {
        if self.state.screen() != Screen::TipsList {
            return;
        }
        let page = self.last_frame.height().saturating_sub(CHROME_ROWS).max(1) as isize;
        self.content_scroll = match scroll {
            Scroll::Lines(n) => self.content_scroll.saturating_add_signed(n),
            Scroll::Pages(n) => self.content_scroll.saturating_add_signed(n * page),
            Scroll::Top => 0,
            // Clamped to the content height when the next frame is composed
            Scroll::Bottom => usize::MAX,
        };
    }

    /// Label and URL of the focused website or tip link
    pub fn focused_url(&self) -> Option<(String, String)> {
        match self.state.screen() {
            Screen::Home => None,
            Screen::WebsiteGrid => self
                .library
                .websites()
                .get(self.state.focused_website())
                .map(|site| (site.title.clone(), site.url.clone())),
            Screen::TipsList => {
                let index = self.state.focused_link()?;
                let blocks = self.state.selected_tip(&self.library).render();
                collect_links(&blocks)
                    .get(index)
                    .map(|(label, url)| (label.to_string(), url.to_string()))
            }
        }
    }

    fn open(&mut self, label: &str, url: &str) {
        match browser::open_url(url, self.browser.as_deref()) {
            Ok(()) => {
                tracing::info!(url, "opened link");
                self.status_message = format!("Opened {label}");
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to open link");
                self.status_message = format!("Could not open {url}: {e}");
            }
        }
    }

    fn copy(&mut self, url: &str) {
        match self.clipboard.copy(url) {
            Ok(()) => {
                tracing::info!(url, "copied link");
                self.status_message = format!("Copied {url}");
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "clipboard unavailable");
                self.status_message = format!("Could not copy: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Tip, Website};
    use crate::view::HitTarget;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

    fn library() -> ContentLibrary {
        let long_tip = (0..60)
            .map(|i| format!("- point {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        ContentLibrary::new(
            vec![
                Tip::new(
                    "links",
                    "Links",
                    "- Flashcards: [Anki](https://apps.ankiweb.net) or [Quizlet](https://quizlet.com)",
                ),
                Tip::new("long", "Long", &long_tip),
            ],
            vec![
                Website::new("khan", "Khan Academy", "https://www.khanacademy.org", "🎓"),
                Website::new("anki", "Anki", "https://apps.ankiweb.net", "🧠"),
            ],
            None,
        )
        .unwrap()
    }

    fn app() -> AppController {
        let mut app = AppController::new(library());
        app.last_frame = app.compose_frame(100, 30);
        app
    }

    fn press(app: &mut AppController, code: KeyCode) -> LoopControl {
        let control = app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.last_frame = app.compose_frame(100, 30);
        control
    }

    #[test]
    fn test_starts_home_and_quits() {
        let mut app = app();
        assert_eq!(app.state.screen(), Screen::Home);
        assert_eq!(press(&mut app, KeyCode::Char('q')), LoopControl::Quit);
    }

    #[test]
    fn test_focus_link_and_resolve_url() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.state.screen(), Screen::TipsList);
        assert_eq!(app.link_count, 2);
        assert_eq!(app.focused_url(), None);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.focused_url(),
            Some(("Quizlet".to_string(), "https://quizlet.com".to_string()))
        );

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.screen(), Screen::Home);
        assert_eq!(app.focused_url(), None);
    }

    #[test]
    fn test_open_without_focus_reports_status() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message, "Nothing selected to open");
        assert_eq!(app.state.screen(), Screen::TipsList);
    }

    #[test]
    fn test_website_focus_resolves_url() {
        let mut app = app();
        press(&mut app, KeyCode::Char('w'));
        press(&mut app, KeyCode::Right);
        assert_eq!(
            app.focused_url(),
            Some(("Anki".to_string(), "https://apps.ankiweb.net".to_string()))
        );
    }

    #[test]
    fn test_scrolling_resets_on_tip_change() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.selected_tip_id(), "long");

        press(&mut app, KeyCode::PageDown);
        assert!(app.content_scroll > 0);

        press(&mut app, KeyCode::Char('G'));
        let bottom = app.content_scroll;
        assert!(bottom < usize::MAX);
        press(&mut app, KeyCode::Char('J'));
        assert_eq!(app.content_scroll, bottom);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.content_scroll, 0);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        assert_eq!(press(&mut app, KeyCode::Char('q')), LoopControl::Continue);
        assert!(!app.show_help);
        assert_eq!(app.state.screen(), Screen::Home);
    }

    #[test]
    fn test_click_on_home_button() {
        let mut app = app();
        let region = app
            .last_frame
            .hits
            .iter()
            .find(|hit| hit.target == HitTarget::ShowWebsites)
            .cloned()
            .unwrap();

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: region.start_col,
            row: region.row,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(app.handle_mouse(click), LoopControl::Continue);
        assert_eq!(app.state.screen(), Screen::WebsiteGrid);
    }

    #[test]
    fn test_apply_config() {
        let mut app = app();
        let config = RcConfig {
            mouse: false,
            link_urls: true,
            sidebar_width: 40,
            browser: Some("firefox".to_string()),
            ..RcConfig::default()
        };
        app.apply_config(&config);
        assert!(!app.mouse_enabled);
        assert!(app.show_link_urls);
        assert_eq!(app.sidebar_width, 40);
        assert_eq!(app.browser.as_deref(), Some("firefox"));
    }
}
