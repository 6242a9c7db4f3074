use super::view_state::{HomeButton, NavAction, Screen, ViewState};
use crate::content::ContentLibrary;
use crate::view::HitTarget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Lines(isize),
    Pages(isize),
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(NavAction),
    OpenFocused,
    CopyFocused,
    OpenContact,
    Scroll(Scroll),
    ToggleHelp,
    Redraw,
    Quit,
}

/// What the key handler needs to know about the current screen
pub struct KeyContext<'a> {
    pub state: &'a ViewState,
    pub library: &'a ContentLibrary,
    pub grid_columns: usize,
    pub link_count: usize,
}

pub struct KeyHandler {
    pending_key: Option<char>,
}

impl KeyHandler {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    pub fn parse_key(&mut self, key_event: &KeyEvent, ctx: &KeyContext) -> Option<Command> {
        let key = key_event.code;
        let modifiers = key_event.modifiers;
        let pending = self.pending_key.take();

        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Some(Command::Quit),
            KeyCode::Char('l') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Command::Redraw);
            }
            KeyCode::Char('q') => return Some(Command::Quit),
            KeyCode::Char('?') => return Some(Command::ToggleHelp),
            _ => {}
        }

        match ctx.state.screen() {
            Screen::Home => Self::parse_home_key(key, ctx),
            Screen::TipsList => self.parse_tips_key(key, modifiers, pending, ctx),
            Screen::WebsiteGrid => Self::parse_websites_key(key, ctx),
        }
    }

    fn parse_home_key(key: KeyCode, ctx: &KeyContext) -> Option<Command> {
        let action = match key {
            KeyCode::Char('t') => NavAction::ShowTips,
            KeyCode::Char('w') => NavAction::ShowWebsites,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                NavAction::ToggleHomeFocus
            }
            KeyCode::Char('h') | KeyCode::Char('l') => NavAction::ToggleHomeFocus,
            KeyCode::Enter | KeyCode::Char(' ') => match ctx.state.home_focus() {
                HomeButton::Tips => NavAction::ShowTips,
                HomeButton::Websites => NavAction::ShowWebsites,
            },
            KeyCode::Char('m') if ctx.library.contact().is_some() => return Some(Command::OpenContact),
            _ => return None,
        };
        Some(Command::Navigate(action))
    }

    fn parse_tips_key(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
        pending: Option<char>,
        ctx: &KeyContext,
    ) -> Option<Command> {
        let count = ctx.link_count;
        let command = match key {
            // Control keys first (more specific)
            KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
                Command::Scroll(Scroll::Pages(1))
            }
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                Command::Scroll(Scroll::Pages(-1))
            }

            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Command::Navigate(NavAction::Back),

            // Tip selection
            KeyCode::Up | KeyCode::Char('k') => Command::Navigate(NavAction::PrevTip),
            KeyCode::Down | KeyCode::Char('j') => Command::Navigate(NavAction::NextTip),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10)? as usize - 1;
                let tip = ctx.library.tips().get(index)?;
                Command::Navigate(NavAction::SelectTip(tip.id.clone()))
            }

            // Links
            KeyCode::Tab => Command::Navigate(NavAction::FocusNextLink { count }),
            KeyCode::BackTab => Command::Navigate(NavAction::FocusPrevLink { count }),
            KeyCode::Enter => Command::OpenFocused,
            KeyCode::Char('y') => Command::CopyFocused,

            // Content scrolling
            KeyCode::PageDown | KeyCode::Char(' ') => Command::Scroll(Scroll::Pages(1)),
            KeyCode::PageUp => Command::Scroll(Scroll::Pages(-1)),
            KeyCode::Char('J') => Command::Scroll(Scroll::Lines(1)),
            KeyCode::Char('K') => Command::Scroll(Scroll::Lines(-1)),
            KeyCode::Home => Command::Scroll(Scroll::Top),
            KeyCode::End | KeyCode::Char('G') => Command::Scroll(Scroll::Bottom),
            KeyCode::Char('g') if pending == Some('g') => Command::Scroll(Scroll::Top),
            KeyCode::Char('g') => {
                // gg - wait for the second g
                self.pending_key = Some('g');
                return None;
            }

            _ => return None,
        };
        Some(command)
    }

    fn parse_websites_key(key: KeyCode, ctx: &KeyContext) -> Option<Command> {
        let columns = ctx.grid_columns;
        let step = |dx, dy| Command::Navigate(NavAction::MoveWebsiteFocus { dx, dy, columns });

        let command = match key {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Command::Navigate(NavAction::Back),
            KeyCode::Left | KeyCode::Char('h') => step(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => step(1, 0),
            KeyCode::Up | KeyCode::Char('k') => step(0, -1),
            KeyCode::Down | KeyCode::Char('j') => step(0, 1),
            KeyCode::Home => Command::Navigate(NavAction::FocusWebsite(0)),
            KeyCode::End => {
                let last = ctx.library.websites().len().checked_sub(1)?;
                Command::Navigate(NavAction::FocusWebsite(last))
            }
            KeyCode::Enter => Command::OpenFocused,
            KeyCode::Char('y') => Command::CopyFocused,
            _ => return None,
        };
        Some(command)
    }

    /// Commands for a click on `target`
    pub fn commands_for_target(target: HitTarget, ctx: &KeyContext) -> Vec<Command> {
        match target {
            HitTarget::ShowTips => vec![Command::Navigate(NavAction::ShowTips)],
            HitTarget::ShowWebsites => vec![Command::Navigate(NavAction::ShowWebsites)],
            HitTarget::Back => vec![Command::Navigate(NavAction::Back)],
            HitTarget::Tip(index) => ctx
                .library
                .tips()
                .get(index)
                .map(|tip| vec![Command::Navigate(NavAction::SelectTip(tip.id.clone()))])
                .unwrap_or_default(),
            HitTarget::Website(index) => vec![
                Command::Navigate(NavAction::FocusWebsite(index)),
                Command::OpenFocused,
            ],
            HitTarget::Link(index) => vec![
                Command::Navigate(NavAction::FocusLink {
                    index,
                    count: ctx.link_count,
                }),
                Command::OpenFocused,
            ],
            HitTarget::Contact => vec![Command::OpenContact],
        }
    }
}
