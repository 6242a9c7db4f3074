use crate::content::{ContentLibrary, Tip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    TipsList,
    WebsiteGrid,
}

/// Which of the two home buttons has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeButton {
    Tips,
    Websites,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    ShowTips,
    ShowWebsites,
    Back,
    ToggleHomeFocus,
    SelectTip(String),
    NextTip,
    PrevTip,
    FocusWebsite(usize),
    MoveWebsiteFocus { dx: isize, dy: isize, columns: usize },
    FocusLink { index: usize, count: usize },
    FocusNextLink { count: usize },
    FocusPrevLink { count: usize },
}

/// The whole navigation state of the app.
///
/// Transitions go through [`ViewState::apply`], which never fails: an action
/// that makes no sense on the current screen leaves the state as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    screen: Screen,
    selected_tip: String,
    home_focus: HomeButton,
    focused_website: usize,
    focused_link: Option<usize>,
}

impl ViewState {
    pub fn new(library: &ContentLibrary) -> Self {
        Self {
            screen: Screen::Home,
            selected_tip: library.first_tip().id.clone(),
            home_focus: HomeButton::Tips,
            focused_website: 0,
            focused_link: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_tip_id(&self) -> &str {
        &self.selected_tip
    }

    /// The selected tip, or the first one if the id no longer resolves
    pub fn selected_tip<'a>(&self, library: &'a ContentLibrary) -> &'a Tip {
        library
            .tip(&self.selected_tip)
            .unwrap_or_else(|| library.first_tip())
    }

    pub fn home_focus(&self) -> HomeButton {
        self.home_focus
    }

    pub fn focused_website(&self) -> usize {
        self.focused_website
    }

    pub fn focused_link(&self) -> Option<usize> {
        self.focused_link
    }

    pub fn apply(&self, action: &NavAction, library: &ContentLibrary) -> ViewState {
        let mut next = self.clone();

        match (self.screen, action) {
            (Screen::Home, NavAction::ShowTips) => {
                next.screen = Screen::TipsList;
                next.home_focus = HomeButton::Tips;
            }
            (Screen::Home, NavAction::ShowWebsites) => {
                next.screen = Screen::WebsiteGrid;
                next.home_focus = HomeButton::Websites;
            }
            (Screen::Home, NavAction::ToggleHomeFocus) => {
                next.home_focus = match self.home_focus {
                    HomeButton::Tips => HomeButton::Websites,
                    HomeButton::Websites => HomeButton::Tips,
                };
            }
            (Screen::TipsList | Screen::WebsiteGrid, NavAction::Back) => {
                next.screen = Screen::Home;
                next.focused_link = None;
            }
            (Screen::TipsList, NavAction::SelectTip(id)) => {
                if *id != self.selected_tip && library.tip(id).is_some() {
                    next.selected_tip = id.clone();
                    next.focused_link = None;
                }
            }
            (Screen::TipsList, NavAction::NextTip | NavAction::PrevTip) => {
                let count = library.tips().len();
                let current = library.tip_index(&self.selected_tip).unwrap_or(0);
                let target = if *action == NavAction::NextTip {
                    (current + 1) % count
                } else {
                    (current + count - 1) % count
                };
                if target != current {
                    next.selected_tip = library.tips()[target].id.clone();
                    next.focused_link = None;
                }
            }
            (Screen::TipsList, NavAction::FocusLink { index, count }) => {
                if index < count {
                    next.focused_link = Some(*index);
                }
            }
            (Screen::TipsList, NavAction::FocusNextLink { count }) => {
                next.focused_link = match (*count, self.focused_link) {
                    (0, _) => None,
                    (_, None) => Some(0),
                    (count, Some(i)) => Some((i + 1) % count),
                };
            }
            (Screen::TipsList, NavAction::FocusPrevLink { count }) => {
                next.focused_link = match (*count, self.focused_link) {
                    (0, _) => None,
                    (count, None) => Some(count - 1),
                    (count, Some(i)) => Some((i.min(count) + count - 1) % count),
                };
            }
            (Screen::WebsiteGrid, NavAction::FocusWebsite(index)) => {
                if *index < library.websites().len() {
                    next.focused_website = *index;
                }
            }
            (Screen::WebsiteGrid, NavAction::MoveWebsiteFocus { dx, dy, columns }) => {
                next.focused_website =
                    move_in_grid(self.focused_website, *dx, *dy, *columns, library.websites().len());
            }
            _ => {}
        }

        next
    }
}

/// Move a row-major grid cursor, staying inside the grid
fn move_in_grid(current: usize, dx: isize, dy: isize, columns: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let columns = columns.max(1) as isize;
    let current = current.min(len - 1) as isize;
    let rows = (len as isize + columns - 1) / columns;

    let col = (current % columns + dx).clamp(0, columns - 1);
    let row = (current / columns + dy).clamp(0, rows - 1);

    ((row * columns + col) as usize).min(len - 1)
}
