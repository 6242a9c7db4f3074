//! View Model - Exposes navigation state and content to the view layer
//! Screen composition reads through this instead of controller internals

use crate::content::{ContentLibrary, Tip, Website};
use crate::controller::{HomeButton, Screen, ViewState};

/// Everything the screens need to draw
pub trait ViewModel {
    fn screen(&self) -> Screen;

    fn tips(&self) -> &[Tip];

    fn selected_tip_index(&self) -> usize;

    fn websites(&self) -> &[Website];

    fn home_focus(&self) -> HomeButton;

    fn focused_website(&self) -> usize;

    fn focused_link(&self) -> Option<usize>;

    /// Address shown in the home footer
    fn contact(&self) -> Option<&str>;

    fn selected_tip(&self) -> &Tip {
        &self.tips()[self.selected_tip_index()]
    }
}

/// Adapts the controller's state plus the content library to `ViewModel`
pub struct AppViewModel<'a> {
    state: &'a ViewState,
    library: &'a ContentLibrary,
}

impl<'a> AppViewModel<'a> {
    pub fn new(state: &'a ViewState, library: &'a ContentLibrary) -> Self {
        Self { state, library }
    }
}

impl ViewModel for AppViewModel<'_> {
    fn screen(&self) -> Screen {
        self.state.screen()
    }

    fn tips(&self) -> &[Tip] {
        self.library.tips()
    }

    fn selected_tip_index(&self) -> usize {
        self.library
            .tip_index(self.state.selected_tip_id())
            .unwrap_or(0)
    }

    fn websites(&self) -> &[Website] {
        self.library.websites()
    }

    fn home_focus(&self) -> HomeButton {
        self.state.home_focus()
    }

    fn focused_website(&self) -> usize {
        self.state.focused_website()
    }

    fn focused_link(&self) -> Option<usize> {
        self.state.focused_link()
    }

    fn contact(&self) -> Option<&str> {
        self.library.contact()
    }
}
