use super::layout::{Frame, HitTarget};
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use std::io::{self, stdout};

const WHEEL_LINES: isize = 3;

/// Mouse and focus reporting, enabled for as long as this guard lives
pub struct MouseCapture {
    _private: (),
}

impl MouseCapture {
    pub fn acquire() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
        tracing::debug!("mouse capture enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        if let Err(e) = execute!(stdout(), DisableFocusChange, DisableMouseCapture) {
            tracing::warn!(error = %e, "failed to disable mouse capture");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    None,
    Moved,
    Click { column: u16, row: u16 },
    Scroll(isize),
}

/// Last known pointer position and button state
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Option<(u16, u16)>,
    pressed: bool,
    visible: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &MouseEvent) -> PointerAction {
        self.position = Some((event.column, event.row));
        self.visible = true;

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = true;
                PointerAction::Click {
                    column: event.column,
                    row: event.row,
                }
            }
            MouseEventKind::Up(_) => {
                self.pressed = false;
                PointerAction::Moved
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerAction::Moved,
            MouseEventKind::ScrollDown => PointerAction::Scroll(WHEEL_LINES),
            MouseEventKind::ScrollUp => PointerAction::Scroll(-WHEEL_LINES),
            _ => PointerAction::None,
        }
    }

    /// Pointer left the terminal
    pub fn hide(&mut self) {
        self.visible = false;
        self.pressed = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn position(&self) -> Option<(u16, u16)> {
        if self.visible { self.position } else { None }
    }

    /// Interactive region currently under the pointer
    pub fn hovered(&self, frame: &Frame) -> Option<HitTarget> {
        let (column, row) = self.position()?;
        frame.hit_at(column, row)
    }
}
