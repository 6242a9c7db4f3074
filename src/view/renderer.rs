use super::layout::{Frame, StyledLine};
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::fmt::Write as _;
use std::io::{self, Write, stdout};

/// Accent purple used for titles, labels and links
pub const ACCENT: Color = Color::Rgb {
    r: 0x9C,
    g: 0x70,
    b: 0xCE,
};

pub struct View {
    last_lines: Vec<String>,
    last_size: (usize, usize),
    needs_full_redraw: bool,
    render_count: usize,
    color: bool,
}

impl View {
    pub fn new() -> Self {
        Self {
            last_lines: Vec::new(),
            last_size: (0, 0),
            needs_full_redraw: true,
            render_count: 0,
            color: true,
        }
    }

    pub fn set_color(&mut self, color: bool) {
        if self.color != color {
            self.color = color;
            self.needs_full_redraw = true;
        }
    }

    fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))
    }

    fn move_cursor(&self, line: usize, column: usize) -> io::Result<()> {
        execute!(stdout(), cursor::MoveTo(column as u16, line as u16))
    }

    pub fn render(&mut self, frame: &Frame) -> io::Result<()> {
        self.render_count += 1;

        // Force full redraw every 50 renders to prevent state drift
        if self.render_count % 50 == 0 {
            self.needs_full_redraw = true;
        }

        let size = (frame.width, frame.height());
        if self.last_size != size {
            self.needs_full_redraw = true;
            self.last_size = size;
        }

        if self.needs_full_redraw {
            self.clear_screen()?;
            self.needs_full_redraw = false;
            self.last_lines.clear();
        }

        let lines: Vec<String> = frame.lines.iter().map(|line| self.paint(line)).collect();

        // Only redraw changed lines
        for (i, line) in lines.iter().enumerate() {
            if i >= self.last_lines.len() || self.last_lines[i] != *line {
                self.move_cursor(i, 0)?;
                execute!(stdout(), Clear(ClearType::CurrentLine))?;
                print!("{line}");
            }
        }

        self.last_lines = lines;
        stdout().flush()?;
        Ok(())
    }

    pub fn force_redraw(&mut self) {
        self.needs_full_redraw = true;
    }

    /// Turn a styled line into text with terminal escape sequences
    fn paint(&self, line: &StyledLine) -> String {
        let mut out = String::new();
        for span in &line.spans {
            let style = span.style;
            let mut styled = false;

            if style.accent && self.color {
                let _ = write!(out, "{}", SetForegroundColor(ACCENT));
                styled = true;
            }
            for (on, attribute) in [
                (style.bold, Attribute::Bold),
                (style.dim, Attribute::Dim),
                (style.underline, Attribute::Underlined),
                (style.reverse, Attribute::Reverse),
            ] {
                if on {
                    let _ = write!(out, "{}", SetAttribute(attribute));
                    styled = true;
                }
            }

            out.push_str(&span.text);
            if styled {
                let _ = write!(out, "{}", SetAttribute(Attribute::Reset));
            }
        }
        out
    }
}
