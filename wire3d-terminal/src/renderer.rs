/// ANSI presenter: flattens a frame buffer into terminal output
use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};
use wire3d_core::{Banner, CellStyle, FrameBuffer};

use crate::hud::Hud;

/// Writes whole frames, one after another, to any writer.
///
/// Every frame starts with a cursor-home so it overdraws the previous one in
/// place. Styles are only emitted when they change between neighbouring cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPresenter {
    /// Also clear the whole screen before each frame.
    pub full_clear: bool,
}

impl AnsiPresenter {
    pub fn new(full_clear: bool) -> Self {
        Self { full_clear }
    }

    /// Clear the screen and hide the cursor before the first frame.
    pub fn begin<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.queue(terminal::Clear(terminal::ClearType::All))?;
        writer.queue(cursor::Hide)?;
        writer.flush()
    }

    /// Restore the cursor and colours, then print the farewell below the last frame.
    pub fn finish<W: Write>(&self, writer: &mut W, farewell: Option<&Banner>) -> io::Result<()> {
        writer.queue(ResetColor)?;
        writer.queue(SetAttribute(Attribute::Reset))?;
        writer.queue(cursor::Show)?;
        writer.queue(Print('\n'))?;
        if let Some(banner) = farewell {
            if !banner.style.is_plain() {
                apply_style(writer, banner.style)?;
            }
            writer.queue(Print(&banner.text))?;
            writer.queue(ResetColor)?;
            writer.queue(SetAttribute(Attribute::Reset))?;
            writer.queue(Print('\n'))?;
        }
        writer.flush()
    }

    pub fn draw<W: Write>(
        &self,
        writer: &mut W,
        fb: &FrameBuffer,
        hud: Option<&Hud>,
    ) -> io::Result<()> {
        writer.queue(cursor::MoveTo(0, 0))?;
        if self.full_clear {
            writer.queue(terminal::Clear(terminal::ClearType::All))?;
        }

        if let Some(hud) = hud {
            if !hud.title.style.is_plain() {
                apply_style(writer, hud.title.style)?;
            }
            writer.queue(Print(&hud.title.text))?;
            writer.queue(SetAttribute(Attribute::Reset))?;
            writer.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
            writer.queue(Print('\n'))?;
        }

        let mut current: Option<CellStyle> = None;
        for (y, row) in fb.rows().enumerate() {
            if y > 0 {
                writer.queue(Print('\n'))?;
            }
            for cell in row {
                if current != Some(cell.style) {
                    apply_style(writer, cell.style)?;
                    current = Some(cell.style);
                }
                writer.queue(Print(cell.glyph))?;
            }
        }
        writer.queue(ResetColor)?;
        writer.queue(SetAttribute(Attribute::Reset))?;

        if let Some(hud) = hud {
            writer.queue(Print('\n'))?;
            writer.queue(Print(&hud.status))?;
            // The status shrinks when an angle wraps; drop the old tail.
            writer.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        }

        writer.flush()
    }
}

fn apply_style<W: Write>(writer: &mut W, style: CellStyle) -> io::Result<()> {
    writer.queue(SetAttribute(Attribute::Reset))?;
    if let Some(index) = style.fg {
        writer.queue(SetForegroundColor(Color::AnsiValue(index)))?;
    }
    if style.bold {
        writer.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        writer.queue(SetAttribute(Attribute::Dim))?;
    }
    if style.blink {
        writer.queue(SetAttribute(Attribute::SlowBlink))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::{palette, Cell, ScreenPoint, Viewport};

    fn render(presenter: AnsiPresenter, fb: &FrameBuffer, hud: Option<&Hud>) -> String {
        let mut out = Vec::new();
        presenter.draw(&mut out, fb, hud).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn small() -> FrameBuffer {
        let mut fb = FrameBuffer::new(Viewport::new(3, 2).unwrap());
        fb.set(ScreenPoint::new(1, 0), Cell::plain('#'));
        fb.set(ScreenPoint::new(2, 1), Cell::styled('@', CellStyle::fg(palette::NEON[0]).bold()));
        fb
    }

    #[test]
    fn test_frame_starts_with_cursor_home() {
        let out = render(AnsiPresenter::new(false), &small(), None);
        assert!(out.starts_with("\x1b[1;1H"));
        assert!(!out.contains("\x1b[2J"));

        let cleared = render(AnsiPresenter::new(true), &small(), None);
        assert!(cleared.starts_with("\x1b[1;1H\x1b[2J"));
    }

    #[test]
    fn test_rows_are_newline_separated() {
        let out = render(AnsiPresenter::default(), &small(), None);
        assert_eq!(out.matches('\n').count(), 1);
        assert!(out.contains(" # "));
    }

    #[test]
    fn test_styles_become_sgr() {
        let out = render(AnsiPresenter::default(), &small(), None);
        assert!(out.contains("\x1b[38;5;196m"));
        assert!(out.contains("\x1b[1m@"));
        // Emitted once per run of equally styled cells.
        assert_eq!(out.matches("\x1b[38;5;196m").count(), 1);
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_hud_lines_clear_their_tail() {
        let hud = Hud {
            title: Banner::plain("TITLE"),
            status: "X: 0.0° Y: 2.0°".to_string(),
        };
        let out = render(AnsiPresenter::default(), &small(), Some(&hud));
        assert!(out.starts_with("\x1b[1;1HTITLE\x1b[0m\x1b[K\n"));
        assert!(out.ends_with("X: 0.0° Y: 2.0°\x1b[K"));
    }

    #[test]
    fn test_finish_shows_cursor_and_prints_farewell() {
        let mut out = Vec::new();
        AnsiPresenter::default()
            .finish(&mut out, Some(&Banner::plain("Exiting...")))
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\x1b[?25h"));
        // Plain banners carry no SGR of their own.
        assert!(out.contains("\x1b[?25h\nExiting...\x1b[0m\x1b[0m\n"));
    }
}
