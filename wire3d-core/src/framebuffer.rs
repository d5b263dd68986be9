/// Frame buffer of glyph + style cells
///
/// A cell keeps the glyph and its presentation apart; colour only turns into
/// escape sequences when a presenter flattens the buffer.
use crate::projection::{ScreenPoint, Viewport};

/// Foreground colours from the 256-colour palette used by the built-in skins.
pub mod palette {
    pub const GREEN: u8 = 2;
    pub const AMBER: u8 = 3;
    pub const CYAN: u8 = 6;
    pub const WHITE: u8 = 7;
    pub const BRIGHT_CYAN: u8 = 14;
    pub const BRIGHT_WHITE: u8 = 15;

    pub const NEON: [u8; 5] = [196, 51, 46, 226, 201];

    pub const PLASMA_YELLOW: u8 = 226;
    pub const PLASMA_ORANGE: u8 = 208;
    pub const PLASMA_RED: u8 = 196;
    pub const PLASMA_PURPLE: u8 = 129;
    pub const PLASMA_BLUE: u8 = 21;
}

/// Presentation attributes of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    /// 256-colour palette index; `None` keeps the terminal default.
    pub fg: Option<u8>,
    pub bold: bool,
    pub dim: bool,
    pub blink: bool,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle {
        fg: None,
        bold: false,
        dim: false,
        blink: false,
    };

    pub const fn fg(color: u8) -> Self {
        Self {
            fg: Some(color),
            bold: false,
            dim: false,
            blink: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// One grid cell: a glyph and how to paint it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub glyph: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell::plain(' ');

    pub const fn plain(glyph: char) -> Self {
        Self {
            glyph,
            style: CellStyle::PLAIN,
        }
    }

    pub const fn styled(glyph: char, style: CellStyle) -> Self {
        Self { glyph, style }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// `width x height` grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(viewport: Viewport) -> Self {
        let len = viewport.width as usize * viewport.height as usize;
        Self {
            width: viewport.width,
            height: viewport.height,
            cells: vec![Cell::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    fn idx(&self, p: ScreenPoint) -> Option<usize> {
        if self.viewport().contains(p) {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, p: ScreenPoint) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `p`. Returns `false` (and writes nothing) when
    /// `p` lies outside the grid.
    pub fn set(&mut self, p: ScreenPoint, cell: Cell) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Write `cell` into every blank cell of row `y`.
    pub fn fill_blank_row(&mut self, y: u16, cell: Cell) {
        if y >= self.height {
            return;
        }
        let start = y as usize * self.width as usize;
        for slot in &mut self.cells[start..start + self.width as usize] {
            if slot.is_blank() {
                *slot = cell;
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of non-blank cells.
    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_blank()).count()
    }

    /// Glyphs only, rows joined by `\n`, no trailing newline.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|c| c.glyph));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb(w: u16, h: u16) -> FrameBuffer {
        FrameBuffer::new(Viewport::new(w, h).unwrap())
    }

    #[test]
    fn test_new_is_blank() {
        let fb = fb(4, 3);
        assert_eq!(fb.painted(), 0);
        assert_eq!(fb.to_plain_text(), "    \n    \n    ");
    }

    #[test]
    fn test_set_ignores_out_of_bounds() {
        let mut fb = fb(4, 3);
        assert!(!fb.set(ScreenPoint::new(4, 0), Cell::plain('#')));
        assert!(!fb.set(ScreenPoint::new(0, -1), Cell::plain('#')));
        assert!(fb.set(ScreenPoint::new(3, 2), Cell::plain('#')));
        assert_eq!(fb.painted(), 1);
        assert_eq!(fb.get(ScreenPoint::new(3, 2)), Some(Cell::plain('#')));
        assert_eq!(fb.get(ScreenPoint::new(9, 9)), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut fb = fb(2, 1);
        let p = ScreenPoint::new(1, 0);
        fb.set(p, Cell::plain('a'));
        fb.set(p, Cell::styled('b', CellStyle::fg(palette::GREEN)));
        assert_eq!(fb.get(p).unwrap().glyph, 'b');
        assert_eq!(fb.get(p).unwrap().style.fg, Some(palette::GREEN));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut fb = fb(3, 3);
        fb.set(ScreenPoint::new(1, 1), Cell::plain('x'));
        fb.clear();
        assert_eq!(fb.painted(), 0);
    }

    #[test]
    fn test_fill_blank_row_keeps_existing_cells() {
        let mut fb = fb(4, 2);
        fb.set(ScreenPoint::new(2, 1), Cell::plain('o'));
        fb.fill_blank_row(1, Cell::plain('-'));
        fb.fill_blank_row(7, Cell::plain('-'));
        assert_eq!(fb.to_plain_text(), "    \n--o-");
    }

    #[test]
    fn test_style_builders() {
        let style = CellStyle::fg(palette::CYAN).bold().dim();
        assert!(style.bold && style.dim && !style.blink);
        assert!(CellStyle::default().is_plain());
    }
}
