/// Pluggable per-cell styling
///
/// A [`Skin`] decides what every plotted cell looks like. The animation asks it
/// for a cell at each position a stroke covers, for each vertex marker, for the
/// optional centre symbol and for a backdrop painted before any geometry.
/// Skins never touch geometry; they only choose glyphs and styles.
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::framebuffer::{Cell, CellStyle, FrameBuffer};
use crate::geometry::{EdgeRole, ShapeKind};
use crate::projection::ScreenPoint;
use crate::themes;

/// Everything a skin may know about the edge being stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeContext {
    /// Position of the edge in the shape's edge list.
    pub edge: usize,
    pub role: EdgeRole,
    pub from: ScreenPoint,
    pub to: ScreenPoint,
    pub frame: u64,
}

impl StrokeContext {
    /// Signed extent of the whole segment.
    pub fn delta(&self) -> (i32, i32) {
        (
            self.to.x.saturating_sub(self.from.x),
            self.to.y.saturating_sub(self.from.y),
        )
    }
}

/// A projected vertex about to be marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexContext {
    pub index: usize,
    /// Total number of points in the shape.
    pub count: usize,
    pub at: ScreenPoint,
    pub frame: u64,
}

impl VertexContext {
    /// True for the first half of the points, which is the front ring of a coin.
    pub fn in_front_half(&self) -> bool {
        self.index < self.count / 2
    }
}

/// A line of text shown around the grid (title, farewell).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub style: CellStyle,
}

impl Banner {
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, CellStyle::PLAIN)
    }
}

/// Glyph and colour policy for one shape.
pub trait Skin: fmt::Debug {
    /// Cell for position `at` on the edge described by `ctx`.
    fn stroke(&self, ctx: &StrokeContext, at: ScreenPoint) -> Cell;

    /// Marker drawn over a projected vertex, after all edges.
    fn vertex(&self, _vertex: &VertexContext) -> Option<Cell> {
        None
    }

    /// Symbol placed at the viewport centre, after vertices.
    fn center(&self, _frame: u64, _at: ScreenPoint) -> Option<Cell> {
        None
    }

    /// Painted into the cleared buffer before any geometry.
    fn backdrop(&self, _fb: &mut FrameBuffer, _frame: u64) {}

    fn title(&self) -> Banner;

    /// Printed once after the animation stops.
    fn farewell(&self) -> Option<Banner>;
}

/// The built-in skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Classic,
    Minimal,
    Ascii,
    Wireframe,
    Retro,
    Neon,
    Matrix,
    Hologram,
    Plasma,
}

impl Theme {
    pub const ALL: [Theme; 9] = [
        Theme::Classic,
        Theme::Minimal,
        Theme::Ascii,
        Theme::Wireframe,
        Theme::Retro,
        Theme::Neon,
        Theme::Matrix,
        Theme::Hologram,
        Theme::Plasma,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Minimal => "minimal",
            Theme::Ascii => "ascii",
            Theme::Wireframe => "wireframe",
            Theme::Retro => "retro",
            Theme::Neon => "neon",
            Theme::Matrix => "matrix",
            Theme::Hologram => "hologram",
            Theme::Plasma => "plasma",
        }
    }

    /// Instantiate this theme's skin for `kind`.
    pub fn skin(self, kind: ShapeKind) -> Box<dyn Skin> {
        debug!(theme = self.name(), %kind, "selecting skin");
        match self {
            Theme::Classic => Box::new(themes::Classic::new(kind)),
            Theme::Minimal => Box::new(themes::Minimal::new(kind)),
            Theme::Ascii => Box::new(themes::Ascii::new(kind)),
            Theme::Wireframe => Box::new(themes::Wireframe::new(kind)),
            Theme::Retro => Box::new(themes::Retro::new(kind)),
            Theme::Neon => Box::new(themes::Neon::new(kind)),
            Theme::Matrix => Box::new(themes::Matrix::new(kind)),
            Theme::Hologram => Box::new(themes::Hologram::new(kind)),
            Theme::Plasma => Box::new(themes::Plasma::new(kind)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        // "mono" was the old name of the classic look.
        if wanted.eq_ignore_ascii_case("mono") {
            return Ok(Theme::Classic);
        }
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownTheme(s.to_string()))
    }
}
