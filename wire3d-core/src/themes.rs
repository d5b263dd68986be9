/// The built-in skins
///
/// Each skin is built for one [`ShapeKind`] and picks glyphs from the edge
/// role, the edge index and the frame counter. Everything here is a pure
/// function of its inputs, so two runs with the same settings draw the same
/// frames.
use crate::framebuffer::{palette, Cell, CellStyle, FrameBuffer};
use crate::geometry::{EdgeRole, ShapeKind};
use crate::projection::ScreenPoint;
use crate::skin::{Banner, Skin, StrokeContext, VertexContext};

/// Coin edges come in (front, back, rim) triples, one per ring position.
fn ring_position(ctx: &StrokeContext) -> usize {
    ctx.edge / 3
}

/// Line glyph for a whole segment: the dominant axis wins, ties are diagonals.
fn segment_glyph(dx: i32, dy: i32) -> char {
    let (adx, ady) = (dx.unsigned_abs(), dy.unsigned_abs());
    if adx > ady {
        '─'
    } else if ady > adx {
        '│'
    } else if (dx as i64) * (dy as i64) > 0 {
        '╲'
    } else {
        '╱'
    }
}

fn boxed(text: &str, corners: [char; 6]) -> String {
    let [tl, tr, bl, br, horizontal, vertical] = corners;
    let width = text.chars().count() + 6;
    let rule: String = std::iter::repeat(horizontal).take(width).collect();
    format!("{tl}{rule}{tr}\n{vertical}   {text}   {vertical}\n{bl}{rule}{br}")
}

fn shouting(text: &str) -> String {
    format!(">>> {text} <<<")
}

#[derive(Debug, Clone, Copy)]
pub struct Classic {
    kind: ShapeKind,
}

impl Classic {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }
}

impl Skin for Classic {
    fn stroke(&self, ctx: &StrokeContext, _at: ScreenPoint) -> Cell {
        match (self.kind, ctx.role) {
            (ShapeKind::Coin, EdgeRole::Bridge) => Cell::plain('#'),
            (ShapeKind::Coin, _) | (ShapeKind::Sphere, _) => Cell::plain('.'),
            (ShapeKind::Cube, _) => Cell::plain('#'),
        }
    }

    fn vertex(&self, _vertex: &VertexContext) -> Option<Cell> {
        match self.kind {
            ShapeKind::Coin => None,
            ShapeKind::Cube => Some(Cell::plain('@')),
            ShapeKind::Sphere => Some(Cell::plain('o')),
        }
    }

    fn title(&self) -> Banner {
        Banner::plain(match self.kind {
            ShapeKind::Coin => "SPINNING COIN",
            ShapeKind::Cube => "ROTATING CUBE",
            ShapeKind::Sphere => "ROTATING SPHERE",
        })
    }

    fn farewell(&self) -> Option<Banner> {
        Some(Banner::plain("Exiting..."))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Minimal {
    kind: ShapeKind,
}

impl Minimal {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }
}

impl Skin for Minimal {
    fn stroke(&self, _ctx: &StrokeContext, _at: ScreenPoint) -> Cell {
        Cell::plain('·')
    }

    fn vertex(&self, vertex: &VertexContext) -> Option<Cell> {
        if self.kind == ShapeKind::Coin && !vertex.in_front_half() {
            return None;
        }
        Some(Cell::plain('○'))
    }

    fn title(&self) -> Banner {
        Banner::plain(format!("· {} ·", self.kind))
    }

    fn farewell(&self) -> Option<Banner> {
        None
    }
}

const ASCII_VERTICES: [char; 8] = ['◊', '◈', '◇', '◆', '○', '●', '□', '■'];

#[derive(Debug, Clone, Copy)]
pub struct Ascii {
    kind: ShapeKind,
}

impl Ascii {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }
}

impl Skin for Ascii {
    fn stroke(&self, ctx: &StrokeContext, _at: ScreenPoint) -> Cell {
        let glyph = match (self.kind, ctx.role) {
            (ShapeKind::Coin, EdgeRole::Front) => '━',
            (ShapeKind::Coin, EdgeRole::Back) => '┅',
            (ShapeKind::Coin, _) => '┃',
            (ShapeKind::Cube, EdgeRole::Back) => '·',
            (ShapeKind::Cube, EdgeRole::Front) => '━',
            (ShapeKind::Cube, _) => '│',
            (ShapeKind::Sphere, _) => {
                let (dx, dy) = ctx.delta();
                segment_glyph(dx, dy)
            }
        };
        Cell::plain(glyph)
    }

    fn vertex(&self, vertex: &VertexContext) -> Option<Cell> {
        match self.kind {
            ShapeKind::Coin => None,
            _ => Some(Cell::plain(ASCII_VERTICES[vertex.index % ASCII_VERTICES.len()])),
        }
    }

    fn center(&self, _frame: u64, _at: ScreenPoint) -> Option<Cell> {
        (self.kind == ShapeKind::Coin).then_some(Cell::plain('$'))
    }

    fn title(&self) -> Banner {
        Banner::plain(format!("ASCII ART {}", self.kind.name().to_uppercase()))
    }

    fn farewell(&self) -> Option<Banner> {
        let text = match self.kind {
            ShapeKind::Coin => "COIN STOPPED",
            ShapeKind::Cube => "PROGRAM ENDED",
            ShapeKind::Sphere => "SPHERE STOPPED",
        };
        Some(Banner::plain(boxed(text, ['╔', '╗', '╚', '╝', '═', '║'])))
    }
}

const WIREFRAME_VERTICES: [char; 8] = ['┌', '┐', '┘', '└', '┬', '┤', '┴', '├'];

/// Drafting-table look: a dotted grid behind direction-aware strokes.
#[derive(Debug, Clone, Copy)]
pub struct Wireframe {
    kind: ShapeKind,
}

impl Wireframe {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    fn grid_spacing(&self) -> usize {
        match self.kind {
            ShapeKind::Cube => 8,
            _ => 6,
        }
    }
}

impl Skin for Wireframe {
    fn stroke(&self, ctx: &StrokeContext, at: ScreenPoint) -> Cell {
        // Axis dominance is judged on the whole segment (2:1), the diagonal
        // direction on what is left of it from `at`.
        let (dx, dy) = ctx.delta();
        let (adx, ady) = (dx.unsigned_abs() as u64, dy.unsigned_abs() as u64);
        let glyph = if adx > ady * 2 {
            '─'
        } else if ady > adx * 2 {
            '│'
        } else {
            let rx = ctx.to.x as i64 - at.x as i64;
            let ry = ctx.to.y as i64 - at.y as i64;
            if rx * ry > 0 {
                '╲'
            } else {
                '╱'
            }
        };
        Cell::plain(glyph)
    }

    fn vertex(&self, vertex: &VertexContext) -> Option<Cell> {
        if self.kind == ShapeKind::Coin && !vertex.in_front_half() {
            return None;
        }
        Some(Cell::plain(
            WIREFRAME_VERTICES[vertex.index % WIREFRAME_VERTICES.len()],
        ))
    }

    fn backdrop(&self, fb: &mut FrameBuffer, _frame: u64) {
        let spacing = self.grid_spacing();
        let (width, height) = (fb.width() as i32, fb.height() as i32);
        for y in 0..height {
            for x in 0..width {
                if x as usize % spacing == 0 || y as usize % spacing == 0 {
                    fb.set(ScreenPoint::new(x, y), Cell::plain('·'));
                }
            }
        }
    }

    fn title(&self) -> Banner {
        Banner::plain(match self.kind {
            ShapeKind::Coin => "WIREFRAME TECHNICAL COIN",
            ShapeKind::Cube => "WIREFRAME TECHNICAL VIEW",
            ShapeKind::Sphere => "WIREFRAME TECHNICAL SPHERE",
        })
    }

    fn farewell(&self) -> Option<Banner> {
        let text = match self.kind {
            ShapeKind::Coin => "COIN WIREFRAME HALTED",
            ShapeKind::Cube => "WIREFRAME HALTED",
            ShapeKind::Sphere => "SPHERE WIREFRAME HALTED",
        };
        Some(Banner::plain(boxed(text, ['┌', '┐', '└', '┘', '─', '│'])))
    }
}

const RETRO_BLOCKS: [char; 8] = ['█', '▓', '▒', '░', '■', '□', '▪', '▫'];

/// Amber and green phosphor.
#[derive(Debug, Clone, Copy)]
pub struct Retro {
    kind: ShapeKind,
}

impl Retro {
    const AMBER: CellStyle = CellStyle::fg(palette::AMBER);
    const GREEN: CellStyle = CellStyle::fg(palette::GREEN);

    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    fn alternating(edge: usize) -> CellStyle {
        if edge % 2 == 0 {
            Self::AMBER
        } else {
            Self::GREEN
        }
    }
}

impl Skin for Retro {
    fn stroke(&self, ctx: &StrokeContext, _at: ScreenPoint) -> Cell {
        match self.kind {
            ShapeKind::Coin => match ctx.role {
                EdgeRole::Front => Cell::styled('$', Self::AMBER),
                EdgeRole::Back => Cell::styled('.', Self::GREEN),
                _ => Cell::styled('|', Self::AMBER),
            },
            ShapeKind::Cube => Cell::styled(
                RETRO_BLOCKS[ctx.edge % RETRO_BLOCKS.len()],
                Self::alternating(ctx.edge),
            ),
            ShapeKind::Sphere => {
                let glyph = if ctx.edge % 3 == 0 { '*' } else { '.' };
                Cell::styled(glyph, Self::alternating(ctx.edge))
            }
        }
    }

    fn vertex(&self, _vertex: &VertexContext) -> Option<Cell> {
        match self.kind {
            ShapeKind::Coin => None,
            ShapeKind::Cube => Some(Cell::styled('●', Self::AMBER)),
            ShapeKind::Sphere => Some(Cell::styled('o', Self::AMBER)),
        }
    }

    fn title(&self) -> Banner {
        Banner::new(
            format!("RETRO {} v1.0", self.kind.name().to_uppercase()),
            Self::AMBER,
        )
    }

    fn farewell(&self) -> Option<Banner> {
        let text = match self.kind {
            ShapeKind::Coin => "COIN TOSS COMPLETE",
            ShapeKind::Cube => "SYSTEM HALT",
            ShapeKind::Sphere => "SPHERE ROTATION HALTED",
        };
        Some(Banner::new(shouting(text), Self::AMBER))
    }
}

/// Synthwave palette cycling with the frame counter.
#[derive(Debug, Clone, Copy)]
pub struct Neon {
    kind: ShapeKind,
}

impl Neon {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    fn color(index: usize) -> CellStyle {
        CellStyle::fg(palette::NEON[index % palette::NEON.len()])
    }
}

impl Skin for Neon {
    fn stroke(&self, ctx: &StrokeContext, _at: ScreenPoint) -> Cell {
        let f = ctx.frame;
        match self.kind {
            ShapeKind::Coin => {
                let i = ring_position(ctx) as u64;
                let idx = ((f + i * 5) / 10) as usize;
                match ctx.role {
                    EdgeRole::Front => {
                        let pulse = (f as f64 * 0.1 + i as f64 * 0.3).sin().abs();
                        let glyph = if pulse > 0.7 { '◆' } else { '♦' };
                        Cell::styled(glyph, Self::color(idx))
                    }
                    EdgeRole::Back => Cell::styled('○', Self::color(idx + 2)),
                    _ => Cell::styled('│', Self::color(idx + 1)),
                }
            }
            ShapeKind::Cube => {
                let i = ctx.edge as u64;
                let pulse = (f as f64 * 0.1 + i as f64).sin().abs();
                let glyph = if pulse > 0.8 {
                    '█'
                } else if pulse > 0.5 {
                    '▓'
                } else {
                    '▒'
                };
                Cell::styled(glyph, Self::color(((f + i * 10) / 20) as usize))
            }
            ShapeKind::Sphere => {
                let i = ctx.edge as u64;
                let pulse = (f as f64 * 0.08 + i as f64 * 0.2).sin().abs();
                let glyph = if pulse > 0.8 {
                    '█'
                } else if pulse > 0.5 {
                    '▓'
                } else if pulse > 0.2 {
                    '▒'
                } else {
                    '░'
                };
                Cell::styled(glyph, Self::color(((f + i * 3) / 15) as usize))
            }
        }
    }

    fn vertex(&self, vertex: &VertexContext) -> Option<Cell> {
        let style = Self::color(vertex.index);
        match self.kind {
            ShapeKind::Coin => None,
            ShapeKind::Cube => Some(Cell::styled('◉', style)),
            ShapeKind::Sphere => {
                let pulse = (vertex.frame as f64 * 0.12 + vertex.index as f64 * 0.1)
                    .sin()
                    .abs();
                let glyph = if pulse > 0.7 { '◉' } else { '○' };
                Some(Cell::styled(glyph, style))
            }
        }
    }

    fn center(&self, frame: u64, _at: ScreenPoint) -> Option<Cell> {
        (self.kind == ShapeKind::Coin)
            .then(|| Cell::styled('$', Self::color((frame / 8) as usize)))
    }

    fn title(&self) -> Banner {
        Banner::new(
            format!("NEON {} SYNTHWAVE", self.kind.name().to_uppercase()),
            Self::color(0).bold(),
        )
    }

    fn farewell(&self) -> Option<Banner> {
        let text = match self.kind {
            ShapeKind::Coin => "NEON COIN SHUTDOWN",
            ShapeKind::Cube => "NEON SHUTDOWN",
            ShapeKind::Sphere => "NEON SPHERE SHUTDOWN",
        };
        Some(Banner::new(shouting(text), Self::color(0)))
    }
}

/// Shades of terminal green.
#[derive(Debug, Clone, Copy)]
pub struct Matrix {
    kind: ShapeKind,
}

impl Matrix {
    const BRIGHT: CellStyle = CellStyle::fg(palette::GREEN).bold();
    const GREEN: CellStyle = CellStyle::fg(palette::GREEN);
    const DIM: CellStyle = CellStyle::fg(palette::GREEN).dim();
    const WHITE: CellStyle = CellStyle::fg(palette::WHITE).bold();

    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }
}

impl Skin for Matrix {
    fn stroke(&self, ctx: &StrokeContext, _at: ScreenPoint) -> Cell {
        if self.kind == ShapeKind::Sphere {
            return match ctx.edge % 3 {
                0 => Cell::styled('░', Self::DIM),
                1 => Cell::styled('▒', Self::GREEN),
                _ => Cell::styled('█', Self::BRIGHT),
            };
        }
        match ctx.role {
            EdgeRole::Front => Cell::styled('█', Self::BRIGHT),
            EdgeRole::Back => Cell::styled('░', Self::DIM),
            _ => Cell::styled('▓', Self::GREEN),
        }
    }

    fn vertex(&self, _vertex: &VertexContext) -> Option<Cell> {
        match self.kind {
            ShapeKind::Coin => None,
            ShapeKind::Cube => Some(Cell::styled('◉', Self::WHITE)),
            ShapeKind::Sphere => Some(Cell::styled('◉', Self::BRIGHT)),
        }
    }

    fn title(&self) -> Banner {
        let text = match self.kind {
            ShapeKind::Coin => "MATRIX COIN",
            ShapeKind::Cube => "THE MATRIX CUBE",
            ShapeKind::Sphere => "MATRIX SPHERE",
        };
        Banner::new(text, Self::BRIGHT)
    }

    fn farewell(&self) -> Option<Banner> {
        let text = match self.kind {
            ShapeKind::Coin => "DISCONNECTED FROM MATRIX",
            ShapeKind::Cube => "DISCONNECTED FROM THE MATRIX",
            ShapeKind::Sphere => "MATRIX SPHERE TERMINATED",
        };
        Some(Banner::new(shouting(text), Self::BRIGHT))
    }
}

/// Steady cyan projection with a scan line rolling down the grid.
#[derive(Debug, Clone, Copy)]
pub struct Hologram {
    kind: ShapeKind,
}

impl Hologram {
    const BRIGHT: CellStyle = CellStyle::fg(palette::BRIGHT_CYAN).bold();
    const DIM: CellStyle = CellStyle::fg(palette::CYAN).dim();
    const FLICKER: CellStyle = CellStyle::fg(palette::BRIGHT_CYAN).blink();

    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    /// Row covered by the scan line on `frame`; it moves every second frame.
    pub fn scan_row(frame: u64, height: u16) -> u16 {
        ((frame / 2) % height.max(1) as u64) as u16
    }
}

impl Skin for Hologram {
    fn stroke(&self, _ctx: &StrokeContext, _at: ScreenPoint) -> Cell {
        Cell::styled('█', Self::BRIGHT)
    }

    fn vertex(&self, vertex: &VertexContext) -> Option<Cell> {
        if self.kind == ShapeKind::Coin && !vertex.in_front_half() {
            return None;
        }
        Some(Cell::styled('◉', Self::BRIGHT))
    }

    fn backdrop(&self, fb: &mut FrameBuffer, frame: u64) {
        let row = Self::scan_row(frame, fb.height());
        fb.fill_blank_row(row, Cell::styled('─', Self::DIM));
    }

    fn title(&self) -> Banner {
        Banner::new(
            format!("HOLOGRAM {} PROJECTION", self.kind.name().to_uppercase()),
            Self::BRIGHT,
        )
    }

    fn farewell(&self) -> Option<Banner> {
        let text = match self.kind {
            ShapeKind::Coin => "HOLOGRAM COIN TERMINATED",
            ShapeKind::Cube => "HOLOGRAM PROJECTION TERMINATED",
            ShapeKind::Sphere => "HOLOGRAM SPHERE TERMINATED",
        };
        Some(Banner::new(shouting(text), Self::FLICKER))
    }
}

/// Colour of the three-wave plasma field at cell `(x, y)` and phase `t`.
pub fn plasma_color(x: f64, y: f64, t: f64) -> u8 {
    let wave1 = (x * 0.15 + t * 0.08).sin();
    let wave2 = (y * 0.12 + t * 0.05).sin();
    let wave3 = ((x + y) * 0.08 + t * 0.06).sin();
    let value = (wave1 + wave2 + wave3) / 3.0;
    if value > 0.5 {
        palette::PLASMA_YELLOW
    } else if value > 0.2 {
        palette::PLASMA_ORANGE
    } else if value > -0.2 {
        palette::PLASMA_RED
    } else if value > -0.5 {
        palette::PLASMA_PURPLE
    } else {
        palette::PLASMA_BLUE
    }
}

/// Shading block of the plasma field at cell `(x, y)` and phase `t`.
pub fn plasma_glyph(x: f64, y: f64, t: f64) -> char {
    let wave = (x * 0.1 + y * 0.08 + t * 0.05).sin();
    if wave > 0.3 {
        '█'
    } else if wave > 0.0 {
        '▓'
    } else if wave > -0.3 {
        '▒'
    } else {
        '░'
    }
}

/// Colour and shading sampled per cell from a moving plasma field.
#[derive(Debug, Clone, Copy)]
pub struct Plasma {
    kind: ShapeKind,
}

impl Plasma {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    /// Phase offset per role, so coin faces and rims shimmer out of step.
    fn phase_offset(&self, role: EdgeRole) -> u64 {
        match (self.kind, role) {
            (ShapeKind::Coin, EdgeRole::Back) => 20,
            (ShapeKind::Coin, EdgeRole::Bridge) => 10,
            _ => 0,
        }
    }

    /// Sparse dotted field: `(row step, column step, threshold)`.
    fn dust(&self) -> (usize, usize, f64) {
        match self.kind {
            ShapeKind::Coin => (3, 4, 0.6),
            _ => (2, 3, 0.7),
        }
    }
}

impl Skin for Plasma {
    fn stroke(&self, ctx: &StrokeContext, at: ScreenPoint) -> Cell {
        let t = (ctx.frame + self.phase_offset(ctx.role)) as f64;
        let (x, y) = (at.x as f64, at.y as f64);
        Cell::styled(plasma_glyph(x, y, t), CellStyle::fg(plasma_color(x, y, t)))
    }

    fn vertex(&self, vertex: &VertexContext) -> Option<Cell> {
        if self.kind == ShapeKind::Coin {
            return None;
        }
        let i = vertex.index as f64;
        let t = vertex.frame as f64;
        let color = plasma_color(vertex.at.x as f64, vertex.at.y as f64, t + i * 10.0);
        let pulse = (t * 0.1 + i).sin().abs();
        let glyph = if pulse > 0.7 {
            '◉'
        } else if pulse > 0.3 {
            '●'
        } else {
            '○'
        };
        Some(Cell::styled(glyph, CellStyle::fg(color)))
    }

    fn center(&self, frame: u64, at: ScreenPoint) -> Option<Cell> {
        if self.kind != ShapeKind::Coin {
            return None;
        }
        let color = plasma_color(at.x as f64, at.y as f64, frame as f64);
        Some(Cell::styled('$', CellStyle::fg(color)))
    }

    fn backdrop(&self, fb: &mut FrameBuffer, frame: u64) {
        let (row_step, col_step, threshold) = self.dust();
        let t = frame as f64;
        for y in (0..fb.height() as i32).step_by(row_step) {
            for x in (0..fb.width() as i32).step_by(col_step) {
                let (fx, fy) = (x as f64, y as f64);
                let intensity = (fx * 0.05 + fy * 0.03 + t * 0.02).sin().abs();
                if intensity > threshold {
                    let style = CellStyle::fg(plasma_color(fx, fy, t));
                    fb.set(ScreenPoint::new(x, y), Cell::styled('·', style));
                }
            }
        }
    }

    fn title(&self) -> Banner {
        let text = match self.kind {
            ShapeKind::Coin => "PLASMA COIN FIELD",
            ShapeKind::Cube => "PLASMA FIELD CUBE",
            ShapeKind::Sphere => "PLASMA SPHERE FIELD",
        };
        Banner::new(text, CellStyle::fg(palette::PLASMA_YELLOW))
    }

    fn farewell(&self) -> Option<Banner> {
        let text = match self.kind {
            ShapeKind::Coin => "PLASMA COIN DISSIPATED",
            ShapeKind::Cube => "PLASMA FIELD DISSIPATED",
            ShapeKind::Sphere => "PLASMA SPHERE DISSIPATED",
        };
        Some(Banner::new(
            shouting(text),
            CellStyle::fg(palette::PLASMA_ORANGE),
        ))
    }
}
