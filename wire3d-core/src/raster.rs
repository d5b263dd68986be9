/// Integer line rasterization (Bresenham)
use crate::framebuffer::{Cell, FrameBuffer};
use crate::projection::{ScreenPoint, Viewport};

/// Every cell on the path from `from` to `to`, both endpoints included.
///
/// Off-grid cells are yielded too; clipping is the caller's job.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    // i64 so that `2 * err` cannot overflow for any pair of i32 endpoints.
    x: i64,
    y: i64,
    end_x: i64,
    end_y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    pub fn new(from: ScreenPoint, to: ScreenPoint) -> Self {
        let (x0, y0) = (from.x as i64, from.y as i64);
        let (x1, y1) = (to.x as i64, to.y as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            end_x: x1,
            end_y: y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }

    /// True when x moves on every step.
    fn x_major(&self) -> bool {
        self.dx >= self.dy
    }

    /// Jump `steps` cells ahead, stopping at the end point.
    ///
    /// Leaves the walk in exactly the state `steps` calls to `next` would.
    /// The major axis moves once per step; the minor axis and the error term
    /// follow in closed form because the error stays inside a window one
    /// major-delta wide.
    pub fn skip_steps(&mut self, steps: i64) {
        let (major, minor, remaining) = if self.x_major() {
            (self.dx, self.dy, (self.end_x - self.x).abs())
        } else {
            (self.dy, self.dx, (self.end_y - self.y).abs())
        };
        let k = steps.min(remaining);
        if self.done || k <= 0 {
            return;
        }

        // Error seen from the major axis: y-major walks are x-major walks mirrored.
        let err = i128::from(if self.x_major() { self.err } else { -self.err });
        let (k, major, minor) = (k as i128, major as i128, minor as i128);
        let numerator = 2 * k * minor - 2 * minor - 2 * err + major;
        let minor_steps = -((-numerator).div_euclid(2 * major));
        let err = err - k * minor + minor_steps * major;

        // All three fit in i64: the position stays between the endpoints.
        let (k, minor_steps, err) = (k as i64, minor_steps as i64, err as i64);
        if self.x_major() {
            self.x += self.sx * k;
            self.y += self.sy * minor_steps;
            self.err = err;
        } else {
            self.y += self.sy * k;
            self.x += self.sx * minor_steps;
            self.err = -err;
        }
    }

    /// Only the cells inside `viewport`, in walk order.
    ///
    /// Runs of off-grid cells before the grid are skipped in one jump and the
    /// walk ends once the major axis has passed the grid, so the cost is
    /// bounded by the grid size however far away the endpoints are.
    pub fn within(mut self, viewport: Viewport) -> impl Iterator<Item = ScreenPoint> {
        let x_major = self.x_major();
        let (at, dir, extent) = if x_major {
            (self.x, self.sx, viewport.width as i64)
        } else {
            (self.y, self.sy, viewport.height as i64)
        };
        let lead_in = if dir > 0 { -at } else { at - (extent - 1) };
        self.skip_steps(lead_in);

        self.take_while(move |p| {
            let along = i64::from(if x_major { p.x } else { p.y });
            if dir > 0 {
                along < extent
            } else {
                along >= 0
            }
        })
        .filter(move |p| viewport.contains(*p))
    }
}

impl Iterator for BresenhamLine {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<ScreenPoint> {
        if self.done {
            return None;
        }
        // Always between the two i32 endpoints.
        let current = ScreenPoint::new(self.x as i32, self.y as i32);
        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Draw a line with a single cell token. Returns how many cells landed on the grid.
pub fn draw_line(fb: &mut FrameBuffer, from: ScreenPoint, to: ScreenPoint, cell: Cell) -> usize {
    draw_line_with(fb, from, to, |_| cell)
}

/// Draw a line, asking `paint` for the cell at each on-grid position.
pub fn draw_line_with<F>(
    fb: &mut FrameBuffer,
    from: ScreenPoint,
    to: ScreenPoint,
    mut paint: F,
) -> usize
where
    F: FnMut(ScreenPoint) -> Cell,
{
    let viewport = fb.viewport();
    let (min_x, max_x) = (from.x.min(to.x), from.x.max(to.x));
    let (min_y, max_y) = (from.y.min(to.y), from.y.max(to.y));
    if max_x < 0 || max_y < 0 || min_x >= viewport.width as i32 || min_y >= viewport.height as i32 {
        return 0;
    }

    let mut plotted = 0;
    for p in BresenhamLine::new(from, to).within(viewport) {
        fb.set(p, paint(p));
        plotted += 1;
    }
    plotted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3D;
    use crate::projection::Camera;

    fn fb(w: u16, h: u16) -> FrameBuffer {
        FrameBuffer::new(Viewport::new(w, h).unwrap())
    }

    fn p(x: i32, y: i32) -> ScreenPoint {
        ScreenPoint::new(x, y)
    }

    #[test]
    fn test_degenerate_line_plots_one_cell() {
        let mut fb = fb(10, 10);
        assert_eq!(draw_line(&mut fb, p(4, 7), p(4, 7), Cell::plain('#')), 1);
        assert_eq!(fb.painted(), 1);
        assert_eq!(fb.get(p(4, 7)).unwrap().glyph, '#');
    }

    #[test]
    fn test_horizontal_line() {
        let mut fb = fb(10, 10);
        draw_line(&mut fb, p(2, 5), p(6, 5), Cell::plain('#'));
        assert_eq!(fb.painted(), 5);
        for x in 2..=6 {
            assert_eq!(fb.get(p(x, 5)).unwrap().glyph, '#');
        }
    }

    #[test]
    fn test_line_outside_plots_nothing() {
        let mut fb = fb(10, 10);
        assert_eq!(draw_line(&mut fb, p(-20, -3), p(-2, -15), Cell::plain('#')), 0);
        assert_eq!(draw_line(&mut fb, p(12, 0), p(40, 9), Cell::plain('#')), 0);
        assert_eq!(fb.painted(), 0);
    }

    #[test]
    fn test_partially_visible_line_is_clipped() {
        let mut fb = fb(10, 10);
        assert_eq!(draw_line(&mut fb, p(-5, 3), p(4, 3), Cell::plain('#')), 5);
        assert_eq!(fb.painted(), 5);
    }

    #[test]
    fn test_far_endpoint_is_cheap_to_draw() {
        let viewport = Viewport::new(80, 40).unwrap();
        let camera = Camera::new(40.0, 4.0).unwrap();
        // Just in front of the camera plane: projects to the edge of i32.
        let far = camera.project(&Point3D::new(1.0, 0.0, -3.99999999), viewport);
        assert_eq!(far, p(i32::MAX, 20));

        let mut fb = FrameBuffer::new(viewport);
        assert_eq!(draw_line(&mut fb, p(40, 20), far, Cell::plain('#')), 40);
        assert_eq!(draw_line(&mut fb, far, p(40, 20), Cell::plain('#')), 40);
        assert_eq!(fb.painted(), 40);
    }

    #[test]
    fn test_skip_matches_stepping() {
        for (from, to) in [
            (p(0, 0), p(17, 5)),
            (p(3, -2), p(-9, 30)),
            (p(-4, 4), p(4, -4)),
            (p(10, 0), p(-25, -11)),
        ] {
            let walked: Vec<_> = BresenhamLine::new(from, to).collect();
            for k in 0..walked.len() {
                let mut line = BresenhamLine::new(from, to);
                line.skip_steps(k as i64);
                assert_eq!(line.next(), Some(walked[k]), "{from:?} -> {to:?} after {k}");
            }
        }
    }

    #[test]
    fn test_diagonal_and_reverse() {
        let forward: Vec<_> = BresenhamLine::new(p(0, 0), p(3, 3)).collect();
        assert_eq!(forward, vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3)]);

        let backward: Vec<_> = BresenhamLine::new(p(3, 0), p(0, 0)).collect();
        assert_eq!(backward, vec![p(3, 0), p(2, 0), p(1, 0), p(0, 0)]);
    }

    #[test]
    fn test_steep_line_visits_every_row() {
        let points: Vec<_> = BresenhamLine::new(p(1, 0), p(3, 7)).collect();
        assert_eq!(points.len(), 8);
        for (row, pt) in points.iter().enumerate() {
            assert_eq!(pt.y, row as i32);
        }
    }

    #[test]
    fn test_paint_callback_sees_positions() {
        let mut fb = fb(5, 1);
        draw_line_with(&mut fb, p(0, 0), p(4, 0), |at| {
            Cell::plain(char::from_digit(at.x as u32, 10).unwrap_or('?'))
        });
        assert_eq!(fb.to_plain_text(), "01234");
    }
}
