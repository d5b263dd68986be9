/// Camera and perspective projection onto the character grid
use nalgebra::Point2;

use crate::error::{positive, Error, Result};
use crate::geometry::Point3D;

/// Integer cell coordinate. Only meaningful inside `[0, width) x [0, height)`.
pub type ScreenPoint = Point2<i32>;

/// Depth used whenever `z + distance` is at or below zero.
pub const DEPTH_EPSILON: f64 = 0.1;

/// Character grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn contains(&self, p: ScreenPoint) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width as i32 && p.y < self.height as i32
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width as i32 / 2, self.height as i32 / 2)
    }
}

/// Pinhole camera looking down +z from `distance` units away.
///
/// `scale_y` is kept separate from `scale_x` because terminal cells are
/// roughly twice as tall as they are wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub scale_x: f64,
    pub scale_y: f64,
    pub distance: f64,
}

impl Camera {
    /// Camera with a single FOV scale, halved vertically.
    pub fn new(fov: f64, distance: f64) -> Result<Self> {
        Self::with_scales(fov, fov * 0.5, distance)
    }

    pub fn with_scales(scale_x: f64, scale_y: f64, distance: f64) -> Result<Self> {
        Ok(Self {
            scale_x: positive("horizontal scale", scale_x)?,
            scale_y: positive("vertical scale", scale_y)?,
            distance: positive("camera distance", distance)?,
        })
    }

    /// `z + distance`, clamped to [`DEPTH_EPSILON`] when not positive.
    pub fn depth(&self, z: f64) -> f64 {
        let depth = z + self.distance;
        if depth <= 0.0 {
            DEPTH_EPSILON
        } else {
            depth
        }
    }

    /// Project a rotated point to a cell. The result may lie outside the viewport.
    pub fn project(&self, point: &Point3D, viewport: Viewport) -> ScreenPoint {
        let depth = self.depth(point.z);
        let center = viewport.center();
        // `as` saturates on overflow and maps NaN to 0.
        let x = (point.x * self.scale_x / depth).trunc() as i32;
        let y = (point.y * self.scale_y / depth).trunc() as i32;
        ScreenPoint::new(x.saturating_add(center.x), y.saturating_add(center.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(80, 40).unwrap()
    }

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(40.0, 4.0).unwrap();
        assert_eq!(camera.scale_x, 40.0);
        assert_eq!(camera.scale_y, 20.0);
        assert!(Camera::new(40.0, 0.0).is_err());
    }

    #[test]
    fn test_origin_lands_on_center() {
        let camera = Camera::new(40.0, 4.0).unwrap();
        assert_eq!(camera.project(&Point3D::origin(), viewport()), ScreenPoint::new(40, 20));
    }

    #[test]
    fn test_truncates_toward_zero() {
        let camera = Camera::with_scales(10.0, 10.0, 4.0).unwrap();
        // x: 1.5 * 10 / 4 = 3.75 -> 3; y: -1.5 * 10 / 4 = -3.75 -> -3
        let p = camera.project(&Point3D::new(1.5, -1.5, 0.0), viewport());
        assert_eq!(p, ScreenPoint::new(43, 17));
    }

    #[test]
    fn test_depth_clamps_at_and_below_zero() {
        let camera = Camera::new(40.0, 4.0).unwrap();
        assert_eq!(camera.depth(-4.0), DEPTH_EPSILON);
        assert_eq!(camera.depth(-9.0), DEPTH_EPSILON);
        assert_eq!(camera.depth(1.0), 5.0);

        let p = camera.project(&Point3D::new(0.0105, 0.0105, -4.0), viewport());
        // 0.0105 * 40 / 0.1 = 4.2, 0.0105 * 20 / 0.1 = 2.1
        assert_eq!(p, ScreenPoint::new(44, 22));
    }

    #[test]
    fn test_viewport_bounds() {
        let vp = Viewport::new(10, 5).unwrap();
        assert!(vp.contains(ScreenPoint::new(0, 0)));
        assert!(vp.contains(ScreenPoint::new(9, 4)));
        assert!(!vp.contains(ScreenPoint::new(10, 4)));
        assert!(!vp.contains(ScreenPoint::new(-1, 0)));
        assert_eq!(Viewport::new(0, 5), Err(Error::EmptyViewport { width: 0, height: 5 }));
    }
}
