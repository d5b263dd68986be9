/// Plane rotations and the per-frame rotation state
use nalgebra::{Rotation2, Vector2};

use crate::geometry::Point3D;

/// Rotate the pair `(a, b)` counterclockwise by `degrees` within its plane.
pub fn rotate_plane(a: f64, b: f64, degrees: f64) -> (f64, f64) {
    let rotated = Rotation2::new(degrees.to_radians()) * Vector2::new(a, b);
    (rotated.x, rotated.y)
}

/// Rotation about the X axis, acting on `(y, z)`.
pub fn rotate_x(y: f64, z: f64, degrees: f64) -> (f64, f64) {
    rotate_plane(y, z, degrees)
}

/// Rotation about the Y axis, acting on `(x, z)`.
pub fn rotate_y(x: f64, z: f64, degrees: f64) -> (f64, f64) {
    rotate_plane(x, z, degrees)
}

/// Rotation about the Z axis, acting on `(x, y)`.
pub fn rotate_z(x: f64, y: f64, degrees: f64) -> (f64, f64) {
    rotate_plane(x, y, degrees)
}

/// Per-frame angle increments in degrees.
///
/// `z: None` means the shape never rolls: the Z rotation is skipped entirely,
/// not applied with a zero angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Spin {
    pub const fn new(x: f64, y: f64, z: Option<f64>) -> Self {
        Self { x, y, z }
    }

    pub fn rolls(&self) -> bool {
        self.z.is_some()
    }
}

/// Accumulated rotation around three axes (in degrees).
///
/// The angles grow without bound; they are only wrapped for display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Advance by one frame's worth of spin.
    pub fn advance(&mut self, spin: &Spin) {
        self.x += spin.x;
        self.y += spin.y;
        if let Some(dz) = spin.z {
            self.z += dz;
        }
    }

    /// Rotate `point` by X, then Y, then (when `roll`) Z.
    pub fn apply(&self, point: &Point3D, roll: bool) -> Point3D {
        let (mut x, mut y, mut z) = (point.x, point.y, point.z);
        (y, z) = rotate_x(y, z, self.x);
        (x, z) = rotate_y(x, z, self.y);
        if roll {
            (x, y) = rotate_z(x, y, self.z);
        }
        Point3D::new(x, y, z)
    }

    /// Angles wrapped into `[0, 360)` for display.
    pub fn wrapped(&self) -> (f64, f64, f64) {
        (
            self.x.rem_euclid(360.0),
            self.y.rem_euclid(360.0),
            self.z.rem_euclid(360.0),
        )
    }
}
