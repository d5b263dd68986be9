/// Wireframe geometry: canonical points, edges and the three shape generators
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;
use tracing::debug;

use crate::error::{positive, Error, Result};

/// A point of the canonical (unrotated) geometry.
pub type Point3D = Point3<f64>;

/// Which part of a shape an edge belongs to.
///
/// Skins use this to pick glyphs, e.g. bright front rings and dim back rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRole {
    /// Coin front ring or cube front face.
    Front,
    /// Coin back ring or cube back face.
    Back,
    /// Coin rim segment or cube connector between the two faces.
    Bridge,
    /// Sphere latitude ring segment.
    Parallel,
    /// Sphere segment between two adjacent rings.
    Meridian,
}

/// A segment between two points of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub role: EdgeRole,
}

impl Edge {
    pub const fn new(a: usize, b: usize, role: EdgeRole) -> Self {
        Self { a, b, role }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Coin,
    Cube,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Coin, ShapeKind::Cube, ShapeKind::Sphere];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Coin => "coin",
            ShapeKind::Cube => "cube",
            ShapeKind::Sphere => "sphere",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}

/// Parameters of one of the built-in shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Coin {
        radius: f64,
        half_thickness: f64,
        steps: usize,
    },
    Cube {
        half_size: f64,
    },
    Sphere {
        radius: f64,
        lat_steps: usize,
        lon_steps: usize,
    },
}

impl Geometry {
    pub fn build(&self) -> Result<Shape> {
        match *self {
            Geometry::Coin {
                radius,
                half_thickness,
                steps,
            } => Shape::coin(radius, half_thickness, steps),
            Geometry::Cube { half_size } => Shape::cube(half_size),
            Geometry::Sphere {
                radius,
                lat_steps,
                lon_steps,
            } => Shape::sphere(radius, lat_steps, lon_steps),
        }
    }
}

/// A wireframe: base points plus the edges connecting them.
///
/// Every edge index is guaranteed to point inside `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    points: Vec<Point3D>,
    edges: Vec<Edge>,
}

impl Shape {
    /// Build a shape from raw parts, rejecting edges that reference missing points.
    pub fn new(kind: ShapeKind, points: Vec<Point3D>, edges: Vec<Edge>) -> Result<Self> {
        let len = points.len();
        for (index, edge) in edges.iter().enumerate() {
            for point in [edge.a, edge.b] {
                if point >= len {
                    return Err(Error::EdgeOutOfRange { index, point, len });
                }
            }
        }
        debug!(%kind, points = len, edges = edges.len(), "built shape");
        Ok(Self {
            kind,
            points,
            edges,
        })
    }

    /// Two parallel regular polygons at `z = ±half_thickness`.
    ///
    /// Points are the front ring followed by the back ring. For each `i` the
    /// edges are emitted as front ring, back ring, then the rim connector.
    pub fn coin(radius: f64, half_thickness: f64, steps: usize) -> Result<Self> {
        let radius = positive("coin radius", radius)?;
        let half_thickness = positive("coin thickness", half_thickness)?;
        if steps < 3 {
            return Err(Error::TooFewSegments {
                what: "coin",
                min: 3,
                got: steps,
            });
        }

        let ring = |z: f64| {
            (0..steps).map(move |i| {
                let theta = 2.0 * PI * i as f64 / steps as f64;
                Point3D::new(radius * theta.cos(), radius * theta.sin(), z)
            })
        };
        let points: Vec<Point3D> = ring(half_thickness).chain(ring(-half_thickness)).collect();

        let mut edges = Vec::with_capacity(steps * 3);
        for i in 0..steps {
            let next = (i + 1) % steps;
            edges.push(Edge::new(i, next, EdgeRole::Front));
            edges.push(Edge::new(steps + i, steps + next, EdgeRole::Back));
            edges.push(Edge::new(i, steps + i, EdgeRole::Bridge));
        }

        Self::new(ShapeKind::Coin, points, edges)
    }

    /// The 8 corners and 12 edges of an axis-aligned cube.
    pub fn cube(half_size: f64) -> Result<Self> {
        let h = positive("cube size", half_size)?;
        let points = vec![
            Point3D::new(-h, -h, -h),
            Point3D::new(h, -h, -h),
            Point3D::new(h, h, -h),
            Point3D::new(-h, h, -h),
            Point3D::new(-h, -h, h),
            Point3D::new(h, -h, h),
            Point3D::new(h, h, h),
            Point3D::new(-h, h, h),
        ];

        const PAIRS: [(usize, usize, EdgeRole); 12] = [
            (0, 1, EdgeRole::Back),
            (1, 2, EdgeRole::Back),
            (2, 3, EdgeRole::Back),
            (3, 0, EdgeRole::Back),
            (4, 5, EdgeRole::Front),
            (5, 6, EdgeRole::Front),
            (6, 7, EdgeRole::Front),
            (7, 4, EdgeRole::Front),
            (0, 4, EdgeRole::Bridge),
            (1, 5, EdgeRole::Bridge),
            (2, 6, EdgeRole::Bridge),
            (3, 7, EdgeRole::Bridge),
        ];
        let edges = PAIRS
            .iter()
            .map(|&(a, b, role)| Edge::new(a, b, role))
            .collect();

        Self::new(ShapeKind::Cube, points, edges)
    }

    /// Latitude/longitude mesh with `lat_steps + 1` rings of `lon_steps` points.
    ///
    /// Ring 0 and ring `lat_steps` are the poles; each collapses to a single
    /// position but still carries `lon_steps` points so the indexing stays regular.
    pub fn sphere(radius: f64, lat_steps: usize, lon_steps: usize) -> Result<Self> {
        let radius = positive("sphere radius", radius)?;
        if lat_steps < 1 {
            return Err(Error::TooFewRings);
        }
        if lon_steps < 3 {
            return Err(Error::TooFewSegments {
                what: "sphere ring",
                min: 3,
                got: lon_steps,
            });
        }

        let mut points = Vec::with_capacity((lat_steps + 1) * lon_steps);
        let mut edges = Vec::with_capacity(lon_steps * (2 * lat_steps + 1));
        for i in 0..=lat_steps {
            let phi = PI * i as f64 / lat_steps as f64;
            for j in 0..lon_steps {
                let theta = 2.0 * PI * j as f64 / lon_steps as f64;
                points.push(Point3D::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                ));

                let index = i * lon_steps + j;
                edges.push(Edge::new(
                    index,
                    i * lon_steps + (j + 1) % lon_steps,
                    EdgeRole::Parallel,
                ));
                if i < lat_steps {
                    edges.push(Edge::new(index, (i + 1) * lon_steps + j, EdgeRole::Meridian));
                }
            }
        }

        Self::new(ShapeKind::Sphere, points, edges)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
