/// Built-in scene settings for every shape and theme
use std::time::Duration;

use tracing::debug;

use crate::geometry::{Geometry, ShapeKind};
use crate::projection::{Camera, Viewport};
use crate::skin::Theme;
use crate::transform::Spin;

/// Everything needed to start an animation, minus the skin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub geometry: Geometry,
    pub viewport: Viewport,
    pub camera: Camera,
    pub spin: Spin,
    pub frame_interval: Duration,
    /// Emit a full-screen clear before every frame, not only a cursor-home.
    pub clear_each_frame: bool,
}

#[allow(clippy::too_many_arguments)]
const fn preset(
    size: (u16, u16),
    geometry: Geometry,
    scale: (f64, f64),
    distance: f64,
    spin: Spin,
    interval_ms: u64,
    clear_each_frame: bool,
) -> Preset {
    Preset {
        geometry,
        viewport: Viewport {
            width: size.0,
            height: size.1,
        },
        camera: Camera {
            scale_x: scale.0,
            scale_y: scale.1,
            distance,
        },
        spin,
        frame_interval: Duration::from_millis(interval_ms),
        clear_each_frame,
    }
}

const fn coin(radius: f64, half_thickness: f64, steps: usize) -> Geometry {
    Geometry::Coin {
        radius,
        half_thickness,
        steps,
    }
}

const fn cube(half_size: f64) -> Geometry {
    Geometry::Cube { half_size }
}

const fn sphere(radius: f64, lat_steps: usize, lon_steps: usize) -> Geometry {
    Geometry::Sphere {
        radius,
        lat_steps,
        lon_steps,
    }
}

const fn flip(x: f64, y: f64) -> Spin {
    Spin::new(x, y, None)
}

const fn roll(x: f64, y: f64, z: f64) -> Spin {
    Spin::new(x, y, Some(z))
}

const HOME: bool = false;
const CLEAR: bool = true;

#[rustfmt::skip]
fn lookup(shape: ShapeKind, theme: Theme) -> Option<Preset> {
    use ShapeKind::*;
    use Theme::*;

    let found = match (shape, theme) {
        (Coin, Classic) => preset((80, 40), coin(1.5, 0.2, 24), (40.0, 20.0), 4.0, flip(5.0, 2.0), 50, HOME),
        (Coin, Minimal) => preset((50, 25), coin(1.2, 0.15, 12), (12.0, 6.0), 3.0, flip(4.0, 1.5), 60, HOME),
        (Coin, Ascii) => preset((70, 28), coin(1.8, 0.25, 16), (15.0, 8.0), 3.5, flip(4.5, 1.8), 80, HOME),
        (Coin, Wireframe) => preset((70, 28), coin(1.8, 0.25, 16), (14.0, 7.0), 3.5, flip(3.5, 1.3), 60, HOME),
        (Coin, Retro) => preset((80, 25), coin(1.5, 0.2, 16), (15.0, 8.0), 4.0, flip(5.0, 2.0), 80, CLEAR),
        (Coin, Neon) => preset((90, 35), coin(2.0, 0.3, 20), (18.0, 9.0), 4.0, flip(4.0, 2.0), 40, CLEAR),
        (Coin, Matrix) => preset((80, 30), coin(1.8, 0.25, 16), (15.0, 8.0), 4.0, flip(4.0, 1.8), 50, CLEAR),
        (Coin, Hologram) => preset((75, 30), coin(2.0, 0.3, 18), (15.0, 8.0), 4.0, flip(3.5, 1.8), 50, CLEAR),
        (Coin, Plasma) => preset((85, 32), coin(2.2, 0.3, 20), (16.0, 8.0), 4.0, flip(3.5, 1.8), 40, CLEAR),

        (Cube, Classic) => preset((80, 40), cube(1.0), (40.0, 20.0), 4.0, roll(2.0, 3.0, 1.0), 50, HOME),
        (Cube, Ascii) => preset((80, 30), cube(1.0), (22.0, 11.0), 3.5, roll(1.2, 1.8, 0.6), 80, HOME),
        (Cube, Wireframe) => preset((80, 35), cube(1.0), (18.0, 9.0), 3.5, roll(1.0, 1.3, 0.7), 60, HOME),
        (Cube, Retro) => preset((80, 25), cube(1.0), (40.0, 20.0), 4.0, roll(1.5, 2.0, 0.5), 80, CLEAR),
        (Cube, Neon) => preset((100, 40), cube(1.5), (25.0, 12.0), 4.0, roll(2.0, 3.0, 1.0), 40, CLEAR),
        (Cube, Matrix) => preset((90, 35), cube(1.2), (20.0, 10.0), 4.0, roll(1.5, 2.2, 0.8), 50, CLEAR),
        (Cube, Hologram) => preset((90, 35), cube(1.2), (20.0, 10.0), 4.0, roll(1.5, 2.2, 0.8), 50, CLEAR),
        (Cube, Plasma) => preset((100, 40), cube(1.3), (22.0, 11.0), 4.0, roll(1.8, 2.5, 1.2), 40, CLEAR),

        (Sphere, Classic) => preset((80, 40), sphere(1.8, 10, 16), (40.0, 20.0), 4.0, roll(1.0, 2.0, 1.0), 50, HOME),
        (Sphere, Minimal) => preset((50, 25), sphere(1.5, 6, 10), (10.0, 5.0), 3.0, flip(0.8, 1.2), 60, HOME),
        (Sphere, Ascii) => preset((70, 28), sphere(2.0, 10, 14), (12.0, 6.0), 4.0, flip(1.0, 1.5), 80, HOME),
        (Sphere, Wireframe) => preset((70, 28), sphere(2.0, 10, 14), (12.0, 6.0), 4.0, flip(1.2, 1.8), 60, HOME),
        (Sphere, Retro) => preset((80, 25), sphere(1.8, 8, 12), (12.0, 6.0), 4.0, roll(1.0, 1.5, 0.5), 80, CLEAR),
        (Sphere, Neon) => preset((90, 35), sphere(2.2, 12, 18), (15.0, 7.0), 4.5, roll(1.5, 2.2, 0.8), 40, CLEAR),
        (Sphere, Matrix) => preset((80, 30), sphere(2.0, 10, 14), (12.0, 6.0), 4.0, flip(1.2, 1.8), 50, CLEAR),
        (Sphere, Hologram) => preset((75, 30), sphere(2.2, 10, 14), (13.0, 6.0), 4.5, flip(1.5, 2.2), 50, CLEAR),
        (Sphere, Plasma) => preset((85, 32), sphere(2.3, 12, 16), (14.0, 7.0), 4.5, flip(1.8, 2.5), 40, CLEAR),

        _ => return None,
    };
    Some(found)
}

impl Preset {
    /// Settings for `shape` drawn with `theme`.
    ///
    /// Combinations without tuned numbers use the classic settings of the shape.
    pub fn resolve(shape: ShapeKind, theme: Theme) -> Preset {
        match lookup(shape, theme) {
            Some(preset) => {
                debug!(%shape, %theme, "resolved preset");
                preset
            }
            None => {
                debug!(%shape, %theme, "no tuned preset, using classic settings");
                Self::classic(shape)
            }
        }
    }

    #[rustfmt::skip]
    fn classic(shape: ShapeKind) -> Preset {
        match shape {
            ShapeKind::Coin => preset((80, 40), coin(1.5, 0.2, 24), (40.0, 20.0), 4.0, flip(5.0, 2.0), 50, HOME),
            ShapeKind::Cube => preset((80, 40), cube(1.0), (40.0, 20.0), 4.0, roll(2.0, 3.0, 1.0), 50, HOME),
            ShapeKind::Sphere => preset((80, 40), sphere(1.8, 10, 16), (40.0, 20.0), 4.0, roll(1.0, 2.0, 1.0), 50, HOME),
        }
    }

    /// True when the combination has its own tuned settings.
    pub fn is_tuned(shape: ShapeKind, theme: Theme) -> bool {
        lookup(shape, theme).is_some()
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_combination_resolves_to_the_right_shape() {
        for shape in ShapeKind::ALL {
            for theme in Theme::ALL {
                let preset = Preset::resolve(shape, theme);
                let built = preset.geometry.build();
                assert!(built.is_ok(), "{shape} {theme}");
                assert_eq!(built.unwrap().kind(), shape, "{shape} {theme}");
                assert!(Viewport::new(preset.viewport.width, preset.viewport.height).is_ok());
                assert!(preset.camera.distance > 0.0);
            }
        }
    }

    #[test]
    fn test_minimal_cube_falls_back_to_classic() {
        assert!(!Preset::is_tuned(ShapeKind::Cube, Theme::Minimal));
        assert_eq!(
            Preset::resolve(ShapeKind::Cube, Theme::Minimal),
            Preset::resolve(ShapeKind::Cube, Theme::Classic)
        );
    }

    #[test]
    fn test_classic_coin_never_rolls() {
        let preset = Preset::resolve(ShapeKind::Coin, Theme::Classic);
        assert!(!preset.spin.rolls());
        assert_eq!(preset.camera.scale_y, preset.camera.scale_x * 0.5);
        assert_eq!(preset.frame_interval, Duration::from_millis(50));
        assert!(!preset.clear_each_frame);
    }

    #[test]
    fn test_neon_sphere_settings() {
        let preset = Preset::resolve(ShapeKind::Sphere, Theme::Neon);
        assert_eq!(
            preset.geometry,
            Geometry::Sphere {
                radius: 2.2,
                lat_steps: 12,
                lon_steps: 18
            }
        );
        assert_eq!(preset.viewport, Viewport { width: 90, height: 35 });
        assert_eq!(preset.spin, Spin::new(1.5, 2.2, Some(0.8)));
        assert!(preset.clear_each_frame);
    }

    #[test]
    fn test_overrides() {
        let preset = Preset::resolve(ShapeKind::Cube, Theme::Retro)
            .with_viewport(Viewport { width: 20, height: 10 })
            .with_frame_interval(Duration::ZERO);
        assert_eq!(preset.viewport.width, 20);
        assert_eq!(preset.frame_interval, Duration::ZERO);
    }
}
