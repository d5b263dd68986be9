/// Title and status lines drawn around the grid
use wire3d_core::{Animation, Banner, RotationState};

/// Rows the HUD adds to the grid: one title above, one status line below.
pub const HUD_ROWS: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub title: Banner,
    pub status: String,
}

impl Hud {
    /// HUD for the frame `animation` is about to advance past.
    pub fn for_animation(animation: &Animation) -> Self {
        let width = animation.viewport().width as usize;
        let title = animation.skin().title();
        let shape = animation.shape();
        Self {
            title: Banner::new(center(&title.text, width), title.style),
            status: status_line(
                animation.rotation(),
                animation.spin().rolls(),
                animation.frame(),
                shape.points().len(),
                shape.edges().len(),
            ),
        }
    }
}

/// `X: 5.0° Y: 2.0° | FRAME 000001 | VERTICES 48 | EDGES 72`
///
/// Angles are wrapped into `[0, 360)`; the Z angle only shows for shapes that roll.
pub fn status_line(
    rotation: RotationState,
    rolls: bool,
    frame: u64,
    vertices: usize,
    edges: usize,
) -> String {
    let (x, y, z) = rotation.wrapped();
    let angles = if rolls {
        format!("X: {x:.1}° Y: {y:.1}° Z: {z:.1}°")
    } else {
        format!("X: {x:.1}° Y: {y:.1}°")
    };
    format!("{angles} | FRAME {frame:06} | VERTICES {vertices} | EDGES {edges}")
}

/// Pad `text` on the left so it sits in the middle of `width` columns.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}
