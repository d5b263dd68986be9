/// wire3d core library - geometry, projection and rasterization for terminal wireframes
///
/// This library holds everything that does not touch a terminal: shape
/// generation, rotation, perspective projection, Bresenham rasterization into
/// a styled frame buffer, the built-in skins and presets, and the animation
/// state machine that ties them together.

pub mod animation;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod preset;
pub mod projection;
pub mod raster;
pub mod skin;
pub mod themes;
pub mod transform;

// Re-export commonly used types
pub use animation::{Animation, Phase, StopReason};
pub use error::{Error, Result};
pub use framebuffer::{palette, Cell, CellStyle, FrameBuffer};
pub use geometry::{Edge, EdgeRole, Geometry, Point3D, Shape, ShapeKind};
pub use preset::Preset;
pub use projection::{Camera, ScreenPoint, Viewport};
pub use raster::{draw_line, draw_line_with, BresenhamLine};
pub use skin::{Banner, Skin, StrokeContext, Theme, VertexContext};
pub use transform::{RotationState, Spin};
