mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DashPattern, LinePrimitive, RectPrimitive, RotatedTextPrimitive, TextHAlign,
    TextPrimitive,
};

use crate::error::AxisResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from axis domain logic. Every primitive is
/// self-contained (stroke, dash, clip), leaving no canvas state to restore
/// between draw calls.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()>;
}
