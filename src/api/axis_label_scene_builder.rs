use tracing::warn;

use crate::core::{AxisSide, ContentRect, LabelPlacement, ValueTransformer};
use crate::render::{RenderFrame, TextHAlign, TextPrimitive};

use super::YAxisRenderer;
use super::label_format::format_axis_value;

impl<T: ValueTransformer> YAxisRenderer<T> {
    pub(super) fn append_axis_label_primitives(&self, frame: &mut RenderFrame) {
        let config = &self.config;
        if config.entries.is_empty() {
            return;
        }

        let positions = match self.transformer.values_to_pixel_y(&config.entries) {
            Ok(positions) => positions,
            Err(error) => {
                warn!(%error, "skipping axis labels: tick transform failed");
                return;
            }
        };

        let (fixed_x, h_align) = label_anchor(
            config.side,
            config.placement,
            self.content,
            config.label_x_offset,
        );

        let line_height = config.label_line_height_px();
        let baseline_offset = line_height / 2.5 + config.label_y_offset - line_height;

        let from = if config.draw_bottom_label { 0 } else { 1 };
        let to = if config.draw_top_label {
            config.entries.len()
        } else {
            config.entries.len().saturating_sub(1)
        };

        for (entry, pixel_y) in config.entries.iter().zip(&positions).take(to).skip(from) {
            let text = format_axis_value(*entry, config.label_policy);
            frame.texts.push(TextPrimitive::new(
                text,
                fixed_x,
                pixel_y + baseline_offset,
                config.label_font_size_px,
                config.label_color,
                h_align,
            ));
        }
    }
}

/// Fixed horizontal position and alignment for tick labels.
///
/// Outside labels hug the far edge of the axis gutter; inside labels sit just
/// within the content rect, mirrored per side.
fn label_anchor(
    side: AxisSide,
    placement: LabelPlacement,
    content: ContentRect,
    x_offset: f64,
) -> (f64, TextHAlign) {
    match (side, placement) {
        (AxisSide::Left, LabelPlacement::OutsideChart) => {
            (content.left - x_offset, TextHAlign::Right)
        }
        (AxisSide::Left, LabelPlacement::InsideChart) => (content.left + x_offset, TextHAlign::Left),
        (AxisSide::Right, LabelPlacement::OutsideChart) => {
            (content.right + x_offset, TextHAlign::Left)
        }
        (AxisSide::Right, LabelPlacement::InsideChart) => {
            (content.right - x_offset, TextHAlign::Right)
        }
    }
}
