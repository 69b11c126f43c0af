use tracing::warn;

use crate::core::ValueTransformer;
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::YAxisRenderer;
use super::axis_config::LimitLabelPosition;

impl<T: ValueTransformer> YAxisRenderer<T> {
    pub(super) fn append_limit_line_primitives(&self, frame: &mut RenderFrame) {
        let content = self.content;

        for limit in &self.config.limit_lines {
            if !limit.enabled {
                continue;
            }

            let y = match self.transformer.value_to_pixel_y(limit.value) {
                Ok(y) => y,
                Err(error) => {
                    warn!(value = limit.value, %error, "skipping limit line: transform failed");
                    continue;
                }
            };

            frame.lines.push(
                LinePrimitive::new(
                    content.left,
                    y,
                    content.right,
                    y,
                    limit.line.width,
                    limit.line.color,
                )
                .with_dash(limit.line.dash.clone())
                .with_clip(content.expanded_vertically(limit.line.width)),
            );

            let Some(label) = &limit.label else {
                continue;
            };
            if label.is_empty() {
                continue;
            }

            let line_height = limit.label_line_height_px();
            let x_inset = 4.0 + limit.x_offset;
            let y_inset = limit.line.width + line_height + limit.y_offset;

            let (x, h_align) = match limit.label_position {
                LimitLabelPosition::TopRight | LimitLabelPosition::BottomRight => {
                    (content.right - x_inset, TextHAlign::Right)
                }
                LimitLabelPosition::TopLeft | LimitLabelPosition::BottomLeft => {
                    (content.left + x_inset, TextHAlign::Left)
                }
            };
            let label_y = match limit.label_position {
                LimitLabelPosition::TopLeft | LimitLabelPosition::TopRight => y - y_inset,
                LimitLabelPosition::BottomLeft | LimitLabelPosition::BottomRight => {
                    y + y_inset - line_height
                }
            };

            frame.texts.push(TextPrimitive::new(
                label.clone(),
                x,
                label_y,
                limit.label_font_size_px,
                limit.label_color,
                h_align,
            ));
        }
    }
}
