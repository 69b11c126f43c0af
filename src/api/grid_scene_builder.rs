use tracing::warn;

use crate::core::ValueTransformer;
use crate::render::{LinePrimitive, RenderFrame};

use super::YAxisRenderer;

impl<T: ValueTransformer> YAxisRenderer<T> {
    pub(super) fn append_grid_line_primitives(&self, frame: &mut RenderFrame) {
        let config = &self.config;
        if config.entries.is_empty() {
            return;
        }

        let positions = match self.transformer.values_to_pixel_y(&config.entries) {
            Ok(positions) => positions,
            Err(error) => {
                warn!(%error, "skipping grid lines: tick transform failed");
                return;
            }
        };

        let content = self.content;
        let clip = self.grid_clipping_rect();
        let style = &config.grid_line;

        for y in positions {
            frame.lines.push(
                LinePrimitive::new(content.left, y, content.right, y, style.width, style.color)
                    .with_dash(style.dash.clone())
                    .with_clip(clip),
            );
        }
    }

    pub(super) fn append_zero_line_primitive(&self, frame: &mut RenderFrame) {
        let style = &self.config.zero_line;

        let y = match self.transformer.value_to_pixel_y(0.0) {
            Ok(y) => y,
            Err(error) => {
                warn!(%error, "skipping zero line: transform failed");
                return;
            }
        };

        let content = self.content;
        frame.lines.push(
            LinePrimitive::new(content.left, y, content.right, y, style.width, style.color)
                .with_dash(style.dash.clone())
                .with_clip(content.expanded_vertically(style.width)),
        );
    }
}
