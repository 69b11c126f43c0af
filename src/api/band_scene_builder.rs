use tracing::warn;

use crate::core::{ValueTransformer, partition_visible};
use crate::render::{RectPrimitive, RenderFrame, RotatedTextPrimitive};

use super::YAxisRenderer;

impl<T: ValueTransformer> YAxisRenderer<T> {
    pub(super) fn append_band_primitives(&self, frame: &mut RenderFrame) {
        let bands = match partition_visible(&self.thresholds, self.visible_min, self.visible_max) {
            Ok(bands) => bands,
            Err(error) => {
                warn!(%error, "skipping risk bands: partition failed");
                return;
            }
        };
        if bands.is_empty() {
            return;
        }

        let content = self.content;
        let specs = self.thresholds.bands();
        let style = &self.config.band_label_style;
        let last = bands.len() - 1;

        for (position, band) in bands.iter().enumerate() {
            // Top-to-bottom order: the first band's upper edge and the last
            // band's lower edge clamp to the content rect so the overlay
            // tiles the full visible extent.
            let top_px = match (position, band.upper) {
                (0, _) => content.top,
                (_, Some(upper)) => match self.transformer.value_to_pixel_y(upper) {
                    Ok(y) => y,
                    Err(error) => {
                        warn!(boundary = upper, %error, "skipping band: transform failed");
                        continue;
                    }
                },
                // Only the topmost band may be open-ended.
                (_, None) => continue,
            };
            let bottom_px = if position == last {
                content.bottom
            } else {
                match self.transformer.value_to_pixel_y(band.lower) {
                    Ok(y) => y,
                    Err(error) => {
                        warn!(boundary = band.lower, %error, "skipping band: transform failed");
                        continue;
                    }
                }
            };

            let spec = &specs[band.band_index];
            let Some(fill) = self.config.band_palette.fill_color(spec.color_index) else {
                continue;
            };

            let rect_top = top_px.min(bottom_px);
            let rect_height = (bottom_px - top_px).abs();
            frame.rects.push(RectPrimitive::new(
                content.left,
                rect_top,
                content.width(),
                rect_height,
                fill,
            ));

            if spec.label.is_empty() {
                continue;
            }
            let center_y = rect_top + rect_height / 2.0;
            for fraction in &style.fractions {
                frame.rotated_texts.push(RotatedTextPrimitive::new(
                    spec.label.clone(),
                    content.left + content.width() * fraction,
                    center_y,
                    style.angle_degrees,
                    style.font_size_px,
                    style.color,
                ));
            }
        }
    }
}
