mod axis_config;
mod axis_label_scene_builder;
mod band_scene_builder;
mod grid_scene_builder;
mod label_format;
mod limit_line_scene_builder;

pub use axis_config::{
    AxisLabelPolicy, BandLabelStyle, BandPalette, LimitLabelPosition, LimitLine, LineStyle,
    YAxisConfig,
};

use tracing::debug;

use crate::core::{AxisSide, ContentRect, RiskThresholds, ValueTransformer};
use crate::error::{AxisError, AxisResult};
use crate::render::{LinePrimitive, RenderFrame};

/// Value-axis renderer: labels, axis line, grid, zero line, limit lines and
/// the risk-band overlay.
///
/// Holds read-only configuration; every render entry point reads inputs
/// fresh and appends primitives to a caller-owned frame, so passes stay
/// independent and deterministic.
#[derive(Debug)]
pub struct YAxisRenderer<T: ValueTransformer> {
    config: YAxisConfig,
    thresholds: RiskThresholds,
    transformer: T,
    content: ContentRect,
    visible_min: f64,
    visible_max: f64,
}

impl<T: ValueTransformer> YAxisRenderer<T> {
    /// Builds a renderer, failing fast on invalid configuration.
    ///
    /// `visible_min`/`visible_max` are the currently visible data-value
    /// range used for band selection; a reversed pair is normalized.
    pub fn new(
        config: YAxisConfig,
        thresholds: RiskThresholds,
        transformer: T,
        content: ContentRect,
        visible_min: f64,
        visible_max: f64,
    ) -> AxisResult<Self> {
        content.validate()?;
        config.validate()?;
        validate_palette_coverage(&config, &thresholds)?;
        let (visible_min, visible_max) = normalize_visible_range(visible_min, visible_max)?;

        debug!(
            bands = thresholds.len(),
            entries = config.entries.len(),
            limit_lines = config.limit_lines.len(),
            "value axis renderer configured"
        );

        Ok(Self {
            config,
            thresholds,
            transformer,
            content,
            visible_min,
            visible_max,
        })
    }

    #[must_use]
    pub fn config(&self) -> &YAxisConfig {
        &self.config
    }

    #[must_use]
    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    #[must_use]
    pub fn content(&self) -> ContentRect {
        self.content
    }

    #[must_use]
    pub fn visible_range(&self) -> (f64, f64) {
        (self.visible_min, self.visible_max)
    }

    /// Updates the visible data-value range used for band selection.
    pub fn set_visible_range(&mut self, visible_min: f64, visible_max: f64) -> AxisResult<()> {
        let (visible_min, visible_max) = normalize_visible_range(visible_min, visible_max)?;
        self.visible_min = visible_min;
        self.visible_max = visible_max;
        Ok(())
    }

    /// Replaces the tick entries, keeping the ascending-order contract.
    pub fn set_entries(&mut self, entries: Vec<f64>) -> AxisResult<()> {
        let mut config = self.config.clone();
        config.entries = entries;
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Replaces the threshold list, re-checking palette coverage.
    pub fn set_thresholds(&mut self, thresholds: RiskThresholds) -> AxisResult<()> {
        validate_palette_coverage(&self.config, &thresholds)?;
        self.thresholds = thresholds;
        Ok(())
    }

    /// Clip rect shared by all grid lines: the content rect grown by half
    /// the grid stroke width above and below, so caps at the edge survive.
    #[must_use]
    pub fn grid_clipping_rect(&self) -> ContentRect {
        self.content.expanded_vertically(self.config.grid_line.width)
    }

    /// Appends tick labels for every visible entry.
    pub fn render_axis_labels(&self, frame: &mut RenderFrame) -> AxisResult<()> {
        if !self.config.enabled || !self.config.draw_labels {
            return Ok(());
        }
        self.append_axis_label_primitives(frame);
        Ok(())
    }

    /// Appends the vertical axis border on the configured side.
    pub fn render_axis_line(&self, frame: &mut RenderFrame) -> AxisResult<()> {
        if !self.config.enabled || !self.config.draw_axis_line {
            return Ok(());
        }

        let content = self.content;
        let x = match self.config.side {
            AxisSide::Left => content.left,
            AxisSide::Right => content.right,
        };
        let style = &self.config.axis_line;
        frame.lines.push(
            LinePrimitive::new(x, content.top, x, content.bottom, style.width, style.color)
                .with_dash(style.dash.clone()),
        );
        Ok(())
    }

    /// Appends the risk-band overlay, then grid lines, then the zero line.
    pub fn render_grid_and_bands(&self, frame: &mut RenderFrame) -> AxisResult<()> {
        if !self.config.enabled {
            return Ok(());
        }

        if self.config.draw_risk_bands {
            self.append_band_primitives(frame);
        }
        if self.config.draw_grid_lines {
            self.append_grid_line_primitives(frame);
        }
        if self.config.draw_zero_line {
            self.append_zero_line_primitive(frame);
        }
        Ok(())
    }

    /// Appends every enabled limit line and its optional corner label.
    pub fn render_limit_lines(&self, frame: &mut RenderFrame) -> AxisResult<()> {
        if !self.config.enabled || self.config.limit_lines.is_empty() {
            return Ok(());
        }
        self.append_limit_line_primitives(frame);
        Ok(())
    }
}

fn validate_palette_coverage(config: &YAxisConfig, thresholds: &RiskThresholds) -> AxisResult<()> {
    if let Some(max_index) = thresholds.max_color_index() {
        if max_index >= config.band_palette.len() {
            return Err(AxisError::InvalidThresholds(format!(
                "color index {max_index} outside palette of {} colors",
                config.band_palette.len()
            )));
        }
    }
    Ok(())
}

fn normalize_visible_range(visible_min: f64, visible_max: f64) -> AxisResult<(f64, f64)> {
    if !visible_min.is_finite() || !visible_max.is_finite() {
        return Err(AxisError::InvalidData(
            "visible range must be finite".to_owned(),
        ));
    }
    if visible_min <= visible_max {
        Ok((visible_min, visible_max))
    } else {
        Ok((visible_max, visible_min))
    }
}
