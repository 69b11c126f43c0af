use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{AxisSide, LabelPlacement};
use crate::error::{AxisError, AxisResult};
use crate::render::{Color, DashPattern};

/// Line-height multiple applied to configured font sizes.
///
/// The host toolkit owns real font metrics; label baseline math only needs a
/// stable approximation.
pub(super) const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Stroke appearance shared by the axis line, grid lines, the zero line and
/// limit lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Option<DashPattern>,
}

impl LineStyle {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.dash = dash;
        self
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(AxisError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = &self.dash {
            dash.validate()?;
        }
        self.color.validate()
    }
}

/// Built-in policy used for tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisLabelPolicy {
    /// Render values with a fixed number of decimals.
    FixedDecimals { precision: u8 },
    /// Round values to a deterministic minimum move before formatting.
    MinMove {
        min_move: f64,
        trim_trailing_zeros: bool,
    },
}

impl Default for AxisLabelPolicy {
    fn default() -> Self {
        Self::FixedDecimals { precision: 2 }
    }
}

impl AxisLabelPolicy {
    pub fn validate(self) -> AxisResult<()> {
        match self {
            Self::FixedDecimals { .. } => Ok(()),
            Self::MinMove { min_move, .. } => {
                if !min_move.is_finite() || min_move <= 0.0 {
                    return Err(AxisError::InvalidConfig(
                        "label min move must be finite and > 0".to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Decorative repeated-watermark style applied to band labels.
///
/// Each visible band gets one rotated label per horizontal fraction, all at
/// the band's vertical center.
#[derive(Debug, Clone, PartialEq)]
pub struct BandLabelStyle {
    pub fractions: SmallVec<[f64; 3]>,
    pub angle_degrees: f64,
    pub font_size_px: f64,
    pub color: Color,
}

impl Default for BandLabelStyle {
    fn default() -> Self {
        Self {
            fractions: smallvec![0.2, 0.5, 0.8],
            angle_degrees: -30.0,
            font_size_px: 14.0,
            color: Color::rgba(0.0, 0.0, 0.0, 0.14),
        }
    }
}

impl BandLabelStyle {
    pub fn validate(&self) -> AxisResult<()> {
        for fraction in &self.fractions {
            if !fraction.is_finite() || !(0.0..=1.0).contains(fraction) {
                return Err(AxisError::InvalidConfig(
                    "band label fractions must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        if !self.angle_degrees.is_finite() {
            return Err(AxisError::InvalidConfig(
                "band label angle must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(AxisError::InvalidConfig(
                "band label font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Fill palette indexed by each threshold's `color_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandPalette {
    pub colors: Vec<Color>,
    pub fill_alpha: f64,
}

impl Default for BandPalette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::from_rgb_hex(0x2ECC71, 1.0),
                Color::from_rgb_hex(0x3498DB, 1.0),
                Color::from_rgb_hex(0xFFDD26, 1.0),
                Color::from_rgb_hex(0xE67E22, 1.0),
                Color::from_rgb_hex(0xCE2029, 1.0),
            ],
            fill_alpha: 0.24,
        }
    }
}

impl BandPalette {
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Band fill color: the indexed palette entry with the fill alpha applied.
    #[must_use]
    pub fn fill_color(&self, index: usize) -> Option<Color> {
        self.colors
            .get(index)
            .map(|color| Color::rgba(color.red, color.green, color.blue, self.fill_alpha))
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(AxisError::InvalidConfig(
                "band fill alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        for color in &self.colors {
            color.validate()?;
        }
        Ok(())
    }
}

/// Corner anchor for a limit line's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LimitLabelPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Horizontal marker at a fixed data value, independent of tick entries.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitLine {
    pub value: f64,
    pub enabled: bool,
    pub line: LineStyle,
    pub label: Option<String>,
    pub label_position: LimitLabelPosition,
    pub label_font_size_px: f64,
    pub label_color: Color,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl LimitLine {
    #[must_use]
    pub fn new(value: f64, line: LineStyle) -> Self {
        Self {
            value,
            enabled: true,
            line,
            label: None,
            label_position: LimitLabelPosition::default(),
            label_font_size_px: 13.0,
            label_color: Color::rgb(0.0, 0.0, 0.0),
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_label_position(mut self, position: LimitLabelPosition) -> Self {
        self.label_position = position;
        self
    }

    #[must_use]
    pub fn with_offsets(mut self, x_offset: f64, y_offset: f64) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub(super) fn label_line_height_px(&self) -> f64 {
        self.label_font_size_px * LINE_HEIGHT_FACTOR
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.value.is_finite() {
            return Err(AxisError::InvalidConfig(
                "limit line value must be finite".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(AxisError::InvalidConfig(
                "limit label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.x_offset.is_finite() || !self.y_offset.is_finite() {
            return Err(AxisError::InvalidConfig(
                "limit label offsets must be finite".to_owned(),
            ));
        }
        self.line.validate()?;
        self.label_color.validate()
    }
}

/// Full configuration for one value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxisConfig {
    pub enabled: bool,
    pub side: AxisSide,
    pub placement: LabelPlacement,
    pub draw_labels: bool,
    /// Tick entries in ascending data-value order, bottom to top.
    pub entries: Vec<f64>,
    pub label_policy: AxisLabelPolicy,
    pub label_color: Color,
    pub label_font_size_px: f64,
    pub label_x_offset: f64,
    pub label_y_offset: f64,
    pub draw_bottom_label: bool,
    pub draw_top_label: bool,
    pub draw_axis_line: bool,
    pub axis_line: LineStyle,
    pub draw_grid_lines: bool,
    pub grid_line: LineStyle,
    pub draw_zero_line: bool,
    pub zero_line: LineStyle,
    pub draw_risk_bands: bool,
    pub band_label_style: BandLabelStyle,
    pub band_palette: BandPalette,
    pub limit_lines: Vec<LimitLine>,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            side: AxisSide::Left,
            placement: LabelPlacement::OutsideChart,
            draw_labels: true,
            entries: Vec::new(),
            label_policy: AxisLabelPolicy::default(),
            label_color: Color::rgb(0.2, 0.2, 0.2),
            label_font_size_px: 11.0,
            label_x_offset: 5.0,
            label_y_offset: 0.0,
            draw_bottom_label: true,
            draw_top_label: true,
            draw_axis_line: true,
            axis_line: LineStyle::new(Color::rgb(0.5, 0.5, 0.5), 1.0),
            draw_grid_lines: true,
            grid_line: LineStyle::new(Color::rgb(0.85, 0.85, 0.85), 1.0),
            draw_zero_line: false,
            zero_line: LineStyle::new(Color::rgb(0.35, 0.35, 0.35), 1.0),
            draw_risk_bands: false,
            band_label_style: BandLabelStyle::default(),
            band_palette: BandPalette::default(),
            limit_lines: Vec::new(),
        }
    }
}

impl YAxisConfig {
    #[must_use]
    pub fn with_entries(mut self, entries: Vec<f64>) -> Self {
        self.entries = entries;
        self
    }

    #[must_use]
    pub fn with_side(mut self, side: AxisSide) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: LabelPlacement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_label_policy(mut self, policy: AxisLabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    #[must_use]
    pub fn with_risk_bands(mut self, enabled: bool) -> Self {
        self.draw_risk_bands = enabled;
        self
    }

    #[must_use]
    pub fn with_zero_line(mut self, style: LineStyle) -> Self {
        self.draw_zero_line = true;
        self.zero_line = style;
        self
    }

    #[must_use]
    pub fn with_limit_line(mut self, limit: LimitLine) -> Self {
        self.limit_lines.push(limit);
        self
    }

    #[must_use]
    pub(super) fn label_line_height_px(&self) -> f64 {
        self.label_font_size_px * LINE_HEIGHT_FACTOR
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(AxisError::InvalidConfig(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_x_offset.is_finite() || !self.label_y_offset.is_finite() {
            return Err(AxisError::InvalidConfig(
                "label offsets must be finite".to_owned(),
            ));
        }
        if self.entries.iter().any(|entry| !entry.is_finite()) {
            return Err(AxisError::InvalidConfig(
                "tick entries must be finite".to_owned(),
            ));
        }
        if self
            .entries
            .windows(2)
            .any(|pair| pair[1] <= pair[0])
        {
            return Err(AxisError::InvalidConfig(
                "tick entries must be strictly ascending".to_owned(),
            ));
        }
        self.label_policy.validate()?;
        self.label_color.validate()?;
        self.axis_line.validate()?;
        self.grid_line.validate()?;
        self.zero_line.validate()?;
        self.band_label_style.validate()?;
        self.band_palette.validate()?;
        for limit in &self.limit_lines {
            limit.validate()?;
        }
        Ok(())
    }
}
