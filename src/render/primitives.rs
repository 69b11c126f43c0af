use smallvec::SmallVec;

use crate::core::ContentRect;
use crate::error::{AxisError, AxisResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from a packed `0xRRGGBB` value and an explicit alpha.
    #[must_use]
    pub fn from_rgb_hex(rgb: u32, alpha: f64) -> Self {
        let red = f64::from((rgb & 0xFF_0000) >> 16) / 255.0;
        let green = f64::from((rgb & 0x00_FF00) >> 8) / 255.0;
        let blue = f64::from(rgb & 0x00_00FF) / 255.0;
        Self::rgba(red, green, blue, alpha)
    }

    pub fn validate(self) -> AxisResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AxisError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// On/off dash lengths plus starting phase, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    pub lengths: SmallVec<[f64; 4]>,
    pub phase: f64,
}

impl DashPattern {
    #[must_use]
    pub fn new(lengths: impl IntoIterator<Item = f64>, phase: f64) -> Self {
        Self {
            lengths: lengths.into_iter().collect(),
            phase,
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.lengths.is_empty() {
            return Err(AxisError::InvalidData(
                "dash pattern must have at least one length".to_owned(),
            ));
        }
        if self
            .lengths
            .iter()
            .any(|length| !length.is_finite() || *length < 0.0)
        {
            return Err(AxisError::InvalidData(
                "dash lengths must be finite and >= 0".to_owned(),
            ));
        }
        if !self.phase.is_finite() {
            return Err(AxisError::InvalidData(
                "dash phase must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
///
/// `clip` carries the rect the backend must clip the stroke to; `None` means
/// unclipped.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub dash: Option<DashPattern>,
    pub clip: Option<ContentRect>,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: None,
            clip: None,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_clip(mut self, clip: ContentRect) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(AxisError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(AxisError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = &self.dash {
            dash.validate()?;
        }
        if let Some(clip) = self.clip {
            clip.validate()?;
        }
        self.color.validate()
    }
}

/// Draw command for one axis-aligned filled rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
        }
    }

    pub fn validate(self) -> AxisResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(AxisError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 {
            return Err(AxisError::InvalidData(
                "rect size must be finite with width >= 0".to_owned(),
            ));
        }
        if self.height < 0.0 {
            return Err(AxisError::InvalidData(
                "rect height must be >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.text.is_empty() {
            return Err(AxisError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(AxisError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one label centered on its anchor and rotated clockwise
/// by `angle_degrees`.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedTextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub angle_degrees: f64,
    pub font_size_px: f64,
    pub color: Color,
}

impl RotatedTextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        angle_degrees: f64,
        font_size_px: f64,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            angle_degrees,
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.text.is_empty() {
            return Err(AxisError::InvalidData(
                "rotated text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.angle_degrees.is_finite() {
            return Err(AxisError::InvalidData(
                "rotated text coordinates and angle must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
