use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Pixel-space content rectangle owned by the host view.
///
/// The renderer reads it fresh on every pass and never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ContentRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.right > self.left
            && self.bottom > self.top
    }

    pub fn validate(self) -> AxisResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AxisError::InvalidContentRect {
                left: self.left,
                top: self.top,
                right: self.right,
                bottom: self.bottom,
            })
        }
    }

    /// Grows the rect by `dy / 2` above and below.
    ///
    /// Line clipping rects use this so stroke caps at the content edge are
    /// not cut off.
    #[must_use]
    pub fn expanded_vertically(self, dy: f64) -> Self {
        Self {
            left: self.left,
            top: self.top - dy / 2.0,
            right: self.right,
            bottom: self.bottom + dy / 2.0,
        }
    }
}

/// Side of the plot the axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

/// Whether tick labels sit inside or outside the content rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LabelPlacement {
    #[default]
    OutsideChart,
    InsideChart,
}

#[cfg(test)]
mod tests {
    use super::ContentRect;

    #[test]
    fn expanded_vertically_adds_full_width_to_height() {
        let rect = ContentRect::new(10.0, 20.0, 410.0, 320.0);
        let expanded = rect.expanded_vertically(4.0);

        assert_eq!(expanded.left, rect.left);
        assert_eq!(expanded.right, rect.right);
        assert!((expanded.height() - (rect.height() + 4.0)).abs() <= 1e-12);
        assert!((expanded.top - 18.0).abs() <= 1e-12);
    }

    #[test]
    fn degenerate_rect_is_invalid() {
        assert!(!ContentRect::new(0.0, 0.0, 0.0, 100.0).is_valid());
        assert!(!ContentRect::new(0.0, 0.0, 100.0, 0.0).is_valid());
        assert!(!ContentRect::new(0.0, f64::NAN, 100.0, 100.0).is_valid());
    }
}
