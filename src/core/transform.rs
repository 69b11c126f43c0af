use crate::core::types::ContentRect;
use crate::error::{AxisError, AxisResult};

/// Contract implemented by the host's value-to-pixel coordinate transformer.
///
/// The renderer only ever maps axis values to vertical pixel positions, so
/// the seam is a single-value mapping plus a bulk variant for tick arrays.
pub trait ValueTransformer {
    fn value_to_pixel_y(&self, value: f64) -> AxisResult<f64>;

    fn values_to_pixel_y(&self, values: &[f64]) -> AxisResult<Vec<f64>> {
        values
            .iter()
            .map(|value| self.value_to_pixel_y(*value))
            .collect()
    }
}

/// Linear value-axis transform over a content rect.
///
/// `domain_max` maps to the content top and `domain_min` to the content
/// bottom, matching screen-space Y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearValueTransformer {
    domain_min: f64,
    domain_max: f64,
    content: ContentRect,
}

impl LinearValueTransformer {
    pub fn new(domain_min: f64, domain_max: f64, content: ContentRect) -> AxisResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min == domain_max {
            return Err(AxisError::InvalidData(
                "transform domain must be finite and non-zero".to_owned(),
            ));
        }
        content.validate()?;

        Ok(Self {
            domain_min,
            domain_max,
            content,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn content(self) -> ContentRect {
        self.content
    }

    pub fn pixel_y_to_value(self, pixel: f64) -> AxisResult<f64> {
        if !pixel.is_finite() {
            return Err(AxisError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (self.content.bottom - pixel) / self.content.height();
        Ok(self.domain_min + normalized * (self.domain_max - self.domain_min))
    }
}

impl ValueTransformer for LinearValueTransformer {
    fn value_to_pixel_y(&self, value: f64) -> AxisResult<f64> {
        if !value.is_finite() {
            return Err(AxisError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_max - self.domain_min;
        let normalized = (value - self.domain_min) / span;
        Ok(self.content.bottom - normalized * self.content.height())
    }
}
