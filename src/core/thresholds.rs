use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// One risk band definition: a left-closed interval starting at `boundary`.
///
/// Band `i` spans `[boundary_i, boundary_{i+1})`; the last band is open-ended
/// above. Threshold feeds sometimes carry boundary values as strings, so
/// deserialization accepts both forms and parsing happens exactly once at
/// configuration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBandSpec {
    #[serde(deserialize_with = "boundary_from_number_or_string")]
    pub boundary: f64,
    pub label: String,
    pub color_index: usize,
}

impl RiskBandSpec {
    #[must_use]
    pub fn new(boundary: f64, label: impl Into<String>, color_index: usize) -> Self {
        Self {
            boundary,
            label: label.into(),
            color_index,
        }
    }
}

/// Validated, ascending list of risk band definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(try_from = "Vec<RiskBandSpec>", into = "Vec<RiskBandSpec>")]
pub struct RiskThresholds {
    bands: Vec<RiskBandSpec>,
}

impl RiskThresholds {
    /// Builds a threshold list, failing fast on unordered or non-finite
    /// boundaries.
    pub fn new(bands: Vec<RiskBandSpec>) -> AxisResult<Self> {
        for band in &bands {
            if !band.boundary.is_finite() {
                return Err(AxisError::InvalidThresholds(format!(
                    "boundary for band `{}` must be finite",
                    band.label
                )));
            }
        }

        for pair in bands.windows(2) {
            if pair[1].boundary <= pair[0].boundary {
                return Err(AxisError::InvalidThresholds(format!(
                    "boundaries must be strictly ascending: {} then {}",
                    pair[0].boundary, pair[1].boundary
                )));
            }
        }

        Ok(Self { bands })
    }

    /// Parses a threshold list from a JSON array of band specs.
    pub fn from_json_str(json: &str) -> AxisResult<Self> {
        let bands: Vec<RiskBandSpec> = serde_json::from_str(json)?;
        Self::new(bands)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { bands: Vec::new() }
    }

    #[must_use]
    pub fn bands(&self) -> &[RiskBandSpec] {
        &self.bands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    #[must_use]
    pub fn max_color_index(&self) -> Option<usize> {
        self.bands.iter().map(|band| band.color_index).max()
    }
}

impl TryFrom<Vec<RiskBandSpec>> for RiskThresholds {
    type Error = AxisError;

    fn try_from(bands: Vec<RiskBandSpec>) -> AxisResult<Self> {
        Self::new(bands)
    }
}

impl From<RiskThresholds> for Vec<RiskBandSpec> {
    fn from(thresholds: RiskThresholds) -> Self {
        thresholds.bands
    }
}

fn boundary_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("boundary is not numeric: `{text}`"))),
    }
}
