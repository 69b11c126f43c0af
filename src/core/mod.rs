pub mod bands;
pub mod thresholds;
pub mod transform;
pub mod types;

pub use bands::{VisibleBand, band_index_for_value, partition_visible};
pub use thresholds::{RiskBandSpec, RiskThresholds};
pub use transform::{LinearValueTransformer, ValueTransformer};
pub use types::{AxisSide, ContentRect, LabelPlacement};
