use crate::core::thresholds::RiskThresholds;
use crate::error::{AxisError, AxisResult};

/// One visible band in value space, ephemeral per render pass.
///
/// `upper` is `None` for the open-ended top band. Partition output is ordered
/// top-to-bottom, i.e. descending boundary value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleBand {
    pub band_index: usize,
    pub lower: f64,
    pub upper: Option<f64>,
}

/// Index of the band a value falls into: the greatest boundary `<=` value.
///
/// Values below every boundary extend into the lowest band; values above
/// every boundary land in the open-ended top band.
#[must_use]
pub fn band_index_for_value(thresholds: &RiskThresholds, value: f64) -> Option<usize> {
    if thresholds.is_empty() {
        return None;
    }
    Some(
        thresholds
            .bands()
            .iter()
            .rposition(|band| band.boundary <= value)
            .unwrap_or(0),
    )
}

/// Slices the visible value range into bands.
///
/// Emits every band between the one containing `min_value` and the one
/// containing `max_value`, inclusive, ordered top-to-bottom. An empty
/// threshold list yields an empty partition; a reversed range is normalized.
pub fn partition_visible(
    thresholds: &RiskThresholds,
    min_value: f64,
    max_value: f64,
) -> AxisResult<Vec<VisibleBand>> {
    if !min_value.is_finite() || !max_value.is_finite() {
        return Err(AxisError::InvalidData(
            "visible range must be finite".to_owned(),
        ));
    }

    let (low, high) = if min_value <= max_value {
        (min_value, max_value)
    } else {
        (max_value, min_value)
    };

    let (Some(low_anchor), Some(high_anchor)) = (
        band_index_for_value(thresholds, low),
        band_index_for_value(thresholds, high),
    ) else {
        return Ok(Vec::new());
    };

    let bands = thresholds.bands();
    let visible = (low_anchor..=high_anchor)
        .rev()
        .map(|index| VisibleBand {
            band_index: index,
            lower: bands[index].boundary,
            upper: bands.get(index + 1).map(|next| next.boundary),
        })
        .collect();

    Ok(visible)
}

#[cfg(test)]
mod tests {
    use super::{band_index_for_value, partition_visible};
    use crate::core::thresholds::{RiskBandSpec, RiskThresholds};

    fn thresholds(boundaries: &[f64]) -> RiskThresholds {
        RiskThresholds::new(
            boundaries
                .iter()
                .enumerate()
                .map(|(index, boundary)| RiskBandSpec::new(*boundary, format!("band-{index}"), 0))
                .collect(),
        )
        .expect("ascending boundaries")
    }

    #[test]
    fn anchor_is_greatest_boundary_at_or_below_value() {
        let th = thresholds(&[2.5, 6.5, 13.0, 20.0]);

        assert_eq!(band_index_for_value(&th, 10.0), Some(2));
        assert_eq!(band_index_for_value(&th, 13.0), Some(2));
        assert_eq!(band_index_for_value(&th, 25.0), Some(3));
        assert_eq!(band_index_for_value(&th, 1.0), Some(0));
    }

    #[test]
    fn partition_is_ordered_top_to_bottom() {
        let th = thresholds(&[0.0, 10.0, 20.0]);
        let bands = partition_visible(&th, 5.0, 25.0).expect("partition");

        let indices: Vec<usize> = bands.iter().map(|band| band.band_index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
        assert_eq!(bands[0].upper, None);
        assert_eq!(bands[2].upper, Some(10.0));
    }

    #[test]
    fn reversed_range_is_normalized() {
        let th = thresholds(&[0.0, 10.0]);
        let forward = partition_visible(&th, 2.0, 12.0).expect("forward");
        let reversed = partition_visible(&th, 12.0, 2.0).expect("reversed");

        assert_eq!(forward, reversed);
    }

    #[test]
    fn empty_thresholds_partition_to_nothing() {
        let bands =
            partition_visible(&RiskThresholds::empty(), 0.0, 100.0).expect("empty partition");
        assert!(bands.is_empty());
    }

    #[test]
    fn non_finite_range_is_rejected() {
        let th = thresholds(&[0.0, 10.0]);
        assert!(partition_visible(&th, f64::NAN, 10.0).is_err());
        assert!(partition_visible(&th, 0.0, f64::INFINITY).is_err());
    }
}
