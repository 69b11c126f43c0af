use super::axis_config::AxisLabelPolicy;

/// Formats one tick value according to the configured policy.
pub(super) fn format_axis_value(value: f64, policy: AxisLabelPolicy) -> String {
    match policy {
        AxisLabelPolicy::FixedDecimals { precision } => {
            format!("{value:.prec$}", prec = usize::from(precision))
        }
        AxisLabelPolicy::MinMove {
            min_move,
            trim_trailing_zeros,
        } => {
            let mut snapped = (value / min_move).round() * min_move;
            if snapped == 0.0 {
                // Normalize -0.0 so labels never read "-0".
                snapped = 0.0;
            }
            let decimals = decimals_for_min_move(min_move);
            let formatted = format!("{snapped:.decimals$}");
            if trim_trailing_zeros && formatted.contains('.') {
                formatted
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_owned()
            } else {
                formatted
            }
        }
    }
}

/// Smallest decimal count that represents the minimum move exactly.
fn decimals_for_min_move(min_move: f64) -> usize {
    let mut scaled = min_move;
    for decimals in 0..=10 {
        if (scaled - scaled.round()).abs() <= scaled.abs().max(1.0) * 1e-9 {
            return decimals;
        }
        scaled *= 10.0;
    }
    10
}

#[cfg(test)]
mod tests {
    use super::super::axis_config::AxisLabelPolicy;
    use super::{decimals_for_min_move, format_axis_value};

    #[test]
    fn fixed_decimals_formats_with_exact_precision() {
        let policy = AxisLabelPolicy::FixedDecimals { precision: 2 };
        assert_eq!(format_axis_value(12.5, policy), "12.50");
        assert_eq!(format_axis_value(-3.14159, policy), "-3.14");
    }

    #[test]
    fn min_move_snaps_to_nearest_step() {
        let policy = AxisLabelPolicy::MinMove {
            min_move: 0.25,
            trim_trailing_zeros: false,
        };
        assert_eq!(format_axis_value(12.62, policy), "12.50");
        assert_eq!(format_axis_value(12.63, policy), "12.75");
    }

    #[test]
    fn min_move_trims_trailing_zeros_when_asked() {
        let policy = AxisLabelPolicy::MinMove {
            min_move: 0.25,
            trim_trailing_zeros: true,
        };
        assert_eq!(format_axis_value(12.5, policy), "12.5");
        assert_eq!(format_axis_value(13.0, policy), "13");
    }

    #[test]
    fn min_move_never_renders_negative_zero() {
        let policy = AxisLabelPolicy::MinMove {
            min_move: 0.5,
            trim_trailing_zeros: false,
        };
        assert_eq!(format_axis_value(-0.1, policy), "0.0");
    }

    #[test]
    fn decimals_follow_min_move_resolution() {
        assert_eq!(decimals_for_min_move(1.0), 0);
        assert_eq!(decimals_for_min_move(0.5), 1);
        assert_eq!(decimals_for_min_move(0.25), 2);
        assert_eq!(decimals_for_min_move(0.001), 3);
    }
}
