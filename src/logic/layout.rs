use std::fmt;

use thiserror::Error;

use crate::models::layout::{LayoutPayload, LayoutRequest, LayoutResult, RawDimension};

/// What is wrong with a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionFault {
    Missing,
    NotANumber,
    NotFinite,
    NotPositive,
    /// The plot holds more plants, or more area, than can be represented.
    OutOfRange,
}

impl fmt::Display for DimensionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DimensionFault::Missing => "is missing",
            DimensionFault::NotANumber => "is not a number",
            DimensionFault::NotFinite => "must be a finite number",
            DimensionFault::NotPositive => "must be strictly positive",
            DimensionFault::OutOfRange => "is too large for the given spacing",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LayoutError {
    #[error("invalid dimension: `{field}` {fault}")]
    InvalidDimension {
        field: &'static str,
        fault: DimensionFault,
    },
}

fn check_dimension(field: &'static str, value: f64) -> Result<f64, LayoutError> {
    let fault = if !value.is_finite() {
        DimensionFault::NotFinite
    } else if value <= 0.0 {
        DimensionFault::NotPositive
    } else {
        return Ok(value);
    };
    Err(LayoutError::InvalidDimension { field, fault })
}

fn parse_dimension(field: &'static str, raw: Option<&RawDimension>) -> Result<f64, LayoutError> {
    let value = match raw {
        None => {
            return Err(LayoutError::InvalidDimension {
                field,
                fault: DimensionFault::Missing,
            })
        }
        Some(RawDimension::Number(n)) => *n,
        Some(RawDimension::Text(text)) => {
            text.trim()
                .parse::<f64>()
                .map_err(|_| LayoutError::InvalidDimension {
                    field,
                    fault: DimensionFault::NotANumber,
                })?
        }
    };
    check_dimension(field, value)
}

impl TryFrom<&LayoutPayload> for LayoutRequest {
    type Error = LayoutError;

    fn try_from(payload: &LayoutPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            plot_length: parse_dimension("farmLength", payload.farm_length.as_ref())?,
            plot_width: parse_dimension("farmWidth", payload.farm_width.as_ref())?,
            plant_row_spacing: parse_dimension(
                "plantLengthSpacing",
                payload.plant_length_spacing.as_ref(),
            )?,
            plant_column_spacing: parse_dimension(
                "plantWidthSpacing",
                payload.plant_width_spacing.as_ref(),
            )?,
        })
    }
}

/// Counts at or above 2^64 do not fit in a `u64`.
const COUNT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn out_of_range(field: &'static str) -> LayoutError {
    LayoutError::InvalidDimension {
        field,
        fault: DimensionFault::OutOfRange,
    }
}

/// Number of plants fitting along one axis and the length they occupy.
fn fit_axis(field: &'static str, extent: f64, spacing: f64) -> Result<(u64, f64), LayoutError> {
    let count = (extent / spacing).floor();
    if count >= COUNT_LIMIT {
        return Err(out_of_range(field));
    }
    let count = count as u64;
    // The product can overshoot `extent` by an ulp.
    let used = (count as f64 * spacing).min(extent);
    Ok((count, used))
}

/// Packs a rectangular grid of plants into the plot.
/// Remainders along each axis are dropped; nothing is centred or rounded up.
/// Plots whose plant count or area overflows are rejected as `OutOfRange`.
pub fn compute_layout(request: &LayoutRequest) -> Result<LayoutResult, LayoutError> {
    let plot_length = check_dimension("plot_length", request.plot_length)?;
    let plot_width = check_dimension("plot_width", request.plot_width)?;
    let row_spacing = check_dimension("plant_row_spacing", request.plant_row_spacing)?;
    let column_spacing = check_dimension("plant_column_spacing", request.plant_column_spacing)?;

    let (plants_per_row, used_length) = fit_axis("plot_length", plot_length, row_spacing)?;
    let (plants_per_column, used_width) = fit_axis("plot_width", plot_width, column_spacing)?;
    let max_capacity = plants_per_row
        .checked_mul(plants_per_column)
        .ok_or_else(|| out_of_range("plot"))?;

    let total_area = plot_length * plot_width;
    if !total_area.is_finite() {
        return Err(out_of_range("plot"));
    }
    let used_area = used_length * used_width;
    // Per-axis ratios stay in [0, 1] whatever the magnitudes.
    let utilization_percent =
        ((used_length / plot_length) * (used_width / plot_width) * 100.0).clamp(0.0, 100.0);

    Ok(LayoutResult {
        plants_per_row,
        plants_per_column,
        max_capacity,
        used_length,
        used_width,
        used_area,
        total_area,
        utilization_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(length: f64, width: f64, row: f64, column: f64) -> LayoutRequest {
        LayoutRequest {
            plot_length: length,
            plot_width: width,
            plant_row_spacing: row,
            plant_column_spacing: column,
        }
    }

    #[test]
    fn test_exact_fit_uses_whole_plot() {
        let result = compute_layout(&request(10.0, 10.0, 2.0, 2.0)).unwrap();
        assert_eq!(result.plants_per_row, 5);
        assert_eq!(result.plants_per_column, 5);
        assert_eq!(result.max_capacity, 25);
        assert_eq!(result.used_length, 10.0);
        assert_eq!(result.used_width, 10.0);
        assert_eq!(result.utilization_percent, 100.0);
    }

    #[test]
    fn test_remainders_are_dropped() {
        let result = compute_layout(&request(10.0, 5.0, 3.0, 3.0)).unwrap();
        assert_eq!(result.plants_per_row, 3);
        assert_eq!(result.plants_per_column, 1);
        assert_eq!(result.max_capacity, 3);
        assert_eq!(result.used_length, 9.0);
        assert_eq!(result.used_width, 3.0);
        assert_eq!(result.total_area, 50.0);
        assert!((result.utilization_percent - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_spacing_larger_than_plot_is_empty_not_error() {
        let result = compute_layout(&request(1.0, 1.0, 5.0, 5.0)).unwrap();
        assert_eq!(result.max_capacity, 0);
        assert_eq!(result.used_length, 0.0);
        assert_eq!(result.used_width, 0.0);
        assert_eq!(result.utilization_percent, 0.0);
    }

    #[test]
    fn test_one_empty_axis_zeroes_capacity() {
        let result = compute_layout(&request(10.0, 1.0, 2.0, 5.0)).unwrap();
        assert_eq!(result.plants_per_row, 5);
        assert_eq!(result.plants_per_column, 0);
        assert_eq!(result.max_capacity, 0);
        assert_eq!(result.utilization_percent, 0.0);
    }

    #[test]
    fn test_zero_length_is_invalid() {
        let err = compute_layout(&request(0.0, 10.0, 2.0, 2.0)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidDimension {
                field: "plot_length",
                fault: DimensionFault::NotPositive
            }
        );
    }

    #[test]
    fn test_negative_spacing_is_invalid() {
        let err = compute_layout(&request(10.0, 10.0, 2.0, -1.0)).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidDimension { field: "plant_column_spacing", .. }
        ));
    }

    #[test]
    fn test_nan_is_invalid() {
        let err = compute_layout(&request(f64::NAN, 10.0, 2.0, 2.0)).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidDimension { fault: DimensionFault::NotFinite, .. }
        ));
    }

    #[test]
    fn test_huge_plot_keeps_utilization_in_range() {
        // Powers of two keep the quotients exact: 2^500 / 2^483 = 2^17 per axis.
        let plot = 2f64.powi(500);
        let spacing = 2f64.powi(483);
        let result = compute_layout(&request(plot, plot, spacing, spacing)).unwrap();
        assert_eq!(result.plants_per_row, 1 << 17);
        assert_eq!(result.max_capacity, 1 << 34);
        assert!(result.total_area.is_finite());
        assert!(result.used_area.is_finite());
        assert_eq!(result.utilization_percent, 100.0);
    }

    #[test]
    fn test_plot_area_overflow_is_out_of_range() {
        let err = compute_layout(&request(1e200, 1e200, 1e190, 1e190)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidDimension {
                field: "plot",
                fault: DimensionFault::OutOfRange
            }
        );
    }

    #[test]
    fn test_axis_count_beyond_u64_is_out_of_range() {
        let err = compute_layout(&request(1e30, 1.0, 1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidDimension {
                field: "plot_length",
                fault: DimensionFault::OutOfRange
            }
        );
    }

    #[test]
    fn test_capacity_overflow_is_out_of_range() {
        // 1e10 plants per axis fit a u64 each, their product does not.
        let err = compute_layout(&request(1e10, 1e10, 1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidDimension {
                field: "plot",
                fault: DimensionFault::OutOfRange
            }
        );
    }

    #[test]
    fn test_error_message_names_field() {
        let err = compute_layout(&request(10.0, 0.0, 2.0, 2.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid dimension: `plot_width` must be strictly positive"
        );
    }

    #[test]
    fn test_payload_accepts_numeric_text() {
        let payload = LayoutPayload {
            farm_length: Some(RawDimension::Text(" 12.5 ".into())),
            farm_width: Some(RawDimension::Number(6.0)),
            plant_width_spacing: Some(RawDimension::Number(1.8)),
            plant_length_spacing: Some(RawDimension::Text("2.4".into())),
        };
        let req = LayoutRequest::try_from(&payload).unwrap();
        assert_eq!(req.plot_length, 12.5);
        assert_eq!(req.plant_row_spacing, 2.4);
        assert_eq!(req.plant_column_spacing, 1.8);
    }

    #[test]
    fn test_payload_missing_field() {
        let payload = LayoutPayload {
            farm_length: Some(RawDimension::Number(10.0)),
            farm_width: Some(RawDimension::Number(10.0)),
            plant_width_spacing: Some(RawDimension::Number(2.0)),
            plant_length_spacing: None,
        };
        let err = LayoutRequest::try_from(&payload).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidDimension {
                field: "plantLengthSpacing",
                fault: DimensionFault::Missing
            }
        );
    }

    #[test]
    fn test_payload_rejects_garbage_text() {
        let payload = LayoutPayload {
            farm_length: Some(RawDimension::Text("ten".into())),
            ..Default::default()
        };
        let err = LayoutRequest::try_from(&payload).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidDimension {
                field: "farmLength",
                fault: DimensionFault::NotANumber
            }
        );
    }

    #[test]
    fn test_payload_rejects_infinite_text() {
        let payload = LayoutPayload {
            farm_length: Some(RawDimension::Text("inf".into())),
            ..Default::default()
        };
        let err = LayoutRequest::try_from(&payload).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidDimension { fault: DimensionFault::NotFinite, .. }
        ));
    }

    fn dimension() -> impl Strategy<Value = f64> {
        0.01f64..1_000.0
    }

    /// Any positive finite magnitude, from 1e-300 up to about 1e300.
    fn any_magnitude() -> impl Strategy<Value = f64> {
        (-300i32..=300, 1.0f64..10.0).prop_map(|(exp, mantissa)| mantissa * 10f64.powi(exp))
    }

    proptest! {
        #[test]
        fn prop_capacity_is_product_of_axes(
            length in dimension(), width in dimension(),
            row in dimension(), column in dimension(),
        ) {
            let result = compute_layout(&request(length, width, row, column)).unwrap();
            prop_assert_eq!(result.max_capacity, result.plants_per_row * result.plants_per_column);
        }

        #[test]
        fn prop_footprint_stays_inside_plot(
            length in dimension(), width in dimension(),
            row in dimension(), column in dimension(),
        ) {
            let result = compute_layout(&request(length, width, row, column)).unwrap();
            prop_assert!(result.used_length <= length);
            prop_assert!(result.used_width <= width);
            prop_assert!((0.0..=100.0).contains(&result.utilization_percent));
        }

        #[test]
        fn prop_oversized_spacing_fits_nothing(
            length in dimension(), width in dimension(),
            extra in 0.001f64..100.0, column in dimension(),
        ) {
            let result = compute_layout(&request(length, width, length + extra, column)).unwrap();
            prop_assert_eq!(result.plants_per_row, 0);
            prop_assert_eq!(result.max_capacity, 0);
        }

        #[test]
        fn prop_extreme_magnitudes_stay_bounded_or_are_rejected(
            length in any_magnitude(), width in any_magnitude(),
            row in any_magnitude(), column in any_magnitude(),
        ) {
            match compute_layout(&request(length, width, row, column)) {
                Ok(result) => {
                    prop_assert!((0.0..=100.0).contains(&result.utilization_percent));
                    prop_assert!(result.used_length <= length);
                    prop_assert!(result.used_width <= width);
                    prop_assert!(result.total_area.is_finite());
                    prop_assert_eq!(
                        Some(result.max_capacity),
                        result.plants_per_row.checked_mul(result.plants_per_column)
                    );
                }
                Err(err) => prop_assert!(
                    matches!(err, LayoutError::InvalidDimension { fault: DimensionFault::OutOfRange, .. }),
                    "unexpected error {:?}", err
                ),
            }
        }

        #[test]
        fn prop_is_idempotent(
            length in dimension(), width in dimension(),
            row in dimension(), column in dimension(),
        ) {
            let req = request(length, width, row, column);
            prop_assert_eq!(compute_layout(&req).unwrap(), compute_layout(&req).unwrap());
        }
    }
}
