//! TWAP slice planning.
//!
//! A TWAP plan splits one logical quantity into `slices` market orders. Every
//! slice but the last uses the equal share rounded to eight decimal places;
//! the last slice takes whatever remains after the rounded slices, so the
//! submitted quantities always sum to the requested total.

use crate::error::TradingError;

/// Quantities are rounded to eight decimal places before submission.
const QUANTITY_DECIMALS: i32 = 8;

/// Round a quantity to the precision accepted by the order endpoint.
pub fn round_quantity(quantity: f64) -> f64 {
    let scale = 10f64.powi(QUANTITY_DECIMALS);
    (quantity * scale).round() / scale
}

/// Compute the per-slice quantities for a TWAP plan.
///
/// Fails with `InvalidParameter` before any order is issued when `slices` is
/// zero or the total quantity is not positive.
pub fn slice_quantities(total_quantity: f64, slices: usize) -> Result<Vec<f64>, TradingError> {
    if slices == 0 {
        return Err(TradingError::InvalidParameter(
            "slices must be >= 1".to_string(),
        ));
    }
    if !total_quantity.is_finite() || total_quantity <= 0.0 {
        return Err(TradingError::InvalidParameter(format!(
            "total quantity must be > 0, got {}",
            total_quantity
        )));
    }

    let base = round_quantity(total_quantity / slices as f64);
    let mut quantities = vec![base; slices];
    // Last slice absorbs the rounding remainder of the earlier slices.
    quantities[slices - 1] = round_quantity(total_quantity - base * (slices - 1) as f64);

    // A total too small to split at 8-decimal precision leaves empty slices;
    // reject the plan here, before any order is issued.
    if quantities.iter().any(|q| *q <= 0.0) {
        return Err(TradingError::InvalidParameter(format!(
            "total quantity {} cannot be split into {} non-zero slices at 8-decimal precision",
            total_quantity, slices
        )));
    }
    Ok(quantities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 3, vec![0.33333333, 0.33333333, 0.33333334])]
    #[case(1.0, 1, vec![1.0])]
    #[case(10.0, 4, vec![2.5, 2.5, 2.5, 2.5])]
    #[case(0.1, 7, vec![0.01428571, 0.01428571, 0.01428571, 0.01428571, 0.01428571, 0.01428571, 0.01428574])]
    fn slices_match_expected(
        #[case] total: f64,
        #[case] slices: usize,
        #[case] expected: Vec<f64>,
    ) {
        let quantities = slice_quantities(total, slices).unwrap();
        assert_eq!(quantities, expected);
    }

    #[rstest]
    #[case(1.0, 3)]
    #[case(2.5, 7)]
    #[case(0.00000009, 2)]
    #[case(123.456, 11)]
    fn slices_sum_to_total(#[case] total: f64, #[case] slices: usize) {
        let quantities = slice_quantities(total, slices).unwrap();
        assert_eq!(quantities.len(), slices);
        let sum: f64 = quantities.iter().sum();
        assert!(
            (sum - total).abs() < 1e-9,
            "sum {} drifted from total {}",
            sum,
            total
        );
    }

    #[test]
    fn zero_slices_is_rejected() {
        let err = slice_quantities(1.0, 0).unwrap_err();
        assert!(matches!(err, TradingError::InvalidParameter(_)));
    }

    #[test]
    fn dust_total_too_small_to_split_is_rejected() {
        // 0.00000002 over 3 slices would leave the last slice at zero.
        let err = slice_quantities(0.00000002, 3).unwrap_err();
        assert!(matches!(err, TradingError::InvalidParameter(_)));
        // The same total still splits cleanly into two slices.
        assert_eq!(
            slice_quantities(0.00000002, 2).unwrap(),
            vec![0.00000001, 0.00000001]
        );
    }

    #[test]
    fn non_positive_total_is_rejected() {
        assert!(slice_quantities(0.0, 3).is_err());
        assert!(slice_quantities(-1.0, 3).is_err());
        assert!(slice_quantities(f64::NAN, 3).is_err());
    }
}
