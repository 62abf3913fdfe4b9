use crate::error::SelectError;
use crate::types::Flag;

/// Total cost of a selection: `sum(costs[i] * flags[i])`.
///
/// If a selected cost is infinite, that value is returned immediately and
/// every other term is ignored. When both infinities are selected, the one
/// that comes first in `costs` wins. Empty input sums to `0.0`.
///
/// Fails with [`SelectError::LengthMismatch`] when the slices differ in
/// length; the documented numeric result in that case is `0.0`.
pub fn sum_selected(costs: &[f64], flags: &[Flag]) -> Result<f64, SelectError> {
    if costs.len() != flags.len() {
        return Err(SelectError::LengthMismatch {
            costs: costs.len(),
            flags: flags.len(),
        });
    }

    let mut total = 0.0;
    for (&cost, &flag) in costs.iter().zip(flags) {
        if cost.is_infinite() {
            if flag == 1 {
                return Ok(cost);
            }
        } else {
            total += cost * f64::from(flag);
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unselected_infinity_is_skipped() {
        // inf * 0 would be NaN; unselected infinities contribute nothing.
        assert_eq!(sum_selected(&[f64::INFINITY, 2.0], &[0, 1]), Ok(2.0));
    }

    #[test]
    fn test_first_selected_infinity_wins() {
        let costs = [1.0, f64::NEG_INFINITY, f64::INFINITY];
        assert_eq!(sum_selected(&costs, &[1, 1, 1]), Ok(f64::NEG_INFINITY));

        let costs = [1.0, f64::INFINITY, f64::NEG_INFINITY];
        assert_eq!(sum_selected(&costs, &[1, 1, 1]), Ok(f64::INFINITY));
    }

    #[test]
    fn test_mismatch_reports_both_lengths() {
        assert_eq!(
            sum_selected(&[1.0, 2.0, 3.0], &[1, 0]),
            Err(SelectError::LengthMismatch { costs: 3, flags: 2 })
        );
    }
}
