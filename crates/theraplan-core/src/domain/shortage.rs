//! Comparison of projected demand against available stock.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{demand::Demand, value_objects::MedicationId};

/// A medication whose remaining demand exceeds the stock on hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortage {
    pub medication: MedicationId,
    pub description: String,
    pub needed: f64,
    pub available: f64,
}

impl Shortage {
    /// How much is missing to cover the remaining doses.
    pub fn deficit(&self) -> f64 {
        self.needed - self.available
    }
}

/// Relative slack under which demand and stock count as equal.
const QUANTITY_TOLERANCE: f64 = 1e-9;

/// `true` when `needed` exceeds `available` by more than rounding noise.
///
/// The tolerance scales with the larger operand.
fn exceeds(needed: f64, available: f64) -> bool {
    let scale = needed.abs().max(available.abs()).max(1.0);
    needed - available > QUANTITY_TOLERANCE * scale
}

/// Keep the medications whose demand is strictly greater than what
/// `available` reports for them.
///
/// Every medication is reported at most once and in the order of `demands`.
/// The first lookup error aborts the evaluation; no partial list is returned.
pub fn evaluate_shortages<F, E>(demands: &[Demand], mut available: F) -> Result<Vec<Shortage>, E>
where
    F: FnMut(MedicationId) -> Result<f64, E>,
{
    let mut seen = HashSet::new();
    let mut shortages = Vec::new();

    for demand in demands {
        if demand.needed == 0.0 || !seen.insert(demand.medication) {
            continue;
        }

        let on_hand = available(demand.medication)?;
        if exceeds(demand.needed, on_hand) {
            shortages.push(Shortage {
                medication: demand.medication,
                description: demand.description.clone(),
                needed: demand.needed,
                available: on_hand,
            });
        }
    }

    Ok(shortages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand(med: i32, needed: f64) -> Demand {
        Demand {
            medication: MedicationId::new(med),
            description: format!("Med {med}"),
            remaining_dates: 1,
            needed,
        }
    }

    fn stock(med: MedicationId) -> Result<f64, ()> {
        Ok(match med.get() {
            1 => 16.0,
            2 => 0.0,
            _ => -2.0,
        })
    }

    #[test]
    fn demand_within_stock_is_not_a_shortage() {
        let out = evaluate_shortages(&[demand(1, 12.0)], stock).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn demand_equal_to_stock_is_not_a_shortage() {
        let out = evaluate_shortages(&[demand(1, 16.0)], stock).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn demand_above_stock_is_a_shortage() {
        let out = evaluate_shortages(&[demand(1, 17.0)], stock).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].deficit(), 1.0);
    }

    #[test]
    fn fractional_dose_matching_stock_is_not_a_shortage() {
        // 0.1 * 3.0 is 0.30000000000000004
        let needed = 0.1 * 3.0 * 1.0;
        let out = evaluate_shortages(&[demand(4, needed)], |_| Ok::<_, ()>(0.3)).unwrap();
        assert!(out.is_empty());

        let out = evaluate_shortages(&[demand(4, 0.31)], |_| Ok::<_, ()>(0.3)).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn medication_reported_once() {
        let out = evaluate_shortages(&[demand(2, 1.0), demand(2, 4.0)], stock).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].needed, 1.0);
    }

    #[test]
    fn negative_stock_is_compared_unclamped() {
        let out = evaluate_shortages(&[demand(3, 1.0), demand(1, 20.0)], stock).unwrap();
        let ids: Vec<_> = out.iter().map(|s| s.medication.get()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(out[0].available, -2.0);
    }

    #[test]
    fn lookup_error_aborts() {
        let result = evaluate_shortages(&[demand(1, 1.0)], |_| Err::<f64, _>("catalog down"));
        assert_eq!(result, Err("catalog down"));
    }
}
