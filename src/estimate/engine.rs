//! The pure cost pipeline.
//!
//! Every function here is total over non-negative inputs and side-effect
//! free. Nothing rounds between steps; display rounding happens in the
//! report layer only.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{EstimateResult, JobEstimate, MaterialCost, MaterialLine};

/// Sum material line costs and record the per-material breakdown.
///
/// Unpriced lines get a breakdown entry with no cost and are excluded from
/// the total. Zero quantity is a valid "not needed" value.
pub fn material_costs(lines: &[MaterialLine]) -> (Decimal, Vec<MaterialCost>) {
    let mut total = Decimal::ZERO;
    let mut breakdown = Vec::with_capacity(lines.len());

    for line in lines {
        let cost = line.line_cost();
        if let Some(cost) = cost {
            total += cost;
        }
        breakdown.push(MaterialCost {
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            cost,
        });
    }

    (total, breakdown)
}

/// `hours × rate`.
pub fn labor_cost(hours: Decimal, rate: Decimal) -> Decimal {
    hours * rate
}

/// Overhead on the subtotal, then profit on the overhead-inclusive subtotal.
///
/// Profit stacking on top of overhead (not in parallel with it) is a
/// business rule; keep the order.
pub fn overhead_and_profit(
    subtotal: Decimal,
    overhead_pct: Decimal,
    profit_pct: Decimal,
) -> (Decimal, Decimal) {
    let overhead = subtotal * overhead_pct / dec!(100);
    let profit = (subtotal + overhead) * profit_pct / dec!(100);
    (overhead, profit)
}

/// Final total: all four components summed.
pub fn grand_total(
    material_total: Decimal,
    labor: Decimal,
    overhead: Decimal,
    profit: Decimal,
) -> Decimal {
    material_total + labor + overhead + profit
}

/// Run the full pipeline: materials → labor → overhead → profit → total.
pub fn compute(estimate: &JobEstimate) -> EstimateResult {
    let (material_total, breakdown) = material_costs(&estimate.materials);
    let labor = labor_cost(estimate.labor_hours, estimate.labor_rate);
    let subtotal = material_total + labor;
    let (overhead, profit) =
        overhead_and_profit(subtotal, estimate.overhead_pct, estimate.profit_pct);

    EstimateResult {
        material_total,
        labor_cost: labor,
        overhead_amount: overhead,
        profit_amount: profit,
        grand_total: grand_total(material_total, labor, overhead, profit),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn line(name: &str, quantity: Decimal, price: Decimal) -> MaterialLine {
        MaterialLine::priced(name, quantity, price)
    }

    #[test]
    fn material_total_is_sum_of_line_costs() {
        let lines = vec![
            line("2x4", dec!(10), dec!(3.50)),
            line("drywall sheet", dec!(5), dec!(13.00)),
        ];

        let (total, breakdown) = material_costs(&lines);

        assert_eq!(total, dec!(100.00));
        assert_eq!(breakdown[0].cost, Some(dec!(35.00)));
        assert_eq!(breakdown[1].cost, Some(dec!(65.00)));
    }

    #[test]
    fn unpriced_line_is_in_breakdown_but_not_total() {
        let lines = vec![
            line("2x4", dec!(10), dec!(3.50)),
            MaterialLine::unpriced("rebar", dec!(4)),
        ];

        let (total, breakdown) = material_costs(&lines);

        assert_eq!(total, dec!(35.00));
        assert_eq!(breakdown.len(), 2);
        assert!(breakdown[1].is_unpriced());
        assert_eq!(breakdown[1].quantity, dec!(4));
    }

    #[test]
    fn zero_quantity_contributes_nothing() {
        let (total, breakdown) = material_costs(&[line("paint (per gallon)", dec!(0), dec!(25))]);

        assert_eq!(total, Decimal::ZERO);
        assert_eq!(breakdown[0].cost, Some(Decimal::ZERO));
    }

    #[test]
    fn labor_cost_is_hours_times_rate() {
        assert_eq!(labor_cost(dec!(8), dec!(20)), dec!(160));
        assert_eq!(labor_cost(dec!(0), dec!(20)), Decimal::ZERO);
        assert_eq!(labor_cost(dec!(8), dec!(0)), Decimal::ZERO);
    }

    #[test]
    fn zero_percentages_yield_zero_amounts() {
        let (overhead, profit) = overhead_and_profit(dec!(225), dec!(0), dec!(0));
        assert_eq!(overhead, Decimal::ZERO);
        assert_eq!(profit, Decimal::ZERO);
    }

    #[test]
    fn profit_is_computed_on_overhead_inclusive_subtotal() {
        let (overhead, profit) = overhead_and_profit(dec!(100), dec!(10), dec!(10));

        assert_eq!(overhead, dec!(10));
        // 10% of 110, not 10% of 100.
        assert_eq!(profit, dec!(11));
        assert_ne!(profit, dec!(10));
    }

    #[test]
    fn materials_only_job() {
        // materials = {"2x4": (10, 3.50)}, everything else zero.
        let result = JobEstimate::new()
            .with_materials(vec![line("2x4", dec!(10), dec!(3.50))])
            .compute();

        assert_eq!(result.material_total, dec!(35.00));
        assert_eq!(result.labor_cost, Decimal::ZERO);
        assert_eq!(result.overhead_amount, Decimal::ZERO);
        assert_eq!(result.profit_amount, Decimal::ZERO);
        assert_eq!(result.grand_total, dec!(35.00));
    }

    #[test]
    fn full_pipeline_with_overhead_and_profit() {
        // drywall 5 × 13.00, 8 hrs @ 20, 10% overhead, 20% profit.
        let result = JobEstimate::new()
            .with_materials(vec![line("drywall sheet", dec!(5), dec!(13.00))])
            .with_labor(dec!(8), dec!(20))
            .with_overhead_pct(dec!(10))
            .with_profit_pct(dec!(20))
            .compute();

        assert_eq!(result.material_total, dec!(65.00));
        assert_eq!(result.labor_cost, dec!(160.00));
        assert_eq!(result.overhead_amount, dec!(22.50));
        // (225 + 22.50) × 0.20
        assert_eq!(result.profit_amount, dec!(49.50));
        assert_eq!(result.grand_total, dec!(297.00));
    }

    #[test]
    fn grand_total_sums_all_components() {
        assert_eq!(
            grand_total(dec!(65), dec!(160), dec!(22.50), dec!(49.50)),
            dec!(297.00)
        );
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let estimate = JobEstimate::new()
            .with_materials(vec![
                line("2x4", dec!(12), dec!(3.50)),
                MaterialLine::unpriced("rebar", dec!(3)),
            ])
            .with_labor(dec!(6.5), dec!(42.75))
            .with_overhead_pct(dec!(12.5))
            .with_profit_pct(dec!(30));

        assert_eq!(estimate.compute(), estimate.compute());
    }

    #[test]
    fn unpriced_names_are_surfaced() {
        let result = JobEstimate::new()
            .with_materials(vec![
                line("2x4", dec!(1), dec!(3.50)),
                MaterialLine::unpriced("rebar", dec!(4)),
            ])
            .compute();

        assert_eq!(result.unpriced_names(), vec!["rebar"]);
        assert_eq!(result.grand_total, dec!(3.50));
    }
}
