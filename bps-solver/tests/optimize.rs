use approx::assert_abs_diff_eq;
use bps_core::models::ProductRecord;
use bps_solver::{OptimizerConfig, PriceOptimizer, ProfitObjective, Solver};
use rstest::*;
use rstest_reuse::{self, *};

use all_solvers::all_solvers;

fn optimizer<S: Solver>(solver: S) -> PriceOptimizer<S> {
    PriceOptimizer::new(solver, OptimizerConfig::default())
}

// Demand of 10000 / p², so profit (p - 3) * 10000 / p² peaks at p = 6 with ≈ 833.33
#[fixture]
pub fn widget() -> ProductRecord {
    ProductRecord::new("widget", 100.0, 10.0, -2.0, 1000, 3.0).unwrap()
}

#[apply(all_solvers)]
#[rstest]
fn interior_optimum(solver: impl Solver, widget: ProductRecord) {
    let metrics = optimizer(solver).optimize(&widget).unwrap();

    assert!(metrics.optimal_price > 3.0 && metrics.optimal_price < 30.0);
    assert!(metrics.optimal_price > 5.0 && metrics.optimal_price < 7.0);
    assert!(metrics.demand > 0);
    assert!(metrics.profit > 810.0);

    assert_abs_diff_eq!(metrics.revenue - metrics.cost, metrics.profit, epsilon = 1e-9);
    assert_abs_diff_eq!(
        metrics.margin,
        metrics.profit / metrics.revenue,
        epsilon = 0.01
    );
}

#[apply(all_solvers)]
#[rstest]
fn profit_matches_revenue_less_cost(solver: impl Solver) {
    let optimizer = optimizer(solver);

    // unit costs of 0.015, 0.025, ..., 3.995 land the cost on fractional cents
    for step in 0..399 {
        let unit_cost = 0.015 + 0.01 * step as f64;
        let record = ProductRecord::new("widget", 100.0, 10.0, -2.0, 1000, unit_cost).unwrap();
        let metrics = optimizer.optimize(&record).unwrap();
        assert_abs_diff_eq!(metrics.revenue - metrics.cost, metrics.profit, epsilon = 1e-9);
    }
}

#[apply(all_solvers)]
#[rstest]
fn beats_both_endpoints(solver: impl Solver, widget: ProductRecord) {
    let metrics = optimizer(solver).optimize(&widget).unwrap();
    let objective = ProfitObjective::new(&widget);

    assert!(metrics.profit >= objective.profit(3.0).unwrap());
    assert!(metrics.profit >= objective.profit(30.0).unwrap());
}

#[apply(all_solvers)]
#[rstest]
fn deterministic(solver: impl Solver, widget: ProductRecord) {
    let optimizer = optimizer(solver);
    let first = optimizer.optimize(&widget).unwrap();
    let second = optimizer.optimize(&widget).unwrap();
    assert_eq!(first, second);
}

#[apply(all_solvers)]
#[rstest]
fn binding_capacity(solver: impl Solver) {
    // At most 100 units: profit rises linearly until demand drops below capacity near p = 10
    let record = ProductRecord::new("scarce", 100.0, 10.0, -2.0, 100, 3.0).unwrap();
    let metrics = optimizer(solver).optimize(&record).unwrap();

    assert!(metrics.demand <= 100);
    assert!(metrics.profit > 680.0);
    assert!(metrics.optimal_price > 9.5 && metrics.optimal_price < 10.6);
}

#[apply(all_solvers)]
#[rstest]
fn zero_capacity(solver: impl Solver, widget: ProductRecord) {
    let record = ProductRecord {
        max_capacity: 0,
        ..widget
    };
    let metrics = optimizer(solver).optimize(&record).unwrap();

    // profit is flat, so any price in the interval is acceptable
    assert!(metrics.optimal_price >= 3.0 && metrics.optimal_price <= 30.0);
    assert_eq!(metrics.demand, 0);
    assert_eq!(metrics.revenue, 0.0);
    assert_eq!(metrics.profit, 0.0);
    assert_eq!(metrics.margin, 0.0);
}

#[apply(all_solvers)]
#[rstest]
fn zero_base_demand(solver: impl Solver, widget: ProductRecord) {
    let record = ProductRecord {
        base_demand: 0.0,
        ..widget
    };
    let metrics = optimizer(solver).optimize(&record).unwrap();

    assert_eq!(metrics.demand, 0);
    assert_eq!(metrics.profit, 0.0);
    assert_eq!(metrics.margin, 0.0);
}

#[apply(all_solvers)]
#[rstest]
fn zero_elasticity(solver: impl Solver) {
    let optimizer = optimizer(solver);

    for (base_demand, expected) in [(42.0, 42), (42.5, 42), (43.5, 44)] {
        let record = ProductRecord::new("staple", base_demand, 10.0, 0.0, 1000, 1.0).unwrap();
        let metrics = optimizer.optimize(&record).unwrap();

        assert_eq!(metrics.demand, expected);
        // constant demand means profit grows with price, up to the ceiling
        assert_abs_diff_eq!(metrics.optimal_price, 30.0, epsilon = 0.011);
    }
}

#[apply(all_solvers)]
#[rstest]
fn inelastic_demand_hits_the_ceiling(solver: impl Solver) {
    let record = ProductRecord::new("habit", 100.0, 10.0, -0.5, 1000, 3.0).unwrap();
    let metrics = optimizer(solver).optimize(&record).unwrap();

    assert!(metrics.optimal_price > 25.0 && metrics.optimal_price <= 30.0);
    assert!(metrics.profit > 1400.0);
}

#[apply(all_solvers)]
#[rstest]
fn cost_equal_to_base_price(solver: impl Solver) {
    // (p - 10) * 10000 / p² peaks at p = 20
    let record = ProductRecord::new("thin", 100.0, 10.0, -2.0, 1000, 10.0).unwrap();
    let metrics = optimizer(solver).optimize(&record).unwrap();

    assert!(metrics.optimal_price > 10.0 && metrics.optimal_price <= 30.0);
    assert!(metrics.profit > 0.0);
}

#[apply(all_solvers)]
#[rstest]
fn free_to_produce(solver: impl Solver) {
    // With no cost the search starts at a price of zero; revenue peaks where
    // demand meets the capacity, near p = √10
    let record = ProductRecord::new("digital", 100.0, 10.0, -2.0, 1000, 0.0).unwrap();
    let metrics = optimizer(solver).optimize(&record).unwrap();

    assert!(metrics.demand <= 1000);
    assert!(metrics.optimal_price > 3.0 && metrics.optimal_price < 3.3);
    assert!(metrics.profit > 3050.0);
    assert_eq!(metrics.cost, 0.0);
}

#[apply(all_solvers)]
#[rstest]
fn wider_search(solver: impl Solver, widget: ProductRecord) {
    let record = ProductRecord {
        elasticity: 0.0,
        ..widget
    };
    let optimizer = PriceOptimizer::new(
        solver,
        OptimizerConfig {
            upper_bound_multiplier: 5.0,
        },
    );
    let metrics = optimizer.optimize(&record).unwrap();
    assert_abs_diff_eq!(metrics.optimal_price, 50.0, epsilon = 0.011);
}
