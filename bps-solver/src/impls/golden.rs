use crate::{Minimum, PricingError, Solver, SolverSettings, check_bounds};

// (√5 - 1) / 2
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Golden-section search.
///
/// Shrinks the bracket by a constant factor per evaluation until it is no
/// wider than twice the tolerance. Slower than [`BrentSolver`](crate::brent::BrentSolver)
/// on smooth objectives, but makes no use of the objective's shape at all.
#[derive(Clone, Debug, Default)]
pub struct GoldenSectionSolver(SolverSettings);

impl Solver for GoldenSectionSolver {
    type Settings = SolverSettings;

    fn new(settings: Self::Settings) -> Self {
        Self(settings)
    }

    fn minimize<F>(&self, mut objective: F, lower: f64, upper: f64) -> Result<Minimum, PricingError>
    where
        F: FnMut(f64) -> Result<f64, PricingError>,
    {
        check_bounds(lower, upper)?;

        let xatol = self.0.xatol;
        let max_evaluations = self.0.evaluation_limit();

        let (mut a, mut b) = (lower, upper);

        // Nothing to search: report the midpoint of the (tiny) bracket
        if b - a <= 2.0 * xatol {
            let x = 0.5 * (a + b);
            return Ok(Minimum {
                x,
                fx: objective(x)?,
                evaluations: 1,
                converged: true,
            });
        }

        let mut c = b - INV_PHI * (b - a);
        let mut d = a + INV_PHI * (b - a);
        let mut fc = objective(c)?;
        let mut fd = objective(d)?;
        let mut evaluations = 2;

        // Ties favor the lower price, which keeps results reproducible on plateaus
        let mut best = if fd < fc { (d, fd) } else { (c, fc) };

        while b - a > 2.0 * xatol && evaluations < max_evaluations {
            if fc <= fd {
                b = d;
                (d, fd) = (c, fc);
                c = b - INV_PHI * (b - a);
                fc = objective(c)?;
                if fc < best.1 {
                    best = (c, fc);
                }
            } else {
                a = c;
                (c, fc) = (d, fd);
                d = a + INV_PHI * (b - a);
                fd = objective(d)?;
                if fd < best.1 {
                    best = (d, fd);
                }
            }
            evaluations += 1;
        }

        Ok(Minimum {
            x: best.0,
            fx: best.1,
            evaluations,
            converged: b - a <= 2.0 * xatol,
        })
    }
}
