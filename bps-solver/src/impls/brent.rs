use crate::{Minimum, PricingError, Solver, SolverSettings, check_bounds};

// (3 - √5) / 2, the fraction of the interval taken by a golden-section step
const GOLDEN: f64 = 0.381_966_011_250_105_1;

/// Brent's method for bounded scalar minimization.
///
/// Each step is either a successive parabolic interpolation through the three
/// best points seen so far or, when the parabola is unacceptable, a
/// golden-section step into the larger part of the bracket. The objective is
/// only ever evaluated strictly inside the interval.
#[derive(Clone, Debug, Default)]
pub struct BrentSolver(SolverSettings);

impl Solver for BrentSolver {
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
        let sqrt_eps = f64::EPSILON.sqrt();

        // The bracket [a, b] always contains the best point xf. nfc and fulc are
        // the second and third best points, used to fit the parabola.
        let (mut a, mut b) = (lower, upper);
        let mut fulc = a + GOLDEN * (b - a);
        let mut nfc = fulc;
        let mut xf = fulc;

        // e is the step before last, rat the last step
        let mut rat: f64 = 0.0;
        let mut e: f64 = 0.0;

        let mut fx = objective(xf)?;
        let mut evaluations = 1;
        let mut ffulc = fx;
        let mut fnfc = fx;

        let mut xm = 0.5 * (a + b);
        let mut tol1 = sqrt_eps * xf.abs() + xatol / 3.0;
        let mut tol2 = 2.0 * tol1;
        let mut converged = true;

        while (xf - xm).abs() > tol2 - 0.5 * (b - a) {
            if evaluations >= max_evaluations {
                converged = false;
                break;
            }

            let mut golden = true;

            if e.abs() > tol1 {
                golden = false;

                // Fit a parabola through (xf, fx), (nfc, fnfc), (fulc, ffulc)
                let mut r = (xf - nfc) * (fx - ffulc);
                let mut q = (xf - fulc) * (fx - fnfc);
                let mut p = (xf - fulc) * q - (xf - nfc) * r;
                q = 2.0 * (q - r);
                if q > 0.0 {
                    p = -p;
                }
                q = q.abs();
                r = e;
                e = rat;

                // Accept the parabolic step only if it falls inside the bracket
                // and is less than half the step before last
                if p.abs() < (0.5 * q * r).abs() && p > q * (a - xf) && p < q * (b - xf) {
                    rat = p / q;
                    let x = xf + rat;

                    // Never evaluate too close to the ends of the bracket
                    if (x - a) < tol2 || (b - x) < tol2 {
                        rat = tol1 * sign_or_one(xm - xf);
                    }
                } else {
                    golden = true;
                }
            }

            if golden {
                e = if xf >= xm { a - xf } else { b - xf };
                rat = GOLDEN * e;
            }

            // Steps smaller than the tolerance are not informative
            let x = xf + sign_or_one(rat) * rat.abs().max(tol1);
            let fu = objective(x)?;
            evaluations += 1;

            if fu <= fx {
                if x >= xf {
                    a = xf;
                } else {
                    b = xf;
                }
                (fulc, ffulc) = (nfc, fnfc);
                (nfc, fnfc) = (xf, fx);
                (xf, fx) = (x, fu);
            } else {
                if x < xf {
                    a = x;
                } else {
                    b = x;
                }
                if fu <= fnfc || nfc == xf {
                    (fulc, ffulc) = (nfc, fnfc);
                    (nfc, fnfc) = (x, fu);
                } else if fu <= ffulc || fulc == xf || fulc == nfc {
                    (fulc, ffulc) = (x, fu);
                }
            }

            xm = 0.5 * (a + b);
            tol1 = sqrt_eps * xf.abs() + xatol / 3.0;
            tol2 = 2.0 * tol1;
        }

        Ok(Minimum {
            x: xf,
            fx,
            evaluations,
            converged,
        })
    }
}

// The sign of x, treating zero as positive
fn sign_or_one(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}
