use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use descent_core::{FnObjective, Objective, vector};

use super::{Config, Error, backtrack, search};
use crate::optimization::Quantity;

fn parabola() -> impl Objective<1, Error = Infallible> {
    // f(x) = x² - 2x - 5, minimized at x = 1 with f = -6.
    FnObjective::new(
        |x: &[f64; 1]| x[0].powi(2) - 2.0 * x[0] - 5.0,
        |x: &[f64; 1]| [2.0 * x[0] - 2.0],
    )
}

#[test]
fn parabola_step_from_origin() {
    let f = parabola();
    let x = [0.0];
    let direction = [10.0];
    let config = Config::new(0.1, 0.7, 100).unwrap();

    let step = search(&f, &x, &direction, &config).expect("descent direction");

    // t = 1, 0.7, 0.49, 0.343, 0.2401 all overshoot past x = 1; 0.7⁵ is the
    // first accepted trial.
    assert_eq!(step.backtracks, 5);
    assert_relative_eq!(step.size, 0.7_f64.powi(5), max_relative = 1e-12);

    let landed = x[0] + step.size * direction[0];
    assert_relative_eq!(landed, 1.6807, epsilon = 1e-9);
    assert_relative_eq!(step.objective, f.value(&[landed]).unwrap(), epsilon = 1e-12);
    assert!(step.objective < f.value(&x).unwrap());
}

#[test]
fn accepted_step_satisfies_sufficient_decrease() {
    // Convex quadratic f(x) = ½ xᵀQx with Q = [[3, 1], [1, 2]].
    let q = [[3.0, 1.0], [1.0, 2.0]];
    let f = FnObjective::new(
        move |x: &[f64; 2]| {
            0.5 * (q[0][0] * x[0] * x[0] + 2.0 * q[0][1] * x[0] * x[1] + q[1][1] * x[1] * x[1])
        },
        move |x: &[f64; 2]| {
            [
                q[0][0] * x[0] + q[0][1] * x[1],
                q[1][0] * x[0] + q[1][1] * x[1],
            ]
        },
    );

    let starts = [[1.0, 1.0], [-4.0, 2.5], [10.0, -7.0], [0.001, 0.0]];
    let configs = [
        Config::new(0.1, 0.7, 100).unwrap(),
        Config::new(0.01, 0.5, 100).unwrap(),
        Config::new(0.45, 0.1, 100).unwrap(),
    ];

    for x in starts {
        let gradient = f.gradient(&x).unwrap();
        // Negative gradient, a scaled version of it, and a rotated descent direction.
        let directions = [
            vector::negated(&gradient),
            gradient.map(|g| -25.0 * g),
            [-gradient[0] + 0.5 * gradient[1], -gradient[1] - 0.5 * gradient[0]],
        ];

        for direction in directions {
            let slope = vector::dot(&gradient, &direction);
            assert!(slope < 0.0);

            for config in &configs {
                let step = search(&f, &x, &direction, config).expect("descent direction");
                let f0 = f.value(&x).unwrap();
                let trial = f.value(&vector::step(&x, step.size, &direction)).unwrap();

                assert!(step.size > 0.0 && step.size <= 1.0);
                assert!(trial <= f0 + config.alpha() * step.size * slope + 1e-12 * f0.abs());
            }
        }
    }
}

#[test]
fn full_step_accepted_when_it_suffices() {
    let f = parabola();

    // Exact Newton step from x = 3 lands on the minimizer.
    let step = search(&f, &[3.0], &[-2.0], &Config::default()).unwrap();

    assert_eq!(step.backtracks, 0);
    assert_relative_eq!(step.size, 1.0);
    assert_relative_eq!(step.objective, -6.0);
}

#[test]
fn rejects_ascent_direction() {
    let f = parabola();

    // At x = 0 the gradient is -2, so moving left increases f.
    let result = search(&f, &[0.0], &[-1.0], &Config::default());

    assert!(matches!(result, Err(Error::NotDescent { slope }) if slope > 0.0));
}

#[test]
fn rejects_zero_direction() {
    let f = parabola();

    let result = search(&f, &[0.0], &[0.0], &Config::default());

    assert!(matches!(result, Err(Error::NotDescent { .. })));
}

#[test]
fn infinite_trial_values_are_backtracked() {
    // f(x) = x - ln(x) on x > 0, minimized at x = 1.
    let f = FnObjective::new(
        |x: &[f64; 1]| {
            if x[0] > 0.0 {
                x[0] - x[0].ln()
            } else {
                f64::INFINITY
            }
        },
        |x: &[f64; 1]| [1.0 - 1.0 / x[0]],
    );

    // From x = 2 the full step along -4 lands at x = -2, outside the domain,
    // so the search has to shrink back into it.
    let step = search(&f, &[2.0], &[-4.0], &Config::default()).expect("shrinks into domain");
    assert!(step.backtracks > 0);
    assert!(2.0 - 4.0 * step.size > 0.0);
    assert!(step.objective.is_finite());
}

#[test]
fn nan_trial_value_is_an_error() {
    let f = FnObjective::new(
        |x: &[f64; 1]| if x[0] < 0.0 { f64::NAN } else { x[0] * x[0] },
        |x: &[f64; 1]| [2.0 * x[0]],
    );

    let result = search(&f, &[1.0], &[-2.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::NonFinite {
            quantity: Quantity::Objective
        })
    ));
}

#[test]
fn exhausting_backtracks_is_an_error() {
    // A discontinuous objective that jumps up anywhere left of the origin,
    // with a gradient that claims descent in that direction.
    let f = FnObjective::new(
        |x: &[f64; 1]| if x[0] < 1.0 { 10.0 } else { x[0] },
        |_: &[f64; 1]| [1.0],
    );

    let config = Config::new(0.1, 0.5, 4).unwrap();
    let result = search(&f, &[1.0], &[-1.0], &config);

    match result {
        Err(Error::MaxBacktracks {
            max_backtracks,
            step_size,
        }) => {
            assert_eq!(max_backtracks, 4);
            assert_relative_eq!(step_size, 0.5_f64.powi(4));
        }
        other => panic!("expected MaxBacktracks, got {other:?}"),
    }
}

#[test]
fn stalled_step_is_an_error() {
    // Same jump as above, but with enough budget that t shrinks below the
    // spacing of floats at x = 1. The trial then rounds back onto x, where
    // it would pass the condition without moving.
    let f = FnObjective::new(
        |x: &[f64; 1]| if x[0] < 1.0 { 10.0 } else { x[0] },
        |_: &[f64; 1]| [1.0],
    );

    let config = Config::new(0.1, 0.5, 100).unwrap();
    let result = search(&f, &[1.0], &[-1.0], &config);

    match result {
        Err(Error::StepUnderflow { step_size }) => {
            // 1 - 2⁻⁵³ is the float just below 1; 1 - 2⁻⁵⁴ rounds to 1.
            assert_eq!(step_size, 0.5_f64.powi(54));
        }
        other => panic!("expected StepUnderflow, got {other:?}"),
    }
}

#[test]
fn huge_gradient_does_not_overflow_the_slope() {
    // f(x) = 10¹⁵⁵·√(1 + x²). At x = 1 the gradient is about 7·10¹⁵⁴, so
    // ∇fᵀΔx along the negative gradient overflows to -∞ even though every
    // component is finite.
    let scale = 1e155;
    let f = FnObjective::new(
        move |x: &[f64; 1]| scale * (1.0 + x[0] * x[0]).sqrt(),
        move |x: &[f64; 1]| [scale * x[0] / (1.0 + x[0] * x[0]).sqrt()],
    );

    let x = [1.0];
    let gradient = f.gradient(&x).unwrap();
    let direction = vector::negated(&gradient);
    assert_eq!(vector::dot(&gradient, &direction), f64::NEG_INFINITY);

    let config = Config::new(0.1, 0.1, 200).unwrap();
    let step = search(&f, &x, &direction, &config).expect("finite descent direction");

    assert!(step.backtracks > 150);
    assert!(step.objective.is_finite());
    assert!(step.objective < f.value(&x).unwrap());
}

#[test]
fn backtrack_uses_precomputed_value_and_gradient() {
    let f = parabola();

    // Lie about f(x) so that nothing can satisfy the condition.
    let config = Config::new(0.1, 0.5, 3).unwrap();
    let result = backtrack(&f, &[0.0], -100.0, &[-2.0], &[1.0], &config);

    assert!(matches!(result, Err(Error::MaxBacktracks { .. })));

    let result = backtrack(&f, &[0.0], -5.0, &[f64::NAN], &[1.0], &config);
    assert!(matches!(
        result,
        Err(Error::NonFinite {
            quantity: Quantity::Slope
        })
    ));
}

#[derive(Debug, Error)]
#[error("evaluation refused at x = {x}")]
struct Refused {
    x: f64,
}

struct RefusesLeftHalf;

impl Objective<1> for RefusesLeftHalf {
    type Error = Refused;

    fn value(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        if x[0] < 0.0 {
            Err(Refused { x: x[0] })
        } else {
            Ok(x[0] * x[0])
        }
    }

    fn gradient(&self, x: &[f64; 1]) -> Result<[f64; 1], Self::Error> {
        Ok([2.0 * x[0]])
    }
}

#[test]
fn objective_errors_propagate() {
    // From x = 1 along -4 the full step lands at -3, where evaluation fails.
    let result = search(&RefusesLeftHalf, &[1.0], &[-4.0], &Config::default());

    match result {
        Err(Error::Objective(source)) => {
            assert_eq!(source.to_string(), "evaluation refused at x = -3");
        }
        other => panic!("expected an objective error, got {other:?}"),
    }
}
