//! Property-based tests for polynomial coefficient tables and deflation.

use gauge_core::{Polynomial, compare};
use proptest::prelude::*;

/// Coefficient tables of degree 0..=7 with a leading coefficient well away
/// from zero, so no trimming happens.
fn coeffs_strategy() -> impl Strategy<Value = Vec<f64>> {
    (
        prop::collection::vec(-10.0f64..10.0, 0..8),
        prop_oneof![-10.0f64..-0.5, 0.5f64..10.0],
    )
        .prop_map(|(mut coeffs, leading)| {
            coeffs.push(leading);
            coeffs
        })
}

proptest! {
    #[test]
    fn derivative_of_integral_is_identity(coeffs in coeffs_strategy()) {
        let p = Polynomial::new(coeffs);
        let integral = Polynomial::new(p.integral_coeffs().to_vec());

        prop_assert_eq!(integral.degree(), p.degree() + 1);
        for (a, b) in integral.deriv_coeffs().iter().zip(p.coeffs()) {
            prop_assert!(compare::is_equal_eps(*a, *b, 1e-12 * (1.0 + b.abs())));
        }
    }

    #[test]
    fn integral_of_derivative_restores_all_but_constant(coeffs in coeffs_strategy()) {
        let p = Polynomial::new(coeffs);
        prop_assume!(p.degree() >= 1);
        let deriv = Polynomial::new(p.deriv_coeffs().to_vec());
        let restored = deriv.integral_coeffs();

        prop_assert_eq!(restored.len(), p.coeffs().len());
        prop_assert_eq!(restored[0], 0.0);
        for (a, b) in restored.iter().zip(p.coeffs()).skip(1) {
            prop_assert!(compare::is_equal_eps(*a, *b, 1e-12 * (1.0 + b.abs())));
        }
    }

    #[test]
    fn deflation_by_a_root_matches_long_division(
        coeffs in prop::collection::vec(-5.0f64..5.0, 1..6),
        root in -3.0f64..3.0,
    ) {
        // p(x) = (x - root) q(x) for q from the generated coefficients, leading 1.
        let mut q = coeffs;
        q.push(1.0);
        let mut p = vec![0.0; q.len() + 1];
        for (i, &c) in q.iter().enumerate() {
            p[i + 1] += c;
            p[i] -= root * c;
        }

        let deflated = Polynomial::new(p).divide_by_root(root);

        prop_assert_eq!(deflated.coeffs().len(), q.len());
        for (a, b) in deflated.coeffs().iter().zip(&q) {
            prop_assert!(compare::is_equal_eps(*a, *b, 1e-9));
        }
    }

    #[test]
    fn clone_is_equal_and_independent(coeffs in coeffs_strategy(), x in -2.0f64..2.0) {
        let p = Polynomial::new(coeffs);
        let copy = p.clone();
        prop_assert_eq!(&copy, &p);

        let deflated = copy.divide_by_root(x);
        prop_assert_eq!(&copy, &p);
        prop_assert!(deflated.degree() + 1 == p.degree() || p.degree() == 0);
    }
}
