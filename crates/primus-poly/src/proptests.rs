//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;

    const TOL: f64 = 1e-9;

    // Small integer-valued coefficients keep sums and products exact
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::from)
    }

    // Divisors need a nonzero leading coefficient; ±1 keeps quotients exact
    fn monic_divisor() -> impl Strategy<Value = Polynomial> {
        (proptest::collection::vec(small_coeff(), 0..=3), prop_oneof![Just(1.0), Just(-1.0)])
            .prop_map(|(mut coeffs, lead)| {
                coeffs.push(lead);
                Polynomial::from(coeffs)
            })
    }

    proptest! {
        #[test]
        fn poly_clone_equals_original(a in small_poly()) {
            prop_assert_eq!(a.clone(), a);
        }

        #[test]
        fn poly_from_coeffs_round_trip(coeffs in proptest::collection::vec(small_coeff(), 1..=6)) {
            let p = Polynomial::from_coeffs(coeffs.len() - 1, &coeffs).unwrap();
            prop_assert_eq!(p.coeffs(), coeffs.as_slice());
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_degree_is_max(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).degree(), a.degree().max(b.degree()));
            prop_assert_eq!(a.sub(&b).degree(), a.degree().max(b.degree()));
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            let sum = a.add(&a.neg());
            prop_assert_eq!(sum, Polynomial::new(a.degree()));
        }

        #[test]
        fn poly_sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.sub(&b), a.add(&b.neg()));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            // Holds even when leading coefficients are zero
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_div_rem_reconstructs(a in small_poly(), b in monic_divisor()) {
            let (q, r) = a.div_rem(&b).unwrap();
            if a.degree() < b.degree() {
                prop_assert_eq!(q, Polynomial::zero());
                prop_assert_eq!(r, a);
            } else {
                prop_assert_eq!(q.degree(), a.degree() - b.degree());
                prop_assert!(q.mul(&b).add(&r).approx_eq(&a, TOL));
            }
        }

        #[test]
        fn poly_remainder_high_terms_vanish(a in small_poly(), b in monic_divisor()) {
            let r = a.rem(&b).unwrap();
            if a.degree() >= b.degree() {
                prop_assert_eq!(r.degree(), a.degree());
                for &c in &r.coeffs()[b.degree()..] {
                    prop_assert!(c.abs() < TOL);
                }
            }
        }

        #[test]
        fn poly_eval_at_zero(a in small_poly()) {
            prop_assert_eq!(a.eval(0.0), a.coeff(0));
        }

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a + b)(x) = a(x) + b(x)
            let x = x / 10.0;
            let lhs = a.add(&b).eval(x);
            let rhs = a.eval(x) + b.eval(x);
            prop_assert!((lhs - rhs).abs() <= TOL * (1.0 + lhs.abs()));
        }

        #[test]
        fn poly_derivative_degree(a in small_poly()) {
            let d = a.derivative();
            prop_assert_eq!(d.degree(), a.degree().saturating_sub(1));
        }

        #[test]
        fn poly_integrate_matches_antiderivative(a in small_poly(), s in small_coeff(), e in small_coeff()) {
            let (s, e) = (s / 20.0, e / 20.0);
            let anti = a.antiderivative();
            let expected = anti.eval(e) - anti.eval(s);
            let got = a.integrate(s, e);
            prop_assert!((got - expected).abs() <= TOL * (1.0 + expected.abs()));
        }

        #[test]
        fn poly_write_read_round_trip(a in small_poly()) {
            let text = a.write();
            let parsed: Polynomial = text.parse().unwrap();
            prop_assert_eq!(parsed, a);
        }
    }
}
