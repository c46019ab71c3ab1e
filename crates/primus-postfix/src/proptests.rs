//! Property-based tests for postfix evaluation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{evaluate, evaluate_flagged, EvalError, Operator};

    fn small_int() -> impl Strategy<Value = i32> {
        -1000i32..1000i32
    }

    fn operator() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Sub),
            Just(Operator::Mul),
            Just(Operator::Div),
        ]
    }

    proptest! {
        #[test]
        fn binary_expression_matches_apply(a in small_int(), b in small_int(), op in operator()) {
            let (a, b) = (f64::from(a), f64::from(b));
            let expr = format!("{a} {b} {op}");
            prop_assert_eq!(evaluate(&expr), op.apply(a, b));
        }

        #[test]
        fn left_fold_sum(values in proptest::collection::vec(small_int(), 1..20)) {
            // "v0 v1 + v2 + ..." sums left to right
            let mut expr = values[0].to_string();
            for v in &values[1..] {
                expr.push_str(&format!(" {v} +"));
            }
            let expected: i32 = values.iter().sum();
            prop_assert_eq!(evaluate(&expr), Ok(f64::from(expected)));
        }

        #[test]
        fn operands_without_operators_are_unbalanced(values in proptest::collection::vec(small_int(), 2..10)) {
            let expr = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
            prop_assert_eq!(
                evaluate(&expr),
                Err(EvalError::UnbalancedExpression { remaining: values.len() })
            );
        }

        #[test]
        fn flagged_matches_result(a in small_int(), b in small_int(), op in operator()) {
            let expr = format!("{a} {b} {op}");
            let (value, failed) = evaluate_flagged(&expr);
            match evaluate(&expr) {
                Ok(v) => prop_assert_eq!((value, failed), (v, false)),
                Err(_) => prop_assert_eq!((value, failed), (0.0, true)),
            }
        }
    }
}
