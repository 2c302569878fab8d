//! Property-based tests for the doubling operation
//!
//! These check `double_the_value` and the overflow policies against the
//! arithmetic definitions across the whole `i32` domain.

#[cfg(test)]
mod tests {
    use crate::business_logic::BusinessLogic;
    use crate::overflow::OverflowPolicy;
    use proptest::prelude::*;

    // Inputs whose double fits in an i32
    prop_compose! {
        fn in_range_value()(value in (i32::MIN / 2)..=(i32::MAX / 2)) -> i32 {
            value
        }
    }

    // Inputs whose double does not fit
    prop_compose! {
        fn overflowing_value()(
            positive in prop::bool::ANY,
            high in (i32::MAX / 2 + 1)..=i32::MAX,
            low in i32::MIN..(i32::MIN / 2),
        ) -> i32 {
            if positive { high } else { low }
        }
    }

    fn any_policy() -> impl Strategy<Value = OverflowPolicy> {
        prop::sample::select(OverflowPolicy::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_doubles_in_range(value in in_range_value()) {
            let object = BusinessLogic::new();
            prop_assert_eq!(object.double_the_value(value) as i64, 2 * value as i64);
        }

        #[test]
        fn prop_all_policies_agree_in_range(value in in_range_value(), policy in any_policy()) {
            let object = BusinessLogic::with_policy(policy);
            prop_assert_eq!(object.try_double_the_value(value), Ok(value * 2));
        }

        #[test]
        fn prop_wrapped_result_is_even(value in any::<i32>()) {
            let object = BusinessLogic::new();
            prop_assert_eq!(object.double_the_value(value) % 2, 0);
        }

        #[test]
        fn prop_overflow_handling(value in overflowing_value()) {
            let saturate = BusinessLogic::with_policy(OverflowPolicy::Saturate);
            let checked = BusinessLogic::with_policy(OverflowPolicy::Checked);

            let expected = if value > 0 { i32::MAX } else { i32::MIN };
            prop_assert_eq!(saturate.try_double_the_value(value), Ok(expected));
            prop_assert!(checked.try_double_the_value(value).is_err());
        }

        #[test]
        fn prop_policy_name_round_trip(policy in any_policy()) {
            prop_assert_eq!(policy.as_str().parse::<OverflowPolicy>().unwrap(), policy);
        }

        #[test]
        fn prop_unknown_policy_rejected(name in "[a-z]{1,12}") {
            let known = ["wrap", "wrapping", "saturate", "saturating", "checked"];
            prop_assume!(!known.contains(&name.as_str()));
            prop_assert!(name.parse::<OverflowPolicy>().is_err());
        }
    }
}
