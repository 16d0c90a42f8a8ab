//! Property-based tests for the compound interest calculator.

use proptest::prelude::*;

use finanzas_core::format::format_currency;
use finanzas_core::input::parse_lenient;
use finanzas_core::interest::{compute_compound_interest, InterestInput};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Nothing invested, nothing earned, whatever the rate.
    #[test]
    fn zero_in_zero_out(rate in -50.0f64..50.0, years in 1u32..=100) {
        let r = compute_compound_interest(&InterestInput::new(0.0, 0.0, rate, f64::from(years))).unwrap();
        prop_assert_eq!(r.final_balance, 0.0);
        prop_assert_eq!(r.net_gain, 0.0);
        prop_assert_eq!(r.yield_ratio, None);
    }

    /// Without rate or contributions the principal is returned untouched.
    #[test]
    fn zero_rate_is_identity(principal in 0.0f64..1e9, years in 1u32..=100) {
        let r = compute_compound_interest(&InterestInput::new(principal, 0.0, 0.0, f64::from(years))).unwrap();
        prop_assert_eq!(r.final_balance, principal);
    }

    /// With non-negative rate and contribution, more years never means less money.
    #[test]
    fn balance_non_decreasing_in_years(
        principal in 0.0f64..1e6,
        monthly in 0.0f64..1e4,
        rate in 0.0f64..30.0,
        years in 1u32..99,
    ) {
        let shorter = compute_compound_interest(&InterestInput::new(principal, monthly, rate, f64::from(years))).unwrap();
        let longer = compute_compound_interest(&InterestInput::new(principal, monthly, rate, f64::from(years + 1))).unwrap();
        prop_assert!(longer.final_balance >= shorter.final_balance);
    }

    /// Total contributed is principal plus one contribution per month.
    #[test]
    fn total_contributed_invariant(
        principal in 0.0f64..1e6,
        monthly in 0.0f64..1e4,
        rate in -10.0f64..30.0,
        years in 1u32..=100,
    ) {
        let input = InterestInput::new(principal, monthly, rate, f64::from(years));
        let r = compute_compound_interest(&input).unwrap();
        let expected = principal + monthly * f64::from(years) * 12.0;
        prop_assert!((r.total_contributed - expected).abs() <= 1e-6 * expected.max(1.0));
        prop_assert!((r.net_gain - (r.final_balance - r.total_contributed)).abs() < 1e-6);
    }

    /// Non-positive durations are always rejected.
    #[test]
    fn non_positive_years_rejected(years in -100.0f64..=0.0) {
        prop_assert!(compute_compound_interest(&InterestInput::new(100.0, 10.0, 5.0, years)).is_err());
    }

    /// Lenient parsing never yields NaN.
    #[test]
    fn lenient_parse_never_nan(s in ".{0,16}") {
        prop_assert!(!parse_lenient(&s).is_nan());
    }

    /// Currency output always carries the symbol for finite amounts.
    #[test]
    fn currency_has_symbol(v in -1e12f64..1e12) {
        prop_assert!(format_currency(v).contains('$'));
    }
}
