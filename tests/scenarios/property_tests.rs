//! Property-based checks over the bundled registry.
//!
//! These drive the facade directly; the HTTP layer adds nothing to the
//! properties under test.

use function_api::api::{ApiError, ApiFacade};
use function_api::binding::QueryParameters;
use function_api::formatting::{FormattedResult, round_half_up};
use function_api::library;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::helpers::BUNDLED_FUNCTIONS;

const TAKE_HOME_PAY_PARAMETERS: [&str; 3] = ["gross_pay", "employer_match", "taxes_and_fees"];

fn facade() -> ApiFacade {
    ApiFacade::new(library::registry().expect("bundled registry must build"))
}

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=12).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

// =============================================================================
// Binding Properties
// =============================================================================

proptest! {
    /// Dropping any parameter reports the full declared list, in order.
    #[test]
    fn prop_missing_parameter_reports_full_list(
        keep in proptest::collection::vec(any::<bool>(), 3)
            .prop_filter("at least one parameter missing", |keep| keep.contains(&false))
    ) {
        let query: QueryParameters = TAKE_HOME_PAY_PARAMETERS
            .iter()
            .zip(&keep)
            .filter(|(_, kept)| **kept)
            .map(|(name, _)| (*name, "100"))
            .collect();

        let error = facade().invoke("take_home_pay", &query).unwrap_err();

        prop_assert_eq!(
            error,
            ApiError::MissingParameters {
                required: TAKE_HOME_PAY_PARAMETERS.map(String::from).to_vec(),
            }
        );
    }

    /// Any unregistered name lists every registered function.
    #[test]
    fn prop_unknown_name_lists_every_function(
        name in "[a-zA-Z_]{1,24}"
            .prop_filter("must not be registered", |name| !BUNDLED_FUNCTIONS.contains(&name.as_str()))
    ) {
        let error = facade().invoke(&name, &QueryParameters::default()).unwrap_err();

        prop_assert_eq!(
            error,
            ApiError::UnknownEndpoint {
                available: BUNDLED_FUNCTIONS.map(String::from).to_vec(),
            }
        );
    }

    /// take_home_pay is exact decimal arithmetic on whole amounts.
    #[test]
    fn prop_take_home_pay_is_exact(
        gross in 0u32..10_000_000,
        employer_match in 0u32..1_000_000,
        fees in proptest::collection::vec(0u32..100_000, 1..6),
    ) {
        let joined = fees.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
        let query: QueryParameters = [
            ("gross_pay", gross.to_string()),
            ("employer_match", employer_match.to_string()),
            ("taxes_and_fees", joined),
        ]
        .into_iter()
        .collect();

        let expected = i64::from(gross) + i64::from(employer_match)
            - fees.iter().copied().map(i64::from).sum::<i64>();

        prop_assert_eq!(
            facade().invoke("take_home_pay", &query).unwrap(),
            FormattedResult::StringValue(expected.to_string())
        );
    }
}

// =============================================================================
// Rounding Properties
// =============================================================================

proptest! {
    /// Rounding twice at the same precision changes nothing.
    #[test]
    fn prop_round_half_up_is_idempotent(value in decimal_strategy(), precision in 0u32..10) {
        let once = round_half_up(value, precision);

        prop_assert_eq!(round_half_up(once, precision), once);
    }

    /// The rounded value is within half a unit in the last place.
    #[test]
    fn prop_round_half_up_error_is_bounded(value in decimal_strategy(), precision in 0u32..10) {
        let rounded = round_half_up(value, precision);
        let half_unit = Decimal::new(5, precision + 1);

        prop_assert!((rounded - value).abs() <= half_unit);
        prop_assert!(rounded.scale() <= precision);
    }
}
