//! Personal-finance calculations.
//!
//! All arithmetic is checked decimal arithmetic. Inputs a calculation cannot
//! accept are reported as [`InvocationError::InvalidArgument`]; results that
//! overflow the decimal range are reported as [`InvocationError::Failed`].

use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::registry::InvocationError;

/// Longest horizon, in years, any projection will run.
pub const MAX_YEARS: i64 = 100;

/// Compounding schedules accepted by [`compound_growth`].
pub const FREQUENCIES: [&str; 4] = ["annually", "quarterly", "monthly", "daily"];

fn overflow(calculation: &str) -> InvocationError {
    InvocationError::failed(format!("{calculation} overflowed the decimal range"))
}

fn percent(rate: Decimal) -> Decimal {
    rate / Decimal::ONE_HUNDRED
}

/// `gross_pay + employer_match - sum(taxes_and_fees)`
///
/// # Errors
///
/// Returns [`InvocationError::Failed`] on overflow.
pub fn take_home_pay(
    gross_pay: Decimal,
    employer_match: Decimal,
    taxes_and_fees: &[Decimal],
) -> Result<Decimal, InvocationError> {
    let fees = taxes_and_fees
        .iter()
        .try_fold(Decimal::ZERO, |total, fee| total.checked_add(*fee))
        .ok_or_else(|| overflow("take_home_pay"))?;

    gross_pay
        .checked_add(employer_match)
        .and_then(|pay| pay.checked_sub(fees))
        .ok_or_else(|| overflow("take_home_pay"))
}

/// Share of take-home pay that is not spent, as a percentage.
///
/// # Errors
///
/// Returns [`InvocationError::InvalidArgument`] if `take_home_pay` is zero.
pub fn savings_rate(take_home_pay: Decimal, spending: Decimal) -> Result<Decimal, InvocationError> {
    if take_home_pay.is_zero() {
        return Err(InvocationError::invalid_argument(
            "take_home_pay",
            "must not be zero",
        ));
    }

    take_home_pay
        .checked_sub(spending)
        .and_then(|saved| saved.checked_div(take_home_pay))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow("savings_rate"))
}

/// Approximate years for money to double at `interest_rate` percent.
///
/// # Errors
///
/// Returns [`InvocationError::InvalidArgument`] unless the rate is positive.
pub fn rule_of_72(interest_rate: Decimal) -> Result<Decimal, InvocationError> {
    if interest_rate <= Decimal::ZERO {
        return Err(InvocationError::invalid_argument(
            "interest_rate",
            "must be greater than zero",
        ));
    }

    Decimal::from(72)
        .checked_div(interest_rate)
        .ok_or_else(|| overflow("rule_of_72"))
}

/// Portfolio size that sustains `planned_yearly_expenses` at
/// `withdrawal_rate` percent per year.
///
/// # Errors
///
/// Returns [`InvocationError::InvalidArgument`] unless the withdrawal rate
/// is positive.
pub fn fi_number(
    planned_yearly_expenses: Decimal,
    withdrawal_rate: Decimal,
) -> Result<Decimal, InvocationError> {
    if withdrawal_rate <= Decimal::ZERO {
        return Err(InvocationError::invalid_argument(
            "withdrawal_rate",
            "must be greater than zero",
        ));
    }

    planned_yearly_expenses
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(withdrawal_rate))
        .ok_or_else(|| overflow("fi_number"))
}

/// Number of compounding periods per year for a frequency name.
#[must_use]
pub fn periods_per_year(frequency: &str) -> Option<u32> {
    match frequency {
        "annually" => Some(1),
        "quarterly" => Some(4),
        "monthly" => Some(12),
        "daily" => Some(365),
        _ => None,
    }
}

/// Value of `principal` after `years` of growth at `annual_rate` percent,
/// compounded at `frequency`.
///
/// # Errors
///
/// - [`InvocationError::InvalidArgument`] if `years` is outside
///   `0..=MAX_YEARS` or the frequency is unknown
/// - [`InvocationError::Failed`] on overflow
pub fn compound_growth(
    principal: Decimal,
    annual_rate: Decimal,
    years: i64,
    frequency: &str,
) -> Result<Decimal, InvocationError> {
    if !(0..=MAX_YEARS).contains(&years) {
        return Err(InvocationError::invalid_argument(
            "years",
            format!("must be between 0 and {MAX_YEARS}"),
        ));
    }
    let periods = periods_per_year(frequency).ok_or_else(|| InvocationError::NotAllowed {
        parameter: "frequency".to_string(),
        allowed: FREQUENCIES.iter().map(ToString::to_string).collect(),
    })?;

    let growth = Decimal::ONE + percent(annual_rate) / Decimal::from(periods);
    let exponent = u64::from(periods) * years.unsigned_abs();

    checked_power(growth, exponent)
        .and_then(|factor| principal.checked_mul(factor))
        .ok_or_else(|| overflow("compound_growth"))
}

/// Whole years until `net_worth` reaches `fi_target`, adding
/// `yearly_savings` after each year of growth at `annual_return` percent.
///
/// # Errors
///
/// Returns [`InvocationError::InvalidArgument`] if the target is not reached
/// within [`MAX_YEARS`].
pub fn years_to_fi(
    net_worth: Decimal,
    yearly_savings: Decimal,
    annual_return: Decimal,
    fi_target: Decimal,
) -> Result<i64, InvocationError> {
    let growth = Decimal::ONE + percent(annual_return);
    let mut balance = net_worth;

    for year in 0..=MAX_YEARS {
        if balance >= fi_target {
            return Ok(year);
        }
        balance = balance
            .checked_mul(growth)
            .and_then(|grown| grown.checked_add(yearly_savings))
            .ok_or_else(|| overflow("years_to_fi"))?;
    }

    Err(InvocationError::invalid_argument(
        "fi_target",
        format!("not reached within {MAX_YEARS} years"),
    ))
}

/// Cash value of credit-card points under each redemption option.
///
/// # Errors
///
/// Returns [`InvocationError::InvalidArgument`] if `points` is negative.
pub fn redeem_points(points: i64) -> Result<Value, InvocationError> {
    if points < 0 {
        return Err(InvocationError::invalid_argument(
            "points",
            "must not be negative",
        ));
    }

    let points_value = Decimal::from(points);
    let value_at = |cents_per_point: Decimal| {
        (points_value * cents_per_point / Decimal::ONE_HUNDRED)
            .normalize()
            .to_string()
    };

    Ok(json!({
        "points": points,
        "cash_back": value_at(Decimal::ONE),
        "travel_portal": value_at(Decimal::new(125, 2)),
        "premium_travel_portal": value_at(Decimal::new(15, 1)),
    }))
}

fn checked_power(base: Decimal, exponent: u64) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut base = base;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.checked_mul(base)?;
        }
    }

    Some(result)
}
