//! The bundled function registry.
//!
//! Functions are registered in a fixed order; that order is the order of the
//! endpoint listing, the help catalog and every "allowed endpoints" list.

pub mod finance;

use crate::registry::{FunctionEntry, Output, Registry, RegistryError, TypeDescriptor};

const TAKE_HOME_PAY_DOC: &str = "
    Calculate the take home pay for a paycheck.

    Args:
        gross_pay: gross pay before taxes and other deductions.

        employer_match: any matching contributions from your employer.

        taxes_and_fees: a comma separated list of taxes, insurance premiums
            and other fees taken out of the paycheck.

    Returns:
        The amount that lands in your bank account.
";

const SAVINGS_RATE_DOC: &str = "
    Calculate the percentage of take home pay that is saved.

    Args:
        take_home_pay: monthly take home pay.

        spending: monthly spending.

    Returns:
        Savings rate as a percentage.
";

const RULE_OF_72_DOC: &str = "
    Estimate how many years it takes for an investment to double.

    Divide 72 by the yearly rate of return. The approximation is best for
    rates between 6 and 10 percent. Background reading:
    https://www.investopedia.com/terms/r/ruleof72.asp

    Args:
        interest_rate: yearly rate of return, as a percentage.

    Returns:
        Years to double.
";

const FI_NUMBER_DOC: &str = "
    Estimate the portfolio needed for financial independence.

    The 4% default comes from the Trinity study. Credit: Philip L. Cooley,
    Carl M. Hubbard and Daniel T. Walz.

    Args:
        planned_yearly_expenses: yearly spending in retirement.

        withdrawal_rate: percentage of the portfolio withdrawn each year.

    Returns:
        The FI number.
";

const COMPOUND_GROWTH_DOC: &str = "
    Project the value of a lump sum with compound interest.

    Args:
        principal: starting balance.

        annual_rate: yearly interest rate, as a percentage.

        years: number of years to compound, from 0 to 100.

        frequency: how often interest compounds. One of annually, quarterly,
            monthly or daily.

    Returns:
        Balance at the end of the period.
";

const YEARS_TO_FI_DOC: &str = "
    Count the whole years until savings reach a financial independence
    target. Each year the balance grows by the rate of return and then the
    yearly savings are added.

    Args:
        net_worth: current invested net worth.

        yearly_savings: amount invested every year.

        annual_return: yearly rate of return, as a percentage.

        fi_target: the portfolio size to reach.

    Returns:
        Number of years, 0 if the target is already met.
";

const REDEEM_POINTS_DOC: &str = "
    Compare what credit card points are worth under each redemption option.
    Cash back is valued at 1 cent per point, the travel portal at 1.25 cents
    and the premium travel portal at 1.5 cents. Point values written up by:
    https://thepointsguy.com/guide/monthly-valuations/

    Args:
        points: number of points to redeem.

    Returns:
        Cash value of the points for each redemption option.
";

/// Builds the bundled registry.
///
/// # Errors
///
/// Returns [`RegistryError`] if a declaration is invalid.
pub fn registry() -> Result<Registry, RegistryError> {
    Registry::from_entries([
        take_home_pay()?,
        savings_rate()?,
        rule_of_72()?,
        fi_number()?,
        compound_growth()?,
        years_to_fi()?,
        redeem_points()?,
    ])
}

fn take_home_pay() -> Result<FunctionEntry, RegistryError> {
    FunctionEntry::builder("take_home_pay")
        .parameter("gross_pay", TypeDescriptor::Real)
        .parameter("employer_match", TypeDescriptor::Real)
        .parameter("taxes_and_fees", TypeDescriptor::RealList)
        .returns(TypeDescriptor::Real)
        .documentation(TAKE_HOME_PAY_DOC)
        .handler(|arguments| {
            finance::take_home_pay(
                arguments.real(0)?,
                arguments.real(1)?,
                arguments.real_list(2)?,
            )
            .map(Output::Real)
        })
        .build()
}

fn savings_rate() -> Result<FunctionEntry, RegistryError> {
    FunctionEntry::builder("savings_rate")
        .parameter("take_home_pay", TypeDescriptor::Real)
        .parameter("spending", TypeDescriptor::Real)
        .returns(TypeDescriptor::Real)
        .documentation(SAVINGS_RATE_DOC)
        .handler(|arguments| {
            finance::savings_rate(arguments.real(0)?, arguments.real(1)?).map(Output::Real)
        })
        .build()
}

fn rule_of_72() -> Result<FunctionEntry, RegistryError> {
    FunctionEntry::builder("rule_of_72")
        .parameter("interest_rate", TypeDescriptor::Real)
        .returns(TypeDescriptor::Real)
        .documentation(RULE_OF_72_DOC)
        .handler(|arguments| finance::rule_of_72(arguments.real(0)?).map(Output::Real))
        .build()
}

fn fi_number() -> Result<FunctionEntry, RegistryError> {
    FunctionEntry::builder("fi_number")
        .parameter("planned_yearly_expenses", TypeDescriptor::Real)
        .parameter_with_default("withdrawal_rate", TypeDescriptor::Real, "4")
        .returns(TypeDescriptor::Real)
        .documentation(FI_NUMBER_DOC)
        .handler(|arguments| {
            finance::fi_number(arguments.real(0)?, arguments.real(1)?).map(Output::Real)
        })
        .build()
}

fn compound_growth() -> Result<FunctionEntry, RegistryError> {
    FunctionEntry::builder("compound_growth")
        .parameter("principal", TypeDescriptor::Real)
        .parameter("annual_rate", TypeDescriptor::Real)
        .parameter("years", TypeDescriptor::Integer)
        .parameter_with_default(
            "frequency",
            TypeDescriptor::literal(finance::FREQUENCIES),
            "monthly",
        )
        .returns(TypeDescriptor::Real)
        .documentation(COMPOUND_GROWTH_DOC)
        .handler(|arguments| {
            finance::compound_growth(
                arguments.real(0)?,
                arguments.real(1)?,
                arguments.integer(2)?,
                arguments.literal(3)?,
            )
            .map(Output::Real)
        })
        .build()
}

fn years_to_fi() -> Result<FunctionEntry, RegistryError> {
    FunctionEntry::builder("years_to_fi")
        .parameter("net_worth", TypeDescriptor::Real)
        .parameter("yearly_savings", TypeDescriptor::Real)
        .parameter_with_default("annual_return", TypeDescriptor::Real, "7")
        .parameter("fi_target", TypeDescriptor::Real)
        .returns(TypeDescriptor::Integer)
        .documentation(YEARS_TO_FI_DOC)
        .handler(|arguments| {
            finance::years_to_fi(
                arguments.real(0)?,
                arguments.real(1)?,
                arguments.real(2)?,
                arguments.real(3)?,
            )
            .map(Output::Integer)
        })
        .build()
}

fn redeem_points() -> Result<FunctionEntry, RegistryError> {
    FunctionEntry::builder("redeem_points")
        .parameter("points", TypeDescriptor::Integer)
        .returns(TypeDescriptor::Structured)
        .documentation(REDEEM_POINTS_DOC)
        .handler(|arguments| finance::redeem_points(arguments.integer(0)?).map(Output::Structured))
        .build()
}
