use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("portfolio dataset was not supplied")]
    MissingPortfolio,
    #[error("primary market dataset was not supplied")]
    MissingMarket,
    #[error("secondary market dataset was not supplied")]
    MissingSecondaryMarket,
}

/// Renders the full advisory request.
///
/// All three datasets must be supplied; an empty string is a legal dataset
/// (the section header is still emitted), `None` is not. The budget is
/// rendered twice, once as the ceiling and once in the closing warning,
/// using `f64`'s `Debug` formatting: locale-independent, no rounding, and a
/// whole-euro budget keeps its decimal point (`500.0`, not `500`).
///
/// Output is a pure function of the arguments. Identical inputs produce a
/// byte-identical request.
pub fn compose(
    budget: f64,
    policy: &str,
    portfolio: Option<&str>,
    market: Option<&str>,
    secondary_market: Option<&str>,
) -> Result<String, InputError> {
    let portfolio = portfolio.ok_or(InputError::MissingPortfolio)?;
    let market = market.ok_or(InputError::MissingMarket)?;
    let secondary_market = secondary_market.ok_or(InputError::MissingSecondaryMarket)?;

    Ok(format!(
        "You are my portfolio manager, these are your instructions:\n\
         \n\
         {policy}\n\
         \n\
         This is the portfolio you are currently managing. It is a CSV file:\n\
         \n\
         {portfolio}\n\
         \n\
         You have a maximum of {budget:?} EUR to invest.\n\
         \n\
         These loans are available on the market (also CSV):\n\
         \n\
         {market}\n\
         \n\
         These alternative investments are available on the secondary market (also CSV):\n\
         \n\
         {secondary_market}\n\
         \n\
         Tell me which loans you would invest in given the current portfolio.\n\
         For each loan you would invest in tell me how much; partial\n\
         investments are allowed. Don't exceed the amount of money available\n\
         ({budget:?} EUR) for investment!\n\
         For each selected loan please give a short summary of the most\n\
         relevant aspects of the loan. If no listing meets the instructions\n\
         it is fine to answer that you would not invest at all.\n"
    ))
}
