use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculator::Calculator;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

impl Currency {
    /// Recognized codes are case-sensitive: "usd", "eur", "rub".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "usd" => Some(Self::Usd),
            "eur" => Some(Self::Eur),
            "rub" => Some(Self::Rub),
            _ => None,
        }
    }

    /// Fixed exchange rate to the base currency (rubles).
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Usd => Decimal::new(7537, 2),
            Self::Eur => Decimal::new(8972, 2),
            Self::Rub => Decimal::ONE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "Euro",
            Self::Rub => "руб",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Rub => "rub",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

const NO_MONEY: &str = "No money, hang in there";

/// Remaining cash for today, converted to the requested currency.
///
/// Fails with [`Error::UnsupportedCurrency`] for anything outside
/// "usd"/"eur"/"rub" instead of returning a message a caller would have
/// to string-match against real balances.
pub fn remained(calc: &Calculator, currency: &str) -> Result<String, Error> {
    let currency =
        Currency::parse(currency).ok_or_else(|| Error::UnsupportedCurrency(currency.to_string()))?;

    let balance = calc.balance();
    if balance.is_zero() {
        return Ok(NO_MONEY.to_string());
    }

    // Two decimal places, banker's rounding.
    let converted = (balance / currency.rate())
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        .normalize();

    Ok(if converted > Decimal::ZERO {
        format!("{converted} {} left for today", currency.label())
    } else if converted < Decimal::ZERO {
        format!(
            "{NO_MONEY}: your debt is {} {}",
            converted.abs(),
            currency.label()
        )
    } else {
        // A nonzero balance can still round to 0.00 in a foreign currency.
        NO_MONEY.to_string()
    })
}

pub fn today_summary(calc: &Calculator) -> String {
    format!("{} руб spent today", calc.today_stats())
}

pub fn week_summary(calc: &Calculator) -> String {
    format!("{} руб spent in the last 7 days", calc.week_stats())
}
