use rust_decimal::Decimal;

use crate::calculator::Calculator;

/// How much is left to eat today, or an order to stop.
pub fn remained(calc: &Calculator) -> String {
    let balance = calc.balance();
    if balance > Decimal::ZERO {
        format!("You can eat something else today, but no more than {balance} kcal")
    } else {
        // Zero counts as "stop": calories have no debt concept.
        "Stop eating!".to_string()
    }
}

pub fn today_summary(calc: &Calculator) -> String {
    format!("{} kcal eaten today", calc.today_stats())
}

pub fn week_summary(calc: &Calculator) -> String {
    format!("{} kcal in the last 7 days", calc.week_stats())
}
