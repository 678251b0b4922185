use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::error::Error;

/// Format accepted for explicit record dates, e.g. "08.11.2019".
const DATE_FORMAT: &str = "%d.%m.%Y";

/// One logged amount+comment+date entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    amount: Decimal,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// A record dated today (local calendar date at construction time).
    pub fn new(amount: Decimal, comment: String) -> Self {
        Self::on(amount, comment, Local::now().date_naive())
    }

    /// A record with an explicit date.
    pub fn on(amount: Decimal, comment: String, date: NaiveDate) -> Self {
        Self {
            amount,
            comment,
            date,
        }
    }

    /// A record dated from a `DD.MM.YYYY` string. An empty string means
    /// today, same as [`Record::new`].
    pub fn with_date(amount: Decimal, comment: String, date: &str) -> Result<Self, Error> {
        if date.is_empty() {
            return Ok(Self::new(amount, comment));
        }
        let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| Error::InvalidDate(date.to_string()))?;
        Ok(Self::on(amount, comment, parsed))
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.amount,
            self.comment,
            self.date.format(DATE_FORMAT)
        )
    }
}
