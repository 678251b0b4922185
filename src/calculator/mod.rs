use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Record;

/// Aggregator owning a daily limit and an append-only list of records.
///
/// All statistics are computed by scanning the records on demand, so
/// nothing depends on the list being sorted.
#[derive(Debug, Clone)]
pub struct Calculator {
    limit: Decimal,
    records: Vec<Record>,
}

impl Calculator {
    pub fn new(limit: Decimal) -> Self {
        Self {
            limit,
            records: Vec::new(),
        }
    }

    /// Append a record. Records are kept in insertion order.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }

    /// Sum of amounts recorded on the current calendar date.
    pub fn today_stats(&self) -> Decimal {
        self.today_stats_as_of(Local::now().date_naive())
    }

    /// Sum of amounts over the trailing week: `today - 7 days < d <= today`.
    pub fn week_stats(&self) -> Decimal {
        self.week_stats_as_of(Local::now().date_naive())
    }

    /// Remaining allowance for today; negative when over the limit.
    pub fn balance(&self) -> Decimal {
        self.limit - self.today_stats()
    }

    fn today_stats_as_of(&self, today: NaiveDate) -> Decimal {
        // Full-date equality: matching only the day-of-month would also
        // count e.g. a Jan 5 record on Feb 5.
        self.records
            .iter()
            .filter(|r| r.date() == today)
            .map(Record::amount)
            .sum()
    }

    fn week_stats_as_of(&self, today: NaiveDate) -> Decimal {
        let week_ago = today - Days::new(7);
        self.records
            .iter()
            .filter(|r| r.date() > week_ago && r.date() <= today)
            .map(Record::amount)
            .sum()
    }
}
