use thiserror::Error;

/// Failures when constructing records or rendering cash reports.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not parse date '{0}': expected DD.MM.YYYY")]
    InvalidDate(String),
    #[error("unsupported currency: '{0}'")]
    UnsupportedCurrency(String),
}
