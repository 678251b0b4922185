//! Daytally: an in-memory daily calorie and cash spending tracker.
//!
//! Callers construct [`Record`]s, append them to a [`Calculator`], and
//! render human-readable reports with the functions in [`report`].
//! Nothing is persisted; state lives for the lifetime of the
//! `Calculator`. A `Calculator` is not synchronized — wrap it yourself
//! if you share one across threads.

mod calculator;
mod error;
mod models;
pub mod report;

pub use calculator::Calculator;
pub use error::Error;
pub use models::Record;
pub use report::Currency;
