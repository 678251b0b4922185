pub mod calories;
pub mod cash;

pub use cash::Currency;
