mod record;

pub use record::Record;

#[cfg(test)]
mod tests;
