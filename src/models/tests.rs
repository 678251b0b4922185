#![allow(clippy::unwrap_used)]

use chrono::{Local, NaiveDate};
use rust_decimal_macros::dec;

use super::*;
use crate::error::Error;

#[test]
fn test_new_defaults_to_today() {
    let r = Record::new(dec!(100), "coffee".into());
    assert_eq!(r.date(), Local::now().date_naive());
    assert_eq!(r.amount(), dec!(100));
    assert_eq!(r.comment(), "coffee");
}

#[test]
fn test_with_date_parses() {
    let r = Record::with_date(dec!(3000), "bar".into(), "08.11.2019").unwrap();
    assert_eq!(r.date(), NaiveDate::from_ymd_opt(2019, 11, 8).unwrap());
}

#[test]
fn test_with_date_empty_means_today() {
    let r = Record::with_date(dec!(1), "no date given".into(), "").unwrap();
    assert_eq!(r.date(), Local::now().date_naive());
}

#[test]
fn test_date_roundtrip() {
    // Parse then re-format should yield the original string
    for s in ["01.01.2024", "29.02.2020", "31.12.1999", "08.11.2019"] {
        let r = Record::with_date(dec!(0), String::new(), s).unwrap();
        assert_eq!(
            r.date().format("%d.%m.%Y").to_string(),
            s,
            "Roundtrip failed for {s}"
        );
    }
}

#[test]
fn test_malformed_dates_fail() {
    for s in [
        "2019-11-08",
        "08/11/2019",
        "32.01.2024",
        "29.02.2021",
        "00.01.2024",
        "08.13.2019",
        "11.2019",
        "abc",
        "08.11.2019x",
    ] {
        let err = Record::with_date(dec!(0), String::new(), s).unwrap_err();
        assert!(
            matches!(err, Error::InvalidDate(ref input) if input == s),
            "expected InvalidDate for {s}"
        );
    }
}

#[test]
fn test_negative_amount_allowed() {
    let r = Record::new(dec!(-45.50), "refund".into());
    assert_eq!(r.amount(), dec!(-45.50));
}

#[test]
fn test_record_display() {
    let r = Record::with_date(dec!(3000), "bar night".into(), "08.11.2019").unwrap();
    assert_eq!(format!("{r}"), "3000 - bar night: 08.11.2019");
}
