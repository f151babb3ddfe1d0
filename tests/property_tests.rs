//! Property-based tests for the codec's core guarantees: untyped
//! round-trip, deterministic rendering and record encode/decode symmetry.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use text_parameters::{from_str, marshal, to_string, unmarshal_str, ParameterMap};

/// Valid parameter names: printable ASCII except `:`.
fn name() -> impl Strategy<Value = String> {
    "[!-9;-~]{1,12}"
}

/// Values that survive the grammar unchanged: no line terminators and no
/// leading or trailing spaces/tabs.
fn value() -> impl Strategy<Value = String> {
    "([!-~é愛]([ -~é愛]{0,20}[!-~é愛])?)?"
}

fn parameter_map() -> impl Strategy<Value = ParameterMap> {
    prop::collection::vec((name(), value()), 0..16)
        .prop_map(|entries| entries.into_iter().collect())
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Record {
    #[serde(rename = "text")]
    text: String,
    #[serde(rename = "signed")]
    signed: i64,
    #[serde(rename = "small")]
    small: i8,
    #[serde(rename = "unsigned")]
    unsigned: u32,
    #[serde(rename = "wide")]
    wide: u128,
    #[serde(rename = "double")]
    double: f64,
    #[serde(rename = "single")]
    single: f32,
}

fn record() -> impl Strategy<Value = Record> {
    (
        value(),
        any::<i64>(),
        any::<i8>(),
        any::<u32>(),
        any::<u128>(),
        prop::num::f64::NORMAL,
        prop::num::f32::NORMAL,
    )
        .prop_map(|(text, signed, small, unsigned, wide, double, single)| Record {
            text,
            signed,
            small,
            unsigned,
            wide,
            double,
            single,
        })
}

proptest! {
    #[test]
    fn prop_marshal_unmarshal_round_trip(params in parameter_map()) {
        let text = marshal(&params);
        prop_assert_eq!(unmarshal_str(&text).unwrap(), params);
    }

    #[test]
    fn prop_marshal_is_idempotent(params in parameter_map()) {
        let first = marshal(&params);
        prop_assert_eq!(marshal(&params), first.clone());
        prop_assert_eq!(marshal(&unmarshal_str(&first).unwrap()), first);
    }

    #[test]
    fn prop_marshal_ignores_insertion_order(params in parameter_map()) {
        let reversed: ParameterMap = params
            .iter()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        prop_assert_eq!(marshal(&reversed), marshal(&params));
    }

    #[test]
    fn prop_unmarshal_never_panics(body in "\\PC{0,64}") {
        let _ = unmarshal_str(&body);
    }

    #[test]
    fn prop_record_symmetry(record in record()) {
        let text = to_string(&record).unwrap();
        let back: Record = from_str(&text).unwrap();
        prop_assert_eq!(back, record);
    }

    #[test]
    fn prop_unsigned_rejects_negative(n in 1_i64..=i64::MAX) {
        let body = format!("unsigned: -{n}");
        let err = from_str::<Record>(&body).unwrap_err();
        prop_assert!(err.is_field_type());
    }
}
