//! Record-walker interface, logging and thread-safety tests

use std::collections::HashMap;

use gedcom_date::{
    CalendarType, DateCollector, DateFieldHandler, DateKind, DateValue, ParseOptions,
};
use pretty_assertions::assert_eq;

/// Date fields as a record walker would hand them over
const FAMILY_DATES: &[&str] = &[
    "12 MAY 1921",
    "ABT 1890",
    "BET 1900 AND 1905",
    "1 APR 1921",
    "12 MAY 1850",
    "STILLBORN",
    "32 JAN 1900",
    "(before the war)",
];

fn walk(handler: &mut impl DateFieldHandler) {
    for field in FAMILY_DATES {
        handler.on_date_field(field);
    }
}

#[test]
fn test_collector_from_config_map() {
    let config: HashMap<String, String> = [("calendar", "gregorian"), ("tolerant", "false")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let mut collector = DateCollector::new(ParseOptions::from_map(&config).unwrap());
    walk(&mut collector);

    assert_eq!(collector.dates().len(), 7);
    assert_eq!(collector.rejected().len(), 1);
    assert_eq!(collector.rejected()[0].raw, "32 JAN 1900");
}

#[test]
fn test_chronological_listing() {
    let mut collector = DateCollector::default();
    walk(&mut collector);

    let listing: Vec<String> = collector.sorted().iter().map(|v| v.to_string()).collect();
    assert_eq!(
        listing,
        vec![
            "12 May 1850",
            "abt 1890",
            "bet 1900 and 1905",
            "1 Apr 1921",
            "12 May 1921",
            "(before the war)",
            "stillborn",
        ]
    );
}

#[test]
fn test_anniversary_queries() {
    let mut collector = DateCollector::default();
    walk(&mut collector);

    let may: Vec<String> = collector.in_month(5).iter().map(|v| v.to_string()).collect();
    assert_eq!(may, vec!["12 May 1850", "12 May 1921"]);
    assert_eq!(collector.on_day(5, 12).len(), 2);
    assert!(collector.on_day(5, 13).is_empty());
}

#[test]
fn test_closure_handler_counts_kinds() {
    let mut kinds = Vec::new();
    walk(&mut |raw: &str| {
        kinds.push(DateValue::parse_lenient(raw, CalendarType::Gregorian).kind());
    });
    assert_eq!(kinds.len(), FAMILY_DATES.len());
    assert_eq!(kinds[1], DateKind::About);
    assert_eq!(kinds[5], DateKind::Stillborn);
}

#[test]
fn test_tolerant_parse_with_tracing() {
    // A subscriber may already be installed by another test in this binary
    gedcom_date::tracing::init_with_filter("debug");
    gedcom_date::tracing::init();

    let options = ParseOptions::from_json(r#"{"tolerant": true}"#).unwrap();
    let value = options.parse("when the river froze").unwrap();
    assert_eq!(value.first().unwrap().text(), Ok("when the river froze"));
}

#[test]
fn test_parse_across_threads() {
    let inputs = ["1 APR 2008", "BET 1 JAN 1970 AND 1 APR 2008", "DEAD", "ABT 44 BC"];

    let rendered: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    inputs
                        .iter()
                        .map(|input| gedcom_date::parse(input).unwrap().to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &rendered {
        assert_eq!(
            result,
            &vec!["1 Apr 2008", "bet 1 Jan 1970 and 1 Apr 2008", "dead", "abt 44 BC"]
        );
    }
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DateValue>();
    assert_send_sync::<DateCollector>();
}

#[test]
fn test_values_serialize_to_json() {
    let value = gedcom_date::parse("FROM 1 APR 1750/51 TO 10 DEC 1752").unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert!(json.contains(r#""kind":"fromto""#), "{}", json);
    let back: DateValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_invalid_json_is_rejected() {
    let json = r#"{
        "kind": "between",
        "first": {
            "calendar": "gregorian",
            "body": {"date": {
                "day": 200, "month": 40, "year": 1900, "second_year": null, "epoch": "AD"
            }}
        },
        "second": null,
        "phrase": null
    }"#;
    let err = serde_json::from_str::<DateValue>(json).unwrap_err();
    assert!(err.to_string().contains("day 200 is out of range"), "{}", err);

    let fixed = json.replace("200", "20").replace("40", "4");
    let err = serde_json::from_str::<DateValue>(&fixed).unwrap_err();
    assert!(err.to_string().contains("needs a second date"), "{}", err);
}
