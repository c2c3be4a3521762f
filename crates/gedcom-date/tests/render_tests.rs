//! Rendering and round-trip tests

use gedcom_date::{parse_with, CalendarType, DateValue, ParseOptions};
use pretty_assertions::assert_eq;

fn render(input: &str, calendar: CalendarType) -> String {
    parse_with(input, &ParseOptions::new(calendar))
        .unwrap_or_else(|err| panic!("{:?} should parse: {}", input, err))
        .to_string()
}

#[test]
fn test_canonical_text() {
    let g = CalendarType::Gregorian;
    assert_eq!(render("1 APRIL 2008", g), "1 Apr 2008");
    assert_eq!(render("about 1 september 1750/51", g), "abt 1 Sep 1750-51");
    assert_eq!(render("FROM APRIL 2007 TO JUNE 2008", g), "from Apr 2007 to Jun 2008");
    assert_eq!(render("from 1900", g), "from 1900");
    assert_eq!(render("BETWEEN 44 BC AND 10", g), "bet 44 BC and 10");
    assert_eq!(render("INTERPRETED 1900 (in the war)", g), "int 1900 (in the war)");
    assert_eq!(render("( unknown )", g), "( unknown )");
    assert_eq!(render("Pre1970", g), "pre1970");
    assert_eq!(render("bic", g), "BIC");
}

#[test]
fn test_calendar_month_names() {
    assert_eq!(render("1 TSH 5770", CalendarType::Hebrew), "1 Tishri 5770");
    assert_eq!(render("ADAR SHENI 5771", CalendarType::Hebrew), "Adar Sheni 5771");
    assert_eq!(render("1 VENDEMIAIRE 2", CalendarType::French), "1 Vend 2");
    assert_eq!(render("5 COMPLEMENTAIRES 2", CalendarType::French), "5 Jour Comp 2");
    assert_eq!(render("11 FEB 1731", CalendarType::Julian), "11 Feb 1731");
}

#[test]
fn test_round_trip_is_stable() {
    let cases = [
        (CalendarType::Gregorian, "1 APRIL 2008"),
        (CalendarType::Gregorian, "25 JANUARY 1 BC"),
        (CalendarType::Gregorian, "1 APRIL 2007/08"),
        (CalendarType::Gregorian, "FROM APRIL 2007 TO JUNE 2008"),
        (CalendarType::Gregorian, "BETWEEN 1 JANUARY 1970 AND 1 APRIL 2008"),
        (CalendarType::Gregorian, "to 10 dec 1752"),
        (CalendarType::Gregorian, "cal 1800"),
        (CalendarType::Gregorian, "est may 1800"),
        (CalendarType::Gregorian, "bef 1 jul 1900"),
        (CalendarType::Gregorian, "aft aug 1900"),
        (CalendarType::Gregorian, "int 3 oct 1900 (harvest festival)"),
        (CalendarType::Gregorian, "(before the flood)"),
        (CalendarType::Gregorian, "DNSCAN"),
        (CalendarType::Gregorian, "completed"),
        (CalendarType::Gregorian, "uncleared"),
        (CalendarType::Julian, "ABT 1 MARCH 1700"),
        (CalendarType::Hebrew, "BET 1 CHESHVAN 5770 AND ELUL 5771"),
        (CalendarType::Hebrew, "15 ADAR SHENI 5771"),
        (CalendarType::Hebrew, "KISLEV 5770"),
        (CalendarType::Hebrew, "2 TEVET"),
        (CalendarType::Hebrew, "SHEVAT 5770"),
        (CalendarType::Hebrew, "FROM IYAR 5770 TO AV 5770"),
        (CalendarType::French, "3 JOUR COMP 11"),
        (CalendarType::French, "FROM BRUMAIRE 2 TO FRUCTIDOR 3"),
        (CalendarType::French, "1 NIVOSE 4"),
        (CalendarType::French, "PRAIRIAL 5"),
        (CalendarType::French, "VENTOSE 6"),
        (CalendarType::Future, "3000"),
    ];

    for (calendar, input) in cases {
        let first = DateValue::parse(input, calendar).unwrap();
        let once = first.to_string();
        let second = DateValue::parse(&once, calendar)
            .unwrap_or_else(|err| {
                panic!("{:?} rendered as {:?}, which fails: {}", input, once, err)
            });
        assert_eq!(second.to_string(), once, "{}", input);
        assert_eq!(second, first, "{}", input);
    }
}

#[test]
fn test_every_month_round_trips() {
    for (calendar, months) in [
        (CalendarType::Gregorian, 1..=12u8),
        (CalendarType::Hebrew, 1..=13u8),
        (CalendarType::French, 1..=13u8),
    ] {
        for month in months {
            let name = gedcom_date::date::month_name(calendar, month).unwrap();
            let text = format!("1 {} 10", name);
            let value = DateValue::parse(&text, calendar).unwrap();
            assert_eq!(value.first().unwrap().month(), Ok(month), "{}", text);
            assert_eq!(value.to_string(), text);
        }
    }
}
