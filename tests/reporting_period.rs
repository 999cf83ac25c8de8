mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use service_report::date;
use service_report::document::Section;
use service_report::time::Date;
use service_report::DocxGenerator;

use common::record;

fn period(section: &Section) -> String {
    section
        .paragraphs()
        .map(|paragraph| paragraph.text())
        .find(|text| text.starts_with("wykonał"))
        .expect("every page states the reporting period")
}

fn period_of(value: serde_json::Value, today: Date) -> String {
    let sections = DocxGenerator::new("Jan Testowy", today).sections(&[record(value)]);
    period(&sections[0])
}

#[test]
fn test_first_entry_decides() {
    let value = json!({
        "timeEntries": [
            { "date": "2024-03-28T00:00:00.000Z", "hours": 8 },
            { "date": "2024-01-03T00:00:00.000Z", "hours": 8 }
        ],
        "data1": "2023-11-02T00:00:00.000Z"
    });

    assert_eq!(
        period_of(value, date!(2024:06:01)),
        "wykonał  w   marcu   2024  r."
    );
}

#[test]
fn test_work_start_without_entries() {
    let value = json!({ "timeEntries": [], "data1": "2023-11-02T00:00:00.000Z" });

    assert_eq!(
        period_of(value, date!(2024:06:01)),
        "wykonał  w   listopadzie   2023  r."
    );
}

#[test]
fn test_today_without_dates() {
    let today = Date::today();
    let value = json!({ "timeEntries": [{ "date": null, "hours": 4 }] });

    let sections = DocxGenerator::new("Jan Testowy", today).sections(&[record(value)]);
    assert_eq!(
        period(&sections[0]),
        format!(
            "wykonał  w   {}   {}  r.",
            today.month().locative(),
            today.year()
        )
    );
}
