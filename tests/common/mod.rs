use std::io::{Cursor, Read};

use serde_json::Value;
use service_report::input::Record;

#[must_use]
#[allow(dead_code)]
pub fn record(value: Value) -> Record {
    serde_json::from_value(value).expect("record should be valid")
}

/// `word/document.xml` of a generated docx.
#[must_use]
#[allow(dead_code)]
pub fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("docx should be a zip file");
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .expect("docx should contain the document part")
        .read_to_string(&mut xml)
        .expect("document part should be utf-8");

    xml
}

#[must_use]
#[allow(dead_code)]
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// A record with eight days of seven hours in march 2024.
#[must_use]
#[allow(dead_code)]
pub fn full_record() -> Record {
    let entries = (4..12)
        .map(|day| {
            serde_json::json!({
                "date": format!("2024-03-{:02}T00:00:00.000Z", day),
                "hours": 7
            })
        })
        .collect::<Vec<_>>();

    record(serde_json::json!({
        "id": "a",
        "kow": "123/24",
        "wo": "45/24",
        "ii_k": "678/23",
        "nazwisko": "Kowalski",
        "imie": "Jan",
        "kod": "87-300",
        "miejscowosc": "Brodnica",
        "ulica": "Zamkowa",
        "nr_domu": "5",
        "nr_lokalu": "2",
        "timeEntries": entries,
        "suma": 56,
        "data1": "2024-03-04T00:00:00.000Z",
        "data2": null,
        "uwagi": "brak"
    }))
}

#[allow(dead_code)]
pub fn debug_setup() {
    let _ = pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}
