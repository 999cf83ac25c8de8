mod common;

use std::fs;

use pretty_assertions::assert_eq;

use service_report::generate_report;
use service_report::input::Config;

use common::{debug_setup, document_xml};

const RECORDS: &str = r#"{
    "version": "1.0",
    "exportDate": "2024-04-02T08:00:00.000Z",
    "records": [
        {
            "id": "r1",
            "nazwisko": "Kowalski",
            "imie": "Jan",
            "timeEntries": [{ "date": "2024-03-04T00:00:00.000Z", "hours": 8 }],
            "suma": 8
        },
        {
            "id": "r2",
            "nazwisko": "Wiśniewski",
            "imie": "Piotr",
            "timeEntries": [],
            "suma": null
        }
    ],
    "users": []
}"#;

const GLOBAL: &str = "[about]\noperator = \"Anna Biurowa\"\n";

fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("records.json"), RECORDS).unwrap();
    fs::write(dir.path().join("global.toml"), GLOBAL).unwrap();
    dir
}

#[test]
fn test_writes_into_default_directory() {
    debug_setup();
    let dir = workspace();

    let config = Config::try_from_files(
        dir.path().join("records.json"),
        dir.path().join("global.toml"),
    )
    .unwrap()
    .build()
    .unwrap();

    let path = generate_report(&config).unwrap();
    assert_eq!(path, dir.path().join("raporty").join("ewidencja_2_rekordow.docx"));

    let xml = document_xml(&fs::read(&path).unwrap());
    assert_eq!(xml.matches("<w:sectPr>").count(), 2);
    assert!(xml.contains("utworzył: Anna Biurowa"));
}

#[test]
fn test_single_selected_record() {
    let dir = workspace();
    let output = dir.path().join("out");

    let mut builder = Config::try_from_files(
        dir.path().join("records.json"),
        dir.path().join("global.toml"),
    )
    .unwrap();
    builder.ids(["r2"]).operator("Jan Testowy").output_dir(&output);
    let config = builder.build().unwrap();

    let path = generate_report(&config).unwrap();
    assert_eq!(path, output.join("ewidencja_Wisniewski_Piotr.docx"));

    let xml = document_xml(&fs::read(&path).unwrap());
    assert_eq!(xml.matches("<w:sectPr>").count(), 1);
    assert!(xml.contains("utworzył: Jan Testowy"));
    assert_eq!(fs::read_dir(&output).unwrap().count(), 1);
}

#[test]
fn test_unknown_id_writes_nothing() {
    let dir = workspace();

    let mut builder = Config::try_from_files(
        dir.path().join("records.json"),
        dir.path().join("global.toml"),
    )
    .unwrap();
    builder.ids(["r1", "missing"]);

    assert!(builder.build().is_err());
    assert!(!dir.path().join("raporty").exists());
}

#[test]
fn test_missing_records_file() {
    let dir = workspace();

    assert!(Config::try_from_files(
        dir.path().join("nope.json"),
        dir.path().join("global.toml")
    )
    .is_err());
}

#[test]
fn test_separator_in_surname() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().join("records.json");
    fs::write(
        &records,
        r#"[{ "id": "x", "nazwisko": "Nowak/Kowalska", "imie": "Anna", "suma": 4 }]"#,
    )
    .unwrap();
    fs::write(dir.path().join("global.toml"), GLOBAL).unwrap();

    let config = Config::try_from_files(&records, dir.path().join("global.toml"))
        .unwrap()
        .build()
        .unwrap();

    let path = generate_report(&config).unwrap();
    let output = dir.path().join("raporty");

    assert_eq!(path, output.join("ewidencja_Nowak_Kowalska_Anna.docx"));
    assert_eq!(fs::read_dir(&output).unwrap().count(), 1);
    assert!(document_xml(&fs::read(&path).unwrap()).contains("Nowak&#x2f;Kowalska Anna"));
}
