mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use service_report::{report_filename, sanitize};

use common::record;

#[test]
fn test_diacritics_are_replaced() {
    let records = [record(json!({ "nazwisko": "Żółkiewski", "imie": "Łucja" }))];
    assert_eq!(report_filename(&records), "ewidencja_Zolkiewski_Lucja.docx");
}

#[test]
fn test_batch_name_ignores_people() {
    let records = [
        record(json!({ "nazwisko": "Żółkiewski" })),
        record(json!({ "nazwisko": "Nowak" })),
    ];
    assert_eq!(report_filename(&records), "ewidencja_2_rekordow.docx");
}

#[test]
fn test_sanitized_names_have_no_polish_letters() {
    for name in ["Świętosław", "Gęślą", "ŹREBIĘ", "Kowalski"] {
        let sanitized = sanitize(name);

        assert_eq!(sanitized.chars().count(), name.chars().count());
        assert!(!sanitized.chars().any(|c| "ąćęłńóśźżĄĆĘŁŃÓŚŹŻ".contains(c)));
        assert_eq!(sanitize(&sanitized), sanitized);
    }
}
