use std::io::Read;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::input::Record;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no records selected")]
    Empty,
    #[error("unknown record ids: {}", .0.join(", "))]
    UnknownIds(Vec<String>),
}

/// A backup export of the records database. Only the records are used.
#[derive(Debug, Clone, Deserialize)]
struct Backup {
    version: String,
    #[serde(default, rename = "exportDate")]
    export_date: Option<String>,
    records: Vec<Record>,
}

/// The records a document can be generated from, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordsFile {
    records: Vec<Record>,
}

fn is_backup(value: &serde_json::Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key("version"))
}

impl RecordsFile {
    /// Reads either a backup export (`{ "version": .., "records": [..] }`) or a
    /// plain array of records.
    pub fn from_reader(mut reader: impl Read) -> serde_json::Result<Self> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .map_err(serde_json::Error::io)?;

        Self::from_json(&json)
    }

    /// The shape is detected first, so errors point into the records instead
    /// of only reporting that neither shape matched.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let shape: serde_json::Value = serde_json::from_str(json)?;

        let records = if is_backup(&shape) {
            let backup: Backup = serde_json::from_str(json)?;
            debug!(
                "reading backup version {} exported at {}",
                backup.version,
                backup.export_date.as_deref().unwrap_or("<unknown>")
            );
            backup.records
        } else {
            serde_json::from_str(json)?
        };

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the records with the given ids, in the order of `ids`. Without any
    /// ids all records are selected.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Record>, SelectionError> {
        let selected = if ids.is_empty() {
            self.records.clone()
        } else {
            let mut unknown = Vec::new();
            let mut selected = Vec::with_capacity(ids.len());

            for id in ids.iter().map(AsRef::as_ref) {
                match self.records.iter().find(|record| record.id() == Some(id)) {
                    Some(record) => selected.push(record.clone()),
                    None => unknown.push(id.to_string()),
                }
            }

            if !unknown.is_empty() {
                return Err(SelectionError::UnknownIds(unknown));
            }

            selected
        };

        if selected.is_empty() {
            return Err(SelectionError::Empty);
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    const BACKUP: &str = r#"{
        "version": "1.0",
        "exportDate": "2024-04-02T08:00:00.000Z",
        "records": [
            { "id": "a", "nazwisko": "Kowalski", "imie": "Jan", "suma": 56 },
            { "id": "b", "nazwisko": "Nowak", "imie": "Maria", "suma": 58 },
            { "id": "c", "nazwisko": "Wiśniewski", "imie": "Piotr", "suma": 58 }
        ],
        "users": [{ "id": "u1", "email": "john@doe.com", "name": "Jan Testowy" }]
    }"#;

    fn surnames(records: &[Record]) -> Vec<&str> {
        records.iter().map(Record::surname).collect()
    }

    #[test]
    fn test_reads_backup() {
        let file = RecordsFile::from_json(BACKUP).unwrap();
        assert_eq!(surnames(file.records()), vec!["Kowalski", "Nowak", "Wiśniewski"]);
    }

    #[test]
    fn test_reads_plain_array() {
        let file = RecordsFile::from_reader(
            r#"[{ "nazwisko": "Nowak" }, { "nazwisko": "Kowalski" }]"#.as_bytes(),
        )
        .unwrap();
        assert_eq!(surnames(file.records()), vec!["Nowak", "Kowalski"]);
    }

    #[test]
    fn test_rejects_other_json() {
        assert!(RecordsFile::from_json(r#"{ "records": [] }"#).is_err());
        assert!(RecordsFile::from_json("42").is_err());
    }

    #[test]
    fn test_backup_error_names_the_problem() {
        let error = RecordsFile::from_json(
            r#"{ "version": "1.0", "records": [{ "nazwisko": "Nowak", "data1": "2024-13-01" }] }"#,
        )
        .unwrap_err()
        .to_string();

        assert!(error.contains("2024-13-01"), "{error}");
        assert!(!error.contains("did not match any variant"), "{error}");
    }

    #[test]
    fn test_select_all() {
        let file = RecordsFile::from_json(BACKUP).unwrap();
        assert_eq!(file.select::<&str>(&[]).unwrap().len(), 3);
    }

    #[test]
    fn test_select_in_given_order() {
        let file = RecordsFile::from_json(BACKUP).unwrap();
        let selected = file.select(&["c", "a", "c"]).unwrap();

        assert_eq!(surnames(&selected), vec!["Wiśniewski", "Kowalski", "Wiśniewski"]);
    }

    #[test]
    fn test_select_unknown() {
        let file = RecordsFile::from_json(BACKUP).unwrap();

        assert_eq!(
            file.select(&["a", "x", "y"]),
            Err(SelectionError::UnknownIds(vec!["x".to_string(), "y".to_string()]))
        );
    }

    #[test]
    fn test_select_from_empty_file() {
        assert_eq!(
            RecordsFile::default().select::<&str>(&[]),
            Err(SelectionError::Empty)
        );
    }
}
