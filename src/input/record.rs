use serde::{de, Deserialize};

use crate::time::{self, Date, Hours};

/// Deserializes an optional date where `null` and `""` both mean absent.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: de::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.trim().is_empty() => {
            value.parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// One line of the hour log. While a record is edited rows may be left partially
/// or completely empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimeEntry {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    date: Option<Date>,
    #[serde(default, deserialize_with = "time::deserialize_optional_hours")]
    hours: Option<Hours>,
}

impl TimeEntry {
    #[must_use]
    pub fn new(date: Option<Date>, hours: Option<Hours>) -> Self {
        Self { date, hours }
    }

    #[must_use]
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    #[must_use]
    pub fn hours(&self) -> Option<Hours> {
        self.hours
    }

    /// Whether the entry carries any data. Rows without a date and with zero
    /// hours are placeholders of the editor.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.date.is_some() || self.hours.is_some_and(|hours| !hours.is_zero())
    }
}

/// A person's community service log for one case, as stored by the records
/// database. Field names follow the stored JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default)]
    id: Option<String>,

    // case references
    #[serde(default)]
    kow: Option<String>,
    #[serde(default)]
    wo: Option<String>,
    #[serde(default)]
    ii_k: Option<String>,

    // person
    #[serde(default, rename = "nazwisko")]
    surname: Option<String>,
    #[serde(default, rename = "imie")]
    given_name: Option<String>,
    #[serde(default, rename = "kod")]
    postal_code: Option<String>,
    #[serde(default, rename = "miejscowosc")]
    locality: Option<String>,
    #[serde(default, rename = "ulica")]
    street: Option<String>,
    #[serde(default, rename = "nr_domu")]
    house_number: Option<String>,
    #[serde(default, rename = "nr_lokalu")]
    apartment_number: Option<String>,

    #[serde(default, rename = "timeEntries")]
    time_entries: Option<Vec<TimeEntry>>,
    #[serde(default, rename = "suma")]
    total: Option<Hours>,
    #[serde(default, rename = "data1", deserialize_with = "deserialize_optional_date")]
    work_start: Option<Date>,
    #[serde(default, rename = "data2", deserialize_with = "deserialize_optional_date")]
    work_end: Option<Date>,
    #[serde(default, rename = "uwagi")]
    remarks: Option<String>,
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

impl Record {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn kow(&self) -> &str {
        or_empty(&self.kow)
    }

    pub fn wo(&self) -> &str {
        or_empty(&self.wo)
    }

    pub fn ii_k(&self) -> &str {
        or_empty(&self.ii_k)
    }

    pub fn surname(&self) -> &str {
        or_empty(&self.surname)
    }

    pub fn given_name(&self) -> &str {
        or_empty(&self.given_name)
    }

    pub fn postal_code(&self) -> &str {
        or_empty(&self.postal_code)
    }

    pub fn locality(&self) -> &str {
        or_empty(&self.locality)
    }

    pub fn street(&self) -> &str {
        or_empty(&self.street)
    }

    pub fn house_number(&self) -> &str {
        or_empty(&self.house_number)
    }

    pub fn apartment_number(&self) -> Option<&str> {
        self.apartment_number
            .as_deref()
            .filter(|number| !number.is_empty())
    }

    /// The hour log in the order it was entered.
    pub fn time_entries(&self) -> &[TimeEntry] {
        self.time_entries.as_deref().unwrap_or_default()
    }

    /// The stored total. It is taken as is and never recomputed from the entries.
    pub fn total(&self) -> Hours {
        self.total.unwrap_or_default()
    }

    pub fn work_start(&self) -> Option<Date> {
        self.work_start
    }

    pub fn work_end(&self) -> Option<Date> {
        self.work_end
    }

    pub fn remarks(&self) -> &str {
        or_empty(&self.remarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_deserialize_stored_record() {
        let record: Record = serde_json::from_value(serde_json::json!({
            "id": "clx1",
            "kow": "Kow/123/2024",
            "wo": null,
            "ii_k": "II K 789/24",
            "nazwisko": "Kowalski",
            "imie": "Jan",
            "kod": "87-300",
            "miejscowosc": "Brodnica",
            "ulica": "Królowej Jadwigi",
            "nr_domu": "15",
            "nr_lokalu": "",
            "nr_tel": "123456789",
            "data1": "2024-01-01T00:00:00.000Z",
            "data2": null,
            "uwagi": null,
            "timeEntries": [
                { "date": "2024-01-05T00:00:00.000Z", "hours": 8 },
                { "date": null, "hours": "" }
            ],
            "suma": 8,
            "createdAt": "2024-01-31T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(record.id(), Some("clx1"));
        assert_eq!(record.kow(), "Kow/123/2024");
        assert_eq!(record.wo(), "");
        assert_eq!(record.surname(), "Kowalski");
        assert_eq!(record.apartment_number(), None);
        assert_eq!(record.work_start(), Some(date!(2024:01:01)));
        assert_eq!(record.work_end(), None);
        assert_eq!(record.remarks(), "");
        assert_eq!(record.time_entries().len(), 2);
        assert_eq!(record.time_entries()[0].date(), Some(date!(2024:01:05)));
        assert_eq!(record.time_entries()[1], TimeEntry::default());
        assert_eq!(record.total().to_string(), "8");
    }

    #[test]
    fn test_missing_fields_default() {
        let record: Record = serde_json::from_str("{}").unwrap();

        assert_eq!(record.surname(), "");
        assert_eq!(record.given_name(), "");
        assert!(record.time_entries().is_empty());
        assert!(record.total().is_zero());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result = serde_json::from_str::<Record>(r#"{ "data1": "31.01.2024" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_is_filled() {
        let hours = |value: f64| Hours::new(value).ok();

        assert!(TimeEntry::new(Some(date!(2024:01:05)), None).is_filled());
        assert!(TimeEntry::new(Some(date!(2024:01:05)), hours(0.0)).is_filled());
        assert!(TimeEntry::new(None, hours(4.0)).is_filled());
        assert!(!TimeEntry::new(None, hours(0.0)).is_filled());
        assert!(!TimeEntry::new(None, None).is_filled());
    }
}
