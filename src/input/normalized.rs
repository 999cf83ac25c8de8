use crate::input::{Record, TimeEntry};
use crate::time::{Date, Hours, Month, Year};

/// The values of a [`Record`] the report is rendered from.
///
/// Nothing here fails: absent fields become empty strings, so an incomplete
/// record still produces a (partially blank) report.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord<'a> {
    record: &'a Record,
    address: String,
    reporting_month: Month,
    reporting_year: Year,
    valid_entries: Vec<&'a TimeEntry>,
}

impl<'a> NormalizedRecord<'a> {
    /// `today` is used as the reporting period if the record has no dates.
    #[must_use]
    pub fn new(record: &'a Record, today: Date) -> Self {
        let period = reporting_period(record).unwrap_or(today);

        Self {
            record,
            address: address(record),
            reporting_month: period.month(),
            reporting_year: period.year(),
            valid_entries: record
                .time_entries()
                .iter()
                .filter(|entry| entry.is_filled())
                .collect(),
        }
    }

    pub fn record(&self) -> &'a Record {
        self.record
    }

    /// `<surname> <given name>`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.record.surname(), self.record.given_name())
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn reporting_month(&self) -> Month {
        self.reporting_month
    }

    pub fn reporting_year(&self) -> Year {
        self.reporting_year
    }

    /// The entries that have a date or hours, in input order.
    pub fn valid_entries(&self) -> &[&'a TimeEntry] {
        &self.valid_entries
    }

    pub fn total(&self) -> Hours {
        self.record.total()
    }
}

/// `<postal code> <locality> <street> <house number>[/<apartment number>]`
fn address(record: &Record) -> String {
    let mut address = format!(
        "{} {} {} {}",
        record.postal_code(),
        record.locality(),
        record.street(),
        record.house_number()
    );

    if let Some(apartment) = record.apartment_number() {
        address.push('/');
        address.push_str(apartment);
    }

    address
}

/// The month the report is about: the date of the first logged entry (as entered,
/// not the earliest one), otherwise the start of work.
fn reporting_period(record: &Record) -> Option<Date> {
    record
        .time_entries()
        .first()
        .and_then(TimeEntry::date)
        .or_else(|| record.work_start())
}
