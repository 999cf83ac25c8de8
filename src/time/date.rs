use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::time::{Month, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the current date in the local timezone of the machine.
    ///
    /// Falls back to UTC if the local offset can not be determined (which happens
    /// on some platforms when multiple threads are running).
    #[must_use]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());

        Self::from(now.date())
    }
}

impl Date {
    pub fn formatted(&self, f: &str) -> String {
        f.replace("{year}", &format!("{:04}", self.year().as_usize()))
            .replace("{month}", &format!("{:02}", self.month().as_usize()))
            .replace("{day}", &format!("{:02}", self.day()))
    }

    /// The `dd.MM.yyyy` form used everywhere in the report.
    #[must_use]
    pub fn dotted(&self) -> String {
        self.formatted("{day}.{month}.{year}")
    }
}

impl Date {
    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        // `time::Date` is always a valid calendar date
        Self {
            year: Year::new(date.year().max(0) as usize),
            month: Month::from(date.month()),
            day: date.day() as usize,
        }
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    /// Parses `YYYY-MM-DD`. A full timestamp like `2024-01-05T00:00:00.000Z` is
    /// accepted as well, only the calendar date in front of the `T` is used.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let date = string
            .trim()
            .split_once(['T', ' '])
            .map_or(string.trim(), |(date, _)| date);

        if let [Some(year), Some(month), Some(day)] = date.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_to_string() {
        assert_eq!(
            Date::new(Year::new(2022), Month::January, 31).map(|d| d.to_string()),
            Ok("2022-01-31".to_string())
        );
    }

    #[test]
    fn test_dotted() {
        assert_eq!(date!(2024:01:05).dotted(), "05.01.2024");
        assert_eq!(date!(2024:12:31).dotted(), "31.12.2024");
        assert_eq!(date!(987:03:09).dotted(), "09.03.0987");
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!("2024-03-15".parse::<Date>(), Ok(date!(2024:03:15)));
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(
            "2024-01-05T00:00:00.000Z".parse::<Date>(),
            Ok(date!(2024:01:05))
        );
        assert_eq!(
            "2024-02-29T23:30:00+01:00".parse::<Date>(),
            Ok(date!(2024:02:29))
        );
        assert_eq!("2024-02-29 12:00".parse::<Date>(), Ok(date!(2024:02:29)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "2023-02-29".parse::<Date>(),
            Err(InvalidDate::InvalidDay {
                year: Year::new(2023),
                month: Month::February,
                day: 29,
            })
        );
        assert!("2023-13-01".parse::<Date>().is_err());
        assert!("yesterday".parse::<Date>().is_err());
        assert!("".parse::<Date>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let date: Date = serde_json::from_str("\"2024-03-04T00:00:00.000Z\"").unwrap();
        assert_eq!(date, date!(2024:03:04));
    }

    #[must_use]
    fn sort_array<T: Ord, const N: usize>(mut array: [T; N]) -> [T; N] {
        array.sort();
        array
    }

    #[test]
    fn test_date_sorting() {
        assert_eq!(
            sort_array([date!(2022:01:03), date!(2022:01:02), date!(2022:01:01)]),
            [date!(2022:01:01), date!(2022:01:02), date!(2022:01:03)]
        );

        assert_eq!(
            sort_array([date!(2000:01:01), date!(2000:04:01), date!(2000:03:01)]),
            [date!(2000:01:01), date!(2000:03:01), date!(2000:04:01)]
        );
    }

    #[test]
    fn test_from_time_date() {
        let date = time::Date::from_calendar_date(2024, time::Month::March, 7).unwrap();
        assert_eq!(Date::from(date), date!(2024:03:07));
    }
}
