use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize};
use thiserror::Error;

/// A decimal number of worked hours, as logged per day or as a total.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Hours(f64);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidHours {
    #[error("\"{0}\" is not a number of hours")]
    NotANumber(String),
    #[error("{0} is not a finite number of hours")]
    NotFinite(f64),
}

impl Hours {
    pub fn new(value: f64) -> Result<Self, InvalidHours> {
        if !value.is_finite() {
            return Err(InvalidHours::NotFinite(value));
        }

        // -0.0 would be displayed as "-0"
        Ok(Self(value + 0.0))
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

/// Shortest decimal form: `8`, `7.5`, `0.25`.
impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Hours {
    type Err = InvalidHours;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let value = string
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| InvalidHours::NotANumber(string.to_string()))?;

        Self::new(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HoursInput {
    Number(f64),
    Text(String),
}

/// Hours are stored either as a JSON number or as the string typed into the form.
impl<'de> Deserialize<'de> for Hours {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        match HoursInput::deserialize(deserializer)? {
            HoursInput::Number(value) => Self::new(value),
            HoursInput::Text(text) => Self::from_str(&text),
        }
        .map_err(de::Error::custom)
    }
}

/// Deserializes an optional number of hours where `null` and `""` both mean absent.
pub(crate) fn deserialize_optional_hours<'de, D>(deserializer: D) -> Result<Option<Hours>, D::Error>
where
    D: de::Deserializer<'de>,
{
    match Option::<HoursInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(HoursInput::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(HoursInput::Text(text)) => Hours::from_str(&text)
            .map(Some)
            .map_err(de::Error::custom),
        Some(HoursInput::Number(value)) => Hours::new(value).map(Some).map_err(de::Error::custom),
    }
}
