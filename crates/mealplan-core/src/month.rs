//! Month labels (`"April 2025"`) used to bucket grocery items and meal plans.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of years (current included) covered by the default month catalog
pub const DEFAULT_CATALOG_YEARS: i32 = 3;

/// Calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// 1-based month number (January = 1)
    pub fn number(&self) -> u32 {
        self.index() as u32 + 1
    }

    /// 0-based index into [`Month::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Month from a 1-based number
    pub fn from_number(number: u32) -> Option<Self> {
        Month::ALL.get((number as usize).checked_sub(1)?).copied()
    }

    /// Case-insensitive lookup by full English name
    pub fn from_name(name: &str) -> Option<Self> {
        Month::ALL
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    pub fn next(&self) -> Self {
        Month::ALL[(self.index() + 1) % 12]
    }

    pub fn prev(&self) -> Self {
        Month::ALL[(self.index() + 11) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `"<MonthName> <Year>"` label.
///
/// Serialized as its display string so config files can say
/// `default_month = "April 2025"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthLabel {
    pub month: Month,
    pub year: i32,
}

impl MonthLabel {
    pub fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }

    /// The month a calendar date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        let month = Month::from_number(date.month()).unwrap_or(Month::January);
        Self::new(month, date.year())
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

impl FromStr for MonthLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(month), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::invalid_month_label(s));
        };
        let month = Month::from_name(month).ok_or_else(|| Error::invalid_month_label(s))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| Error::invalid_month_label(s))?;
        Ok(Self::new(month, year))
    }
}

impl TryFrom<String> for MonthLabel {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthLabel> for String {
    fn from(label: MonthLabel) -> Self {
        label.to_string()
    }
}

/// Default month catalog: every month of the current year and the two years
/// before it, newest year first and January → December within a year.
pub fn default_month_catalog(current_year: i32) -> Vec<MonthLabel> {
    (0..DEFAULT_CATALOG_YEARS)
        .flat_map(|offset| {
            let year = current_year - offset;
            Month::ALL.iter().map(move |m| MonthLabel::new(*m, year))
        })
        .collect()
}
