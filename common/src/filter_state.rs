//! Filter form state: the raw values of every explore filter control.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::explore_const::DEFAULT_PUBLICATION_TYPE;

/// One control of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Query,
    PublicationType,
    StartDate,
    EndDate,
    MinUvl,
    MaxUvl,
    ByValidUvls,
    MinConfigurations,
    MaxConfigurations,
    Sorting,
}

impl FilterField {
    /// Element id of the control (the `name` of the radio group for `Sorting`).
    pub fn element_id(&self) -> &'static str {
        match self {
            FilterField::Query => "query",
            FilterField::PublicationType => "publication_type",
            FilterField::StartDate => "start_date",
            FilterField::EndDate => "end_date",
            FilterField::MinUvl => "min_uvl",
            FilterField::MaxUvl => "max_uvl",
            FilterField::ByValidUvls => "by_valid_uvls",
            FilterField::MinConfigurations => "min_num_configurations",
            FilterField::MaxConfigurations => "max_num_configurations",
            FilterField::Sorting => "sorting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest first",
            SortOrder::Oldest => "Oldest first",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(format!("unknown sort order: {other:?}")),
        }
    }
}

/// Current value of every filter control.
///
/// Text, date and number controls are kept as the raw strings the user typed;
/// the parsed accessors below turn malformed input into `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub publication_type: String,
    pub start_date: String,
    pub end_date: String,
    pub min_uvl: String,
    pub max_uvl: String,
    pub by_valid_uvls: bool,
    pub min_num_configurations: String,
    pub max_num_configurations: String,
    pub sorting: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            publication_type: DEFAULT_PUBLICATION_TYPE.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            min_uvl: String::new(),
            max_uvl: String::new(),
            by_valid_uvls: false,
            min_num_configurations: String::new(),
            max_num_configurations: String::new(),
            sorting: SortOrder::default(),
        }
    }
}

impl FilterState {
    pub fn from_query(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }

    /// Writes the value reported by a control's input event.
    ///
    /// The valid-only toggle accepts `"true"`/`"on"` as checked. An unknown
    /// sort order leaves the current one in place.
    pub fn set_field(&mut self, field: FilterField, value: &str) {
        match field {
            FilterField::Query => self.query = value.to_string(),
            FilterField::PublicationType => self.publication_type = value.to_string(),
            FilterField::StartDate => self.start_date = value.to_string(),
            FilterField::EndDate => self.end_date = value.to_string(),
            FilterField::MinUvl => self.min_uvl = value.to_string(),
            FilterField::MaxUvl => self.max_uvl = value.to_string(),
            FilterField::ByValidUvls => self.by_valid_uvls = matches!(value, "true" | "on"),
            FilterField::MinConfigurations => self.min_num_configurations = value.to_string(),
            FilterField::MaxConfigurations => self.max_num_configurations = value.to_string(),
            FilterField::Sorting => {
                if let Ok(sorting) = value.parse() {
                    self.sorting = sorting;
                }
            }
        }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }

    pub fn min_uvl(&self) -> Option<i64> {
        parse_leading_int(&self.min_uvl)
    }

    pub fn max_uvl(&self) -> Option<i64> {
        parse_leading_int(&self.max_uvl)
    }

    pub fn min_num_configurations(&self) -> Option<i64> {
        parse_leading_int(&self.min_num_configurations)
    }

    pub fn max_num_configurations(&self) -> Option<i64> {
        parse_leading_int(&self.max_num_configurations)
    }
}

/// Parses a date control value (`YYYY-MM-DD`, unpadded month/day accepted).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Formats a date the way `<input type="date">` expects its `min`/`max`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Lenient integer parse: optional sign followed by the leading run of digits.
///
/// `"12abc"` gives 12 and `"3.9"` gives 3; input without a leading digit
/// (after trimming and an optional sign) gives `None`. A digit run too long
/// for `i64` saturates instead of being dropped.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_cleared_form() {
        let state = FilterState::default();
        assert_eq!(state.query, "");
        assert_eq!(state.publication_type, "any");
        assert!(!state.by_valid_uvls);
        assert_eq!(state.start_date, "");
        assert_eq!(state.max_num_configurations, "");
        assert_eq!(state.sorting, SortOrder::Newest);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  7 "), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("notanumber"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_parse_leading_int_saturates_on_overflow() {
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(-i64::MAX));
        assert_eq!(parse_leading_int("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-09"), NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(parse_date("2020-2-2"), NaiveDate::from_ymd_opt(2020, 2, 2));
        assert_eq!(parse_date("notadate"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_format_date_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024-01-05");
    }

    #[test]
    fn test_set_field() {
        let mut state = FilterState::default();
        state.set_field(FilterField::MinUvl, "3");
        state.set_field(FilterField::ByValidUvls, "true");
        state.set_field(FilterField::Sorting, "oldest");
        assert_eq!(state.min_uvl(), Some(3));
        assert!(state.by_valid_uvls);
        assert_eq!(state.sorting, SortOrder::Oldest);

        state.set_field(FilterField::Sorting, "sideways");
        assert_eq!(state.sorting, SortOrder::Oldest);
        state.set_field(FilterField::ByValidUvls, "false");
        assert!(!state.by_valid_uvls);
    }
}
