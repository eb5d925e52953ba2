//! View models for the result list: counter text, dataset cards and star ratings.
//!
//! Everything here is plain data; the frontend renders it through escaped text
//! nodes, so dataset fields never reach the page as markup.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::explore_const::{STAR_COUNT, download_path};
use crate::request_sequence::{RequestSequence, SearchTicket};
use crate::search_result::{DatasetAuthor, SearchResult};

/// `"1 dataset"`, `"0 datasets"`, `"2 datasets"`.
pub fn dataset_count_text(count: usize) -> String {
    let noun = if count == 1 { "dataset" } else { "datasets" };
    format!("{count} {noun}")
}

/// Text of the results counter label.
pub fn results_number_text(count: usize) -> String {
    format!("{} found", dataset_count_text(count))
}

/// What the results area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchOutcome {
    /// No response applied yet.
    #[default]
    Pending,
    /// Results of the search identified by `ticket`, in server order.
    Loaded { ticket: SearchTicket, results: Vec<SearchResult> },
}

impl SearchOutcome {
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::Pending => &[],
            SearchOutcome::Loaded { results, .. } => results,
        }
    }

    pub fn ticket(&self) -> Option<SearchTicket> {
        match self {
            SearchOutcome::Pending => None,
            SearchOutcome::Loaded { ticket, .. } => Some(*ticket),
        }
    }

    pub fn counter_text(&self) -> Option<String> {
        match self {
            SearchOutcome::Pending => None,
            SearchOutcome::Loaded { results, .. } => Some(results_number_text(results.len())),
        }
    }

    pub fn not_found_visible(&self) -> bool {
        matches!(self, SearchOutcome::Loaded { results, .. } if results.is_empty())
    }

    /// Replaces the shown results with the response to `ticket`, unless a newer
    /// search has been issued since. Returns whether the response was applied.
    pub fn apply(&mut self, sequence: &RequestSequence, ticket: SearchTicket, results: Vec<SearchResult>) -> bool {
        if !sequence.is_current(ticket) {
            return false;
        }
        *self = SearchOutcome::Loaded { ticket, results };
        true
    }
}

/// Accepts RFC 3339, RFC 2822 / HTTP-date and naive ISO timestamps (taken as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Day, long month, year, hour and minute in `tz`, e.g. `"January 5, 2024, 3:04 PM"`.
/// Unparseable input is returned unchanged.
pub fn format_created_at<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw) {
        Some(ts) => ts.with_timezone(tz).format("%B %-d, %Y, %-I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// `"Name (Affiliation) (ORCID)"`, skipping absent or empty parts.
pub fn author_line(author: &DatasetAuthor) -> String {
    let mut line = author.name.clone();
    for part in [&author.affiliation, &author.orcid].into_iter().flatten() {
        if !part.is_empty() {
            line.push_str(&format!(" ({part})"));
        }
    }
    line
}

/// Pre-computed texts and links of one result card.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetCardView {
    pub dataset_id: i64,
    pub title: String,
    pub url: String,
    pub publication_type: String,
    pub created_at: String,
    pub description: String,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
    pub download_href: String,
    pub download_label: String,
}

impl DatasetCardView {
    pub fn new<Tz: TimeZone>(result: &SearchResult, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            dataset_id: result.id,
            title: result.title.clone(),
            url: result.url.clone(),
            publication_type: result.publication_type.trim().to_string(),
            created_at: format_created_at(&result.created_at, tz),
            description: result.description.clone(),
            authors: result.authors.iter().map(author_line).collect(),
            tags: result.tags.iter().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()).collect(),
            download_href: download_path(result.id),
            download_label: format!("Download ({})", result.total_size_human),
        }
    }
}

/// Star row of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRatingView {
    pub filled: u8,
    pub label: String,
}

impl StarRatingView {
    /// Shown until the rating arrives, and kept when the fetch fails.
    pub fn placeholder() -> Self {
        Self { filled: 0, label: "-".to_string() }
    }

    pub fn from_average(average_rating: f64) -> Self {
        let filled = average_rating.round().clamp(0.0, STAR_COUNT as f64) as u8;
        // ties round away from zero (3.25 -> "3.3"); `{:.1}` alone rounds them to even
        let label = format!("{:.1}", (average_rating * 10.0).round() / 10.0);
        Self { filled, label }
    }

    /// Whether the star at 1-based `position` is painted gold.
    pub fn is_filled(&self, position: u8) -> bool {
        position <= self.filled
    }
}
