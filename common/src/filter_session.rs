//! Filter panel state machine: every UI event updates the filters, re-derives the
//! affected bounds and yields the state the follow-up search is built from.

use chrono::NaiveDate;

use crate::filter_bounds::{FilterBounds, derive_bounds};
use crate::filter_state::{FilterField, FilterState};

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    /// A control reported a new value.
    Input { field: FilterField, value: String },
    /// A tag or publication type badge on a result card was clicked.
    BadgeClicked(String),
    /// The clear-filters control was activated.
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSession {
    pub state: FilterState,
    pub bounds: FilterBounds,
}

impl FilterSession {
    /// Session for a freshly loaded page. A non-blank `query` URL parameter
    /// seeds the query field.
    pub fn load(query_param: Option<&str>, today: NaiveDate) -> Self {
        let state = match query_param {
            Some(query) if !query.trim().is_empty() => FilterState::from_query(query),
            _ => FilterState::default(),
        };
        let bounds = FilterBounds::initial(&state, today);
        Self { state, bounds }
    }

    /// Applies `event` and returns the filters for the single search it triggers.
    pub fn handle(&mut self, event: FilterEvent, today: NaiveDate) -> FilterState {
        match event {
            FilterEvent::Input { field, value } => {
                self.state.set_field(field, &value);
                let patch = derive_bounds(field, &self.state, today);
                self.bounds.apply(&patch);
            }
            FilterEvent::BadgeClicked(text) => {
                self.state.set_field(FilterField::Query, text.trim());
            }
            FilterEvent::Cleared => {
                self.state = FilterState::default();
                self.bounds = FilterBounds::initial(&self.state, today);
            }
        }
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_bounds::CountBounds;
    use crate::filter_state::SortOrder;
    use crate::search_request::SearchRequest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn input(field: FilterField, value: &str) -> FilterEvent {
        FilterEvent::Input { field, value: value.to_string() }
    }

    #[test]
    fn test_load_with_query_param() {
        let session = FilterSession::load(Some("genomics"), today());
        assert_eq!(session.state, FilterState { query: "genomics".into(), ..FilterState::default() });
        assert_eq!(session.bounds.dates.start_date_max, Some(today()));

        let request = SearchRequest::new(&session.state, "tok");
        assert_eq!(request.query, "genomics");
        assert_eq!(request.publication_type, "any");
        assert_eq!(request.by_valid_uvls, "off");
    }

    #[test]
    fn test_load_ignores_blank_query_param() {
        assert_eq!(FilterSession::load(Some("   "), today()).state, FilterState::default());
        assert_eq!(FilterSession::load(None, today()).state, FilterState::default());
    }

    #[test]
    fn test_badge_click_sets_query() {
        let mut session = FilterSession::load(None, today());
        session.handle(input(FilterField::MinUvl, "2"), today());
        let searched = session.handle(FilterEvent::BadgeClicked(" ml ".into()), today());
        assert_eq!(searched.query, "ml");
        assert_eq!(searched.min_uvl, "2");
        assert_eq!(session.state, searched);
    }

    #[test]
    fn test_input_updates_paired_bound() {
        let mut session = FilterSession::load(None, today());
        let searched = session.handle(input(FilterField::MinConfigurations, "4"), today());
        assert_eq!(searched.min_num_configurations(), Some(4));
        assert_eq!(session.bounds.configurations.max_field_floor, Some(4));

        session.handle(input(FilterField::MinConfigurations, "x"), today());
        assert_eq!(session.bounds.configurations.max_field_floor, Some(0));
    }

    #[test]
    fn test_clear_filters_restores_defaults() {
        let mut session = FilterSession::load(None, today());
        session.handle(input(FilterField::Query, "x"), today());
        session.handle(input(FilterField::MinUvl, "5"), today());
        session.handle(input(FilterField::Sorting, "oldest"), today());
        session.handle(input(FilterField::StartDate, "2022-01-01"), today());
        session.handle(input(FilterField::ByValidUvls, "true"), today());

        let searched = session.handle(FilterEvent::Cleared, today());
        assert_eq!(searched, FilterState::default());
        assert_eq!(searched.sorting, SortOrder::Newest);
        assert_eq!(session.bounds.uvl, CountBounds::default());
        assert_eq!(session.bounds.dates.end_date_min, None);
        assert_eq!(session.bounds.dates.start_date_max, Some(today()));
    }
}
