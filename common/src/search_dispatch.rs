//! Turns filter changes into numbered search requests and decides which
//! responses reach the result list.

use chrono::NaiveDate;

use crate::filter_session::{FilterEvent, FilterSession};
use crate::filter_state::FilterState;
use crate::request_sequence::{RequestSequence, SearchTicket};
use crate::result_view::SearchOutcome;
use crate::search_request::SearchRequest;
use crate::search_result::SearchResult;

/// A request ready to be posted, tagged with the ticket its response must carry.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub ticket: SearchTicket,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchDispatcher {
    csrf_token: String,
    sequence: RequestSequence,
}

impl SearchDispatcher {
    pub fn new(csrf_token: impl Into<String>) -> Self {
        Self { csrf_token: csrf_token.into(), sequence: RequestSequence::default() }
    }

    /// Issues a new ticket for `filters`; any search still in flight is superseded.
    pub fn submit(&mut self, filters: &FilterState) -> PendingSearch {
        PendingSearch {
            ticket: self.sequence.issue(),
            request: SearchRequest::new(filters, self.csrf_token.clone()),
        }
    }

    /// Applies `event` to `session` and returns the one search it triggers.
    pub fn on_event(&mut self, session: &mut FilterSession, event: FilterEvent, today: NaiveDate) -> PendingSearch {
        let filters = session.handle(event, today);
        self.submit(&filters)
    }

    /// Writes a search response into `outcome` if its ticket is still the latest.
    pub fn accept(&self, outcome: &mut SearchOutcome, ticket: SearchTicket, results: Vec<SearchResult>) -> bool {
        outcome.apply(&self.sequence, ticket, results)
    }

    pub fn latest(&self) -> Option<SearchTicket> {
        self.sequence.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::{FilterField, SortOrder};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn dataset(id: i64) -> SearchResult {
        SearchResult {
            id,
            title: format!("Dataset {id}"),
            url: format!("http://localhost/doi/{id}/"),
            publication_type: "book".into(),
            description: String::new(),
            created_at: "2024-01-05T15:04:00".into(),
            authors: vec![],
            tags: vec![],
            total_size_human: "1 KB".into(),
        }
    }

    fn input(field: FilterField, value: &str) -> FilterEvent {
        FilterEvent::Input { field, value: value.to_string() }
    }

    #[test]
    fn test_page_load_sends_one_seeded_search() {
        let session = FilterSession::load(Some("genomics"), today());
        let mut dispatcher = SearchDispatcher::new("tok");

        let initial = dispatcher.submit(&session.state);
        assert_eq!(initial.ticket, SearchTicket(1));
        assert_eq!(initial.request.query, "genomics");
        assert_eq!(initial.request.csrf_token, "tok");
        assert_eq!(initial.request, SearchRequest::new(&FilterState::from_query("genomics"), "tok"));
        assert_eq!(dispatcher.latest(), Some(initial.ticket));
    }

    #[test]
    fn test_each_event_sends_exactly_one_search() {
        let mut session = FilterSession::load(None, today());
        let mut dispatcher = SearchDispatcher::new("tok");
        dispatcher.submit(&session.state);

        let events = vec![
            input(FilterField::Query, "x"),
            input(FilterField::MinUvl, "5"),
            FilterEvent::BadgeClicked("ml".into()),
            FilterEvent::Cleared,
        ];
        let sent: Vec<_> = events
            .into_iter()
            .map(|event| dispatcher.on_event(&mut session, event, today()))
            .collect();

        let tickets: Vec<_> = sent.iter().map(|search| search.ticket.0).collect();
        assert_eq!(tickets, vec![2, 3, 4, 5]);
        assert_eq!(sent[1].request.min_uvl, "5");
        assert_eq!(sent[2].request.query, "ml");
        assert_eq!(sent[2].request.min_uvl, "5");

        let cleared = &sent[3].request;
        assert_eq!(cleared, &SearchRequest::new(&FilterState::default(), "tok"));
        assert_eq!(cleared.publication_type, "any");
        assert_eq!(cleared.by_valid_uvls, "off");
        assert_eq!(cleared.sorting, SortOrder::Newest);
    }

    #[test]
    fn test_older_response_arriving_late_is_dropped() {
        let mut session = FilterSession::load(None, today());
        let mut dispatcher = SearchDispatcher::new("tok");
        let mut outcome = SearchOutcome::default();

        let first = dispatcher.on_event(&mut session, input(FilterField::Query, "ge"), today());
        let second = dispatcher.on_event(&mut session, input(FilterField::Query, "genomics"), today());

        assert!(dispatcher.accept(&mut outcome, second.ticket, vec![dataset(7)]));
        assert!(!dispatcher.accept(&mut outcome, first.ticket, vec![dataset(1), dataset(2)]));
        assert_eq!(outcome.ticket(), Some(second.ticket));
        assert_eq!(outcome.results().iter().map(|r| r.id).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_resubmitting_same_filters_supersedes_earlier_search() {
        let session = FilterSession::load(Some("ml"), today());
        let mut dispatcher = SearchDispatcher::new("tok");
        let mut outcome = SearchOutcome::default();

        let stalled = dispatcher.submit(&session.state);
        let retried = dispatcher.submit(&session.state);
        assert_eq!(stalled.request, retried.request);

        assert!(!dispatcher.accept(&mut outcome, stalled.ticket, vec![dataset(1)]));
        assert_eq!(outcome, SearchOutcome::Pending);
        assert!(dispatcher.accept(&mut outcome, retried.ticket, vec![]));
        assert!(outcome.not_found_visible());
    }
}
