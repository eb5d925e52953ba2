//! JSON body posted to the explore search endpoint.

use serde::{Deserialize, Serialize};

use crate::filter_state::{FilterState, SortOrder};

/// Search criteria as the server expects them.
///
/// Dates and numeric bounds are sent as the raw control values; validating them
/// is left to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub csrf_token: String,
    pub query: String,
    pub publication_type: String,
    pub start_date: String,
    pub end_date: String,
    pub min_uvl: String,
    pub max_uvl: String,
    /// `"on"` when only datasets with valid UVL files are wanted, else `"off"`.
    pub by_valid_uvls: String,
    pub min_num_configurations: String,
    pub max_num_configurations: String,
    pub sorting: SortOrder,
}

impl SearchRequest {
    pub fn new(state: &FilterState, csrf_token: impl Into<String>) -> Self {
        Self {
            csrf_token: csrf_token.into(),
            query: state.query.clone(),
            publication_type: state.publication_type.clone(),
            start_date: state.start_date.clone(),
            end_date: state.end_date.clone(),
            min_uvl: state.min_uvl.clone(),
            max_uvl: state.max_uvl.clone(),
            by_valid_uvls: if state.by_valid_uvls { "on" } else { "off" }.to_string(),
            min_num_configurations: state.min_num_configurations.clone(),
            max_num_configurations: state.max_num_configurations.clone(),
            sorting: state.sorting,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_state_body() {
        let body = serde_json::to_value(SearchRequest::new(&FilterState::from_query("genomics"), "tok")).unwrap();
        assert_eq!(
            body,
            json!({
                "csrf_token": "tok",
                "query": "genomics",
                "publication_type": "any",
                "start_date": "",
                "end_date": "",
                "min_uvl": "",
                "max_uvl": "",
                "by_valid_uvls": "off",
                "min_num_configurations": "",
                "max_num_configurations": "",
                "sorting": "newest",
            })
        );
    }

    #[test]
    fn test_raw_values_are_sent_unchanged() {
        let mut state = FilterState::default();
        state.start_date = "notadate".into();
        state.min_uvl = "12abc".into();
        state.by_valid_uvls = true;
        state.sorting = SortOrder::Oldest;
        let request = SearchRequest::new(&state, "");
        assert_eq!(request.start_date, "notadate");
        assert_eq!(request.min_uvl, "12abc");
        assert_eq!(request.by_valid_uvls, "on");
        assert_eq!(serde_json::to_value(&request).unwrap()["sorting"], "oldest");
    }
}
