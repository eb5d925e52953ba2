//! Dataset explore page: filter panel on the left, result list on the right.

use common::{
    filter_session::{FilterEvent, FilterSession},
    result_view::SearchOutcome,
    search_dispatch::{PendingSearch, SearchDispatcher},
};
use dioxus::{logger::tracing, prelude::*};

use crate::{
    api::explore_api::search_datasets,
    components::{
        error_boundary::{EnvironmentErrorDisplay, ResultsErrorBoundary},
        explore_components::{filter_panel::FilterPanel, results_list::{ResultsHeader, ResultsList}},
    },
    data_definitions::page_environment::{PageEnvironment, today},
};

/// Shared by every component below the explore page.
///
/// All filter changes go through `dispatch`, which updates the session and fires
/// exactly one search for the resulting filters. `search_again` re-sends the
/// current filters unchanged.
#[derive(Clone, Copy)]
pub struct ExploreState {
    pub session: ReadSignal<FilterSession>,
    pub outcome: ReadSignal<SearchOutcome>,
    pub dispatch: Callback<FilterEvent>,
    pub search_again: Callback<()>,
}

#[component]
pub fn ExplorePage(query: String) -> Element {
    let environment = use_hook(|| PageEnvironment::from_host_page().map_err(|e| format!("{e:#}")));
    let environment = match environment {
        Ok(environment) => environment,
        Err(error_txt) => {
            tracing::error!("explore page cannot start: {error_txt}");
            return rsx! { EnvironmentErrorDisplay { error_txt } };
        }
    };

    rsx! {
        Title { "Explore datasets" }
        ExplorePageRootComponent { query, environment }
    }
}

#[component]
fn ExplorePageRootComponent(query: ReadSignal<String>, environment: PageEnvironment) -> Element {
    let mut session = use_signal(|| FilterSession::load(Some(query.peek().as_str()), today()));
    let mut outcome = use_signal(SearchOutcome::default);
    let mut dispatcher = use_signal(|| SearchDispatcher::new(environment.csrf_token.clone()));
    let endpoints = use_context_provider(move || environment).endpoints;

    let send_search = use_callback(move |PendingSearch { ticket, request }: PendingSearch| {
        tracing::info!("search {ticket} dispatched, query={:?}", request.query);
        let endpoints = endpoints.clone();
        spawn(async move {
            match search_datasets(&endpoints, &request).await {
                Ok(results) => {
                    let count = results.len();
                    if dispatcher.peek().accept(&mut outcome.write(), ticket, results) {
                        tracing::info!("search {ticket} returned {count} datasets");
                    } else {
                        tracing::debug!("search {ticket} superseded by {:?}, response dropped", dispatcher.peek().latest());
                    }
                }
                Err(e) => tracing::error!("search {ticket} failed: {e:#}"),
            }
        });
    });

    let dispatch = use_callback(move |event: FilterEvent| {
        let pending = dispatcher.write().on_event(&mut session.write(), event, today());
        send_search(pending);
    });

    let search_again = use_callback(move |_: ()| {
        let pending = dispatcher.write().submit(&session.peek().state);
        send_search(pending);
    });

    // runs on mount and whenever the `query` url parameter changes
    use_effect(move || {
        let query = query.read().clone();
        session.set(FilterSession::load(Some(query.as_str()), today()));
        let pending = dispatcher.write().submit(&session.peek().state);
        send_search(pending);
    });

    use_context_provider(move || ExploreState {
        session: session.into(),
        outcome: outcome.into(),
        dispatch,
        search_again,
    });

    rsx! {
        div {
            id: "x-explore-page-root-component",
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 24px;
                width: 100%;
                min-height: 100%;
                padding: 24px;
                box-sizing: border-box;
                background-color: #F5F6F8;
            ",
            div {
                id: "x-explore-filters-column",
                style: "
                    flex-shrink: 0;
                    width: 360px;
                    background-color: white;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 8px;
                    padding: 16px;
                    box-sizing: border-box;
                ",
                FilterPanel {}
            }
            div {
                id: "x-explore-results-column",
                style: "
                    flex-grow: 1;
                    min-width: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                ",
                ResultsErrorBoundary {
                    ResultsHeader {}
                    ResultsList {}
                }
            }
        }
    }
}
