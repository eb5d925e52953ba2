//! Result counter, not-found indicator and the list of dataset cards.

use chrono::Local;
use common::{explore_const::element_id, result_view::DatasetCardView};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::{
    components::{explore_components::dataset_card::DatasetCard, loading_indicator::LoadingIndicator},
    pages::explore_page::ExploreState,
};

#[component]
pub fn ResultsHeader() -> Element {
    let outcome = use_context::<ExploreState>().outcome;
    let counter_text = use_memo(move || outcome.read().counter_text().unwrap_or_default());
    let not_found_display = use_memo(move || if outcome.read().not_found_visible() { "flex" } else { "none" });

    rsx! {
        h1 {
            id: element_id::RESULTS_NUMBER,
            style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112); margin: 0; padding: 4px 0;",
            "{counter_text}"
        }
        div {
            id: element_id::RESULTS_NOT_FOUND,
            style: "
                display: {not_found_display};
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 40px;
                color: rgba(0, 0, 0, 0.5);
                font-size: 18px;
            ",
            Icon { icon: MdSearch, style: "width: 48px; height: 48px;" }
            "We have not found any datasets that meet your search criteria. How about trying some others?"
        }
    }
}

#[component]
pub fn ResultsList() -> Element {
    let outcome = use_context::<ExploreState>().outcome;
    let outcome = outcome.read();
    let Some(ticket) = outcome.ticket() else {
        return rsx! { LoadingIndicator {} };
    };
    let cards = outcome
        .results()
        .iter()
        .map(|result| DatasetCardView::new(result, &Local))
        .collect::<Vec<_>>();

    rsx! {
        div {
            id: element_id::RESULTS,
            style: "display: flex; flex-direction: column; gap: 12px; width: 100%;",
            for card in cards {
                // keyed by search so every applied response re-fetches its ratings
                DatasetCard { key: "{ticket.0}-{card.dataset_id}", card }
            }
        }
    }
}
