use common::{explore_const::STAR_COUNT, result_view::StarRatingView};
use dioxus::{logger::tracing, prelude::*};

use crate::{api::explore_api::fetch_average_rating, data_definitions::page_environment::PageEnvironment};

const STAR_GOLD: &str = "#FFD700";
const STAR_GREY: &str = "#DDDDDD";

/// Five stars painted from the dataset's average rating, fetched on mount.
#[component]
pub fn StarRating(dataset_id: ReadSignal<i64>) -> Element {
    let environment = use_context::<PageEnvironment>();
    let rating = use_resource(move || {
        let endpoints = environment.endpoints.clone();
        let dataset_id = *dataset_id.read();
        async move {
            fetch_average_rating(&endpoints, dataset_id)
                .await
                .inspect_err(|e| tracing::error!("error fetching average rating: {e:#}"))
        }
    });
    let view = match rating.read().as_ref() {
        Some(Ok(rating)) => StarRatingView::from_average(rating.average_rating),
        Some(Err(_)) | None => StarRatingView::placeholder(),
    };
    let stars = (1..=STAR_COUNT)
        .map(|position| (position, if view.is_filled(position) { STAR_GOLD } else { STAR_GREY }))
        .collect::<Vec<_>>();

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            div {
                id: "star-rating-{dataset_id}",
                style: "font-size: 20px; letter-spacing: 2px;",
                for (position, color) in stars {
                    span {
                        key: "{position}",
                        "data-value": "{position}",
                        style: "color: {color};",
                        "★"
                    }
                }
            }
            span {
                id: "average-rating-{dataset_id}",
                "{view.label}"
            }
        }
    }
}
