//! Client calls to the explore search and dataset rating endpoints.

use anyhow::Context;
use common::{
    explore_const::average_rating_path,
    search_request::SearchRequest,
    search_result::{AverageRating, SearchResult, parse_search_response},
};

use crate::data_definitions::page_environment::ExploreEndpoints;

pub async fn search_datasets(endpoints: &ExploreEndpoints, request: &SearchRequest) -> anyhow::Result<Vec<SearchResult>> {
    let body = reqwest::Client::new()
        .post(endpoints.search_url())
        .json(request)
        .send()
        .await
        .context("search request failed")?
        .error_for_status()
        .context("search endpoint returned an error status")?
        .text()
        .await
        .context("cannot read search response")?;
    let results = parse_search_response(&body).context("search response is not a list of datasets")?;
    Ok(results)
}

pub async fn fetch_average_rating(endpoints: &ExploreEndpoints, dataset_id: i64) -> anyhow::Result<AverageRating> {
    let rating = reqwest::Client::new()
        .get(endpoints.url(&average_rating_path(dataset_id)))
        .send()
        .await
        .with_context(|| format!("rating request for dataset {dataset_id} failed"))?
        .error_for_status()?
        .json::<AverageRating>()
        .await
        .with_context(|| format!("rating response for dataset {dataset_id} is malformed"))?;
    Ok(rating)
}
