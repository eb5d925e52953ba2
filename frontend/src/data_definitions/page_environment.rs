//! Values taken from the host page: server origin and request-authenticity token.

use anyhow::{Context, anyhow};
use chrono::{Local, NaiveDate};
use common::explore_const::{EXPLORE_PATH, element_id};
use dioxus::logger::tracing;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// Absolute URLs of the server endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploreEndpoints {
    pub base_url: String,
}

impl ExploreEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    /// Joins a server path such as `/explore` onto the base url.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn search_url(&self) -> String {
        self.url(EXPLORE_PATH)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageEnvironment {
    pub endpoints: ExploreEndpoints,
    pub csrf_token: String,
}

impl PageEnvironment {
    pub fn from_host_page() -> anyhow::Result<Self> {
        let window = web_sys::window().context("no browser window")?;
        let origin = window.location().origin().map_err(|e| anyhow!("cannot read page origin: {e:?}"))?;
        let document = window.document().context("window has no document")?;
        let csrf_token = read_csrf_token(&document).unwrap_or_else(|| {
            tracing::warn!("no csrf token found on the host page, searches are sent without one");
            String::new()
        });
        Ok(Self { endpoints: ExploreEndpoints::new(origin), csrf_token })
    }
}

/// `value` of the `csrf_token` input, else `content` of `<meta name="csrf-token">`.
fn read_csrf_token(document: &Document) -> Option<String> {
    let from_input = document
        .get_element_by_id(element_id::CSRF_TOKEN)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value());
    if from_input.is_some() {
        return from_input;
    }
    document
        .query_selector("meta[name=\"csrf-token\"]")
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

/// Today's date in the viewer's time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
