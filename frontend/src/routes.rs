use dioxus::prelude::*;

use crate::pages::explore_page::ExplorePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::ExplorePage { query: String::new() })]
    // `?query=` seeds the search field
    #[route("/explore?:query")]
    ExplorePage { query: String },
}
