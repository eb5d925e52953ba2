//! Components of the dataset explore page.

pub mod filter_panel;
pub mod results_list;
pub mod dataset_card;
pub mod star_rating;
