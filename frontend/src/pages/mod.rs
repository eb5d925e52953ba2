pub mod explore_page;
