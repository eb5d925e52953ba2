pub mod page_environment;
