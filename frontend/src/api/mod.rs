//! Client calls to the server endpoints.

pub mod explore_api;
