//! Common library exports shared by the explore frontend: wire types, filter state,
//! range constraint derivation and result view models.

extern crate serde;


pub mod explore_const;
pub mod filter_state;
pub mod filter_bounds;
pub mod filter_session;
pub mod search_request;
pub mod search_result;
pub mod result_view;
pub mod request_sequence;
pub mod search_dispatch;
