//! Core types and view logic for the wind-wave map.
//!
//! - `coordinate`, `reading`, `series`, `response`: the data model and the
//!   `/get-stored-data` wire format
//! - `direction`, `safety`: bearing classification and the sailing safety rules
//! - `presenter`, `controller`, `orchestrator`: the chart, marker and fetch
//!   fan-out logic, written against surface traits so the browser app and the
//!   CLI can share it
//! - `client` (feature `api`): reqwest client for the stored-data endpoint

pub mod controller;
pub mod coordinate;
mod de;
pub mod direction;
pub mod error;
pub mod orchestrator;
pub mod presenter;
pub mod reading;
pub mod response;
pub mod safety;
pub mod series;

#[cfg(feature = "api")]
pub mod client;
