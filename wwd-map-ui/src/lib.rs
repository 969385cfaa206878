//! Shared Dioxus components and Leaflet/Chart.js bridge for the wind-wave map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the map and chart JS functions via `js_sys::eval()`
//! - `config`: map, tile layer, marker icon and chart settings handed to JS
//! - `state`: Reactive AppState with Dioxus Signals
//! - `surfaces`: browser implementations of the `wwd-core` surface traits
//! - `components`: Reusable RSX components (readouts, chart containers, etc.)

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod state;
pub mod surfaces;
