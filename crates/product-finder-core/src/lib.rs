//! # Product Finder Core
//!
//! Shared, WASM-safe logic for Product Finder: the product data model,
//! search-term normalization with the synonym-aware filter, and the pure
//! view model the front ends render.
//!
//! This crate contains no tokio, reqwest, filesystem I/O, or other
//! native-only dependencies. It compiles to both native targets and
//! `wasm32-unknown-unknown`.

pub mod models;
pub mod query;
pub mod view;
