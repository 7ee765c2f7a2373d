//! Complaint opportunity scoring for product-feedback buckets.
//!
//! Datasets (built-in or synthesized from uploaded reviews) are scored per
//! bucket, ranked, and turned into templated product concepts. Everything
//! below `api` and `render` is pure and synchronous.

pub mod api;
pub mod bucket;
pub mod catalog;
pub mod classifier;
pub mod concepts;
pub mod config;
pub mod csv_input;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod render;
pub mod scoring;
pub mod synthesis;
pub mod upload;
