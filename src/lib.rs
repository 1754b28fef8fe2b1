//! # GEA Rust Backend
//!
//! Analytics engine for the Generation and Emissions dashboard.
//!
//! This crate provides a Rust backend for the Generation & Emissions Analytics
//! (GEA) dashboard. It loads the published daily and hourly tables of a
//! regional electricity dataset, aggregates them into the structures the two
//! report views need, and exposes them to the rendering frontend via a REST
//! API built on Axum.
//!
//! ## Features
//!
//! - **Data Loading**: Parse the daily and hourly CSV exports with fail-fast
//!   validation of dates and numeric columns
//! - **Aggregation**: Hour-by-month mean matrices and year-filtered series
//! - **View Selection**: Map a (route, year) pair to the exact payload the
//!   active report view renders
//! - **Session Filtering**: Shared route/year selection with synchronous
//!   push-based recomputation
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Dataset records, the year catalog, and the read-only context
//! - [`parsing`]: CSV loaders for the daily and hourly tables
//! - [`services`]: Aggregation, filtering, view selection, and session state
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{DataFormatError, InvalidYearError};
