//! HTTP server module for the GEA backend.
//!
//! This module provides an axum-based HTTP server that exposes the dashboard
//! data layer as a REST API. It reuses the service layer and the loaded data
//! context; the frontend is responsible for all visual encoding.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
