//! Shopping List Domain Module
//!
//! This module contains all shopping list business logic, including:
//! - Domain models (Item, patch payload, responses)
//! - Application state and the in-memory item store
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Item, ItemPatch};
pub use store::{AppState, ItemStore, SharedState};
