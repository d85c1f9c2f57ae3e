// src/lib.rs

//! Pantry - Recipe collection service
//!
//! A small HTTP service that keeps a collection of recipes in memory and
//! serves it through a JSON REST API.
//!
//! # Architecture
//!
//! - In-memory store: the whole collection lives in one `RecipeStore`
//! - Atomic mutations: every write holds the store's write lock end to end
//! - Boundary validation: request bodies are checked field by field so
//!   malformed input always maps to a 400 naming the offending field

mod error;
pub mod recipe;
pub mod server;
pub mod store;

pub use error::{Error, Result};
pub use recipe::{Recipe, RecipeId};
pub use store::RecipeStore;
