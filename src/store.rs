// src/store.rs
//! In-memory recipe collection
//!
//! Owns every stored recipe and the id counter. All four collection
//! operations (list, create, replace, remove) go through here; the server
//! keeps the store behind a write lock so each call is atomic with respect
//! to concurrent requests.

use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeId};
use std::collections::BTreeMap;

/// The recipe collection
///
/// Backed by a `BTreeMap` so `list` returns recipes in stable id order,
/// which (ids being monotonic) is creation order.
#[derive(Debug)]
pub struct RecipeStore {
    recipes: BTreeMap<RecipeId, Recipe>,
    /// Next id to assign; advances under the same lock as the insert, so
    /// ids stay collision-free under concurrent creates and are never
    /// reused after removals
    next_id: RecipeId,
}

impl RecipeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            recipes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the two starter recipes present at service
    /// start
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.create(
            "scrambled eggs".to_string(),
            vec![
                "eggs".to_string(),
                "butter".to_string(),
                "salt".to_string(),
            ],
        );
        store.create(
            "french toast".to_string(),
            vec![
                "bread".to_string(),
                "eggs".to_string(),
                "milk".to_string(),
                "cinnamon".to_string(),
            ],
        );
        store
    }

    /// All recipes in id (= creation) order
    pub fn list(&self) -> Vec<Recipe> {
        self.recipes.values().cloned().collect()
    }

    /// Store a new recipe under a freshly assigned id and return the
    /// stored record
    pub fn create(&mut self, name: String, ingredients: Vec<String>) -> Recipe {
        let id = self.next_id;
        self.next_id += 1;

        let recipe = Recipe {
            id,
            name,
            ingredients,
        };
        self.recipes.insert(id, recipe.clone());
        recipe
    }

    /// Replace a stored recipe's content in place
    ///
    /// `id` comes from the request path, `body_id` from the request body.
    /// The target must exist and both ids must agree; the existence check
    /// runs first, so an absent target reports not-found even when the body
    /// id also disagrees. The identifier itself never changes.
    pub fn replace(
        &mut self,
        id: RecipeId,
        body_id: RecipeId,
        name: String,
        ingredients: Vec<String>,
    ) -> Result<()> {
        let recipe = self
            .recipes
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(id))?;

        if body_id != id {
            return Err(Error::IdMismatch {
                path: id,
                body: body_id,
            });
        }

        recipe.name = name;
        recipe.ingredients = ingredients;
        Ok(())
    }

    /// Remove a recipe if present
    ///
    /// Returns whether a record was actually removed. Absence is not an
    /// error: delete is idempotent.
    pub fn remove(&mut self, id: RecipeId) -> bool {
        self.recipes.remove(&id).is_some()
    }

    /// Number of stored recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}
