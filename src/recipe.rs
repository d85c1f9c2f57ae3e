// src/recipe.rs
//! The recipe entity

use serde::{Deserialize, Serialize};

/// Unique recipe identifier, assigned by the store on creation
pub type RecipeId = u64;

/// A stored recipe
///
/// Serializes to exactly `{id, name, ingredients}`; clients never see any
/// other field. The id is immutable for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Service-assigned identifier
    pub id: RecipeId,
    /// Display name, non-empty
    pub name: String,
    /// Ordered ingredient list (may be empty)
    pub ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_is_exactly_three_keys() {
        let recipe = Recipe {
            id: 7,
            name: "hot tea".to_string(),
            ingredients: vec!["tea bag".to_string(), "hot water".to_string()],
        };

        let value = serde_json::to_value(&recipe).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["id", "ingredients", "name"]);
    }

    #[test]
    fn test_ingredient_order_survives_serialization() {
        let recipe = Recipe {
            id: 1,
            name: "hot tea".to_string(),
            ingredients: vec![
                "tea bag".to_string(),
                "hot water".to_string(),
                "honey".to_string(),
            ],
        };

        let json = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recipe);
    }
}
