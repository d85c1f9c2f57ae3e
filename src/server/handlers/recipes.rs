// src/server/handlers/recipes.rs
//! Recipe collection endpoints
//!
//! CRUD surface over the in-memory recipe store. Request bodies are taken
//! as raw JSON and validated field by field, so every malformed body maps
//! to a 400 naming the offending field rather than a generic 422.

use crate::error::Error;
use crate::recipe::{Recipe, RecipeId};
use crate::server::routes::ApiError;
use crate::server::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// GET /recipes
///
/// Returns every stored recipe as a JSON array, ordered by id.
pub async fn list_recipes(State(state): State<SharedState>) -> Json<Vec<Recipe>> {
    let store = state.store.read().await;
    state.metrics.record_list();
    Json(store.list())
}

/// POST /recipes
///
/// Creates a recipe from `{name, ingredients}`. The id is assigned by the
/// store; any id supplied in the body is ignored. Returns 201 with the
/// stored record.
pub async fn create_recipe(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let (name, ingredients) = match recipe_fields(&body) {
        Ok(fields) => fields,
        Err(err) => return reject(&state, err),
    };

    let mut store = state.store.write().await;
    let recipe = store.create(name, ingredients);
    state.metrics.record_create();
    tracing::debug!(id = recipe.id, name = %recipe.name, "recipe created");

    (StatusCode::CREATED, Json(recipe)).into_response()
}

/// PUT /recipes/:id
///
/// Replaces the recipe stored under the path id with the body's name and
/// ingredients. The body must carry the same id as the path. Returns 204
/// on success, 404 if the id is unknown, 400 if the body disagrees with
/// the path or fails validation.
pub async fn replace_recipe(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let claimed_id = match body_id(&body) {
        Ok(id) => id,
        Err(err) => return reject(&state, err),
    };
    let (name, ingredients) = match recipe_fields(&body) {
        Ok(fields) => fields,
        Err(err) => return reject(&state, err),
    };

    // A path segment that is not a valid id cannot address any recipe.
    let id: RecipeId = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => return reject(&state, Error::not_found(&raw_id)),
    };

    let mut store = state.store.write().await;
    match store.replace(id, claimed_id, name, ingredients) {
        Ok(()) => {
            state.metrics.record_replace();
            tracing::debug!(id, "recipe replaced");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => reject(&state, err),
    }
}

/// DELETE /recipes/:id
///
/// Removes the recipe if present. Deletion is idempotent: absent ids and
/// path segments that are not valid ids still return 204.
pub async fn delete_recipe(State(state): State<SharedState>, Path(raw_id): Path<String>) -> StatusCode {
    let removed = match raw_id.parse::<RecipeId>() {
        Ok(id) => {
            let mut store = state.store.write().await;
            store.remove(id)
        }
        Err(_) => false,
    };

    state.metrics.record_delete(removed);
    if removed {
        tracing::debug!(id = %raw_id, "recipe deleted");
    }

    StatusCode::NO_CONTENT
}

/// Extract and validate the `name` and `ingredients` fields of a request
/// body. The error carries the offending field so 400 responses name it.
fn recipe_fields(body: &Value) -> Result<(String, Vec<String>), Error> {
    let name = match body.get("name") {
        None => return Err(Error::MissingField("name")),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::String(_)) => {
            return Err(Error::InvalidField {
                field: "name",
                reason: "must not be empty",
            })
        }
        Some(_) => {
            return Err(Error::InvalidField {
                field: "name",
                reason: "must be a string",
            })
        }
    };

    let ingredients = match body.get("ingredients") {
        None => return Err(Error::MissingField("ingredients")),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    _ => {
                        return Err(Error::InvalidField {
                            field: "ingredients",
                            reason: "must be an array of strings",
                        })
                    }
                }
            }
            out
        }
        Some(_) => {
            return Err(Error::InvalidField {
                field: "ingredients",
                reason: "must be an array of strings",
            })
        }
    };

    Ok((name, ingredients))
}

/// Extract the id a replace request claims in its body.
fn body_id(body: &Value) -> Result<RecipeId, Error> {
    match body.get("id") {
        None => Err(Error::MissingField("id")),
        Some(value) => value.as_u64().ok_or(Error::InvalidField {
            field: "id",
            reason: "must be an unsigned integer",
        }),
    }
}

/// Record the failure in the server metrics, then render it.
fn reject(state: &SharedState, err: Error) -> Response {
    if matches!(err, Error::NotFound(_)) {
        state.metrics.record_not_found();
    } else {
        state.metrics.record_validation_failure();
    }
    tracing::debug!(error = %err, "request rejected");
    ApiError::from(err).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_fields_happy_path() {
        let body = json!({"name": "hot tea", "ingredients": ["tea bag", "hot water"]});
        let (name, ingredients) = recipe_fields(&body).unwrap();
        assert_eq!(name, "hot tea");
        assert_eq!(ingredients, vec!["tea bag", "hot water"]);
    }

    #[test]
    fn test_missing_name_names_the_field() {
        let body = json!({"ingredients": ["water"]});
        let err = recipe_fields(&body).unwrap_err();
        assert_eq!(err, Error::MissingField("name"));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_non_string_name_rejected() {
        let body = json!({"name": 42, "ingredients": []});
        let err = recipe_fields(&body).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "name", .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let body = json!({"name": "", "ingredients": []});
        let err = recipe_fields(&body).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "name", .. }));
    }

    #[test]
    fn test_missing_ingredients_rejected() {
        let body = json!({"name": "toast"});
        let err = recipe_fields(&body).unwrap_err();
        assert_eq!(err, Error::MissingField("ingredients"));
    }

    #[test]
    fn test_mixed_type_ingredients_rejected() {
        let body = json!({"name": "toast", "ingredients": ["bread", 7]});
        let err = recipe_fields(&body).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "ingredients", .. }));
    }

    #[test]
    fn test_empty_ingredient_list_is_valid() {
        let body = json!({"name": "water", "ingredients": []});
        let (_, ingredients) = recipe_fields(&body).unwrap();
        assert!(ingredients.is_empty());
    }

    #[test]
    fn test_non_object_body_reports_name() {
        let err = recipe_fields(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err, Error::MissingField("name"));
    }

    #[test]
    fn test_body_id_must_be_unsigned() {
        assert_eq!(body_id(&json!({"id": 7})).unwrap(), 7);
        assert_eq!(body_id(&json!({})).unwrap_err(), Error::MissingField("id"));
        assert!(matches!(
            body_id(&json!({"id": -3})).unwrap_err(),
            Error::InvalidField { field: "id", .. }
        ));
        assert!(matches!(
            body_id(&json!({"id": "7"})).unwrap_err(),
            Error::InvalidField { field: "id", .. }
        ));
    }
}
