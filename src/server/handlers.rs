//! POST /search                    search by ingredients, tags and sort key
//! GET  /recipe/:backend/:name     exact name lookup through one backend
//! GET  /recipe/:name              rejected: no backend selected

use super::SharedService;
use super::error::{ApiError, ApiResult};
use crate::error::ValidationError;
use crate::index::IndexKind;
use crate::query::{RecipeDetail, SearchRequest, SearchResults, SortKey};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;
use tracing::debug;

/// The JSON body accepted by `POST /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    pub ingredients: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub sort_by: Option<String>,
    pub data_structure: Option<String>,
    pub max_minutes: Option<u64>,
    pub min_steps: Option<usize>,
    pub max_steps: Option<usize>,
}

impl TryFrom<SearchBody> for SearchRequest {
    type Error = ValidationError;

    fn try_from(body: SearchBody) -> Result<Self, Self::Error> {
        let ingredients = body.ingredients.ok_or(ValidationError::MissingIngredients)?;
        let sort_by = body
            .sort_by
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()?
            .unwrap_or_default();
        let backend = body
            .data_structure
            .as_deref()
            .map(str::parse::<IndexKind>)
            .transpose()?;

        Ok(SearchRequest {
            ingredients,
            tags: body.tags.unwrap_or_default(),
            sort_by,
            backend,
            max_minutes: body.max_minutes,
            min_steps: body.min_steps,
            max_steps: body.max_steps,
        })
    }
}

pub async fn search(
    State(service): State<SharedService>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<Json<SearchResults>> {
    let Json(body) = body?;
    let request = SearchRequest::try_from(body)?;
    let results = service.search(&request)?;
    Ok(Json(results))
}

pub async fn recipe_detail(
    State(service): State<SharedService>,
    Path((backend, name)): Path<(String, String)>,
) -> ApiResult<Json<RecipeDetail>> {
    let backend: IndexKind = backend.parse()?;
    debug!(backend = %backend, name = %name, "Recipe lookup");
    let detail = service.recipe_detail(backend, &name)?;
    Ok(Json(detail))
}

pub async fn recipe_without_backend(Path(name): Path<String>) -> ApiError {
    debug!(name = %name, "Recipe lookup without backend");
    ValidationError::MissingBackend.into()
}
