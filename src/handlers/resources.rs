use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::dto::{CategoryResponse, ResourceListResponse, ResourceQuery, ResourceView};
use crate::error::{AppError, AppResult};
use crate::models::resource::{Category, CategoryFilter};
use crate::services::resource_filter::ResourceFilter;
use crate::AppState;

pub async fn list_resources(
    State(state): State<AppState>,
    Query(query): Query<ResourceQuery>,
) -> AppResult<Json<ResourceListResponse>> {
    query.validate()?;

    let category = match query.category.as_deref() {
        Some(raw) => raw.parse::<CategoryFilter>().map_err(AppError::Validation)?,
        None => CategoryFilter::All,
    };
    let filter = ResourceFilter::new(query.search.unwrap_or_default(), category);

    let resources: Vec<ResourceView> = filter
        .apply(&state.catalog)
        .into_iter()
        .map(ResourceView::from)
        .collect();

    tracing::debug!(
        search = %filter.search,
        matches = resources.len(),
        "Resource catalog filtered"
    );

    Ok(Json(ResourceListResponse {
        total: resources.len(),
        filters_active: filter.is_active(),
        resources,
    }))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryResponse>> {
    let mut categories = vec![CategoryResponse {
        id: "all",
        label: "All Resources",
        count: state.catalog.len(),
    }];
    categories.extend(Category::ALL.into_iter().map(|c| CategoryResponse {
        id: c.as_str(),
        label: c.label(),
        count: state.catalog.iter().filter(|r| r.category == c).count(),
    }));
    Json(categories)
}

pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<ResourceView>> {
    state
        .catalog
        .iter()
        .find(|r| r.id == id)
        .map(|r| Json(ResourceView::from(r)))
        .ok_or(AppError::NotFound("Resource not found".into()))
}
