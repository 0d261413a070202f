use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        business::{BusinessDto, BusinessEntryDto, BusinessPayloadDto, PaginatedBusinessesDto},
    },
    server::{
        error::{AppError, Resource},
        model::business::{BusinessParams, UpdateBusinessParams},
        service::business::BusinessService,
        state::AppState,
        util::{link::RequestUrl, pagination::PaginationParams},
    },
};

/// Tag for grouping business endpoints in OpenAPI documentation
pub static BUSINESS_TAG: &str = "business";

/// Create a new business.
///
/// All six attributes are required. The response echoes the stored record with its new
/// id and a `self` link built from the request URL.
///
/// # Returns
/// - `201 Created` - Successfully created business
/// - `400 Bad Request` - At least one attribute missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/businesses",
    tag = BUSINESS_TAG,
    request_body = BusinessPayloadDto,
    responses(
        (status = 201, description = "Successfully created business", body = BusinessDto),
        (status = 400, description = "Missing required attribute", body = ErrorDto),
        (status = 500, description = "Unable to create business", body = ErrorDto)
    ),
)]
pub async fn create_business(
    State(state): State<AppState>,
    url: RequestUrl,
    payload: Result<Json<BusinessPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = BusinessParams::from_dto(payload)?;

    let service = BusinessService::new(&state.db);

    let business = service
        .create(params)
        .await
        .map_err(|e| e.during_create_of(Resource::Business))?;

    let self_link = url.child(business.id);

    Ok((StatusCode::CREATED, Json(business.into_dto(self_link))))
}

/// Get a page of businesses.
///
/// Rows are ordered by id. `next` is included only when the page is full, pointing at the
/// window that follows.
///
/// # Returns
/// - `200 OK` - Page of businesses
/// - `400 Bad Request` - `offset` or `limit` is not an integer between 0 and `i64::MAX`
#[utoipa::path(
    get,
    path = "/businesses",
    tag = BUSINESS_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved businesses", body = PaginatedBusinessesDto),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_businesses(
    State(state): State<AppState>,
    url: RequestUrl,
    pagination: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(pagination) = pagination?;
    let pagination = pagination.validate()?;

    let service = BusinessService::new(&state.db);

    let businesses = service.get_paginated(pagination).await?;

    let next = pagination
        .is_full_page(businesses.len())
        .then(|| pagination.next_link(&url.base()));

    let entries = businesses
        .into_iter()
        .map(|b| {
            let self_link = url.child(b.id);
            b.into_entry_dto(self_link)
        })
        .collect();

    Ok((StatusCode::OK, Json(PaginatedBusinessesDto { entries, next })))
}

/// Get a business by id.
///
/// # Returns
/// - `200 OK` - Business details
/// - `404 Not Found` - No business with this id
#[utoipa::path(
    get,
    path = "/businesses/{business_id}",
    tag = BUSINESS_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved business", body = BusinessDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_business(
    State(state): State<AppState>,
    url: RequestUrl,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BusinessService::new(&state.db);

    let business = service.get_by_id(business_id).await?;

    Ok((StatusCode::OK, Json(business.into_dto(url.base()))))
}

/// Replace a business.
///
/// There is no partial update: all six attributes are required. An unknown id is
/// reported before the payload is examined.
///
/// # Returns
/// - `200 OK` - Updated business
/// - `400 Bad Request` - At least one attribute missing
/// - `404 Not Found` - No business with this id
#[utoipa::path(
    put,
    path = "/businesses/{business_id}",
    tag = BUSINESS_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    request_body = BusinessPayloadDto,
    responses(
        (status = 200, description = "Successfully updated business", body = BusinessDto),
        (status = 400, description = "Missing required attribute", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_business(
    State(state): State<AppState>,
    url: RequestUrl,
    Path(business_id): Path<i32>,
    payload: Result<Json<BusinessPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = BusinessService::new(&state.db);

    service.ensure_exists(business_id).await?;

    let Json(payload) = payload?;
    let params = UpdateBusinessParams {
        id: business_id,
        attributes: BusinessParams::from_dto(payload)?,
    };

    let business = service.update(params).await?;

    Ok((StatusCode::OK, Json(business.into_dto(url.base()))))
}

/// Delete a business and, through the foreign key cascade, all of its reviews.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No business with this id
#[utoipa::path(
    delete,
    path = "/businesses/{business_id}",
    tag = BUSINESS_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted business"),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_business(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BusinessService::new(&state.db);

    service.delete(business_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get every business of an owner, unpaginated.
///
/// Each entry's `self` link is the request URL extended by the owner id, matching the
/// links existing clients already follow.
///
/// # Returns
/// - `200 OK` - List of the owner's businesses, possibly empty
#[utoipa::path(
    get,
    path = "/owners/{owner_id}/businesses",
    tag = BUSINESS_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved owner's businesses", body = Vec<BusinessEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_businesses(
    State(state): State<AppState>,
    url: RequestUrl,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BusinessService::new(&state.db);

    let businesses = service.get_by_owner(owner_id).await?;

    let entries: Vec<_> = businesses
        .into_iter()
        .map(|b| b.into_entry_dto(url.child(owner_id)))
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}
