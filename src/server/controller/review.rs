use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{
            CreateReviewPayloadDto, CreatedReviewDto, ReviewDto, UpdateReviewPayloadDto,
            UpdatedReviewDto, UserReviewDto,
        },
    },
    server::{
        error::{AppError, Resource},
        model::review::{CreateReviewParams, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
        util::link::RequestUrl,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

const BUSINESSES: &str = "businesses";
const REVIEWS: &str = "reviews";

/// Create a review of a business.
///
/// `user_id`, `business_id` and `stars` are required; `review_text` is optional and is
/// echoed only when supplied.
///
/// # Returns
/// - `201 Created` - Successfully created review
/// - `400 Bad Request` - At least one required attribute missing
/// - `404 Not Found` - The referenced business does not exist
/// - `409 Conflict` - The user already reviewed this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewPayloadDto,
    responses(
        (status = 201, description = "Successfully created review", body = CreatedReviewDto),
        (status = 400, description = "Missing required attribute", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 409, description = "User already reviewed this business", body = ErrorDto),
        (status = 500, description = "Unable to create review", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    url: RequestUrl,
    payload: Result<Json<CreateReviewPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateReviewParams::from_dto(payload)?;

    let service = ReviewService::new(&state.db);

    let created = service
        .create(params)
        .await
        .map_err(|e| e.during_create_of(Resource::Review))?;

    let self_link = url.child(created.review.id);

    Ok((StatusCode::CREATED, Json(created.into_dto(self_link))))
}

/// Get a review by id.
///
/// # Returns
/// - `200 OK` - The stored review
/// - `404 Not Found` - No review with this id
#[utoipa::path(
    get,
    path = "/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    url: RequestUrl,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let review = service.get_by_id(review_id).await?;

    Ok((StatusCode::OK, Json(review.into_dto(url.base()))))
}

/// Update a review.
///
/// `stars` is required; `review_text` is updated only when present and cleared when sent
/// as `null`. An unknown id is reported before the payload is examined.
///
/// # Returns
/// - `200 OK` - Updated review with a link to its business
/// - `400 Bad Request` - `stars` missing
/// - `404 Not Found` - No review with this id
#[utoipa::path(
    put,
    path = "/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    request_body = UpdateReviewPayloadDto,
    responses(
        (status = 200, description = "Successfully updated review", body = UpdatedReviewDto),
        (status = 400, description = "Missing required attribute", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    url: RequestUrl,
    Path(review_id): Path<i32>,
    payload: Result<Json<UpdateReviewPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    service.ensure_exists(review_id).await?;

    let Json(payload) = payload?;
    let params = UpdateReviewParams::from_dto(review_id, payload)?;

    let review = service.update(params).await?;

    let business = url.resource(BUSINESSES, review.business_id);
    let self_link = url.resource(REVIEWS, review.id);

    Ok((
        StatusCode::OK,
        Json(review.into_updated_dto(business, self_link)),
    ))
}

/// Delete a review.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No review with this id
#[utoipa::path(
    delete,
    path = "/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted review"),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    service.delete(review_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get every review written by a user, unpaginated.
///
/// # Returns
/// - `200 OK` - List of the user's reviews, possibly empty
#[utoipa::path(
    get,
    path = "/users/{user_id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user's reviews", body = Vec<UserReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_reviews(
    State(state): State<AppState>,
    url: RequestUrl,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews = service.get_by_user(user_id).await?;

    let entries: Vec<_> = reviews
        .into_iter()
        .map(|r| {
            let business = url.resource(BUSINESSES, r.business_id);
            let self_link = url.resource(REVIEWS, r.id);
            r.into_user_dto(business, self_link)
        })
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}
