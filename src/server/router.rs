use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        business::{BusinessDto, BusinessEntryDto, BusinessPayloadDto, PaginatedBusinessesDto},
        review::{
            CreateReviewPayloadDto, CreatedReviewDto, ReviewDto, UpdateReviewPayloadDto,
            UpdatedReviewDto, UserReviewDto,
        },
    },
    server::{
        controller::{
            business::{
                create_business, delete_business, get_business, get_businesses,
                get_owner_businesses, update_business,
            },
            index::index,
            review::{create_review, delete_review, get_review, get_user_reviews, update_review},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Reviewboard API", description = "Businesses and their reviews"),
    paths(
        crate::server::controller::index::index,
        crate::server::controller::business::create_business,
        crate::server::controller::business::get_businesses,
        crate::server::controller::business::get_business,
        crate::server::controller::business::update_business,
        crate::server::controller::business::delete_business,
        crate::server::controller::business::get_owner_businesses,
        crate::server::controller::review::create_review,
        crate::server::controller::review::get_review,
        crate::server::controller::review::update_review,
        crate::server::controller::review::delete_review,
        crate::server::controller::review::get_user_reviews,
    ),
    components(schemas(
        ErrorDto,
        BusinessPayloadDto,
        BusinessDto,
        BusinessEntryDto,
        PaginatedBusinessesDto,
        CreateReviewPayloadDto,
        CreatedReviewDto,
        ReviewDto,
        UpdateReviewPayloadDto,
        UpdatedReviewDto,
        UserReviewDto,
    )),
    tags(
        (name = "business", description = "Business listings"),
        (name = "review", description = "User reviews of businesses")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/businesses", get(get_businesses).post(create_business))
        .route(
            "/businesses/{business_id}",
            get(get_business)
                .put(update_business)
                .delete(delete_business),
        )
        .route("/owners/{owner_id}/businesses", get(get_owner_businesses))
        .route("/reviews", post(create_review))
        .route(
            "/reviews/{review_id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/users/{user_id}/reviews", get(get_user_reviews))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
