//! Review domain models and parameters.

use crate::{
    model::review::{
        CreateReviewPayloadDto, CreatedReviewDto, ReviewDto, UpdateReviewPayloadDto,
        UpdatedReviewDto, UserReviewDto,
    },
    server::error::AppError,
};

/// A review as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub business_id: i32,
    pub stars: i32,
    pub review_text: Option<String>,
}

impl Review {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.review_id,
            user_id: entity.user_id,
            business_id: entity.business_id,
            stars: entity.stars,
            review_text: entity.review_text,
        }
    }

    /// Converts to the raw record DTO returned by `GET /reviews/{id}`.
    pub fn into_dto(self, self_link: String) -> ReviewDto {
        ReviewDto {
            review_id: self.id,
            user_id: self.user_id,
            business_id: self.business_id,
            stars: self.stars,
            review_text: self.review_text,
            self_link,
        }
    }

    /// Converts to the update response, referencing the business by link.
    pub fn into_updated_dto(self, business: String, self_link: String) -> UpdatedReviewDto {
        UpdatedReviewDto {
            review_id: self.id,
            user_id: self.user_id,
            stars: self.stars,
            review_text: self.review_text,
            business,
            self_link,
        }
    }

    /// Converts to a user listing entry, referencing the business by link.
    pub fn into_user_dto(self, business: String, self_link: String) -> UserReviewDto {
        UserReviewDto {
            id: self.id,
            user_id: self.user_id,
            stars: self.stars,
            review_text: self.review_text,
            business,
            self_link,
        }
    }
}

/// Validated input for creating a review.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewParams {
    pub user_id: i32,
    pub business_id: i32,
    pub stars: i32,
    /// `None` when the client did not send `review_text` at all.
    pub review_text: Option<Option<String>>,
}

impl CreateReviewParams {
    /// Validates that `user_id`, `business_id` and `stars` are present.
    pub fn from_dto(dto: CreateReviewPayloadDto) -> Result<Self, AppError> {
        match dto {
            CreateReviewPayloadDto {
                user_id: Some(user_id),
                business_id: Some(business_id),
                stars: Some(stars),
                review_text,
            } => Ok(Self {
                user_id,
                business_id,
                stars,
                review_text,
            }),
            _ => Err(AppError::Validation),
        }
    }
}

/// A freshly created review together with whether the client supplied its text.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedReview {
    pub review: Review,
    pub text_supplied: bool,
}

impl CreatedReview {
    /// Converts to the create response, echoing `review_text` only when it was supplied.
    pub fn into_dto(self, self_link: String) -> CreatedReviewDto {
        let review = self.review;
        CreatedReviewDto {
            id: review.id,
            user_id: review.user_id,
            business_id: review.business_id,
            stars: review.stars,
            review_text: self.text_supplied.then_some(review.review_text),
            self_link,
        }
    }
}

/// Validated input for updating a review.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReviewParams {
    pub id: i32,
    pub stars: i32,
    /// `None` leaves the stored text untouched; `Some(None)` clears it.
    pub review_text: Option<Option<String>>,
}

impl UpdateReviewParams {
    /// Validates that `stars` is present.
    pub fn from_dto(id: i32, dto: UpdateReviewPayloadDto) -> Result<Self, AppError> {
        let stars = dto.stars.ok_or(AppError::Validation)?;

        Ok(Self {
            id,
            stars,
            review_text: dto.review_text,
        })
    }
}
